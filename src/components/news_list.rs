//! Grid of article cards with an empty state.

use leptos::prelude::*;

use super::news_card::NewsCard;
use crate::net::types::News;

#[component]
pub fn NewsList(items: Vec<News>) -> impl IntoView {
    if items.is_empty() {
        view! { <p class="news-list__empty">"No articles here yet."</p> }.into_any()
    } else {
        view! {
            <div class="news-list">
                {items
                    .into_iter()
                    .map(|news| view! { <NewsCard news/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    }
}
