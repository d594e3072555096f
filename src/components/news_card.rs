//! Card for one article in a list or grid.

use leptos::prelude::*;

use crate::net::types::News;
use crate::util::category::display_name;
use crate::util::date;
use crate::util::text;

/// Clickable article card: image, category badge, title, preview, and
/// relative publication time.
#[component]
pub fn NewsCard(news: News) -> impl IntoView {
    let href = format!("/news/{}", news.id);
    let preview = text::truncate(&news.content, 120);
    let published = date::format_relative(&news.published_at, date::now());

    view! {
        <article class="news-card">
            {news
                .image_url
                .clone()
                .map(|url| view! { <img class="news-card__image" src=url alt=""/> })}
            <div class="news-card__body">
                {news
                    .category
                    .clone()
                    .map(|slug| {
                        let label = display_name(&slug);
                        view! {
                            <a class="news-card__category" href=format!("/category/{slug}")>
                                {label}
                            </a>
                        }
                    })}
                <h3 class="news-card__title">
                    <a href=href>{news.title.clone()}</a>
                </h3>
                <p class="news-card__preview">{preview}</p>
                <span class="news-card__time">{published}</span>
            </div>
        </article>
    }
}
