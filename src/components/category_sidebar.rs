//! Sidebar listing all browsable categories.

use leptos::prelude::*;

use super::error_message::ErrorMessage;
use crate::net::client::ApiClient;
use crate::net::news;

#[component]
pub fn CategorySidebar() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let categories = LocalResource::new(move || {
        let client = client.clone();
        async move { news::fetch_categories(&client).await }
    });

    view! {
        <aside class="category-sidebar">
            <h2 class="category-sidebar__title">"Categories"</h2>
            <Suspense fallback=move || {
                view! { <p class="category-sidebar__loading">"Loading categories..."</p> }
            }>
                {move || {
                    categories
                        .get()
                        .map(|envelope| {
                            if envelope.success {
                                let items = envelope.data.unwrap_or_default();
                                view! {
                                    <ul class="category-sidebar__list">
                                        {items
                                            .into_iter()
                                            .map(|category| {
                                                view! {
                                                    <li>
                                                        <a href=format!(
                                                            "/category/{}",
                                                            category.slug,
                                                        )>{category.name}</a>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                                    .into_any()
                            } else {
                                let message = envelope
                                    .message
                                    .unwrap_or_else(|| "Categories are unavailable.".to_owned());
                                view! { <ErrorMessage message/> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </aside>
    }
}
