//! Category listing page with sorting and pagination.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::error_message::ErrorMessage;
use crate::components::news_list::NewsList;
use crate::components::pagination::Pagination;
use crate::components::sorting_filter::SortingFilter;
use crate::net::client::ApiClient;
use crate::net::news;
use crate::net::types::{NewsQuery, SortOrder};
use crate::util::category::display_name;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();

    let page = RwSignal::new(1_u32);
    let sort = RwSignal::new("publishedAt".to_owned());
    let order = RwSignal::new(SortOrder::Desc);

    // Changing category resets to the first page.
    Effect::new(move || {
        let _ = slug();
        page.set(1);
    });

    let fetch_client = client.clone();
    let listing = LocalResource::new(move || {
        let client = fetch_client.clone();
        let slug = slug();
        let query = NewsQuery {
            page: Some(page.get()),
            limit: Some(PAGE_SIZE),
            sort: Some(sort.get()),
            order: Some(order.get()),
            ..NewsQuery::default()
        };
        async move { news::fetch_news_by_category(&client, &slug, &query).await }
    });

    let title = move || format!("{} | Newswire", display_name(&slug()));

    view! {
        <Title text=title/>

        <div class="category-page">
            <header class="category-page__header">
                <h1 class="category-page__title">{move || display_name(&slug())}</h1>
                <SortingFilter sort=sort order=order/>
            </header>

            <Suspense fallback=move || {
                view! { <p class="category-page__loading">"Loading articles..."</p> }
            }>
                {move || {
                    listing
                        .get()
                        .map(|envelope| {
                            if envelope.success {
                                let items = envelope.data.unwrap_or_default();
                                let pages = envelope.pagination.map_or(1, |p| p.pages);
                                view! {
                                    <div class="category-page__results">
                                        <NewsList items/>
                                        <Pagination
                                            page=page.get()
                                            pages=pages
                                            on_page=Callback::new(move |n| page.set(n))
                                        />
                                    </div>
                                }
                                    .into_any()
                            } else {
                                let message = envelope
                                    .message
                                    .unwrap_or_else(|| {
                                        "This category is unavailable right now.".to_owned()
                                    });
                                view! { <ErrorMessage message/> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
