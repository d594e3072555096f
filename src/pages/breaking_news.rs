//! Breaking news: a fixed category with a wider page size.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::error_message::ErrorMessage;
use crate::components::news_list::NewsList;
use crate::components::pagination::Pagination;
use crate::net::client::ApiClient;
use crate::net::news;
use crate::net::types::NewsQuery;

const SLUG: &str = "breaking-news";
const PAGE_SIZE: u32 = 12;

#[component]
pub fn BreakingNewsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let page = RwSignal::new(1_u32);

    let fetch_client = client.clone();
    let listing = LocalResource::new(move || {
        let client = fetch_client.clone();
        let query = NewsQuery {
            page: Some(page.get()),
            ..NewsQuery::latest(PAGE_SIZE)
        };
        async move { news::fetch_news_by_category(&client, SLUG, &query).await }
    });

    view! {
        <Title text="Breaking News | Newswire"/>

        <div class="breaking-news-page">
            <h1 class="breaking-news-page__title">"Breaking News"</h1>

            <Suspense fallback=move || {
                view! { <p class="breaking-news-page__loading">"Loading articles..."</p> }
            }>
                {move || {
                    listing
                        .get()
                        .map(|envelope| {
                            if envelope.success {
                                let items = envelope.data.unwrap_or_default();
                                let pages = envelope.pagination.map_or(1, |p| p.pages);
                                view! {
                                    <div class="breaking-news-page__results">
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
                                        "Breaking news is unavailable right now.".to_owned()
                                    });
                                view! { <ErrorMessage message/> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
