//! Front page: featured hero, latest grid, popular list, and the category
//! sidebar.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::category_sidebar::CategorySidebar;
use crate::components::error_message::ErrorMessage;
use crate::components::news_card::NewsCard;
use crate::components::news_list::NewsList;
use crate::net::client::ApiClient;
use crate::net::news;
use crate::net::types::{News, NewsQuery};
use crate::util::date;
use crate::util::text;

#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let featured_client = client.clone();
    let featured = LocalResource::new(move || {
        let client = featured_client.clone();
        async move { news::fetch_news(&client, &NewsQuery::latest(3)).await }
    });

    let latest_client = client.clone();
    let latest = LocalResource::new(move || {
        let client = latest_client.clone();
        async move { news::fetch_news(&client, &NewsQuery::latest(6)).await }
    });

    view! {
        <Title text="Newswire | Your address for current news"/>

        <div class="home-page">
            <section class="home-page__hero">
                <Suspense fallback=move || {
                    view! { <p class="home-page__loading">"Loading headlines..."</p> }
                }>
                    {move || {
                        featured
                            .get()
                            .map(|envelope| {
                                if envelope.success {
                                    let items = envelope.data.unwrap_or_default();
                                    view! { <FeaturedHero items/> }.into_any()
                                } else {
                                    let message = envelope
                                        .message
                                        .unwrap_or_else(|| "Headlines are unavailable.".to_owned());
                                    view! { <ErrorMessage message/> }.into_any()
                                }
                            })
                    }}
                </Suspense>
            </section>

            <div class="home-page__columns">
                <section class="home-page__latest">
                    <h2 class="home-page__section-title">"Latest News"</h2>
                    <Suspense fallback=move || {
                        view! { <p class="home-page__loading">"Loading latest news..."</p> }
                    }>
                        {move || {
                            latest
                                .get()
                                .map(|envelope| {
                                    if envelope.success {
                                        view! {
                                            <NewsList items=envelope.data.unwrap_or_default()/>
                                        }
                                            .into_any()
                                    } else {
                                        let message = envelope
                                            .message
                                            .unwrap_or_else(|| {
                                                "The latest news is unavailable.".to_owned()
                                            });
                                        view! { <ErrorMessage message/> }.into_any()
                                    }
                                })
                        }}
                    </Suspense>
                </section>

                <CategorySidebar/>
            </div>
        </div>
    }
}

/// Hero block: the newest article large, the next two as side stories.
#[component]
fn FeaturedHero(items: Vec<News>) -> impl IntoView {
    let mut items = items.into_iter();
    let lead = items.next();
    let rest: Vec<News> = items.collect();

    view! {
        <div class="featured-hero">
            {lead
                .map(|news| {
                    let href = format!("/news/{}", news.id);
                    let published = date::format_relative(&news.published_at, date::now());
                    let preview = text::truncate(&news.content, 240);
                    view! {
                        <article class="featured-hero__lead">
                            {news
                                .image_url
                                .clone()
                                .map(|url| {
                                    view! { <img class="featured-hero__image" src=url alt=""/> }
                                })}
                            <h1 class="featured-hero__title">
                                <a href=href>{news.title.clone()}</a>
                            </h1>
                            <p class="featured-hero__preview">{preview}</p>
                            <span class="featured-hero__time">{published}</span>
                        </article>
                    }
                })}
            <div class="featured-hero__side">
                {rest
                    .into_iter()
                    .map(|news| view! { <NewsCard news/> })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
