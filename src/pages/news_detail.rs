//! Article detail: full body, reactions, comments, and related articles.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::comment_section::CommentSection;
use crate::components::error_message::ErrorMessage;
use crate::components::news_card::NewsCard;
use crate::components::reaction_buttons::ReactionButtons;
use crate::net::client::ApiClient;
use crate::net::news;
use crate::net::types::{News, NewsQuery};
use crate::util::category::display_name;
use crate::util::date;

#[component]
pub fn NewsDetailPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let params = use_params_map();
    let id = move || {
        params
            .read()
            .get("id")
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or_default()
    };

    let fetch_client = client.clone();
    let article = LocalResource::new(move || {
        let client = fetch_client.clone();
        let id = id();
        async move { news::fetch_news_by_id(&client, id).await }
    });

    view! {
        <div class="news-detail-page">
            <Suspense fallback=move || {
                view! { <p class="news-detail-page__loading">"Loading article..."</p> }
            }>
                {move || {
                    article
                        .get()
                        .map(|envelope| {
                            match envelope.into_data() {
                                Some(news) => view! { <ArticleBody news/> }.into_any(),
                                None => {
                                    let message = "This article could not be loaded.".to_owned();
                                    view! {
                                        <div class="news-detail-page__missing">
                                            <ErrorMessage message/>
                                            <a class="news-detail-page__back" href="/">
                                                "Back to the front page"
                                            </a>
                                        </div>
                                    }
                                        .into_any()
                                }
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn ArticleBody(news: News) -> impl IntoView {
    let title = news.title.clone();
    let published = date::format_full(&news.published_at);
    let paragraphs: Vec<String> = news
        .content
        .split("\n\n")
        .filter(|part| !part.trim().is_empty())
        .map(str::to_owned)
        .collect();

    view! {
        <Title text=format!("{} | Newswire", news.title)/>

        <div class="news-detail">
            <article class="news-detail__article">
                <header class="news-detail__header">
                    {news
                        .category
                        .clone()
                        .map(|slug| {
                            let label = display_name(&slug);
                            view! {
                                <a class="news-detail__category" href=format!("/category/{slug}")>
                                    {label}
                                </a>
                            }
                        })}
                    <h1 class="news-detail__title">{title}</h1>
                    <div class="news-detail__meta">
                        {news
                            .author
                            .clone()
                            .map(|author| view! { <span class="news-detail__author">{author}</span> })}
                        {news
                            .source
                            .clone()
                            .map(|source| view! { <span class="news-detail__source">{source}</span> })}
                        <span class="news-detail__date">{published}</span>
                    </div>
                </header>

                {news
                    .image_url
                    .clone()
                    .map(|url| view! { <img class="news-detail__image" src=url alt=""/> })}

                <div class="news-detail__content">
                    {paragraphs
                        .into_iter()
                        .map(|paragraph| view! { <p>{paragraph}</p> })
                        .collect::<Vec<_>>()}
                </div>

                <ReactionButtons news_id=news.id/>
                <CommentSection news_id=news.id/>
            </article>

            {news
                .category
                .clone()
                .map(|slug| view! { <RelatedNews category=slug exclude=news.id/> })}
        </div>
    }
}

/// Sidebar of recent articles from the same category, excluding the one
/// being read.
#[component]
fn RelatedNews(category: String, exclude: u64) -> impl IntoView {
    let client = expect_context::<ApiClient>();

    let related = LocalResource::new(move || {
        let client = client.clone();
        let category = category.clone();
        async move { news::fetch_news_by_category(&client, &category, &NewsQuery::latest(5)).await }
    });

    view! {
        <aside class="related-news">
            <h2 class="related-news__title">"Related News"</h2>
            <Suspense fallback=move || {
                view! { <p class="related-news__loading">"Loading..."</p> }
            }>
                {move || {
                    related
                        .get()
                        .map(|envelope| {
                            let items: Vec<News> = envelope
                                .into_data()
                                .unwrap_or_default()
                                .into_iter()
                                .filter(|news| news.id != exclude)
                                .take(4)
                                .collect();
                            items
                                .into_iter()
                                .map(|news| view! { <NewsCard news/> })
                                .collect::<Vec<_>>()
                        })
                }}
            </Suspense>
        </aside>
    }
}
