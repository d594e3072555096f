//! Emoji reaction bar for an article.
//!
//! Anonymous readers see the tallies and a sign-in hint; a logged-in
//! reader's own reaction is highlighted, clicking it again withdraws it,
//! clicking another kind replaces it.

use leptos::prelude::*;

use crate::net::client::ApiClient;
use crate::net::reactions;
use crate::net::types::{ReactionCount, ReactionType};
use crate::state::session::SessionState;

#[component]
pub fn ReactionButtons(news_id: u64) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let refresh = RwSignal::new(0_u32);

    let fetch_client = client.clone();
    let data = LocalResource::new(move || {
        let client = fetch_client.clone();
        refresh.track();
        let authenticated = session.with(SessionState::is_authenticated);
        async move {
            let counts = reactions::fetch_reactions(&client, news_id)
                .await
                .into_data()
                .unwrap_or_default();
            let mine = if authenticated {
                reactions::fetch_user_reaction(&client, news_id)
                    .await
                    .into_data()
                    .map(|reaction| reaction.kind)
            } else {
                None
            };
            (counts, mine)
        }
    });

    let react = {
        let client = client.clone();
        move |kind: ReactionType| {
            let client = client.clone();
            let mine = data.get().and_then(|(_, mine)| mine);
            leptos::task::spawn_local(async move {
                if mine == Some(kind) {
                    reactions::remove_reaction(&client, news_id).await;
                } else {
                    reactions::set_reaction(&client, news_id, kind).await;
                }
                refresh.update(|n| *n += 1);
            });
        }
    };

    view! {
        <div class="reaction-bar">
            <Suspense fallback=move || view! { <p class="reaction-bar__loading">"..."</p> }>
                {move || {
                    let react = react.clone();
                    data.get()
                        .map(|(counts, mine)| {
                            view! {
                                <div class="reaction-bar__buttons">
                                    {ReactionType::ALL
                                        .into_iter()
                                        .map(|kind| {
                                            let react = react.clone();
                                            let count = count_for(&counts, kind);
                                            let class = if mine == Some(kind) {
                                                "reaction-bar__button reaction-bar__button--active"
                                            } else {
                                                "reaction-bar__button"
                                            };
                                            view! {
                                                <button
                                                    class=class
                                                    title=kind.label()
                                                    on:click=move |_| react(kind)
                                                >
                                                    <span class="reaction-bar__emoji">{kind.emoji()}</span>
                                                    <span class="reaction-bar__count">{count}</span>
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                        })
                }}
            </Suspense>
            <Show when=move || {
                !session.with(|s| s.loading) && !session.with(SessionState::is_authenticated)
            }>
                <p class="reaction-bar__hint">
                    <a href="/auth/login">"Sign in"</a>
                    " to react to this article."
                </p>
            </Show>
        </div>
    }
}

fn count_for(counts: &[ReactionCount], kind: ReactionType) -> u64 {
    counts
        .iter()
        .find(|entry| entry.kind == kind)
        .map_or(0, |entry| entry.count)
}
