//! Comments under an article: paged list, submit form, and edit/delete of
//! one's own comments.

use leptos::prelude::*;

use super::error_message::ErrorMessage;
use super::pagination::Pagination;
use crate::net::client::ApiClient;
use crate::net::comments;
use crate::net::types::Comment;
use crate::state::session::SessionState;
use crate::util::date;

const PAGE_SIZE: u32 = 10;

#[component]
pub fn CommentSection(news_id: u64) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();
    let page = RwSignal::new(1_u32);
    let refresh = RwSignal::new(0_u32);

    let fetch_client = client.clone();
    let comments = LocalResource::new(move || {
        let client = fetch_client.clone();
        refresh.track();
        let page = page.get();
        async move { comments::fetch_comments(&client, news_id, page, PAGE_SIZE).await }
    });

    view! {
        <section class="comment-section">
            <h2 class="comment-section__title">"Comments"</h2>

            <Show
                when=move || session.with(SessionState::is_authenticated)
                fallback=move || {
                    view! {
                        <p class="comment-section__hint">
                            <a href="/auth/login">"Sign in"</a>
                            " to join the discussion."
                        </p>
                    }
                }
            >
                <CommentForm news_id=news_id refresh=refresh/>
            </Show>

            <Suspense fallback=move || {
                view! { <p class="comment-section__loading">"Loading comments..."</p> }
            }>
                {move || {
                    comments
                        .get()
                        .map(|envelope| {
                            if envelope.success {
                                let items = envelope.data.unwrap_or_default();
                                let pages = envelope.pagination.map_or(1, |p| p.pages);
                                view! {
                                    <div class="comment-section__list">
                                        {if items.is_empty() {
                                            view! {
                                                <p class="comment-section__empty">
                                                    "No comments yet. Be the first."
                                                </p>
                                            }
                                                .into_any()
                                        } else {
                                            items
                                                .into_iter()
                                                .map(|comment| {
                                                    view! { <CommentItem comment refresh/> }
                                                })
                                                .collect::<Vec<_>>()
                                                .into_any()
                                        }}
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
                                    .unwrap_or_else(|| "Comments are unavailable.".to_owned());
                                view! { <ErrorMessage message/> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </section>
    }
}

/// New-comment form; disabled while a submission is in flight.
#[component]
fn CommentForm(news_id: u64, refresh: RwSignal<u32>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let content = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = content.get_untracked();
        if text.trim().is_empty() || submitting.get_untracked() {
            return;
        }
        submitting.set(true);
        error.set(None);
        let client = client.clone();
        leptos::task::spawn_local(async move {
            let envelope = comments::create_comment(&client, news_id, text.trim()).await;
            submitting.set(false);
            if envelope.success {
                content.set(String::new());
                refresh.update(|n| *n += 1);
            } else {
                error.set(Some(
                    envelope
                        .message
                        .unwrap_or_else(|| "Your comment could not be posted.".to_owned()),
                ));
            }
        });
    };

    view! {
        <form class="comment-form" on:submit=on_submit>
            {move || error.get().map(|message| view! { <ErrorMessage message/> })}
            <textarea
                class="comment-form__input"
                placeholder="Write a comment..."
                prop:value=move || content.get()
                on:input=move |ev| content.set(event_target_value(&ev))
            ></textarea>
            <button class="comment-form__submit" type="submit" disabled=move || submitting.get()>
                {move || if submitting.get() { "Posting..." } else { "Post comment" }}
            </button>
        </form>
    }
}

/// One comment, with edit/delete controls for its author.
#[component]
fn CommentItem(comment: Comment, refresh: RwSignal<u32>) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let session = expect_context::<RwSignal<SessionState>>();

    let comment_id = comment.id;
    let author_id = comment.user_id;
    let author = comment
        .user
        .as_ref()
        .map_or_else(|| "Anonymous".to_owned(), |user| user.username.clone());
    let posted = date::format_relative(&comment.created_at, date::now());

    let editing = RwSignal::new(false);
    let draft = RwSignal::new(comment.content.clone());
    let busy = RwSignal::new(false);

    let mine = move || session.with(|s| s.user().is_some_and(|user| user.id == author_id));

    let save = Callback::new({
        let client = client.clone();
        move |_ev: leptos::ev::MouseEvent| {
            let text = draft.get_untracked();
            if text.trim().is_empty() || busy.get_untracked() {
                return;
            }
            busy.set(true);
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let envelope = comments::update_comment(&client, comment_id, text.trim()).await;
                busy.set(false);
                if envelope.success {
                    editing.set(false);
                    refresh.update(|n| *n += 1);
                }
            });
        }
    });

    let delete = {
        let client = client.clone();
        move |_ev: leptos::ev::MouseEvent| {
            if busy.get_untracked() {
                return;
            }
            busy.set(true);
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let envelope = comments::delete_comment(&client, comment_id).await;
                busy.set(false);
                if envelope.success {
                    refresh.update(|n| *n += 1);
                }
            });
        }
    };

    view! {
        <article class="comment">
            <header class="comment__meta">
                <span class="comment__author">{author}</span>
                <span class="comment__time">{posted}</span>
            </header>

            <Show
                when=move || editing.get()
                fallback={
                    let content = comment.content.clone();
                    move || view! { <p class="comment__content">{content.clone()}</p> }
                }
            >
                <textarea
                    class="comment__edit-input"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                ></textarea>
            </Show>

            <Show when=mine>
                <footer class="comment__actions">
                    <Show
                        when=move || editing.get()
                        fallback=move || {
                            view! {
                                <button
                                    class="comment__action"
                                    on:click=move |_| editing.set(true)
                                >
                                    "Edit"
                                </button>
                            }
                        }
                    >
                        <button
                            class="comment__action"
                            disabled=move || busy.get()
                            on:click=move |ev| save.run(ev)
                        >
                            "Save"
                        </button>
                        <button class="comment__action" on:click=move |_| editing.set(false)>
                            "Cancel"
                        </button>
                    </Show>
                    <button
                        class="comment__action comment__action--delete"
                        disabled=move || busy.get()
                        on:click=delete.clone()
                    >
                        "Delete"
                    </button>
                </footer>
            </Show>
        </article>
    }
}
