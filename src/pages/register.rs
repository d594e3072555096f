//! Registration page.
//!
//! Password confirmation is checked locally before any request is made;
//! the session layer only ever sees credentials that already match.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSessionController;
use crate::components::error_message::ErrorMessage;
use crate::net::types::RegisterCredentials;
use crate::state::session::{LoginOutcome, SessionState};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<AppSessionController>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    controller.clear_error();

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let state = session.get();
            if !state.loading && state.is_authenticated() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let on_submit = {
        let controller = controller.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if submitting.get_untracked() {
                return;
            }
            if password.get_untracked() != confirm.get_untracked() {
                form_error.set(Some("Passwords do not match.".to_owned()));
                return;
            }
            form_error.set(None);
            let credentials = RegisterCredentials {
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            submitting.set(true);
            let controller = controller.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = controller.register(&credentials).await;
                submitting.set(false);
                if outcome == LoginOutcome::Authenticated {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <Title text="Sign up | Newswire"/>

        <div class="auth-page">
            <h1 class="auth-page__title">"Create an account"</h1>

            {move || {
                form_error
                    .get()
                    .or_else(|| session.get().last_error)
                    .map(|message| view! { <ErrorMessage message/> })
            }}

            <form class="auth-page__form" on:submit=on_submit>
                <label class="auth-page__field">
                    "Username"
                    <input
                        type="text"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__field">
                    "Email"
                    <input
                        type="email"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__field">
                    "Password"
                    <input
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__field">
                    "Confirm password"
                    <input
                        type="password"
                        required
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <button class="auth-page__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "Already registered? " <a href="/auth/login">"Sign in"</a>
            </p>
        </div>
    }
}
