//! Login page.
//!
//! The submit button is disabled while a login is in flight; the
//! controller itself performs no mutual exclusion.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSessionController;
use crate::components::error_message::ErrorMessage;
use crate::net::types::LoginCredentials;
use crate::state::session::{LoginOutcome, SessionState};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<AppSessionController>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let submitting = RwSignal::new(false);

    // A stale error from an earlier visit should not greet the user.
    controller.clear_error();

    // Already signed in: nothing to do here.
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
            let credentials = LoginCredentials {
                email: email.get_untracked(),
                password: password.get_untracked(),
            };
            submitting.set(true);
            let controller = controller.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = controller.login(&credentials).await;
                submitting.set(false);
                if outcome == LoginOutcome::Authenticated {
                    navigate("/", NavigateOptions::default());
                }
            });
        }
    };

    view! {
        <Title text="Sign in | Newswire"/>

        <div class="auth-page">
            <h1 class="auth-page__title">"Sign in"</h1>

            {move || {
                session.get().last_error.map(|message| view! { <ErrorMessage message/> })
            }}

            <form class="auth-page__form" on:submit=on_submit>
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
                <button class="auth-page__submit" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Signing in..." } else { "Sign in" }}
                </button>
            </form>

            <p class="auth-page__switch">
                "No account yet? " <a href="/auth/register">"Sign up"</a>
            </p>
        </div>
    }
}
