//! Inline error banner.

use leptos::prelude::*;

/// Red banner for surfaced API errors.
#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="error-message" role="alert">
            <p class="error-message__text">{message}</p>
        </div>
    }
}
