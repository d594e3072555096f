//! Site header with category navigation and the auth section.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::app::AppSessionController;
use crate::state::session::SessionState;
use crate::util::category::display_name;

const NAV_CATEGORIES: [&str; 6] = [
    "breaking-news",
    "politics",
    "economy",
    "world",
    "sports",
    "technology",
];

/// Top bar: brand, category links, and login/logout controls driven by the
/// session signal.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let controller = expect_context::<AppSessionController>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let logout = move |_ev: leptos::ev::MouseEvent| {
        controller.logout();
        navigate("/auth/login", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">
                "Newswire"
            </a>

            <button
                class="site-header__menu-toggle"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "Menu"
            </button>

            <nav class=move || {
                if menu_open.get() { "site-header__nav site-header__nav--open" } else { "site-header__nav" }
            }>
                {NAV_CATEGORIES
                    .iter()
                    .map(|slug| {
                        let href = if *slug == "breaking-news" {
                            "/breaking-news".to_owned()
                        } else {
                            format!("/category/{slug}")
                        };
                        view! {
                            <a class="site-header__nav-link" href=href>
                                {display_name(slug)}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="site-header__auth">
                {move || {
                    let state = session.get();
                    if state.loading {
                        view! { <span class="site-header__auth-pending"></span> }.into_any()
                    } else if let Some(user) = state.user() {
                        let logout = logout.clone();
                        view! {
                            <span class="site-header__session">
                                <span class="site-header__username">{user.username.clone()}</span>
                                <button class="site-header__logout" on:click=logout>
                                    "Log out"
                                </button>
                            </span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <span class="site-header__session">
                                <a class="site-header__login" href="/auth/login">
                                    "Sign in"
                                </a>
                                <a class="site-header__register" href="/auth/register">
                                    "Sign up"
                                </a>
                            </span>
                        }
                            .into_any()
                    }
                }}
            </div>
        </header>
    }
}
