//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::net::client::ApiClient;
use crate::net::token::BrowserTokenStore;
use crate::pages::{
    breaking_news::BreakingNewsPage, category::CategoryPage, home::HomePage, login::LoginPage,
    news_detail::NewsDetailPage, register::RegisterPage,
};
use crate::state::session::{HttpAuthApi, SessionController, SessionState};

/// Concrete controller type used by the running application.
pub type AppSessionController = SessionController<HttpAuthApi, BrowserTokenStore>;

/// Backend API base URL, overridable at build time.
fn api_base_url() -> &'static str {
    option_env!("NEWSWIRE_API_URL").unwrap_or("/api")
}

/// Hard redirect to the login page after an authorization-denied response.
///
/// Already-rendered components keep stale session state until the reload
/// completes; the abrupt navigation is the accepted fallback, not an
/// in-place re-authentication prompt.
fn redirect_to_login() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("/auth/login");
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the token store, request pipeline and session controller once,
/// provides them via context, and kicks off the one-shot session
/// rehydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let store = BrowserTokenStore;
    let client = ApiClient::new(api_base_url(), Arc::new(store))
        .with_unauthorized_handler(redirect_to_login);
    let controller = SessionController::new(session, HttpAuthApi::new(client.clone()), store);

    provide_context(session);
    provide_context(client);
    provide_context(controller.clone());

    // Resolve the persisted token once, client-side only (effects do not
    // run during SSR).
    Effect::new(move || {
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            controller.initialize().await;
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/newswire.css"/>
        <Title text="Newswire"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("category"), ParamSegment("slug")) view=CategoryPage/>
                    <Route path=(StaticSegment("news"), ParamSegment("id")) view=NewsDetailPage/>
                    <Route path=StaticSegment("breaking-news") view=BreakingNewsPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                    <Route path=(StaticSegment("auth"), StaticSegment("register")) view=RegisterPage/>
                </Routes>
            </Layout>
        </Router>
    }
}
