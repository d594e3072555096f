//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__about">"Newswire — your address for current news."</p>
            <nav class="site-footer__links">
                <a href="/">"Home"</a>
                <a href="/breaking-news">"Breaking News"</a>
            </nav>
        </footer>
    }
}
