//! Page chrome: header, main column, footer.

use leptos::prelude::*;

use super::footer::Footer;
use super::header::Header;

/// Wraps every routed page in the shared chrome.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="site">
            <Header/>
            <main class="site__main">{children()}</main>
            <Footer/>
        </div>
    }
}
