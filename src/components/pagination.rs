//! Page navigation for news listings.

use leptos::prelude::*;

const WINDOW: u32 = 2;

/// Previous/next plus a numbered window around the current page. Renders
/// nothing when there is a single page.
#[component]
pub fn Pagination(page: u32, pages: u32, on_page: Callback<u32>) -> impl IntoView {
    (pages > 1).then(|| {
        let start = page.saturating_sub(WINDOW).max(1);
        let end = (page + WINDOW).min(pages);

        view! {
            <nav class="pagination" aria-label="Pages">
                <button
                    class="pagination__step"
                    disabled=(page <= 1)
                    on:click=move |_| on_page.run(page - 1)
                >
                    "Previous"
                </button>
                {(start..=end)
                    .map(|n| {
                        let class = if n == page {
                            "pagination__page pagination__page--active"
                        } else {
                            "pagination__page"
                        };
                        view! {
                            <button class=class on:click=move |_| on_page.run(n)>
                                {n}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button
                    class="pagination__step"
                    disabled=(page >= pages)
                    on:click=move |_| on_page.run(page + 1)
                >
                    "Next"
                </button>
            </nav>
        }
    })
}
