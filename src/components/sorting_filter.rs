//! Sort controls for category listings.

use leptos::prelude::*;

use crate::net::types::SortOrder;

/// Sort-field and direction selects. Writes straight into the signals the
/// listing resource tracks, so changing either refetches.
#[component]
pub fn SortingFilter(sort: RwSignal<String>, order: RwSignal<SortOrder>) -> impl IntoView {
    view! {
        <div class="sorting-filter">
            <label class="sorting-filter__field">
                "Sort by"
                <select
                    prop:value=move || sort.get()
                    on:change=move |ev| sort.set(event_target_value(&ev))
                >
                    <option value="publishedAt">"Date"</option>
                    <option value="title">"Title"</option>
                </select>
            </label>
            <label class="sorting-filter__field">
                "Order"
                <select
                    prop:value=move || order.get().as_str()
                    on:change=move |ev| {
                        order
                            .set(
                                if event_target_value(&ev) == "ASC" {
                                    SortOrder::Asc
                                } else {
                                    SortOrder::Desc
                                },
                            )
                    }
                >
                    <option value="DESC">"Newest first"</option>
                    <option value="ASC">"Oldest first"</option>
                </select>
            </label>
        </div>
    }
}
