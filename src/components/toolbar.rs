//! Toolbar Component
//!
//! Card count input, all/favorites view toggle and name search.

use leptos::prelude::*;

use crate::config::{parse_count, MAX_CARDS, MIN_CARDS};
use crate::store::{store_set_count, use_app_store, AppStateStoreFields};

/// Controls for the card list
#[component]
pub fn Toolbar() -> impl IntoView {
    let store = use_app_store();

    let tab_class = move |favorites: bool| {
        if store.show_favorites().get() == favorites { "view-tab active" } else { "view-tab" }
    };

    view! {
        <div class="App-input">
            <label for="lengthInput">"# of People Cards Displayed:"</label>
            <input
                type="number"
                id="lengthInput"
                min=MIN_CARDS.to_string()
                max=MAX_CARDS.to_string()
                prop:value=move || store.count().get().to_string()
                disabled=move || store.show_favorites().get()
                on:input=move |ev| {
                    // max="50" does not stop larger numbers being typed in
                    if let Some(count) = parse_count(&event_target_value(&ev)) {
                        log::debug!("[APP] Card count -> {}", count);
                        store_set_count(&store, count);
                    }
                }
            />

            <div class="view-toggle">
                <button
                    class=move || tab_class(false)
                    on:click=move |_| store.show_favorites().set(false)
                >
                    "All"
                </button>
                <button
                    class=move || tab_class(true)
                    on:click=move |_| store.show_favorites().set(true)
                >
                    {move || format!("Favorites ({})", store.favorites().read().len())}
                </button>
            </div>

            <input
                type="search"
                class="search-input"
                placeholder="Search by name..."
                prop:value=move || store.query().get()
                on:input=move |ev| store.query().set(event_target_value(&ev))
            />
        </div>
    }
}
