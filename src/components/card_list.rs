//! Card List Component
//!
//! Renders a PersonCard per visible id.

use leptos::prelude::*;

use crate::cards::visible_ids;
use crate::components::PersonCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CardList() -> impl IntoView {
    let store = use_app_store();

    let ids = move || {
        visible_ids(
            store.count().get(),
            store.show_favorites().get(),
            &store.favorites().read(),
        )
    };

    let no_favorites = move || store.show_favorites().get() && store.favorites().read().is_empty();

    view! {
        <div class="App-cards">
            <For
                each=ids
                key=|id| *id
                children=move |id| view! { <PersonCard id=id /> }
            />
        </div>
        <Show when=no_favorites>
            <p class="empty-favorites">"No favorites yet."</p>
        </Show>
    }
}
