//! Person Card Component
//!
//! One card per SWAPI id. The record comes from the shared character cache,
//! so re-rendering a card never re-fetches it.

use leptos::prelude::*;
use leptos_query_cache::QueryState;

use crate::components::PersonView;
use crate::context::use_app_context;
use crate::models::{CardData, Character};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::sync::toggle_favorite;

/// Card slot: loading / error / no data / character
#[component]
pub fn PersonCard(id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let state = ctx.character(id);

    // With a search active only loaded, matching characters stay visible
    let filter_state = state.clone();
    let hidden = move || {
        let query = store.query().get();
        if query.trim().is_empty() {
            return false;
        }
        filter_state.with(|s| match s {
            QueryState::Ready(data) => !data.person().is_some_and(|c| c.matches_query(&query)),
            _ => true,
        })
    };

    view! {
        <div class="card-slot" class:hidden=hidden>
            {move || match state.get() {
                QueryState::Loading => view! { <p class="card-status">"Loading..."</p> }.into_any(),
                QueryState::Failed(_) => view! { <p class="card-status error">"Error."</p> }.into_any(),
                QueryState::Ready(CardData::NoData(id)) => view! {
                    <div class="card">
                        <div class="card-body">
                            <h5 class="card-title">{format!("No data available for #{}", id)}</h5>
                        </div>
                    </div>
                }.into_any(),
                QueryState::Ready(CardData::Person(character)) => view! {
                    <CharacterCard character=character />
                }.into_any(),
            }}
        </div>
    }
}

/// Populated card with favorite toggle and details
#[component]
fn CharacterCard(character: Character) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let id = character.id;
    let (show_details, set_show_details) = signal(false);

    let is_favorite = move || store.favorites().read().contains(id);

    let on_favorite = {
        let character = character.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            toggle_favorite(ctx, store, character.clone());
        }
    };

    let details = character.clone();

    view! {
        <div class="card">
            <div class="card-body">
                <div class="card-title-row">
                    <h5 class="card-title">{character.name.clone()}</h5>
                    <button
                        class=move || if is_favorite() { "favorite-btn active" } else { "favorite-btn" }
                        title=move || if is_favorite() { "Remove from favorites" } else { "Add to favorites" }
                        on:click=on_favorite
                    >
                        {move || if is_favorite() { "★" } else { "☆" }}
                    </button>
                </div>
                <h6 class="card-subtitle mb-2 text-muted">{character.subtitle()}</h6>
                <p class="card-text">{character.description()}</p>
                <a
                    class="card-link"
                    href=character.wikipedia_url()
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Wikipedia"
                </a>
                <button
                    class="card-link details-btn"
                    on:click=move |_| set_show_details.update(|v| *v = !*v)
                >
                    {move || if show_details.get() { "Hide details" } else { "Details" }}
                </button>
                <Show when=move || show_details.get()>
                    <PersonView character=details.clone() />
                </Show>
            </div>
        </div>
    }
}
