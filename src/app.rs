//! SWAPI Cards App
//!
//! Header, toolbar and the card list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CardList, Toolbar};
use crate::config::ApiConfig;
use crate::context::AppContext;
use crate::store::AppState;
use crate::sync::use_favorites_sync;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    let favorites_version = signal(0u32);
    let ctx = AppContext::new(ApiConfig::from_build_env(), favorites_version);

    // Provide context to all children
    provide_context(store);
    provide_context(ctx);

    // Initial favorites load, then again after every toggle
    use_favorites_sync(ctx, store);

    view! {
        <div class="App">
            <header class="App-header">
                <h2 class="App-title">"SWAPI Cards"</h2>
                <a
                    class="SWAPI-link"
                    href="https://swapi.dev/"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Star Wars API"
                </a>
            </header>

            <Toolbar />

            <CardList />
        </div>
    }
}
