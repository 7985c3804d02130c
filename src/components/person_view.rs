//! Person attribute list

use leptos::prelude::*;

use crate::models::Character;

#[component]
pub fn PersonView(character: Character) -> impl IntoView {
    view! {
        <div class="PersonView">
            <ul>
                {character.attributes().into_iter().map(|(label, value)| {
                    let value = value.to_string();
                    view! { <li>{label}": "{value}</li> }
                }).collect_view()}
            </ul>
        </div>
    }
}
