//! UI Components
//!
//! Leptos components for the card page.

mod toolbar;
mod card_list;
mod person_card;
mod person_view;

pub use toolbar::Toolbar;
pub use card_list::CardList;
pub use person_card::PersonCard;
pub use person_view::PersonView;
