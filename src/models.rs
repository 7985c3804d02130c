//! Frontend Models
//!
//! Character records from SWAPI and the favorites store.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Characters Wikipedia article paths must escape
const WIKI_PATH: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'#').add(b'%').add(b'?').add(b'/');

/// Character record (also the favorites store payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub height: String,
    pub mass: String,
    pub eye_color: String,
    pub hair_color: String,
    pub skin_color: String,
}

impl Character {
    /// e.g. "172 cm, 77 kg"
    pub fn subtitle(&self) -> String {
        format!("{} cm, {} kg", self.height, self.mass)
    }

    pub fn description(&self) -> String {
        format!(
            "{} has {} eyes, {} hair, and a {} skintone.",
            self.name, self.eye_color, self.hair_color, self.skin_color
        )
    }

    pub fn wikipedia_url(&self) -> String {
        let title = self.name.replace(' ', "_");
        format!(
            "https://en.wikipedia.org/wiki/{}",
            utf8_percent_encode(&title, WIKI_PATH)
        )
    }

    /// Attribute rows for the details list
    pub fn attributes(&self) -> [(&'static str, &str); 5] {
        [
            ("height", self.height.as_str()),
            ("mass", self.mass.as_str()),
            ("eye_color", self.eye_color.as_str()),
            ("hair_color", self.hair_color.as_str()),
            ("skin_color", self.skin_color.as_str()),
        ]
    }

    /// Case-insensitive name match; a blank query matches everything
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim();
        query.is_empty() || self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Raw `/people/{id}` body
///
/// Every field is optional: a missing person comes back as `{"detail": "Not found"}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub mass: Option<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub skin_color: Option<String>,
}

/// What a card shows once its fetch has finished
#[derive(Debug, Clone, PartialEq)]
pub enum CardData {
    Person(Character),
    NoData(u32),
}

impl CardData {
    pub fn from_response(id: u32, resp: PersonResponse) -> Self {
        match resp.name {
            Some(name) if !name.is_empty() => CardData::Person(Character {
                id,
                name,
                height: resp.height.unwrap_or_default(),
                mass: resp.mass.unwrap_or_default(),
                eye_color: resp.eye_color.unwrap_or_default(),
                hair_color: resp.hair_color.unwrap_or_default(),
                skin_color: resp.skin_color.unwrap_or_default(),
            }),
            _ => CardData::NoData(id),
        }
    }

    pub fn person(&self) -> Option<&Character> {
        match self {
            CardData::Person(c) => Some(c),
            CardData::NoData(_) => None,
        }
    }
}
