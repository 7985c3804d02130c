//! API Configuration
//!
//! Endpoints are fixed at build time; there is no runtime config file.

/// Fewest cards the list shows
pub const MIN_CARDS: usize = 1;
/// Upper bound on cards (and on concurrent SWAPI requests)
pub const MAX_CARDS: usize = 50;
pub const DEFAULT_CARDS: usize = 12;

const DEFAULT_SWAPI_BASE: &str = "https://swapi.dev/api";
/// Empty = same origin as the page
const DEFAULT_FAVORITES_BASE: &str = "";

/// Remote endpoints
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub swapi_base: String,
    pub favorites_base: String,
}

impl ApiConfig {
    /// Build from `SWAPI_BASE_URL` / `FAVORITES_API_URL` set at compile time
    pub fn from_build_env() -> Self {
        Self::new(
            option_env!("SWAPI_BASE_URL").unwrap_or(DEFAULT_SWAPI_BASE),
            option_env!("FAVORITES_API_URL").unwrap_or(DEFAULT_FAVORITES_BASE),
        )
    }

    pub fn new(swapi_base: &str, favorites_base: &str) -> Self {
        Self {
            swapi_base: swapi_base.trim_end_matches('/').to_string(),
            favorites_base: favorites_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn person_url(&self, id: u32) -> String {
        format!("{}/people/{}", self.swapi_base, id)
    }

    pub fn favorites_url(&self) -> String {
        format!("{}/people", self.favorites_base)
    }

    pub fn favorite_url(&self, id: u32) -> String {
        format!("{}/people/{}", self.favorites_base, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SWAPI_BASE, DEFAULT_FAVORITES_BASE)
    }
}

/// Clamp a requested card count into [MIN_CARDS, MAX_CARDS]
pub fn clamp_count(n: usize) -> usize {
    n.clamp(MIN_CARDS, MAX_CARDS)
}

/// Parse the count input; None leaves the current count alone
///
/// Number inputs may hold decimals or exponents ("3.7", "1e2"), so the text
/// is read as a float and truncated before clamping.
pub fn parse_count(input: &str) -> Option<usize> {
    let n: f64 = input.trim().parse().ok()?;
    if !n.is_finite() {
        return None;
    }
    Some(clamp_count(n.trunc().clamp(0.0, MAX_CARDS as f64) as usize))
}
