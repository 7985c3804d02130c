//! SWAPI Requests

use gloo_net::http::Request;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::{CardData, PersonResponse};

/// Fetch `/people/{id}`
///
/// The body is decoded whatever the status: a missing person answers 404
/// with `{"detail": "Not found"}`, which becomes `CardData::NoData`.
pub async fn fetch_person(config: &ApiConfig, id: u32) -> Result<CardData, ApiError> {
    let url = config.person_url(id);
    log::debug!("[SWAPI] GET {}", url);

    let resp = Request::get(&url).send().await?;
    let body = resp.text().await?;
    let person: PersonResponse = serde_json::from_str(&body)?;

    let data = CardData::from_response(id, person);
    if let CardData::NoData(_) = data {
        log::info!("[SWAPI] No data for #{} (status {})", id, resp.status());
    }
    Ok(data)
}
