//! Favorites Store Requests
//!
//! `GET /people`, `PUT /people`, `DELETE /people/{id}` against the favorites API.

use gloo_net::http::{Request, Response};

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::models::Character;

fn ensure_ok(resp: &Response) -> Result<(), ApiError> {
    if resp.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(resp.status()))
    }
}

/// All favorited records
pub async fn list_favorites(config: &ApiConfig) -> Result<Vec<Character>, ApiError> {
    let resp = Request::get(&config.favorites_url()).send().await?;
    ensure_ok(&resp)?;
    let body = resp.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Upsert a record into the favorites store
pub async fn add_favorite(config: &ApiConfig, character: &Character) -> Result<(), ApiError> {
    let resp = Request::put(&config.favorites_url())
        .json(character)?
        .send()
        .await?;
    ensure_ok(&resp)
}

pub async fn remove_favorite(config: &ApiConfig, id: u32) -> Result<(), ApiError> {
    let resp = Request::delete(&config.favorite_url(id)).send().await?;
    ensure_ok(&resp)
}
