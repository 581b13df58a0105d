use crate::errors::ServerError;
use base64::Engine;
use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, RngCore};
use serde::{Deserialize, Serialize};

/// One scraped listing. The serde field names are the persisted format and
/// the HTTP wire format, so renaming any of them is a breaking change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: String,
    pub url: String,

    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub rooms: String,
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_urls: Vec<String>,

    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,

    #[serde(default)]
    pub nearest_target: String,
    #[serde(default)]
    pub distance_to_target_km: Option<f64>,

    #[serde(default)]
    pub scraped_at: Option<DateTime<Utc>>,
}

impl Listing {
    /// Field-level checks run once at the deserialization boundary.
    /// Everything except id and url is allowed to be empty.
    pub fn validate(&self) -> Result<(), ServerError> {
        if self.id.trim().is_empty() {
            return Err(ServerError::StoreError("listing with empty id".into()));
        }
        if self.url.trim().is_empty() {
            return Err(ServerError::StoreError(format!(
                "listing {} has empty url",
                self.id
            )));
        }
        Ok(())
    }
}

/// Request body for POST /add_listing.
#[derive(Debug, Deserialize)]
pub struct UrlInput {
    pub url: String,
}

/// Fresh opaque id for a new listing: 16 OS-random bytes, url-safe base64.
pub fn generate_listing_id() -> String {
    let mut raw = [0u8; 16];
    OsRng.fill_bytes(&mut raw);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw)
}
