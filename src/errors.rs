use crate::scraper::ScrapeError;
use std::fmt;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (scrape, store).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    ListingNotFound,
    DuplicateListing,
    BadRequest(String),
    ScrapeFailed(String),
    StoreError(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::ListingNotFound => write!(f, "Listing not found"),
            ServerError::DuplicateListing => {
                write!(f, "Listing with this URL already exists.")
            }
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::ScrapeFailed(msg) => write!(f, "Scraping failed: {msg}"),
            ServerError::StoreError(msg) => write!(f, "Store error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<ScrapeError> for ServerError {
    fn from(err: ScrapeError) -> Self {
        ServerError::ScrapeFailed(err.to_string())
    }
}
