pub mod listing;

pub use listing::{generate_listing_id, Listing, UrlInput};
