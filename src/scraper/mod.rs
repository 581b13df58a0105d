mod models;
mod scraper;
mod scraper_error;

pub use models::ScrapedFields;
pub use scraper::OikotieScraper;
pub use scraper_error::ScrapeError;
