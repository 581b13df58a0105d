use crate::domain::{Listing, UrlInput};
use crate::errors::ServerError;
use crate::responses::{
    html_response, json_response, preflight_response, static_response, ResultResp,
};
use crate::scraper::OikotieScraper;
use crate::store::Store;
use crate::templates;
use astra::Request;
use std::io::Read;
use url::Url;

pub fn handle(mut req: Request, store: &Store) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),

        ("GET", "/listings") => list_listings(store),
        ("POST", "/add_listing") => add_listing(&mut req, store),
        ("DELETE", p) if p.starts_with("/delete_listing/") => {
            delete_listing(store, &p["/delete_listing/".len()..])
        }

        ("GET", p) if p.starts_with("/static/") => static_response(&p["/static/".len()..]),

        ("OPTIONS", _) => preflight_response(),

        _ => Err(ServerError::NotFound),
    }
}

fn list_listings(store: &Store) -> ResultResp {
    let listings = store.load()?;
    json_response(&listings)
}

fn add_listing(req: &mut Request, store: &Store) -> ResultResp {
    let input = read_url_input(req)?;

    // Duplicate check first: a conflicting add must not touch the network.
    let mut listings = store.load()?;
    if listings.iter().any(|l| l.url == input.url) {
        return Err(ServerError::DuplicateListing);
    }

    let scraper = OikotieScraper::new()?;
    let new_listing = scraper.scrape_listing(&input.url)?;

    listings.push(new_listing.clone());
    store.save(&listings)?;

    json_response(&new_listing)
}

fn delete_listing(store: &Store, id: &str) -> ResultResp {
    let listings = store.load()?;
    let before = listings.len();

    let remaining: Vec<Listing> = listings.into_iter().filter(|l| l.id != id).collect();
    if remaining.len() == before {
        return Err(ServerError::ListingNotFound);
    }

    store.save(&remaining)?;
    json_response(&remaining)
}

fn read_url_input(req: &mut Request) -> Result<UrlInput, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;

    let input: UrlInput = serde_json::from_slice(&buf)
        .map_err(|e| ServerError::BadRequest(format!("invalid request body: {e}")))?;

    Url::parse(&input.url).map_err(|e| ServerError::BadRequest(format!("invalid url: {e}")))?;

    Ok(input)
}
