// scraper.rs
use crate::domain::{generate_listing_id, Listing};
use crate::geos;
use crate::scraper::ScrapedFields;
use crate::scraper::ScrapeError;
use chrono::Utc;
use regex::Regex;
use reqwest::blocking::Client;
use scraper::{ElementRef, Html, Selector};
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// The listing site renders h1 as "address ● rooms".
const ADDRESS_DELIMITER: char = '●';

pub struct OikotieScraper {
    client: Client,
}

impl OikotieScraper {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// Fetch a listing page, extract its fields, score it against the
    /// target areas and assemble the finished record.
    pub fn scrape_listing(&self, url: &str) -> Result<Listing, ScrapeError> {
        eprintln!("🔍 Scraping {url}");

        let html = self.fetch_listing(url)?;
        let fields = Self::extract_fields(&html)?;

        let mut nearest_target = String::new();
        let mut distance_to_target_km = None;

        if let (Some(lat), Some(lon)) = (fields.latitude, fields.longitude) {
            let (name, km) = geos::nearest_target_area(lat, lon);
            nearest_target = name.to_string();
            distance_to_target_km = Some(km);
        }

        eprintln!(
            "✅ Scraped '{}' ({} images)",
            fields.address,
            fields.image_urls.len()
        );

        Ok(Listing {
            id: generate_listing_id(),
            url: url.to_string(),
            address: fields.address,
            price: fields.price,
            area: fields.area,
            floor: fields.floor,
            rooms: fields.rooms,
            description: fields.description,
            image_urls: fields.image_urls,
            latitude: fields.latitude,
            longitude: fields.longitude,
            nearest_target,
            distance_to_target_km,
            scraped_at: Some(Utc::now()),
        })
    }

    pub fn fetch_listing(&self, url: &str) -> Result<String, ScrapeError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(ScrapeError::Network(format!("GET {url} returned {status}")));
        }

        Ok(text)
    }

    /// Pull the structured fields out of one listing page. Missing markup
    /// leaves the matching field empty; only selector/pattern compilation
    /// can fail here.
    pub fn extract_fields(html: &str) -> Result<ScrapedFields, ScrapeError> {
        let document = Html::parse_document(html);
        let mut fields = ScrapedFields::default();

        // Address and rooms share the heading
        let h1 = parse_selector("h1")?;
        if let Some(heading) = document.select(&h1).next() {
            let raw = element_text(&heading);
            let mut parts = raw.splitn(2, ADDRESS_DELIMITER);
            fields.address = parts.next().unwrap_or("").trim().to_string();
            fields.rooms = parts.next().unwrap_or("").trim().to_string();
        }

        // Price: first span carrying the currency symbol
        let span = parse_selector("span")?;
        for el in document.select(&span) {
            let text = element_text(&el);
            if text.contains('€') {
                fields.price = text;
                break;
            }
        }

        // Area and floor live in dt/dd pairs
        let dt = parse_selector("dt")?;
        for label_el in document.select(&dt) {
            let label = element_text(&label_el);
            let value = match label_el
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .find(|el| el.value().name() == "dd")
            {
                Some(dd) => element_text(&dd),
                None => continue,
            };

            if label.contains("Asuinpinta-ala") {
                fields.area = value.clone();
            }
            if label.contains("Kerros") {
                fields.floor = value;
            }
        }

        // Description paragraphs keep their formatting marker class
        let para = parse_selector("p.paragraph--keep-formatting")?;
        let blocks: Vec<String> = document
            .select(&para)
            .map(|p| element_text(&p))
            .collect();
        fields.description = blocks.join("\n\n");

        // Gallery originals are the data-big attributes
        let img = parse_selector("img[data-big]")?;
        fields.image_urls = document
            .select(&img)
            .filter_map(|el| el.value().attr("data-big"))
            .map(str::to_string)
            .collect();

        // Coordinates sit in the map component's bound attributes; the
        // bracketed names survive re-serialization, so match on that.
        let map = parse_selector("listing-map-container")?;
        if let Some(map_el) = document.select(&map).next() {
            let tag = map_el.html();

            let lat_re = Regex::new(r#"\[latitude\]="([\d.]+)""#)
                .map_err(|e| ScrapeError::HtmlParse(e.to_string()))?;
            let lon_re = Regex::new(r#"\[longitude\]="([\d.]+)""#)
                .map_err(|e| ScrapeError::HtmlParse(e.to_string()))?;

            let lat = lat_re
                .captures(&tag)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok());
            let lon = lon_re
                .captures(&tag)
                .and_then(|c| c.get(1))
                .and_then(|m| m.as_str().parse::<f64>().ok());

            if let (Some(lat), Some(lon)) = (lat, lon) {
                fields.latitude = Some(lat);
                fields.longitude = Some(lon);
            }
        }

        Ok(fields)
    }
}

fn parse_selector(selector: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector).map_err(|e| ScrapeError::HtmlParse(e.to_string()))
}

fn element_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}
