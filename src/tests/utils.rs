use crate::domain::Listing;
use crate::store::Store;
use astra::Response;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

/// Fresh store backed by a unique temp file that does not exist yet
pub fn make_store(tag: &str) -> Store {
    let path = std::env::temp_dir().join(format!(
        "{tag}_{}.json",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    Store::new(path)
}

/// A fully-populated listing for seeding stores
pub fn sample_listing(id: &str, url: &str) -> Listing {
    Listing {
        id: id.to_string(),
        url: url.to_string(),
        address: "Mannerheimintie 10 A 5".to_string(),
        price: "315 000 €".to_string(),
        area: "54 m²".to_string(),
        floor: "3/5".to_string(),
        rooms: "2h + kt".to_string(),
        description: "Valoisa kaksio.".to_string(),
        image_urls: vec!["https://cdn.example.com/1_big.jpg".to_string()],
        latitude: Some(60.17),
        longitude: Some(24.93),
        nearest_target: "Punavuori".to_string(),
        distance_to_target_km: Some(1.23),
        scraped_at: None,
    }
}

/// Read a response body into a string
pub fn body_string(resp: &mut Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut()
        .reader()
        .read_to_end(&mut bytes)
        .unwrap();
    String::from_utf8(bytes).unwrap()
}
