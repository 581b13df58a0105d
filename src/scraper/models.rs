// listing page
//  ├── h1                          "Mannerheimintie 10 A 5 ● 2h + kt"
//  ├── span                        "315 000 €"
//  ├── dl
//  │    ├── dt "Asuinpinta-ala" / dd "54 m²"
//  │    └── dt "Kerros"         / dd "3/5"
//  ├── p.paragraph--keep-formatting   (description blocks)
//  ├── img[data-big]                  (gallery originals)
//  └── listing-map-container [latitude]="60.x" [longitude]="24.x"

/// What the extractor pulled out of one page. Everything is optional on the
/// page, so everything defaults to empty/absent here.
#[derive(Debug, Default)]
pub struct ScrapedFields {
    pub address: String,
    pub rooms: String,
    pub price: String,
    pub area: String,
    pub floor: String,
    pub description: String,
    pub image_urls: Vec<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}
