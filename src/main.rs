use crate::router::handle;
use crate::store::Store;
use astra::Server;
use std::net::SocketAddr;

mod domain;
mod errors;
mod geos;
mod responses;
mod router;
mod scraper;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // Where the listing collection lives. Overridable for ad-hoc runs.
    let data_file =
        std::env::var("LISTINGS_FILE").unwrap_or_else(|_| "listings.json".to_string());
    let store = Store::new(data_file);
    println!("📄 Listing data in {:?}", store.path());

    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    // One worker: every request runs its blocking fetch/load/save inline.
    let server = Server::bind(&addr).max_workers(1);

    let result = server.serve(move |req, _info| match handle(req, &store) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
