use crate::errors::ServerError;
use astra::{Body, Response, ResponseBuilder};

pub type ResultResp = Result<Response, ServerError>;

/// Convert a ServerError into a status-coded JSON response
pub fn error_to_response(err: ServerError) -> Response {
    match err {
        ServerError::NotFound => json_error_response(404, &err.to_string()),
        ServerError::ListingNotFound => json_error_response(404, &err.to_string()),
        ServerError::DuplicateListing => json_error_response(400, &err.to_string()),
        ServerError::BadRequest(_) => json_error_response(400, &err.to_string()),
        ServerError::ScrapeFailed(_) => json_error_response(500, &err.to_string()),
        ServerError::StoreError(_) => json_error_response(500, &err.to_string()),
        ServerError::InternalError => json_error_response(500, "Internal Server Error"),
    }
}

/// Build a `{"detail": ...}` error body
pub fn json_error_response(status: u16, message: &str) -> Response {
    let body = serde_json::json!({ "detail": message }).to_string();

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(body))
        .unwrap()
}

/// Answer for CORS preflight requests; the browser UI may live on
/// another origin.
pub fn preflight_response() -> ResultResp {
    let resp = ResponseBuilder::new()
        .status(204)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, DELETE, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}
