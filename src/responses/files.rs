use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use std::path::{Component, Path, PathBuf};

const STATIC_DIR: &str = "static";

/// Serve one file from the asset directory. Anything that is not a plain
/// relative path (`..`, absolute, drive prefixes) is treated as missing.
pub fn static_response(rel_path: &str) -> ResultResp {
    let rel = Path::new(rel_path);
    if rel.components().any(|c| !matches!(c, Component::Normal(_))) {
        return Err(ServerError::NotFound);
    }

    let path: PathBuf = Path::new(STATIC_DIR).join(rel);
    let bytes = std::fs::read(&path).map_err(|_| ServerError::NotFound)?;

    let resp = ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type_for(&path).to_string())
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(bytes))
        .map_err(|_| ServerError::InternalError)?;

    Ok(resp)
}

fn content_type_for(path: &Path) -> mime::Mime {
    match path.extension().and_then(|e| e.to_str()) {
        Some("html") => mime::TEXT_HTML_UTF_8,
        Some("css") => mime::TEXT_CSS,
        Some("js") => mime::TEXT_JAVASCRIPT,
        Some("json") => mime::APPLICATION_JSON,
        Some("png") => mime::IMAGE_PNG,
        Some("jpg") | Some("jpeg") => mime::IMAGE_JPEG,
        Some("svg") => mime::IMAGE_SVG,
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}
