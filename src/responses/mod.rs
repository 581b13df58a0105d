pub mod errors;
pub mod files;
pub mod html;
pub mod json;

pub use errors::{error_to_response, preflight_response, ResultResp};
pub use files::static_response;
pub use html::html_response;
pub use json::json_response;
