use crate::errors::{ResultResp, ServerError};
use astra::{Body, ResponseBuilder};

const MAIN_CSS: &str = include_str!("../../static/main.css");

/// Serve an embedded static asset by its file name under /static/.
pub fn static_asset(name: &str) -> ResultResp {
    let (content, content_type) = match name {
        "main.css" => (MAIN_CSS, mime::TEXT_CSS_UTF_8),
        _ => return Err(ServerError::NotFound),
    };

    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", content_type.as_ref())
        .body(Body::from(content.to_string()))
        .map_err(|_| ServerError::InternalError)
}
