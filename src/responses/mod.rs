pub mod assets;
pub mod errors;
pub mod html;

pub use assets::static_asset;
pub use errors::error_page;
pub use html::{html_response, redirect};
