//! URL generation: slugs, page paths and share links.
//!
//! Everything here is a pure string function of display names.

mod path;
mod share;
mod slug;

pub use path::{UrlPath, canton_url, district_url, province_url};
pub use share::whatsapp_share_url;
pub use slug::sanitize_for_url;
