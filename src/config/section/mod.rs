//! Configuration section definitions.
//!
//! Each module corresponds to a section in `postal.toml`:
//!
//! | Module  | TOML Section | Purpose                               |
//! |---------|--------------|---------------------------------------|
//! | `build` | `[build]`    | Dataset, output, sitemap, search index |
//! | `site`  | `[site]`     | Title, description, url, language     |

pub mod build;
pub mod site;

pub use build::{BuildSectionConfig, SitemapConfig};
pub use site::SiteInfoConfig;
