//! Sitemap generation.
//!
//! Lists every generated page for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://seo-postal-code.vercel.app/codigo-postal/limon/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.7</priority>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, generator::minify, log, utils::date::DateUtc};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

use super::page::SitePages;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled.
pub fn build_sitemap(site: &SitePages<'_>, config: &SiteConfig) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::build(site, config, DateUtc::today());
        sitemap.write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<UrlEntry>,
    changefreq: &'static str,
    priority: f32,
}

struct UrlEntry {
    loc: String,
    lastmod: String,
}

impl Sitemap {
    fn build(site: &SitePages<'_>, config: &SiteConfig, today: DateUtc) -> Self {
        let base_url = config.base_url();
        let lastmod = today.to_iso();

        let urls = site
            .pages()
            .iter()
            .map(|page| UrlEntry {
                loc: page.url.to_absolute(base_url),
                lastmod: lastmod.clone(),
            })
            .collect();

        Self {
            urls,
            changefreq: config.build.sitemap.changefreq.as_str(),
            priority: config.build.sitemap.priority,
        }
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(256 * (self.urls.len() + 1));
        let priority = format_priority(self.priority);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for entry in self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(&entry.loc));
            xml.push_str("</loc>\n    <lastmod>");
            xml.push_str(&entry.lastmod);
            xml.push_str("</lastmod>\n    <changefreq>");
            xml.push_str(self.changefreq);
            xml.push_str("</changefreq>\n    <priority>");
            xml.push_str(&priority);
            xml.push_str("</priority>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let count = self.urls.len();
        let xml = self.into_xml();
        let xml = minify(&xml, config.build.minify);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&sitemap_path, xml.as_bytes())
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{} ({} urls)", sitemap_path.file_name().unwrap_or_default().to_string_lossy(), count);
        Ok(())
    }
}

/// Shortest decimal that reads back as `priority`, always with a fraction.
fn format_priority(priority: f32) -> String {
    let text = priority.to_string();
    if text.contains('.') { text } else { format!("{text}.0") }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    // Fast path: check if escaping is needed
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
