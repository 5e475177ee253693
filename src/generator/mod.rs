//! Static site generation from the postal code dataset.
//!
//! - **Pages**: home, province, canton and district pages (`index.html` per URL)
//! - **Sitemap**: search engine indexing (`sitemap.xml`)
//! - **Search index**: the dataset as JSON for client-side search
//!
//! Pages are rendered and written in parallel; each one is a pure function
//! of the shared dataset.

mod page;
mod render;
mod sitemap;

use std::borrow::Cow;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::config::SiteConfig;
use crate::data::PostalCodes;
use crate::logger::ProgressLine;
use crate::{debug, log};

use page::SitePages;

/// Counts from one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub pages: usize,
    pub skipped: usize,
    pub conflicts: usize,
}

/// Generate the whole site into `config.build.output`.
pub fn build_site(config: &SiteConfig, data: &PostalCodes, quiet: bool) -> Result<BuildSummary> {
    let output = &config.build.output;
    prepare_output(output, config.build.clean)?;

    let site = SitePages::collect(data);
    site.report();
    debug!("build"; "{} pages from {} records", site.len(), data.len());

    write_pages(&site, config, quiet)?;

    let (sitemap_result, index_result) = rayon::join(
        || sitemap::build_sitemap(&site, config),
        || {
            if config.build.search_index.enable {
                write_search_index(data, config)
            } else {
                Ok(())
            }
        },
    );
    sitemap_result?;
    index_result?;

    Ok(BuildSummary {
        pages: site.len(),
        skipped: site.skipped.len(),
        conflicts: site.conflicts.len(),
    })
}

/// Create the output directory, removing it first when `clean` is set.
fn prepare_output(output: &Path, clean: bool) -> Result<()> {
    if clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean output directory {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))
}

fn write_pages(site: &SitePages<'_>, config: &SiteConfig, quiet: bool) -> Result<()> {
    let progress = (!quiet).then(|| ProgressLine::new(&site.counts()));

    site.pages().par_iter().try_for_each(|page| -> Result<()> {
        let html = render::render_page(page, site, config);
        let html = minify(&html, config.build.minify);

        let path = config.build.output.join(page.url.to_output_file());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&path, html.as_bytes())
            .with_context(|| format!("Failed to write {}", path.display()))?;

        if let Some(p) = &progress {
            p.inc(page.kind.name());
        }
        Ok(())
    })?;

    if let Some(p) = progress {
        p.finish();
    }
    Ok(())
}

fn write_search_index(data: &PostalCodes, config: &SiteConfig) -> Result<()> {
    let path = config.build.output.join(&config.build.search_index.path);
    let json = data.to_json(!config.build.minify)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&path, json)
        .with_context(|| format!("Failed to write search index to {}", path.display()))?;

    log!("search"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}

/// Trim every line and drop the line breaks when enabled.
pub fn minify(content: &str, enabled: bool) -> Cow<'_, str> {
    if enabled {
        let minified = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("");
        Cow::Owned(minified)
    } else {
        Cow::Borrowed(content)
    }
}
