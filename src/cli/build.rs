//! Build command: load the dataset and generate the site.

use std::time::Instant;

use anyhow::Result;

use crate::{
    config::SiteConfig,
    data::PostalCodes,
    generator::build_site,
    log,
    utils::plural_count,
};

/// Generate the site into the configured output directory.
pub fn run_build(config: &SiteConfig, data: &PostalCodes) -> Result<()> {
    let start = Instant::now();
    log!("build"; "{} from {}", plural_count(data.len(), "record"), dataset_source(config));

    let summary = build_site(config, data, false)?;

    if summary.skipped > 0 {
        log!("warning"; "{} skipped", plural_count(summary.skipped, "page"));
    }
    if summary.conflicts > 0 {
        log!("warning"; "{} dropped", plural_count(summary.conflicts, "conflicting page"));
    }
    log!("done"; "{} in {:.2?} -> {}",
        plural_count(summary.pages, "page"),
        start.elapsed(),
        config.build.output.display());
    Ok(())
}

fn dataset_source(config: &SiteConfig) -> String {
    config
        .build
        .data
        .as_deref()
        .map_or_else(|| "embedded dataset".to_string(), |p| p.display().to_string())
}
