//! Manifest loading — one-shot fetch of the static JSON manifests.
//!
//! The loader performs exactly one read per call: a single HTTP GET for URL
//! sources or a single file read for local sources. There is no retry, no
//! backoff, and no caching; loading is binary (pending/resolved) and the
//! caller decides whether a failure shows an error state or an empty gallery.
//! Concurrent duplicate loads are not suppressed — a session issues one load
//! per mount, so deduplication has nothing to do here.

use crate::manifest::{self, CategoryDef, MediaItem};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Where a manifest lives.
///
/// URL sources cover the deployed case (manifests served next to the site
/// assets); file sources cover local builds and tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    Url(String),
    File(PathBuf),
}

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("manifest parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the item manifest from `source`.
pub fn load_items(source: &ManifestSource) -> Result<Vec<MediaItem>, LoadError> {
    let raw = read_source(source)?;
    let items = manifest::parse_items(&raw)?;
    debug!(count = items.len(), "item manifest loaded");
    Ok(items)
}

/// Load the category manifest from `source`.
pub fn load_category_defs(source: &ManifestSource) -> Result<Vec<CategoryDef>, LoadError> {
    let raw = read_source(source)?;
    let defs = manifest::parse_category_defs(&raw)?;
    debug!(count = defs.len(), "category manifest loaded");
    Ok(defs)
}

/// Read the raw manifest text. One network or filesystem read, no retry.
fn read_source(source: &ManifestSource) -> Result<String, LoadError> {
    match source {
        ManifestSource::Url(url) => {
            debug!(%url, "fetching manifest");
            let body = reqwest::blocking::get(url)?.error_for_status()?.text()?;
            Ok(body)
        }
        ManifestSource::File(path) => Ok(fs::read_to_string(path)?),
    }
}
