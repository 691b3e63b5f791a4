//! Manifest data model and parsing.
//!
//! A gallery session consumes two static JSON documents, fetched once per
//! mount by the [`crate::loader`]:
//!
//! ## Item manifest
//!
//! A flat array of media items. `path` and `name` are required; `metadata`
//! is an optional string-to-string map (location, subject, camera, ...):
//!
//! ```json
//! [
//!   { "path": "Photography/Nature/001-heron.jpg", "name": "Heron" },
//!   { "path": "Graphics/Logos/acme.png", "name": "Acme",
//!     "metadata": { "client": "Acme Corp" } }
//! ]
//! ```
//!
//! ## Category manifest
//!
//! An array of category definitions. `folder` is the path prefix that decides
//! membership (see [`crate::category::index`]). The camelCase flags come from
//! the deployed manifest format and are kept as-is on the wire:
//!
//! ```json
//! [
//!   { "id": "nature", "title": "Nature", "folder": "Photography/Nature" },
//!   { "id": "travel", "title": "Travel", "folder": "Photography/Travel",
//!     "subfoldersAsCategories": true }
//! ]
//! ```
//!
//! Unknown keys in either document are ignored so manifests can carry
//! presentation-only fields the engine has no use for.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One photo, graphic, or video in the gallery.
///
/// Immutable once loaded; the `GallerySession` owns the full item list for
/// the lifetime of a mount and everything else refers to items by index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Unique resource locator, relative to the asset base.
    pub path: String,
    /// Display name.
    pub name: String,
    /// Optional free-form string metadata (e.g. "location", "subject").
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, String>,
}

/// A category definition from the category manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDef {
    /// Unique id within a manifest.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Path prefix matched against `MediaItem::path` (substring match).
    pub folder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Items live in subdirectories under `folder`.
    #[serde(default, rename = "hasSubfolders")]
    pub has_subfolders: bool,
    /// Derive one pseudo-category per distinct first-level subfolder.
    #[serde(default, rename = "subfoldersAsCategories")]
    pub subfolders_as_categories: bool,
}

/// Parse an item manifest (a JSON array of [`MediaItem`]).
pub fn parse_items(raw: &str) -> Result<Vec<MediaItem>, serde_json::Error> {
    serde_json::from_str(raw)
}

/// Parse a category manifest (a JSON array of [`CategoryDef`]).
pub fn parse_category_defs(raw: &str) -> Result<Vec<CategoryDef>, serde_json::Error> {
    serde_json::from_str(raw)
}
