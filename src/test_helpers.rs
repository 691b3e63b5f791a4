//! Shared test fixtures for the viewfinder test suite.
//!
//! Small builders for the item/category shapes the deployed manifests use,
//! so unit tests across modules agree on one fixture vocabulary.

use crate::manifest::{CategoryDef, MediaItem};
use std::collections::BTreeMap;

/// A bare item with `name` derived from the path's file stem.
pub fn item(path: &str) -> MediaItem {
    let name = path
        .rsplit('/')
        .next()
        .and_then(|f| f.split('.').next())
        .unwrap_or(path)
        .to_string();
    MediaItem {
        path: path.to_string(),
        name,
        metadata: BTreeMap::new(),
    }
}

/// `n` items named `items/000.jpg` … in manifest order.
pub fn items_named(n: usize) -> Vec<MediaItem> {
    (0..n).map(|i| item(&format!("items/{i:03}.jpg"))).collect()
}

/// The graphic-design corner of the deployed manifest: two logo files and
/// one print file.
pub fn graphics_items() -> Vec<MediaItem> {
    vec![
        item("Graphics/Logos/1.png"),
        item("Graphics/Logos/2.png"),
        item("Graphics/Print/1.png"),
    ]
}

/// Category definitions matching [`graphics_items`].
pub fn graphics_defs() -> Vec<CategoryDef> {
    vec![
        CategoryDef {
            id: "logos".into(),
            title: "Logos".into(),
            folder: "Graphics/Logos".into(),
            description: None,
            has_subfolders: false,
            subfolders_as_categories: false,
        },
        CategoryDef {
            id: "print".into(),
            title: "Print".into(),
            folder: "Graphics/Print".into(),
            description: Some("Print work".into()),
            has_subfolders: false,
            subfolders_as_categories: false,
        },
    ]
}
