//! Category indexing — grouping the flat item list by path prefix.
//!
//! Membership is a substring match of the definition's `folder` against each
//! item's `path`, not a strict path-segment match. The deployed manifests
//! rely on this looseness (e.g. `folder = "Graphics/Logos"` matching
//! `"assets/Graphics/Logos/acme.png"`), so it is kept as-is.
//!
//! ## Subfolder pseudo-categories
//!
//! Definitions flagged `subfoldersAsCategories` are additionally partitioned
//! by the path segment immediately after the matched prefix: each distinct
//! first-level subfolder becomes its own pseudo-category, inserted right
//! after the parent in the output. Segment extraction lives in
//! [`subfolder_segment`] — it is a path-string convention, so it gets an
//! explicit, tested function rather than inline slicing.
//!
//! Categories (and pseudo-categories) never own items: they hold indices
//! into the item list the indexer was given, and are recomputed wholesale
//! whenever the manifest is reloaded.

use crate::manifest::{CategoryDef, MediaItem};
use tracing::debug;

/// A named grouping of media items, derived from one [`CategoryDef`]
/// (or synthesized from a subfolder partition).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Unique id. Pseudo-categories use `"<parent-id>/<segment>"`.
    pub id: String,
    pub title: String,
    /// Prefix that decided membership; every member's path contains it.
    pub folder_prefix: String,
    pub description: Option<String>,
    /// Member positions in the item list passed to [`index`], in manifest order.
    pub items: Vec<usize>,
}

/// Group `items` into categories according to `defs`.
///
/// Output order follows `defs`, with pseudo-categories (first-seen segment
/// order) directly after their parent. Definitions that match no item are
/// dropped.
pub fn index(items: &[MediaItem], defs: &[CategoryDef]) -> Vec<Category> {
    let mut categories = Vec::new();

    for def in defs {
        let members: Vec<usize> = items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.path.contains(&def.folder))
            .map(|(i, _)| i)
            .collect();

        if members.is_empty() {
            debug!(id = %def.id, "category matched no items, dropped");
            continue;
        }

        let pseudo = if def.subfolders_as_categories {
            partition_by_subfolder(items, def, &members)
        } else {
            Vec::new()
        };

        categories.push(Category {
            id: def.id.clone(),
            title: def.title.clone(),
            folder_prefix: def.folder.clone(),
            description: def.description.clone(),
            items: members,
        });
        categories.extend(pseudo);
    }

    categories
}

/// Synthesize one pseudo-category per distinct first-level subfolder of `def`.
///
/// Items sitting directly at the category root (no subfolder between the
/// prefix and the filename) belong only to the parent category.
fn partition_by_subfolder(
    items: &[MediaItem],
    def: &CategoryDef,
    members: &[usize],
) -> Vec<Category> {
    // First-seen order of segments, so pseudo-categories track manifest order.
    let mut pseudo: Vec<Category> = Vec::new();

    for &i in members {
        let Some(segment) = subfolder_segment(&items[i].path, &def.folder) else {
            continue;
        };

        match pseudo.iter_mut().find(|c| c.title == segment) {
            Some(cat) => cat.items.push(i),
            None => pseudo.push(Category {
                id: format!("{}/{}", def.id, segment),
                title: segment.to_string(),
                folder_prefix: format!("{}/{}", def.folder.trim_end_matches('/'), segment),
                description: None,
                items: vec![i],
            }),
        }
    }

    pseudo
}

/// Extract the path segment immediately after `prefix` in `path`.
///
/// Returns `None` when the prefix does not occur, or when nothing but the
/// filename follows it (the item sits at the category root, not inside a
/// subfolder):
///
/// - `("Photography/Travel/Japan/001.jpg", "Photography/Travel")` → `Some("Japan")`
/// - `("Photography/Travel/001.jpg", "Photography/Travel")` → `None`
/// - `("Graphics/Logos/a.png", "Photography")` → `None`
pub fn subfolder_segment<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let start = path.find(prefix)? + prefix.len();
    let rest = path[start..].trim_start_matches('/');

    let mut segments = rest.split('/').filter(|s| !s.is_empty());
    let first = segments.next()?;
    // The first segment is a subfolder only if something follows it.
    segments.next()?;
    Some(first)
}
