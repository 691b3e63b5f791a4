//! Gallery session — the state owner for one mounted gallery.
//!
//! A [`GallerySession`] holds everything a mounted gallery needs: the loaded
//! items, the derived categories, the active selection (category + page),
//! the lightbox navigator, the autoplay timer, and the scoped key listener.
//! There is no module-level state; rendering several galleries side by side
//! means several independent sessions, and dropping a session releases every
//! resource it holds (key listener, pending autoplay deadline).
//!
//! The session is where the cross-module invariants are enforced:
//!
//! - changing the category resets the page to 1 and force-closes the
//!   lightbox (a lightbox index must never outlive its filtered list);
//! - `set_page` clamps into `[1, total_pages]` — the pure [`paging::select`]
//!   stays unclamped, the session never asks it for an out-of-range page;
//! - user navigation (`next`/`prev`/`open_lightbox`, arrow keys) pauses
//!   autoplay; timer-driven advances do not;
//! - the global key listener is held exactly while the lightbox is open,
//!   released on every exit path including drop.
//!
//! The lightbox navigates the *filtered list* — the active category's full
//! member list, not just the current page — so `next` from the last item on
//! a page flows into the next page's first item, matching the rendered
//! order.

use crate::autoplay::Autoplay;
use crate::category::{self, Category};
use crate::config::GalleryConfig;
use crate::input::{Key, KeyHooks, KeyScope};
use crate::lightbox::{LightboxError, LightboxState, Navigator};
use crate::loader::{self, LoadError, ManifestSource};
use crate::manifest::{CategoryDef, MediaItem};
use crate::paging::{self, ALL_CATEGORIES, PageView};
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Debug)]
pub struct GallerySession {
    items: Vec<MediaItem>,
    defs: Vec<CategoryDef>,
    categories: Vec<Category>,
    active_category: String,
    page: usize,
    config: GalleryConfig,
    navigator: Navigator,
    autoplay: Autoplay,
    key_hooks: Option<KeyHooks>,
    key_scope: Option<KeyScope>,
}

impl GallerySession {
    /// Mount a session over already-loaded manifests.
    ///
    /// Selection starts at the defaults: all categories, page 1, lightbox
    /// closed, autoplay stopped.
    pub fn new(items: Vec<MediaItem>, defs: Vec<CategoryDef>, config: GalleryConfig) -> Self {
        let categories = category::index(&items, &defs);
        let mut navigator = Navigator::new();
        navigator.list_changed(items.len());
        let autoplay = Autoplay::new(Duration::from_millis(config.autoplay_interval_ms));
        debug!(
            items = items.len(),
            categories = categories.len(),
            "gallery session mounted"
        );

        Self {
            items,
            defs,
            categories,
            active_category: ALL_CATEGORIES.to_string(),
            page: 1,
            config,
            navigator,
            autoplay,
            key_hooks: None,
            key_scope: None,
        }
    }

    /// Load both manifests from their sources and mount. One fetch each,
    /// no retry — on failure the caller shows an error state and may call
    /// again on user-triggered retry.
    pub fn load(
        items_source: &ManifestSource,
        defs_source: &ManifestSource,
        config: GalleryConfig,
    ) -> Result<Self, LoadError> {
        let items = loader::load_items(items_source)?;
        let defs = loader::load_category_defs(defs_source)?;
        Ok(Self::new(items, defs, config))
    }

    /// Install the host's key-listener hooks. The acquire hook runs each
    /// time the lightbox opens, the release hook when it closes.
    pub fn set_key_hooks(&mut self, hooks: KeyHooks) {
        self.key_hooks = Some(hooks);
    }

    // =========================================================================
    // Selection
    // =========================================================================

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active_category(&self) -> &str {
        &self.active_category
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Switch the active category. Resets the page to 1 and force-closes the
    /// lightbox — the filtered list is about to change, so an open index
    /// would point at the wrong item.
    pub fn set_category(&mut self, id: &str) {
        self.active_category = id.to_string();
        self.page = 1;
        self.on_filtered_list_changed();
    }

    /// Set the current page, clamped into `[1, total_pages]`.
    ///
    /// Policy: out-of-range requests clamp rather than showing an empty
    /// grid. The pure `select` stays unclamped; the session simply never
    /// hands it a bad page.
    pub fn set_page(&mut self, page: usize) {
        let total = paging::total_pages(self.filtered_len(), self.config.page_size);
        self.page = page.clamp(1, total);
    }

    /// The current grid page for the active category.
    pub fn visible(&self) -> PageView<'_> {
        paging::select(
            &self.categories,
            &self.items,
            &self.active_category,
            self.page,
            self.config.page_size,
        )
    }

    /// Length of the active category's full member list (all pages).
    pub fn filtered_len(&self) -> usize {
        if self.active_category == ALL_CATEGORIES {
            self.items.len()
        } else {
            self.categories
                .iter()
                .find(|c| c.id == self.active_category)
                .map(|c| c.items.len())
                .unwrap_or(0)
        }
    }

    fn filtered_item(&self, index: usize) -> Option<&MediaItem> {
        if self.active_category == ALL_CATEGORIES {
            self.items.get(index)
        } else {
            self.categories
                .iter()
                .find(|c| c.id == self.active_category)
                .and_then(|c| c.items.get(index))
                .and_then(|&i| self.items.get(i))
        }
    }

    /// Replace the item set (manifest reloaded). Categories are reindexed
    /// wholesale and the selection returns to mount defaults.
    pub fn reload(&mut self, items: Vec<MediaItem>) {
        self.items = items;
        self.categories = category::index(&self.items, &self.defs);
        self.active_category = ALL_CATEGORIES.to_string();
        self.page = 1;
        self.on_filtered_list_changed();
        debug!(items = self.items.len(), "gallery session reloaded");
    }

    // =========================================================================
    // Lightbox
    // =========================================================================

    pub fn lightbox(&self) -> LightboxState {
        self.navigator.state()
    }

    /// The item the lightbox is showing, `None` while closed.
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.navigator.current().and_then(|i| self.filtered_item(i))
    }

    /// Open the lightbox at `index` within the active filtered list.
    ///
    /// User interaction: pauses autoplay. Acquires the key scope on success.
    pub fn open_lightbox(&mut self, index: usize) -> Result<(), LightboxError> {
        self.navigator.open_at(index)?;
        self.autoplay.stop();
        if self.key_scope.is_none()
            && let Some(hooks) = &self.key_hooks
        {
            self.key_scope = Some(KeyScope::acquire(hooks));
        }
        Ok(())
    }

    /// Open at position `k` of the currently visible page — the index the
    /// grid renderer has — translated into the filtered list.
    pub fn open_at_visible(&mut self, k: usize) -> Result<(), LightboxError> {
        let offset = (self.page - 1) * self.config.page_size;
        self.open_lightbox(offset + k)
    }

    /// Advance to the next item (wraps). Pauses autoplay.
    pub fn next(&mut self) {
        self.autoplay.stop();
        self.navigator.next();
    }

    /// Step to the previous item (wraps). Pauses autoplay.
    pub fn prev(&mut self) {
        self.autoplay.stop();
        self.navigator.prev();
    }

    pub fn close_lightbox(&mut self) {
        self.navigator.close();
        self.key_scope = None;
        self.autoplay.stop();
    }

    /// A key event while the lightbox is open. Ignored while closed — the
    /// host should not even be forwarding keys then, since the listener is
    /// only registered inside the key scope.
    pub fn handle_key(&mut self, key: Key) {
        if !self.navigator.is_open() {
            return;
        }
        match key {
            Key::ArrowRight => self.next(),
            Key::ArrowLeft => self.prev(),
            Key::Escape => self.close_lightbox(),
        }
    }

    /// Shared teardown for every filtered-list change.
    fn on_filtered_list_changed(&mut self) {
        self.navigator.list_changed(self.filtered_len());
        self.key_scope = None;
        self.autoplay.stop();
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    pub fn autoplay_playing(&self) -> bool {
        self.autoplay.playing()
    }

    /// Start autoplay. No-op unless the lightbox is open — there is nothing
    /// to advance otherwise.
    pub fn start_autoplay(&mut self, now: Instant) {
        if self.navigator.is_open() {
            self.autoplay.start(now);
        }
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop();
    }

    /// Drive the timer. Returns `true` when this tick advanced the lightbox.
    /// A timer-driven advance does not pause autoplay.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.navigator.is_open() {
            // Belt for the forced-close paths: a closed lightbox must never
            // keep a live deadline.
            self.autoplay.stop();
            return false;
        }
        if self.autoplay.poll(now) {
            self.navigator.next();
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{graphics_defs, graphics_items, items_named};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn session() -> GallerySession {
        GallerySession::new(graphics_items(), graphics_defs(), GalleryConfig::default())
    }

    fn small_pages_session(n: usize, page_size: usize) -> GallerySession {
        let config = GalleryConfig {
            page_size,
            ..GalleryConfig::default()
        };
        GallerySession::new(items_named(n), Vec::new(), config)
    }

    #[test]
    fn mount_defaults() {
        let s = session();
        assert_eq!(s.active_category(), "all");
        assert_eq!(s.page(), 1);
        assert_eq!(s.lightbox(), LightboxState::Closed);
        assert!(!s.autoplay_playing());
    }

    #[test]
    fn category_change_resets_page_and_closes_lightbox() {
        let mut s = small_pages_session(10, 3);
        s.set_page(3);
        s.open_lightbox(5).unwrap();
        assert_eq!(s.lightbox(), LightboxState::Open(5));

        s.set_category("nope");
        assert_eq!(s.page(), 1);
        assert_eq!(s.lightbox(), LightboxState::Closed);
    }

    #[test]
    fn set_page_clamps_to_valid_range() {
        let mut s = small_pages_session(10, 3); // 4 pages
        s.set_page(0);
        assert_eq!(s.page(), 1);
        s.set_page(99);
        assert_eq!(s.page(), 4);
        s.set_page(2);
        assert_eq!(s.page(), 2);
    }

    #[test]
    fn open_indexes_the_filtered_list_not_the_manifest() {
        let mut s = session();
        s.set_category("print");
        s.open_lightbox(0).unwrap();
        // First item of the Print category, not of the whole manifest.
        assert!(s.current_item().unwrap().path.contains("Graphics/Print"));
    }

    #[test]
    fn next_follows_rendered_order_across_pages() {
        let mut s = small_pages_session(5, 2);
        // Last visible position on page 2 is filtered index 3.
        s.set_page(2);
        s.open_at_visible(1).unwrap();
        assert_eq!(s.lightbox(), LightboxState::Open(3));
        s.next();
        assert_eq!(s.current_item().unwrap().path, "items/004.jpg");
    }

    #[test]
    fn open_on_empty_filtered_list_is_rejected() {
        let mut s = session();
        s.set_category("does-not-exist");
        assert_eq!(s.open_lightbox(0), Err(LightboxError::EmptyGallery));
        assert_eq!(s.lightbox(), LightboxState::Closed);
    }

    #[test]
    fn prev_wraps_to_last() {
        let mut s = small_pages_session(3, 40);
        s.open_lightbox(0).unwrap();
        s.prev();
        assert_eq!(s.lightbox(), LightboxState::Open(2));
    }

    #[test]
    fn reload_reindexes_and_resets_selection() {
        let mut s = session();
        s.set_category("logos");
        s.open_lightbox(0).unwrap();

        s.reload(items_named(2));
        assert_eq!(s.active_category(), "all");
        assert_eq!(s.page(), 1);
        assert_eq!(s.lightbox(), LightboxState::Closed);
        assert_eq!(s.filtered_len(), 2);
        // Old defs match nothing in the new item set.
        assert!(s.categories().is_empty());
    }

    // =========================================================================
    // Autoplay wiring
    // =========================================================================

    #[test]
    fn tick_advances_while_playing() {
        let base = Instant::now();
        let mut s = small_pages_session(3, 40);
        s.open_lightbox(0).unwrap();
        s.start_autoplay(base);

        assert!(!s.tick(base + Duration::from_secs(1)));
        assert!(s.tick(base + Duration::from_secs(3)));
        assert_eq!(s.lightbox(), LightboxState::Open(1));
        // Timer-driven advance keeps playing.
        assert!(s.autoplay_playing());
    }

    #[test]
    fn manual_navigation_pauses_autoplay() {
        let base = Instant::now();
        let mut s = small_pages_session(3, 40);
        s.open_lightbox(0).unwrap();
        s.start_autoplay(base);

        s.prev();
        assert!(!s.autoplay_playing());
        // No automatic advance after the pause.
        assert!(!s.tick(base + Duration::from_secs(30)));
        assert_eq!(s.lightbox(), LightboxState::Open(2));
    }

    #[test]
    fn autoplay_requires_open_lightbox() {
        let mut s = small_pages_session(3, 40);
        s.start_autoplay(Instant::now());
        assert!(!s.autoplay_playing());
    }

    #[test]
    fn close_cancels_autoplay() {
        let base = Instant::now();
        let mut s = small_pages_session(3, 40);
        s.open_lightbox(0).unwrap();
        s.start_autoplay(base);
        s.close_lightbox();
        assert!(!s.autoplay_playing());
    }

    #[test]
    fn category_change_cancels_autoplay() {
        let base = Instant::now();
        let mut s = session();
        s.open_lightbox(0).unwrap();
        s.start_autoplay(base);
        s.set_category("logos");
        assert!(!s.autoplay_playing());
    }

    // =========================================================================
    // Key handling and the scoped listener
    // =========================================================================

    fn hooked_session(n: usize) -> (GallerySession, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let mut s = small_pages_session(n, 40);
        let acquired = Arc::new(AtomicUsize::new(0));
        let released = Arc::new(AtomicUsize::new(0));
        let (a, r) = (acquired.clone(), released.clone());
        s.set_key_hooks(KeyHooks::new(
            move || {
                a.fetch_add(1, Ordering::SeqCst);
            },
            move || {
                r.fetch_add(1, Ordering::SeqCst);
            },
        ));
        (s, acquired, released)
    }

    #[test]
    fn arrow_keys_navigate_and_escape_closes() {
        let mut s = small_pages_session(3, 40);
        s.open_lightbox(1).unwrap();

        s.handle_key(Key::ArrowRight);
        assert_eq!(s.lightbox(), LightboxState::Open(2));
        s.handle_key(Key::ArrowLeft);
        assert_eq!(s.lightbox(), LightboxState::Open(1));
        s.handle_key(Key::Escape);
        assert_eq!(s.lightbox(), LightboxState::Closed);
    }

    #[test]
    fn keys_ignored_while_closed() {
        let mut s = small_pages_session(3, 40);
        s.handle_key(Key::ArrowRight);
        assert_eq!(s.lightbox(), LightboxState::Closed);
    }

    #[test]
    fn arrow_key_pauses_autoplay() {
        let base = Instant::now();
        let mut s = small_pages_session(3, 40);
        s.open_lightbox(0).unwrap();
        s.start_autoplay(base);
        s.handle_key(Key::ArrowRight);
        assert!(!s.autoplay_playing());
    }

    #[test]
    fn key_scope_held_exactly_while_open() {
        let (mut s, acquired, released) = hooked_session(3);

        s.open_lightbox(0).unwrap();
        assert_eq!(acquired.load(Ordering::SeqCst), 1);
        assert_eq!(released.load(Ordering::SeqCst), 0);

        s.close_lightbox();
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reopening_while_open_does_not_double_acquire() {
        let (mut s, acquired, _) = hooked_session(3);
        s.open_lightbox(0).unwrap();
        s.open_lightbox(2).unwrap();
        assert_eq!(acquired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn forced_close_releases_key_scope() {
        let (mut s, _, released) = hooked_session(3);
        s.open_lightbox(0).unwrap();
        s.set_category("all");
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn drop_releases_key_scope() {
        let (mut s, _, released) = hooked_session(3);
        s.open_lightbox(0).unwrap();
        drop(s);
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_open_does_not_acquire() {
        let (mut s, acquired, _) = hooked_session(3);
        assert!(s.open_lightbox(7).is_err());
        assert_eq!(acquired.load(Ordering::SeqCst), 0);
    }
}
