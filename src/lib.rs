//! # Viewfinder
//!
//! A framework-independent browsing engine for portfolio media galleries:
//! static JSON manifests in, grid pages and a lightbox state machine out.
//! The host UI (web view, native toolkit, terminal — anything with an event
//! loop) renders whatever the engine says is visible and feeds events back
//! in; the engine owns no pixels and spawns no threads.
//!
//! # Architecture: Session-Owned State
//!
//! Everything a mounted gallery needs lives in one [`session::GallerySession`]:
//!
//! ```text
//! manifests (JSON)  ──load──▶   items + category defs
//!                               │
//!                   ──index──▶  categories (prefix-matched, pseudo-subfolders)
//!                               │
//!   selection (category, page) ──select──▶ visible grid page
//!                               │
//!   clicks / keys / timer ──▶   lightbox navigator (Closed | Open(i))
//! ```
//!
//! There is deliberately no module-level state: two galleries on one screen
//! are two sessions, and dropping a session releases everything it holds —
//! the pending autoplay deadline and the global key listener registration.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`manifest`] | Item/category data model and JSON manifest parsing |
//! | [`loader`] | One-shot manifest fetch (HTTP or file), no retry |
//! | [`category`] | Prefix-based category indexing, subfolder pseudo-categories |
//! | [`paging`] | Pure filter + paginate over the active category |
//! | [`lightbox`] | Lightbox navigator state machine with wraparound |
//! | [`autoplay`] | Cooperative deadline-based advance timer |
//! | [`input`] | Key events and the scoped global-key-listener guard |
//! | [`session`] | State owner wiring all of the above, invariant enforcement |
//! | [`repos`] | External repository listing (single unauthenticated GET) |
//! | [`config`] | Sparse TOML config: page size, autoplay interval, asset base |
//!
//! # Design Decisions
//!
//! ## Pure Core, Stateful Shell
//!
//! [`paging::select`] and [`category::index`] are pure functions; every
//! stateful invariant (page resets on category change, forced lightbox close
//! when the filtered list changes, pause-on-interaction) is enforced in one
//! place, the session. Unit tests exercise the pure layers with plain data
//! and the session with synthetic clocks and counting hooks — no UI runtime
//! anywhere in the test suite.
//!
//! ## Polling Over Threads
//!
//! The autoplay timer holds a deadline instead of spawning a thread: the
//! host calls [`session::GallerySession::tick`] from its event loop with the
//! current [`std::time::Instant`]. Single-threaded galleries need no locks,
//! and the firing schedule is testable with synthetic instants.
//!
//! ## Substring Category Matching
//!
//! Category membership is a substring match of the definition's folder
//! against item paths, not a path-segment match. The deployed manifests
//! depend on this looseness, so the engine keeps it (see [`category`]).
//!
//! ## One Fetch, No Retry
//!
//! Manifest and repository fetches are single attempts. Failures surface as
//! typed errors ([`loader::LoadError`]) for the host to render an error
//! state with a manual retry action; automatic retry/backoff is explicitly
//! out of scope.

pub mod autoplay;
pub mod category;
pub mod config;
pub mod input;
pub mod lightbox;
pub mod loader;
pub mod manifest;
pub mod paging;
pub mod repos;
pub mod session;

#[cfg(test)]
pub(crate) mod test_helpers;
