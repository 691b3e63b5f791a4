//! Keyboard input and the scoped global-key-listener guard.
//!
//! The lightbox owns the global key listener only while it is open. Rather
//! than a conditional listener inside a persistent handler, the session
//! acquires a [`KeyScope`] when the lightbox opens and drops it on every
//! close path (user close, category change, reload, session drop), so the
//! host's real listener is guaranteed to be released no matter how the
//! lightbox ends.

use std::fmt;
use std::sync::Arc;

/// Keys the lightbox responds to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
}

type Hook = Arc<dyn Fn() + Send + Sync>;

/// Host callbacks for registering/unregistering the global key listener.
pub struct KeyHooks {
    acquire: Hook,
    release: Hook,
}

impl KeyHooks {
    pub fn new(
        acquire: impl Fn() + Send + Sync + 'static,
        release: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            acquire: Arc::new(acquire),
            release: Arc::new(release),
        }
    }
}

impl fmt::Debug for KeyHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyHooks").finish_non_exhaustive()
    }
}

/// Live registration of the global key listener.
///
/// Acquiring runs the host's register hook; dropping runs the release hook.
pub struct KeyScope {
    release: Hook,
}

impl KeyScope {
    pub fn acquire(hooks: &KeyHooks) -> Self {
        (hooks.acquire)();
        Self {
            release: hooks.release.clone(),
        }
    }
}

impl Drop for KeyScope {
    fn drop(&mut self) {
        (self.release)();
    }
}

impl fmt::Debug for KeyScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyScope").finish_non_exhaustive()
    }
}
