//! Lightbox navigation state machine.
//!
//! Two states: `Closed` and `Open(i)`, where `i` indexes the currently
//! filtered list (not the global manifest). `next`/`prev` wrap around for
//! any list length ≥ 1. Whenever the underlying filtered list changes the
//! lightbox force-closes, so an open index can never dangle past a category
//! switch or a reload.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxState {
    Closed,
    /// Viewing the item at this position of the filtered list.
    Open(usize),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LightboxError {
    /// Opening on a zero-item filtered view. Defensive: clicking a rendered
    /// item implies the item exists, so seeing this means the rendered list
    /// and the navigator went out of sync.
    #[error("cannot open lightbox on an empty gallery")]
    EmptyGallery,
    /// Same desync class: the requested position is past the filtered list.
    #[error("lightbox index {index} out of range for list of {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Navigator over the currently filtered list.
///
/// The navigator tracks the filtered list's length, updated through
/// [`Navigator::list_changed`]; all index arithmetic is against that length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    state: LightboxState,
    len: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            state: LightboxState::Closed,
            len: 0,
        }
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    /// Position of the current item, `None` while closed.
    pub fn current(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(i) => Some(i),
            LightboxState::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    /// Open at `index` within the filtered list.
    ///
    /// Rejected on an empty list or an out-of-range index; state is
    /// unchanged on error.
    pub fn open_at(&mut self, index: usize) -> Result<(), LightboxError> {
        if self.len == 0 {
            return Err(LightboxError::EmptyGallery);
        }
        if index >= self.len {
            return Err(LightboxError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.state = LightboxState::Open(index);
        Ok(())
    }

    /// Advance with wraparound. No-op while closed.
    pub fn next(&mut self) {
        if let LightboxState::Open(i) = self.state {
            self.state = LightboxState::Open((i + 1) % self.len);
        }
    }

    /// Step back with wraparound. No-op while closed.
    pub fn prev(&mut self) {
        if let LightboxState::Open(i) = self.state {
            self.state = LightboxState::Open((i + self.len - 1) % self.len);
        }
    }

    pub fn close(&mut self) {
        self.state = LightboxState::Closed;
    }

    /// The filtered list was replaced. Forces `Closed` so a stale index can
    /// never survive the change.
    pub fn list_changed(&mut self, new_len: usize) {
        self.len = new_len;
        self.state = LightboxState::Closed;
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
