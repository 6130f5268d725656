//! Cursor Manager Module
//!
//! Tracks whether the pointer drives the camera (captured, hidden) or is
//! released for UI (menu, cutscene with cursor, window without focus).
//!
//! The interaction state machine owns one of these and flips it on mode
//! changes; the host pushes the result to its window when `is_dirty()` is set
//! (see [`apply_to_window`](super::winit_adapter::apply_to_window)).
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut cursor = CursorManager::new();
//!
//! // Menu opened: release the pointer
//! cursor.release();
//!
//! // Once per frame
//! if cursor.is_dirty() {
//!     apply_to_window(&mut cursor, &window);
//! }
//! ```

/// Actions that the CursorManager recommends after handling events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorAction {
    /// No action needed
    None,
    /// Push cursor state to the window
    ApplyState,
}

/// Pointer capture state.
#[derive(Debug, Clone)]
pub struct CursorManager {
    /// Whether the pointer drives the camera (captured, hidden)
    captured: bool,
    /// Whether the window currently has focus
    has_focus: bool,
    /// Tracks if state changed and needs to be applied to the window
    state_dirty: bool,
}

impl Default for CursorManager {
    fn default() -> Self {
        Self::new()
    }
}

impl CursorManager {
    /// Create a manager with the pointer captured, ready for free look.
    pub fn new() -> Self {
        Self {
            captured: true,
            has_focus: true,
            state_dirty: true, // Need to apply initial state
        }
    }

    /// Create a manager with the pointer released (starting in a menu).
    pub fn new_released() -> Self {
        Self {
            captured: false,
            has_focus: true,
            state_dirty: true,
        }
    }

    pub fn is_captured(&self) -> bool {
        self.captured
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Check if cursor state needs to be applied to the window.
    pub fn is_dirty(&self) -> bool {
        self.state_dirty
    }

    /// Clear the dirty flag after applying state.
    pub fn clear_dirty(&mut self) {
        self.state_dirty = false;
    }

    /// Capture the pointer for camera look.
    pub fn capture(&mut self) -> CursorAction {
        if self.captured {
            return CursorAction::None;
        }
        self.captured = true;
        self.state_dirty = true;
        CursorAction::ApplyState
    }

    /// Release the pointer for UI.
    pub fn release(&mut self) -> CursorAction {
        if !self.captured {
            return CursorAction::None;
        }
        self.captured = false;
        self.state_dirty = true;
        CursorAction::ApplyState
    }

    /// Window focus changed. The capture preference is kept and restored
    /// when focus comes back.
    pub fn set_focus(&mut self, focused: bool) -> CursorAction {
        if self.has_focus == focused {
            return CursorAction::None;
        }
        self.has_focus = focused;
        self.state_dirty = true;
        CursorAction::ApplyState
    }

    /// The cursor is hidden only while captured and focused.
    pub fn should_cursor_be_visible(&self) -> bool {
        !(self.captured && self.has_focus)
    }

    pub fn should_cursor_be_grabbed(&self) -> bool {
        self.captured && self.has_focus
    }
}
