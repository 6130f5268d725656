//! Mouse Input Module
//!
//! Raw mouse channel: button levels, scroll wheel and accumulated pointer
//! motion. Decoupled from winit to use generic types.

/// Mouse button identifiers, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    /// Additional mouse buttons (button 4, 5, etc.)
    Other(u16),
}

/// State of the three main mouse buttons.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonState {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl ButtonState {
    /// Update button state for a specific button.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Middle => self.middle = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Other(_) => {} // Not bindable
        }
    }

    /// Check if a specific button is pressed.
    pub fn is_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => self.left,
            MouseButton::Middle => self.middle,
            MouseButton::Right => self.right,
            MouseButton::Other(_) => false,
        }
    }

    /// Check if any button is pressed.
    pub fn any_pressed(&self) -> bool {
        self.left || self.middle || self.right
    }
}

/// Scroll wheel delta, can be line-based or pixel-based.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollDelta {
    /// Horizontal scroll (positive = right)
    pub x: f32,
    /// Vertical scroll (positive = up/forward)
    pub y: f32,
}

impl ScrollDelta {
    /// Create from line delta (common for mouse wheels).
    pub fn from_lines(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create from pixel delta (common for trackpads).
    /// Normalizes by dividing by 100 to get approximate line equivalents.
    pub fn from_pixels(x: f64, y: f64) -> Self {
        Self {
            x: (x / 100.0) as f32,
            y: (y / 100.0) as f32,
        }
    }

    /// Check if there's any scroll movement.
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Complete mouse state tracking.
///
/// Pointer motion accumulates between samples and is consumed atomically by
/// the input router once per tick, so several OS motion events arriving
/// within one frame add up instead of overwriting each other.
#[derive(Debug, Clone, Default)]
pub struct MouseState {
    /// Current button states.
    pub buttons: ButtonState,
    /// Scroll accumulated since the last consume.
    scroll: ScrollDelta,
    /// Accumulated horizontal motion since last consume.
    delta_x: f32,
    /// Accumulated vertical motion since last consume.
    delta_y: f32,
    /// Whether the pointer is inside the window.
    pub in_window: bool,
}

impl MouseState {
    /// Create a new mouse state with all buttons released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a mouse button press/release event.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        self.buttons.set(button, pressed);
    }

    /// Accumulate raw pointer motion.
    #[inline]
    pub fn accumulate_delta(&mut self, dx: f32, dy: f32) {
        self.delta_x += dx;
        self.delta_y += dy;
    }

    /// Return the accumulated motion and reset it to zero.
    #[inline]
    pub fn consume_delta(&mut self) -> (f32, f32) {
        let delta = (self.delta_x, self.delta_y);
        self.delta_x = 0.0;
        self.delta_y = 0.0;
        delta
    }

    /// Accumulated motion without consuming it.
    #[inline]
    pub fn peek_delta(&self) -> (f32, f32) {
        (self.delta_x, self.delta_y)
    }

    /// Accumulate a scroll wheel event.
    pub fn add_scroll(&mut self, delta: ScrollDelta) {
        self.scroll.x += delta.x;
        self.scroll.y += delta.y;
    }

    /// Return the accumulated scroll and reset it.
    pub fn consume_scroll(&mut self) -> ScrollDelta {
        std::mem::take(&mut self.scroll)
    }

    /// Handle the pointer leaving the window.
    pub fn leave_window(&mut self) {
        self.in_window = false;
        self.delta_x = 0.0;
        self.delta_y = 0.0;
    }

    /// Reset all mouse state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
