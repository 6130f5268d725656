//! winit Adapter
//!
//! Translates winit window/device events into the raw input channels and
//! pushes [`CursorManager`] state back to a winit window. This is the only
//! place in the input module that knows about winit.

use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window};

use super::{CursorManager, InputState, KeyCode, MouseButton, ScrollDelta};

/// What a window event meant for the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowInput {
    /// The event updated raw input state
    Handled,
    /// Focus was lost; raw state has been reset and the router should flush
    FocusLost,
    FocusGained,
    /// Not an input event
    Ignored,
}

/// Map a winit physical key code to the engine key code.
pub fn map_key(code: WinitKeyCode) -> KeyCode {
    match code {
        WinitKeyCode::KeyW => KeyCode::W,
        WinitKeyCode::KeyA => KeyCode::A,
        WinitKeyCode::KeyS => KeyCode::S,
        WinitKeyCode::KeyD => KeyCode::D,
        WinitKeyCode::Space => KeyCode::Space,
        WinitKeyCode::ShiftLeft => KeyCode::ShiftLeft,
        WinitKeyCode::ShiftRight => KeyCode::ShiftRight,
        WinitKeyCode::ControlLeft => KeyCode::ControlLeft,
        WinitKeyCode::ControlRight => KeyCode::ControlRight,
        WinitKeyCode::ArrowUp => KeyCode::ArrowUp,
        WinitKeyCode::ArrowDown => KeyCode::ArrowDown,
        WinitKeyCode::ArrowLeft => KeyCode::ArrowLeft,
        WinitKeyCode::ArrowRight => KeyCode::ArrowRight,
        WinitKeyCode::KeyE => KeyCode::E,
        WinitKeyCode::KeyF => KeyCode::F,
        WinitKeyCode::KeyQ => KeyCode::Q,
        WinitKeyCode::KeyR => KeyCode::R,
        WinitKeyCode::KeyZ => KeyCode::Z,
        WinitKeyCode::KeyJ => KeyCode::J,
        WinitKeyCode::KeyI => KeyCode::I,
        WinitKeyCode::Escape => KeyCode::Escape,
        WinitKeyCode::Enter => KeyCode::Enter,
        WinitKeyCode::Tab => KeyCode::Tab,
        WinitKeyCode::Backspace => KeyCode::Backspace,
        WinitKeyCode::PageUp => KeyCode::PageUp,
        WinitKeyCode::PageDown => KeyCode::PageDown,
        _ => KeyCode::Unknown,
    }
}

/// Map a winit mouse button to the engine mouse button.
pub fn map_mouse_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n),
    }
}

/// Feed a window event into the raw input state.
pub fn handle_window_event(input: &mut InputState, event: &WindowEvent) -> WindowInput {
    match event {
        WindowEvent::KeyboardInput { event, .. } => {
            if let PhysicalKey::Code(code) = event.physical_key {
                input
                    .keyboard
                    .handle_key(map_key(code), event.state == ElementState::Pressed);
            }
            WindowInput::Handled
        }
        WindowEvent::MouseInput { state, button, .. } => {
            input
                .mouse
                .set_button(map_mouse_button(*button), *state == ElementState::Pressed);
            WindowInput::Handled
        }
        WindowEvent::MouseWheel { delta, .. } => {
            let scroll = match delta {
                MouseScrollDelta::LineDelta(x, y) => ScrollDelta::from_lines(*x, *y),
                MouseScrollDelta::PixelDelta(pos) => ScrollDelta::from_pixels(pos.x, pos.y),
            };
            input.mouse.add_scroll(scroll);
            WindowInput::Handled
        }
        WindowEvent::CursorEntered { .. } => {
            input.mouse.in_window = true;
            WindowInput::Handled
        }
        WindowEvent::CursorLeft { .. } => {
            input.mouse.leave_window();
            WindowInput::Handled
        }
        WindowEvent::Focused(false) => {
            // Key-up events are not delivered to an unfocused window
            input.reset();
            WindowInput::FocusLost
        }
        WindowEvent::Focused(true) => WindowInput::FocusGained,
        _ => WindowInput::Ignored,
    }
}

/// Feed a device event (raw pointer motion) into the raw input state.
pub fn handle_device_event(input: &mut InputState, event: &DeviceEvent) -> bool {
    match event {
        DeviceEvent::MouseMotion { delta } => {
            input.mouse.accumulate_delta(delta.0 as f32, delta.1 as f32);
            true
        }
        _ => false,
    }
}

/// Push cursor visibility and grab to the window and clear the dirty flag.
pub fn apply_to_window(cursor: &mut CursorManager, window: &Window) {
    window.set_cursor_visible(cursor.should_cursor_be_visible());
    if cursor.should_cursor_be_grabbed() {
        if window.set_cursor_grab(CursorGrabMode::Locked).is_err() {
            let _ = window.set_cursor_grab(CursorGrabMode::Confined);
        }
    } else {
        let _ = window.set_cursor_grab(CursorGrabMode::None);
    }
    cursor.clear_dirty();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_default_binding_keys() {
        assert_eq!(map_key(WinitKeyCode::KeyE), KeyCode::E);
        assert_eq!(map_key(WinitKeyCode::Escape), KeyCode::Escape);
        assert_eq!(map_key(WinitKeyCode::Tab), KeyCode::Tab);
        assert_eq!(map_key(WinitKeyCode::F12), KeyCode::Unknown);
    }

    #[test]
    fn test_map_mouse_buttons() {
        assert_eq!(map_mouse_button(winit::event::MouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(winit::event::MouseButton::Middle), MouseButton::Middle);
        assert_eq!(map_mouse_button(winit::event::MouseButton::Other(7)), MouseButton::Other(7));
    }

    #[test]
    fn test_focus_loss_resets_raw_state() {
        let mut input = InputState::new();
        input.keyboard.handle_key(KeyCode::E, true);
        let outcome = handle_window_event(&mut input, &WindowEvent::Focused(false));
        assert_eq!(outcome, WindowInput::FocusLost);
        assert!(!input.keyboard.is_down(KeyCode::E));
    }

    #[test]
    fn test_mouse_motion_accumulates() {
        let mut input = InputState::new();
        assert!(handle_device_event(&mut input, &DeviceEvent::MouseMotion { delta: (2.0, -1.0) }));
        assert!(handle_device_event(&mut input, &DeviceEvent::MouseMotion { delta: (1.0, 0.0) }));
        assert_eq!(input.mouse.peek_delta(), (3.0, -1.0));
    }
}
