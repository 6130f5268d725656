//! Input Bindings Module
//!
//! Maps physical sources to logical actions and axes. One logical input may
//! aggregate any number of sources across keyboard, mouse and gamepad; all of
//! them raise the same edge on the same virtual button.

use std::collections::HashMap;

use super::{GamepadAxis, GamepadButton, KeyCode, MouseButton};

/// Logical buttons consumed by the interaction layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Primary interaction (default: E / LMB / South)
    Interact,
    /// Hold to examine the held object (default: R / RMB / LB / LT)
    Examine,
    /// Put into inventory (default: Q / West)
    Store,
    /// Close journal / leave dock / fade diary (default: Tab, Backspace / East)
    Close,
    /// Open or close the pause menu (default: Escape / Start)
    Menu,
    /// Hold to zoom the camera (default: Z / MMB / RS click)
    Zoom,
    /// Menu paging, derived from the `MenuVertical` axis
    PageNext,
    /// Menu paging, derived from the `MenuVertical` axis
    PagePrevious,
}

impl InputAction {
    /// Every logical button, in sampling order.
    pub const ALL: [InputAction; 8] = [
        InputAction::Interact,
        InputAction::Examine,
        InputAction::Store,
        InputAction::Close,
        InputAction::Menu,
        InputAction::Zoom,
        InputAction::PageNext,
        InputAction::PagePrevious,
    ];

    /// Stable name used as the virtual button id.
    pub fn name(self) -> &'static str {
        match self {
            InputAction::Interact => "interact",
            InputAction::Examine => "examine",
            InputAction::Store => "store",
            InputAction::Close => "close",
            InputAction::Menu => "menu",
            InputAction::Zoom => "zoom",
            InputAction::PageNext => "page_next",
            InputAction::PagePrevious => "page_previous",
        }
    }

    /// Derived actions are driven by an axis, never by direct sources.
    pub fn is_derived(self) -> bool {
        matches!(self, InputAction::PageNext | InputAction::PagePrevious)
    }
}

/// Logical analog axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisId {
    /// Horizontal look / examine rotation (pointer units)
    LookX,
    /// Vertical look / examine rotation (pointer units)
    LookY,
    MoveX,
    MoveY,
    /// Positive pages forward
    MenuVertical,
}

impl AxisId {
    pub const ALL: [AxisId; 5] = [
        AxisId::LookX,
        AxisId::LookY,
        AxisId::MoveX,
        AxisId::MoveY,
        AxisId::MenuVertical,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AxisId::LookX => "look_x",
            AxisId::LookY => "look_y",
            AxisId::MoveX => "move_x",
            AxisId::MoveY => "move_y",
            AxisId::MenuVertical => "menu_vertical",
        }
    }

    /// Bounded axes are clamped to -1..1 after summing their sources.
    /// Look axes carry raw pointer deltas and stay unbounded.
    pub fn is_bounded(self) -> bool {
        !matches!(self, AxisId::LookX | AxisId::LookY)
    }
}

/// A physical source for a logical button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputSource {
    Key(KeyCode),
    Mouse(MouseButton),
    Pad(GamepadButton),
    /// Analog input treated as a button once it passes `threshold`
    Trigger { axis: GamepadAxis, threshold: f32 },
}

/// A physical contribution to a logical axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AxisSource {
    MouseX { scale: f32 },
    MouseY { scale: f32 },
    Pad { axis: GamepadAxis, scale: f32 },
    Keys { negative: KeyCode, positive: KeyCode },
    PadButtons { negative: GamepadButton, positive: GamepadButton },
}

/// Action and axis bindings, remappable at run time.
#[derive(Debug, Clone)]
pub struct InputBindings {
    buttons: HashMap<InputAction, Vec<InputSource>>,
    axes: HashMap<AxisId, Vec<AxisSource>>,
}

impl Default for InputBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBindings {
    /// Create bindings with the default keyboard/mouse/gamepad layout.
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(InputAction::Interact, InputSource::Key(KeyCode::E));
        bindings.bind(InputAction::Interact, InputSource::Mouse(MouseButton::Left));
        bindings.bind(InputAction::Interact, InputSource::Pad(GamepadButton::South));

        bindings.bind(InputAction::Examine, InputSource::Key(KeyCode::R));
        bindings.bind(InputAction::Examine, InputSource::Mouse(MouseButton::Right));
        bindings.bind(InputAction::Examine, InputSource::Pad(GamepadButton::LeftBumper));
        bindings.bind(
            InputAction::Examine,
            InputSource::Trigger { axis: GamepadAxis::LeftTrigger, threshold: 0.5 },
        );

        bindings.bind(InputAction::Store, InputSource::Key(KeyCode::Q));
        bindings.bind(InputAction::Store, InputSource::Pad(GamepadButton::West));

        bindings.bind(InputAction::Close, InputSource::Key(KeyCode::Tab));
        bindings.bind(InputAction::Close, InputSource::Key(KeyCode::Backspace));
        bindings.bind(InputAction::Close, InputSource::Pad(GamepadButton::East));

        bindings.bind(InputAction::Menu, InputSource::Key(KeyCode::Escape));
        bindings.bind(InputAction::Menu, InputSource::Pad(GamepadButton::Start));

        bindings.bind(InputAction::Zoom, InputSource::Key(KeyCode::Z));
        bindings.bind(InputAction::Zoom, InputSource::Mouse(MouseButton::Middle));
        bindings.bind(InputAction::Zoom, InputSource::Pad(GamepadButton::RightStick));

        bindings.bind_axis(AxisId::LookX, AxisSource::MouseX { scale: 1.0 });
        bindings.bind_axis(
            AxisId::LookX,
            AxisSource::Pad { axis: GamepadAxis::RightStickX, scale: 10.0 },
        );
        bindings.bind_axis(AxisId::LookY, AxisSource::MouseY { scale: 1.0 });
        bindings.bind_axis(
            AxisId::LookY,
            AxisSource::Pad { axis: GamepadAxis::RightStickY, scale: -10.0 },
        );

        bindings.bind_axis(
            AxisId::MoveX,
            AxisSource::Keys { negative: KeyCode::A, positive: KeyCode::D },
        );
        bindings.bind_axis(
            AxisId::MoveX,
            AxisSource::Pad { axis: GamepadAxis::LeftStickX, scale: 1.0 },
        );
        bindings.bind_axis(
            AxisId::MoveY,
            AxisSource::Keys { negative: KeyCode::S, positive: KeyCode::W },
        );
        bindings.bind_axis(
            AxisId::MoveY,
            AxisSource::Pad { axis: GamepadAxis::LeftStickY, scale: 1.0 },
        );

        bindings.bind_axis(
            AxisId::MenuVertical,
            AxisSource::Keys { negative: KeyCode::PageUp, positive: KeyCode::PageDown },
        );
        bindings.bind_axis(
            AxisId::MenuVertical,
            AxisSource::PadButtons {
                negative: GamepadButton::DPadUp,
                positive: GamepadButton::DPadDown,
            },
        );
        // Stick down pages forward
        bindings.bind_axis(
            AxisId::MenuVertical,
            AxisSource::Pad { axis: GamepadAxis::LeftStickY, scale: -1.0 },
        );

        bindings
    }

    /// Bindings with nothing mapped.
    pub fn empty() -> Self {
        Self {
            buttons: HashMap::new(),
            axes: HashMap::new(),
        }
    }

    /// Add a source to an action. Binding the same source twice is a no-op.
    /// Derived actions cannot take direct sources.
    pub fn bind(&mut self, action: InputAction, source: InputSource) -> bool {
        if action.is_derived() {
            log::warn!("{} is axis-derived; ignoring direct binding {:?}", action.name(), source);
            return false;
        }
        let sources = self.buttons.entry(action).or_default();
        if sources.contains(&source) {
            return false;
        }
        sources.push(source);
        true
    }

    /// Remove one source from an action.
    pub fn unbind(&mut self, action: InputAction, source: InputSource) {
        if let Some(sources) = self.buttons.get_mut(&action) {
            sources.retain(|s| *s != source);
        }
    }

    /// Remove every source of an action.
    pub fn unbind_action(&mut self, action: InputAction) {
        self.buttons.remove(&action);
    }

    /// Add a contribution to an axis.
    pub fn bind_axis(&mut self, axis: AxisId, source: AxisSource) {
        let sources = self.axes.entry(axis).or_default();
        if !sources.contains(&source) {
            sources.push(source);
        }
    }

    pub fn unbind_axis(&mut self, axis: AxisId) {
        self.axes.remove(&axis);
    }

    /// Sources bound to an action.
    pub fn sources(&self, action: InputAction) -> &[InputSource] {
        self.buttons.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Contributions bound to an axis.
    pub fn axis_sources(&self, axis: AxisId) -> &[AxisSource] {
        self.axes.get(&axis).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Actions a key drives (reverse lookup for prompts and remap screens).
    pub fn actions_for_key(&self, key: KeyCode) -> Vec<InputAction> {
        InputAction::ALL
            .into_iter()
            .filter(|action| self.sources(*action).contains(&InputSource::Key(key)))
            .collect()
    }
}
