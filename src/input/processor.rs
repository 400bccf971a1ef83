//! Converts raw platform events into explainer commands.
//!
//! The `InputProcessor` owns all transient input state (cursor position,
//! drag detection, viewport size) and the key-binding map. It is the only
//! thing that sits between raw window or DOM events and the engine's
//! [`execute`](crate::NitrosoEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton, PanelButton};
use crate::engine::command::ExplainerCommand;
use crate::options::KeybindingOptions;

/// Squared pixel distance a pressed cursor must travel to count as a drag.
const DRAG_THRESHOLD_SQ: f32 = 1.0;

/// Converts raw events into [`ExplainerCommand`]s.
///
/// # Usage
///
/// ```ignore
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("ArrowRight") {
///     engine.execute(cmd);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    mouse_pos: Vec2,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Whether the current press has moved far enough to be a drag.
    dragging: bool,
    /// Viewport size in physical pixels.
    viewport: (u32, u32),
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a processor with the given key bindings.
    #[must_use]
    pub fn new(key_bindings: KeybindingOptions) -> Self {
        Self {
            mouse_pos: Vec2::ZERO,
            mouse_pressed: false,
            dragging: false,
            viewport: (0, 0),
            key_bindings,
        }
    }

    /// Current cursor position in physical pixels.
    #[must_use]
    pub fn mouse_pos(&self) -> Vec2 {
        self.mouse_pos
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Whether the current press turned into a drag.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Replace the key bindings.
    pub fn set_key_bindings(&mut self, key_bindings: KeybindingOptions) {
        self.key_bindings = key_bindings;
    }

    /// Tell the processor the viewport size without producing a command.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<ExplainerCommand> {
        self.key_bindings.lookup(key).map(|action| action.to_command())
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<ExplainerCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(Vec2::new(x, y)),
            InputEvent::CursorLeft => {
                self.mouse_pressed = false;
                self.dragging = false;
                Some(ExplainerCommand::ClearHover)
            }
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                    self.dragging = false;
                }
                None
            }
            InputEvent::Scroll { delta } => Some(ExplainerCommand::Zoom { delta }),
            InputEvent::Button(PanelButton::Previous) => Some(ExplainerCommand::Previous),
            InputEvent::Button(PanelButton::Next) => Some(ExplainerCommand::Next),
            InputEvent::Resized { width, height } => {
                self.viewport = (width, height);
                Some(ExplainerCommand::Resize { width, height })
            }
        }
    }

    /// Convert a pixel position to normalized device coordinates, or
    /// `None` before the viewport size is known.
    #[must_use]
    pub fn to_ndc(&self, pos: Vec2) -> Option<Vec2> {
        let (width, height) = self.viewport;
        if width == 0 || height == 0 {
            return None;
        }
        Some(Vec2::new(
            (2.0 * pos.x / width as f32) - 1.0,
            1.0 - (2.0 * pos.y / height as f32),
        ))
    }

    /// Cursor moved: rotate while dragging, otherwise hover.
    fn handle_cursor_moved(&mut self, pos: Vec2) -> Option<ExplainerCommand> {
        let delta = pos - self.mouse_pos;
        self.mouse_pos = pos;

        if self.mouse_pressed {
            if delta.length_squared() > DRAG_THRESHOLD_SQ {
                self.dragging = true;
            }
            return Some(ExplainerCommand::RotateCamera { delta });
        }

        self.to_ndc(pos).map(|ndc| ExplainerCommand::Hover { ndc })
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new(KeybindingOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized() -> InputProcessor {
        let mut input = InputProcessor::default();
        let _ = input.handle_event(InputEvent::Resized {
            width: 800,
            height: 600,
        });
        input
    }

    #[test]
    fn default_bindings() {
        let input = InputProcessor::default();
        assert_eq!(input.handle_key_press("ArrowRight"), Some(ExplainerCommand::Next));
        assert_eq!(input.handle_key_press("KeyA"), Some(ExplainerCommand::Previous));
        assert_eq!(
            input.handle_key_press("Digit3"),
            Some(ExplainerCommand::GoToStep { index: 2 })
        );
        assert_eq!(
            input.handle_key_press("KeyR"),
            Some(ExplainerCommand::ToggleAutoRotate)
        );
        assert_eq!(input.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn rebinding_keys() {
        let mut bindings = KeybindingOptions::default();
        let _ = bindings
            .bindings
            .insert("Space".into(), crate::input::KeyAction::NextStep);
        let input = InputProcessor::new(bindings);
        assert_eq!(input.handle_key_press("Space"), Some(ExplainerCommand::Next));
    }

    #[test]
    fn hover_uses_ndc() {
        let mut input = sized();
        let cmd = input.handle_event(InputEvent::CursorMoved { x: 400.0, y: 150.0 });
        assert_eq!(
            cmd,
            Some(ExplainerCommand::Hover {
                ndc: Vec2::new(0.0, 0.5)
            })
        );
    }

    #[test]
    fn no_hover_before_resize() {
        let mut input = InputProcessor::default();
        let cmd = input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 });
        assert_eq!(cmd, None);
    }

    #[test]
    fn drag_rotates_camera() {
        let mut input = sized();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 100.0, y: 100.0 });
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        let cmd = input.handle_event(InputEvent::CursorMoved { x: 110.0, y: 95.0 });
        assert_eq!(
            cmd,
            Some(ExplainerCommand::RotateCamera {
                delta: Vec2::new(10.0, -5.0)
            })
        );
        assert!(input.is_dragging());

        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        assert!(!input.is_dragging());
    }

    #[test]
    fn panel_buttons_navigate() {
        let mut input = InputProcessor::default();
        assert_eq!(
            input.handle_event(InputEvent::Button(PanelButton::Next)),
            Some(ExplainerCommand::Next)
        );
        assert_eq!(
            input.handle_event(InputEvent::Button(PanelButton::Previous)),
            Some(ExplainerCommand::Previous)
        );
    }

    #[test]
    fn leaving_viewport_clears_hover() {
        let mut input = sized();
        assert_eq!(
            input.handle_event(InputEvent::CursorLeft),
            Some(ExplainerCommand::ClearHover)
        );
    }
}
