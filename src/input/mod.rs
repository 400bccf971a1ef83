//! Input handling: event types, key actions, and the input processor that
//! converts raw window or DOM events into explainer commands.

/// Platform-agnostic input events.
pub mod event;
/// Bindable key actions.
pub mod keyboard;
/// Converts raw events into explainer commands.
pub mod processor;

pub use event::{InputEvent, MouseButton, PanelButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
