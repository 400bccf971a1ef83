use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping key codes to actions.
///
/// Key strings use the DOM `KeyboardEvent.code` format: `"ArrowRight"`,
/// `"KeyR"`, `"Digit1"`, etc. Several keys may trigger the same action.
pub struct KeybindingOptions {
    /// Maps key string → action.
    pub bindings: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("ArrowRight".into(), KeyAction::NextStep),
            ("KeyD".into(), KeyAction::NextStep),
            ("ArrowLeft".into(), KeyAction::PreviousStep),
            ("KeyA".into(), KeyAction::PreviousStep),
            ("Digit1".into(), KeyAction::GoToStep1),
            ("Digit2".into(), KeyAction::GoToStep2),
            ("Digit3".into(), KeyAction::GoToStep3),
            ("Digit4".into(), KeyAction::GoToStep4),
            ("KeyR".into(), KeyAction::ToggleAutoRotate),
            ("KeyQ".into(), KeyAction::RecenterCamera),
        ]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }
}
