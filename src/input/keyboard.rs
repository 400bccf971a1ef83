use serde::{Deserialize, Serialize};

use crate::engine::command::ExplainerCommand;

/// Explainer actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// ArrowRight = "next_step"
/// KeyR = "toggle_auto_rotate"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Advance one step.
    NextStep,
    /// Go back one step.
    PreviousStep,
    /// Jump to step 1 (sodium nitrite).
    GoToStep1,
    /// Jump to step 2 (nitrous acid).
    GoToStep2,
    /// Jump to step 3 (nitrosonium).
    GoToStep3,
    /// Jump to step 4 (nitrosamine).
    GoToStep4,
    /// Toggle the idle spin.
    ToggleAutoRotate,
    /// Re-frame the current molecule.
    RecenterCamera,
}

impl KeyAction {
    /// The command this action triggers.
    #[must_use]
    pub fn to_command(self) -> ExplainerCommand {
        match self {
            Self::NextStep => ExplainerCommand::Next,
            Self::PreviousStep => ExplainerCommand::Previous,
            Self::GoToStep1 => ExplainerCommand::GoToStep { index: 0 },
            Self::GoToStep2 => ExplainerCommand::GoToStep { index: 1 },
            Self::GoToStep3 => ExplainerCommand::GoToStep { index: 2 },
            Self::GoToStep4 => ExplainerCommand::GoToStep { index: 3 },
            Self::ToggleAutoRotate => ExplainerCommand::ToggleAutoRotate,
            Self::RecenterCamera => ExplainerCommand::RecenterCamera,
        }
    }
}
