//! The explainer's complete interactive vocabulary.
//!
//! Every user-facing operation, whether triggered by a key press, a mouse
//! gesture, a panel button or a programmatic call, is an
//! `ExplainerCommand`. Consumers construct commands and pass them to
//! [`NitrosoEngine::execute`](super::NitrosoEngine::execute).

use glam::Vec2;

/// A single explainer operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExplainerCommand {
    // ── Steps ───────────────────────────────────────────────────────
    /// Advance one step (no-op at the last step).
    Next,

    /// Go back one step (no-op at the first step).
    Previous,

    /// Jump to a step by raw index. Out-of-range indices are ignored.
    GoToStep {
        /// Zero-based step index.
        index: i64,
    },

    // ── Camera ──────────────────────────────────────────────────────
    /// Re-frame the current molecule at the default orbit distance.
    RecenterCamera,

    /// Toggle the idle spin of the visible molecule.
    ToggleAutoRotate,

    /// Rotate the camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount.
        delta: f32,
    },

    /// The viewport changed size.
    Resize {
        /// Width in physical pixels.
        width: u32,
        /// Height in physical pixels.
        height: u32,
    },

    // ── Hover ───────────────────────────────────────────────────────
    /// Pick the atom under a normalized device coordinate.
    Hover {
        /// Cursor position, x right and y up, in `[-1, 1]`.
        ndc: Vec2,
    },

    /// Nothing is hovered any more.
    ClearHover,
}
