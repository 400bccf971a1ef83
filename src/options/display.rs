use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Display", inline)]
#[serde(default)]
/// Geometry and frame-loop toggles.
pub struct DisplayOptions {
    /// Whether to build hydrogen atoms.
    #[schemars(title = "Show Hydrogens")]
    pub show_hydrogens: bool,
    /// Whether to draw the stomach/protein backdrop.
    #[schemars(title = "Show Environment")]
    pub show_environment: bool,
    /// Multiplier applied to covalent radii for atom spheres.
    #[schemars(title = "Atom Scale", range(min = 0.2, max = 1.5), extend("step" = 0.05))]
    pub atom_scale: f32,
    /// Frame cap (0 = unlimited).
    #[schemars(skip)]
    pub target_fps: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_hydrogens: true,
            show_environment: true,
            atom_scale: 0.5,
            target_fps: 60,
        }
    }
}
