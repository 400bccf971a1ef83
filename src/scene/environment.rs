//! The persistent stomach/protein backdrop shared by every step.

use glam::Vec3;

use super::molecule::Visual;

/// Always-present environment geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Environment {
    /// Protein strand geometry, in world coordinates.
    pub visual: Visual,
    /// Secondary amine nitrogen that the nitrosonium ion attacks.
    pub amine_site: Vec3,
    /// Whether the renderer should draw it.
    pub visible: bool,
    /// Gastric acidity shown in the backdrop legend.
    pub ph: f32,
}

impl Environment {
    /// Environment around the given amine site.
    #[must_use]
    pub fn new(visual: Visual, amine_site: Vec3, visible: bool) -> Self {
        Self {
            visual,
            amine_site,
            visible,
            ph: 2.0,
        }
    }
}
