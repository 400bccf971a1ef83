use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Effects", inline)]
#[serde(default)]
/// Particle and glow parameters for the reaction vignettes.
pub struct EffectOptions {
    /// Multiplier on every burst's particle count. Lower on weak devices.
    #[schemars(title = "Particle Density", range(min = 0.0, max = 2.0), extend("step" = 0.1))]
    pub particle_density: f32,
    /// Base particle sprite size.
    #[schemars(title = "Particle Size", range(min = 0.02, max = 0.5), extend("step" = 0.01))]
    pub particle_size: f32,
    /// Strength of vignette glows.
    #[schemars(title = "Glow Intensity", range(min = 0.0, max = 4.0), extend("step" = 0.1))]
    pub glow_intensity: f32,
    /// Seed for particle directions, so sessions replay identically.
    #[schemars(skip)]
    pub seed: u64,
}

impl EffectOptions {
    /// Particle count for a burst authored with `base` particles.
    #[must_use]
    pub fn particle_count(&self, base: usize) -> usize {
        (base as f32 * self.particle_density.max(0.0)).round() as usize
    }
}

impl Default for EffectOptions {
    fn default() -> Self {
        Self {
            particle_density: 1.0,
            particle_size: 0.12,
            glow_intensity: 1.5,
            seed: 0x5EED,
        }
    }
}
