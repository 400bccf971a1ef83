//! Ephemeral visual effects: particle bursts, glows and camera pans.
//!
//! Each factory mutates the scene and returns an [`EffectHandle`]. Handles
//! are owned by whoever created the effect (in practice the running step
//! transition) and must be passed back to [`Scene::dispose`] when the
//! effect is no longer wanted. The scene advances time-driven effects in
//! [`Scene::update_effects`].

mod camera_pan;
mod particles;

use std::fmt;
use std::time::Duration;

pub use camera_pan::CameraPan;
use glam::Vec3;
pub use particles::{Particle, ParticleBurst};

use crate::chemistry::Species;
use crate::scene::molecule::Glow;
use crate::scene::Scene;

/// Identifier of a live effect in a [`Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub(crate) u64);

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "effect#{}", self.0)
    }
}

/// Ownership token for a live effect. Dispose it with [`Scene::dispose`].
#[derive(Debug, PartialEq, Eq)]
#[must_use = "effects leak unless their handle is disposed"]
pub struct EffectHandle {
    id: EffectId,
}

impl EffectHandle {
    pub(crate) fn new(id: EffectId) -> Self {
        Self { id }
    }

    /// The effect's identifier.
    #[must_use]
    pub fn id(&self) -> EffectId {
        self.id
    }
}

/// What a glow is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlowTarget {
    /// One molecule group.
    Molecule(Species),
    /// The shared protein/stomach backdrop.
    Environment,
}

/// A highlight applied to a glow target until disposed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowEffect {
    /// Where the glow is applied.
    pub target: GlowTarget,
    /// Color and strength.
    pub glow: Glow,
}

/// A live effect stored in the scene.
#[derive(Debug, Clone)]
pub enum Effect {
    /// Expanding particle spray.
    Particles(ParticleBurst),
    /// Emissive highlight on a molecule or the environment.
    Glow(GlowEffect),
    /// Camera move.
    CameraPan(CameraPan),
}

impl Effect {
    /// Short label for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Particles(_) => "particles",
            Effect::Glow(_) => "glow",
            Effect::CameraPan(_) => "camera_pan",
        }
    }

    /// Whether a time-driven effect has played out. Glows never finish on
    /// their own.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        match self {
            Effect::Particles(burst) => burst.is_spent(),
            Effect::Glow(_) => false,
            Effect::CameraPan(pan) => pan.is_finished(),
        }
    }
}

/// Spawn a particle burst at `origin` using the scene's random source.
pub fn make_particle_burst(
    scene: &mut Scene,
    origin: Vec3,
    color: [f32; 3],
    count: usize,
    spread: f32,
    size: f32,
) -> EffectHandle {
    let burst =
        ParticleBurst::new(origin, color, count, spread, size, scene.rng_mut());
    scene.insert_effect(Effect::Particles(burst))
}

/// Highlight `target` with an emissive glow. Disposing the handle removes
/// the glow again.
pub fn apply_glow(
    scene: &mut Scene,
    target: GlowTarget,
    color: [f32; 3],
    intensity: f32,
) -> EffectHandle {
    let glow = Glow { color, intensity };
    if let Some(slot) = scene.glow_slot_mut(target) {
        *slot = Some(glow);
    } else {
        log::debug!("glow target {target:?} not in scene");
    }
    scene.insert_effect(Effect::Glow(GlowEffect { target, glow }))
}

/// Pan the camera toward `target` over `duration`, ending `distance` away.
pub fn pan_camera_to(
    scene: &mut Scene,
    target: Vec3,
    duration: Duration,
    distance: f32,
) -> EffectHandle {
    scene.insert_effect(Effect::CameraPan(CameraPan::new(
        target, duration, distance,
    )))
}
