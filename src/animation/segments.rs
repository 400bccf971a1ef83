//! Per-molecule segment effects: fades, the overshooting reveal, the
//! acknowledgement pulse and the camera move.

use std::f32::consts::PI;
use std::time::Duration;

use glam::{Quat, Vec3};

use super::timeline::{SegmentContext, SegmentEffect};
use crate::chemistry::Species;
use crate::effects::pan_camera_to;
use crate::util::easing::EasingFunction;

/// Fade a molecule's opacity from wherever it is down to zero.
#[derive(Debug, Clone)]
pub struct Fade {
    species: Species,
    from: Option<f32>,
}

impl Fade {
    /// Fade out to fully transparent.
    #[must_use]
    pub fn out(species: Species) -> Self {
        Self {
            species,
            from: None,
        }
    }
}

impl SegmentEffect for Fade {
    fn begin(&mut self, ctx: &mut SegmentContext<'_>) {
        self.from = ctx.scene.molecule(self.species).map(|m| m.visual.opacity);
    }

    fn apply(&mut self, ctx: &mut SegmentContext<'_>, t: f32) {
        let from = self.from.unwrap_or(1.0);
        let k = EasingFunction::QuadraticIn.evaluate(t);
        if let Some(m) = ctx.scene.molecule_mut(self.species) {
            m.visual.opacity = from * (1.0 - k);
        }
    }

    fn name(&self) -> &'static str {
        "fade"
    }
}

/// Bring a molecule in: opacity 0→1 while its scale grows from
/// `start_scale`, overshoots, and settles at 1.
#[derive(Debug, Clone)]
pub struct Reveal {
    species: Species,
    start_scale: f32,
    overshoot: f32,
}

impl Reveal {
    /// Reveal starting at `start_scale` with the given overshoot strength.
    #[must_use]
    pub fn new(species: Species, start_scale: f32, overshoot: f32) -> Self {
        Self {
            species,
            start_scale,
            overshoot,
        }
    }
}

impl SegmentEffect for Reveal {
    fn begin(&mut self, ctx: &mut SegmentContext<'_>) {
        if let Some(m) = ctx.scene.molecule_mut(self.species) {
            m.visible = true;
            m.visual.opacity = 0.0;
            m.visual.scale = self.start_scale;
        }
    }

    fn apply(&mut self, ctx: &mut SegmentContext<'_>, t: f32) {
        let fade = EasingFunction::QuadraticOut.evaluate(t);
        let grow = EasingFunction::BackOut {
            overshoot: self.overshoot,
        }
        .evaluate(t);
        if let Some(m) = ctx.scene.molecule_mut(self.species) {
            m.visual.opacity = fade;
            m.visual.scale = self.start_scale + (1.0 - self.start_scale) * grow;
        }
    }

    fn end(&mut self, ctx: &mut SegmentContext<'_>) {
        if let Some(m) = ctx.scene.molecule_mut(self.species) {
            m.visual.opacity = 1.0;
            m.visual.scale = 1.0;
        }
    }

    fn name(&self) -> &'static str {
        "reveal"
    }
}

/// Brief scale pulse plus a partial turn about the vertical axis.
#[derive(Debug, Clone)]
pub struct Pulse {
    species: Species,
    amplitude: f32,
    turn: f32,
    base_rotation: Option<Quat>,
}

impl Pulse {
    /// Pulse growing by `amplitude` at its peak and turning a quarter
    /// revolution.
    #[must_use]
    pub fn new(species: Species, amplitude: f32) -> Self {
        Self {
            species,
            amplitude,
            turn: PI / 2.0,
            base_rotation: None,
        }
    }
}

impl SegmentEffect for Pulse {
    fn begin(&mut self, ctx: &mut SegmentContext<'_>) {
        self.base_rotation = ctx.scene.molecule(self.species).map(|m| m.visual.rotation);
    }

    fn apply(&mut self, ctx: &mut SegmentContext<'_>, t: f32) {
        let base = self.base_rotation.unwrap_or(Quat::IDENTITY);
        let angle = self.turn * EasingFunction::SineInOut.evaluate(t);
        if let Some(m) = ctx.scene.molecule_mut(self.species) {
            m.visual.scale = 1.0 + self.amplitude * (PI * t).sin();
            m.visual.rotation = Quat::from_rotation_y(angle) * base;
        }
    }

    fn end(&mut self, ctx: &mut SegmentContext<'_>) {
        let base = self.base_rotation.unwrap_or(Quat::IDENTITY);
        if let Some(m) = ctx.scene.molecule_mut(self.species) {
            m.visual.scale = 1.0;
            m.visual.rotation = Quat::from_rotation_y(self.turn) * base;
        }
    }

    fn name(&self) -> &'static str {
        "pulse"
    }
}

/// Start a camera pan when the segment begins. The pan is a scene effect
/// advanced by [`Scene::update_effects`](crate::scene::Scene::update_effects);
/// the segment only owns it.
#[derive(Debug, Clone)]
pub struct CameraMove {
    target: Vec3,
    duration: Duration,
    distance: f32,
}

impl CameraMove {
    /// Pan to `target` at orbit `distance`.
    #[must_use]
    pub fn new(target: Vec3, duration: Duration, distance: f32) -> Self {
        Self {
            target,
            duration,
            distance,
        }
    }
}

impl SegmentEffect for CameraMove {
    fn begin(&mut self, ctx: &mut SegmentContext<'_>) {
        let handle = pan_camera_to(ctx.scene, self.target, self.duration, self.distance);
        let _ = ctx.own(handle);
    }

    fn apply(&mut self, _ctx: &mut SegmentContext<'_>, _t: f32) {}

    fn end(&mut self, _ctx: &mut SegmentContext<'_>) {}

    fn name(&self) -> &'static str {
        "camera_move"
    }
}
