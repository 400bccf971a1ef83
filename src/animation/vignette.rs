//! Hand-authored particle and glow vignettes for the forward reaction
//! steps.

use std::time::Duration;

use glam::Vec3;

use super::timeline::{SegmentContext, SegmentEffect};
use crate::chemistry::{Species, Step};
use crate::effects::{apply_glow, make_particle_burst, Effect, EffectId, GlowTarget};
use crate::options::EffectOptions;

const SODIUM_VIOLET: [f32; 3] = [0.67, 0.36, 0.95];
const NITRITE_RED: [f32; 3] = [1.0, 0.3, 0.25];
const PROTON_WHITE: [f32; 3] = [0.95, 0.97, 1.0];
const WATER_CYAN: [f32; 3] = [0.3, 0.85, 1.0];
const FLASH_YELLOW: [f32; 3] = [1.0, 0.9, 0.3];
const BINDING_ORANGE: [f32; 3] = [1.0, 0.6, 0.2];
const SITE_PINK: [f32; 3] = [1.0, 0.45, 0.7];

/// A reaction-specific effect played between the source fade-out and the
/// destination reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vignette {
    /// NaNO₂ splits: the sodium ion drifts off, nitrite sparkles.
    Dissociation,
    /// Nitrite picks up a proton from stomach acid.
    Protonation,
    /// Protonated nitrous acid sheds water, leaving NO⁺.
    Decomposition,
    /// NO⁺ attacks the amine nitrogen on the protein strand.
    AmineBinding,
}

impl Vignette {
    /// Vignettes played, in order, for a transition. Only forward steps
    /// between neighbours have any.
    #[must_use]
    pub fn for_transition(from: Step, to: Step) -> &'static [Vignette] {
        match (from.index(), to.index()) {
            (0, 1) => &[Vignette::Dissociation, Vignette::Protonation],
            (1, 2) => &[Vignette::Decomposition],
            (2, 3) => &[Vignette::AmineBinding],
            _ => &[],
        }
    }

    /// Short label for logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Vignette::Dissociation => "dissociation",
            Vignette::Protonation => "protonation",
            Vignette::Decomposition => "decomposition",
            Vignette::AmineBinding => "amine_binding",
        }
    }
}

/// Timeline segment playing one [`Vignette`]. Effects are spawned when the
/// segment begins and released when it ends.
#[derive(Debug, Clone)]
pub struct VignetteSegment {
    vignette: Vignette,
    from: Species,
    to: Species,
    lifetime: Duration,
    options: EffectOptions,
    spawned: Vec<EffectId>,
}

impl VignetteSegment {
    /// Segment for `vignette` between the two species, with bursts living
    /// for `lifetime`.
    #[must_use]
    pub fn new(
        vignette: Vignette,
        from: Species,
        to: Species,
        lifetime: Duration,
        options: &EffectOptions,
    ) -> Self {
        Self {
            vignette,
            from,
            to,
            lifetime,
            options: options.clone(),
            spawned: Vec::new(),
        }
    }

    fn burst(
        &mut self,
        ctx: &mut SegmentContext<'_>,
        origin: Vec3,
        color: [f32; 3],
        base: usize,
        spread: f32,
    ) {
        let count = self.options.particle_count(base);
        if count == 0 {
            return;
        }
        let handle = make_particle_burst(
            ctx.scene,
            origin,
            color,
            count,
            spread,
            self.options.particle_size,
        );
        if let Some(Effect::Particles(burst)) = ctx.scene.effect_mut(handle.id()) {
            burst.set_lifetime(self.lifetime);
        }
        self.spawned.push(ctx.own(handle));
    }

    fn glow(&mut self, ctx: &mut SegmentContext<'_>, target: GlowTarget, color: [f32; 3]) {
        let handle = apply_glow(ctx.scene, target, color, self.options.glow_intensity);
        self.spawned.push(ctx.own(handle));
    }
}

fn center(ctx: &SegmentContext<'_>, species: Species) -> Vec3 {
    ctx.scene
        .molecule(species)
        .map_or_else(|| crate::scene::builder::anchor(species), |m| m.anchor)
}

impl SegmentEffect for VignetteSegment {
    fn begin(&mut self, ctx: &mut SegmentContext<'_>) {
        let source = center(ctx, self.from);
        let destination = center(ctx, self.to);
        log::debug!("vignette {}", self.vignette.name());

        match self.vignette {
            Vignette::Dissociation => {
                self.burst(ctx, source, SODIUM_VIOLET, 24, 2.5);
                self.burst(ctx, source, NITRITE_RED, 16, 1.2);
            }
            Vignette::Protonation => {
                self.burst(ctx, destination, PROTON_WHITE, 20, 1.5);
                self.glow(ctx, GlowTarget::Molecule(self.to), PROTON_WHITE);
            }
            Vignette::Decomposition => {
                self.burst(ctx, source, WATER_CYAN, 30, 2.0);
                self.glow(ctx, GlowTarget::Molecule(self.from), FLASH_YELLOW);
            }
            Vignette::AmineBinding => {
                let site = ctx.scene.environment.amine_site;
                self.glow(ctx, GlowTarget::Environment, BINDING_ORANGE);
                self.burst(ctx, site, SITE_PINK, 28, 1.8);
            }
        }
    }

    fn apply(&mut self, _ctx: &mut SegmentContext<'_>, _t: f32) {}

    fn end(&mut self, ctx: &mut SegmentContext<'_>) {
        for id in self.spawned.drain(..) {
            ctx.release(id);
        }
    }

    fn name(&self) -> &'static str {
        self.vignette.name()
    }
}
