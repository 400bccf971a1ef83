//! Transition presets: how a step change is laid out on a timeline.

use std::time::Duration;

use super::segments::{CameraMove, Fade, Pulse, Reveal};
use super::timeline::Timeline;
use super::vignette::{Vignette, VignetteSegment};
use crate::chemistry::Step;
use crate::options::Options;
use crate::scene::{builder, Scene};

/// What a transition does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// Move from one step's molecule to another's.
    CrossFade {
        /// Step being left.
        from: Step,
        /// Step being entered.
        to: Step,
    },
    /// Pulse the current molecule in place.
    Acknowledge(Step),
}

/// A laid-out, not yet started, step transition.
///
/// Built through [`between`](Self::between) or
/// [`acknowledge`](Self::acknowledge).
#[derive(Debug)]
pub struct Transition {
    kind: TransitionKind,
    timeline: Timeline,
}

impl Transition {
    /// Cross-fade from `from` to `to`.
    ///
    /// Layout, as offsets from the start:
    /// camera pan and source fade-out both at 0; any reaction vignettes
    /// chained from the middle of the fade-out; the destination reveal
    /// after the last vignette, or at the middle of the fade-out when there
    /// are none.
    #[must_use]
    pub fn between(from: Step, to: Step, scene: &Scene, options: &Options) -> Self {
        let anim = &options.animation;
        let source = from.species();
        let destination = to.species();
        let focus = scene
            .molecule(destination)
            .map_or_else(|| builder::anchor(destination), |m| m.anchor);

        let mut timeline = Timeline::new()
            .with(
                Duration::ZERO,
                anim.camera_pan(),
                CameraMove::new(focus, anim.camera_pan(), options.camera.orbit_distance),
            )
            .with(Duration::ZERO, anim.fade_out(), Fade::out(source));

        let mut cursor = anim.fade_out() / 2;
        for &vignette in Vignette::for_transition(from, to) {
            timeline = timeline.with(
                cursor,
                anim.vignette(),
                VignetteSegment::new(
                    vignette,
                    source,
                    destination,
                    anim.vignette(),
                    &options.effects,
                ),
            );
            cursor += anim.vignette();
        }

        let timeline = timeline.with(
            cursor,
            anim.fade_in(),
            Reveal::new(destination, anim.fade_in_start_scale, anim.overshoot),
        );

        Self {
            kind: TransitionKind::CrossFade { from, to },
            timeline,
        }
    }

    /// In-place acknowledgement of a request for the current step.
    #[must_use]
    pub fn acknowledge(step: Step, options: &Options) -> Self {
        let anim = &options.animation;
        Self {
            kind: TransitionKind::Acknowledge(step),
            timeline: Timeline::new().with(
                Duration::ZERO,
                anim.acknowledge(),
                Pulse::new(step.species(), anim.pulse_amplitude),
            ),
        }
    }

    /// What this transition does.
    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        self.kind
    }

    /// Step shown once the transition completes.
    #[must_use]
    pub fn destination(&self) -> Step {
        match self.kind {
            TransitionKind::CrossFade { to, .. } => to,
            TransitionKind::Acknowledge(step) => step,
        }
    }

    /// Offset at which the last segment ends.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.timeline.total_duration()
    }

    /// The underlying timeline.
    #[must_use]
    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub(crate) fn timeline_mut(&mut self) -> &mut Timeline {
        &mut self.timeline
    }
}
