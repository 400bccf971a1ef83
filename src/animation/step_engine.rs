//! The step-transition state machine.
//!
//! [`StepEngine`] owns the current step and the busy guard. A request
//! builds a [`Transition`], starts its timeline and arms a watchdog; each
//! frame [`StepEngine::tick`] advances the timeline and polls the watchdog.
//! Exactly one of two things ends a transition: the timeline completing
//! (the destination becomes current) or the watchdog window elapsing (the
//! busy guard is force-released and the source stays current).

use std::task::Poll;
use std::time::Duration;

use super::transition::{Transition, TransitionKind};
use super::watchdog::{completion, timeout, Completion, PollAt, Timeout};
use crate::chemistry::Step;
use crate::options::Options;
use crate::scene::Scene;

/// Slack the watchdog always allows past the end of a planned transition.
pub const WATCHDOG_GRACE: Duration = Duration::from_secs(1);

/// What a finished transition did, for the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// A cross-fade completed and `to` is now current.
    Changed {
        /// Previous step.
        from: Step,
        /// New current step.
        to: Step,
    },
    /// A same-step pulse completed.
    Acknowledged(Step),
    /// The watchdog released a transition that never completed. `from`
    /// is still current.
    WatchdogReleased {
        /// Step that stays current.
        from: Step,
        /// Step that was being entered.
        to: Step,
    },
}

#[derive(Debug)]
struct ActiveTransition {
    transition: Transition,
    watchdog: Timeout<Completion>,
}

/// Step state machine with a busy guard and watchdog.
#[derive(Debug)]
pub struct StepEngine {
    current: Step,
    busy: bool,
    active: Option<ActiveTransition>,
    options: Options,
}

impl StepEngine {
    /// Engine resting at the first step.
    #[must_use]
    pub fn new(options: &Options) -> Self {
        Self {
            current: Step::FIRST,
            busy: false,
            active: None,
            options: options.clone(),
        }
    }

    /// Replace the options used by transitions started from now on.
    pub fn set_options(&mut self, options: &Options) {
        self.options = options.clone();
    }

    /// The step currently shown (the source step while busy).
    #[must_use]
    pub fn current(&self) -> Step {
        self.current
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// The in-flight transition, if any.
    #[must_use]
    pub fn in_flight(&self) -> Option<&Transition> {
        self.active.as_ref().map(|a| &a.transition)
    }

    /// Absolute time at which the watchdog fires for the in-flight
    /// transition.
    #[must_use]
    pub fn watchdog_deadline(&self) -> Option<Duration> {
        self.active.as_ref().map(|a| a.watchdog.deadline())
    }

    /// Request a step by raw index. Returns whether a transition started.
    ///
    /// Out-of-range indices and requests made while busy are dropped.
    /// Requesting the current step plays an acknowledgement pulse.
    pub fn go_to_step(&mut self, target: i64, scene: &mut Scene, now: Duration) -> bool {
        let Some(to) = Step::new(target) else {
            log::debug!("ignoring request for step {target}: out of range");
            return false;
        };
        if self.busy {
            log::debug!("ignoring request for step {target}: transition in flight");
            return false;
        }

        let from = self.current;
        let transition = if from == to {
            let _ = scene.ensure_molecule(to.species());
            Transition::acknowledge(to, &self.options)
        } else {
            self.prepare_cross_fade(from, to, scene);
            Transition::between(from, to, scene, &self.options)
        };
        self.start(transition, now);
        true
    }

    /// Advance one step, clamped. At the last step this is a no-op.
    pub fn next(&mut self, scene: &mut Scene, now: Duration) -> bool {
        let target = self.current.next();
        if target == self.current {
            log::debug!("already at the last step");
            return false;
        }
        self.go_to_step(target.index() as i64, scene, now)
    }

    /// Go back one step, clamped. At the first step this is a no-op.
    pub fn previous(&mut self, scene: &mut Scene, now: Duration) -> bool {
        let target = self.current.previous();
        if target == self.current {
            log::debug!("already at the first step");
            return false;
        }
        self.go_to_step(target.index() as i64, scene, now)
    }

    /// Drive the in-flight transition to `now`. Returns an event when it
    /// ends this frame.
    pub fn tick(&mut self, scene: &mut Scene, now: Duration) -> Option<StepEvent> {
        let active = self.active.as_mut()?;
        let _ = active.transition.timeline_mut().advance(now, scene);
        let outcome = active.watchdog.poll_at(now);

        match outcome {
            Poll::Pending => None,
            Poll::Ready(result) => {
                let mut active = self.active.take()?;
                for handle in active.transition.timeline_mut().take_effects() {
                    scene.dispose(handle);
                }
                self.busy = false;
                Some(match result {
                    Ok(()) => self.complete(active.transition.kind(), scene),
                    Err(elapsed) => {
                        let to = active.transition.destination();
                        log::warn!(
                            "transition {} -> {} did not complete by {:?}; releasing busy guard",
                            self.current.index(),
                            to.index(),
                            elapsed.deadline,
                        );
                        StepEvent::WatchdogReleased {
                            from: self.current,
                            to,
                        }
                    }
                })
            }
        }
    }

    /// Stop the in-flight transition from ever signalling completion, so
    /// only the watchdog can end it.
    #[cfg(test)]
    pub(crate) fn suppress_completion(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.transition.timeline_mut().sever_completion();
        }
    }

    fn prepare_cross_fade(&self, from: Step, to: Step, scene: &mut Scene) {
        let _ = scene.ensure_molecule(from.species());
        let _ = scene.ensure_molecule(to.species());
        scene.hide_all_except(&[from.species(), to.species()]);

        if let Some(source) = scene.molecule_mut(from.species()) {
            source.visible = true;
        }
        if let Some(destination) = scene.molecule_mut(to.species()) {
            destination.visible = true;
            destination.visual.opacity = 0.0;
            destination.visual.scale = self.options.animation.fade_in_start_scale;
        }
    }

    fn start(&mut self, mut transition: Transition, now: Duration) {
        let (completer, done) = completion();
        transition.timeline_mut().start(now, completer);

        let planned = transition.total_duration();
        let configured = self.options.animation.watchdog();
        let window = configured.max(planned + WATCHDOG_GRACE);
        if window > configured {
            log::warn!(
                "transition plan ({planned:?}) does not fit the watchdog ({configured:?}); \
                 extending it to {window:?}"
            );
        }
        log::debug!(
            "start {:?}, {} segments over {planned:?}",
            transition.kind(),
            transition.timeline().segments().len(),
        );

        self.busy = true;
        self.active = Some(ActiveTransition {
            transition,
            watchdog: timeout(done, now, window),
        });
    }

    fn complete(&mut self, kind: TransitionKind, scene: &mut Scene) -> StepEvent {
        match kind {
            TransitionKind::CrossFade { from, to } => {
                if let Some(source) = scene.molecule_mut(from.species()) {
                    source.visible = false;
                    source.visual.reset_presentation();
                }
                scene.hide_all_except(&[to.species()]);
                if let Some(destination) = scene.molecule_mut(to.species()) {
                    destination.visible = true;
                    destination.visual.opacity = 1.0;
                    destination.visual.scale = 1.0;
                }
                let focus = scene.molecule(to.species()).map(|m| m.anchor);
                if let Some(focus) = focus {
                    scene.camera.set_view(focus, self.options.camera.orbit_distance);
                }
                self.current = to;
                log::info!("step {to} ({})", to.species());
                StepEvent::Changed { from, to }
            }
            TransitionKind::Acknowledge(step) => {
                if let Some(molecule) = scene.molecule_mut(step.species()) {
                    molecule.visual.scale = 1.0;
                }
                StepEvent::Acknowledged(step)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chemistry::Species;

    const FRAME: Duration = Duration::from_millis(16);

    struct Rig {
        engine: StepEngine,
        scene: Scene,
        now: Duration,
    }

    impl Rig {
        fn new() -> Self {
            let options = Options::default();
            Self {
                engine: StepEngine::new(&options),
                scene: Scene::new(&options),
                now: Duration::ZERO,
            }
        }

        fn go(&mut self, target: i64) -> bool {
            self.engine.go_to_step(target, &mut self.scene, self.now)
        }

        fn frame(&mut self) -> Option<StepEvent> {
            self.now += FRAME;
            let event = self.engine.tick(&mut self.scene, self.now);
            self.scene.update_effects(self.now);
            event
        }

        /// Run frames until the engine is idle, returning the final event.
        fn settle(&mut self) -> Option<StepEvent> {
            for _ in 0..1000 {
                if let Some(event) = self.frame() {
                    return Some(event);
                }
            }
            None
        }

        fn visible(&self) -> Vec<Species> {
            self.scene.visible_species()
        }

        fn opacity(&self, species: Species) -> f32 {
            self.scene.molecule(species).map_or(-1.0, |m| m.visual.opacity)
        }
    }

    fn step(i: i64) -> Step {
        Step::new(i).unwrap_or_default()
    }

    #[test]
    fn out_of_range_requests_are_ignored() {
        let mut rig = Rig::new();
        for target in [-1, 4, 100, i64::MIN, i64::MAX] {
            assert!(!rig.go(target));
            assert!(!rig.engine.is_busy());
            assert_eq!(rig.engine.current(), Step::FIRST);
            assert_eq!(rig.visible(), vec![Species::SodiumNitrite]);
        }
        assert!(rig.frame().is_none());
    }

    #[test]
    fn completion_sets_current_and_clears_busy() {
        let mut rig = Rig::new();
        assert!(rig.go(1));
        assert!(rig.engine.is_busy());
        assert_eq!(rig.engine.current(), Step::FIRST);

        let event = rig.settle();
        assert_eq!(event, Some(StepEvent::Changed { from: step(0), to: step(1) }));
        assert_eq!(rig.engine.current(), step(1));
        assert!(!rig.engine.is_busy());
        assert_eq!(rig.visible(), vec![Species::NitrousAcid]);
        assert_eq!(rig.opacity(Species::NitrousAcid), 1.0);
        assert!(rig.engine.in_flight().is_none());
    }

    #[test]
    fn requests_while_busy_are_dropped() {
        let mut rig = Rig::new();
        assert!(rig.go(1));
        let _ = rig.frame();
        assert!(!rig.go(2));
        assert!(!rig.engine.next(&mut rig.scene, rig.now));
        let _ = rig.settle();
        assert_eq!(rig.engine.current(), step(1));
        assert!(rig.frame().is_none());
    }

    #[test]
    fn double_request_executes_once() {
        let mut rig = Rig::new();
        assert!(rig.go(1));
        assert!(!rig.go(1));
        let mut events = Vec::new();
        for _ in 0..600 {
            events.extend(rig.frame());
        }
        assert_eq!(events, vec![StepEvent::Changed { from: step(0), to: step(1) }]);
        assert_eq!(rig.engine.current(), step(1));
    }

    #[test]
    fn watchdog_releases_stuck_transition() {
        let mut rig = Rig::new();
        assert!(rig.go(2));
        rig.engine.suppress_completion();
        let deadline = rig.engine.watchdog_deadline();
        assert_eq!(deadline, Some(Duration::from_secs(6)));

        let event = rig.settle();
        assert_eq!(event, Some(StepEvent::WatchdogReleased { from: step(0), to: step(2) }));
        assert!(rig.now >= Duration::from_secs(6));
        assert!(rig.now < Duration::from_secs(6) + FRAME * 2);
        assert!(!rig.engine.is_busy());
        assert_eq!(rig.engine.current(), Step::FIRST);
        assert_eq!(rig.scene.effect_count(), 0);

        // The engine accepts requests again.
        assert!(rig.go(1));
    }

    #[test]
    fn watchdog_leaves_visuals_in_place() {
        let mut rig = Rig::new();
        assert!(rig.go(1));
        rig.engine.suppress_completion();
        let _ = rig.settle();
        // The timeline ran to its end, so both molecules are still flagged
        // visible; nothing cleaned them up.
        assert_eq!(rig.visible(), vec![Species::SodiumNitrite, Species::NitrousAcid]);
        assert_eq!(rig.opacity(Species::SodiumNitrite), 0.0);
    }

    #[test]
    fn short_watchdog_still_lets_transitions_complete() {
        let mut rig = Rig::new();
        let mut options = Options::default();
        options.animation.watchdog_ms = 1000;
        rig.engine.set_options(&options);

        for expected in 1..=3 {
            let started = rig.now;
            assert!(rig.engine.next(&mut rig.scene, rig.now));
            let planned = rig.engine.in_flight().map(Transition::total_duration);
            let deadline = rig.engine.watchdog_deadline();
            assert_eq!(
                deadline,
                planned.map(|p| started + p + WATCHDOG_GRACE)
            );
            assert_eq!(
                rig.settle(),
                Some(StepEvent::Changed { from: step(expected - 1), to: step(expected) })
            );
        }
        assert_eq!(rig.engine.current(), Step::LAST);
        assert_eq!(rig.visible(), vec![Species::Nitrosamine]);
    }

    #[test]
    fn watchdog_window_is_kept_when_long_enough() {
        let mut rig = Rig::new();
        assert!(rig.go(1));
        assert_eq!(
            rig.engine.watchdog_deadline(),
            Some(Options::default().animation.watchdog())
        );
    }

    #[test]
    fn round_trip_restores_visible_set() {
        let mut rig = Rig::new();
        let initial = rig.visible();
        assert!(rig.go(0));
        assert_eq!(rig.settle(), Some(StepEvent::Acknowledged(Step::FIRST)));
        assert_eq!(rig.visible(), initial);
        assert!(rig.go(3));
        let _ = rig.settle();
        assert_eq!(rig.visible(), vec![Species::Nitrosamine]);
        assert!(rig.go(0));
        let _ = rig.settle();
        assert_eq!(rig.visible(), initial);
        assert_eq!(rig.engine.current(), Step::FIRST);
        assert_eq!(rig.opacity(Species::SodiumNitrite), 1.0);
    }

    #[test]
    fn three_nexts_reach_last_step() {
        let mut rig = Rig::new();
        for expected in 1..=3 {
            assert!(rig.engine.next(&mut rig.scene, rig.now));
            let event = rig.settle();
            assert_eq!(
                event,
                Some(StepEvent::Changed { from: step(expected - 1), to: step(expected) })
            );
        }
        assert_eq!(rig.engine.current(), Step::LAST);
        assert_eq!(rig.visible(), vec![Species::Nitrosamine]);
    }

    #[test]
    fn navigation_stops_at_boundaries() {
        let mut rig = Rig::new();
        assert!(!rig.engine.previous(&mut rig.scene, rig.now));
        assert!(!rig.engine.is_busy());
        assert!(rig.frame().is_none());

        assert!(rig.go(3));
        let _ = rig.settle();
        assert!(!rig.engine.next(&mut rig.scene, rig.now));
        assert!(!rig.engine.is_busy());
        assert_eq!(rig.engine.current(), Step::LAST);
    }

    #[test]
    fn same_step_plays_acknowledgement() {
        let mut rig = Rig::new();
        assert!(rig.go(0));
        assert!(rig.engine.is_busy());
        assert!(matches!(
            rig.engine.in_flight().map(Transition::kind),
            Some(TransitionKind::Acknowledge(_))
        ));
        let event = rig.settle();
        assert_eq!(event, Some(StepEvent::Acknowledged(Step::FIRST)));
        assert!(!rig.engine.is_busy());
        assert!(rig.now <= Duration::from_millis(700));
        assert_eq!(rig.visible(), vec![Species::SodiumNitrite]);
        let scale = rig.scene.molecule(Species::SodiumNitrite).map(|m| m.visual.scale);
        assert_eq!(scale, Some(1.0));
    }

    #[test]
    fn cross_fade_ordering() {
        let mut rig = Rig::new();
        assert!(rig.go(1));
        assert_eq!(rig.visible(), vec![Species::SodiumNitrite, Species::NitrousAcid]);
        assert_eq!(rig.opacity(Species::NitrousAcid), 0.0);

        let reveal_start = rig
            .engine
            .in_flight()
            .and_then(|t| t.timeline().segment("reveal"))
            .map_or(Duration::ZERO, |s| s.start());
        assert!(reveal_start > Duration::ZERO);

        // The source starts fading on the first frame.
        let _ = rig.frame();
        assert!(rig.opacity(Species::SodiumNitrite) < 1.0);

        while rig.now + FRAME < reveal_start {
            assert!(rig.frame().is_none());
            assert_eq!(rig.opacity(Species::NitrousAcid), 0.0);
        }
        while rig.engine.is_busy() {
            let _ = rig.frame();
            if rig.engine.is_busy() {
                assert!(rig.opacity(Species::NitrousAcid) < 1.0);
            }
        }
        assert_eq!(rig.opacity(Species::NitrousAcid), 1.0);
    }

    #[test]
    fn other_molecules_hidden_during_transition() {
        let mut rig = Rig::new();
        for species in Species::ALL {
            if let Some(m) = rig.scene.molecule_mut(species) {
                m.visible = true;
            }
        }
        assert!(rig.go(2));
        assert_eq!(rig.visible(), vec![Species::SodiumNitrite, Species::Nitrosonium]);
    }

    #[test]
    fn transition_effects_are_disposed() {
        let mut rig = Rig::new();
        for target in [1, 2, 3, 0] {
            assert!(rig.go(target));
            let _ = rig.frame();
            assert!(rig.scene.effect_count() > 0);
            let _ = rig.settle();
            assert_eq!(rig.scene.effect_count(), 0);
            assert!(rig.scene.environment.visual.glow.is_none());
        }
    }

    #[test]
    fn missing_molecules_are_built_on_demand() {
        let options = Options::default();
        let mut engine = StepEngine::new(&options);
        let mut scene = Scene::empty(&options);
        assert!(engine.go_to_step(2, &mut scene, Duration::ZERO));
        assert!(scene.molecule(Species::Nitrosonium).is_some_and(|m| m.is_placeholder()));
        let mut now = Duration::ZERO;
        let mut event = None;
        while event.is_none() && now < Duration::from_secs(10) {
            now += FRAME;
            event = engine.tick(&mut scene, now);
        }
        assert_eq!(event, Some(StepEvent::Changed { from: step(0), to: step(2) }));
        assert_eq!(scene.visible_species(), vec![Species::Nitrosonium]);
    }

    #[test]
    fn camera_settles_on_destination() {
        let mut rig = Rig::new();
        assert!(rig.go(3));
        let _ = rig.settle();
        let anchor = rig.scene.molecule(Species::Nitrosamine).map(|m| m.anchor);
        assert_eq!(anchor, Some(rig.scene.camera.focus_point()));
    }
}
