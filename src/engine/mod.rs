//! The explainer engine: owns the scene, the step engine, input state and
//! the clock, and runs one frame at a time.

mod accessors;
pub mod command;
mod input;
mod renderer;

use std::time::Duration;

use glam::Quat;

pub use self::renderer::{FrameView, InstanceRenderer, SceneRenderer, INSTANCE_STRIDE};
use crate::animation::{StepEngine, StepEvent};
use crate::input::InputProcessor;
use crate::options::Options;
use crate::picking::AtomHit;
use crate::scene::Scene;
use crate::util::clock::{Clock, SystemClock};
use crate::util::frame_timing::FrameTiming;

/// The nitrosamine-formation explainer.
///
/// Owns every piece of mutable state; there are no globals. Drive it by
/// feeding input through [`handle_input`](Self::handle_input),
/// [`handle_key_press`](Self::handle_key_press) or
/// [`execute`](Self::execute), and call [`frame`](Self::frame) once per
/// display refresh.
pub struct NitrosoEngine {
    options: Options,
    scene: Scene,
    steps: StepEngine,
    input: InputProcessor,
    clock: Box<dyn Clock>,
    timing: FrameTiming,
    hover: Option<AtomHit>,
    auto_rotate: bool,
}

impl NitrosoEngine {
    /// Engine on the system clock.
    #[must_use]
    pub fn new(options: Options) -> Self {
        Self::with_clock(options, Box::new(SystemClock::new()))
    }

    /// Engine on an explicit clock.
    #[must_use]
    pub fn with_clock(options: Options, clock: Box<dyn Clock>) -> Self {
        let scene = Scene::new(&options);
        let steps = StepEngine::new(&options);
        let input = InputProcessor::new(options.keybindings.clone());
        let timing = FrameTiming::new(options.display.target_fps);
        let auto_rotate = options.camera.auto_rotate;
        log::debug!(
            "explainer ready at step {} ({})",
            steps.current(),
            steps.current().species()
        );

        Self {
            options,
            scene,
            steps,
            input,
            clock,
            timing,
            hover: None,
            auto_rotate,
        }
    }

    /// Whether the frame limiter allows a frame now.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.timing.should_render(self.clock.now())
    }

    /// Run one frame: drive the step engine, advance effects, spin the
    /// idle molecule, and draw. Drawing happens every frame whether or not
    /// a transition is in flight.
    pub fn frame(&mut self, renderer: &mut dyn SceneRenderer) -> Option<StepEvent> {
        let now = self.clock.now();
        let dt = self.timing.end_frame(now);

        let event = self.steps.tick(&mut self.scene, now);
        self.scene.update_effects(now);
        if let Some(event) = event {
            self.on_step_event(event);
        }
        if self.auto_rotate && !self.steps.is_busy() {
            self.spin_current(dt);
        }

        renderer.draw(&FrameView {
            scene: &self.scene,
            step: self.steps.current(),
            busy: self.steps.is_busy(),
            hover: self.hover.as_ref(),
            fps: self.timing.fps(),
            frame: self.timing.frame_count(),
        });
        event
    }

    fn on_step_event(&mut self, event: StepEvent) {
        match event {
            StepEvent::Changed { .. } => {
                // The hovered atom may belong to a molecule that is now hidden.
                self.hover = None;
            }
            StepEvent::Acknowledged(_) => {}
            StepEvent::WatchdogReleased { from, to } => {
                log::warn!(
                    "transition {} -> {} released by watchdog",
                    from.index(),
                    to.index()
                );
            }
        }
    }

    fn spin_current(&mut self, dt: Duration) {
        let angle = self.options.camera.auto_rotate_speed * dt.as_secs_f32();
        if angle == 0.0 {
            return;
        }
        let species = self.steps.current().species();
        if let Some(molecule) = self.scene.molecule_mut(species) {
            molecule.visual.rotation =
                (Quat::from_rotation_y(angle) * molecule.visual.rotation).normalize();
        }
    }
}

impl std::fmt::Debug for NitrosoEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NitrosoEngine")
            .field("step", &self.steps.current())
            .field("busy", &self.steps.is_busy())
            .field("hover", &self.hover)
            .field("auto_rotate", &self.auto_rotate)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::command::ExplainerCommand;
    use super::*;
    use crate::chemistry::{Species, Step};
    use crate::util::clock::ManualClock;

    /// Records what each frame saw.
    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Step, bool, Vec<Species>)>,
    }

    impl SceneRenderer for Recorder {
        fn draw(&mut self, frame: &FrameView<'_>) {
            self.frames
                .push((frame.step, frame.busy, frame.scene.visible_species()));
        }
    }

    fn engine() -> (NitrosoEngine, ManualClock) {
        let clock = ManualClock::new();
        let engine = NitrosoEngine::with_clock(Options::default(), Box::new(clock.clone()));
        (engine, clock)
    }

    fn run_frames(
        engine: &mut NitrosoEngine,
        clock: &ManualClock,
        renderer: &mut Recorder,
        count: usize,
    ) -> Vec<StepEvent> {
        let mut events = Vec::new();
        for _ in 0..count {
            clock.advance(Duration::from_millis(16));
            events.extend(engine.frame(renderer));
        }
        events
    }

    #[test]
    fn draws_every_frame_while_busy() {
        let (mut engine, clock) = engine();
        let mut recorder = Recorder::default();
        assert!(engine.execute(ExplainerCommand::Next));
        let _ = run_frames(&mut engine, &clock, &mut recorder, 100);
        assert_eq!(recorder.frames.len(), 100);
        assert!(recorder.frames.iter().any(|(_, busy, _)| *busy));
        assert!(recorder.frames.iter().any(|(_, busy, visible)| *busy
            && visible.len() == 2));
    }

    #[test]
    fn walkthrough_reaches_last_step() {
        let (mut engine, clock) = engine();
        let mut recorder = Recorder::default();
        for _ in 0..3 {
            assert!(engine.execute(ExplainerCommand::Next));
            let events = run_frames(&mut engine, &clock, &mut recorder, 250);
            assert_eq!(events.len(), 1);
        }
        assert_eq!(engine.current_step(), Step::LAST);
        assert_eq!(engine.scene().visible_species(), vec![Species::Nitrosamine]);

        let panel = engine.panel();
        assert!(panel.prev_enabled);
        assert!(!panel.next_enabled);
        assert_eq!(panel.indicator, "Step 4 of 4");
        assert!(!engine.execute(ExplainerCommand::Next));
    }

    #[test]
    fn panel_reports_busy_during_transition() {
        let (mut engine, clock) = engine();
        let mut recorder = Recorder::default();
        assert!(engine.execute(ExplainerCommand::GoToStep { index: 2 }));
        assert!(engine.panel().busy);
        assert_eq!(engine.panel().step, 0);
        let _ = run_frames(&mut engine, &clock, &mut recorder, 200);
        let panel = engine.panel();
        assert!(!panel.busy);
        assert_eq!(panel.step, 2);
    }

    #[test]
    fn out_of_range_command_is_ignored() {
        let (mut engine, _clock) = engine();
        assert!(!engine.execute(ExplainerCommand::GoToStep { index: 7 }));
        assert!(!engine.is_busy());
    }

    #[test]
    fn auto_rotate_spins_only_when_idle() {
        let (mut engine, clock) = engine();
        let mut recorder = Recorder::default();
        let rotation = |e: &NitrosoEngine| {
            e.scene()
                .molecule(Species::SodiumNitrite)
                .map_or(Quat::IDENTITY, |m| m.visual.rotation)
        };
        let _ = run_frames(&mut engine, &clock, &mut recorder, 10);
        assert!(rotation(&engine).angle_between(Quat::IDENTITY) > 0.0);

        assert!(engine.execute(ExplainerCommand::ToggleAutoRotate));
        let before = rotation(&engine);
        let _ = run_frames(&mut engine, &clock, &mut recorder, 10);
        assert_eq!(rotation(&engine), before);
    }

    #[test]
    fn key_press_drives_navigation() {
        let (mut engine, clock) = engine();
        let mut recorder = Recorder::default();
        assert!(engine.handle_key_press("Digit4"));
        let events = run_frames(&mut engine, &clock, &mut recorder, 250);
        assert_eq!(
            events,
            vec![StepEvent::Changed {
                from: Step::FIRST,
                to: Step::LAST
            }]
        );
        assert!(!engine.handle_key_press("KeyZ"));
    }

    #[test]
    fn hover_finds_atom_and_clears() {
        let (mut engine, _clock) = engine();
        assert!(engine.execute(ExplainerCommand::Resize {
            width: 800,
            height: 800
        }));
        let first_atom = engine
            .scene()
            .molecule(Species::SodiumNitrite)
            .and_then(|m| m.world_atoms().next().map(|(_, center, _)| center));
        if let Some(center) = first_atom {
            let distance = engine.scene().camera.distance();
            engine.scene_mut().camera.set_view(center, distance);
        }

        let _ = engine.execute(ExplainerCommand::Hover {
            ndc: glam::Vec2::ZERO,
        });
        assert!(engine
            .hover()
            .is_some_and(|h| h.species == Species::SodiumNitrite));
        assert!(engine
            .hover_tooltip()
            .is_some_and(|t| t.ends_with("in Sodium nitrite")));
        assert!(engine.execute(ExplainerCommand::ClearHover));
        assert!(engine.hover().is_none());
    }

    #[test]
    fn recenter_frames_current_molecule() {
        let (mut engine, _clock) = engine();
        engine.scene_mut().camera.set_view(glam::Vec3::new(50.0, 0.0, 0.0), 30.0);
        assert!(engine.execute(ExplainerCommand::RecenterCamera));
        let anchor = engine
            .scene()
            .molecule(Species::SodiumNitrite)
            .map_or(glam::Vec3::ZERO, |m| m.anchor);
        assert!((engine.scene().camera.focus_point() - anchor).length() < 2.0);
    }
}
