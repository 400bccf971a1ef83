//! Headless walkthrough: `nitroso [options.toml]`.
//!
//! Plays every step of the explainer in virtual time at the configured
//! frame rate and logs what each frame drew. Set `RUST_LOG=debug` for
//! per-transition detail.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use nitroso::animation::StepEvent;
use nitroso::options::Options;
use nitroso::util::clock::{Clock, ManualClock};
use nitroso::{ExplainerCommand, FrameView, InstanceRenderer, NitrosoEngine, SceneRenderer};

/// Upper bound on frames spent waiting for one transition.
const MAX_FRAMES_PER_STEP: u32 = 1200;

/// Wraps the instance renderer and logs a summary every `every` frames.
struct LoggingRenderer {
    inner: InstanceRenderer,
    every: u64,
}

impl SceneRenderer for LoggingRenderer {
    fn draw(&mut self, frame: &FrameView<'_>) {
        self.inner.draw(frame);
        if frame.frame % self.every == 0 {
            log::info!(
                "frame {:>5}  step {}  busy {:<5}  instances {:>4}  effects {}",
                frame.frame,
                frame.step,
                frame.busy,
                self.inner.instance_count(),
                frame.scene.effect_count(),
            );
        }
    }
}

fn run_until_idle(
    engine: &mut NitrosoEngine,
    clock: &ManualClock,
    renderer: &mut LoggingRenderer,
    frame_time: Duration,
) -> Option<StepEvent> {
    for _ in 0..MAX_FRAMES_PER_STEP {
        clock.advance(frame_time);
        if let Some(event) = engine.frame(renderer) {
            return Some(event);
        }
    }
    None
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match Options::load(&path) {
            Ok(options) => {
                log::info!("loaded options from {}", path.display());
                options
            }
            Err(e) => {
                log::error!("{}: {e}", path.display());
                return ExitCode::FAILURE;
            }
        },
        None => Options::default(),
    };

    let fps = options.display.target_fps.max(1);
    let frame_time = Duration::from_secs_f64(1.0 / f64::from(fps));
    let clock = ManualClock::new();
    let mut engine = NitrosoEngine::with_clock(options, Box::new(clock.clone()));
    let mut renderer = LoggingRenderer {
        inner: InstanceRenderer::new(),
        every: u64::from(fps / 2).max(1),
    };

    let script = [
        ExplainerCommand::Next,
        ExplainerCommand::Next,
        ExplainerCommand::Next,
        ExplainerCommand::GoToStep { index: 3 },
        ExplainerCommand::GoToStep { index: 0 },
    ];

    for cmd in script {
        if !engine.execute(cmd) {
            log::info!("{cmd:?} ignored");
            continue;
        }
        match run_until_idle(&mut engine, &clock, &mut renderer, frame_time) {
            Some(event) => {
                let panel = engine.panel();
                log::info!("{event:?}: {} | {}", panel.indicator, panel.title);
            }
            None => {
                log::error!("{cmd:?} never finished");
                return ExitCode::FAILURE;
            }
        }
    }

    log::info!(
        "walkthrough finished at step {} after {:?} ({:.1} fps)",
        engine.current_step(),
        clock.now(),
        engine.fps()
    );
    ExitCode::SUCCESS
}

