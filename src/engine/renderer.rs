//! The drawing boundary. The explainer decides *what* is on screen; a
//! [`SceneRenderer`] turns that into pixels.

use glam::Vec3;

use crate::chemistry::Step;
use crate::effects::Effect;
use crate::picking::AtomHit;
use crate::scene::{Glow, Scene};

/// Read-only view of one frame handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    /// Everything drawable.
    pub scene: &'a Scene,
    /// Current step (the source step while busy).
    pub step: Step,
    /// Whether a transition is in flight.
    pub busy: bool,
    /// Atom under the cursor, if any.
    pub hover: Option<&'a AtomHit>,
    /// Smoothed frames per second.
    pub fps: f32,
    /// Frames rendered so far, including this one.
    pub frame: u64,
}

/// Something that can draw a frame.
pub trait SceneRenderer {
    /// Draw the frame. Called exactly once per
    /// [`NitrosoEngine::frame`](super::NitrosoEngine::frame).
    fn draw(&mut self, frame: &FrameView<'_>);
}

/// Floats per instance in [`InstanceRenderer`]'s buffer:
/// `x, y, z, radius, r, g, b, alpha`.
pub const INSTANCE_STRIDE: usize = 8;

/// Flattens a frame into sphere instances for an external rasterizer
/// (e.g. a JS canvas reading the buffer through wasm memory).
///
/// Atoms of shown molecules, the environment and every live particle are
/// written in that order. Glowing groups have their color brightened.
#[derive(Debug, Clone, Default)]
pub struct InstanceRenderer {
    instances: Vec<f32>,
    view_proj: [f32; 16],
}

impl InstanceRenderer {
    /// Empty renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Instance data from the last frame.
    #[must_use]
    pub fn instances(&self) -> &[f32] {
        &self.instances
    }

    /// Number of instances from the last frame.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.instances.len() / INSTANCE_STRIDE
    }

    /// Column-major view-projection matrix from the last frame.
    #[must_use]
    pub fn view_proj(&self) -> &[f32; 16] {
        &self.view_proj
    }

    fn push(&mut self, center: Vec3, radius: f32, color: [f32; 3], alpha: f32) {
        self.instances.extend_from_slice(&[
            center.x, center.y, center.z, radius, color[0], color[1], color[2], alpha,
        ]);
    }
}

fn lit(color: [f32; 3], glow: Option<&Glow>) -> [f32; 3] {
    let Some(glow) = glow else {
        return color;
    };
    let k = (glow.intensity * 0.25).clamp(0.0, 1.0);
    [
        color[0] + (glow.color[0] - color[0]) * k,
        color[1] + (glow.color[1] - color[1]) * k,
        color[2] + (glow.color[2] - color[2]) * k,
    ]
}

impl SceneRenderer for InstanceRenderer {
    fn draw(&mut self, frame: &FrameView<'_>) {
        self.instances.clear();
        self.view_proj = frame.scene.camera.camera.build_matrix().to_cols_array();

        for molecule in frame.scene.molecules().filter(|m| m.is_shown()) {
            let glow = molecule.visual.glow.as_ref();
            for (atom, center, radius) in molecule.world_atoms() {
                let color = lit(atom.element.cpk_color(), glow);
                self.push(center, radius, color, molecule.visual.opacity);
            }
        }

        let environment = &frame.scene.environment;
        if environment.visible {
            let glow = environment.visual.glow.as_ref();
            for atom in &environment.visual.atoms {
                let color = lit(atom.element.cpk_color(), glow);
                self.push(atom.position, atom.radius, color, environment.visual.opacity);
            }
        }

        for (_, effect) in frame.scene.effects() {
            if let Effect::Particles(burst) = effect {
                for particle in burst.particles() {
                    self.push(particle.position, particle.size, burst.color(), particle.alpha);
                }
            }
        }
    }
}
