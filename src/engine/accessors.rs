//! Read accessors and option updates for NitrosoEngine.

use super::NitrosoEngine;
use crate::animation::StepEngine;
use crate::chemistry::Step;
use crate::options::Options;
use crate::picking::AtomHit;
use crate::scene::Scene;
use crate::ui::PanelView;
use crate::util::frame_timing::FrameTiming;

impl NitrosoEngine {
    /// The step currently shown (the source step while busy).
    #[must_use]
    pub fn current_step(&self) -> Step {
        self.steps.current()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.steps.is_busy()
    }

    /// The step state machine.
    #[must_use]
    pub fn steps(&self) -> &StepEngine {
        &self.steps
    }

    /// The scene graph.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Mutable scene graph, e.g. for a host that positions the camera.
    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Info panel contents for the current step.
    #[must_use]
    pub fn panel(&self) -> PanelView {
        PanelView::project(self.steps.current()).with_busy(self.steps.is_busy())
    }

    /// Atom under the cursor.
    #[must_use]
    pub fn hover(&self) -> Option<&AtomHit> {
        self.hover.as_ref()
    }

    /// Tooltip for the atom under the cursor.
    #[must_use]
    pub fn hover_tooltip(&self) -> Option<String> {
        self.hover.as_ref().map(AtomHit::tooltip)
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.timing.fps()
    }

    /// Whether the idle spin is on.
    #[must_use]
    pub fn auto_rotate(&self) -> bool {
        self.auto_rotate
    }

    /// Current options.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Apply new options. Timing and key bindings take effect at once;
    /// geometry options apply to molecules built after the change, and
    /// transition timing to transitions started after it.
    pub fn set_options(&mut self, options: Options) {
        self.steps.set_options(&options);
        self.input.set_key_bindings(options.keybindings.clone());
        if options.display.target_fps != self.options.display.target_fps {
            self.timing = FrameTiming::new(options.display.target_fps);
        }
        if options.camera.auto_rotate != self.options.camera.auto_rotate {
            self.auto_rotate = options.camera.auto_rotate;
        }
        self.options = options;
    }
}
