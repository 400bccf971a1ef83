use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
/// Step-transition timing. All durations are in milliseconds.
pub struct AnimationOptions {
    /// Camera move toward the destination anchor.
    #[schemars(title = "Camera Pan (ms)", range(min = 0, max = 5000))]
    pub camera_pan_ms: u64,
    /// Source molecule fade-out.
    #[schemars(title = "Fade Out (ms)", range(min = 0, max = 5000))]
    pub fade_out_ms: u64,
    /// Length of one reaction vignette.
    #[schemars(title = "Vignette (ms)", range(min = 0, max = 5000))]
    pub vignette_ms: u64,
    /// Destination molecule fade-in.
    #[schemars(title = "Fade In (ms)", range(min = 0, max = 5000))]
    pub fade_in_ms: u64,
    /// Scale the destination starts from before overshooting to 1.0.
    #[schemars(title = "Fade In Start Scale", range(min = 0.1, max = 1.0), extend("step" = 0.05))]
    pub fade_in_start_scale: f32,
    /// Back-out overshoot strength of the fade-in scale.
    #[schemars(title = "Overshoot", range(min = 0.0, max = 4.0), extend("step" = 0.1))]
    pub overshoot: f32,
    /// Same-step acknowledgement pulse.
    #[schemars(title = "Acknowledge (ms)", range(min = 0, max = 3000))]
    pub acknowledge_ms: u64,
    /// Peak relative scale of the acknowledgement pulse.
    #[schemars(title = "Pulse Amplitude", range(min = 0.0, max = 0.5), extend("step" = 0.01))]
    pub pulse_amplitude: f32,
    /// Force-release of the busy guard if a transition never completes.
    /// A transition longer than this gets its planned length plus a
    /// one-second grace instead.
    #[schemars(skip)]
    pub watchdog_ms: u64,
}

impl AnimationOptions {
    /// Camera pan duration.
    #[must_use]
    pub fn camera_pan(&self) -> Duration {
        Duration::from_millis(self.camera_pan_ms)
    }

    /// Fade-out duration.
    #[must_use]
    pub fn fade_out(&self) -> Duration {
        Duration::from_millis(self.fade_out_ms)
    }

    /// Vignette duration.
    #[must_use]
    pub fn vignette(&self) -> Duration {
        Duration::from_millis(self.vignette_ms)
    }

    /// Fade-in duration.
    #[must_use]
    pub fn fade_in(&self) -> Duration {
        Duration::from_millis(self.fade_in_ms)
    }

    /// Acknowledgement pulse duration.
    #[must_use]
    pub fn acknowledge(&self) -> Duration {
        Duration::from_millis(self.acknowledge_ms)
    }

    /// Watchdog window.
    #[must_use]
    pub fn watchdog(&self) -> Duration {
        Duration::from_millis(self.watchdog_ms)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            camera_pan_ms: 1200,
            fade_out_ms: 600,
            vignette_ms: 900,
            fade_in_ms: 800,
            fade_in_start_scale: 0.8,
            overshoot: 1.7,
            acknowledge_ms: 600,
            pulse_amplitude: 0.15,
            watchdog_ms: 6000,
        }
    }
}
