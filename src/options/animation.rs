use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::animation::EasingFunction;

/// Camera animation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Animation", inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Curve used by eased flights.
    #[schemars(title = "Easing")]
    pub easing: EasingFunction,
    /// Frames per second the demo loop ticks animators at.
    #[schemars(title = "Frame Rate", range(min = 1, max = 240))]
    pub frame_rate: u32,
}

impl AnimationOptions {
    /// Time between two frames at [`frame_rate`](Self::frame_rate).
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs(1) / self.frame_rate.max(1)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            easing: EasingFunction::DEFAULT,
            frame_rate: 60,
        }
    }
}
