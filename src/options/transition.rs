use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

/// Viewport transition timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transition", inline)]
#[serde(default)]
pub struct TransitionOptions {
    /// Upper bound for a whole transition, in seconds. The primary phase
    /// gets 80% of it and the catch-up phase the remaining 20%.
    #[schemars(title = "Max Duration", range(min = 0.0, max = 30.0), extend("step" = 0.1))]
    pub max_duration_secs: f64,
}

impl TransitionOptions {
    /// Maximum duration as a [`Duration`]. Negative or non-finite values
    /// collapse to zero.
    #[must_use]
    pub fn max_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.max_duration_secs.max(0.0))
            .unwrap_or(Duration::ZERO)
    }
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            max_duration_secs: 3.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_budget_is_three_and_a_half_seconds() {
        assert_eq!(
            TransitionOptions::default().max_duration(),
            Duration::from_millis(3500)
        );
    }

    #[test]
    fn bad_durations_collapse_to_zero() {
        for secs in [-1.0, f64::NAN, f64::INFINITY] {
            let opts = TransitionOptions {
                max_duration_secs: secs,
            };
            assert_eq!(opts.max_duration(), Duration::ZERO);
        }
    }
}
