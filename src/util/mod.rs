//! Shared utilities.

/// Monotonic clocks: wall time and a manually advanced clock.
pub mod clock;

pub use clock::{Clock, ManualClock, SystemClock};
