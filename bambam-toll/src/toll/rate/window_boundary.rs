use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// how the bounds of a weekday [`super::TimeWindow`] are matched.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum WindowBoundary {
    /// both bounds are inclusive. a time equal to the end of one window and
    /// the start of the next matches both, and both factors are applied.
    #[default]
    Inclusive,
    /// windows are `[start, end)`, except the last window of the day which
    /// also includes its end time.
    HalfOpen,
}
