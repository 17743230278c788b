use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::time_codec::{deserialize_naive_time, serialize_naive_time};
use super::WindowBoundary;

/// a weekday time-of-day range with its toll discount factor.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimeWindow {
    #[serde(
        deserialize_with = "deserialize_naive_time",
        serialize_with = "serialize_naive_time"
    )]
    pub start_time: NaiveTime,
    #[serde(
        deserialize_with = "deserialize_naive_time",
        serialize_with = "serialize_naive_time"
    )]
    pub end_time: NaiveTime,
    pub factor: f64,
}

impl TimeWindow {
    pub fn new(start_time: NaiveTime, end_time: NaiveTime, factor: f64) -> Self {
        Self {
            start_time,
            end_time,
            factor,
        }
    }

    /// tests if `time` falls within this window. `closes_day` marks the last
    /// window of the day, whose end time stays inclusive for half-open windows.
    pub fn contains(&self, time: &NaiveTime, boundary: &WindowBoundary, closes_day: bool) -> bool {
        if *time < self.start_time {
            return false;
        }
        match boundary {
            WindowBoundary::Inclusive => *time <= self.end_time,
            WindowBoundary::HalfOpen => {
                *time < self.end_time || (closes_day && *time == self.end_time)
            }
        }
    }
}
