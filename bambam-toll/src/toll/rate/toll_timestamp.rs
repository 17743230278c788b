use chrono::{NaiveTime, Timelike, Weekday};

use super::time_codec;
use crate::toll::TollError;

/// the day of week and time of day at which an edge is priced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TollTimestamp {
    pub day: Weekday,
    pub time: NaiveTime,
}

impl TollTimestamp {
    pub fn new(day: Weekday, time: NaiveTime) -> Self {
        Self { day, time }
    }

    /// resolves the raw day and time labels of a pricing table row.
    pub fn parse(day: &str, time: &str) -> Result<TollTimestamp, TollError> {
        let malformed = |message: String| TollError::MalformedTimestamp {
            day: day.to_string(),
            time: time.to_string(),
            message,
        };
        let weekday = time_codec::parse_weekday(day).map_err(|e| malformed(format!("{e}")))?;
        let time_of_day = time_codec::parse_time(time).map_err(|e| malformed(format!("{e}")))?;
        // chrono keeps leap seconds past 23:59:59, outside every toll window
        if time_of_day.nanosecond() >= 1_000_000_000 {
            return Err(malformed(String::from("leap seconds are not a time of day")));
        }
        Ok(TollTimestamp::new(weekday, time_of_day))
    }

    pub fn is_weekend(&self) -> bool {
        matches!(self.day, Weekday::Sat | Weekday::Sun)
    }
}
