use serde::{Deserialize, Serialize};

use crate::toll::LocationId;

/// a row of the coverage table: one time span recorded for a location pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CoverageRow {
    pub id: LocationId,
    pub id_2: LocationId,
    #[serde(rename = "startDay")]
    pub start_day: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endDay")]
    pub end_day: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
}
