use serde::{Deserialize, Serialize};

use super::LocationId;

/// one off-diagonal cell of a [`super::DistanceMatrix`] in unrolled form.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub id_start: LocationId,
    pub id_end: LocationId,
    pub distance: f64,
}

impl Edge {
    pub fn new(id_start: LocationId, id_end: LocationId, distance: f64) -> Self {
        Self {
            id_start,
            id_end,
            distance,
        }
    }
}

/// an edge annotated with the day and time labels of the pricing table.
///
/// day and time values are kept as the raw text read from the table, they
/// are resolved into a [`super::rate::TollTimestamp`] by the toll rate engine
/// so that unparseable rows fail the pricing call. only the start day and
/// time are used for pricing, the end labels are carried through.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TimestampedEdge {
    pub id_start: LocationId,
    pub id_end: LocationId,
    pub distance: f64,
    #[serde(rename = "startDay")]
    pub start_day: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endDay", default)]
    pub end_day: String,
    #[serde(rename = "endTime", default)]
    pub end_time: String,
}

impl TimestampedEdge {
    /// annotates an edge with a start day and time. the end labels mirror the start.
    pub fn new(edge: Edge, start_day: &str, start_time: &str) -> Self {
        Self {
            id_start: edge.id_start,
            id_end: edge.id_end,
            distance: edge.distance,
            start_day: start_day.to_string(),
            start_time: start_time.to_string(),
            end_day: start_day.to_string(),
            end_time: start_time.to_string(),
        }
    }

    pub fn edge(&self) -> Edge {
        Edge::new(self.id_start, self.id_end, self.distance)
    }
}
