use serde::{Deserialize, Serialize};

/// identifier of a toll location, a vertex of the distance graph.
pub type LocationId = u64;

/// a row in the raw distance table. the same pair of locations may appear
/// several times and in either direction, every row contributes to the
/// aggregated distance between the pair.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DistanceRecord {
    #[serde(alias = "id_start")]
    pub start_location: LocationId,
    #[serde(alias = "id_end")]
    pub end_location: LocationId,
    pub distance: f64,
}

impl DistanceRecord {
    pub fn new(start_location: LocationId, end_location: LocationId, distance: f64) -> Self {
        Self {
            start_location,
            end_location,
            distance,
        }
    }
}
