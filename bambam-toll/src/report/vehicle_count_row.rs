use serde::{Deserialize, Serialize};

use crate::toll::LocationId;

/// a row of the vehicle count table, listing per-class counts observed
/// between two locations on a route.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleCountRow {
    pub id_1: LocationId,
    pub id_2: LocationId,
    pub route: u64,
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}
