use serde::{Deserialize, Serialize};

use super::{TollTimestamp, VehicleClass};
use crate::toll::Edge;

/// one toll value per vehicle class.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct VehicleTolls {
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

impl VehicleTolls {
    pub fn get(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Moto => self.moto,
            VehicleClass::Car => self.car,
            VehicleClass::Rv => self.rv,
            VehicleClass::Bus => self.bus,
            VehicleClass::Truck => self.truck,
        }
    }

    /// applies `op` to the toll of every class.
    pub fn map<F>(&self, op: F) -> VehicleTolls
    where
        F: Fn(f64) -> f64,
    {
        VehicleTolls {
            moto: op(self.moto),
            car: op(self.car),
            rv: op(self.rv),
            bus: op(self.bus),
            truck: op(self.truck),
        }
    }
}

/// a priced edge.
#[derive(Clone, Debug, PartialEq)]
pub struct TollRecord {
    pub edge: Edge,
    /// the resolved start day and time used for pricing.
    pub timestamp: TollTimestamp,
    /// end day label, carried through from the input row.
    pub end_day: String,
    /// end time label, carried through from the input row.
    pub end_time: String,
    pub tolls: VehicleTolls,
}
