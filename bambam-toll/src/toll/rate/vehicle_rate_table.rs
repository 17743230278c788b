use serde::{Deserialize, Serialize};

use super::{VehicleClass, VehicleTolls};

/// per-distance toll coefficient of each vehicle class.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct VehicleRateTable {
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

impl Default for VehicleRateTable {
    fn default() -> Self {
        Self {
            moto: 0.8,
            car: 1.2,
            rv: 1.5,
            bus: 2.2,
            truck: 3.6,
        }
    }
}

impl VehicleRateTable {
    pub fn coefficient(&self, class: VehicleClass) -> f64 {
        match class {
            VehicleClass::Moto => self.moto,
            VehicleClass::Car => self.car,
            VehicleClass::Rv => self.rv,
            VehicleClass::Bus => self.bus,
            VehicleClass::Truck => self.truck,
        }
    }

    /// undiscounted tolls for traveling `distance`.
    pub fn base_tolls(&self, distance: f64) -> VehicleTolls {
        VehicleTolls {
            moto: distance * self.moto,
            car: distance * self.car,
            rv: distance * self.rv,
            bus: distance * self.bus,
            truck: distance * self.truck,
        }
    }
}
