use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::VehicleCountRow;
use crate::toll::{DistanceMatrix, TollError};

/// routes with a mean truck count above this value are kept by [`filter_routes`].
pub const ROUTE_TRUCK_THRESHOLD: f64 = 7.0;

/// car volume category. variants are declared in name order so that
/// category counts are listed alphabetically.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CarType {
    High,
    Low,
    Medium,
}

impl CarType {
    /// bins a car count into `[-inf, 15)`, `[15, 25)` or `[25, inf)`.
    pub fn from_car(car: f64) -> Option<CarType> {
        if car.is_nan() {
            None
        } else if car < 15.0 {
            Some(CarType::Low)
        } else if car < 25.0 {
            Some(CarType::Medium)
        } else {
            Some(CarType::High)
        }
    }
}

/// pivots car counts into a matrix over every id in `id_1` or `id_2`.
/// pairs without a row are 0, the diagonal is 0 and a repeated pair keeps
/// its last row.
pub fn car_matrix(rows: &[VehicleCountRow]) -> Result<DistanceMatrix, TollError> {
    if rows.is_empty() {
        return Err(TollError::EmptyInput(String::from("car matrix")));
    }
    let ids = rows
        .iter()
        .flat_map(|r| [r.id_1, r.id_2])
        .sorted()
        .dedup()
        .collect_vec();
    let mut matrix = DistanceMatrix::zeros(ids);
    for row in rows.iter().filter(|r| r.id_1 != r.id_2) {
        if let (Some(i), Some(j)) = (matrix.index_of(row.id_1), matrix.index_of(row.id_2)) {
            matrix.set_by_index(i, j, row.car);
        }
    }
    Ok(matrix)
}

/// number of rows in each car category. every category is listed, including
/// empty ones.
pub fn car_type_counts(rows: &[VehicleCountRow]) -> Result<BTreeMap<CarType, usize>, TollError> {
    if rows.is_empty() {
        return Err(TollError::EmptyInput(String::from("car type counts")));
    }
    let mut counts: BTreeMap<CarType, usize> = [CarType::High, CarType::Low, CarType::Medium]
        .into_iter()
        .map(|car_type| (car_type, 0))
        .collect();
    for car_type in rows.iter().filter_map(|r| CarType::from_car(r.car)) {
        *counts.entry(car_type).or_insert(0) += 1;
    }
    Ok(counts)
}

/// ascending row positions whose bus count is greater than twice the mean.
pub fn bus_indexes(rows: &[VehicleCountRow]) -> Result<Vec<usize>, TollError> {
    if rows.is_empty() {
        return Err(TollError::EmptyInput(String::from("bus indexes")));
    }
    let mean = rows.iter().map(|r| r.bus).sum::<f64>() / rows.len() as f64;
    let indexes = rows
        .iter()
        .enumerate()
        .filter(|(_, r)| r.bus > 2.0 * mean)
        .map(|(idx, _)| idx)
        .collect_vec();
    Ok(indexes)
}

/// sorted routes whose mean truck count is greater than [`ROUTE_TRUCK_THRESHOLD`].
pub fn filter_routes(rows: &[VehicleCountRow]) -> Result<Vec<u64>, TollError> {
    if rows.is_empty() {
        return Err(TollError::EmptyInput(String::from("route filter")));
    }
    let mut sums: BTreeMap<u64, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = sums.entry(row.route).or_insert((0.0, 0));
        entry.0 += row.truck;
        entry.1 += 1;
    }
    let routes = sums
        .into_iter()
        .filter(|(_, (sum, count))| sum / *count as f64 > ROUTE_TRUCK_THRESHOLD)
        .map(|(route, _)| route)
        .collect_vec();
    Ok(routes)
}
