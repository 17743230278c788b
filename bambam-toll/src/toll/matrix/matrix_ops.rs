use itertools::Itertools;

use super::DistanceMatrix;
use crate::toll::{DistanceRecord, Edge, TollError};

/// aggregates raw distance records into a symmetric distance matrix.
///
/// records are first pivoted into a directed matrix where repeated
/// (start, end) rows are summed. the directed matrix is then added to its
/// transpose, so rows recorded in both directions for the same pair both
/// contribute to the pair's distance. the diagonal is always zero, even
/// when the input lists a self-distance. pairs never listed have distance 0.
pub fn build_matrix(records: &[DistanceRecord]) -> Result<DistanceMatrix, TollError> {
    if records.is_empty() {
        return Err(TollError::EmptyInput(String::from(
            "distance matrix aggregation",
        )));
    }
    if let Some(invalid) = records
        .iter()
        .find(|r| !r.distance.is_finite() || r.distance < 0.0)
    {
        return Err(TollError::InvalidDistance {
            start: invalid.start_location,
            end: invalid.end_location,
            distance: invalid.distance,
        });
    }

    let ids = records
        .iter()
        .flat_map(|r| [r.start_location, r.end_location])
        .sorted()
        .dedup()
        .collect_vec();

    let mut directed = DistanceMatrix::zeros(ids.clone());
    for record in records {
        if let (Some(i), Some(j)) = (
            directed.index_of(record.start_location),
            directed.index_of(record.end_location),
        ) {
            let sum = directed.get_by_index(i, j) + record.distance;
            directed.set_by_index(i, j, sum);
        }
    }

    let n = directed.size();
    let mut matrix = DistanceMatrix::zeros(ids);
    for i in 0..n {
        for j in 0..n {
            let value = if i == j {
                0.0
            } else {
                directed.get_by_index(i, j) + directed.get_by_index(j, i)
            };
            matrix.set_by_index(i, j, value);
        }
    }

    log::debug!(
        "built {n}x{n} distance matrix from {} records",
        records.len()
    );
    Ok(matrix)
}

/// unrolls a distance matrix into one [`Edge`] per off-diagonal cell.
///
/// both directions of every pair are emitted, so an n×n matrix yields
/// exactly n² - n edges, ordered by (id_start, id_end).
pub fn unroll(matrix: &DistanceMatrix) -> Result<Vec<Edge>, TollError> {
    if matrix.is_empty() {
        return Err(TollError::EmptyInput(String::from("matrix unrolling")));
    }
    let ids = matrix.ids();
    let edges = ids
        .iter()
        .enumerate()
        .cartesian_product(ids.iter().enumerate())
        .filter(|((i, _), (j, _))| i != j)
        .map(|((i, id_start), (j, id_end))| {
            Edge::new(*id_start, *id_end, matrix.get_by_index(i, j))
        })
        .collect_vec();

    log::debug!(
        "unrolled {} edges from {} locations",
        edges.len(),
        ids.len()
    );
    Ok(edges)
}
