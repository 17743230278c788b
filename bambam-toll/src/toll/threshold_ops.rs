use std::collections::BTreeMap;

use itertools::Itertools;

use super::{Edge, LocationId, TollError};

/// relative band around the reference average used by [`select_by_threshold`].
pub const DEFAULT_THRESHOLD_TOLERANCE: f64 = 0.1;

/// mean outgoing distance of each start location, keyed by id_start.
pub fn mean_distance_by_start(edges: &[Edge]) -> BTreeMap<LocationId, f64> {
    let mut sums: BTreeMap<LocationId, (f64, usize)> = BTreeMap::new();
    for edge in edges {
        let entry = sums.entry(edge.id_start).or_insert((0.0, 0));
        entry.0 += edge.distance;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(id, (sum, count))| (id, sum / count as f64))
        .collect()
}

/// finds all start locations whose mean distance lies within 10% of the
/// mean distance of `reference_id`, bounds included. the reference itself
/// is part of the result. ids are returned in ascending order.
pub fn select_by_threshold(
    edges: &[Edge],
    reference_id: LocationId,
) -> Result<Vec<LocationId>, TollError> {
    select_within_tolerance(edges, reference_id, DEFAULT_THRESHOLD_TOLERANCE)
}

/// finds all start locations whose mean distance lies within
/// `[ref_avg * (1 - tolerance), ref_avg * (1 + tolerance)]`.
///
/// # Arguments
///
/// * `edges` - unrolled edge list
/// * `reference_id` - start location whose mean distance sets the band
/// * `tolerance` - relative half-width of the band, in [0, inf)
pub fn select_within_tolerance(
    edges: &[Edge],
    reference_id: LocationId,
    tolerance: f64,
) -> Result<Vec<LocationId>, TollError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(TollError::ConfigurationError(format!(
            "threshold tolerance must be finite and non-negative, found {tolerance}"
        )));
    }
    if edges.is_empty() {
        return Err(TollError::EmptyInput(String::from("threshold selection")));
    }
    let means = mean_distance_by_start(edges);
    let reference_avg = *means
        .get(&reference_id)
        .ok_or(TollError::UnknownReference(reference_id))?;
    let lower = reference_avg * (1.0 - tolerance);
    let upper = reference_avg * (1.0 + tolerance);

    let ids = means
        .into_iter()
        .filter(|(_, avg)| lower <= *avg && *avg <= upper)
        .map(|(id, _)| id)
        .collect_vec();
    log::debug!(
        "{} locations within [{lower}, {upper}] of reference {reference_id}",
        ids.len()
    );
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toll::{build_matrix, unroll, DistanceRecord};

    #[test]
    fn test_mean_distance_by_start() {
        let edges = vec![
            Edge::new(1, 2, 4.0),
            Edge::new(1, 3, 6.0),
            Edge::new(2, 1, 4.0),
        ];
        let means = mean_distance_by_start(&edges);
        assert_eq!(means.get(&1), Some(&5.0));
        assert_eq!(means.get(&2), Some(&4.0));
        assert_eq!(means.get(&3), None);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let reference_avg = 10.0;
        let edges = vec![
            Edge::new(1, 9, reference_avg),
            Edge::new(2, 9, reference_avg * 1.1),
            Edge::new(3, 9, reference_avg * 0.9),
            Edge::new(4, 9, 11.5),
            Edge::new(5, 9, 8.5),
        ];
        let ids = select_by_threshold(&edges, 1).expect("should select");
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_uses_mean_of_all_outgoing_edges() {
        let edges = vec![
            Edge::new(10, 20, 0.0),
            Edge::new(10, 30, 20.0),
            Edge::new(20, 10, 9.5),
            Edge::new(20, 30, 10.5),
            Edge::new(30, 10, 20.0),
            Edge::new(30, 20, 20.0),
        ];
        let ids = select_by_threshold(&edges, 20).expect("should select");
        assert_eq!(ids, vec![10, 20]);
    }

    #[test]
    fn test_zero_reference_average() {
        let edges = vec![
            Edge::new(1, 2, 0.0),
            Edge::new(2, 1, 0.0),
            Edge::new(3, 1, 0.1),
        ];
        let ids = select_by_threshold(&edges, 1).expect("should select");
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_custom_tolerance() {
        let edges = vec![
            Edge::new(1, 2, 10.0),
            Edge::new(2, 1, 14.0),
            Edge::new(3, 1, 16.0),
        ];
        let ids = select_within_tolerance(&edges, 1, 0.5).expect("should select");
        assert_eq!(ids, vec![1, 2]);
        assert!(matches!(
            select_within_tolerance(&edges, 1, -0.1),
            Err(TollError::ConfigurationError(_))
        ));
    }

    #[test]
    fn test_unknown_reference() {
        let edges = vec![Edge::new(1, 2, 10.0)];
        assert!(matches!(
            select_by_threshold(&edges, 2),
            Err(TollError::UnknownReference(2))
        ));
    }

    #[test]
    fn test_empty_edges() {
        assert!(matches!(
            select_by_threshold(&[], 1),
            Err(TollError::EmptyInput(_))
        ));
    }

    #[test]
    fn test_selection_over_unrolled_matrix() {
        let records = vec![
            DistanceRecord::new(1, 2, 10.0),
            DistanceRecord::new(2, 3, 10.0),
            DistanceRecord::new(3, 1, 10.5),
        ];
        let matrix = build_matrix(&records).expect("should build");
        let edges = unroll(&matrix).expect("should unroll");
        // means: 1 -> 10.25, 2 -> 10.0, 3 -> 10.25
        let ids = select_by_threshold(&edges, 2).expect("should select");
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
