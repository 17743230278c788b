//! Dense distance matrix keyed by location id.

use crate::toll::LocationId;

/// a dense n×n matrix of distances between locations, stored in row-major
/// order. rows and columns share the same ascending list of location ids.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    ids: Vec<LocationId>,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// creates a zero-filled matrix. `ids` must be sorted and unique.
    pub(crate) fn zeros(ids: Vec<LocationId>) -> Self {
        let size = ids.len();
        Self {
            ids,
            data: vec![0.0; size * size],
        }
    }

    /// creates a matrix from explicit row-major data.
    ///
    /// returns `None` if `ids` are not strictly ascending or if the data
    /// length doesn't match `ids.len()²`.
    pub fn from_data(ids: Vec<LocationId>, data: Vec<f64>) -> Option<Self> {
        let ascending = ids.windows(2).all(|pair| pair[0] < pair[1]);
        if !ascending || data.len() != ids.len() * ids.len() {
            return None;
        }
        Some(Self { ids, data })
    }

    /// location ids labeling both the rows and the columns, ascending.
    pub fn ids(&self) -> &[LocationId] {
        &self.ids
    }

    /// number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn index_of(&self, id: LocationId) -> Option<usize> {
        self.ids.binary_search(&id).ok()
    }

    /// distance from `from` to `to`, or `None` if either location is not in the matrix.
    pub fn get(&self, from: LocationId, to: LocationId) -> Option<f64> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Some(self.get_by_index(i, j))
    }

    pub(crate) fn get_by_index(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size() + j]
    }

    pub(crate) fn set_by_index(&mut self, i: usize, j: usize, value: f64) {
        let size = self.size();
        self.data[i * size + j] = value;
    }

    /// iterates over each row along with its location id.
    pub fn rows(&self) -> impl Iterator<Item = (LocationId, &[f64])> + '_ {
        self.ids
            .iter()
            .copied()
            .zip(self.data.chunks(self.size().max(1)))
    }

    /// returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        let n = self.size();
        (0..n).all(|i| {
            ((i + 1)..n).all(|j| (self.get_by_index(i, j) - self.get_by_index(j, i)).abs() <= tol)
        })
    }

    /// returns `true` if every diagonal cell is zero.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size()).all(|i| self.get_by_index(i, i) == 0.0)
    }

    /// builds a new matrix with the same ids by applying `op` to every cell.
    pub fn map_values<F>(&self, op: F) -> DistanceMatrix
    where
        F: Fn(f64) -> f64,
    {
        DistanceMatrix {
            ids: self.ids.clone(),
            data: self.data.iter().map(|v| op(*v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(vec![3, 7], vec![0.0, 5.0, 5.0, 0.0]).expect("valid");
        assert_eq!(dm.size(), 2);
        assert_eq!(dm.get(3, 7), Some(5.0));
        assert_eq!(dm.get(7, 7), Some(0.0));
        assert_eq!(dm.get(3, 4), None);
    }

    #[test]
    fn test_from_data_invalid() {
        assert!(DistanceMatrix::from_data(vec![1, 2], vec![0.0, 1.0, 2.0]).is_none());
        assert!(DistanceMatrix::from_data(vec![2, 1], vec![0.0; 4]).is_none());
        assert!(DistanceMatrix::from_data(vec![1, 1], vec![0.0; 4]).is_none());
    }

    #[test]
    fn test_rows() {
        let dm = DistanceMatrix::from_data(vec![1, 2], vec![0.0, 4.0, 4.0, 0.0]).expect("valid");
        let rows: Vec<(LocationId, Vec<f64>)> =
            dm.rows().map(|(id, row)| (id, row.to_vec())).collect();
        assert_eq!(rows, vec![(1, vec![0.0, 4.0]), (2, vec![4.0, 0.0])]);
        assert_eq!(DistanceMatrix::zeros(vec![]).rows().count(), 0);
    }

    #[test]
    fn test_is_symmetric() {
        let sym = DistanceMatrix::from_data(vec![1, 2], vec![0.0, 4.0, 4.0, 0.0]).expect("valid");
        let asym = DistanceMatrix::from_data(vec![1, 2], vec![0.0, 4.0, 3.0, 0.0]).expect("valid");
        assert!(sym.is_symmetric(0.0));
        assert!(!asym.is_symmetric(0.5));
    }
}
