mod distance_matrix;
mod matrix_ops;

pub use distance_matrix::DistanceMatrix;
pub use matrix_ops::{build_matrix, unroll};
