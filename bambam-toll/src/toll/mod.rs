pub mod app;
mod edge;
pub mod io_ops;
mod location;
pub mod matrix;
pub mod rate;
mod scale_rule;
pub mod threshold_ops;
mod toll_error;

pub use edge::{Edge, TimestampedEdge};
pub use location::{DistanceRecord, LocationId};
pub use matrix::{build_matrix, unroll, DistanceMatrix};
pub use rate::{price_edges, TollRateConfig, TollRateEngine, TollRecord};
pub use scale_rule::{round_to_tenth, scale_matrix, Scale, ScaleRule};
pub use threshold_ops::select_by_threshold;
pub use toll_error::TollError;
