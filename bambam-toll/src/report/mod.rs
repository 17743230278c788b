//! descriptive reports over vehicle count and coverage tables. these run
//! independently of the toll pipeline.
mod coverage_ops;
mod coverage_row;
mod report_kind;
mod vehicle_count_ops;
mod vehicle_count_row;

pub use coverage_ops::{time_check, PairCoverage};
pub use coverage_row::CoverageRow;
pub use report_kind::ReportKind;
pub use vehicle_count_ops::{
    bus_indexes, car_matrix, car_type_counts, filter_routes, CarType, ROUTE_TRUCK_THRESHOLD,
};
pub use vehicle_count_row::VehicleCountRow;
