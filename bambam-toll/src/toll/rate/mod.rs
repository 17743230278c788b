pub mod time_codec;
mod time_window;
mod toll_rate_config;
mod toll_rate_engine;
mod toll_record;
mod toll_timestamp;
mod vehicle_class;
mod vehicle_rate_table;
mod window_boundary;

pub use time_window::TimeWindow;
pub use toll_rate_config::TollRateConfig;
pub use toll_rate_engine::{price_edges, TollRateEngine};
pub use toll_record::{TollRecord, VehicleTolls};
pub use toll_timestamp::TollTimestamp;
pub use vehicle_class::VehicleClass;
pub use vehicle_rate_table::VehicleRateTable;
pub use window_boundary::WindowBoundary;
