//! toll table scripts. each operation reads CSV input, runs one or more
//! stages of the toll pipeline and writes the result as CSV or prints JSON.
use std::path::Path;

use clap::Subcommand;
use serde::{Deserialize, Serialize};

use crate::report::{self, CoverageRow, ReportKind, VehicleCountRow};
use crate::toll::rate::WindowBoundary;
use crate::toll::threshold_ops::{self, DEFAULT_THRESHOLD_TOLERANCE};
use crate::toll::{
    build_matrix, io_ops, scale_matrix, unroll, DistanceMatrix, DistanceRecord, Edge, LocationId,
    ScaleRule, TimestampedEdge, TollError, TollRateConfig, TollRateEngine,
};

#[derive(Debug, Clone, Serialize, Deserialize, Subcommand)]
pub enum TollOperation {
    /// aggregate a distance table into a symmetric distance matrix
    Matrix {
        /// CSV with columns id_start, id_end, distance
        #[arg(long)]
        input: String,
        #[arg(long)]
        output: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// build the distance matrix and unroll it into an edge list
    Unroll {
        /// CSV with columns id_start, id_end, distance
        #[arg(long)]
        input: String,
        #[arg(long)]
        output: String,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// list locations whose mean distance is near that of a reference location
    Threshold {
        /// CSV with columns id_start, id_end, distance
        #[arg(long)]
        input: String,
        #[arg(long)]
        reference_id: LocationId,
        /// relative half-width of the accepted band around the reference mean
        #[arg(long, default_value_t = DEFAULT_THRESHOLD_TOLERANCE)]
        tolerance: f64,
    },
    /// price timestamped edges for every vehicle class
    Price {
        /// CSV with columns id_start, id_end, distance, startDay, startTime, endDay, endTime
        #[arg(long)]
        input: String,
        #[arg(long)]
        output: String,
        /// optional .toml or .json toll rate configuration
        #[arg(long)]
        config: Option<String>,
        /// override the window boundary of the configuration
        #[arg(long, value_enum)]
        window_boundary: Option<WindowBoundary>,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// rescale every cell of the distance matrix with a two-branch rule
    Scale {
        /// CSV with columns id_start, id_end, distance
        #[arg(long)]
        input: String,
        #[arg(long)]
        output: String,
        /// cells strictly above this value use the high factor
        #[arg(long, default_value_t = 20.0)]
        threshold: f64,
        #[arg(long, default_value_t = 1.25)]
        low_factor: f64,
        #[arg(long, default_value_t = 0.75)]
        high_factor: f64,
        #[arg(long, default_value_t = false)]
        overwrite: bool,
    },
    /// run a descriptive report over a vehicle count or coverage table
    Report {
        #[arg(long)]
        input: String,
        #[arg(value_enum)]
        kind: ReportKind,
    },
}

impl TollOperation {
    pub fn run(&self) -> Result<(), TollError> {
        match self {
            TollOperation::Matrix {
                input,
                output,
                overwrite,
            } => {
                let matrix = read_matrix(input)?;
                let file = io_ops::create_output(Path::new(output), *overwrite)?;
                io_ops::write_matrix(&matrix, file)?;
                log::info!(
                    "wrote {}x{} matrix to {output}",
                    matrix.size(),
                    matrix.size()
                );
                Ok(())
            }
            TollOperation::Unroll {
                input,
                output,
                overwrite,
            } => {
                let edges = read_edges(input)?;
                let file = io_ops::create_output(Path::new(output), *overwrite)?;
                io_ops::write_csv_rows(&edges, file)?;
                log::info!("wrote {} edges to {output}", edges.len());
                Ok(())
            }
            TollOperation::Threshold {
                input,
                reference_id,
                tolerance,
            } => {
                let edges = read_edges(input)?;
                let ids =
                    threshold_ops::select_within_tolerance(&edges, *reference_id, *tolerance)?;
                println!("{}", serde_json::to_string(&ids)?);
                Ok(())
            }
            TollOperation::Price {
                input,
                output,
                config,
                window_boundary,
                overwrite,
            } => {
                let mut toll_config = match config {
                    Some(f) => TollRateConfig::try_from(f)?,
                    None => TollRateConfig::default(),
                };
                if let Some(boundary) = window_boundary {
                    toll_config.window_boundary = *boundary;
                }
                let engine = TollRateEngine::new(toll_config)?;
                let rows: Vec<TimestampedEdge> = io_ops::read_csv_rows(Path::new(input))?;
                let records = engine.price(&rows)?;
                let file = io_ops::create_output(Path::new(output), *overwrite)?;
                io_ops::write_toll_records(&records, file)?;
                log::info!("wrote {} priced edges to {output}", records.len());
                Ok(())
            }
            TollOperation::Scale {
                input,
                output,
                threshold,
                low_factor,
                high_factor,
                overwrite,
            } => {
                let rule = ScaleRule::new(*threshold, *low_factor, *high_factor);
                let scaled = scale_matrix(&read_matrix(input)?, &rule);
                let file = io_ops::create_output(Path::new(output), *overwrite)?;
                io_ops::write_matrix(&scaled, file)?;
                log::info!("wrote scaled matrix to {output}");
                Ok(())
            }
            TollOperation::Report { input, kind } => run_report(Path::new(input), kind),
        }
    }
}

fn read_matrix(input: &str) -> Result<DistanceMatrix, TollError> {
    let records: Vec<DistanceRecord> = io_ops::read_csv_rows(Path::new(input))?;
    build_matrix(&records)
}

fn read_edges(input: &str) -> Result<Vec<Edge>, TollError> {
    unroll(&read_matrix(input)?)
}

fn run_report(input: &Path, kind: &ReportKind) -> Result<(), TollError> {
    match kind {
        ReportKind::CarMatrix => {
            let rows: Vec<VehicleCountRow> = io_ops::read_csv_rows(input)?;
            io_ops::write_matrix(&report::car_matrix(&rows)?, std::io::stdout())
        }
        ReportKind::CarTypeCounts => {
            let rows: Vec<VehicleCountRow> = io_ops::read_csv_rows(input)?;
            println!("{}", serde_json::to_string(&report::car_type_counts(&rows)?)?);
            Ok(())
        }
        ReportKind::BusIndexes => {
            let rows: Vec<VehicleCountRow> = io_ops::read_csv_rows(input)?;
            println!("{}", serde_json::to_string(&report::bus_indexes(&rows)?)?);
            Ok(())
        }
        ReportKind::FilterRoutes => {
            let rows: Vec<VehicleCountRow> = io_ops::read_csv_rows(input)?;
            println!("{}", serde_json::to_string(&report::filter_routes(&rows)?)?);
            Ok(())
        }
        ReportKind::TimeCheck => {
            let rows: Vec<CoverageRow> = io_ops::read_csv_rows(input)?;
            println!("{}", serde_json::to_string(&report::time_check(&rows)?)?);
            Ok(())
        }
    }
}
