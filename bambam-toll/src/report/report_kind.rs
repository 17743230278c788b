use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// reports available from the command line.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    /// pivot of car counts between location pairs
    CarMatrix,
    /// count of rows per car volume category
    CarTypeCounts,
    /// rows whose bus count exceeds twice the mean
    BusIndexes,
    /// routes whose mean truck count exceeds the threshold
    FilterRoutes,
    /// whether each location pair covers a full week
    TimeCheck,
}
