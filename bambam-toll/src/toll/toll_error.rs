use super::LocationId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TollError {
    #[error("invalid distance {distance} between locations {start} and {end}, must be finite and non-negative")]
    InvalidDistance {
        start: LocationId,
        end: LocationId,
        distance: f64,
    },
    #[error("edge starts and ends at location {0}")]
    SelfLoop(LocationId),
    #[error("reference location {0} has no outgoing edges")]
    UnknownReference(LocationId),
    #[error("cannot resolve timestamp from day '{day}' and time '{time}': {message}")]
    MalformedTimestamp {
        day: String,
        time: String,
        message: String,
    },
    #[error("{0} received no input rows")]
    EmptyInput(String),
    #[error("invalid toll configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading or writing CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure with file io: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
