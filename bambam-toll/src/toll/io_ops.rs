//! reading and writing toll tables as CSV.
use std::{fs::File, io::Write, path::Path};

use itertools::Itertools;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use super::rate::{time_codec, TollRecord};
use super::{DistanceMatrix, LocationId, TollError};

/// a priced edge flattened into a single CSV row.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TollRow {
    pub id_start: LocationId,
    pub id_end: LocationId,
    pub distance: f64,
    pub start_day: String,
    pub start_time: String,
    pub end_day: String,
    pub end_time: String,
    pub moto: f64,
    pub car: f64,
    pub rv: f64,
    pub bus: f64,
    pub truck: f64,
}

impl From<&TollRecord> for TollRow {
    fn from(record: &TollRecord) -> Self {
        TollRow {
            id_start: record.edge.id_start,
            id_end: record.edge.id_end,
            distance: record.edge.distance,
            start_day: time_codec::weekday_name(&record.timestamp.day).to_string(),
            start_time: record
                .timestamp
                .time
                .format(time_codec::TIME_FORMAT)
                .to_string(),
            end_day: record.end_day.clone(),
            end_time: record.end_time.clone(),
            moto: record.tolls.moto,
            car: record.tolls.car,
            rv: record.tolls.rv,
            bus: record.tolls.bus,
            truck: record.tolls.truck,
        }
    }
}

/// reads all rows of a CSV file with headers. fails on the first bad row.
pub fn read_csv_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, TollError> {
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;
    let rows = reader
        .into_deserialize::<T>()
        .collect::<Result<Vec<T>, csv::Error>>()?;
    log::debug!("read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// opens an output file. when `overwrite` is false an existing file is an error.
pub fn create_output(path: &Path, overwrite: bool) -> Result<File, TollError> {
    let file = if overwrite {
        File::create(path)?
    } else {
        File::create_new(path)?
    };
    Ok(file)
}

pub fn write_csv_rows<T: Serialize, W: Write>(rows: &[T], writer: W) -> Result<(), TollError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// writes a matrix with a header of `id` followed by every location id, then
/// one row per location.
pub fn write_matrix<W: Write>(matrix: &DistanceMatrix, writer: W) -> Result<(), TollError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let header = std::iter::once(String::from("id"))
        .chain(matrix.ids().iter().map(|id| id.to_string()))
        .collect_vec();
    csv_writer.write_record(&header)?;
    for (id, row) in matrix.rows() {
        let record = std::iter::once(id.to_string())
            .chain(row.iter().map(|v| v.to_string()))
            .collect_vec();
        csv_writer.write_record(&record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_toll_records<W: Write>(records: &[TollRecord], writer: W) -> Result<(), TollError> {
    let rows = records.iter().map(TollRow::from).collect_vec();
    write_csv_rows(&rows, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toll::{build_matrix, price_edges, unroll, DistanceRecord, Edge, TimestampedEdge};
    use std::path::PathBuf;

    fn test_file(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("test")
            .join(name)
    }

    #[test]
    fn test_read_distance_records() {
        let records: Vec<DistanceRecord> =
            read_csv_rows(&test_file("distances.csv")).expect("should read distances");
        assert_eq!(records.len(), 5);
        assert_eq!(records[0], DistanceRecord::new(1001400, 1001402, 9.7));

        let matrix = build_matrix(&records).expect("should build");
        assert_eq!(matrix.size(), 5);
        assert_eq!(matrix.get(1001402, 1001400), Some(9.7));
        // both directions of 1001406 - 1001408 are listed
        assert_eq!(matrix.get(1001406, 1001408), Some(43.4));
        // no shortest path closure, unlisted pairs stay at 0
        assert_eq!(matrix.get(1001400, 1001404), Some(0.0));
        assert_eq!(unroll(&matrix).expect("should unroll").len(), 20);
    }

    #[test]
    fn test_price_timestamped_edges() {
        let rows: Vec<TimestampedEdge> =
            read_csv_rows(&test_file("timestamped_edges.csv")).expect("should read edges");
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].start_day, "Tuesday");
        let records = price_edges(&rows).expect("should price");
        let car = records.iter().map(|r| r.tolls.car).collect_vec();
        assert_eq!(car, vec![9.3, 23.3, 13.4]);
    }

    #[test]
    fn test_write_matrix() {
        let matrix =
            DistanceMatrix::from_data(vec![1, 2], vec![0.0, 4.5, 4.5, 0.0]).expect("valid");
        let mut buffer = vec![];
        write_matrix(&matrix, &mut buffer).expect("should write");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text, "id,1,2\n1,0,4.5\n2,4.5,0\n");
    }

    #[test]
    fn test_write_edges() {
        let edges = vec![Edge::new(1, 2, 4.5), Edge::new(2, 1, 4.5)];
        let mut buffer = vec![];
        write_csv_rows(&edges, &mut buffer).expect("should write");
        let text = String::from_utf8(buffer).expect("utf8");
        assert_eq!(text, "id_start,id_end,distance\n1,2,4.5\n2,1,4.5\n");
    }

    #[test]
    fn test_write_toll_records() {
        let rows = vec![TimestampedEdge::new(Edge::new(1, 2, 10.0), "mon", "9:00")];
        let records = price_edges(&rows).expect("should price");
        let mut buffer = vec![];
        write_toll_records(&records, &mut buffer).expect("should write");
        let text = String::from_utf8(buffer).expect("utf8");
        let lines = text.lines().collect_vec();
        assert_eq!(
            lines[0],
            "id_start,id_end,distance,start_day,start_time,end_day,end_time,moto,car,rv,bus,truck"
        );
        assert_eq!(
            lines[1],
            "1,2,10.0,Monday,09:00:00,mon,9:00,6.4,9.6,12.0,17.6,28.8"
        );
    }
}
