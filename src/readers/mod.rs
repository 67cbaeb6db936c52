use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;

use crate::series::{RawSample, RawSeries, RawTimestamp};

pub trait SeriesReader {
    fn read_series(&self) -> Result<RawSeries, ReadError>;
}

#[derive(Debug)]
pub enum ReadError {
    Io(String),
    Json(String),
    Timestamp(String),
    Value(String),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(msg) => write!(f, "I/O error: {}", msg),
            ReadError::Json(msg) => write!(f, "JSON error: {}", msg),
            ReadError::Timestamp(msg) => write!(f, "Timestamp error: {}", msg),
            ReadError::Value(msg) => write!(f, "Value error: {}", msg),
        }
    }
}

impl std::error::Error for ReadError {}

#[derive(Debug, Deserialize)]
struct Record {
    time: String,
    ghi: f64,
}

/// Reads a series from a JSON array of `{"time": ..., "ghi": ...}` records,
/// the shape the TMY export produces. Timestamps carrying a UTC offset
/// parse as aware; plain `%Y-%m-%dT%H:%M:%S` ones as naive.
pub struct JsonSeriesReader {
    pub path: PathBuf,
}

impl SeriesReader for JsonSeriesReader {
    fn read_series(&self) -> Result<RawSeries, ReadError> {
        let file = File::open(&self.path)
            .map_err(|e| ReadError::Io(format!("Failed to open {}: {}", self.path.display(), e)))?;
        let reader = BufReader::new(file);

        let records: Vec<Record> = serde_json::from_reader(reader)
            .map_err(|e| ReadError::Json(format!("Failed to parse series file: {}", e)))?;

        let mut samples = Vec::with_capacity(records.len());
        for record in records {
            if record.ghi < 0.0 {
                return Err(ReadError::Value(format!(
                    "Negative irradiance {} at {}",
                    record.ghi, record.time
                )));
            }

            samples.push(RawSample {
                instant: parse_timestamp(&record.time)?,
                value: record.ghi,
            });
        }

        Ok(RawSeries::new(samples))
    }
}

fn parse_timestamp(text: &str) -> Result<RawTimestamp, ReadError> {
    if let Ok(aware) = DateTime::parse_from_rfc3339(text) {
        return Ok(RawTimestamp::Aware(aware));
    }

    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
        .map(RawTimestamp::Naive)
        .map_err(|e| ReadError::Timestamp(format!("Failed to parse {:?}: {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_series_file(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("series.json");
        let mut file = File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_read_naive_and_aware_records() {
        let (_dir, path) = write_series_file(
            r#"[
                {"time": "2023-06-15T12:00:00", "ghi": 850.5},
                {"time": "2023-06-15T13:00:00-05:00", "ghi": 790.0}
            ]"#,
        );

        let series = JsonSeriesReader { path }.read_series().unwrap();

        assert_eq!(series.len(), 2);
        assert!(matches!(series.samples[0].instant, RawTimestamp::Naive(_)));
        assert_eq!(series.samples[0].value, 850.5);
        assert!(matches!(series.samples[1].instant, RawTimestamp::Aware(_)));
    }

    #[test]
    fn test_empty_array_yields_empty_series() {
        let (_dir, path) = write_series_file("[]");

        let series = JsonSeriesReader { path }.read_series().unwrap();

        assert!(series.is_empty());
    }

    #[test]
    fn test_malformed_timestamp_is_rejected() {
        let (_dir, path) = write_series_file(r#"[{"time": "15/06/2023 12h", "ghi": 850.5}]"#);

        let result = JsonSeriesReader { path }.read_series();

        assert!(matches!(result, Err(ReadError::Timestamp(_))));
    }

    #[test]
    fn test_negative_irradiance_is_rejected() {
        let (_dir, path) =
            write_series_file(r#"[{"time": "2023-06-15T12:00:00", "ghi": -3.0}]"#);

        let result = JsonSeriesReader { path }.read_series();

        assert!(matches!(result, Err(ReadError::Value(_))));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let reader = JsonSeriesReader {
            path: PathBuf::from("/nonexistent/series.json"),
        };

        assert!(matches!(reader.read_series(), Err(ReadError::Io(_))));
    }
}
