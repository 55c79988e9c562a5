//! Benchmark records and per-algorithm grouping

use crate::error::{ReportError, Result};
use csv::{ReaderBuilder, Trim};
use serde::Deserialize;
use std::collections::HashMap;

/// Columns every benchmark CSV must name in its header
pub const REQUIRED_COLUMNS: [&str; 3] = ["alg", "segments", "time"];

/// One benchmark measurement
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BenchmarkRecord {
    /// Algorithm variant name
    pub alg: String,
    /// Number of segments the sieve was split into
    pub segments: u64,
    /// Elapsed time in seconds
    pub time: f64,
}

/// A line series: every `(segments, time)` point of one algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Ordered collection of benchmark records
#[derive(Debug, Clone, Default)]
pub struct RecordSet {
    records: Vec<BenchmarkRecord>,
}

impl RecordSet {
    /// Create an empty record set
    pub fn new() -> Self {
        Self::default()
    }

    /// Join command-line rows with newlines and parse them as one CSV document
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let text = rows
            .iter()
            .map(|row| row.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        Self::from_csv(&text)
    }

    /// Parse CSV text with an `alg,segments,time` header (any column order)
    pub fn from_csv(text: &str) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers = rdr.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ReportError::MissingColumn(column));
            }
        }

        let mut set = Self::new();
        for result in rdr.deserialize() {
            set.add(result?);
        }
        Ok(set)
    }

    /// Append a record
    pub fn add(&mut self, record: BenchmarkRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate records in input order
    pub fn iter(&self) -> impl Iterator<Item = &BenchmarkRecord> {
        self.records.iter()
    }

    /// Group records by algorithm, in order of first appearance
    pub fn series(&self) -> Vec<Series> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut series: Vec<Series> = Vec::new();

        for record in &self.records {
            let slot = *index.entry(record.alg.as_str()).or_insert_with(|| {
                series.push(Series {
                    label: record.alg.clone(),
                    points: Vec::new(),
                });
                series.len() - 1
            });
            series[slot]
                .points
                .push((record.segments as f64, record.time));
        }

        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> RecordSet {
        RecordSet::from_rows(&[
            "alg,segments,time",
            "sieve,10,1.2",
            "sieve,20,2.1",
            "wheel,10,0.9",
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_rows() {
        let set = scenario();
        assert_eq!(set.len(), 3);
        assert!(!set.is_empty());

        let first = set.iter().next().unwrap();
        assert_eq!(first.alg, "sieve");
        assert_eq!(first.segments, 10);
        assert_eq!(first.time, 1.2);
    }

    #[test]
    fn test_multiline_argument() {
        let set = RecordSet::from_rows(&["alg,segments,time\nSequential,1000,3.5", "Parallel,1000,0.8"])
            .unwrap();
        let algs: Vec<_> = set.iter().map(|r| r.alg.as_str()).collect();
        assert_eq!(algs, vec!["Sequential", "Parallel"]);
    }

    #[test]
    fn test_column_order_and_extra_columns() {
        let set = RecordSet::from_csv("time,run,alg,segments\n0.5,1,Parallel,5000\n").unwrap();
        assert_eq!(
            set.iter().next().unwrap(),
            &BenchmarkRecord {
                alg: "Parallel".to_string(),
                segments: 5000,
                time: 0.5,
            }
        );
    }

    #[test]
    fn test_header_only() {
        let set = RecordSet::from_rows(&["alg,segments,time"]).unwrap();
        assert!(set.is_empty());
        assert!(set.series().is_empty());
    }

    #[test]
    fn test_missing_column() {
        let err = RecordSet::from_rows(&["alg,time", "sieve,1.0"]).unwrap_err();
        assert!(matches!(err, ReportError::MissingColumn("segments")));
    }

    #[test]
    fn test_malformed_row() {
        let err = RecordSet::from_rows(&["alg,segments,time", "sieve,many,1.0"]).unwrap_err();
        assert!(matches!(err, ReportError::Csv(_)));
    }

    #[test]
    fn test_series_grouping() {
        let series = scenario().series();
        assert_eq!(series.len(), 2);

        assert_eq!(series[0].label, "sieve");
        assert_eq!(series[0].points, vec![(10.0, 1.2), (20.0, 2.1)]);

        assert_eq!(series[1].label, "wheel");
        assert_eq!(series[1].points, vec![(10.0, 0.9)]);
    }

    #[test]
    fn test_series_first_appearance_order() {
        let set = RecordSet::from_rows(&[
            "alg,segments,time",
            "Sequential,1000,4.0",
            "Parallel,1000,1.0",
            "Sequential,5000,3.0",
            "Parallel,5000,0.7",
        ])
        .unwrap();

        let series = set.series();
        let labels: Vec<_> = series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["Sequential", "Parallel"]);
        assert_eq!(series[0].points, vec![(1000.0, 4.0), (5000.0, 3.0)]);
        assert_eq!(series[1].points, vec![(1000.0, 1.0), (5000.0, 0.7)]);
    }

    #[test]
    fn test_non_finite_times_parse() {
        let set = RecordSet::from_rows(&["alg,segments,time", "s,10,inf", "s,20,2.1"]).unwrap();
        let series = set.series();
        assert!(series[0].points[0].1.is_infinite());
        assert_eq!(series[0].points[1], (20.0, 2.1));
    }
}
