//! Segmented sieve benchmark report
//!
//! Turns the `alg,segments,time` CSV emitted by the sieve benchmarks into a
//! markdown table and a time-vs-segments line chart.
//!
//! # Architecture
//!
//! - **Records**: CSV parsing and per-algorithm grouping
//! - **Output**: Markdown table rendering
//! - **Visualization**: Line chart, one series per algorithm
//! - **Config**: Chart title, axis labels and output path
//!
//! # Example
//!
//! ```rust,no_run
//! use seg_sieve_report::{ChartConfig, MarkdownTable, RecordSet, SegmentsPlotter};
//!
//! fn main() -> anyhow::Result<()> {
//!     let records = RecordSet::from_rows(&[
//!         "alg,segments,time",
//!         "Sequential,1000,4.2",
//!         "Parallel,1000,0.9",
//!     ])?;
//!
//!     print!("{}", MarkdownTable::render(&records));
//!     SegmentsPlotter::plot(&records, &ChartConfig::default())?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod records;
pub mod visualization;

// Re-export commonly used types
pub use config::ChartConfig;
pub use error::{ReportError, Result};
pub use output::MarkdownTable;
pub use records::{BenchmarkRecord, RecordSet, Series};
pub use visualization::SegmentsPlotter;
