//! CLI argument parsing and report dispatch

use crate::config::ChartConfig;
use crate::output::MarkdownTable;
use crate::records::RecordSet;
use crate::visualization::SegmentsPlotter;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

/// Print a markdown table of segmented sieve benchmark results and plot
/// time against number of segments for every algorithm.
#[derive(Parser, Debug)]
#[command(name = "seg-sieve-report")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CSV rows (or blocks of rows) with an `alg,segments,time` header;
    /// joined with newlines into one document
    #[arg(required = true, value_name = "ROWS")]
    pub rows: Vec<String>,

    /// JSON file overriding chart settings (title, x_label, y_label, output_path, width, height, draw_text)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Chart title
    #[arg(long)]
    pub title: Option<String>,

    /// X axis description
    #[arg(long)]
    pub x_label: Option<String>,

    /// Y axis description
    #[arg(long)]
    pub y_label: Option<String>,

    /// Output image path; the directory must already exist
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Skip caption, axis labels and legend (no font required)
    #[arg(long)]
    pub no_text: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the rows, print the table to stdout and save the chart
    pub fn run(&self) -> Result<()> {
        self.run_with(&mut std::io::stdout().lock())
    }

    /// Same as [`Cli::run`], writing the table to `out`
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<()> {
        let config = self.chart_config()?;

        let records = RecordSet::from_rows(&self.rows)
            .context("Failed to parse benchmark rows as CSV")?;
        tracing::info!("Parsed {} benchmark records", records.len());

        out.write_all(MarkdownTable::render(&records).as_bytes())
            .context("Failed to write table")?;
        out.flush()?;

        SegmentsPlotter::plot(&records, &config).with_context(|| {
            format!("Failed to generate chart: {}", config.output_path.display())
        })?;
        tracing::info!("Chart written to {}", config.output_path.display());

        Ok(())
    }

    /// Defaults, then the config file, then individual flags
    fn chart_config(&self) -> Result<ChartConfig> {
        let mut config = match self.config {
            Some(ref path) => ChartConfig::from_file(path)
                .with_context(|| format!("Failed to load config from: {}", path.display()))?,
            None => ChartConfig::default(),
        };

        if let Some(ref title) = self.title {
            config.title = title.clone();
        }
        if let Some(ref x_label) = self.x_label {
            config.x_label = x_label.clone();
        }
        if let Some(ref y_label) = self.y_label {
            config.y_label = y_label.clone();
        }
        if let Some(ref output) = self.output {
            config.output_path = output.clone();
        }
        if self.no_text {
            config.draw_text = false;
        }

        config.validate().context("Invalid chart configuration")?;
        tracing::debug!(?config, "Resolved chart configuration");

        Ok(config)
    }
}
