//! Chart configuration
//!
//! Defaults reproduce the segmented sieve report exactly. A JSON file may
//! override any subset of fields, and CLI flags override the file.

use crate::error::{ReportError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Segmented Sieve: time vs segments (Limit: 1e9)";
pub const DEFAULT_X_LABEL: &str = "Number of segments";
pub const DEFAULT_Y_LABEL: &str = "Time (s)";
pub const DEFAULT_OUTPUT_PATH: &str = "imgs/seg-sieve.png";

/// Chart appearance and destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Chart caption
    pub title: String,

    /// X axis description
    pub x_label: String,

    /// Y axis description
    pub y_label: String,

    /// PNG destination; its parent directory must already exist
    pub output_path: PathBuf,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Draw caption, axis labels and legend; needs a system font when set
    pub draw_text: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            x_label: DEFAULT_X_LABEL.to_string(),
            y_label: DEFAULT_Y_LABEL.to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            width: 1024,
            height: 768,
            draw_text: true,
        }
    }
}

impl ChartConfig {
    /// Load a (possibly partial) JSON config; absent keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    /// Set the chart title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set both axis descriptions
    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }

    /// Set the output image path
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Set the image size in pixels
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Toggle caption, axis labels and legend
    pub fn with_text(mut self, draw_text: bool) -> Self {
        self.draw_text = draw_text;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ReportError::Config(format!(
                "image size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(ReportError::Config("output path is empty".into()));
        }

        Ok(())
    }
}
