use crate::utils::error::Result;
use serde::{Deserialize, Serialize};

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// Everything a grouping run needs to know, regardless of where it came from.
pub trait ConfigProvider {
    /// Participants CSV, relative to the storage root.
    fn input_path(&self) -> Option<&str>;
    fn inline_scores(&self) -> &[f64];
    fn requested_groups(&self) -> usize;
    fn score_bounds(&self) -> (f64, f64);
    fn output_format(&self) -> OutputFormat;
    fn output_path(&self) -> Option<&str>;
}
