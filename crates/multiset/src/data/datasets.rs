//! Detection of previously parsed datasets.
//!
//! The CSV parser stores each parsing session as a subdirectory:
//! parsed_datasets/
//!   session_20240101_120000/
//!   session_20240102_093000/
//!
//! The menu only needs to know whether any session exists.

#[cfg(feature = "native")]
use std::path::Path;

/// Whether parsed datasets are available for analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetStatus {
    /// Not checked yet, or no datasets directory configured
    #[default]
    Unknown,
    Missing,
    Available { sessions: usize },
}

impl DatasetStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, DatasetStatus::Available { .. })
    }

    /// One-line summary shown in the dataset management panel.
    pub fn summary(&self) -> String {
        match self {
            DatasetStatus::Unknown => "Dataset status unavailable".to_string(),
            DatasetStatus::Missing => "⚠ No datasets found - please parse CSV files".to_string(),
            DatasetStatus::Available { sessions: 1 } => {
                "✓ Existing datasets available (1 session)".to_string()
            }
            DatasetStatus::Available { sessions } => {
                format!("✓ Existing datasets available ({} sessions)", sessions)
            }
        }
    }
}

/// Count session directories under `dir`.
#[cfg(feature = "native")]
pub fn check_existing_data(dir: &Path) -> DatasetStatus {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "Datasets directory not readable");
            return DatasetStatus::Missing;
        }
    };

    let sessions = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .count();

    if sessions == 0 {
        DatasetStatus::Missing
    } else {
        DatasetStatus::Available { sessions }
    }
}
