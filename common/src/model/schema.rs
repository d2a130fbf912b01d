//! Versioned row-schema registry for the response worksheet.
//!
//! Every row appended to the sheet must match one of the layouts below
//! exactly, in both column count and column order. The active version is
//! picked by backend configuration and reported to the form, so both sides
//! agree on which fields exist before a submission is built.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Tag written to the `source` column of every row. The shared sheet's
/// historical rows carry this value, so new rows keep it.
pub const SOURCE_TAG: &str = "streamlit_app";

/// Client release tag written to the `app_version` column. Constant across
/// schema versions.
pub const APP_VERSION: &str = "v1";

/// The column layout a row must conform to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Identification plus the overall score.
    V1,
    /// V1 plus the five sub-metric scores.
    V2,
    /// Anonymous: overall score and comment only.
    Minimal,
}

impl SchemaVersion {
    /// Ordered column names for this version. The serialized row matches
    /// this slice element by element.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            SchemaVersion::V1 => &[
                "timestamp",
                "name",
                "sector",
                "nps_score",
                "comment",
                "source",
                "app_version",
            ],
            SchemaVersion::V2 => &[
                "timestamp",
                "name",
                "sector",
                "clarity",
                "deadlines",
                "communication",
                "service",
                "cost",
                "nps_score",
                "comment",
                "source",
                "app_version",
            ],
            SchemaVersion::Minimal => &[
                "timestamp",
                "nps_score",
                "comment",
                "source",
                "app_version",
            ],
        }
    }

    /// Whether the respondent identification (name and sector) is collected.
    pub fn collects_identity(&self) -> bool {
        !matches!(self, SchemaVersion::Minimal)
    }

    /// Whether the five sub-metric scores are collected.
    pub fn collects_metrics(&self) -> bool {
        matches!(self, SchemaVersion::V2)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaVersion::V1 => "v1",
            SchemaVersion::V2 => "v2",
            SchemaVersion::Minimal => "minimal",
        }
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        SchemaVersion::V1
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" => Ok(SchemaVersion::V1),
            "v2" => Ok(SchemaVersion::V2),
            "minimal" => Ok(SchemaVersion::Minimal),
            other => Err(format!("unknown schema version '{other}'")),
        }
    }
}
