//! Startup configuration for the table store.
//!
//! The workbook location, worksheet name and active row schema come from the
//! environment so deployments can point the app at a different sheet without
//! a rebuild. Everything has a working default for local runs.

use common::model::schema::SchemaVersion;
use log::warn;
use std::env;
use std::path::PathBuf;

const WORKBOOK_DIR_VAR: &str = "NPS_WORKBOOK_DIR";
const WORKSHEET_VAR: &str = "NPS_WORKSHEET";
const SCHEMA_VAR: &str = "NPS_SCHEMA";

pub struct StoreConfig {
    /// Directory holding one CSV file per worksheet.
    pub workbook_dir: PathBuf,
    /// Worksheet the responses are appended to.
    pub worksheet: String,
    /// Row layout used for every append.
    pub schema: SchemaVersion,
}

impl StoreConfig {
    pub fn from_env() -> Self {
        let workbook_dir = env::var(WORKBOOK_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("workbook"));

        let worksheet =
            env::var(WORKSHEET_VAR).unwrap_or_else(|_| "respostas".to_string());

        let schema = match env::var(SCHEMA_VAR) {
            Ok(raw) => raw.parse().unwrap_or_else(|err: String| {
                warn!("{}: {}, usando schema v1", SCHEMA_VAR, err);
                SchemaVersion::V1
            }),
            Err(_) => SchemaVersion::V1,
        };

        StoreConfig {
            workbook_dir,
            worksheet,
            schema,
        }
    }
}
