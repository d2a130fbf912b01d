//! The immutable response record and its serialization to a worksheet row.
//!
//! Serialization is driven by the schema's column list: every column name is
//! mapped to its value in order, so the produced row has the right length and
//! order by construction, for any schema version.

use chrono::Local;
use common::model::response::{truncate_comment, SurveyAnswers};
use common::model::schema::{SchemaVersion, APP_VERSION, SOURCE_TAG};

/// Timestamp layout used in the first column of every row.
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Server time, formatted for the sheet.
pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// One validated submission, stamped at creation and never mutated.
#[derive(Debug)]
pub struct ResponseRecord {
    pub timestamp: String,
    pub schema: SchemaVersion,
    pub answers: SurveyAnswers,
}

impl ResponseRecord {
    /// Stamps `answers` with the current server time. The answers must
    /// already have passed [`SurveyAnswers::validate`] for `schema`.
    pub fn new(schema: SchemaVersion, answers: SurveyAnswers) -> Self {
        ResponseRecord {
            timestamp: current_timestamp(),
            schema,
            answers,
        }
    }

    /// Serializes the record into the exact column order of its schema.
    pub fn to_row(&self) -> Vec<String> {
        self.schema
            .columns()
            .iter()
            .map(|column| self.column_value(column))
            .collect()
    }

    fn column_value(&self, column: &str) -> String {
        let answers = &self.answers;
        match column {
            "timestamp" => self.timestamp.clone(),
            "name" => answers.name.clone().unwrap_or_default(),
            "sector" => answers
                .sector
                .map(|s| s.label().to_string())
                .unwrap_or_default(),
            "nps_score" => answers.nps.to_string(),
            "comment" => truncate_comment(&answers.comment).to_string(),
            "source" => SOURCE_TAG.to_string(),
            "app_version" => APP_VERSION.to_string(),
            metric => answers
                .metrics
                .as_ref()
                .and_then(|m| {
                    m.entries()
                        .iter()
                        .find(|(name, _)| *name == metric)
                        .map(|(_, value)| value.to_string())
                })
                .unwrap_or_default(),
        }
    }
}
