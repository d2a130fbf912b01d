//! The survey answers and the validation rules applied to them.
//!
//! The same `validate` runs on both sides of the wire: the form calls it
//! before any request is made, the backend calls it again on every payload
//! because the endpoint can be driven by arbitrary HTTP clients. A rejected
//! submission never reaches the table store.

use crate::model::schema::SchemaVersion;
use crate::model::sector::Sector;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Maximum number of characters kept from the free-text comment. Anything
/// beyond it is silently dropped, never an error.
pub const MAX_COMMENT_LEN: usize = 500;

/// Scores are recommendation ratings on the 0..=10 scale.
pub const MAX_SCORE: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("o campo obrigatório '{field}' não foi preenchido")]
    MissingRequiredField { field: &'static str },
    #[error("a nota de '{metric}' deve estar entre 0 e 10 (recebido: {value})")]
    ScoreOutOfRange { metric: &'static str, value: u8 },
}

/// One of the five sub-metrics collected under schema v2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Clarity,
    Deadlines,
    Communication,
    Service,
    Cost,
}

impl Metric {
    /// All sub-metrics, in worksheet column order.
    pub const ALL: [Metric; 5] = [
        Metric::Clarity,
        Metric::Deadlines,
        Metric::Communication,
        Metric::Service,
        Metric::Cost,
    ];

    /// The worksheet column this metric is written to.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::Clarity => "clarity",
            Metric::Deadlines => "deadlines",
            Metric::Communication => "communication",
            Metric::Service => "service",
            Metric::Cost => "cost",
        }
    }

    /// The question label shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Clarity => "Clareza das informações",
            Metric::Deadlines => "Cumprimento de prazos",
            Metric::Communication => "Comunicação",
            Metric::Service => "Qualidade do atendimento",
            Metric::Cost => "Custo-benefício",
        }
    }
}

/// Sub-metric scores collected under schema v2. Each score is 0..=10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricScores {
    pub clarity: u8,
    pub deadlines: u8,
    pub communication: u8,
    pub service: u8,
    pub cost: u8,
}

impl MetricScores {
    pub fn get(&self, metric: Metric) -> u8 {
        match metric {
            Metric::Clarity => self.clarity,
            Metric::Deadlines => self.deadlines,
            Metric::Communication => self.communication,
            Metric::Service => self.service,
            Metric::Cost => self.cost,
        }
    }

    pub fn set(&mut self, metric: Metric, value: u8) {
        match metric {
            Metric::Clarity => self.clarity = value,
            Metric::Deadlines => self.deadlines = value,
            Metric::Communication => self.communication = value,
            Metric::Service => self.service = value,
            Metric::Cost => self.cost = value,
        }
    }

    /// `(column, score)` pairs in worksheet column order.
    pub fn entries(&self) -> [(&'static str, u8); 5] {
        [
            ("clarity", self.clarity),
            ("deadlines", self.deadlines),
            ("communication", self.communication),
            ("service", self.service),
            ("cost", self.cost),
        ]
    }
}

impl Default for MetricScores {
    /// Every slider starts at the top of the scale, like the NPS slider.
    fn default() -> Self {
        MetricScores {
            clarity: MAX_SCORE,
            deadlines: MAX_SCORE,
            communication: MAX_SCORE,
            service: MAX_SCORE,
            cost: MAX_SCORE,
        }
    }
}

/// What the form produces on submission. Optional fields are present or not
/// depending on the active [`SchemaVersion`]; fields a schema does not know
/// are ignored by the row mapping rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyAnswers {
    /// Respondent or company name. Required by v1 and v2.
    #[serde(default)]
    pub name: Option<String>,
    /// Sector that attended the respondent. Collected by v1 and v2.
    #[serde(default)]
    pub sector: Option<Sector>,
    /// Overall 0..=10 recommendation score.
    pub nps: u8,
    /// Sub-metric scores. Required by v2 only.
    #[serde(default)]
    pub metrics: Option<MetricScores>,
    /// Free text, capped at [`MAX_COMMENT_LEN`] characters.
    #[serde(default)]
    pub comment: String,
}

impl SurveyAnswers {
    /// Checks the answers against the rules of `schema`.
    ///
    /// A failure means no external call may be made for this submission;
    /// the user corrects the form and resubmits.
    pub fn validate(&self, schema: SchemaVersion) -> Result<(), ValidationError> {
        if schema.collects_identity()
            && self.name.as_deref().is_none_or(|n| n.trim().is_empty())
        {
            return Err(ValidationError::MissingRequiredField { field: "name" });
        }

        check_score("nps_score", self.nps)?;

        if schema.collects_metrics() {
            let metrics = self
                .metrics
                .as_ref()
                .ok_or(ValidationError::MissingRequiredField { field: "metrics" })?;
            for (metric, value) in metrics.entries() {
                check_score(metric, value)?;
            }
        }

        Ok(())
    }
}

fn check_score(metric: &'static str, value: u8) -> Result<(), ValidationError> {
    if value > MAX_SCORE {
        return Err(ValidationError::ScoreOutOfRange { metric, value });
    }
    Ok(())
}

/// Returns the first [`MAX_COMMENT_LEN`] characters of `comment`.
///
/// Operates on character boundaries, so multi-byte text is never split.
pub fn truncate_comment(comment: &str) -> &str {
    match comment.char_indices().nth(MAX_COMMENT_LEN) {
        Some((idx, _)) => &comment[..idx],
        None => comment,
    }
}
