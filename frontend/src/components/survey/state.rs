//! Component state for the survey form.

use common::model::response::{MetricScores, SurveyAnswers, MAX_SCORE};
use common::model::schema::SchemaVersion;
use common::model::sector::Sector;

/// Main state container for the `SurveyFormComponent`.
///
/// Holds the current value of every field plus the submission flag and the
/// inline error. Fields are `pub` because they are accessed by the `view`
/// and `update` modules.
pub struct SurveyFormComponent {
    /// Respondent or company name, as typed.
    pub name: String,
    /// Currently selected sector.
    pub sector: Sector,
    /// Overall recommendation score, 0..=10.
    pub nps: u8,
    /// Sub-metric scores, rendered under schema v2 only.
    pub metrics: MetricScores,
    /// Free-text comment, capped at 500 characters by the update handler.
    pub comment: String,
    /// True while a submission is in flight; blocks the submit button.
    pub submitting: bool,
    /// Inline validation or submission error shown above the button.
    pub error: Option<String>,
}

impl SurveyFormComponent {
    pub fn new() -> Self {
        SurveyFormComponent {
            name: String::new(),
            sector: Sector::default(),
            nps: MAX_SCORE,
            metrics: MetricScores::default(),
            comment: String::new(),
            submitting: false,
            error: None,
        }
    }

    /// Returns the form to its defaults after a confirmed submission.
    pub fn reset(&mut self) {
        *self = SurveyFormComponent::new();
    }

    /// Builds the answers payload for `schema`. Fields the schema does not
    /// collect are left out; an empty required name stays `None` so the
    /// shared validation reports it.
    pub fn answers(&self, schema: SchemaVersion) -> SurveyAnswers {
        SurveyAnswers {
            name: schema
                .collects_identity()
                .then(|| self.name.trim().to_string())
                .filter(|name| !name.is_empty()),
            sector: schema.collects_identity().then_some(self.sector),
            nps: self.nps,
            metrics: schema.collects_metrics().then_some(self.metrics),
            comment: self.comment.clone(),
        }
    }
}
