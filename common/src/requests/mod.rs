use crate::model::response::SurveyAnswers;
use crate::model::schema::SchemaVersion;
use serde::{Deserialize, Serialize};

/// Request payload for the response submission endpoint.
///
/// Carries the answers only; the row layout is decided by backend
/// configuration, never by the client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitResponseRequest {
    pub answers: SurveyAnswers,
}

/// Payload of `GET /api/responses/schema`: tells the form which schema
/// version is active so it renders the matching field set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaInfoResponse {
    pub schema: SchemaVersion,
    pub columns: Vec<String>,
}
