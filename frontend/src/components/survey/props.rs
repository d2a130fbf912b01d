use common::model::schema::SchemaVersion;
use yew::prelude::*;

/// Properties for the `SurveyFormComponent`.
#[derive(Properties, PartialEq, Clone)]
pub struct SurveyFormProps {
    /// Active row schema. Decides which fields the form renders: name and
    /// sector under v1/v2, the sub-metric sliders under v2, score and
    /// comment only under minimal.
    #[prop_or_default]
    pub schema: SchemaVersion,
}
