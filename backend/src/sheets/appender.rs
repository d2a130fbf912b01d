//! The single-shot submission pipeline: validate, stamp, serialize, append.
//!
//! One synchronous request/response per submission, no state kept between
//! calls and no retry on failure. Validation failures are returned before
//! the store is touched.

use crate::sheets::row::ResponseRecord;
use crate::sheets::store::{AppendError, TableStore};
use common::model::response::{SurveyAnswers, ValidationError};
use common::model::schema::SchemaVersion;
use log::info;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Append(#[from] AppendError),
}

/// Runs the full pipeline for one submission and returns the stored record.
pub fn append_response(
    store: &dyn TableStore,
    worksheet: &str,
    schema: SchemaVersion,
    answers: SurveyAnswers,
) -> Result<ResponseRecord, SubmitError> {
    answers.validate(schema)?;

    let record = ResponseRecord::new(schema, answers);
    store.append_row(worksheet, schema.columns(), &record.to_row())?;

    info!(
        "resposta registrada em '{}' (schema {}, nps {})",
        worksheet, schema, record.answers.nps
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sheets::store::testing::RecordingStore;
    use common::model::sector::Sector;

    fn valid_answers() -> SurveyAnswers {
        SurveyAnswers {
            name: Some("Empresa ABC".to_string()),
            sector: Some(Sector::Contabil),
            nps: 10,
            metrics: None,
            comment: "Fale sobre sua experiência...".to_string(),
        }
    }

    #[test]
    fn appends_one_row_per_submission() {
        let store = RecordingStore::default();
        let record =
            append_response(&store, "respostas", SchemaVersion::V1, valid_answers())
                .unwrap();

        assert_eq!(store.append_count(), 1);
        let appends = store.appends.lock().unwrap();
        assert_eq!(appends[0].worksheet, "respostas");
        assert_eq!(appends[0].columns, SchemaVersion::V1.columns());
        assert_eq!(appends[0].row, record.to_row());
    }

    #[test]
    fn missing_name_never_reaches_the_store() {
        let store = RecordingStore::default();
        let mut answers = valid_answers();
        answers.name = None;

        let err = append_response(&store, "respostas", SchemaVersion::V1, answers)
            .unwrap_err();

        assert!(matches!(err, SubmitError::Validation(_)));
        assert_eq!(store.append_count(), 0);
    }

    #[test]
    fn resubmitting_identical_answers_appends_a_duplicate_row() {
        let store = RecordingStore::default();
        append_response(&store, "respostas", SchemaVersion::V1, valid_answers()).unwrap();
        append_response(&store, "respostas", SchemaVersion::V1, valid_answers()).unwrap();

        // No dedup key exists; the store simply gains a second row.
        let appends = store.appends.lock().unwrap();
        assert_eq!(appends.len(), 2);
        assert_eq!(appends[0].row[1..], appends[1].row[1..]);
    }

    #[test]
    fn store_failures_surface_as_append_errors() {
        let store = RecordingStore::failing("quota exceeded for sheet");
        let err = append_response(&store, "respostas", SchemaVersion::V1, valid_answers())
            .unwrap_err();

        match err {
            SubmitError::Append(e) => assert_eq!(e.to_string(), "quota exceeded for sheet"),
            other => panic!("expected append error, got {other:?}"),
        }
    }
}
