use thiserror::Error;

/// Failure while appending to the external table store.
///
/// Deliberately opaque: authentication problems, a missing workbook and
/// transient I/O all surface as the same condition carrying a human-readable
/// message. The caller never retries; the user resubmits the form.
#[derive(Debug, Clone, Error)]
#[error("{0}")]
pub struct AppendError(pub String);

/// The seam between the submission pipeline and whatever holds the shared
/// spreadsheet.
///
/// Contract: `append_row` appends `row` as the new last row of `worksheet`,
/// creating the worksheet with a single header row listing `columns` if it
/// does not exist yet. `row` always has exactly `columns.len()` values.
/// Appends are atomic per row; there is no partial write and no retry.
pub trait TableStore: Send + Sync {
    fn append_row(
        &self,
        worksheet: &str,
        columns: &[&str],
        row: &[String],
    ) -> Result<(), AppendError>;
}
