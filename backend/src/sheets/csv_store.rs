//! CSV-backed table store: the workbook is a directory, each worksheet a
//! `.csv` file inside it. The first append to a missing worksheet writes the
//! header row, so no worksheet has to be provisioned by hand.

use crate::sheets::store::{AppendError, TableStore};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

pub struct CsvWorkbookStore {
    root: PathBuf,
    /// Serializes appends so two submissions never interleave partial lines
    /// in the same file. Ordering between submissions stays unspecified.
    write_lock: Mutex<()>,
}

impl CsvWorkbookStore {
    pub fn new(root: PathBuf) -> Self {
        CsvWorkbookStore {
            root,
            write_lock: Mutex::new(()),
        }
    }

    fn worksheet_path(&self, worksheet: &str) -> PathBuf {
        self.root.join(format!("{}.csv", worksheet))
    }
}

impl TableStore for CsvWorkbookStore {
    fn append_row(
        &self,
        worksheet: &str,
        columns: &[&str],
        row: &[String],
    ) -> Result<(), AppendError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        std::fs::create_dir_all(&self.root).map_err(|e| {
            AppendError(format!(
                "não foi possível criar o diretório da planilha '{}': {}",
                self.root.display(),
                e
            ))
        })?;

        let path = self.worksheet_path(worksheet);
        let is_new = !path.exists();

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                AppendError(format!(
                    "não foi possível abrir a aba '{}': {}",
                    worksheet, e
                ))
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        if is_new {
            writer
                .write_record(columns)
                .map_err(|e| AppendError(format!("falha ao gravar o cabeçalho: {}", e)))?;
        }
        writer
            .write_record(row)
            .map_err(|e| AppendError(format!("falha ao gravar a resposta: {}", e)))?;
        writer
            .flush()
            .map_err(|e| AppendError(format!("falha ao gravar a resposta: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(path)
            .unwrap();
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn first_append_creates_worksheet_with_header() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvWorkbookStore::new(dir.path().to_path_buf());

        let columns = ["timestamp", "nps_score", "comment", "source", "app_version"];
        let row = vec![
            "06/08/2026 14:03:27".to_string(),
            "7".to_string(),
            String::new(),
            "streamlit_app".to_string(),
            "v1".to_string(),
        ];
        store.append_row("respostas", &columns, &row).unwrap();

        let rows = read_rows(&dir.path().join("respostas.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], columns);
        assert_eq!(rows[1], row);
    }

    #[test]
    fn subsequent_appends_add_exactly_one_row() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvWorkbookStore::new(dir.path().to_path_buf());

        let columns = ["timestamp", "nps_score", "comment", "source", "app_version"];
        let row = vec![
            "06/08/2026 14:03:27".to_string(),
            "9".to_string(),
            "Ótimo atendimento".to_string(),
            "streamlit_app".to_string(),
            "v1".to_string(),
        ];
        store.append_row("respostas", &columns, &row).unwrap();
        store.append_row("respostas", &columns, &row).unwrap();

        let rows = read_rows(&dir.path().join("respostas.csv"));
        // Duplicate submissions are kept as duplicate rows.
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], rows[2]);
    }

    #[test]
    fn worksheets_are_independent_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvWorkbookStore::new(dir.path().to_path_buf());

        let columns = ["timestamp", "nps_score", "comment", "source", "app_version"];
        let row = vec!["ts".into(), "10".into(), "".into(), "s".into(), "v".into()];
        store.append_row("respostas", &columns, &row).unwrap();
        store.append_row("piloto", &columns, &row).unwrap();

        assert!(dir.path().join("respostas.csv").exists());
        assert!(dir.path().join("piloto.csv").exists());
    }

    #[test]
    fn commas_and_quotes_in_comments_stay_in_one_cell() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvWorkbookStore::new(dir.path().to_path_buf());

        let columns = ["timestamp", "nps_score", "comment", "source", "app_version"];
        let comment = "Bom, mas o \"prazo\" atrasou".to_string();
        let row = vec![
            "ts".into(),
            "6".into(),
            comment.clone(),
            "s".into(),
            "v".into(),
        ];
        store.append_row("respostas", &columns, &row).unwrap();

        let rows = read_rows(&dir.path().join("respostas.csv"));
        assert_eq!(rows[1][2], comment);
        assert_eq!(rows[1].len(), columns.len());
    }
}
