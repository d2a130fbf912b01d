//! Shared application state injected into the Actix handlers.

use crate::sheets::store::TableStore;
use common::model::schema::SchemaVersion;
use std::sync::Arc;

/// Created once in `main.rs` and shared across workers as `web::Data`.
///
/// The store is behind a trait object so the handlers never know which
/// concrete table store they are appending to; tests swap in a recording
/// double through the same field.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the external table store.
    pub store: Arc<dyn TableStore>,
    /// Worksheet every response row is appended to.
    pub worksheet: String,
    /// Row schema used for every append.
    pub schema: SchemaVersion,
}
