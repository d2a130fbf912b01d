//! # Survey Response Service Module
//!
//! Aggregates the API endpoints of the survey form. It acts as a router,
//! directing incoming HTTP requests under the `/api/responses` path to the
//! handler logic defined in its sub-modules.
//!
//! ## Sub-modules:
//! - `submit`: validates a submission and appends it to the response worksheet.
//! - `get_schema`: reports the active row schema so the form renders the
//!   matching field set.

mod get_schema;
mod submit;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

/// The base path for all response-related API endpoints.
const API_PATH: &str = "/api/responses";

/// Configures and returns the Actix `Scope` for the response routes.
///
/// # Registered Routes:
///
/// *   **`POST /submit`**:
///     - **Handler**: `submit::process`
///     - **Description**: Receives a `SubmitResponseRequest` JSON payload,
///       re-runs the shared validation rules, stamps the record with the
///       server time and appends it as one row to the configured worksheet.
///       Returns a Portuguese confirmation message on success, the validation
///       message with status 400 when a required field is missing or a score
///       is out of range, and the underlying store error with status 503 when
///       the append fails.
///
/// *   **`GET /schema`**:
///     - **Handler**: `get_schema::process`
///     - **Description**: Returns the active `SchemaVersion` and its ordered
///       column list as JSON.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/submit", post().to(submit::process))
        .route("/schema", get().to(get_schema::process))
}
