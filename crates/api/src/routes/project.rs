//! Route definitions for the project intake resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at the root.
///
/// ```text
/// POST /project   -> create (store + email admin)
/// GET  /projects  -> list (capped at 500 documents)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project", post(project::create))
        .route("/projects", get(project::list))
}
