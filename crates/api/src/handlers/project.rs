//! Handlers for the project intake flow.

use axum::extract::State;
use axum::Json;

use intake_db::models::project::{ProjectDocument, ProjectSubmission};
use intake_db::MAX_LISTED_PROJECTS;

use crate::error::ApiResult;
use crate::response::MessageResponse;
use crate::state::AppState;

/// POST /project
///
/// Persists the submission, then emails the administrator. The two effects
/// are strictly ordered; a notification failure leaves the stored document
/// in place and still surfaces as a 500.
pub async fn create(
    State(state): State<AppState>,
    Json(submission): Json<ProjectSubmission>,
) -> ApiResult<Json<MessageResponse>> {
    state.store.create_project(&submission).await?;
    state.notifier.notify_admin(&submission).await?;

    Ok(Json(MessageResponse {
        message: "Project stored and emailed to admin.",
    }))
}

/// GET /projects
///
/// Returns up to the first 500 stored submissions in store-native order,
/// each `_id` rendered as a hex string.
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<ProjectDocument>>> {
    let projects = state.store.list_projects(MAX_LISTED_PROJECTS).await?;
    let documents = projects.into_iter().map(ProjectDocument::from).collect();
    Ok(Json(documents))
}
