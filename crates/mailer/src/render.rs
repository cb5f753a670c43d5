//! Plain-text rendering of the administrator notification.
//!
//! The format is fixed: a one-line subject naming the project, and a body
//! with one labeled line per submission field, in submission order. Kept as
//! pure functions so the exact layout is unit-testable.

use intake_db::models::project::ProjectSubmission;

/// Subject line for the admin notification.
pub fn subject(project: &ProjectSubmission) -> String {
    format!("New Project Submitted: {}", project.project_name)
}

/// Notification body: one `Label: value` line per field, each newline
/// terminated, in the fixed field order of the submission.
pub fn body(project: &ProjectSubmission) -> String {
    format!(
        "Client: {}\n\
         Project: {}\n\
         Budget: {}\n\
         Deadline: {}\n\
         Email: {}\n\
         Phone: {}\n\
         Address: {}\n\
         Description: {}\n\
         Requirements: {}\n\
         Status: {}\n",
        project.client_name,
        project.project_name,
        project.budget,
        project.deadline,
        project.email,
        project.phone,
        project.address,
        project.description,
        project.requirements,
        project.status,
    )
}
