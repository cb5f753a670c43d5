//! Document models and wire DTOs for the `projects` collection.

pub mod project;

pub use project::{ProjectDocument, ProjectSubmission, StoredProject};
