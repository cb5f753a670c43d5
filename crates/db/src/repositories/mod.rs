//! Store access for the `projects` collection.

pub mod project_store;

pub use project_store::{MongoProjectStore, ProjectStore, MAX_LISTED_PROJECTS};
