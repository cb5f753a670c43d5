//! MongoDB persistence for the intake backend.
//!
//! This crate owns everything that touches the document store:
//!
//! - [`create_client`] -- builds the process-wide MongoDB client.
//! - [`models`] -- the project submission entity and its wire DTOs.
//! - [`ProjectStore`] -- the store seam handlers program against, with
//!   [`MongoProjectStore`] as the production implementation.

pub mod error;
pub mod models;
pub mod repositories;

pub use error::StoreError;
pub use repositories::project_store::{MongoProjectStore, ProjectStore, MAX_LISTED_PROJECTS};

pub type DbClient = mongodb::Client;

/// Create the process-wide MongoDB client from a connection string.
///
/// The driver is lazy: this parses and validates the URI but opens no
/// connection, so an unreachable server surfaces on the first store
/// operation (as a request-level error), not at startup.
pub async fn create_client(mongo_uri: &str) -> Result<DbClient, mongodb::error::Error> {
    DbClient::with_uri_str(mongo_uri).await
}
