/// Error type for project store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Driver-level failure: connection, server selection, write, or read.
    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    /// The store answered, but with something the caller cannot use
    /// (e.g. an inserted id that is not an ObjectId).
    #[error("Store error: {0}")]
    Internal(String),
}
