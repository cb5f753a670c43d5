//! Shared response types for API handlers.

use serde::Serialize;

/// Plain `{ "message": ... }` acknowledgement payload.
///
/// Used by write endpoints that confirm an action rather than return a
/// resource body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
