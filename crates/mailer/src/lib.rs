//! Administrator email notification for project submissions.
//!
//! Every accepted submission produces exactly one plain-text email to the
//! configured administrator address, sent over SMTP. This crate provides:
//!
//! - [`EmailConfig`] -- SMTP and addressing configuration from environment
//!   variables.
//! - [`AdminNotifier`] -- the notification seam the API programs against.
//! - [`EmailNotifier`] -- the `lettre`-backed SMTP implementation.
//! - [`render`] -- pure subject and body formatting.

pub mod email;
pub mod render;

pub use email::{AdminNotifier, EmailConfig, EmailError, EmailNotifier};
