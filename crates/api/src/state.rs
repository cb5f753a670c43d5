use std::sync::Arc;

use intake_db::ProjectStore;
use intake_mailer::AdminNotifier;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (both seams are behind `Arc`). Handlers see the
/// store and notifier only through their traits, so integration tests can
/// swap in in-memory fakes.
#[derive(Clone)]
pub struct AppState {
    /// Project persistence seam (MongoDB in production).
    pub store: Arc<dyn ProjectStore>,
    /// Admin notification seam (SMTP in production).
    pub notifier: Arc<dyn AdminNotifier>,
}
