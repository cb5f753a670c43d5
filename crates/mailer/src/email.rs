//! SMTP delivery of the administrator notification.
//!
//! [`EmailNotifier`] wraps the `lettre` async SMTP transport. Each send
//! opens one fresh SMTP session, secured by implicit TLS (SMTPS) or left
//! plaintext depending on configuration, and is awaited inline: the caller
//! does not get its result until the mail transaction has completed or
//! failed. There is no retry and no queueing.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use intake_db::models::project::ProjectSubmission;

use crate::render;

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for notification failures.
#[derive(Debug, thiserror::Error)]
pub enum EmailError {
    /// SMTP transport-level failure (authentication, connection, etc.).
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    /// The sender or administrator address could not be parsed.
    #[error("Email address parse error: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The MIME message could not be assembled.
    #[error("Email build error: {0}")]
    Build(String),
}

// ---------------------------------------------------------------------------
// EmailConfig
// ---------------------------------------------------------------------------

/// Default SMTP host.
const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";

/// Default SMTP port (SMTPS / implicit TLS).
const DEFAULT_SMTP_PORT: u16 = 465;

/// Configuration for the administrator notification mailer.
#[derive(Debug, Clone)]
pub struct EmailConfig {
    /// Address every notification is delivered to.
    pub admin_email: String,
    /// RFC 5322 "From" address, also the SMTP authentication user.
    pub sender_email: String,
    /// SMTP authentication secret for the sender.
    pub sender_pass: String,
    /// SMTP server hostname.
    pub smtp_host: String,
    /// SMTP server port (defaults to 465).
    pub smtp_port: u16,
    /// Use implicit TLS (SMTPS) when true, a plaintext session when false.
    pub smtp_ssl: bool,
}

impl EmailConfig {
    /// Load configuration from environment variables.
    ///
    /// Aborts the process when a required variable is missing or a value
    /// does not parse; the service cannot notify anyone without them.
    ///
    /// | Variable       | Required | Default          |
    /// |----------------|----------|------------------|
    /// | `ADMIN_EMAIL`  | yes      | -                |
    /// | `SENDER_EMAIL` | yes      | -                |
    /// | `SENDER_PASS`  | yes      | -                |
    /// | `SMTP_HOST`    | no       | `smtp.gmail.com` |
    /// | `SMTP_PORT`    | no       | `465`            |
    /// | `SMTP_SSL`     | no       | `true`           |
    pub fn from_env() -> Self {
        let admin_email = std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set");
        let sender_email = std::env::var("SENDER_EMAIL").expect("SENDER_EMAIL must be set");
        let sender_pass = std::env::var("SENDER_PASS").expect("SENDER_PASS must be set");

        let smtp_host =
            std::env::var("SMTP_HOST").unwrap_or_else(|_| DEFAULT_SMTP_HOST.to_string());

        let smtp_port: u16 = std::env::var("SMTP_PORT")
            .unwrap_or_else(|_| DEFAULT_SMTP_PORT.to_string())
            .parse()
            .expect("SMTP_PORT must be a valid u16");

        let smtp_ssl = parse_smtp_ssl(std::env::var("SMTP_SSL").ok());

        Self {
            admin_email,
            sender_email,
            sender_pass,
            smtp_host,
            smtp_port,
            smtp_ssl,
        }
    }
}

/// `SMTP_SSL` semantics: unset defaults to true; a set value is true only
/// when it equals `"true"` case-insensitively.
fn parse_smtp_ssl(raw: Option<String>) -> bool {
    raw.map_or(true, |value| value.eq_ignore_ascii_case("true"))
}

// ---------------------------------------------------------------------------
// AdminNotifier
// ---------------------------------------------------------------------------

/// The notification seam: one outbound admin notification per accepted
/// submission. [`EmailNotifier`] is the production implementation; tests
/// substitute recording or failing fakes.
#[async_trait::async_trait]
pub trait AdminNotifier: Send + Sync + 'static {
    /// Render the submission and deliver it to the administrator.
    async fn notify_admin(&self, project: &ProjectSubmission) -> Result<(), EmailError>;
}

// ---------------------------------------------------------------------------
// EmailNotifier
// ---------------------------------------------------------------------------

/// Sends the administrator notification email via SMTP.
pub struct EmailNotifier {
    config: EmailConfig,
}

impl EmailNotifier {
    /// Create a notifier with the given configuration.
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Assemble the notification message for one submission.
    fn build_message(&self, project: &ProjectSubmission) -> Result<Message, EmailError> {
        Message::builder()
            .from(self.config.sender_email.parse()?)
            .to(self.config.admin_email.parse()?)
            .subject(render::subject(project))
            .header(ContentType::TEXT_PLAIN)
            .body(render::body(project))
            .map_err(|e| EmailError::Build(e.to_string()))
    }

    /// Build the SMTP transport for one send: implicit TLS (SMTPS) when
    /// `smtp_ssl` is set, a plaintext session otherwise. Credentials are
    /// applied in both modes.
    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let builder = if self.config.smtp_ssl {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&self.config.smtp_host)
        };

        let credentials = Credentials::new(
            self.config.sender_email.clone(),
            self.config.sender_pass.clone(),
        );

        Ok(builder
            .port(self.config.smtp_port)
            .credentials(credentials)
            .build())
    }
}

#[async_trait::async_trait]
impl AdminNotifier for EmailNotifier {
    async fn notify_admin(&self, project: &ProjectSubmission) -> Result<(), EmailError> {
        let email = self.build_message(project)?;

        // One fresh session per notification; the transport default is the
        // only timeout in play.
        let mailer = self.transport()?;
        mailer.send(email).await?;

        tracing::info!(project = %project.project_name, "Admin notification email sent");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
