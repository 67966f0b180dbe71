use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::Config;
use crate::error::AppError;

/// Send the rendered digest over SMTP (STARTTLS with credentials).
pub async fn send_digest(
    config: &Config,
    recipient: &str,
    subject: &str,
    html_body: String,
) -> Result<(), AppError> {
    let user = config
        .email_user
        .as_deref()
        .ok_or_else(|| AppError::Config("EMAIL_USER not configured".to_string()))?;
    let pass = config
        .email_pass
        .as_deref()
        .ok_or_else(|| AppError::Config("EMAIL_PASS not configured".to_string()))?;

    let message = Message::builder()
        .from(user
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid sender address '{user}': {e}")))?)
        .to(recipient
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid recipient '{recipient}': {e}")))?)
        .subject(subject)
        .header(ContentType::TEXT_HTML)
        .body(html_body)
        .map_err(|e| AppError::Mail(format!("Failed to build message: {e}")))?;

    let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.email_host)
        .map_err(|e| AppError::Mail(format!("Invalid SMTP relay '{}': {e}", config.email_host)))?
        .port(config.email_port)
        .credentials(Credentials::new(user.to_string(), pass.to_string()))
        .build();

    mailer
        .send(message)
        .await
        .map_err(|e| AppError::Mail(format!("SMTP delivery failed: {e}")))?;

    tracing::info!("Email sent successfully to {recipient}");
    Ok(())
}
