#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse {0}")]
    Parse(String),

    #[error("State file error: {0}")]
    State(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Render(#[from] askama::Error),

    #[error("Email error: {0}")]
    Mail(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
