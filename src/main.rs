use clap::Parser;
use tracing_subscriber::EnvFilter;

use jobdigest::collectors;
use jobdigest::config::{Config, JOB_LOCATIONS, JOB_ROLES};
use jobdigest::error::AppError;
use jobdigest::notify;
use jobdigest::pipeline::Pipeline;
use jobdigest::report;
use jobdigest::state::SeenJobStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jobdigest=info")),
        )
        .init();

    let config = Config::parse();

    if let Err(e) = run(&config).await {
        tracing::error!("Fatal error: {e}");
        return Err(e.into());
    }
    Ok(())
}

async fn run(config: &Config) -> Result<(), AppError> {
    tracing::info!("Starting DevOps job digest run...");

    let raw_jobs = collectors::collect_all(JOB_ROLES, JOB_LOCATIONS).await;

    let pipeline = Pipeline::new(SeenJobStore::new(&config.state_file));
    let new_jobs = pipeline.process(raw_jobs);

    let html_report = report::render(&new_jobs)?;

    if config.dry_run {
        std::fs::write(&config.report_file, &html_report)?;
        tracing::info!(
            "Dry run completed. Report saved to '{}'",
            config.report_file.display()
        );
        return Ok(());
    }

    let Some(recipient) = config.recipient_email.as_deref() else {
        // Keep the artifact: the scrape already happened and the seen-set
        // has moved on, so the report must not be lost with it.
        std::fs::write(&config.report_file, &html_report)?;
        tracing::warn!("Report saved to '{}' instead", config.report_file.display());
        return Err(AppError::Config("RECIPIENT_EMAIL not configured".to_string()));
    };

    let subject = report::subject(new_jobs.len());
    notify::send_digest(config, recipient, &subject, html_report).await?;
    Ok(())
}
