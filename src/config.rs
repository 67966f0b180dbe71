use std::path::PathBuf;

use clap::Parser;

/// Roles queried on every board.
pub const JOB_ROLES: &[&str] = &[
    "DevOps Engineer",
    "Junior DevOps Engineer",
    "Site Reliability Engineer",
    "SRE",
    "DevOps Specialist",
    "Cloud DevOps Engineer",
];

/// Target locations passed to boards that support location filters.
pub const JOB_LOCATIONS: &[&str] = &[
    "Bengaluru",
    "Bangalore",
    "Hyderabad",
    "Pune",
    "NCR",
    "Gurgaon",
    "Noida",
    "Delhi",
    "Indore",
    "Ahmedabad",
    "Jaipur",
    "Mumbai",
    "Chennai",
    "Remote",
    "India",
];

#[derive(Parser, Debug, Clone)]
#[command(name = "jobdigest", about = "Entry-level DevOps job digest for India")]
pub struct Config {
    /// Write the report to a file instead of sending email
    #[arg(long, env = "DRY_RUN", default_value = "true")]
    pub dry_run: bool,

    /// Recipient address for live mode
    #[arg(long, env = "RECIPIENT_EMAIL")]
    pub recipient_email: Option<String>,

    /// SMTP relay host
    #[arg(long, env = "EMAIL_HOST", default_value = "smtp.gmail.com")]
    pub email_host: String,

    /// SMTP relay port (STARTTLS)
    #[arg(long, env = "EMAIL_PORT", default_value = "587")]
    pub email_port: u16,

    /// SMTP username, also used as the From address
    #[arg(long, env = "EMAIL_USER")]
    pub email_user: Option<String>,

    /// SMTP password or app password
    #[arg(long, env = "EMAIL_PASS")]
    pub email_pass: Option<String>,

    /// Path of the persistent seen-jobs file
    #[arg(long, env = "STATE_FILE", default_value = "seen_jobs.json")]
    pub state_file: PathBuf,

    /// Path the dry-run report is written to
    #[arg(long, env = "REPORT_FILE", default_value = "last_run.html")]
    pub report_file: PathBuf,
}
