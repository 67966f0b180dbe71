use askama::Template;
use chrono::Utc;

use crate::error::AppError;
use crate::models::job::ProcessedJob;

#[derive(Template)]
#[template(path = "digest.html")]
struct DigestTemplate {
    date: String,
    rows: Vec<DigestRow>,
}

struct DigestRow {
    title: String,
    company: String,
    location: String,
    link: String,
    keywords: String,
    skills: String,
    source: String,
}

/// Render the HTML digest for the given jobs, in their given order.
pub fn render(jobs: &[ProcessedJob]) -> Result<String, AppError> {
    let rows = jobs
        .iter()
        .map(|job| DigestRow {
            title: job.title.clone(),
            company: job.company.clone(),
            location: format!("{} - {}", job.location_type.label(), job.location),
            link: job.link.clone(),
            keywords: job.keywords.join(", "),
            skills: job.skills.join(", "),
            source: job.source.clone(),
        })
        .collect();

    let template = DigestTemplate {
        date: Utc::now().format("%B %d, %Y").to_string(),
        rows,
    };
    Ok(template.render()?)
}

/// Subject line for the digest email.
pub fn subject(job_count: usize) -> String {
    format!(
        "DevOps Job Digest - {} - {} New Jobs",
        Utc::now().format("%Y-%m-%d"),
        job_count
    )
}
