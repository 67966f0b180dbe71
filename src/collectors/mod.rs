// Collector module: one implementation per job board, all behind the
// same trait so sources can be stubbed independently in tests.

mod indeed;
mod linkedin;
mod naukri;

use std::time::Duration;

use async_trait::async_trait;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::Rng;

use crate::error::AppError;
use crate::models::job::RawJob;

pub use self::indeed::Indeed;
pub use self::linkedin::LinkedIn;
pub use self::naukri::Naukri;

/// Trait all job collectors implement. A collector returns whatever it
/// managed to scrape, possibly nothing; the runner isolates failures so
/// one broken board never empties the digest.
#[async_trait]
pub trait JobCollector: Send + Sync {
    /// Source name recorded on every RawJob this collector yields.
    fn name(&self) -> &str;

    /// Fetch postings for the given roles and locations.
    async fn collect(&self, roles: &[&str], locations: &[&str]) -> Result<Vec<RawJob>, AppError>;
}

/// Every registered board, in scrape order.
pub fn all_collectors() -> Vec<Box<dyn JobCollector>> {
    vec![Box::new(Naukri), Box::new(LinkedIn), Box::new(Indeed)]
}

/// Scrape every board sequentially. A failing board is logged and
/// contributes zero records; this function never errors.
pub async fn collect_all(roles: &[&str], locations: &[&str]) -> Vec<RawJob> {
    let mut all_jobs = Vec::new();

    for collector in all_collectors() {
        tracing::info!("Scraping {}...", collector.name());
        match collector.collect(roles, locations).await {
            Ok(jobs) => {
                tracing::info!("Found {} jobs from {}", jobs.len(), collector.name());
                all_jobs.extend(jobs);
            }
            Err(e) => {
                tracing::error!("Error scraping {}: {e}", collector.name());
            }
        }
    }

    tracing::info!("Total jobs collected: {}", all_jobs.len());
    all_jobs
}

/// Compile a CSS selector, surfacing bad selector strings as parse
/// errors instead of panicking mid-scrape.
pub(crate) fn selector(s: &str) -> Result<scraper::Selector, AppError> {
    scraper::Selector::parse(s).map_err(|e| AppError::Parse(format!("selector '{s}': {e:?}")))
}

/// Characters kept verbatim in query-string values, like
/// encodeURIComponent. RFC 3986 unreserved: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const ENCODE_URI_COMPONENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// URL-encode a string for use in query parameters.
pub(crate) fn urlencoded(s: &str) -> String {
    utf8_percent_encode(s, ENCODE_URI_COMPONENT_SET).to_string()
}

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";
const FETCH_ATTEMPTS: u32 = 3;

pub(crate) fn build_client() -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(15))
        .build()
        .map_err(AppError::Http)
}

/// GET a page with browser-like headers, retrying transient failures
/// with capped exponential backoff.
pub(crate) async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, AppError> {
    let mut backoff = Duration::from_secs(4);
    let mut attempt = 0;

    loop {
        attempt += 1;
        let result = client
            .get(url)
            .header("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8")
            .header("Accept-Language", "en-US,en;q=0.5")
            .send()
            .await
            .and_then(|resp| resp.error_for_status());

        match result {
            Ok(resp) => return Ok(resp.text().await?),
            Err(e) => {
                tracing::debug!("Fetch attempt {attempt}/{FETCH_ATTEMPTS} for {url} failed: {e}");
                if attempt >= FETCH_ATTEMPTS {
                    return Err(AppError::Http(e));
                }
                tokio::time::sleep(backoff).await;
                backoff = (backoff * 2).min(Duration::from_secs(10));
            }
        }
    }
}

/// Sleep a random 1-3 s between requests to stay under rate limits.
pub(crate) async fn polite_delay() {
    delay_between(1.0, 3.0).await;
}

pub(crate) async fn delay_between(min_secs: f64, max_secs: f64) {
    let secs = rand::rng().random_range(min_secs..max_secs);
    tokio::time::sleep(Duration::from_secs_f64(secs)).await;
}
