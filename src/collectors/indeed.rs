use async_trait::async_trait;
use scraper::Html;
use url::Url;

use crate::collectors::{
    JobCollector, build_client, fetch_html, polite_delay, selector, urlencoded,
};
use crate::error::AppError;
use crate::models::job::RawJob;

const BASE_URL: &str = "https://in.indeed.com";
const MAX_ROLES: usize = 2;
const MAX_CARDS: usize = 15;
const SEARCH_LOCATIONS: &[&str] = &["Bangalore", "Hyderabad", "Pune", "India"];

pub struct Indeed;

#[async_trait]
impl JobCollector for Indeed {
    fn name(&self) -> &str {
        "Indeed"
    }

    async fn collect(&self, roles: &[&str], _locations: &[&str]) -> Result<Vec<RawJob>, AppError> {
        let client = build_client()?;
        let mut jobs = Vec::new();

        for role in roles.iter().take(MAX_ROLES) {
            for location in SEARCH_LOCATIONS {
                // fromage=1 keeps it to postings from the last day.
                let search_url = format!(
                    "{BASE_URL}/jobs?q={}&l={}&fromage=1",
                    urlencoded(role),
                    urlencoded(location)
                );

                match fetch_html(&client, &search_url).await {
                    Ok(html) => jobs.extend(parse_cards(&html, location, self.name())?),
                    Err(e) => {
                        tracing::error!(
                            "Error scraping Indeed for role '{role}' in '{location}': {e}"
                        );
                    }
                }

                polite_delay().await;
            }
        }

        tracing::info!("Scraped {} jobs from Indeed", jobs.len());
        Ok(jobs)
    }
}

fn parse_cards(html: &str, fallback_location: &str, source: &str) -> Result<Vec<RawJob>, AppError> {
    let document = Html::parse_document(html);
    let card_selectors = [selector("div.job_seen_beacon")?, selector("div[data-jk]")?];
    let title_link_selectors = [selector("h2.jobTitle a")?, selector("a[data-jk]")?];
    let company_selectors = [
        selector("span.companyName")?,
        selector(r#"a[data-testid="company-name"]"#)?,
        selector(r#"span[data-testid="company-name"]"#)?,
    ];
    let location_selectors = [
        selector("div.companyLocation")?,
        selector(r#"div[data-testid="job-location"]"#)?,
    ];

    let base = Url::parse(BASE_URL).map_err(|e| AppError::Parse(format!("base url: {e}")))?;
    let mut jobs = Vec::new();

    for sel in &card_selectors {
        for card in document.select(sel).take(MAX_CARDS) {
            let Some(title_link) = title_link_selectors
                .iter()
                .find_map(|s| card.select(s).next())
            else {
                continue;
            };

            // Indeed puts the clean title in the anchor's title attribute;
            // the anchor text carries extra markup on some variants.
            let title = match title_link.value().attr("title") {
                Some(t) if !t.trim().is_empty() => t.trim().to_string(),
                _ => text_of(title_link),
            };
            let Some(link) = title_link
                .value()
                .attr("href")
                .and_then(|href| base.join(href).ok())
            else {
                continue;
            };

            let company = company_selectors
                .iter()
                .find_map(|s| card.select(s).next())
                .map(text_of)
                .unwrap_or_else(|| "Not specified".to_string());

            let location = location_selectors
                .iter()
                .find_map(|s| card.select(s).next())
                .map(text_of)
                .unwrap_or_else(|| fallback_location.to_string());

            jobs.push(RawJob {
                title,
                company,
                location,
                link: link.to_string(),
                description: String::new(),
                source: source.to_string(),
            });
        }
        if !jobs.is_empty() {
            break;
        }
    }

    Ok(jobs)
}

fn text_of(element: scraper::ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
