use async_trait::async_trait;
use scraper::Html;

use crate::collectors::{
    JobCollector, build_client, delay_between, fetch_html, selector, urlencoded,
};
use crate::error::AppError;
use crate::models::job::RawJob;

const MAX_ROLES: usize = 2;
const MAX_CARDS: usize = 15;
/// LinkedIn ignores our broader location list; country-level queries
/// return the most.
const SEARCH_LOCATIONS: &[&str] = &["India", "Remote"];

/// Best-effort scraper for the public jobs search. LinkedIn blocks
/// automated clients aggressively; an empty result is normal.
pub struct LinkedIn;

#[async_trait]
impl JobCollector for LinkedIn {
    fn name(&self) -> &str {
        "LinkedIn"
    }

    async fn collect(&self, roles: &[&str], _locations: &[&str]) -> Result<Vec<RawJob>, AppError> {
        let client = build_client()?;
        let mut jobs = Vec::new();

        for role in roles.iter().take(MAX_ROLES) {
            for location in SEARCH_LOCATIONS {
                // f_TPR=r86400 restricts results to the last 24 hours.
                let search_url = format!(
                    "https://www.linkedin.com/jobs/search/?keywords={}&location={}&f_TPR=r86400",
                    urlencoded(role),
                    urlencoded(location)
                );

                match fetch_html(&client, &search_url).await {
                    Ok(html) => jobs.extend(parse_cards(&html, location, self.name())?),
                    Err(e) => {
                        tracing::error!(
                            "Error scraping LinkedIn for role '{role}' in '{location}': {e}"
                        );
                    }
                }

                // LinkedIn rate-limits harder than the other boards.
                delay_between(2.0, 4.0).await;
            }
        }

        tracing::info!("Scraped {} jobs from LinkedIn", jobs.len());
        Ok(jobs)
    }
}

fn parse_cards(html: &str, fallback_location: &str, source: &str) -> Result<Vec<RawJob>, AppError> {
    let document = Html::parse_document(html);
    let card_selectors = [selector("div.job-search-card")?, selector("li.result-card")?];
    let link_selectors = [selector("a.base-card__full-link")?, selector("h3 a")?];
    let company_selectors = [
        selector("h4.base-search-card__subtitle")?,
        selector(r#"a[data-tracking-control-name="public_jobs_jserp-result_job-search-card-subtitle"]"#)?,
    ];
    let location_selector = selector("span.job-search-card__location")?;

    let mut jobs = Vec::new();

    for sel in &card_selectors {
        for card in document.select(sel).take(MAX_CARDS) {
            let Some(link_el) = link_selectors.iter().find_map(|s| card.select(s).next()) else {
                continue;
            };
            let Some(link) = link_el.value().attr("href") else {
                continue;
            };

            let company = company_selectors
                .iter()
                .find_map(|s| card.select(s).next())
                .map(text_of)
                .unwrap_or_else(|| "Not specified".to_string());

            let location = card
                .select(&location_selector)
                .next()
                .map(text_of)
                .unwrap_or_else(|| fallback_location.to_string());

            jobs.push(RawJob {
                title: text_of(link_el),
                company,
                location,
                link: link.to_string(),
                // The JD needs a second request that LinkedIn usually rejects.
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
