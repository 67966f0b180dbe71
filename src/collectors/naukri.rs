use async_trait::async_trait;
use scraper::Html;
use url::Url;

use crate::collectors::{JobCollector, build_client, fetch_html, polite_delay, selector};
use crate::error::AppError;
use crate::models::job::RawJob;

const BASE_URL: &str = "https://www.naukri.com";
/// Role queries per run and cards per page, kept low to stay polite.
const MAX_ROLES: usize = 2;
const MAX_CARDS: usize = 20;

pub struct Naukri;

/// Card fields pulled out of the search page before any further I/O.
struct Card {
    title: String,
    company: String,
    location: String,
    link: String,
}

#[async_trait]
impl JobCollector for Naukri {
    fn name(&self) -> &str {
        "Naukri"
    }

    async fn collect(&self, roles: &[&str], _locations: &[&str]) -> Result<Vec<RawJob>, AppError> {
        let client = build_client()?;
        let mut jobs = Vec::new();

        for role in roles.iter().take(MAX_ROLES) {
            let slug = role.to_lowercase().replace(' ', "-");
            let search_url = format!("{BASE_URL}/{slug}-jobs");

            let cards = match fetch_html(&client, &search_url).await {
                Ok(html) => parse_cards(&html)?,
                Err(e) => {
                    tracing::error!("Error scraping Naukri for role '{role}': {e}");
                    continue;
                }
            };

            for card in cards {
                // Best effort: a posting without its JD page still counts.
                let description = match fetch_html(&client, &card.link).await {
                    Ok(html) => parse_description(&html).unwrap_or_default(),
                    Err(_) => String::new(),
                };

                jobs.push(RawJob {
                    title: card.title,
                    company: card.company,
                    location: card.location,
                    link: card.link,
                    description,
                    source: self.name().to_string(),
                });
            }

            polite_delay().await;
        }

        tracing::info!("Scraped {} jobs from Naukri", jobs.len());
        Ok(jobs)
    }
}

/// Pull job cards out of a search results page. Naukri has shipped both
/// article and div markup for the same card, so both are tried.
fn parse_cards(html: &str) -> Result<Vec<Card>, AppError> {
    let document = Html::parse_document(html);
    let card_selectors = [selector("article.jobTuple")?, selector("div.jobTuple")?];
    let title_selectors = [selector("a.title")?, selector("h3")?];
    let company_selectors = [selector("a.subTitle")?, selector("div.companyInfo")?];
    let location_selectors = [selector("span.locationsContainer")?, selector("li.location")?];

    let base = Url::parse(BASE_URL).map_err(|e| AppError::Parse(format!("base url: {e}")))?;
    let mut cards = Vec::new();

    for sel in &card_selectors {
        for element in document.select(sel).take(MAX_CARDS) {
            let Some(title_el) = title_selectors.iter().find_map(|s| element.select(s).next())
            else {
                continue;
            };
            let title = text_of(title_el);
            let Some(link) = title_el
                .value()
                .attr("href")
                .and_then(|href| base.join(href).ok())
            else {
                continue;
            };

            let company = company_selectors
                .iter()
                .find_map(|s| element.select(s).next())
                .map(text_of)
                .unwrap_or_else(|| "Not specified".to_string());

            let location = location_selectors
                .iter()
                .find_map(|s| element.select(s).next())
                .map(text_of)
                .unwrap_or_else(|| "India".to_string());

            cards.push(Card {
                title,
                company,
                location,
                link: link.to_string(),
            });
        }
        if !cards.is_empty() {
            break;
        }
    }

    Ok(cards)
}

/// Extract the JD text from a posting page, if its markup is recognized.
fn parse_description(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selectors = [
        selector("div.jobDescription").ok()?,
        selector("section.job-description").ok()?,
    ];
    selectors
        .iter()
        .find_map(|s| document.select(s).next())
        .map(text_of)
}

fn text_of(element: scraper::ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_PAGE: &str = r#"
        <html><body>
          <article class="jobTuple">
            <a class="title" href="/job-listings-devops-1">DevOps Engineer</a>
            <a class="subTitle">Acme Infra</a>
            <span class="locationsContainer">Bengaluru</span>
          </article>
          <article class="jobTuple">
            <h3>Broken card without link</h3>
          </article>
          <article class="jobTuple">
            <a class="title" href="https://other.example/job/2">Junior SRE</a>
          </article>
        </body></html>"#;

    #[test]
    fn parses_cards_with_fallback_defaults() {
        let cards = parse_cards(SEARCH_PAGE).unwrap();
        assert_eq!(cards.len(), 2);

        assert_eq!(cards[0].title, "DevOps Engineer");
        assert_eq!(cards[0].company, "Acme Infra");
        assert_eq!(cards[0].location, "Bengaluru");
        assert_eq!(cards[0].link, "https://www.naukri.com/job-listings-devops-1");

        // Missing company/location fall back; absolute links pass through.
        assert_eq!(cards[1].company, "Not specified");
        assert_eq!(cards[1].location, "India");
        assert_eq!(cards[1].link, "https://other.example/job/2");
    }

    #[test]
    fn card_without_title_link_is_skipped() {
        let cards = parse_cards("<html><body><article class=\"jobTuple\"></article></body></html>")
            .unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn parses_description_text() {
        let html = r#"<html><body>
            <div class="jobDescription"><p>Automate</p><p>everything</p></div>
        </body></html>"#;
        assert_eq!(parse_description(html).as_deref(), Some("Automate everything"));
        assert_eq!(parse_description("<html><body></body></html>"), None);
    }
}
