use serde::{Deserialize, Serialize};

/// A job posting as scraped from a board, before any validation.
/// Fields may be empty or junk; the pipeline decides what survives.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub link: String,
    pub description: String,
    pub source: String,
}

/// Work-mode classification derived from the free-text location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LocationType {
    Remote,
    Hybrid,
    Onsite,
    NotSpecified,
}

impl LocationType {
    /// Classify a free-text location. Remote-family terms win over
    /// hybrid-family terms when both appear.
    pub fn from_location(location: &str) -> Self {
        if location.trim().is_empty() {
            return LocationType::NotSpecified;
        }
        let loc = location.to_lowercase();
        if ["remote", "work from home", "wfh"]
            .iter()
            .any(|t| loc.contains(t))
        {
            LocationType::Remote
        } else if ["hybrid", "flexible"].iter().any(|t| loc.contains(t)) {
            LocationType::Hybrid
        } else {
            LocationType::Onsite
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LocationType::Remote => "Remote",
            LocationType::Hybrid => "Hybrid",
            LocationType::Onsite => "Onsite",
            LocationType::NotSpecified => "Not specified",
        }
    }
}

/// A posting that passed validation, classification, and dedup.
/// Immutable once built; lives for one run and is handed to the renderer.
#[derive(Debug, Clone, Serialize)]
pub struct ProcessedJob {
    pub title: String,
    pub company: String,
    pub location: String,
    pub location_type: LocationType,
    pub link: String,
    pub keywords: Vec<String>,
    pub skills: Vec<String>,
    pub source: String,
}

/// Composite key identifying one posting across sources and runs:
/// case-folded title and company plus the exact link, `|`-delimited.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobIdentity(String);

impl JobIdentity {
    pub fn of(job: &RawJob) -> Self {
        JobIdentity(format!(
            "{}|{}|{}",
            job.title.trim().to_lowercase(),
            job.company.trim().to_lowercase(),
            job.link.trim()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for JobIdentity {
    fn from(key: String) -> Self {
        JobIdentity(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_type_empty_is_not_specified() {
        assert_eq!(LocationType::from_location(""), LocationType::NotSpecified);
        assert_eq!(
            LocationType::from_location("   "),
            LocationType::NotSpecified
        );
    }

    #[test]
    fn location_type_remote_beats_hybrid() {
        assert_eq!(
            LocationType::from_location("Hybrid / Remote - Pune"),
            LocationType::Remote
        );
    }

    #[test]
    fn location_type_variants() {
        assert_eq!(
            LocationType::from_location("Work From Home"),
            LocationType::Remote
        );
        assert_eq!(
            LocationType::from_location("Bengaluru (Hybrid)"),
            LocationType::Hybrid
        );
        assert_eq!(
            LocationType::from_location("Bangalore, India"),
            LocationType::Onsite
        );
    }

    #[test]
    fn identity_folds_title_and_company_case_but_not_link() {
        let a = RawJob {
            title: "DevOps Engineer".into(),
            company: "Acme".into(),
            link: "https://x/1".into(),
            ..RawJob::default()
        };
        let b = RawJob {
            title: "DEVOPS ENGINEER".into(),
            company: " acme ".into(),
            link: "https://x/1".into(),
            ..RawJob::default()
        };
        let c = RawJob {
            link: "https://x/2".into(),
            ..a.clone()
        };
        assert_eq!(JobIdentity::of(&a), JobIdentity::of(&b));
        assert_ne!(JobIdentity::of(&a), JobIdentity::of(&c));
    }
}
