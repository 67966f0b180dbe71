//! Eligibility classification: is the posting in India, and is it an
//! entry-level ("fresher") role?
//!
//! Both predicates are driven by ordered lists of substring rules
//! evaluated against lowercased text by one matching function. Exclusion
//! rules sit ahead of inclusion rules, so an excluding match always wins
//! regardless of what else the text mentions. Ambiguous records fail
//! both predicates: a job this tool is unsure about is not shown.

/// What a matching pattern says about the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Include,
    Exclude,
}

/// One substring pattern paired with its verdict. Patterns are stored
/// lowercase and matched against lowercased text.
#[derive(Debug, Clone)]
pub struct KeywordRule {
    pub pattern: String,
    pub verdict: Verdict,
}

impl KeywordRule {
    fn new(pattern: &str, verdict: Verdict) -> Self {
        KeywordRule {
            pattern: pattern.to_lowercase(),
            verdict,
        }
    }
}

/// First matching rule decides; no match means no verdict.
pub fn evaluate(text: &str, rules: &[KeywordRule]) -> Option<Verdict> {
    rules
        .iter()
        .find(|rule| text.contains(&rule.pattern))
        .map(|rule| rule.verdict)
}

fn rules_from(patterns: &[&str], verdict: Verdict) -> Vec<KeywordRule> {
    patterns.iter().map(|p| KeywordRule::new(p, verdict)).collect()
}

/// Rule tables for both predicates. Built once per run; tests construct
/// their own with synthetic tables.
#[derive(Debug, Clone)]
pub struct ClassifierRules {
    /// International exclusions followed by Indian inclusions.
    pub geography: Vec<KeywordRule>,
    /// Experience exclusions followed by fresher inclusions.
    pub seniority: Vec<KeywordRule>,
    /// Narrow patterns that mark a title as junior on their own.
    pub junior_title: Vec<String>,
    /// Location terms meaning the job is remote.
    pub remote_markers: Vec<String>,
    /// India markers consulted for remote jobs with no explicit city.
    pub india_markers: Vec<String>,
}

impl ClassifierRules {
    pub fn new(
        international: &[&str],
        indian: &[&str],
        experience_exclusions: &[&str],
        fresher_inclusions: &[&str],
        junior_title: &[&str],
    ) -> Self {
        let mut geography = rules_from(international, Verdict::Exclude);
        geography.extend(rules_from(indian, Verdict::Include));

        let mut seniority = rules_from(experience_exclusions, Verdict::Exclude);
        seniority.extend(rules_from(fresher_inclusions, Verdict::Include));

        ClassifierRules {
            geography,
            seniority,
            junior_title: junior_title.iter().map(|p| p.to_lowercase()).collect(),
            remote_markers: vec!["remote".into()],
            india_markers: indian.iter().map(|p| p.to_lowercase()).collect(),
        }
    }
}

impl Default for ClassifierRules {
    fn default() -> Self {
        ClassifierRules::new(
            INTERNATIONAL_LOCATIONS,
            INDIAN_LOCATIONS,
            EXPERIENCE_EXCLUSIONS,
            FRESHER_INCLUSIONS,
            JUNIOR_TITLE_TERMS,
        )
    }
}

/// Geography predicate. Default-deny: a location that names no known
/// place is excluded rather than guessed at. Remote listings pass only
/// when the location or description ties them to India.
pub fn is_india_job(rules: &ClassifierRules, location: &str, description: &str) -> bool {
    if location.trim().is_empty() {
        return false;
    }
    let loc = location.to_lowercase();

    match evaluate(&loc, &rules.geography) {
        Some(Verdict::Exclude) => false,
        Some(Verdict::Include) => true,
        None => {
            if rules.remote_markers.iter().any(|m| loc.contains(m)) {
                let desc = description.to_lowercase();
                rules
                    .india_markers
                    .iter()
                    .any(|m| loc.contains(m) || desc.contains(m))
            } else {
                false
            }
        }
    }
}

/// Seniority predicate over title and description combined. Exclusion
/// keywords win outright ("Senior Fresher" is senior); with no signal
/// either way the record is rejected.
pub fn is_fresher_job(rules: &ClassifierRules, title: &str, description: &str) -> bool {
    let text = format!("{} {}", title, description).to_lowercase();

    match evaluate(&text, &rules.seniority) {
        Some(Verdict::Exclude) => false,
        Some(Verdict::Include) => true,
        None => {
            let title = title.to_lowercase();
            rules.junior_title.iter().any(|p| title.contains(p))
        }
    }
}

/// Locations that disqualify a posting outright. Checked before the
/// Indian list, so "New Delhi, ships to New York office" is excluded.
const INTERNATIONAL_LOCATIONS: &[&str] = &[
    "united states",
    "usa",
    "u.s.",
    "new york",
    "san francisco",
    "seattle",
    "austin",
    "boston",
    "chicago",
    "denver",
    "phoenix",
    "dallas",
    "houston",
    "atlanta",
    "california",
    "texas",
    "arizona",
    "virginia",
    "washington",
    "colorado",
    "florida",
    "georgia",
    "illinois",
    "massachusetts",
    "oregon",
    "united kingdom",
    "london",
    "manchester",
    "canada",
    "toronto",
    "vancouver",
    "australia",
    "sydney",
    "melbourne",
    "singapore",
    "dubai",
    "uae",
    "saudi",
    "germany",
    "berlin",
    "munich",
    "netherlands",
    "amsterdam",
    "france",
    "paris",
    "ireland",
    "dublin",
    "poland",
    "warsaw",
    "israel",
    "tel aviv",
    "japan",
    "tokyo",
    "philippines",
    "manila",
    "vietnam",
    "indonesia",
    "malaysia",
    "europe",
];

/// Indian cities, states, and the country itself.
const INDIAN_LOCATIONS: &[&str] = &[
    "india",
    "bengaluru",
    "bangalore",
    "hyderabad",
    "pune",
    "mumbai",
    "navi mumbai",
    "chennai",
    "kolkata",
    "delhi",
    "new delhi",
    "gurgaon",
    "gurugram",
    "noida",
    "ahmedabad",
    "indore",
    "jaipur",
    "kochi",
    "cochin",
    "coimbatore",
    "thiruvananthapuram",
    "trivandrum",
    "chandigarh",
    "mohali",
    "bhubaneswar",
    "nagpur",
    "vadodara",
    "mysuru",
    "mysore",
    "karnataka",
    "maharashtra",
    "telangana",
    "tamil nadu",
    "kerala",
    "gujarat",
    "rajasthan",
    "haryana",
    "uttar pradesh",
    "west bengal",
];

/// Any of these in title+description marks the role as beyond entry
/// level. Singular "year" so both "5+ year" and "5+ years" match.
const EXPERIENCE_EXCLUSIONS: &[&str] = &[
    "3+ year",
    "4+ year",
    "5+ year",
    "6+ year",
    "7+ year",
    "8+ year",
    "9+ year",
    "10+ year",
    "12+ year",
    "15+ year",
    "minimum 3 year",
    "minimum 4 year",
    "minimum 5 year",
    "at least 3 year",
    "at least 4 year",
    "at least 5 year",
    "senior",
    "sr.",
    "sr ",
    "lead",
    "principal",
    "staff engineer",
    "architect",
    "manager",
    "director",
    "head of",
    "vice president",
    "vp of",
];

/// Positive entry-level signals anywhere in title+description.
const FRESHER_INCLUSIONS: &[&str] = &[
    "fresher",
    "entry level",
    "entry-level",
    "new grad",
    "recent graduate",
    "fresh graduate",
    "graduate engineer",
    "graduate trainee",
    "campus hire",
    "trainee",
    "internship",
    "junior",
    "0-1 year",
    "0-2 year",
    "0 to 1 year",
    "0 to 2 year",
    "no experience required",
    "no prior experience",
];

/// Narrower set that qualifies on the title alone. "intern" is absent:
/// it substring-matches "international".
const JUNIOR_TITLE_TERMS: &[&str] = &[
    "junior",
    "jr.",
    "jr ",
    "associate",
    "trainee",
    "graduate",
    "fresher",
    "internship",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ClassifierRules {
        ClassifierRules::default()
    }

    // Synthetic tables: the matcher itself, independent of production data.
    #[test]
    fn evaluate_first_match_wins() {
        let rules = vec![
            KeywordRule::new("bad", Verdict::Exclude),
            KeywordRule::new("good", Verdict::Include),
        ];
        assert_eq!(evaluate("a good thing", &rules), Some(Verdict::Include));
        assert_eq!(evaluate("good but bad", &rules), Some(Verdict::Exclude));
        assert_eq!(evaluate("neither", &rules), None);
    }

    #[test]
    fn synthetic_catalog_drives_geography() {
        let rules = ClassifierRules::new(&["mars"], &["pluto"], &[], &[], &[]);
        assert!(is_india_job(&rules, "Pluto Station", ""));
        assert!(!is_india_job(&rules, "Mars Base, Pluto", ""));
    }

    #[test]
    fn empty_location_is_rejected() {
        assert!(!is_india_job(&rules(), "", "great job in india"));
    }

    #[test]
    fn indian_city_is_accepted() {
        assert!(is_india_job(&rules(), "Bangalore, India", ""));
        assert!(is_india_job(&rules(), "Gurugram", ""));
    }

    #[test]
    fn international_location_is_rejected() {
        assert!(!is_india_job(&rules(), "Phoenix, Arizona", ""));
        assert!(!is_india_job(&rules(), "London, United Kingdom", ""));
    }

    #[test]
    fn exclusion_beats_inclusion_in_location() {
        assert!(!is_india_job(&rules(), "New York / Mumbai", ""));
    }

    #[test]
    fn bare_remote_needs_india_context() {
        assert!(!is_india_job(&rules(), "Remote", "work from anywhere"));
        assert!(is_india_job(&rules(), "Remote", "open to candidates in India"));
        assert!(is_india_job(&rules(), "Remote", "team based in Hyderabad"));
    }

    #[test]
    fn unknown_location_is_rejected() {
        assert!(!is_india_job(&rules(), "Metropolis", "india"));
    }

    #[test]
    fn classification_is_idempotent() {
        let r = rules();
        for _ in 0..2 {
            assert!(is_india_job(&r, "Pune", ""));
            assert!(is_fresher_job(&r, "DevOps Fresher", ""));
        }
    }

    #[test]
    fn fresher_keyword_is_accepted() {
        assert!(is_fresher_job(&rules(), "DevOps Engineer", "hiring freshers"));
        assert!(is_fresher_job(&rules(), "SRE", "entry level opportunity"));
    }

    #[test]
    fn exclusion_wins_over_inclusion() {
        assert!(!is_fresher_job(&rules(), "Senior Fresher DevOps Engineer", ""));
        assert!(!is_fresher_job(
            &rules(),
            "DevOps Engineer",
            "fresher friendly team, 5+ years required"
        ));
    }

    #[test]
    fn junior_title_alone_qualifies() {
        assert!(is_fresher_job(&rules(), "Associate DevOps Engineer", ""));
        assert!(is_fresher_job(&rules(), "Jr. SRE", ""));
    }

    #[test]
    fn ambiguous_record_is_denied() {
        assert!(!is_fresher_job(&rules(), "DevOps Engineer", ""));
    }

    #[test]
    fn years_exclusion_matches_plural() {
        assert!(!is_fresher_job(
            &rules(),
            "DevOps Engineer (5+ years)",
            "fresher"
        ));
    }
}
