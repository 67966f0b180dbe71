//! Keyword and skill extraction from job descriptions.
//!
//! Output is deterministic for a given input and catalog: frequency ties
//! rank by first occurrence in the text, and every fallback pads from a
//! fixed list in fixed order. Both output lists are guaranteed non-empty
//! so the digest never renders a blank cell.

use std::collections::HashMap;

/// Inputs shorter than this carry no signal worth tokenizing.
const MIN_TEXT_LEN: usize = 10;
/// Frequency ranks considered before the generic-noun discard.
const FREQUENCY_POOL: usize = 50;
/// Maximum entries in each output list.
const MAX_TERMS: usize = 10;
/// Keyword lists shorter than this are padded from the defaults.
const MIN_KEYWORDS: usize = 5;
/// Skill lists shorter than this are padded from the defaults.
const MIN_SKILLS: usize = 3;

/// Term tables driving extraction. Production tables come from
/// `Default`; tests build synthetic ones.
#[derive(Debug, Clone)]
pub struct ExtractionCatalog {
    /// Tokens carrying no signal, lowercase.
    pub stop_words: Vec<String>,
    /// Frequent-but-uninformative technical nouns, lowercase.
    pub generic_terms: Vec<String>,
    /// Tokens rendered in upper case instead of title case, lowercase keys.
    pub acronyms: Vec<String>,
    /// Skill catalog scanned in order against the uppercased text.
    pub skills: Vec<String>,
    /// Padding used when too few keywords survive, already styled.
    pub default_keywords: Vec<String>,
    /// Padding used when too few skills match, already styled.
    pub default_skills: Vec<String>,
}

impl ExtractionCatalog {
    pub fn new(
        stop_words: &[&str],
        generic_terms: &[&str],
        acronyms: &[&str],
        skills: &[&str],
        default_keywords: &[&str],
        default_skills: &[&str],
    ) -> Self {
        let owned = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        ExtractionCatalog {
            stop_words: owned(stop_words),
            generic_terms: owned(generic_terms),
            acronyms: owned(acronyms),
            skills: owned(skills),
            default_keywords: owned(default_keywords),
            default_skills: owned(default_skills),
        }
    }
}

impl Default for ExtractionCatalog {
    fn default() -> Self {
        ExtractionCatalog::new(
            STOP_WORDS,
            GENERIC_TERMS,
            ACRONYMS,
            TECHNICAL_SKILLS,
            DEFAULT_KEYWORDS,
            DEFAULT_SKILLS,
        )
    }
}

/// Extract up to [`MAX_TERMS`] keywords and skills from free text.
/// Inputs too short to tokenize get the default lists outright.
pub fn extract(text: &str, catalog: &ExtractionCatalog) -> (Vec<String>, Vec<String>) {
    if text.trim().len() < MIN_TEXT_LEN {
        return (
            catalog.default_keywords.iter().take(MAX_TERMS).cloned().collect(),
            catalog.default_skills.iter().take(MAX_TERMS).cloned().collect(),
        );
    }
    (extract_keywords(text, catalog), extract_skills(text, catalog))
}

fn extract_keywords(text: &str, catalog: &ExtractionCatalog) -> Vec<String> {
    let lower = text.to_lowercase();

    // Count alphabetic runs of length >= 3, remembering each token's
    // first position so frequency ties rank deterministically.
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, token) in tokenize(&lower).enumerate() {
        if catalog.stop_words.iter().any(|w| w == token) {
            continue;
        }
        let entry = counts.entry(token).or_insert((0, position));
        entry.0 += 1;
    }

    let mut ranked: Vec<(&str, usize, usize)> = counts
        .into_iter()
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    ranked.truncate(FREQUENCY_POOL);

    let mut keywords: Vec<String> = ranked
        .iter()
        .filter(|(token, _, _)| !catalog.generic_terms.iter().any(|g| g == token))
        .map(|(token, _, _)| style_token(token, catalog))
        .take(MAX_TERMS)
        .collect();

    if keywords.len() < MIN_KEYWORDS {
        pad(&mut keywords, &catalog.default_keywords);
    }
    keywords
}

fn extract_skills(text: &str, catalog: &ExtractionCatalog) -> Vec<String> {
    let upper = text.to_uppercase();
    let mut skills: Vec<String> = Vec::new();

    for skill in &catalog.skills {
        if skills.len() >= MAX_TERMS {
            break;
        }
        if upper.contains(skill.as_str()) && !near_duplicate(skill, &skills) {
            skills.push(skill.clone());
        }
    }

    if skills.len() < MIN_SKILLS {
        pad(&mut skills, &catalog.default_skills);
    }
    skills
}

/// Iterator over alphabetic runs of length >= 3.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_ascii_alphabetic())
        .filter(|t| t.len() >= 3)
}

/// Title-case a lowercase token, upper-casing allow-listed acronyms.
fn style_token(token: &str, catalog: &ExtractionCatalog) -> String {
    if catalog.acronyms.iter().any(|a| a == token) {
        return token.to_uppercase();
    }
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A candidate is a near-duplicate when its first word and an accepted
/// skill's first word contain one another (GITLAB CI vs GIT).
fn near_duplicate(candidate: &str, accepted: &[String]) -> bool {
    let head = first_word(candidate);
    accepted.iter().any(|skill| {
        let other = first_word(skill);
        other.contains(head) || head.contains(other)
    })
}

fn first_word(s: &str) -> &str {
    s.split_whitespace().next().unwrap_or(s)
}

/// Append defaults not already present until [`MAX_TERMS`] entries or
/// the default list runs out.
fn pad(terms: &mut Vec<String>, defaults: &[String]) {
    for default in defaults {
        if terms.len() >= MAX_TERMS {
            break;
        }
        if !terms.iter().any(|t| t.eq_ignore_ascii_case(default)) {
            terms.push(default.clone());
        }
    }
}

const STOP_WORDS: &[&str] = &[
    "the", "and", "for", "are", "with", "you", "this", "that", "will", "have", "been", "from",
    "they", "know", "want", "good", "much", "some", "time", "very", "when", "come", "here", "how",
    "just", "like", "long", "make", "many", "over", "such", "take", "than", "them", "well", "were",
    "work", "year", "years", "job", "role", "position", "company", "team", "our", "your", "who",
    "what", "about", "into", "more", "most", "other", "should", "would", "can", "all", "any",
    "has", "had", "its", "per", "not", "but", "also", "able", "within", "using", "across",
];

/// High-frequency nouns that say nothing about one posting in particular.
const GENERIC_TERMS: &[&str] = &[
    "system",
    "systems",
    "platform",
    "platforms",
    "service",
    "services",
    "solution",
    "solutions",
    "technology",
    "technologies",
    "tool",
    "tools",
    "environment",
    "environments",
    "application",
    "applications",
    "software",
    "experience",
    "engineer",
    "engineers",
    "engineering",
    "candidate",
    "candidates",
    "skills",
    "knowledge",
    "ability",
];

/// Tokens shown in upper case rather than title case.
const ACRONYMS: &[&str] = &[
    "aws", "gcp", "sre", "api", "apis", "sql", "nosql", "iac", "eks", "aks", "gke", "ec2", "vpc",
    "dns", "tls", "ssl", "http", "https", "json", "yaml", "wfh", "devops",
];

/// Ordered skill catalog; earlier entries outrank later ones when both
/// appear. Matched as substrings of the uppercased description.
const TECHNICAL_SKILLS: &[&str] = &[
    "AWS",
    "GCP",
    "AZURE",
    "GOOGLE CLOUD",
    "AMAZON WEB SERVICES",
    "DOCKER",
    "KUBERNETES",
    "K8S",
    "TERRAFORM",
    "ANSIBLE",
    "PUPPET",
    "CHEF",
    "JENKINS",
    "GITLAB CI",
    "GITHUB ACTIONS",
    "CIRCLECI",
    "TRAVIS CI",
    "CI/CD",
    "PROMETHEUS",
    "GRAFANA",
    "DATADOG",
    "NEW RELIC",
    "CLOUDWATCH",
    "ELK STACK",
    "PYTHON",
    "BASH",
    "GOLANG",
    "RUBY",
    "PERL",
    "POWERSHELL",
    "LINUX",
    "UBUNTU",
    "CENTOS",
    "RHEL",
    "WINDOWS SERVER",
    "NGINX",
    "APACHE",
    "HAPROXY",
    "LOAD BALANCER",
    "MYSQL",
    "POSTGRESQL",
    "MONGODB",
    "REDIS",
    "ELASTICSEARCH",
    "HELM",
    "ISTIO",
    "LINKERD",
    "VAULT",
    "CONSUL",
    "GIT",
    "SVN",
    "JIRA",
    "CONFLUENCE",
];

/// Padding for sparse descriptions, in display style.
const DEFAULT_KEYWORDS: &[&str] = &[
    "DevOps",
    "Cloud",
    "Automation",
    "Deployment",
    "Infrastructure",
    "Monitoring",
    "Pipeline",
    "Linux",
    "Scripting",
    "Containers",
    "Reliability",
    "Security",
];

const DEFAULT_SKILLS: &[&str] = &[
    "AWS",
    "DOCKER",
    "KUBERNETES",
    "LINUX",
    "JENKINS",
    "TERRAFORM",
    "GIT",
    "CI/CD",
    "ANSIBLE",
    "PYTHON",
];
