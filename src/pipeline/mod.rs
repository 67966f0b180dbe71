//! The processing pipeline: raw scraped records in, validated,
//! classified, enriched, deduplicated records out.

pub mod classify;
pub mod dedupe;
pub mod extract;

use crate::models::job::{JobIdentity, LocationType, ProcessedJob, RawJob};
use crate::state::SeenJobStore;

use self::classify::ClassifierRules;
use self::dedupe::dedupe_batch;
use self::extract::ExtractionCatalog;

/// Descriptions at or below this length carry less signal than the
/// title itself.
const MIN_DESCRIPTION_LEN: usize = 20;

/// Owns the seen-set store and the rule tables; `process` is the single
/// entry point per run.
pub struct Pipeline {
    store: SeenJobStore,
    rules: ClassifierRules,
    catalog: ExtractionCatalog,
}

impl Pipeline {
    pub fn new(store: SeenJobStore) -> Self {
        Pipeline {
            store,
            rules: ClassifierRules::default(),
            catalog: ExtractionCatalog::default(),
        }
    }

    #[cfg(test)]
    pub fn with_tables(
        store: SeenJobStore,
        rules: ClassifierRules,
        catalog: ExtractionCatalog,
    ) -> Self {
        Pipeline {
            store,
            rules,
            catalog,
        }
    }

    /// Run the full transform in fixed order: load state, batch-dedupe,
    /// validate, classify, cross-run dedupe, enrich, persist state once.
    /// Output order follows input order. A failed state write is logged
    /// and the run's results are still returned; the next run may then
    /// re-show some jobs.
    pub fn process(&self, records: Vec<RawJob>) -> Vec<ProcessedJob> {
        let mut seen = self.store.load();
        let total = records.len();

        let mut output = Vec::new();
        for job in dedupe_batch(records) {
            if job.title.trim().is_empty()
                || job.company.trim().is_empty()
                || job.link.trim().is_empty()
            {
                continue;
            }
            if !classify::is_india_job(&self.rules, &job.location, &job.description) {
                continue;
            }
            if !classify::is_fresher_job(&self.rules, &job.title, &job.description) {
                continue;
            }

            let identity = JobIdentity::of(&job);
            if seen.contains(&identity) {
                continue;
            }

            let text = if job.description.trim().len() > MIN_DESCRIPTION_LEN {
                &job.description
            } else {
                &job.title
            };
            let (keywords, skills) = extract::extract(text, &self.catalog);
            let location_type = LocationType::from_location(&job.location);

            output.push(ProcessedJob {
                title: job.title,
                company: job.company,
                location: job.location,
                location_type,
                link: job.link,
                keywords,
                skills,
                source: job.source,
            });
            seen.insert(identity);
        }

        if let Err(e) = self.store.save(&seen) {
            tracing::error!(
                "Failed to persist seen jobs to {}: {e}",
                self.store.path().display()
            );
        }

        tracing::info!("{} new jobs after filtering {total} collected", output.len());
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::SeenJobStore;

    fn store() -> (tempfile::TempDir, SeenJobStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SeenJobStore::new(dir.path().join("seen_jobs.json"));
        (dir, store)
    }

    fn qualifying(n: usize) -> RawJob {
        RawJob {
            title: format!("Junior DevOps Engineer {n}"),
            company: "Acme".into(),
            location: "Bangalore, India".into(),
            link: format!("https://x/{n}"),
            description: "We need a fresher with Docker and AWS experience".into(),
            source: "Naukri".into(),
        }
    }

    #[test]
    fn empty_input_is_a_valid_run() {
        let (_dir, store) = store();
        let pipeline = Pipeline::new(store.clone());
        assert!(pipeline.process(Vec::new()).is_empty());
        // The no-op persist still writes a valid empty state file.
        assert!(store.load().is_empty());
        assert!(store.path().exists());
    }

    #[test]
    fn malformed_records_are_dropped_silently() {
        let (_dir, store) = store();
        let pipeline = Pipeline::new(store);

        let mut missing_company = qualifying(1);
        missing_company.company.clear();
        let mut missing_link = qualifying(2);
        missing_link.link = "  ".into();

        assert!(pipeline.process(vec![missing_company, missing_link]).is_empty());
    }

    #[test]
    fn short_description_extracts_from_title() {
        let (_dir, store) = store();
        let pipeline = Pipeline::new(store);

        let mut job = qualifying(1);
        job.description = "fresher".into();
        // Still classified fresher via description, but too short for
        // extraction, so the title feeds the extractor.
        let out = pipeline.process(vec![job]);
        assert_eq!(out.len(), 1);
        assert!(out[0].keywords.iter().any(|k| k == "Junior" || k == "Engineer"));
    }

    #[test]
    fn second_run_suppresses_already_seen_jobs() {
        let (_dir, store) = store();
        let pipeline = Pipeline::new(store.clone());

        assert_eq!(pipeline.process(vec![qualifying(1)]).len(), 1);

        let second = Pipeline::new(store);
        assert!(second.process(vec![qualifying(1)]).is_empty());
    }

    #[test]
    fn output_preserves_input_order() {
        let (_dir, store) = store();
        let pipeline = Pipeline::new(store);

        let out = pipeline.process(vec![qualifying(3), qualifying(1), qualifying(2)]);
        let links: Vec<_> = out.iter().map(|j| j.link.as_str()).collect();
        assert_eq!(links, ["https://x/3", "https://x/1", "https://x/2"]);
    }

    #[test]
    fn synthetic_tables_drive_the_whole_pipeline() {
        let (_dir, store) = store();
        let rules = ClassifierRules::new(&["mars"], &["pluto"], &["veteran"], &["cadet"], &[]);
        let catalog =
            ExtractionCatalog::new(&[], &[], &[], &["WARP DRIVE"], &["Space"], &["WARP DRIVE"]);
        let pipeline = Pipeline::with_tables(store, rules, catalog);

        let job = RawJob {
            title: "Engineer".into(),
            company: "Orbit".into(),
            location: "Pluto".into(),
            link: "https://x/1".into(),
            description: "cadet wanted, warp drive tuning all day long".into(),
            source: "Test".into(),
        };
        let out = pipeline.process(vec![job]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].skills, ["WARP DRIVE"]);
    }

    #[test]
    fn failed_predicate_jobs_do_not_enter_seen_set() {
        let (_dir, store) = store();
        let pipeline = Pipeline::new(store.clone());

        let mut senior = qualifying(1);
        senior.title = "Senior DevOps Engineer".into();
        assert!(pipeline.process(vec![senior]).is_empty());
        assert!(store.load().is_empty());
    }
}
