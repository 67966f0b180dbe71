use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::job::JobIdentity;

/// Most recent identities kept when the set is persisted.
pub const SEEN_CAP: usize = 1000;

/// Identities already reported in earlier runs, in insertion order.
/// Order matters: when the set is persisted it is truncated to the
/// most recently added [`SEEN_CAP`] entries, oldest first out.
#[derive(Debug, Default)]
pub struct SeenJobs {
    order: Vec<String>,
    index: HashSet<String>,
}

impl SeenJobs {
    pub fn contains(&self, id: &JobIdentity) -> bool {
        self.index.contains(id.as_str())
    }

    /// Returns false if the identity was already present.
    pub fn insert(&mut self, id: JobIdentity) -> bool {
        let key = id.into_string();
        if self.index.insert(key.clone()) {
            self.order.push(key);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn from_entries(entries: Vec<String>) -> Self {
        let mut seen = SeenJobs::default();
        for entry in entries {
            seen.insert(JobIdentity::from(entry));
        }
        seen
    }

    /// The most recent [`SEEN_CAP`] entries, oldest first.
    fn persistable(&self) -> &[String] {
        let start = self.order.len().saturating_sub(SEEN_CAP);
        &self.order[start..]
    }
}

#[derive(Serialize, Deserialize)]
struct SeenJobsFile {
    seen_jobs: Vec<String>,
}

/// File-backed store for the seen-jobs set. Loading is permissive so a
/// missing or corrupt file never kills a run; saving overwrites the
/// whole file once at end of run.
#[derive(Debug, Clone)]
pub struct SeenJobStore {
    path: PathBuf,
}

impl SeenJobStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SeenJobStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> SeenJobs {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return SeenJobs::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read {}: {e}, starting fresh", self.path.display());
                return SeenJobs::default();
            }
        };

        match serde_json::from_str::<SeenJobsFile>(&raw) {
            Ok(file) => SeenJobs::from_entries(file.seen_jobs),
            Err(e) => {
                tracing::warn!(
                    "Corrupt seen-jobs file {}: {e}, starting fresh",
                    self.path.display()
                );
                SeenJobs::default()
            }
        }
    }

    pub fn save(&self, seen: &SeenJobs) -> Result<(), AppError> {
        let file = SeenJobsFile {
            seen_jobs: seen.persistable().to_vec(),
        };
        let json = serde_json::to_string_pretty(&file)
            .map_err(|e| AppError::Parse(format!("seen-jobs state: {e}")))?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::job::RawJob;

    fn id(n: usize) -> JobIdentity {
        JobIdentity::of(&RawJob {
            title: format!("job {n}"),
            company: "acme".into(),
            link: format!("https://x/{n}"),
            ..RawJob::default()
        })
    }

    #[test]
    fn insert_is_idempotent() {
        let mut seen = SeenJobs::default();
        assert!(seen.insert(id(1)));
        assert!(!seen.insert(id(1)));
        assert_eq!(seen.len(), 1);
        assert!(seen.contains(&id(1)));
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SeenJobStore::new(dir.path().join("nope.json"));
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seen_jobs.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = SeenJobStore::new(&path);
        assert!(store.load().is_empty());
    }

    #[test]
    fn round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = SeenJobStore::new(dir.path().join("seen_jobs.json"));

        let mut seen = SeenJobs::default();
        for n in 0..5 {
            seen.insert(id(n));
        }
        store.save(&seen).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), 5);
        for n in 0..5 {
            assert!(loaded.contains(&id(n)));
        }
        assert_eq!(loaded.persistable(), seen.persistable());
    }

    #[test]
    fn save_keeps_most_recent_cap_entries() {
        let dir = tempfile::tempdir().unwrap();
        let store = SeenJobStore::new(dir.path().join("seen_jobs.json"));

        let mut seen = SeenJobs::default();
        for n in 0..1200 {
            seen.insert(id(n));
        }
        store.save(&seen).unwrap();

        let loaded = store.load();
        assert_eq!(loaded.len(), SEEN_CAP);
        // Oldest 200 evicted, newest 1000 retained.
        assert!(!loaded.contains(&id(0)));
        assert!(!loaded.contains(&id(199)));
        assert!(loaded.contains(&id(200)));
        assert!(loaded.contains(&id(1199)));
    }
}
