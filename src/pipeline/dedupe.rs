//! Intra-batch deduplication. Multiple boards routinely report the same
//! posting; the first copy seen wins and keeps its fields, including a
//! description a later copy may have carried. Runs before any filtering
//! so the seen-set only ever learns identities once per batch.

use std::collections::HashSet;

use crate::models::job::{JobIdentity, RawJob};

/// Drop records whose identity already appeared earlier in the batch,
/// preserving first-seen order.
pub fn dedupe_batch(records: Vec<RawJob>) -> Vec<RawJob> {
    let mut emitted = HashSet::new();
    records
        .into_iter()
        .filter(|record| emitted.insert(JobIdentity::of(record).into_string()))
        .collect()
}
