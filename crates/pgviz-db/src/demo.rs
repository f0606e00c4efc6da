//! Synthetic buffer source.

use pgviz_common::{BufferRecord, BufferSnapshot, DbError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::BufferSource;

/// Generates `count` buffers per fetch with fresh random usage counts.
///
/// Relations alternate between relfilenode 1000 and 2000, and every fourth
/// buffer is dirty. With `fail_after(n)` the fetch after `n` successful
/// ones reports a query failure.
pub struct DemoBufferSource {
    count: usize,
    rng: StdRng,
    fetches: usize,
    fail_after: Option<usize>,
}

impl DemoBufferSource {
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, StdRng::from_entropy())
    }

    /// Deterministic source for tests and reproducible screenshots.
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::with_rng(count, StdRng::seed_from_u64(seed))
    }

    fn with_rng(count: usize, rng: StdRng) -> Self {
        Self {
            count,
            rng,
            fetches: 0,
            fail_after: None,
        }
    }

    pub fn fail_after(mut self, successful_fetches: usize) -> Self {
        self.fail_after = Some(successful_fetches);
        self
    }

    /// Number of fetch calls made so far, failed ones included.
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    fn record(&mut self, i: usize) -> BufferRecord {
        let (relation_id, relation_name) = if i % 2 == 0 {
            (1000, "demo_even")
        } else {
            (2000, "demo_odd")
        };
        BufferRecord {
            id: i,
            buffer_id: i as i64 + 1,
            usage_count: self.rng.gen_range(1..=5),
            relation_id: Some(relation_id),
            relation_name: relation_name.to_string(),
            is_dirty: i % 4 == 0,
            pinning_backends: 0,
        }
    }
}

impl BufferSource for DemoBufferSource {
    fn fetch(&mut self) -> Result<BufferSnapshot, DbError> {
        self.fetches += 1;
        if let Some(limit) = self.fail_after {
            if self.fetches > limit {
                return Err(DbError::Query(format!(
                    "demo source stopped after {limit} snapshots"
                )));
            }
        }

        let records = (0..self.count).map(|i| self.record(i)).collect();
        Ok(BufferSnapshot::from_records(records))
    }

    fn describe(&self) -> String {
        format!("demo ({} buffers)", self.count)
    }

    fn close(self: Box<Self>) {
        debug!(fetches = self.fetches, "demo source closed");
    }
}
