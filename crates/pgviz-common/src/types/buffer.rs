//! Per-frame buffer cache snapshot.

use serde::{Deserialize, Serialize};

/// Relation name shown when a buffer has no matching catalog entry.
pub const UNKNOWN_RELATION: &str = "?";

/// One cached page slot as reported by the buffer source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferRecord {
    /// Position in the snapshot. Always dense and 0-based.
    pub id: usize,
    /// The server's own buffer identifier (1-based in PostgreSQL).
    pub buffer_id: i64,
    pub usage_count: u32,
    pub relation_id: Option<u32>,
    pub relation_name: String,
    pub is_dirty: bool,
    pub pinning_backends: u32,
}

impl BufferRecord {
    /// An unused buffer slot with no owning relation.
    pub fn empty(buffer_id: i64) -> Self {
        Self {
            id: 0,
            buffer_id,
            usage_count: 0,
            relation_id: None,
            relation_name: UNKNOWN_RELATION.to_string(),
            is_dirty: false,
            pinning_backends: 0,
        }
    }

    /// Relation id as displayed in the hover label.
    pub fn relation_id_label(&self) -> String {
        match self.relation_id {
            Some(id) => id.to_string(),
            None => UNKNOWN_RELATION.to_string(),
        }
    }
}

/// Aggregate counts over one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SnapshotStats {
    pub total: usize,
    pub in_use: usize,
    pub dirty: usize,
    pub pinned: usize,
}

/// Ordered, read-only set of buffer records for a single frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferSnapshot {
    records: Vec<BufferRecord>,
}

impl BufferSnapshot {
    /// Build a snapshot, preserving order and rewriting `id` to the
    /// record's position.
    pub fn from_records(mut records: Vec<BufferRecord>) -> Self {
        for (position, record) in records.iter_mut().enumerate() {
            record.id = position;
        }
        Self { records }
    }

    pub fn records(&self) -> &[BufferRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&BufferRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self) -> SnapshotStats {
        self.records
            .iter()
            .fold(SnapshotStats { total: self.records.len(), ..Default::default() }, |mut s, r| {
                if r.usage_count > 0 {
                    s.in_use += 1;
                }
                if r.is_dirty {
                    s.dirty += 1;
                }
                if r.pinning_backends > 0 {
                    s.pinned += 1;
                }
                s
            })
    }
}
