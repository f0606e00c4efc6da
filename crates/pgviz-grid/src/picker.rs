//! Pointer hit-testing against the buffer grid.

use pgviz_common::{BufferRecord, BufferSnapshot};

use crate::camera::CameraState;
use crate::mapper::{index_of, GridConfig, ScreenPoint};

/// Outcome of resolving the pointer against the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PickResult {
    pub buffer_index: Option<usize>,
}

impl PickResult {
    pub const NONE: PickResult = PickResult { buffer_index: None };

    pub fn is_some(&self) -> bool {
        self.buffer_index.is_some()
    }

    /// The picked record, if the index is valid for `snapshot`.
    pub fn record<'a>(&self, snapshot: &'a BufferSnapshot) -> Option<&'a BufferRecord> {
        self.buffer_index.and_then(|i| snapshot.get(i))
    }
}

/// Which buffer, if any, lies under `pointer`.
///
/// Uses the same mapping the renderer draws with, so the result always
/// names the cell visible under the pointer.
pub fn pick(
    pointer: ScreenPoint,
    camera: &CameraState,
    config: &GridConfig,
    record_count: usize,
) -> PickResult {
    PickResult {
        buffer_index: index_of(pointer, camera, config, record_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgviz_common::Vec2;

    fn snapshot(count: usize) -> BufferSnapshot {
        BufferSnapshot::from_records(
            (1..=count as i64).map(BufferRecord::empty).collect(),
        )
    }

    #[test]
    fn empty_snapshot_always_none() {
        let config = GridConfig::new(1, 100, 100);
        let camera = CameraState::default();
        for (x, y) in [(0, 0), (50, 50), (-10, 500)] {
            assert_eq!(pick(ScreenPoint::new(x, y), &camera, &config, 0), PickResult::NONE);
        }
    }

    #[test]
    fn pick_resolves_record() {
        let snap = snapshot(30);
        let config = GridConfig::new(5, 50, 50);
        let camera = CameraState::default();
        let result = pick(ScreenPoint::new(12, 7), &camera, &config, snap.len());
        assert_eq!(result.buffer_index, Some(12));
        let record = result.record(&snap).unwrap();
        assert_eq!(record.id, 12);
        assert_eq!(record.buffer_id, 13);
    }

    #[test]
    fn pick_follows_pan() {
        let config = GridConfig::new(5, 50, 50);
        let camera = CameraState {
            pan: Vec2::new(0.0, 10.0),
            ..CameraState::default()
        };
        let result = pick(ScreenPoint::new(0, 0), &camera, &config, 100);
        assert_eq!(result.buffer_index, Some(20));
    }

    #[test]
    fn pick_past_last_record_is_none() {
        let snap = snapshot(3);
        let config = GridConfig::new(5, 50, 50);
        let camera = CameraState::default();
        let result = pick(ScreenPoint::new(20, 0), &camera, &config, snap.len());
        assert!(!result.is_some());
        assert!(result.record(&snap).is_none());
    }
}
