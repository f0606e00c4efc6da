mod buffer;
mod color;
mod core;

pub use self::core::*;
pub use buffer::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn record(buffer_id: i64, usage_count: u32) -> BufferRecord {
        BufferRecord {
            usage_count,
            ..BufferRecord::empty(buffer_id)
        }
    }

    #[test]
    fn vec2_arithmetic() {
        let a = Vec2::new(3.0, -4.0);
        let b = Vec2::new(1.5, 2.0);
        assert_eq!(a + b, Vec2::new(4.5, -2.0));
        assert_eq!(a - b, Vec2::new(1.5, -6.0));
        assert_eq!(a * -2.0, Vec2::new(-6.0, 8.0));
        assert_eq!(-a, Vec2::new(-3.0, 4.0));
    }

    #[test]
    fn vec2_add_assign() {
        let mut v = Vec2::ZERO;
        v += Vec2::new(1.0, 2.0);
        v += Vec2::new(1.0, 2.0);
        assert_eq!(v, Vec2::new(2.0, 4.0));
    }

    #[test]
    fn pan_axis_restrict() {
        let d = Vec2::new(5.0, -7.0);
        assert_eq!(PanAxis::Both.restrict(d), d);
        assert_eq!(PanAxis::Vertical.restrict(d), Vec2::new(0.0, -7.0));
        assert_eq!(PanAxis::Horizontal.restrict(d), Vec2::new(5.0, 0.0));
    }

    #[test]
    fn pan_axis_default_is_vertical() {
        assert_eq!(PanAxis::default(), PanAxis::Vertical);
    }

    #[test]
    fn color_from_hex_6() {
        let c = Color::from_hex("#ff8800").unwrap();
        assert_eq!(c, Color::from_rgba(255, 136, 0, 255));
    }

    #[test]
    fn color_from_hex_8() {
        let c = Color::from_hex("#161616aa").unwrap();
        assert_eq!(c, Color::from_rgba(0x16, 0x16, 0x16, 0xaa));
    }

    #[test]
    fn color_from_hex_no_hash() {
        let c = Color::from_hex("00ff00").unwrap();
        assert_eq!(c, Color::from_rgba(0, 255, 0, 255));
    }

    #[test]
    fn color_from_hex_invalid() {
        assert!(Color::from_hex("zzzzzz").is_none());
        assert!(Color::from_hex("#abc").is_none());
        assert!(Color::from_hex("").is_none());
        assert!(Color::from_hex("ééé").is_none());
    }

    #[test]
    fn color_to_f32_array() {
        let c = Color::from_rgba(255, 0, 51, 255);
        assert_eq!(c.to_f32_array(), [1.0, 0.0, 0.2, 1.0]);
    }

    #[test]
    fn color_opaque_forces_alpha() {
        let c = Color::from_rgba(1, 2, 3, 4).opaque();
        assert_eq!(c.a, 255);
        assert_eq!((c.r, c.g, c.b), (1, 2, 3));
    }

    #[test]
    fn snapshot_rewrites_ids_to_positions() {
        // Server buffer ids are 1-based and may have gaps.
        let snapshot = BufferSnapshot::from_records(vec![record(1, 0), record(2, 3), record(7, 5)]);
        let ids: Vec<usize> = snapshot.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        let buffer_ids: Vec<i64> = snapshot.records().iter().map(|r| r.buffer_id).collect();
        assert_eq!(buffer_ids, vec![1, 2, 7]);
    }

    #[test]
    fn snapshot_get_and_len() {
        let snapshot = BufferSnapshot::from_records(vec![record(1, 0), record(2, 1)]);
        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot.is_empty());
        assert_eq!(snapshot.get(1).map(|r| r.buffer_id), Some(2));
        assert!(snapshot.get(2).is_none());
        assert!(BufferSnapshot::default().is_empty());
    }

    #[test]
    fn snapshot_stats_counts() {
        let mut dirty = record(3, 2);
        dirty.is_dirty = true;
        dirty.pinning_backends = 1;
        let snapshot = BufferSnapshot::from_records(vec![record(1, 0), record(2, 4), dirty]);
        let stats = snapshot.stats();
        assert_eq!(
            stats,
            SnapshotStats {
                total: 3,
                in_use: 2,
                dirty: 1,
                pinned: 1,
            }
        );
    }

    #[test]
    fn relation_id_label_uses_sentinel() {
        let mut r = record(1, 0);
        assert_eq!(r.relation_id_label(), "?");
        r.relation_id = Some(16384);
        assert_eq!(r.relation_id_label(), "16384");
    }

    #[test]
    fn buffer_record_serialization() {
        let r = record(42, 3);
        let json = serde_json::to_string(&r).unwrap();
        let back: BufferRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
