//! SQL text and row decoding for `pg_buffercache`.

use pgviz_common::types::UNKNOWN_RELATION;
use pgviz_common::BufferRecord;

/// Verifies the extension is installed in the connected database.
pub(crate) const EXTENSION_CHECK_SQL: &str =
    "SELECT 1 FROM pg_catalog.pg_extension WHERE extname = 'pg_buffercache'";

/// One row per shared buffer, ordered by buffer id.
///
/// Relation names resolve only for buffers of the current database (or
/// shared catalogs, `reldatabase = 0`); other buffers report `?`.
/// `DISTINCT ON` keeps one row per buffer even when a relfilenode matches
/// more than one `pg_class` entry.
pub(crate) const BUFFERCACHE_SQL: &str = "\
SELECT DISTINCT ON (buf.bufferid)
       buf.bufferid::int8 AS bufferid,
       coalesce(buf.usagecount, 0)::int4 AS usagecount,
       buf.relfilenode AS relfilenode,
       coalesce(cls.relname::text, '?') AS relname,
       coalesce(buf.isdirty, false) AS isdirty,
       coalesce(buf.pinning_backends, 0)::int4 AS pinning_backends
FROM pg_buffercache buf
LEFT JOIN pg_catalog.pg_class cls
       ON cls.relfilenode = buf.relfilenode
      AND buf.reldatabase IN (
          0,
          (SELECT oid FROM pg_catalog.pg_database WHERE datname = current_database())
      )
ORDER BY buf.bufferid";

/// Column values of one `pg_buffercache` row, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct BufferRow {
    pub bufferid: i64,
    pub usagecount: Option<i32>,
    pub relfilenode: Option<u32>,
    pub relname: Option<String>,
    pub isdirty: Option<bool>,
    pub pinning_backends: Option<i32>,
}

impl BufferRow {
    pub(crate) fn from_row(row: &postgres::Row) -> Result<Self, postgres::Error> {
        Ok(Self {
            bufferid: row.try_get("bufferid")?,
            usagecount: row.try_get("usagecount")?,
            relfilenode: row.try_get("relfilenode")?,
            relname: row.try_get("relname")?,
            isdirty: row.try_get("isdirty")?,
            pinning_backends: row.try_get("pinning_backends")?,
        })
    }

    /// Normalize into a record at snapshot position `id`.
    ///
    /// Absent or negative counts become 0; an absent name becomes `?`.
    pub(crate) fn into_record(self, id: usize) -> BufferRecord {
        let non_negative = |v: Option<i32>| v.and_then(|v| u32::try_from(v).ok()).unwrap_or(0);
        BufferRecord {
            id,
            buffer_id: self.bufferid,
            usage_count: non_negative(self.usagecount),
            relation_id: self.relfilenode,
            relation_name: self
                .relname
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| UNKNOWN_RELATION.to_string()),
            is_dirty: self.isdirty.unwrap_or(false),
            pinning_backends: non_negative(self.pinning_backends),
        }
    }
}
