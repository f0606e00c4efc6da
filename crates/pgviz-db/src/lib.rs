//! Buffer cache sources for pgviz.
//!
//! A [`BufferSource`] yields one [`BufferSnapshot`] per frame. The live
//! implementation reads `pg_buffercache` over a blocking PostgreSQL session;
//! the demo implementation synthesizes records for running without a server.

pub mod demo;
pub mod pg;

pub use demo::DemoBufferSource;
pub use pg::PgBufferSource;

use pgviz_common::{BufferSnapshot, DbError};

/// Supplier of buffer cache snapshots.
///
/// `fetch` blocks the caller until the snapshot is complete.
pub trait BufferSource {
    /// Read the current state of the shared buffer cache, ordered by buffer id.
    fn fetch(&mut self) -> Result<BufferSnapshot, DbError>;

    /// Short human-readable description of where records come from.
    /// Must not include credentials.
    fn describe(&self) -> String;

    /// End the session. Errors while closing are logged, not returned.
    fn close(self: Box<Self>);
}
