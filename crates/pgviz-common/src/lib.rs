pub mod actions;
pub mod errors;
pub mod types;

pub use actions::Action;
pub use errors::{ConfigError, DbError, PgvizError, PlatformError};
pub use types::{BufferRecord, BufferSnapshot, Color, PanAxis, SnapshotStats, Vec2};

pub type Result<T> = std::result::Result<T, PgvizError>;
