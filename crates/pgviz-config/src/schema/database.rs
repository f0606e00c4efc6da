//! Database connection configuration types.

use serde::{Deserialize, Serialize};

/// Database configuration.
///
/// `conninfo` is a libpq connection string or URI, e.g.
/// `"host=localhost user=postgres dbname=postgres"`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    pub conninfo: String,
}
