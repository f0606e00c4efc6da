//! Live `pg_buffercache` source over a blocking PostgreSQL session.

mod query;

use pgviz_common::{BufferSnapshot, DbError};
use postgres::{Client, NoTls};
use tracing::{debug, info, warn};

use crate::BufferSource;
use query::{BufferRow, BUFFERCACHE_SQL, EXTENSION_CHECK_SQL};

/// A connected session that reads `pg_buffercache` once per fetch.
pub struct PgBufferSource {
    client: Client,
    target: String,
}

impl PgBufferSource {
    /// Connect with a libpq-style connection string or URI.
    ///
    /// Fails with [`DbError::Connection`] if the server is unreachable or
    /// rejects the login, and with [`DbError::MissingExtension`] if
    /// `pg_buffercache` is not installed in the target database.
    pub fn connect(conninfo: &str) -> Result<Self, DbError> {
        let config: postgres::Config = conninfo
            .parse()
            .map_err(|e: postgres::Error| DbError::Connection(pg_message(&e)))?;
        let target = describe_target(&config);

        info!("connecting to {target}");
        let mut client = config
            .connect(NoTls)
            .map_err(|e| DbError::Connection(pg_message(&e)))?;

        let installed = client
            .query_opt(EXTENSION_CHECK_SQL, &[])
            .map_err(|e| DbError::Connection(pg_message(&e)))?
            .is_some();
        if !installed {
            return Err(DbError::MissingExtension(format!(
                "pg_buffercache is not installed in {target}; run CREATE EXTENSION pg_buffercache"
            )));
        }

        info!("connected to {target}");
        Ok(Self { client, target })
    }
}

impl BufferSource for PgBufferSource {
    fn fetch(&mut self) -> Result<BufferSnapshot, DbError> {
        let rows = self
            .client
            .query(BUFFERCACHE_SQL, &[])
            .map_err(|e| DbError::Query(pg_message(&e)))?;

        let records = rows
            .iter()
            .enumerate()
            .map(|(i, row)| BufferRow::from_row(row).map(|r| r.into_record(i)))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| DbError::Query(pg_message(&e)))?;

        debug!(buffers = records.len(), "fetched buffer cache snapshot");
        Ok(BufferSnapshot::from_records(records))
    }

    fn describe(&self) -> String {
        self.target.clone()
    }

    fn close(self: Box<Self>) {
        let target = self.target;
        match self.client.close() {
            Ok(()) => info!("closed session to {target}"),
            Err(e) => warn!("error closing session to {target}: {}", pg_message(&e)),
        }
    }
}

/// `user@host:port/dbname`, without the password.
fn describe_target(config: &postgres::Config) -> String {
    let host = config
        .get_hosts()
        .first()
        .map(|h| match h {
            postgres::config::Host::Tcp(name) => name.clone(),
            #[cfg(unix)]
            postgres::config::Host::Unix(path) => path.display().to_string(),
        })
        .unwrap_or_else(|| "localhost".to_string());
    let port = config.get_ports().first().copied().unwrap_or(5432);
    let user = config.get_user().unwrap_or("");
    let dbname = config.get_dbname().unwrap_or(user);

    if user.is_empty() {
        format!("{host}:{port}/{dbname}")
    } else {
        format!("{user}@{host}:{port}/{dbname}")
    }
}

/// Server-reported message when there is one, else the client error text.
fn pg_message(e: &postgres::Error) -> String {
    match e.as_db_error() {
        Some(db) => format!("{}: {}", db.severity(), db.message()),
        None => e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_omits_password() {
        let config: postgres::Config = "host=db.internal port=6543 user=viz password=hunter2 dbname=prod"
            .parse()
            .unwrap();
        let target = describe_target(&config);
        assert_eq!(target, "viz@db.internal:6543/prod");
        assert!(!target.contains("hunter2"));
    }

    #[test]
    fn target_defaults() {
        let config: postgres::Config = "host=localhost".parse().unwrap();
        assert_eq!(describe_target(&config), "localhost:5432/");
    }

    #[test]
    fn target_from_uri() {
        let config: postgres::Config = "postgresql://postgres@127.0.0.1/postgres".parse().unwrap();
        assert_eq!(describe_target(&config), "postgres@127.0.0.1:5432/postgres");
    }

    #[test]
    fn malformed_conninfo_is_connection_error() {
        let err = PgBufferSource::connect("host=localhost port=notaport").err().unwrap();
        assert!(matches!(err, DbError::Connection(_)));
    }
}
