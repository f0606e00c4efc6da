use std::path::PathBuf;

use clap::Parser;

/// pgviz: a live map of PostgreSQL's shared buffer cache.
#[derive(Parser, Debug)]
#[command(name = "pgviz", version, about)]
pub struct Args {
    /// Initial cell size in pixels (overrides `grid.cell_size`).
    #[arg(short = 's', long, value_parser = clap::value_parser!(u32).range(1..=512))]
    pub size: Option<u32>,

    /// libpq connection string or URI.
    ///
    /// Falls back to `database.conninfo`, then to `PGVIZ_CONNINFO`.
    #[arg(short = 'c', long)]
    pub conninfo: Option<String>,

    /// Show N synthetic buffers instead of connecting to a server.
    #[arg(long, value_name = "N", conflicts_with = "conninfo")]
    pub demo: Option<usize>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive, e.g. `pgviz=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Frames per second (overrides `performance.frame_rate`).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub fps: Option<u32>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_conninfo_flags() {
        let args = Args::try_parse_from([
            "pgviz",
            "--size",
            "4",
            "--conninfo",
            "host=localhost dbname=postgres",
        ])
        .unwrap();
        assert_eq!(args.size, Some(4));
        assert_eq!(args.conninfo.as_deref(), Some("host=localhost dbname=postgres"));
        assert!(args.demo.is_none());
        assert!(!args.print_config);
    }

    #[test]
    fn no_arguments_is_valid() {
        let args = Args::try_parse_from(["pgviz"]).unwrap();
        assert!(args.size.is_none());
        assert!(args.conninfo.is_none());
        assert!(args.fps.is_none());
    }

    #[test]
    fn zero_size_rejected() {
        assert!(Args::try_parse_from(["pgviz", "--size", "0"]).is_err());
    }

    #[test]
    fn fps_range_enforced() {
        assert!(Args::try_parse_from(["pgviz", "--fps", "61"]).is_err());
        let args = Args::try_parse_from(["pgviz", "--fps", "30"]).unwrap();
        assert_eq!(args.fps, Some(30));
    }

    #[test]
    fn demo_conflicts_with_conninfo() {
        let result = Args::try_parse_from(["pgviz", "--demo", "10", "--conninfo", "x"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_path_and_print() {
        let args =
            Args::try_parse_from(["pgviz", "--config", "/tmp/p.toml", "--print-config"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/p.toml")));
        assert!(args.print_config);
    }
}
