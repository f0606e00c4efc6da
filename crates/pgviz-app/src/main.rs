mod app_state;
mod cli;
mod frame_loop;

use std::process::ExitCode;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use pgviz_common::{Action, DbError, PgvizError};
use pgviz_config::PgvizConfig;
use pgviz_db::{BufferSource, DemoBufferSource, PgBufferSource};
use pgviz_platform::KeybindRegistry;

/// Environment variable consulted when neither the CLI nor the config
/// supplies a connection string.
const CONNINFO_ENV: &str = "PGVIZ_CONNINFO";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("panic: {info}");
        eprintln!("\n--- pgviz crashed ---");
        default_hook(info);
    }));
}

fn init_logging(directive: &str) {
    let filter = EnvFilter::from_default_env();
    let filter = match directive.parse() {
        Ok(d) => filter.add_directive(d),
        Err(e) => {
            eprintln!("pgviz: ignoring log level {directive:?}: {e}");
            filter.add_directive(LevelFilter::INFO.into())
        }
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// First non-blank of: `--conninfo`, `database.conninfo`, `$PGVIZ_CONNINFO`.
fn resolve_conninfo(cli: Option<&str>, config: &str, env: Option<&str>) -> Option<String> {
    [cli, Some(config), env]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

fn open_source(args: &cli::Args, config: &PgvizConfig) -> Result<Box<dyn BufferSource>, DbError> {
    if let Some(count) = args.demo {
        tracing::info!("Using synthetic source with {count} buffers");
        return Ok(Box::new(DemoBufferSource::new(count)));
    }

    let env = std::env::var(CONNINFO_ENV).ok();
    let conninfo = resolve_conninfo(
        args.conninfo.as_deref(),
        &config.database.conninfo,
        env.as_deref(),
    )
    .ok_or_else(|| {
        DbError::Connection(format!(
            "no connection string; pass --conninfo, set database.conninfo or {CONNINFO_ENV}"
        ))
    })?;

    Ok(Box::new(PgBufferSource::connect(&conninfo)?))
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Load config before logging so `logging.level` can take effect
    let loaded = pgviz_config::load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive(),
        (None, Err(_)) => PgvizConfig::default().logging.level.directive(),
    };
    init_logging(&directive);
    install_panic_hook();

    tracing::info!("pgviz v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {}", path.display());
    }
    let mut config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        PgvizConfig::default()
    });
    if let Some(size) = args.size {
        config.grid.cell_size = size;
    }
    if let Some(fps) = args.fps {
        config.performance.frame_rate = fps;
    }

    if args.print_config {
        println!("{}", pgviz_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    match run(&args, config) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("pgviz: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Open the source, run the window until it closes, and return the exit code.
fn run(args: &cli::Args, config: PgvizConfig) -> pgviz_common::Result<i32> {
    // Connect before any window exists so a bad conninfo never flashes one
    let source = open_source(args, &config)?;

    let registry = KeybindRegistry::from_config(&config.keybinds);
    tracing::info!("Keybind registry loaded ({} bindings)", registry.len());
    if let Some(key) = registry.keybind_for_action(Action::Quit) {
        tracing::info!("Press {key} or close the window to quit");
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            source.close();
            return Err(PgvizError::Other(format!("failed to create event loop: {e}")));
        }
    };
    let mut app = app_state::PgvizApp::new(config, registry, source);

    tracing::info!("Entering event loop");
    let result = event_loop.run_app(&mut app);
    app.shutdown();
    result.map_err(|e| PgvizError::Other(format!("event loop error: {e}")))?;

    Ok(app.exit_code())
}
