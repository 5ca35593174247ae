use anyhow::{Context, Result};
use clap::Parser;
use quill::{app, config};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_appender::non_blocking::WorkerGuard;

const LOG_FILE_NAME: &str = "quill.log";

#[derive(Parser, Debug)]
#[command(name = "quill", version, about = "Single-document terminal text editor")]
struct Args {
    /// Config file to use instead of the discovered `quill.toml`
    #[arg(long = "config")]
    pub config: Option<PathBuf>,
    /// Store file to use instead of the configured one
    #[arg(long = "store")]
    pub store: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();

    let config = config::load_from(args.config)
        .context("loading configuration")?
        .with_store_path(args.store);
    let mut app = app::App::new(&config)
        .with_context(|| format!("opening store {}", config.store_path().display()))?;

    let mut terminal = ratatui::init();
    let app_result = app.run(&mut terminal);
    ratatui::restore();
    app_result.context("running editor")?;
    Ok(())
}

/// Log to a file; the terminal belongs to the UI.
fn configure_logging() -> Option<WorkerGuard> {
    let log_dir = Path::new(".");
    let log_path = log_dir.join(LOG_FILE_NAME);
    let stale_log = match std::fs::remove_file(&log_path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Some(e),
        _ => None,
    };

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(_) => {
            if let Some(e) = stale_log {
                tracing::warn!(target: "runtime", path = %log_path.display(), %e, "old_log_not_removed");
            }
            Some(guard)
        }
        // a global subscriber is already installed; dropping the guard stops the writer
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}
