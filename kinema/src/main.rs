//! Kinema console
//!
//! Settings come from `KINEMA_CONFIG`, `KINEMA_COLUMNS`,
//! `KINEMA_COLUMN_WIDTH` and `KINEMA_LOG`. Logs go to stderr so prompts
//! on stdout stay clean.

use kinema::{App, Console, Settings, TerminalRenderer};
use kinema_core::KinemaError;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_logging(directive: &str) {
    let (filter, rejected) = match EnvFilter::try_new(directive) {
        Ok(filter) => (filter, None),
        Err(e) => (EnvFilter::new(DEFAULT_LOG_FILTER), Some(e)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    if let Some(e) = rejected {
        tracing::warn!(directive, "invalid log filter, using '{}': {}", DEFAULT_LOG_FILTER, e);
    }
}

fn fail(err: &KinemaError) -> ExitCode {
    tracing::error!(code = %err.code, "{}", err.message);
    eprintln!("{}", err);
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(err) => {
            init_logging(DEFAULT_LOG_FILTER);
            return fail(&err);
        }
    };
    init_logging(&settings.log_filter);
    tracing::info!(version = VERSION, columns = settings.columns, "kinema started");

    let app = match App::new(settings) {
        Ok(app) => app,
        Err(err) => return fail(&err),
    };

    let mut console = Console::stdio();
    let renderer = TerminalRenderer::new();
    match app.run(&mut console, &renderer) {
        Ok(()) => {
            tracing::info!("kinema stopped");
            ExitCode::SUCCESS
        }
        Err(err) => fail(&err),
    }
}
