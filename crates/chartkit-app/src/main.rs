mod cli;

use chartkit_common::{ChartkitError, ConfigError};
use chartkit_config::{create_example_theme, load_from_path, resolve_theme_path, ThemeWatcher};
use chartkit_style::{generate, style_element, ThemeConfig};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{error, info, warn};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Exit status when the theme produced no stylesheet.
const EXIT_NOTHING_GENERATED: u8 = 2;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Logs go to stderr; stdout carries only CSS.
    let log_directive = args.log_level.as_deref().unwrap_or("info");
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            ),
        )
        .init();

    match run(&args).await {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &cli::Args) -> chartkit_common::Result<ExitCode> {
    let path = theme_path(args)?;
    let status = render(args, &path);
    if !args.watch {
        return Ok(status);
    }

    let watcher = ThemeWatcher::new(path.clone())?;
    let (tx, rx) = broadcast::channel(4);
    let task = tokio::spawn(async move { watcher.watch(tx).await });

    let status = rerender_on_change(args, &path, rx, status).await;

    task.await
        .map_err(|e| ChartkitError::Other(format!("theme watcher task failed: {e}")))??;
    Ok(status)
}

/// Re-render on every change signal until the channel closes.
///
/// Returns the status of the most recent render.
async fn rerender_on_change(
    args: &cli::Args,
    path: &Path,
    mut rx: broadcast::Receiver<()>,
    mut status: ExitCode,
) -> ExitCode {
    loop {
        match rx.recv().await {
            Ok(()) | Err(RecvError::Lagged(_)) => status = render(args, path),
            Err(RecvError::Closed) => return status,
        }
    }
}

/// Resolve the theme file, writing the example theme first under `--init`.
fn theme_path(args: &cli::Args) -> Result<PathBuf, ConfigError> {
    if !args.init {
        return resolve_theme_path(&args.theme);
    }

    let mut path = PathBuf::from(&args.theme);
    if path.extension().is_none() {
        path.set_extension("toml");
    }
    if path.exists() {
        info!("{} already exists, leaving it untouched", path.display());
    } else {
        create_example_theme(&path)?;
    }
    Ok(path)
}

/// Load the theme and print the stylesheet for `args.scope`.
fn render(args: &cli::Args, path: &Path) -> ExitCode {
    let config = match load_from_path(path) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match stylesheet(args, &config) {
        Some(css) => {
            println!("{css}");
            ExitCode::SUCCESS
        }
        None => {
            warn!("nothing to render for chart '{}'", args.scope);
            ExitCode::from(EXIT_NOTHING_GENERATED)
        }
    }
}

fn stylesheet(args: &cli::Args, config: &ThemeConfig) -> Option<String> {
    if args.wrap {
        style_element(&args.scope, config)
    } else {
        generate(&args.scope, config)
    }
}
