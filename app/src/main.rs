//! `menu-app` entry point: loads settings, seeds the catalog, and runs the
//! command shell over stdin or a script file.

use std::ffi::OsString;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use menu_app::shell::Session;
use menu_app::{AppError, MenuSettings, load_catalog, open_parent};
use menu_catalog::ItemIdGenerator;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `menu-app` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "menu-app",
    about = "Browse, filter, and extend an in-memory restaurant menu",
    version
)]
struct CliArgs {
    /// Read commands from this file instead of stdin.
    #[arg(long, value_name = "path")]
    script: Option<PathBuf>,
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "menu-app failed");
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), AppError> {
    let args = CliArgs::parse();
    let settings = MenuSettings::load_from_iter([OsString::from("menu-app")]).map_err(|e| {
        AppError::Settings {
            message: e.to_string(),
        }
    })?;

    let catalog = load_catalog(&settings)?;
    let ids = ItemIdGenerator::new(Arc::new(DefaultClock));
    let mut session = Session::new(catalog, ids, settings.price_policy());
    info!(strict_price = settings.strict_price, "menu shell started");

    let mut out = io::stdout().lock();
    match args.script {
        Some(path) => {
            let (dir, file_name) = open_parent(&path)?;
            let script = dir.open(file_name).map_err(|source| AppError::Open {
                path: path.clone(),
                source,
            })?;
            session.run(BufReader::new(script), &mut out)
        }
        None => session.run(io::stdin().lock(), &mut out),
    }
}
