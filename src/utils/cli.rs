//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::demo::{register_versions, seed_users};
use crate::server::api::state::App as AppState;
use crate::server::app::serve;
use crate::utils::config::Config;
use crate::versioning::{Metadata, VersionError, VersionManager};
use clap::Parser;
use serde_json::Value;
use std::path::PathBuf;
use tracing;
use tracing_subscriber::EnvFilter;

/// Pinned serves date-pinned versions of an API
/// from a single, current data representation.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Pinned cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Serve the versioned users API
    Serve {
        /// Port on which to serve the API. Overrides the config file.
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Print the registered versions, most recent first
    Versions,
    /// Print the users as a client pinned to `date` sees them
    Render {
        /// Version to render. Defaults to the latest version.
        #[arg(short, long)]
        date: Option<String>,
    },
}

///
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Load the config file, exiting on failure.
fn load_config(path: Option<&PathBuf>) -> Config {
    let Some(config_path) = path else {
        return Config::default();
    };
    Config::load(config_path).unwrap_or_else(|err| {
        tracing::error!(
            "error: could not load config file `{}`: {err}",
            config_path.display()
        );
        std::process::exit(1);
    })
}

/// Build the version registry, exiting on failure.
fn load_manager(config: &Config) -> VersionManager {
    let mut manager = config.manager();
    if let Err(err) = register_versions(&mut manager) {
        tracing::error!("error: could not register API versions: {err}");
        std::process::exit(1);
    }
    tracing::debug!("Registered {} versions", manager.len());
    manager
}

/// Print the version timeline.
#[allow(clippy::print_stdout)]
fn print_versions(manager: &VersionManager) {
    for version in manager.iter() {
        let deprecated = if version.deprecated { " (deprecated)" } else { "" };
        let description = version.description.as_deref().unwrap_or_default();
        println!("{version}{deprecated}  {description}");
        for change in &version.changes {
            println!("    - {}", change.description);
        }
    }
}

/// Print the demo users at `label`, or at the latest version.
#[allow(clippy::print_stdout)]
fn render(manager: &VersionManager, label: Option<&str>) {
    let request = label.map_or_else(Metadata::new, |found| {
        Metadata::new().with_query(&manager.settings().query, found)
    });
    let version = match manager.resolve(&request) {
        Ok(version) => version,
        Err(VersionError::NoVersionSupplied) => manager.latest(),
        Err(VersionError::VersionDeprecated(version)) => {
            tracing::warn!("Version {version} is deprecated");
            version
        }
        Err(err) => {
            tracing::error!("error: {err}");
            std::process::exit(1);
        }
    };
    let users: Vec<Value> = seed_users()
        .iter()
        .map(|user| Value::Object(manager.apply(&version, user)))
        .collect();
    match serde_json::to_string_pretty(&users) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            tracing::error!("error: could not encode users: {err}");
            std::process::exit(1);
        }
    }
}

/// Main entrypoint to application
///
/// # Errors
/// Errors if the server cannot bind to the configured address.
pub fn run() -> std::io::Result<()> {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref());
    let manager = load_manager(&config);

    match cli.subcommands {
        Subcommands::Serve { port } => {
            if let Some(found_port) = port {
                config.server.port = found_port;
            }
            serve(AppState::new(manager, seed_users()), config.server)
        }
        Subcommands::Versions => {
            print_versions(&manager);
            Ok(())
        }
        Subcommands::Render { date } => {
            render(&manager, date.as_deref());
            Ok(())
        }
    }
}
