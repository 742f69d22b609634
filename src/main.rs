mod classify;
mod config;
mod consts;
mod display;
mod events;
mod logging;
mod monitor;
mod network;
mod pretty;
mod report;
mod runtime;
mod session;
mod student;
mod ui;
mod workers;

use crate::config::{Config, get_config_path, normalize_server_url};
use crate::consts::cli_consts::server::URL_ENV_VAR;
use crate::display::{ConsoleSurface, refresh};
use crate::monitor::{MonitorClient, StudentSource};
use crate::pretty::{print_cmd_error, print_cmd_info, print_friendly_error_header};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use log::{debug, warn};
use std::path::Path;
use std::{error::Error, io};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Live classroom attention dashboard
struct Args {
    /// Base URL of the monitor server, e.g. http://10.84.87.149:8000
    #[arg(long, global = true, value_name = "URL")]
    server_url: Option<String>,

    /// Milliseconds between polls of the students endpoint
    #[arg(long, global = true, value_name = "MS")]
    interval_ms: Option<u64>,

    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Poll the server and show the live dashboard
    Watch {
        /// Print snapshots to stdout instead of running the terminal dashboard
        #[arg(long, default_value_t = false)]
        headless: bool,

        /// Disable background colors in the dashboard
        #[arg(long = "no-background-color", action = clap::ArgAction::SetTrue)]
        no_background_color: bool,
    },
    /// Fetch one snapshot and print it
    Once,
    /// End the class session and print the session report
    EndClass,
    /// Save the server address (and interval, if given) to the config file
    SetServer {
        /// Base URL of the monitor server
        #[arg(value_name = "URL")]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    logging::init_stderr_logger();

    let config_path = get_config_path()?;

    let file_config = if config_path.exists() {
        match Config::load_from_file(&config_path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(
                    "Ignoring unreadable config file {}: {}",
                    config_path.display(),
                    e
                );
                None
            }
        }
    } else {
        None
    };

    let env_url = std::env::var(URL_ENV_VAR).ok();
    let mut config = Config::resolve(args.server_url, args.interval_ms, env_url, file_config);
    // set-server replaces the address, so a broken saved one must not block it
    if !matches!(args.command, Command::SetServer { .. }) {
        config.server_url = match normalize_server_url(&config.server_url) {
            Ok(url) => url,
            Err(e) => {
                print_cmd_error!("Invalid server address", "{}", e);
                return Err(e.into());
            }
        };
    }
    debug!(
        "Using server {} (poll every {} ms)",
        config.server_url, config.poll_interval_ms
    );
    run_command(args.command, config, &config_path).await
}

async fn run_command(
    command: Command,
    config: Config,
    config_path: &Path,
) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Watch {
            headless,
            no_background_color,
        } => {
            let session = setup_session(&config)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, !no_background_color).await
            }
        }
        Command::Once => {
            let client = MonitorClient::new(config.server_url.clone())?;
            let mut surface = ConsoleSurface::new(io::stdout());
            match refresh(&client, &mut surface).await {
                Ok(_) => {
                    surface.finish()?;
                    Ok(())
                }
                Err(e) => {
                    print_friendly_error_header(client.base_url());
                    print_cmd_error!("Failed to fetch students", "{}", e);
                    Err(e.into())
                }
            }
        }
        Command::EndClass => {
            let client = MonitorClient::new(config.server_url.clone())?;
            match client.end_class().await {
                Ok(report) => {
                    print_cmd_info!("Class ended", "Session report from {}", config.server_url);
                    report.write_to(&mut io::stdout())?;
                    Ok(())
                }
                Err(e) => {
                    print_friendly_error_header(client.base_url());
                    print_cmd_error!("Failed to end class", "{}", e);
                    Err(e.into())
                }
            }
        }
        Command::SetServer { url } => {
            let url = match normalize_server_url(&url) {
                Ok(url) => url,
                Err(e) => {
                    print_cmd_error!("Invalid server address", "{}", e);
                    return Err(e.into());
                }
            };
            let config = Config::new(url, config.poll_interval_ms);
            config
                .save(config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!(
                "Saved server {} (poll every {} ms) to {}",
                config.server_url,
                config.poll_interval_ms,
                config_path.display()
            );
            Ok(())
        }
    }
}
