//! PVS-Link CLI - command-line interface for the local REST API of a PVS gateway.
//!
//! Every invocation makes one request, prints the response and exits with a
//! code that tells usage, network, gateway and data errors apart.

mod cli;
mod commands;
mod error;
mod input;
mod output;

use std::time::Duration;

use clap::error::ErrorKind;
use clap::Parser;
use pvs_link_core::{ClientConfig, GatewayClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::{exit_codes, CliError};
use output::get_formatter;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(exit_codes::INVALID_ARGS);
            }
        },
    };

    init_logging(cli.verbose);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: {}", CliError::Io(e));
            std::process::exit(exit_codes::GENERAL_ERROR);
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(printed) => {
            println!("{}", printed);
            std::process::exit(exit_codes::SUCCESS);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<String, CliError> {
    let client = GatewayClient::new(ClientConfig {
        base_url: cli.base_url,
        timeout: Duration::from_millis(cli.timeout),
    })?;
    debug!(base_url = client.base_url(), timeout_ms = cli.timeout, "gateway client ready");
    let formatter = get_formatter(cli.output_format);
    let output = formatter.as_ref();

    match cli.command {
        Commands::Certificate(args) => commands::run_certificate(args, &client, output).await,
        Commands::Communication(args) => commands::run_communication(args, &client, output).await,
        Commands::Device(args) => commands::run_device(args, &client, output).await,
        Commands::Firmware(args) => commands::run_firmware(args, &client, output).await,
        Commands::GridProfile(args) => commands::run_grid_profile(args, &client, output).await,
        Commands::Inverter(args) => commands::run_inverter(args, &client, output).await,
        Commands::Network(args) => commands::run_network(args, &client, output).await,
        Commands::Pcs(args) => commands::run_pcs(args, &client, output).await,
        Commands::Ping(args) => commands::run_ping(args, &client, output).await,
        Commands::Status(args) => commands::run_status(args, &client, output).await,
        Commands::SystemHealth(args) => commands::run_system_health(args, &client, output).await,
        Commands::Traceroute(args) => commands::run_traceroute(args, &client, output).await,
        Commands::Tunnel(args) => commands::run_tunnel(args, &client, output).await,
        Commands::Whitelist(args) => commands::run_whitelist(args, &client, output).await,
    }
}
