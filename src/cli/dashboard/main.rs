use clap::{App, Arg, ArgMatches, SubCommand};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use validator_dashboard::{repositories::FixtureSource, views::NetworkTab, DashboardService};

mod commands;
mod config;
mod types;

use commands::DashboardCommands;
use config::Config;
use types::{NodeFilter, OutputFormat};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let matches = App::new("Validator Dashboard")
        .version("0.1.0")
        .author("PeoChain Team")
        .about("Validator statistics, networks and snapshots in the terminal")
        .arg(
            Arg::with_name("format")
                .short("f")
                .long("format")
                .value_name("FORMAT")
                .help("Output format")
                .possible_values(&["table", "json"])
                .takes_value(true)
                .global(true),
        )
        .arg(
            Arg::with_name("retries")
                .short("r")
                .long("retries")
                .value_name("COUNT")
                .help("Retries after a failed fetch")
                .takes_value(true)
                .global(true),
        )
        .arg(
            Arg::with_name("simulate-failures")
                .long("simulate-failures")
                .value_name("COUNT")
                .help("Make the first COUNT data source loads fail")
                .takes_value(true)
                .global(true),
        )
        .subcommand(SubCommand::with_name("summary").about("Show the validator summary"))
        .subcommand(
            SubCommand::with_name("nodes")
                .about("List validator nodes")
                .arg(
                    Arg::with_name("status")
                        .short("s")
                        .long("status")
                        .value_name("STATUS")
                        .help("Only nodes with this status")
                        .possible_values(&["active", "jailed", "tombstoned"])
                        .takes_value(true),
                )
                .arg(
                    Arg::with_name("network")
                        .short("n")
                        .long("network")
                        .value_name("NAME")
                        .help("Only nodes on this network")
                        .takes_value(true),
                ),
        )
        .subcommand(
            SubCommand::with_name("networks")
                .about("List networks")
                .arg(
                    Arg::with_name("type")
                        .short("t")
                        .long("type")
                        .value_name("TYPE")
                        .help("Only networks of this type")
                        .possible_values(&["all", "mainnet", "testnet"])
                        .takes_value(true),
                ),
        )
        .subcommand(SubCommand::with_name("snapshots").about("List downloadable snapshots"))
        .get_matches();

    // Load configuration
    let config = Config::load()?;

    let (name, sub_matches) = match matches.subcommand() {
        (name, Some(sub_matches)) => (name, sub_matches),
        _ => {
            println!("No subcommand specified. Use --help for usage information.");
            return Ok(());
        }
    };

    let format = match global_value(&matches, sub_matches, "format") {
        Some(value) => value.parse::<OutputFormat>()?,
        None => config.default_format,
    };
    let retries = match global_value(&matches, sub_matches, "retries") {
        Some(value) => value.parse::<u32>()?,
        None => config.retries,
    };
    let failures = match global_value(&matches, sub_matches, "simulate-failures") {
        Some(value) => value.parse::<u32>()?,
        None => 0,
    };

    let service = DashboardService::new(Arc::new(FixtureSource::failing_for(failures)), config.fetch);
    let commands = DashboardCommands::new(service, format, retries);

    let output = match name {
        "summary" => commands.summary().await?,
        "nodes" => {
            let filter = NodeFilter {
                status: sub_matches.value_of("status").map(str::parse).transpose()?,
                network: sub_matches.value_of("network").map(str::to_string),
            };
            commands.nodes(&filter).await?
        }
        "networks" => {
            let tab = match sub_matches.value_of("type") {
                Some(value) => value.parse::<NetworkTab>()?,
                None => NetworkTab::All,
            };
            commands.networks(tab).await?
        }
        "snapshots" => commands.snapshots().await?,
        other => {
            println!("Unknown subcommand {other}. Use --help for usage information.");
            return Ok(());
        }
    };

    print!("{output}");
    Ok(())
}

// Global flags may be given before or after the subcommand
fn global_value<'a>(matches: &'a ArgMatches, sub_matches: &'a ArgMatches, name: &str) -> Option<&'a str> {
    sub_matches.value_of(name).or_else(|| matches.value_of(name))
}
