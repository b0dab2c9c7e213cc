mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use transport_catalogue_cli::output::OutputFormat;

use crate::commands::route::RouteCommandArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Transport catalogue statistics and route queries")]
struct Cli {
    /// Input document (JSON). Reads stdin when omitted or `-`.
    #[arg(long, short = 'i', global = true)]
    input: Option<PathBuf>,

    /// Output format for single-query commands.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer every stat request in the document and print a JSON array.
    Process,
    /// Show statistics for one bus line.
    Bus {
        /// Bus name.
        #[arg(long)]
        name: String,
    },
    /// List the buses serving one stop.
    Stop {
        /// Stop name.
        #[arg(long)]
        name: String,
    },
    /// Compute the fastest trip between two stops.
    Route {
        /// Starting stop name.
        #[arg(long = "from")]
        from: String,
        /// Destination stop name.
        #[arg(long = "to")]
        to: String,
        /// Override the bus wait time in minutes.
        #[arg(long)]
        wait_time: Option<u32>,
        /// Override the bus velocity in km/h.
        #[arg(long)]
        velocity: Option<f64>,
    },
    /// Print the stop and bus snapshot used for map rendering as JSON.
    MapData,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let document = commands::load_document(cli.input.as_deref())?;

    match cli.command {
        Command::Process => commands::process::handle_process_command(&document),
        Command::Bus { name } => commands::stats::handle_bus_command(&document, cli.format, &name),
        Command::Stop { name } => {
            commands::stats::handle_stop_command(&document, cli.format, &name)
        }
        Command::Route {
            from,
            to,
            wait_time,
            velocity,
        } => {
            let args = RouteCommandArgs {
                from,
                to,
                wait_time,
                velocity,
            };
            commands::route::handle_route_command(&document, cli.format, &args)
        }
        Command::MapData => commands::map::handle_map_data_command(&document),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
