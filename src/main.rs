use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use joiner::commands::{self, ConnectArgs, MergeArgs};
use joiner::config::{DEFAULT_CONFIG_FILE, JoinerConfig};
use joiner::telemetry;

/// Console exercises on a min-priority queue
///
/// Two routines share one heap:
///
///   connect   join cables two at a time, always the two shortest, and
///             report the minimum total cost (cost of a join = sum of the
///             two lengths)
///   merge     merge several sorted lists into one sorted list (k-way merge)
///
/// Run without a subcommand for the interactive menu.
///
/// QUICK START:
///
///   cable-joiner connect 1 2 3 4
///   cable-joiner connect --random 8 --seed 7 --format json
///   cable-joiner merge --list "1 4 7" --list "2 3" --list "0 5 6"
///
/// Log lines go to app.log unless CABLE_JOINER_LOG says otherwise
/// ("stderr", "off", or a file path).
#[derive(Parser)]
#[command(name = "cable-joiner")]
#[command(version, about)]
#[command(propagate_version = true)]
#[command(after_help = "See 'cable-joiner <command> --help' for more information on a specific command.")]
struct Cli {
    /// Configuration file (TOML). Missing file means defaults.
    #[arg(long, global = true, env = "CABLE_JOINER_CONFIG", default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Join cables at minimum total cost
    ///
    /// Give the lengths as arguments, or let them be generated with
    /// --random. Every step is printed, followed by the total.
    Connect(ConnectArgs),

    /// Merge sorted lists into one sorted list
    ///
    /// Each --list is a space-separated list in non-decreasing order.
    /// With --random, lists are generated using the [lists] config ranges.
    Merge(MergeArgs),

    /// Start the interactive menu (the default)
    Menu,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = JoinerConfig::load(&cli.config)?;
    let sink = telemetry::init(&config.log);
    tracing::debug!(?sink, config = %cli.config.display(), "logging initialized");

    match cli.command {
        Some(Commands::Connect(ref args)) => commands::connect(args, &config),
        Some(Commands::Merge(ref args)) => commands::merge(args, &config),
        Some(Commands::Menu) | None => commands::menu(&config),
    }
}
