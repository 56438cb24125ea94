//! Subcommand handlers: `connect`, `merge`, `menu`.

use anyhow::{Context, Result, bail};
use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::JoinerConfig;
use crate::console::{Console, Tone};
use crate::error::InputError;
use crate::format::OutputFormat;
use crate::generate::{random_lengths, random_sorted_lists};
use crate::input::{self, MIN_CABLES, MIN_LISTS};
use crate::menu::Menu;
use crate::tasks;

/// Arguments for `connect`
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Cable lengths (positive integers)
    #[arg(value_parser = input::parse_length, required_unless_present = "random")]
    pub lengths: Vec<u64>,

    /// Generate this many random lengths instead
    #[arg(long, value_name = "N", value_parser = parse_cable_count, conflicts_with = "lengths")]
    pub random: Option<usize>,

    /// Seed for --random, for reproducible runs
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for `merge`
#[derive(Args, Debug)]
pub struct MergeArgs {
    /// A sorted list, e.g. --list "1 4 7" (repeatable)
    #[arg(long = "list", value_name = "VALUES")]
    pub lists: Vec<String>,

    /// Generate this many random sorted lists instead
    #[arg(long, value_name = "K", value_parser = parse_list_count, conflicts_with = "lists")]
    pub random: Option<usize>,

    /// Seed for --random, for reproducible runs
    #[arg(long, requires = "random")]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn parse_cable_count(raw: &str) -> Result<usize, InputError> {
    input::parse_count(raw, MIN_CABLES, "cables")
}

fn parse_list_count(raw: &str) -> Result<usize, InputError> {
    input::parse_count(raw, MIN_LISTS, "lists")
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Collect the lengths for `connect`, from arguments or the generator.
///
/// # Errors
/// Fails when neither lengths nor `--random` were given.
pub fn connect_lengths(args: &ConnectArgs, config: &JoinerConfig) -> Result<Vec<u64>> {
    if let Some(n) = args.random {
        let mut rng = seeded_rng(args.seed);
        return Ok(random_lengths(&mut rng, n, config.cables.length_range()));
    }
    if args.lengths.is_empty() {
        bail!("no cable lengths given.\n  To fix: pass lengths, e.g. `cable-joiner connect 1 2 3`, or use --random N");
    }
    Ok(args.lengths.clone())
}

/// Collect the lists for `merge`, from `--list` values or the generator.
///
/// # Errors
/// Fails when a `--list` value is not a non-empty sorted list of integers.
pub fn merge_inputs(args: &MergeArgs, config: &JoinerConfig) -> Result<Vec<Vec<i64>>> {
    if let Some(k) = args.random {
        let mut rng = seeded_rng(args.seed);
        return Ok(random_sorted_lists(
            &mut rng,
            k,
            config.lists.len_range(),
            config.lists.value_range(),
        ));
    }
    args.lists
        .iter()
        .enumerate()
        .map(|(i, raw)| {
            input::parse_sorted_list(raw)
                .with_context(|| format!("invalid --list #{}: \"{raw}\"", i + 1))
        })
        .collect()
}

/// `cable-joiner connect`
///
/// # Errors
/// Returns an error for missing input, core failures, or output failures.
pub fn connect(args: &ConnectArgs, config: &JoinerConfig) -> Result<()> {
    let lengths = connect_lengths(args, config)?;
    let outcome = tasks::join_cables(lengths)?;
    match args.format {
        OutputFormat::Json => println!("{}", args.format.serialize(&outcome)?),
        OutputFormat::Text => {
            let mut console = Console::stdio();
            if args.random.is_some() {
                console.line(
                    Tone::Success,
                    format!("Generated cable lengths: {}", tasks::format_list(&outcome.lengths)),
                )?;
            }
            tasks::render_cables(&mut console, &outcome)?;
        }
    }
    Ok(())
}

/// `cable-joiner merge`
///
/// # Errors
/// Returns an error for invalid lists or output failures.
pub fn merge(args: &MergeArgs, config: &JoinerConfig) -> Result<()> {
    let lists = merge_inputs(args, config)?;
    let outcome = tasks::merge_lists(lists);
    match args.format {
        OutputFormat::Json => println!("{}", args.format.serialize(&outcome)?),
        OutputFormat::Text => {
            let mut console = Console::stdio();
            tasks::render_merge(&mut console, &outcome)?;
        }
    }
    Ok(())
}

/// `cable-joiner` / `cable-joiner menu`
///
/// # Errors
/// Returns an error on I/O failure or when stdin closes mid-dialogue.
pub fn menu(config: &JoinerConfig) -> Result<()> {
    let mut menu = Menu::new(Console::stdio(), config, StdRng::from_os_rng());
    menu.run()
}
