//! Validated user input.
//!
//! The `parse_*` functions are pure and return an [`InputError`]. The
//! `read_*` functions wrap them in prompt loops: every rejected entry is
//! shown to the user, logged at `warn`, and asked for again. Running out of
//! input ends the loop with an error instead of spinning.

use std::io::{BufRead, Write};
use std::num::IntErrorKind;

use anyhow::Result;
use joiner_core::is_sorted_non_decreasing;

use crate::console::{Console, Tone};
use crate::error::InputError;

/// Fewest cables worth joining.
pub const MIN_CABLES: usize = 2;

/// Fewest sorted lists accepted for merging.
pub const MIN_LISTS: usize = 1;

// ---------------------------------------------------------------------------
// Parsers
// ---------------------------------------------------------------------------

fn parse_int(raw: &str) -> Result<i64, InputError> {
    let trimmed = raw.trim();
    trimmed.parse::<i64>().map_err(|e| {
        let input = trimmed.to_owned();
        match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                InputError::OutOfRange { input }
            }
            _ => InputError::NotANumber { input },
        }
    })
}

/// Parse a count that must be at least `minimum`.
///
/// # Errors
/// [`InputError::NotANumber`], [`InputError::OutOfRange`] or
/// [`InputError::BelowMinimum`].
pub fn parse_count(raw: &str, minimum: usize, what: &'static str) -> Result<usize, InputError> {
    let value = parse_int(raw)?;
    match usize::try_from(value) {
        Ok(n) if n >= minimum => Ok(n),
        _ => Err(InputError::BelowMinimum {
            what,
            value,
            minimum,
        }),
    }
}

/// Parse one strictly positive cable length.
///
/// # Errors
/// [`InputError::NotANumber`], [`InputError::OutOfRange`] or
/// [`InputError::NotPositive`].
pub fn parse_length(raw: &str) -> Result<u64, InputError> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(InputError::NotPositive { value: 0 }),
        Ok(n) => Ok(n),
        // Negative, too large, or not a number at all.
        Err(_) => Err(InputError::NotPositive {
            value: parse_int(raw)?,
        }),
    }
}

/// Parse a whitespace-separated, non-empty, non-decreasing list.
///
/// # Errors
/// [`InputError::NotANumber`] or [`InputError::OutOfRange`] for the first
/// bad token, [`InputError::Unsorted`], or [`InputError::EmptyList`].
pub fn parse_sorted_list(raw: &str) -> Result<Vec<i64>, InputError> {
    let values = raw
        .split_whitespace()
        .map(parse_int)
        .collect::<Result<Vec<i64>, _>>()?;
    if values.is_empty() {
        return Err(InputError::EmptyList);
    }
    if !is_sorted_non_decreasing(&values)
        && let Some(i) = values.windows(2).position(|w| w[0] > w[1])
    {
        return Err(InputError::Unsorted {
            position: i + 1,
            prev: values[i],
            next: values[i + 1],
        });
    }
    Ok(values)
}

// ---------------------------------------------------------------------------
// Prompt loops
// ---------------------------------------------------------------------------

/// Ask for a value until `parse` accepts it.
fn read_until_valid<R, W, T>(
    console: &mut Console<R, W>,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, InputError>,
) -> Result<T>
where
    R: BufRead,
    W: Write,
{
    loop {
        let line = console.prompt(prompt)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => {
                tracing::warn!(input = %line.trim(), error = %e, "rejected input");
                console.line(Tone::Error, &e)?;
            }
        }
    }
}

/// Ask for a count of at least `minimum` items.
///
/// # Errors
/// Fails only on I/O errors or end of input.
pub fn read_count<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    prompt: &str,
    minimum: usize,
    what: &'static str,
) -> Result<usize> {
    read_until_valid(console, prompt, |raw| parse_count(raw, minimum, what))
}

/// Ask for `n` cable lengths, one per prompt.
///
/// # Errors
/// Fails only on I/O errors or end of input.
pub fn read_lengths<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    n: usize,
) -> Result<Vec<u64>> {
    let mut lengths = Vec::with_capacity(n);
    for i in 1..=n {
        let length = read_until_valid(console, &format!("Length of cable {i}: "), parse_length)?;
        lengths.push(length);
    }
    tracing::info!(?lengths, "cable lengths entered");
    Ok(lengths)
}

/// Ask for `k` sorted lists, one line each.
///
/// # Errors
/// Fails only on I/O errors or end of input.
pub fn read_sorted_lists<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    k: usize,
) -> Result<Vec<Vec<i64>>> {
    let mut lists = Vec::with_capacity(k);
    for i in 1..=k {
        console.line(Tone::Success, format!("Enter sorted list {i}:"))?;
        let list = read_until_valid(
            console,
            "List elements separated by spaces: ",
            parse_sorted_list,
        )?;
        lists.push(list);
    }
    tracing::info!(?lists, "sorted lists entered");
    Ok(lists)
}
