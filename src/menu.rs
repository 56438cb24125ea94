//! Interactive menu.
//!
//! ```text
//! 1. Join network cables
//! 2. Merge sorted lists
//! 3. Exit
//! ```
//!
//! Each task asks whether to enter data by hand or generate it, runs the
//! core routine, prints the result and waits for Enter before returning to
//! the main menu.

use std::io::{BufRead, Write};

use anyhow::Result;
use rand::Rng;

use crate::config::JoinerConfig;
use crate::console::{Console, Tone};
use crate::generate::{random_lengths, random_sorted_lists};
use crate::input::{self, MIN_CABLES, MIN_LISTS};
use crate::tasks::{self, format_list};

const TITLE: &str = "Network cable joining";
const BANNER_WIDTH: usize = 48;

/// How the data for a task is obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Source {
    Manual,
    Random,
}

pub struct Menu<'a, R, W, G> {
    console: Console<R, W>,
    config: &'a JoinerConfig,
    rng: G,
}

impl<'a, R: BufRead, W: Write, G: Rng> Menu<'a, R, W, G> {
    pub const fn new(console: Console<R, W>, config: &'a JoinerConfig, rng: G) -> Self {
        Self {
            console,
            config,
            rng,
        }
    }

    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Run until the user picks "Exit".
    ///
    /// # Errors
    /// Returns an error on I/O failure or when input runs out.
    pub fn run(&mut self) -> Result<()> {
        tracing::info!("interactive session started");
        loop {
            self.console.clear_screen()?;
            self.print_header()?;
            self.console.blank()?;
            self.console
                .line(Tone::Info, "Hi! This is the network cable joining exercise.")?;
            self.console.line(Tone::Success, "Choose an option:")?;
            self.console.line(Tone::Prompt, "1. Join network cables")?;
            self.console
                .line(Tone::Prompt, "2. Merge sorted lists (k-way merge)")?;
            self.console.line(Tone::Error, "3. Exit")?;

            match self.console.prompt("Choice: ")?.trim() {
                "1" => self.cables_task()?,
                "2" => self.lists_task()?,
                "3" => {
                    self.console
                        .line(Tone::Farewell, "Thanks for using the program! See you.")?;
                    tracing::info!("program finished");
                    return Ok(());
                }
                other => self.invalid_choice(other)?,
            }
        }
    }

    fn print_header(&mut self) -> Result<()> {
        let rule = format!("+{}+", "-".repeat(BANNER_WIDTH));
        self.console.line(Tone::Heading, &rule)?;
        self.console
            .line(Tone::Heading, format!("|{TITLE:^BANNER_WIDTH$}|"))?;
        self.console.line(Tone::Heading, &rule)
    }

    fn invalid_choice(&mut self, choice: &str) -> Result<()> {
        tracing::warn!(choice, "invalid menu choice");
        self.console
            .line(Tone::Error, "Invalid choice! Please try again.")
    }

    /// Ask manual-or-random. `None` means the answer was invalid.
    fn choose_source(&mut self, manual: &str, random: &str) -> Result<Option<Source>> {
        self.console.line(Tone::Success, "Choose how to provide the data:")?;
        self.console.line(Tone::Prompt, format!("1. {manual}"))?;
        self.console.line(Tone::Prompt, format!("2. {random}"))?;
        let source = match self.console.prompt("Choice: ")?.trim() {
            "1" => Some(Source::Manual),
            "2" => Some(Source::Random),
            other => {
                self.invalid_choice(other)?;
                None
            }
        };
        Ok(source)
    }

    fn wait_for_enter(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console
            .prompt("Press Enter to return to the main menu...")?;
        Ok(())
    }

    fn cables_task(&mut self) -> Result<()> {
        let Some(source) = self.choose_source(
            "Enter cable lengths by hand",
            "Generate cable lengths automatically",
        )?
        else {
            return Ok(());
        };

        let n = input::read_count(
            &mut self.console,
            &format!("Number of cables (at least {MIN_CABLES}): "),
            MIN_CABLES,
            "cables",
        )?;
        let lengths = match source {
            Source::Manual => input::read_lengths(&mut self.console, n)?,
            Source::Random => {
                let lengths = random_lengths(&mut self.rng, n, self.config.cables.length_range());
                self.console.line(
                    Tone::Success,
                    format!("Generated cable lengths: {}", format_list(&lengths)),
                )?;
                lengths
            }
        };

        match tasks::join_cables(lengths) {
            Ok(outcome) => tasks::render_cables(&mut self.console, &outcome)?,
            Err(e) => {
                tracing::warn!(error = %format!("{e:#}"), "cable task failed");
                self.console.line(Tone::Error, format!("{e:#}"))?;
            }
        }
        self.wait_for_enter()
    }

    fn lists_task(&mut self) -> Result<()> {
        let Some(source) = self.choose_source(
            "Enter sorted lists by hand",
            "Generate sorted lists automatically",
        )?
        else {
            return Ok(());
        };

        let k = input::read_count(
            &mut self.console,
            &format!("Number of sorted lists (at least {MIN_LISTS}): "),
            MIN_LISTS,
            "lists",
        )?;
        let lists = match source {
            Source::Manual => input::read_sorted_lists(&mut self.console, k)?,
            Source::Random => {
                let lists = random_sorted_lists(
                    &mut self.rng,
                    k,
                    self.config.lists.len_range(),
                    self.config.lists.value_range(),
                );
                let rendered: Vec<String> = lists.iter().map(|l| format_list(l)).collect();
                self.console.line(
                    Tone::Success,
                    format!("Generated sorted lists: [{}]", rendered.join(", ")),
                )?;
                lists
            }
        };

        let outcome = tasks::merge_lists(lists);
        tasks::render_merge(&mut self.console, &outcome)?;
        self.wait_for_enter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn run_script(script: &str) -> (Result<()>, String) {
        let config = JoinerConfig::default();
        let console = Console::new(script.as_bytes(), Vec::new(), false);
        let mut menu = Menu::new(console, &config, StdRng::seed_from_u64(9));
        let result = menu.run();
        let out = String::from_utf8(menu.into_console().into_output()).unwrap();
        (result, out)
    }

    #[test]
    fn exit_immediately() {
        let (result, out) = run_script("3\n");
        assert!(result.is_ok());
        assert!(out.contains(TITLE));
        assert!(out.contains("See you."));
    }

    #[test]
    fn manual_cables_session() {
        let (result, out) = run_script("1\n1\n4\n1\n2\n3\n4\n\n3\n");
        assert!(result.is_ok(), "{result:?}");
        assert!(out.contains("Step 1: joined 1 + 2 at cost 3."));
        assert!(out.contains("Minimum total cost of joining the cables: 19"));
        assert!(out.contains("Press Enter"));
    }

    #[test]
    fn random_cables_session() {
        let (result, out) = run_script("1\n2\n5\n\n3\n");
        assert!(result.is_ok(), "{result:?}");
        assert!(out.contains("Generated cable lengths: ["));
        assert!(out.contains("Step 4:"));
        assert!(!out.contains("Step 5:"));
    }

    #[test]
    fn manual_lists_session() {
        let (result, out) = run_script("2\n1\n3\n1 4 7\n2 3\n0 5 6\n\n3\n");
        assert!(result.is_ok(), "{result:?}");
        assert!(out.contains("Merged sorted list: [0, 1, 2, 3, 4, 5, 6, 7]"));
    }

    #[test]
    fn random_lists_session() {
        let (result, out) = run_script("2\n2\n3\n\n3\n");
        assert!(result.is_ok(), "{result:?}");
        assert!(out.contains("Generated sorted lists: [["));
        assert!(out.contains("Merged sorted list: ["));
    }

    #[test]
    fn invalid_choices_return_to_menu() {
        let (result, out) = run_script("9\n1\n7\n3\n");
        assert!(result.is_ok(), "{result:?}");
        assert_eq!(out.matches("Invalid choice!").count(), 2);
        assert_eq!(out.matches("Choose an option:").count(), 3);
    }

    #[test]
    fn cost_overflow_returns_to_menu() {
        let max = i64::MAX;
        let (result, out) = run_script(&format!("1\n1\n3\n{max}\n{max}\n{max}\n\n3\n"));
        assert!(result.is_ok(), "{result:?}");
        assert!(out.contains("could not join the cables"), "{out}");
        assert!(out.contains("overflow"), "{out}");
        assert!(!out.contains("Minimum total cost"));
        assert!(out.contains("See you."));
    }

    #[test]
    fn running_out_of_input_is_an_error() {
        let (result, _) = run_script("1\n1\n");
        assert!(result.is_err());
    }
}
