//! Input validation errors for the interactive shell.
//!
//! Defines [`InputError`], returned by the parsers in [`crate::input`].
//! Messages are shown to the user verbatim right before re-prompting, so
//! each one says what was wrong and what to enter instead.

use std::fmt;

// ---------------------------------------------------------------------------
// InputError
// ---------------------------------------------------------------------------

/// A rejected line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    /// The entry is not an integer.
    NotANumber {
        /// The offending text, trimmed.
        input: String,
    },

    /// An integer too large (or too negative) to be stored.
    OutOfRange {
        /// The offending text, trimmed.
        input: String,
    },

    /// A cable length of zero or less.
    NotPositive {
        /// The value that was entered.
        value: i64,
    },

    /// A count below the allowed minimum.
    BelowMinimum {
        /// What was being counted (e.g. "cables").
        what: &'static str,
        /// The value that was entered.
        value: i64,
        /// The smallest accepted value.
        minimum: usize,
    },

    /// A list whose elements are not in non-decreasing order.
    Unsorted {
        /// Zero-based position of the first element smaller than its
        /// predecessor.
        position: usize,
        /// The element before `position`.
        prev: i64,
        /// The element at `position`.
        next: i64,
    },

    /// A list with no elements.
    EmptyList,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber { input } if input.is_empty() => {
                write!(f, "nothing was entered. Enter a whole number.")
            }
            Self::NotANumber { input } => {
                write!(f, "'{input}' is not a whole number. Enter digits only, e.g. 42.")
            }
            Self::OutOfRange { input } => {
                write!(f, "'{input}' is out of range. Enter a smaller number.")
            }
            Self::NotPositive { value } => {
                write!(f, "cable length must be a positive number, got {value}.")
            }
            Self::BelowMinimum {
                what,
                value,
                minimum,
            } => {
                write!(
                    f,
                    "the number of {what} must be at least {minimum}, got {value}."
                )
            }
            Self::Unsorted { prev, next, .. } => {
                write!(
                    f,
                    "the list is not sorted: {next} comes after {prev}. Enter the numbers in non-decreasing order."
                )
            }
            Self::EmptyList => {
                write!(f, "the list cannot be empty. Enter at least one number.")
            }
        }
    }
}

impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_a_number_quotes_input() {
        let msg = InputError::NotANumber {
            input: "abc".to_owned(),
        }
        .to_string();
        assert!(msg.contains("'abc'"));
        let msg = InputError::NotANumber {
            input: String::new(),
        }
        .to_string();
        assert!(msg.contains("nothing was entered"));
    }

    #[test]
    fn below_minimum_names_the_limit() {
        let msg = InputError::BelowMinimum {
            what: "cables",
            value: 1,
            minimum: 2,
        }
        .to_string();
        assert_eq!(msg, "the number of cables must be at least 2, got 1.");
    }

    #[test]
    fn unsorted_points_at_the_offending_pair() {
        let msg = InputError::Unsorted {
            position: 2,
            prev: 5,
            next: 3,
        }
        .to_string();
        assert!(msg.contains("3 comes after 5"), "{msg}");
    }

    #[test]
    fn unsorted_formats_for_any_position() {
        let msg = InputError::Unsorted {
            position: 0,
            prev: 9,
            next: -1,
        }
        .to_string();
        assert!(msg.contains("-1 comes after 9"), "{msg}");
    }

    #[test]
    fn out_of_range_does_not_ask_for_digits() {
        let msg = InputError::OutOfRange {
            input: "99999999999999999999".to_owned(),
        }
        .to_string();
        assert!(msg.contains("out of range"), "{msg}");
        assert!(!msg.contains("digits only"), "{msg}");
    }

    #[test]
    fn not_positive_and_empty() {
        assert!(
            InputError::NotPositive { value: -4 }
                .to_string()
                .contains("-4")
        );
        assert!(InputError::EmptyList.to_string().contains("cannot be empty"));
    }
}
