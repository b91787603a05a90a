//! Input checks performed before a report is parsed.
//!
//! The parser itself accepts anything; these rules only guard the caller.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}/[0-9]{4}$").expect("valid date regex"));

static LEADING_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)")
        .expect("valid number regex")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid date (DD/MM/YYYY)")]
    InvalidDate,
    #[error("Please enter a valid goal amount")]
    InvalidGoal,
    #[error("Please enter a sales message")]
    EmptyMessage,
}

/// Inputs that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    pub date: String,
    pub goal: f64,
    /// Goal as typed, shown verbatim in the summary header
    pub goal_text: String,
    pub message: String,
}

/// Parse the longest numeric prefix of `s` (`"120abc"` -> 120).
pub fn parse_leading_number(s: &str) -> Option<f64> {
    let caps = LEADING_NUMBER_RE.captures(s)?;
    caps[1].parse().ok()
}

/// Check date, goal and message together, reporting every failing field.
pub fn validate_inputs(
    date: &str,
    goal: &str,
    message: &str,
) -> Result<ValidatedInput, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !DATE_RE.is_match(date) {
        errors.push(ValidationError::InvalidDate);
    }

    let parsed_goal = parse_leading_number(goal).filter(|g| *g > 0.0);
    if parsed_goal.is_none() {
        errors.push(ValidationError::InvalidGoal);
    }

    if message.trim().is_empty() {
        errors.push(ValidationError::EmptyMessage);
    }

    match parsed_goal {
        Some(goal_value) if errors.is_empty() => Ok(ValidatedInput {
            date: date.to_string(),
            goal: goal_value,
            goal_text: goal.to_string(),
            message: message.to_string(),
        }),
        _ => {
            tracing::debug!(?errors, "input validation failed");
            Err(errors)
        }
    }
}
