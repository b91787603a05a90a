//! Canonical summary text.
//!
//! ```text
//! **18/10/2026**
//!
//! *GOAL - 1500 (11.5 X 13)*
//! Total - 2390.50✅
//! OT - 2390.02
//! GEM - 0.48
//! ```
//!
//! Money figures use `{:.2}`: the exact binary value is rounded to two places,
//! exact ties go to even. Only the text is rounded, never the result.

use gemtally_core::ParseResult;
use std::fmt::Display;

/// Appended to the Total line when the goal is met.
pub const GOAL_MET_MARKER: &str = "✅";

/// Render the summary for `result`. `goal` is shown as given and `date` is
/// supplied by the caller.
pub fn format_summary(result: &ParseResult, goal: impl Display, date: &str) -> String {
    let marker = if result.goal_met { GOAL_MET_MARKER } else { "" };
    format!(
        "**{date}**\n\n*GOAL - {goal} (11.5 X 13)*\nTotal - {:.2}{marker}\nOT - {:.2}\nGEM - {:.2}",
        result.total_sales, result.ot_sales, result.gem_sales,
    )
}
