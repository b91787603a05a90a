//! gemtally-report: input validation, summary text, table export and sorting
//! layered on top of the core parser

pub mod dates;
pub mod sort;
pub mod summary;
pub mod table;
pub mod validate;

pub use dates::{ddmmyyyy_to_iso, iso_to_ddmmyyyy, today_ddmmyyyy};
pub use sort::{SortKey, SortOrder, sort_people, toggle};
pub use summary::{GOAL_MET_MARKER, format_summary};
pub use table::format_table;
pub use validate::{ValidatedInput, ValidationError, parse_leading_number, validate_inputs};
