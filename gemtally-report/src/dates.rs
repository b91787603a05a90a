//! Report dates. The summary header uses `DD/MM/YYYY`; date pickers speak ISO.

use chrono::{Local, NaiveDate};

const DISPLAY_FMT: &str = "%d/%m/%Y";
const ISO_FMT: &str = "%Y-%m-%d";

/// Today's local date as `DD/MM/YYYY`.
pub fn today_ddmmyyyy() -> String {
    Local::now().date_naive().format(DISPLAY_FMT).to_string()
}

/// `YYYY-MM-DD` -> `DD/MM/YYYY`
pub fn iso_to_ddmmyyyy(s: &str) -> Option<String> {
    let d = NaiveDate::parse_from_str(s.trim(), ISO_FMT).ok()?;
    Some(d.format(DISPLAY_FMT).to_string())
}

/// `DD/MM/YYYY` -> `YYYY-MM-DD`
pub fn ddmmyyyy_to_iso(s: &str) -> Option<String> {
    let d = NaiveDate::parse_from_str(s.trim(), DISPLAY_FMT).ok()?;
    Some(d.format(ISO_FMT).to_string())
}
