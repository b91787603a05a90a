//! Line-oriented sales report parser
//!
//! Expected message shape (copy-pasted chat text):
//!   Alice - 1200 💎10A
//!   💎5B💎3
//!   Bob - 850.5
//!   ₹500 bonus note        <- ignored
//!
//! Person lines open a new record. Gem-only lines attach to the most recent
//! person. Everything else is dropped.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

use crate::gems::{extract_gems, is_gem_only_line, sum_gems};
use crate::types::{ParseResult, PersonRecord};

// NAME - SALES [rest]
static PERSON_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<name>[A-Za-z\s.]+?)\s*-\s*",
        r"(?P<sales>[0-9]+\.?[0-9]*)\s*",
        r"(?P<rest>.*)$"
    ))
    .expect("valid person line regex")
});

/// Fields pulled out of a person line
#[derive(Debug, Clone, PartialEq)]
pub struct PersonLine {
    pub name: String,
    pub sales: f64,
    pub gems: Vec<u64>,
}

/// Classification of one trimmed, non-empty line
#[derive(Debug, Clone, PartialEq)]
pub enum Line {
    Person(PersonLine),
    GemsOnly(Vec<u64>),
    Noise,
}

fn parse_person_line(line: &str) -> Option<PersonLine> {
    let caps = PERSON_LINE_RE.captures(line)?;
    let sales: f64 = caps["sales"].parse().ok()?;
    Some(PersonLine {
        name: caps["name"].to_string(),
        sales,
        gems: extract_gems(&caps["rest"]),
    })
}

/// Classify a line. Person lines win over gem-only lines.
pub fn classify_line(line: &str) -> Line {
    if let Some(person) = parse_person_line(line) {
        return Line::Person(person);
    }
    if is_gem_only_line(line) {
        return Line::GemsOnly(extract_gems(line));
    }
    Line::Noise
}

/// Parse a raw report and aggregate it against `goal`.
///
/// Never fails: unrecognised lines are skipped, and gem-only lines seen
/// before any person line are dropped.
pub fn parse_report(raw_text: &str, goal: f64) -> ParseResult {
    let mut people: Vec<PersonRecord> = Vec::new();
    let mut current: Option<usize> = None;
    let mut total_sales = 0.0;
    let mut gem_grand_total: u64 = 0;

    for (lineno, line) in raw_text
        .lines()
        .map(str::trim)
        .enumerate()
        .filter(|(_, l)| !l.is_empty())
    {
        match classify_line(line) {
            Line::Person(p) => {
                total_sales += p.sales;
                let gem_total = sum_gems(&p.gems);
                gem_grand_total = gem_grand_total.saturating_add(gem_total);
                people.push(PersonRecord {
                    name: p.name,
                    sales: p.sales,
                    gems: p.gems,
                    gem_total,
                });
                current = Some(people.len() - 1);
            }
            Line::GemsOnly(gems) => match current {
                Some(idx) => {
                    let added = people[idx].attach_gems(&gems);
                    gem_grand_total = gem_grand_total.saturating_add(added);
                }
                None => trace!(line = lineno + 1, "gem line before any person, dropped"),
            },
            Line::Noise => trace!(line = lineno + 1, "unrecognised line skipped"),
        }
    }

    ParseResult::from_totals(people, total_sales, gem_grand_total, goal)
}
