//! Gem (bonus) tokens.
//!
//! A token is the marker glyph followed by a digit run and an optional
//! uppercase suffix, e.g. `💎10A`. Only the digits carry a value. Tokens may be
//! glued together on one line: `💎10A💎5B`.

use regex::Regex;
use std::sync::LazyLock;

/// Marker glyph that starts every gem token.
pub const GEM_MARKER: char = '💎';

fn marker() -> String {
    regex::escape(GEM_MARKER.encode_utf8(&mut [0; 4]))
}

static GEM_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{}([0-9]+)[A-Z]*", marker())).expect("valid gem token regex")
});

static GEM_ONLY_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let m = marker();
    Regex::new(&format!(r"^{m}[0-9]+[A-Z]*(?:{m}[0-9]+[A-Z]*)*$")).expect("valid gem line regex")
});

/// Extract every gem value from `text`, in order of appearance.
///
/// Digit runs that overflow `u64` saturate at `u64::MAX`.
pub fn extract_gems(text: &str) -> Vec<u64> {
    GEM_TOKEN_RE
        .captures_iter(text)
        .map(|caps| caps[1].parse().unwrap_or(u64::MAX))
        .collect()
}

/// True when the whole line is one or more concatenated gem tokens and nothing else.
pub fn is_gem_only_line(line: &str) -> bool {
    GEM_ONLY_LINE_RE.is_match(line)
}

/// Saturating sum of gem values.
pub fn sum_gems(gems: &[u64]) -> u64 {
    gems.iter().fold(0u64, |acc, g| acc.saturating_add(*g))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_and_concatenated() {
        assert_eq!(extract_gems("💎10A"), vec![10]);
        assert_eq!(extract_gems("💎10A💎5B💎7"), vec![10, 5, 7]);
        assert_eq!(extract_gems("great day 💎3XYZ then 💎04"), vec![3, 4]);
    }

    #[test]
    fn test_extract_ignores_bare_marker_and_lowercase_suffix() {
        assert!(extract_gems("💎").is_empty());
        assert!(extract_gems("💎A12").is_empty());
        // lowercase suffix is not part of the token but the digits still are
        assert_eq!(extract_gems("💎12ab"), vec![12]);
    }

    #[test]
    fn test_extract_overflow_saturates() {
        let gems = extract_gems("💎99999999999999999999999999");
        assert_eq!(gems, vec![u64::MAX]);
        assert_eq!(sum_gems(&[u64::MAX, 1]), u64::MAX);
    }

    #[test]
    fn test_gem_only_line_is_strict() {
        assert!(is_gem_only_line("💎5B"));
        assert!(is_gem_only_line("💎5B💎20💎1ZZ"));

        assert!(!is_gem_only_line("💎5B extra"));
        assert!(!is_gem_only_line("💎5B 💎6"));
        assert!(!is_gem_only_line("x💎5"));
        assert!(!is_gem_only_line("💎5b"));
        assert!(!is_gem_only_line("💎"));
        assert!(!is_gem_only_line(""));
    }

    #[test]
    fn test_patterns_follow_marker() {
        let token = format!("{GEM_MARKER}42QA{GEM_MARKER}8");
        assert!(is_gem_only_line(&token));
        assert_eq!(extract_gems(&token), vec![42, 8]);
        assert!(extract_gems("♦42").is_empty());
    }

    #[test]
    fn test_sum_gems() {
        assert_eq!(sum_gems(&[]), 0);
        assert_eq!(sum_gems(&[10, 5]), 15);
    }
}
