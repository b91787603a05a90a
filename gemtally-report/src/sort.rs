//! Presentation ordering for people. The parser's output order is the
//! report's line order; callers re-sort a copy with these helpers.

use gemtally_core::PersonRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "sales")]
    Sales,
    #[serde(rename = "gems")]
    GemTotal,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Asc,
    #[default]
    #[serde(rename = "desc")]
    Desc,
}

fn compare(a: &PersonRecord, b: &PersonRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Sales => a.sales.total_cmp(&b.sales),
        SortKey::GemTotal => a.gem_total.cmp(&b.gem_total),
    }
}

/// Stable sort; equal keys keep report order.
pub fn sort_people(people: &mut [PersonRecord], key: SortKey, order: SortOrder) {
    match order {
        SortOrder::Asc => people.sort_by(|a, b| compare(a, b, key)),
        SortOrder::Desc => people.sort_by(|a, b| compare(b, a, key)),
    }
}

/// Column-header click: same key while descending flips to ascending,
/// anything else goes (back) to descending.
pub fn toggle(current_key: SortKey, current_order: SortOrder, clicked: SortKey) -> (SortKey, SortOrder) {
    if current_key == clicked && current_order == SortOrder::Desc {
        (clicked, SortOrder::Asc)
    } else {
        (clicked, SortOrder::Desc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Vec<PersonRecord> {
        vec![
            PersonRecord::new("A", 100.0, vec![1]),
            PersonRecord::new("B", 300.0, vec![]),
            PersonRecord::new("C", 200.0, vec![9]),
            PersonRecord::new("D", 300.0, vec![1]),
        ]
    }

    fn names(p: &[PersonRecord]) -> Vec<&str> {
        p.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_sort_by_sales() {
        let mut p = people();
        sort_people(&mut p, SortKey::Sales, SortOrder::Desc);
        assert_eq!(names(&p), vec!["B", "D", "C", "A"]);

        sort_people(&mut p, SortKey::Sales, SortOrder::Asc);
        assert_eq!(names(&p), vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_sort_by_gems_is_stable() {
        let mut p = people();
        sort_people(&mut p, SortKey::GemTotal, SortOrder::Desc);
        assert_eq!(names(&p), vec!["C", "A", "D", "B"]);
    }

    #[test]
    fn test_serde_names_match_config_values() {
        assert_eq!(serde_json::to_string(&SortKey::Sales).unwrap(), "\"sales\"");
        assert_eq!(serde_json::to_string(&SortKey::GemTotal).unwrap(), "\"gems\"");
        assert_eq!(serde_json::to_string(&SortOrder::Asc).unwrap(), "\"asc\"");
        assert_eq!(serde_json::to_string(&SortOrder::Desc).unwrap(), "\"desc\"");

        let key: SortKey = serde_json::from_str("\"gems\"").unwrap();
        assert_eq!(key, SortKey::GemTotal);
        let order: SortOrder = serde_json::from_str("\"asc\"").unwrap();
        assert_eq!(order, SortOrder::Asc);
        assert!(serde_json::from_str::<SortKey>("\"GemTotal\"").is_err());
    }

    #[test]
    fn test_toggle() {
        assert_eq!(
            toggle(SortKey::Sales, SortOrder::Desc, SortKey::Sales),
            (SortKey::Sales, SortOrder::Asc)
        );
        assert_eq!(
            toggle(SortKey::Sales, SortOrder::Asc, SortKey::Sales),
            (SortKey::Sales, SortOrder::Desc)
        );
        assert_eq!(
            toggle(SortKey::Sales, SortOrder::Desc, SortKey::GemTotal),
            (SortKey::GemTotal, SortOrder::Desc)
        );
    }
}
