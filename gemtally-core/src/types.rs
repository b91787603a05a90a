//! Report record types

use serde::{Deserialize, Serialize};

/// Gem units per thousand that convert to one unit of sales.
pub const GEM_RATE_PER_THOUSAND: f64 = 12.0;

/// One salesperson's line in a report, plus any gems that followed it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonRecord {
    /// Name exactly as captured from the person line
    pub name: String,
    /// Primary sales figure
    pub sales: f64,
    /// Gem values in the order they appeared
    pub gems: Vec<u64>,
    /// Sum of `gems`
    pub gem_total: u64,
}

impl PersonRecord {
    pub fn new(name: impl Into<String>, sales: f64, gems: Vec<u64>) -> Self {
        let gem_total = crate::gems::sum_gems(&gems);
        Self {
            name: name.into(),
            sales,
            gems,
            gem_total,
        }
    }

    /// Append gems from a bonus-only line, returning the amount added.
    pub fn attach_gems(&mut self, gems: &[u64]) -> u64 {
        let added = crate::gems::sum_gems(gems);
        self.gems.extend_from_slice(gems);
        self.gem_total = self.gem_total.saturating_add(added);
        added
    }
}

/// Aggregated view of a whole report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub total_sales: f64,
    pub gem_grand_total: u64,
    pub people: Vec<PersonRecord>,
    /// Currency-equivalent of the gems (GEM)
    pub gem_sales: f64,
    /// Sales that did not come from gems (OT); may be negative
    pub ot_sales: f64,
    pub goal_met: bool,
}

impl ParseResult {
    /// Build the aggregate figures from accumulated totals.
    pub fn from_totals(people: Vec<PersonRecord>, total_sales: f64, gem_grand_total: u64, goal: f64) -> Self {
        let gem_sales = gem_sales_for(gem_grand_total);
        Self {
            total_sales,
            gem_grand_total,
            people,
            gem_sales,
            ot_sales: total_sales - gem_sales,
            goal_met: total_sales >= goal,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// `gems * 12 / 1000`
pub fn gem_sales_for(gem_total: u64) -> f64 {
    gem_total as f64 * GEM_RATE_PER_THOUSAND / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_record_creation() {
        let p = PersonRecord::new("Bob", 50.0, vec![10]);
        assert_eq!(p.gem_total, 10);

        let mut p = p;
        let added = p.attach_gems(&[5, 2]);
        assert_eq!(added, 7);
        assert_eq!(p.gems, vec![10, 5, 2]);
        assert_eq!(p.gem_total, 17);
    }

    #[test]
    fn test_gem_sales_rate() {
        assert_eq!(gem_sales_for(0), 0.0);
        assert_eq!(gem_sales_for(1), 0.012);
        assert_eq!(gem_sales_for(15), 0.18);
        assert_eq!(gem_sales_for(1000), 12.0);
    }

    #[test]
    fn test_ot_sales_can_go_negative() {
        let r = ParseResult::from_totals(Vec::new(), 1.0, 1000, 0.0);
        assert_eq!(r.gem_sales, 12.0);
        assert_eq!(r.ot_sales, -11.0);
        assert!(r.goal_met);
    }
}
