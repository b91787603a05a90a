//! Tab-separated per-person table, one row per record:
//! `name \t sales \t gems \t gem_total`

use gemtally_core::PersonRecord;

fn format_row(p: &PersonRecord) -> String {
    let gems = if p.gems.is_empty() {
        "None".to_string()
    } else {
        p.gems
            .iter()
            .map(|g| g.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{}\t{:.2}\t{}\t{}", p.name, p.sales, gems, p.gem_total)
}

pub fn format_table(people: &[PersonRecord]) -> String {
    people.iter().map(format_row).collect::<Vec<_>>().join("\n")
}
