use gemtally_core::parse_report;
use gemtally_report::{
    SortKey, SortOrder, format_summary, format_table, sort_people, validate_inputs,
};

const MESSAGE: &str = r#"
Team update
Alice - 1200 💎10A
💎5B💎3
Bob - 850.5
₹500 bonus note
Carol - 300 💎20ZZ
💎2
"#;

/// End-to-end: validate, parse, summarise, then sort a copy for the table.
#[test]
fn test_validated_message_to_summary_and_table() {
    let input = validate_inputs("18/10/2026", "2000", MESSAGE).unwrap();
    let result = parse_report(&input.message, input.goal);

    assert_eq!(result.total_sales, 2350.5);
    assert_eq!(result.gem_grand_total, 40);

    let summary = format_summary(&result, &input.goal_text, &input.date);
    assert_eq!(
        summary,
        "**18/10/2026**\n\n*GOAL - 2000 (11.5 X 13)*\nTotal - 2350.50✅\nOT - 2350.02\nGEM - 0.48"
    );

    let mut people = result.people.clone();
    sort_people(&mut people, SortKey::GemTotal, SortOrder::Desc);
    assert_eq!(
        format_table(&people),
        "Carol\t300.00\t20, 2\t22\nAlice\t1200.00\t10, 5, 3\t18\nBob\t850.50\tNone\t0"
    );

    // sorting the copy leaves the parse result in report order
    assert_eq!(result.people[0].name, "Alice");
}

#[test]
fn test_goal_not_met_has_no_marker() {
    let input = validate_inputs("18/10/2026", "5000", MESSAGE).unwrap();
    let result = parse_report(&input.message, input.goal);
    let summary = format_summary(&result, &input.goal_text, &input.date);
    assert!(summary.contains("Total - 2350.50\n"));
    assert!(!summary.contains('✅'));
}
