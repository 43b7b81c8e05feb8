//! # Summary Builder
//!
//! Turns the stored student records into a deterministic human-readable
//! text block: one detail block per record plus an aggregate pass/fail
//! tally. The output is a pure function of the input slice — identical
//! records always yield byte-identical text (no locale, timezone, or
//! random dependence), so the block is safe to assert against in tests
//! and stable across requests.

use educator_core::constants::PASS_THRESHOLD;
use educator_core::records::StudentRecord;

/// Header line for the per-record section.
const HEADER: &str = "\n\nSTUDENT RECORDS IN THE DATABASE:\n\n";

/// Returned when the store has no records.
pub const EMPTY_NOTICE: &str =
    "\n\nThere are no student records registered in the database at the moment.\n";

/// Status marker for a passing average.
pub const PASSED_MARKER: &str = "PASSED";

/// Status marker for a failing average.
pub const FAILED_MARKER: &str = "FAILED";

/// Build the summary text block for a set of records.
///
/// Records are rendered in slice order (the store's insertion order). Each
/// block carries name, grade, period, the three scores, the average to two
/// decimals, and the pass/fail status. The trailing aggregate block counts
/// passed and failed records and restates the threshold.
#[must_use]
pub fn build_summary(records: &[StudentRecord]) -> String {
    if records.is_empty() {
        return EMPTY_NOTICE.to_string();
    }

    let mut text = String::from(HEADER);
    let mut passed = 0usize;

    for record in records {
        let average = record.scores.average();
        let status = if record.scores.passed() {
            passed += 1;
            PASSED_MARKER
        } else {
            FAILED_MARKER
        };

        text.push_str(&format!("• {}\n", record.name));
        text.push_str(&format!("  - Grade: {}\n", record.grade));
        text.push_str(&format!("  - Period: {}\n", record.period));
        text.push_str(&format!("  - Math: {}\n", record.scores.math));
        text.push_str(&format!("  - Language: {}\n", record.scores.language));
        text.push_str(&format!("  - Science: {}\n", record.scores.science));
        text.push_str(&format!("  - Average: {average:.2}\n"));
        text.push_str(&format!("  - Status: {status}\n\n"));
    }

    text.push_str("SUMMARY:\n");
    text.push_str(&format!("- Total students: {}\n", records.len()));
    text.push_str(&format!("- Passed: {passed}\n"));
    text.push_str(&format!("- Failed: {}\n", records.len() - passed));
    text.push_str(&format!(
        "\nIMPORTANT: The minimum passing average is {PASS_THRESHOLD:.0}.\n"
    ));

    text
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
