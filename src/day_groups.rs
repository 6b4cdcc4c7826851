use crate::time_domain::*;
use std::collections::BTreeSet;

pub type DaySet = BTreeSet<DayCode>;

// Checked in this order, first hit wins. Patterns are compared with all whitespace removed.
const SLASH_GROUPS: &[(&str, &[DayCode])] = &[
    (
        "M/T/W/TH/F",
        &[DayCode::Mon, DayCode::Tue, DayCode::Wed, DayCode::Thu, DayCode::Fri],
    ),
    ("M/W/F", &[DayCode::Mon, DayCode::Wed, DayCode::Fri]),
    ("T/TH", &[DayCode::Tue, DayCode::Thu]),
];

const PAIRED_GROUPS: &[(&str, &[DayCode])] = &[
    ("MON&TUE", &[DayCode::Mon, DayCode::Tue]),
    ("WED&THU", &[DayCode::Wed, DayCode::Thu]),
    ("FRI&SAT", &[DayCode::Fri, DayCode::Sat]),
];

/// Expands an operator-typed day token into the days it names.
///
/// Matching is by substring, not by word boundary, so "FRIDAY", "fri." and "Fri-" all
/// resolve to Friday. An unknown token gives an empty set.
pub fn resolve_days(token: &str) -> DaySet {
    let compact: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    if compact.is_empty() {
        return DaySet::new();
    }

    for (pattern, days) in SLASH_GROUPS.iter().chain(PAIRED_GROUPS.iter()) {
        if compact.contains(pattern) {
            return days.iter().copied().collect();
        }
    }

    DayCode::ALL
        .iter()
        .find(|day| compact.contains(day.abbreviation()))
        .map(|day| std::iter::once(*day).collect())
        .unwrap_or_default()
}

/// Compact day code string for display, e.g. "MWF" or "TR".
pub fn get_days_code(days: &DaySet) -> String {
    days.iter().map(|day| day.to_char()).collect::<String>()
}
