use crate::day_groups::*;
use crate::time_domain::*;
use ::serde::*;
use lazy_static::*;
use log::*;
use regex::{Captures, Regex};

// <H[:MM]><AM|PM> - <H[:MM]><AM|PM>, meridiem required on both bounds
const TIME_RANGE_REGEX: &str =
    r"(?i)(\d{1,2})(?::(\d{2}))?\s*([AP]M)\s*[-–]\s*(\d{1,2})(?::(\d{2}))?\s*([AP]M)";

lazy_static! {
    static ref TIME_RANGE: Regex = Regex::new(TIME_RANGE_REGEX).unwrap();
}

/// One day-group and time-range pair taken from a schedule string.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ParsedEntry {
    pub days: DaySet,
    /// Range used for grid matching, with the on-the-hour end pulled back a minute.
    pub range: TimeRange,
    /// Range exactly as written.
    pub declared: TimeRange,
}

impl ParsedEntry {
    pub fn get_days_code(&self) -> String {
        get_days_code(&self.days)
    }

    pub fn applies_to(&self, day: DayCode) -> bool {
        self.days.contains(&day)
    }
}

/// Parses a free-text schedule such as `"M/W/F 9:00AM-10:00AM, SAT 1PM-4PM"`.
///
/// Each comma separated clause is parsed on its own. Clauses without a known day token
/// or a well formed time range are skipped, so the result may hold fewer entries than
/// there are clauses (or none at all for text like "TBA").
pub fn parse(raw: &str) -> Vec<ParsedEntry> {
    raw.split(',')
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .filter_map(|clause| {
            let entry = parse_clause(clause);

            if entry.is_none() {
                debug!("Dropping unparseable schedule clause {:?}", clause);
            }

            entry
        })
        .collect()
}

pub fn parse_clause(clause: &str) -> Option<ParsedEntry> {
    let captures = TIME_RANGE.captures(clause)?;
    let whole = captures.get(0)?;

    let days = resolve_days(&clause[..whole.start()]);

    if days.is_empty() {
        return None;
    }

    let start = capture_time(&captures, 1, 2, 3)?;
    let mut end = capture_time(&captures, 4, 5, 6)?;

    // "10:00PM-12:00AM" runs to the end of the day
    if end == TimePoint::MIDNIGHT && start > TimePoint::MIDNIGHT {
        end = TimePoint::END_OF_DAY;
    }

    let declared = TimeRange::new(start, end)?;
    let range = declared.display_adjusted()?;

    Some(ParsedEntry {
        days,
        range,
        declared,
    })
}

fn capture_time(captures: &Captures, hour: usize, minute: usize, meridiem: usize) -> Option<TimePoint> {
    let hour = captures.get(hour)?.as_str();
    let minute = captures.get(minute).map(|m| m.as_str()).unwrap_or("00");
    let meridiem = captures.get(meridiem)?.as_str();

    TimePoint::parse_meridiem(hour, minute, meridiem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tp(hour: u16, minute: u16) -> TimePoint {
        TimePoint::from_hm(hour, minute).unwrap()
    }

    #[test]
    fn test_single_clause() {
        let entries = parse("TUESDAY 9:00AM-10:30AM");
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.get_days_code(), "T");
        assert_eq!(entry.range.start(), tp(9, 0));
        assert_eq!(entry.range.end(), tp(10, 30));
        assert_eq!(entry.declared, entry.range);
    }

    #[test]
    fn test_end_on_the_hour_is_pulled_back() {
        let entries = parse("MON 9:00AM-5:00PM");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].range.end(), tp(16, 59));
        assert_eq!(entries[0].declared.end(), tp(17, 0));
    }

    #[test]
    fn test_minutes_are_optional() {
        let entries = parse("FRI 1PM - 3PM");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].range.start(), tp(13, 0));
        assert_eq!(entries[0].range.end(), tp(14, 59));
    }

    #[test]
    fn test_multiple_clauses_are_independent() {
        let entries = parse("M/W/F 8:00AM-9:00AM, SAT 10:00am-12:00pm");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].get_days_code(), "MWF");
        assert_eq!(entries[1].get_days_code(), "S");
        assert_eq!(entries[1].range.end(), tp(11, 59));
    }

    #[test]
    fn test_overlapping_clauses_are_kept() {
        let entries = parse("M/W/F 8:00AM-9:00AM, MON 8:00AM-9:00AM");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_bad_clause_does_not_spoil_others() {
        let entries = parse("TBA, WED 2:00PM-3:30PM, SUN 9AM-10AM, THU 25:00PM-26:00PM");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].get_days_code(), "W");
    }

    #[test]
    fn test_meridiem_is_required_on_both_bounds() {
        assert!(parse("MON 9:00-10:00AM").is_empty());
        assert!(parse("MON 9:00AM-10:00").is_empty());
    }

    #[test]
    fn test_unparseable_text() {
        assert!(parse("TBA").is_empty());
        assert!(parse("").is_empty());
        assert!(parse(",,,").is_empty());
        assert!(parse("9:00AM-10:00AM").is_empty());
    }

    #[test]
    fn test_reversed_and_zero_length_ranges_are_dropped() {
        assert!(parse("MON 10:00PM-1:00AM").is_empty());
        assert!(parse("MON 9:00AM-9:00AM").is_empty());
    }

    #[test]
    fn test_midnight_end_closes_the_day() {
        let entries = parse("SAT 10:00PM-12:00AM");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].declared.start(), TimePoint::from_hm(22, 0).unwrap());
        assert_eq!(entries[0].declared.end(), TimePoint::END_OF_DAY);
        assert_eq!(entries[0].range.end(), TimePoint::END_OF_DAY);

        assert!(parse("SAT 12:00AM-12:00AM").is_empty());
    }

    #[test]
    fn test_noon_and_midnight() {
        let entries = parse("SAT 12:00AM-12:30AM, SAT 12:00PM-12:45PM");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].range.start(), tp(0, 0));
        assert_eq!(entries[1].range.start(), tp(12, 0));
        assert_eq!(entries[1].range.end(), tp(12, 45));
    }
}
