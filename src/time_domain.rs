use ::serde::*;
use chrono::{NaiveTime, Timelike};
use std::fmt;

pub const MINUTES_PER_HOUR: u16 = 60;
pub const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

const TIME_FMT: &str = "%I:%M%p";

/// Days of the operating week. Sunday is never rendered, so it has no variant.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DayCode {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl DayCode {
    pub const ALL: [DayCode; 6] = [
        DayCode::Mon,
        DayCode::Tue,
        DayCode::Wed,
        DayCode::Thu,
        DayCode::Fri,
        DayCode::Sat,
    ];

    pub fn new_from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'M' => Some(DayCode::Mon),
            'T' => Some(DayCode::Tue),
            'W' => Some(DayCode::Wed),
            'R' => Some(DayCode::Thu),
            'F' => Some(DayCode::Fri),
            'S' => Some(DayCode::Sat),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            DayCode::Mon => 'M',
            DayCode::Tue => 'T',
            DayCode::Wed => 'W',
            DayCode::Thu => 'R',
            DayCode::Fri => 'F',
            DayCode::Sat => 'S',
        }
    }

    pub fn to_index(&self) -> usize {
        match self {
            DayCode::Mon => 0,
            DayCode::Tue => 1,
            DayCode::Wed => 2,
            DayCode::Thu => 3,
            DayCode::Fri => 4,
            DayCode::Sat => 5,
        }
    }

    /// Three letter upper case abbreviation, as operators type it ("MON", "THU").
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DayCode::Mon => "MON",
            DayCode::Tue => "TUE",
            DayCode::Wed => "WED",
            DayCode::Thu => "THU",
            DayCode::Fri => "FRI",
            DayCode::Sat => "SAT",
        }
    }

    pub fn full_name(&self) -> &'static str {
        match self {
            DayCode::Mon => "Monday",
            DayCode::Tue => "Tuesday",
            DayCode::Wed => "Wednesday",
            DayCode::Thu => "Thursday",
            DayCode::Fri => "Friday",
            DayCode::Sat => "Saturday",
        }
    }
}

impl fmt::Display for DayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

/// Minutes since midnight, always in `0..1440`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct TimePoint(u16);

impl TimePoint {
    pub const MIDNIGHT: TimePoint = TimePoint(0);
    /// 11:59PM, the last minute a range can reach.
    pub const END_OF_DAY: TimePoint = TimePoint(MINUTES_PER_DAY - 1);

    pub fn from_minutes(minutes: u16) -> Option<Self> {
        if minutes < MINUTES_PER_DAY {
            Some(TimePoint(minutes))
        } else {
            None
        }
    }

    /// 24 hour clock.
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        if hour > 23 || minute >= MINUTES_PER_HOUR {
            return None;
        }

        Some(TimePoint(hour * MINUTES_PER_HOUR + minute))
    }

    /// Parses the pieces of a 12 hour clock time, e.g. `("9", "05", "pm")`.
    ///
    /// `12AM` is midnight and `12PM` is noon. Out of range hours or minutes give `None`.
    pub fn parse_meridiem(hour: &str, minute: &str, meridiem: &str) -> Option<Self> {
        let time_str = format!("{:0>2}:{:0>2}{}", hour.trim(), minute.trim(), meridiem.trim().to_uppercase());

        NaiveTime::parse_from_str(&time_str, TIME_FMT)
            .ok()
            .map(TimePoint::from)
    }

    pub fn minutes(&self) -> u16 {
        self.0
    }

    pub fn hour(&self) -> u16 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u16 {
        self.0 % MINUTES_PER_HOUR
    }

    pub fn is_on_the_hour(&self) -> bool {
        self.minute() == 0
    }

    pub fn checked_sub_minutes(&self, minutes: u16) -> Option<Self> {
        self.0.checked_sub(minutes).map(TimePoint)
    }
}

impl From<NaiveTime> for TimePoint {
    fn from(time: NaiveTime) -> Self {
        TimePoint((time.hour() * 60 + time.minute()) as u16)
    }
}

impl TryFrom<u16> for TimePoint {
    type Error = String;

    fn try_from(minutes: u16) -> Result<Self, Self::Error> {
        TimePoint::from_minutes(minutes)
            .ok_or_else(|| format!("{} is not a minute of the day", minutes))
    }
}

impl From<TimePoint> for u16 {
    fn from(time: TimePoint) -> u16 {
        time.0
    }
}

/// Formats as the 12 hour "9:05AM" style used in schedule strings.
impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = if self.hour() < 12 { "AM" } else { "PM" };
        let hour = match self.hour() % 12 {
            0 => 12,
            h => h,
        };

        write!(f, "{}:{:02}{}", hour, self.minute(), meridiem)
    }
}

/// Closed interval `[start, end]` of the day, `start <= end`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    start: TimePoint,
    end: TimePoint,
}

impl TimeRange {
    pub fn new(start: TimePoint, end: TimePoint) -> Option<Self> {
        if start <= end {
            Some(TimeRange { start, end })
        } else {
            None
        }
    }

    /// Range between two points in whichever order they are given.
    pub fn spanning(a: TimePoint, b: TimePoint) -> Self {
        TimeRange {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn start(&self) -> TimePoint {
        self.start
    }

    pub fn end(&self) -> TimePoint {
        self.end
    }

    pub fn contains(&self, time: TimePoint) -> bool {
        self.start <= time && time <= self.end
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// A range ending exactly on the hour is pulled back to `:59` of the previous hour,
    /// so a class ending at 5:00PM does not reach into the 5PM row.
    ///
    /// Returns `None` when the pulled back end would fall before the start.
    pub fn display_adjusted(&self) -> Option<TimeRange> {
        if !self.end.is_on_the_hour() {
            return Some(*self);
        }

        TimeRange::new(self.start, self.end.checked_sub_minutes(1)?)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
