use crate::assignment::*;
use crate::schedule_parser::*;
use crate::time_domain::*;
use ::serde::*;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    pub title: String,
    pub section: String,
    pub weekly_minutes: u32,
    pub lecture_hours: u64, // Hours * 100
    pub lab_hours: u64,
}

impl LoadSummary {
    pub fn new_from_assignment(assignment: &Assignment) -> Self {
        LoadSummary {
            title: assignment.get_title().to_string(),
            section: assignment.get_section().to_string(),
            weekly_minutes: weekly_contact_minutes(assignment),
            lecture_hours: assignment.get_lecture_hours(),
            lab_hours: assignment.get_lab_hours(),
        }
    }

    /// "3h 30m" style.
    pub fn get_weekly_hours_str(&self) -> String {
        format!("{}h {:02}m", self.weekly_minutes / 60, self.weekly_minutes % 60)
    }
}

/// Scheduled minutes per week, from the ranges as written.
pub fn weekly_contact_minutes<T: Occupant>(assignment: &T) -> u32 {
    parse(assignment.get_raw_schedule())
        .iter()
        .map(|entry| entry.declared.duration_minutes() as u32 * entry.days.len() as u32)
        .sum()
}

/// For each day, how many assignments are booked in each minute of the day.
///
/// Ranges are counted as written with an exclusive end, so back to back bookings do
/// not stack on the changeover minute.
pub fn compute_minute_occupancy<T: Occupant>(assignments: &[T], days: &[DayCode]) -> Vec<Vec<u32>> {
    let day_timings: Vec<u32> = vec![0; MINUTES_PER_DAY as usize];

    let mut timings: Vec<Vec<u32>> = Vec::new();

    for _ in days {
        timings.push(day_timings.clone());
    }

    for assignment in assignments {
        for entry in parse(assignment.get_raw_schedule()) {
            for (column, day) in days.iter().enumerate() {
                if !entry.applies_to(*day) {
                    continue;
                }

                let start = entry.declared.start().minutes() as usize;
                let end = entry.declared.end().minutes() as usize;

                for minute in &mut timings[column][start..end] {
                    *minute += 1;
                }
            }
        }
    }

    timings
}

/// Highest number of simultaneous bookings on any day.
pub fn peak_concurrency(occupancy: &[Vec<u32>]) -> u32 {
    occupancy
        .iter()
        .flat_map(|day| day.iter())
        .copied()
        .max()
        .unwrap_or(0)
}
