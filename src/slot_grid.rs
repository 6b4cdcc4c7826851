use crate::time_domain::*;
use ::serde::*;
use std::collections::BTreeSet;

/// Minutes into the hour at which a row is probed for occupancy.
pub const CHECKPOINT_OFFSETS: [u16; 3] = [0, 30, 59];

/// One hour-high row of the timetable.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SlotGroup {
    pub index: usize,
    pub checkpoints: [TimePoint; 3],
}

impl SlotGroup {
    pub fn get_hour(&self) -> u16 {
        self.checkpoints[0].hour()
    }

    /// `[min(checkpoints), max(checkpoints)]`
    pub fn get_span(&self) -> TimeRange {
        let first = self.checkpoints.iter().copied().fold(self.checkpoints[0], std::cmp::min);
        let last = self.checkpoints.iter().copied().fold(self.checkpoints[0], std::cmp::max);

        TimeRange::spanning(first, last)
    }

    pub fn get_label(&self) -> String {
        self.checkpoints[0].to_string()
    }
}

/// Builds one row per hour in `[start_hour, end_hour)`, leaving out `skip` hours.
///
/// Hours past 23 do not exist on the clock and are ignored.
pub fn generate_slots(start_hour: u32, end_hour: u32, skip: &BTreeSet<u32>) -> Vec<SlotGroup> {
    (start_hour..end_hour.min(24))
        .filter(|hour| !skip.contains(hour))
        .filter_map(|hour| {
            let hour = u16::try_from(hour).ok()?;
            let mut checkpoints = [TimePoint::from_hm(hour, 0)?; 3];

            for (checkpoint, offset) in checkpoints.iter_mut().zip(CHECKPOINT_OFFSETS.iter()) {
                *checkpoint = TimePoint::from_hm(hour, *offset)?;
            }

            Some(checkpoints)
        })
        .enumerate()
        .map(|(index, checkpoints)| SlotGroup { index, checkpoints })
        .collect()
}
