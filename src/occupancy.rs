use crate::assignment::*;
use crate::schedule_parser::*;
use crate::slot_grid::*;
use crate::time_domain::*;
use ::serde::*;

/// Does `entry` occupy the `(day, slot)` cell?
///
/// A cell is occupied when a checkpoint lands inside the entry's range, or when the
/// checkpoint span overlaps it (short bookings that sit between two checkpoints).
pub fn matches(entry: &ParsedEntry, day: DayCode, slot: &SlotGroup) -> bool {
    if !entry.applies_to(day) {
        return false;
    }

    slot.checkpoints.iter().any(|c| entry.range.contains(*c))
        || slot.get_span().overlaps(&entry.range)
}

/// The entry starts inside this row, so its block is drawn here.
pub fn is_origin_slot(entry: &ParsedEntry, slot: &SlotGroup) -> bool {
    slot.get_span().contains(entry.range.start())
}

/// First assignment, in list order, with any entry occupying the cell.
pub fn find_occupant<'a, T: Occupant>(
    assignments: &'a [T],
    day: DayCode,
    slot: &SlotGroup,
) -> Option<&'a T> {
    assignments.iter().find(|assignment| {
        parse(assignment.get_raw_schedule())
            .iter()
            .any(|entry| matches(entry, day, slot))
    })
}

/// An assignment together with its parsed schedule, parsed once per pass.
pub(crate) struct ParsedOccupant<'a, T> {
    pub occupant: &'a T,
    pub entries: Vec<ParsedEntry>,
}

pub(crate) fn parse_all<T: Occupant>(assignments: &[T]) -> Vec<ParsedOccupant<'_, T>> {
    assignments
        .iter()
        .map(|occupant| ParsedOccupant {
            occupant,
            entries: parse(occupant.get_raw_schedule()),
        })
        .collect()
}

/// Two or more assignments claiming the same cell.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Overlap<'a, T> {
    pub day: DayCode,
    pub slot_index: usize,
    pub occupants: Vec<&'a T>,
}

/// Lists every cell claimed by more than one assignment.
///
/// The layout pass quietly draws only the first claimant; this is the query to use
/// when those hidden double bookings matter.
pub fn find_overlaps<'a, T: Occupant>(
    assignments: &'a [T],
    days: &[DayCode],
    slots: &[SlotGroup],
) -> Vec<Overlap<'a, T>> {
    let parsed = parse_all(assignments);
    let mut overlaps = Vec::new();

    for slot in slots {
        for day in days {
            let occupants: Vec<&'a T> = parsed
                .iter()
                .filter(|p| p.entries.iter().any(|entry| matches(entry, *day, slot)))
                .map(|p| p.occupant)
                .collect();

            if occupants.len() > 1 {
                overlaps.push(Overlap {
                    day: *day,
                    slot_index: slot.index,
                    occupants,
                });
            }
        }
    }

    overlaps
}
