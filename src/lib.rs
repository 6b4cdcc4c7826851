//! Schedule string parsing and timetable grid layout.
//!
//! Free-text schedules such as `"M/W/F 9:00AM-10:00AM, SAT 1PM-4PM"` are parsed into
//! day/time entries and laid out on an hour-per-row weekly grid, with one origin cell
//! per booking and continuation cells below it.

pub mod assignment;
pub mod config;
pub mod day_groups;
pub mod error;
pub mod layout;
pub mod load_summary;
pub mod occupancy;
pub mod render;
pub mod schedule_parser;
pub mod slot_grid;
pub mod storage;
pub mod time_domain;

pub use assignment::{Assignment, AssignmentKind, Occupant};
pub use config::GridConfig;
pub use day_groups::{resolve_days, DaySet};
pub use error::TimetableError;
pub use layout::{layout, CellKind, DrawCell, DrawPlan, RenderedKey};
pub use occupancy::{find_occupant, find_overlaps, is_origin_slot, matches, Overlap};
pub use schedule_parser::{parse, ParsedEntry};
pub use slot_grid::{generate_slots, SlotGroup};
pub use time_domain::{DayCode, TimePoint, TimeRange};
