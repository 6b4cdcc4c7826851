//! Turns a list of assignments into a draw plan: one cell per `(slot, day)`, each cell
//! empty, the origin of a block (with its row span), or a continuation covered by a
//! block that started further up the same column.
//!
//! A booking is identified by `(day, id or title, range, section)` rather than by the
//! assignment alone, since one assignment may meet on several days or at several times
//! and each of those needs its own block.

use crate::assignment::*;
use crate::occupancy::*;
use crate::schedule_parser::*;
use crate::slot_grid::*;
use crate::time_domain::*;
use ::serde::*;
use std::collections::HashSet;

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct RenderedKey {
    pub day: DayCode,
    pub label: String,
    pub range: TimeRange,
    pub section: String,
}

impl RenderedKey {
    pub fn new<T: Occupant>(day: DayCode, occupant: &T, entry: &ParsedEntry) -> Self {
        RenderedKey {
            day,
            label: occupant.get_key_label().to_string(),
            range: entry.range,
            section: occupant.get_section().to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Origin,
    Continuation,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DrawCell<'a, T> {
    pub day: DayCode,
    pub slot_index: usize,
    pub occupant: Option<&'a T>,
    pub key: Option<RenderedKey>,
    pub is_origin: bool,
    /// Rows covered by the block, counting the origin row. Zero for non-origin cells.
    pub span: usize,
}

impl<'a, T> DrawCell<'a, T> {
    fn empty(day: DayCode, slot: &SlotGroup) -> Self {
        DrawCell {
            day,
            slot_index: slot.index,
            occupant: None,
            key: None,
            is_origin: false,
            span: 0,
        }
    }

    pub fn kind(&self) -> CellKind {
        match (self.occupant.is_some(), self.is_origin) {
            (false, _) => CellKind::Empty,
            (true, true) => CellKind::Origin,
            (true, false) => CellKind::Continuation,
        }
    }
}

/// Rows of cells, `plan[row][column]`, rows following the slots and columns the days.
pub type DrawPlan<'a, T> = Vec<Vec<DrawCell<'a, T>>>;

struct ActiveSpan<'a, T> {
    occupant: &'a T,
    key: RenderedKey,
    last_row: usize,
}

/// State threaded through one row-major walk of the grid. Created fresh for every
/// call to [`layout`] and dropped at the end of it.
struct LayoutPass<'a, T> {
    rendered: HashSet<RenderedKey>,
    active: Vec<Option<ActiveSpan<'a, T>>>,
}

impl<'a, T> LayoutPass<'a, T> {
    fn new(columns: usize) -> Self {
        LayoutPass {
            rendered: HashSet::new(),
            active: (0..columns).map(|_| None).collect(),
        }
    }
}

/// Lays out `assignments` over `slots` x `days`.
///
/// Never fails: schedules that do not parse are simply absent from the plan, and when
/// several assignments claim a cell the first one in the list is drawn.
pub fn layout<'a, T: Occupant>(
    assignments: &'a [T],
    days: &[DayCode],
    slots: &[SlotGroup],
) -> DrawPlan<'a, T> {
    let parsed = parse_all(assignments);
    let mut pass = LayoutPass::new(days.len());

    let mut plan = Vec::with_capacity(slots.len());

    for row in 0..slots.len() {
        let mut cells = Vec::with_capacity(days.len());

        for (column, day) in days.iter().enumerate() {
            cells.push(resolve_cell(&mut pass, &parsed, *day, column, slots, row));
        }

        plan.push(cells);
    }

    plan
}

fn resolve_cell<'a, T: Occupant>(
    pass: &mut LayoutPass<'a, T>,
    parsed: &[ParsedOccupant<'a, T>],
    day: DayCode,
    column: usize,
    slots: &[SlotGroup],
    row: usize,
) -> DrawCell<'a, T> {
    let slot = &slots[row];

    // Inside a block drawn further up this column
    if let Some(active) = &pass.active[column] {
        if row <= active.last_row {
            return DrawCell {
                day,
                slot_index: slot.index,
                occupant: Some(active.occupant),
                key: Some(active.key.clone()),
                is_origin: false,
                span: 0,
            };
        }
    }
    pass.active[column] = None;

    let mut continuation: Option<(&'a T, RenderedKey)> = None;

    for (rank, candidate) in parsed.iter().enumerate() {
        for entry in candidate.entries.iter().filter(|e| matches(e, day, slot)) {
            let key = RenderedKey::new(day, candidate.occupant, entry);

            if pass.rendered.contains(&key) {
                if continuation.is_none() {
                    continuation = Some((candidate.occupant, key));
                }
                continue;
            }

            if !is_origin_slot(entry, slot) {
                continue;
            }

            // The block only runs down while nothing earlier in the list claims the cell
            let span = 1 + slots[row + 1..]
                .iter()
                .take_while(|next| {
                    matches(entry, day, next) && !claimed_by_any(&parsed[..rank], day, next)
                })
                .count();

            pass.rendered.insert(key.clone());
            pass.active[column] = Some(ActiveSpan {
                occupant: candidate.occupant,
                key: key.clone(),
                last_row: row + span - 1,
            });

            return DrawCell {
                day,
                slot_index: slot.index,
                occupant: Some(candidate.occupant),
                key: Some(key),
                is_origin: true,
                span,
            };
        }
    }

    match continuation {
        Some((occupant, key)) => DrawCell {
            day,
            slot_index: slot.index,
            occupant: Some(occupant),
            key: Some(key),
            is_origin: false,
            span: 0,
        },
        None => DrawCell::empty(day, slot),
    }
}

fn claimed_by_any<T>(parsed: &[ParsedOccupant<'_, T>], day: DayCode, slot: &SlotGroup) -> bool {
    parsed
        .iter()
        .any(|p| p.entries.iter().any(|entry| matches(entry, day, slot)))
}

/// Every origin cell in the plan, row by row.
pub fn origin_cells<'p, 'a, T>(plan: &'p DrawPlan<'a, T>) -> impl Iterator<Item = &'p DrawCell<'a, T>> {
    plan.iter().flatten().filter(|cell| cell.is_origin)
}
