use crate::assignment::*;
use crate::layout::*;
use crate::schedule_parser::*;
use crate::slot_grid::*;
use crate::time_domain::*;

const TIME_LABEL_WIDTH: usize = 8;

/// One line per entry, e.g. `"MWF | 9:00AM - 10:00AM"`, with times as written.
pub fn format_entries(entries: &[ParsedEntry]) -> String {
    entries
        .iter()
        .map(|entry| format!("{} | {}", entry.get_days_code(), entry.declared))
        .collect::<Vec<String>>()
        .join("\n")
}

/// Plain text rendering of a draw plan, one line per slot.
///
/// Origin cells show `title @ room`, continuation cells a `|` marker, empty cells nothing.
pub fn render_grid<T: Occupant>(
    plan: &DrawPlan<'_, T>,
    slots: &[SlotGroup],
    days: &[DayCode],
    column_width: usize,
) -> String {
    let column_width = column_width.max(4);
    let mut lines = Vec::with_capacity(slots.len() + 1);

    let mut header = pad("", TIME_LABEL_WIDTH);
    for day in days {
        header.push('|');
        header.push_str(&pad(day.full_name(), column_width));
    }
    lines.push(header.trim_end().to_string());

    for (slot, row) in slots.iter().zip(plan.iter()) {
        let mut line = pad(&slot.get_label(), TIME_LABEL_WIDTH);

        for cell in row {
            line.push('|');
            line.push_str(&pad(&cell_text(cell), column_width));
        }

        lines.push(line.trim_end().to_string());
    }

    lines.join("\n")
}

fn cell_text<T: Occupant>(cell: &DrawCell<'_, T>) -> String {
    match (cell.kind(), cell.occupant) {
        (CellKind::Origin, Some(occupant)) if occupant.get_room().is_empty() => {
            occupant.get_title().to_string()
        }
        (CellKind::Origin, Some(occupant)) => {
            format!("{} @ {}", occupant.get_title(), occupant.get_room())
        }
        (CellKind::Continuation, _) => " |".to_string(),
        _ => String::new(),
    }
}

/// Left aligns `text` in exactly `width` characters, cutting it with `~` when too long.
fn pad(text: &str, width: usize) -> String {
    let length = text.chars().count();

    if length <= width {
        format!("{}{}", text, " ".repeat(width - length))
    } else {
        let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}
