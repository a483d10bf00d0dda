use chrono::{NaiveDate, NaiveTime};

use crate::models::{hh_mm, CalendarEvent, ColorTag, Shift, ShiftType};

/// Shift events are numbered from here so they never collide with ids from
/// other calendar sources, which count up from zero.
pub const EVENT_ID_OFFSET: u64 = 1_000_000;

/// Owner shown on projected events; shifts are not staffed at projection time.
pub const UNASSIGNED_OWNER: &str = "unassigned";

/// Project shifts onto timeline events, one per shift, in input order.
pub fn project(shifts: &[Shift]) -> Vec<CalendarEvent> {
    shifts
        .iter()
        .enumerate()
        .map(|(index, shift)| to_event(index, shift))
        .collect()
}

/// Keep the events that overlap the inclusive date window `[from, to]`.
///
/// Ids are assigned by [`project`] before filtering, so an event keeps its id
/// whichever window it is viewed through.
pub fn events_in_window(
    events: Vec<CalendarEvent>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<CalendarEvent> {
    let window_start = from.map(|date| date.and_time(NaiveTime::default()));
    let window_end = to
        .and_then(|date| date.succ_opt())
        .map(|date| date.and_time(NaiveTime::default()));

    events
        .into_iter()
        .filter(|event| window_start.map_or(true, |start| event.end > start))
        .filter(|event| window_end.map_or(true, |end| event.start < end))
        .collect()
}

fn to_event(index: usize, shift: &Shift) -> CalendarEvent {
    let shift_type = shift.shift_type();
    CalendarEvent {
        id: EVENT_ID_OFFSET + index as u64,
        start: shift.starts_at(),
        end: shift.ends_at(),
        title: format!("{} Shift - {}", shift_type.label(), shift.work_location),
        color_tag: color_for(shift_type),
        description: describe(shift),
        owner_ref: UNASSIGNED_OWNER.to_string(),
    }
}

fn color_for(shift_type: ShiftType) -> ColorTag {
    match shift_type {
        ShiftType::Open => ColorTag::Blue,
        ShiftType::Closed => ColorTag::Green,
    }
}

/// Multi-line summary of timing, location, staffing and instructions
pub fn describe(shift: &Shift) -> String {
    let roles = shift
        .role_requirements
        .iter()
        .map(|requirement| format!("{}x {}", requirement.quantity, requirement.role))
        .collect::<Vec<_>>()
        .join(", ");

    let mut lines = vec![
        format!(
            "Time: {} - {}",
            hh_mm::format(&shift.start_time),
            hh_mm::format(&shift.end_time)
        ),
        format!("Location: {}", shift.work_location),
        format!("Roles: {}", roles),
    ];
    if let Some(instructions) = shift.instructions() {
        lines.push(format!("Instructions: {}", instructions));
    }
    lines.join("\n")
}
