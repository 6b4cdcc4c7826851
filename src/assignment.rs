use crate::render::format_entries;
use crate::schedule_parser::*;
use ::serde::*;

/// Anything the grid can place: it needs a raw schedule string and enough identity to
/// tell two bookings apart.
pub trait Occupant {
    fn get_raw_schedule(&self) -> &str;

    /// Identity used when de-duplicating bookings: the id when there is one, else the title.
    fn get_key_label(&self) -> &str;

    fn get_section(&self) -> &str;

    fn get_title(&self) -> &str;

    fn get_room(&self) -> &str {
        ""
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AssignmentKind {
    FacultyLoad,
    OfficeHours,
}

impl Default for AssignmentKind {
    fn default() -> Self {
        AssignmentKind::FacultyLoad
    }
}

/// A faculty load or office hour record as the host hands it over.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    #[serde(default)]
    id: Option<String>,
    title: String,
    #[serde(default)]
    room: String,
    #[serde(default)]
    section: String,
    #[serde(alias = "rawSchedule", alias = "schedule")]
    raw_schedule: String,
    #[serde(default)]
    kind: AssignmentKind,
    #[serde(default)]
    instructor: String,
    #[serde(default)]
    lecture_hours: u64, // Hours * 100, so 1.50 hours is 150
    #[serde(default)]
    lab_hours: u64,
}

impl Assignment {
    pub fn new(title: impl Into<String>, raw_schedule: impl Into<String>) -> Self {
        Assignment {
            id: None,
            title: title.into(),
            room: String::new(),
            section: String::new(),
            raw_schedule: raw_schedule.into(),
            kind: AssignmentKind::default(),
            instructor: String::new(),
            lecture_hours: 0,
            lab_hours: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = section.into();
        self
    }

    pub fn with_kind(mut self, kind: AssignmentKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    pub fn with_hours(mut self, lecture_hours: u64, lab_hours: u64) -> Self {
        self.lecture_hours = lecture_hours;
        self.lab_hours = lab_hours;
        self
    }

    pub fn get_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn get_kind(&self) -> AssignmentKind {
        self.kind
    }

    pub fn get_instructor(&self) -> &str {
        &self.instructor
    }

    pub fn get_lecture_hours(&self) -> u64 {
        self.lecture_hours
    }

    pub fn get_lab_hours(&self) -> u64 {
        self.lab_hours
    }

    pub fn get_entries(&self) -> Vec<ParsedEntry> {
        parse(&self.raw_schedule)
    }

    pub fn get_timing_minimal(&self) -> String {
        format_entries(&self.get_entries())
    }
}

impl Occupant for Assignment {
    fn get_raw_schedule(&self) -> &str {
        &self.raw_schedule
    }

    fn get_key_label(&self) -> &str {
        match &self.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => &self.title,
        }
    }

    fn get_section(&self) -> &str {
        &self.section
    }

    fn get_title(&self) -> &str {
        &self.title
    }

    fn get_room(&self) -> &str {
        &self.room
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_label_prefers_id() {
        let with_id = Assignment::new("Data Structures", "MON 9AM-10AM").with_id("CS201");
        assert_eq!(with_id.get_key_label(), "CS201");

        let blank_id = Assignment::new("Data Structures", "MON 9AM-10AM").with_id("  ");
        assert_eq!(blank_id.get_key_label(), "Data Structures");

        let without_id = Assignment::new("Consultation", "FRI 1PM-2PM");
        assert_eq!(without_id.get_key_label(), "Consultation");
    }

    #[test]
    fn test_deserialize_host_record() {
        let json = r#"{
            "id": "IT101",
            "title": "Intro to Computing",
            "room": "RM 204",
            "section": "BSIT-1A",
            "rawSchedule": "M/W/F 8:00AM-9:00AM",
            "kind": "FacultyLoad",
            "lecture_hours": 300
        }"#;

        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.get_id(), Some("IT101"));
        assert_eq!(assignment.get_room(), "RM 204");
        assert_eq!(assignment.get_raw_schedule(), "M/W/F 8:00AM-9:00AM");
        assert_eq!(assignment.get_lecture_hours(), 300);
        assert_eq!(assignment.get_lab_hours(), 0);
        assert_eq!(assignment.get_entries().len(), 1);
    }

    #[test]
    fn test_deserialize_minimal_record() {
        let json = r#"{"title": "Office Hours", "schedule": "TBA"}"#;
        let assignment: Assignment = serde_json::from_str(json).unwrap();
        assert_eq!(assignment.get_kind(), AssignmentKind::FacultyLoad);
        assert!(assignment.get_entries().is_empty());
        assert_eq!(assignment.get_timing_minimal(), "");
    }

    #[test]
    fn test_timing_minimal() {
        let assignment = Assignment::new("Networks", "T/TH 1:00PM-2:30PM, SAT 8AM-11AM");
        assert_eq!(
            assignment.get_timing_minimal(),
            "TR | 1:00PM - 2:30PM\nS | 8:00AM - 11:00AM"
        );
    }
}
