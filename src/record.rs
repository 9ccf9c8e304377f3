use serde::ser::Serializer;
use serde::Serialize;

/// Fixed column layout of the roster sheet, 1-based. Column 1 holds a
/// serial number this decoder never reads; 11 and 14 are spare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    RoomNumber,
    Name,
    Status,
    Memo,
    ParentPhone,
    StudentPhone,
    LabSeat,
    Group,
    Teacher,
    Gender,
    AdmissionDate,
}

impl Column {
    /// 1-based position in the sheet.
    pub fn index(self) -> usize {
        match self {
            Column::RoomNumber => 2,
            Column::Name => 3,
            Column::Status => 4,
            Column::Memo => 5,
            Column::ParentPhone => 6,
            Column::StudentPhone => 7,
            Column::LabSeat => 8,
            Column::Group => 9,
            Column::Teacher => 10,
            Column::Gender => 12,
            Column::AdmissionDate => 13,
        }
    }
}

/// Residency status as written in the status column. An empty cell counts
/// the same as the normal label everywhere occupancy is computed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Empty,
    Normal,
    Away,
    OutOvernight,
    CheckedOut,
    MovedIn,
    MovedOut,
    Other(String),
}

impl Status {
    pub fn from_label(label: &str) -> Status {
        match label {
            "" => Status::Empty,
            "정상" => Status::Normal,
            "외출" => Status::Away,
            "외박" => Status::OutOvernight,
            "퇴소" => Status::CheckedOut,
            "이동+" => Status::MovedIn,
            "이동-" => Status::MovedOut,
            other => Status::Other(other.to_string()),
        }
    }

    /// The raw cell value this status round-trips to.
    pub fn label(&self) -> &str {
        match self {
            Status::Empty => "",
            Status::Normal => "정상",
            Status::Away => "외출",
            Status::OutOvernight => "외박",
            Status::CheckedOut => "퇴소",
            Status::MovedIn => "이동+",
            Status::MovedOut => "이동-",
            Status::Other(label) => label,
        }
    }

    /// Whether the student is physically in the dorm tonight.
    pub fn is_present(&self) -> bool {
        matches!(self, Status::Empty | Status::Normal)
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// One decoded roster row. `building`/`floor`/`room` are derived from
/// `room_number` by the decoder and carry no authority of their own.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub row_index: usize,
    pub room_number: String,
    pub building: String,
    pub floor: String,
    pub room: String,
    pub name: String,
    pub status: Status,
    pub memo: String,
    pub parent_phone: String,
    pub student_phone: String,
    pub lab_seat: String,
    pub group: String,
    pub teacher: String,
    pub gender: String,
    pub admission_date: String,
}

fn cell(cells: &[String], column: Column) -> &str {
    cells
        .get(column.index() - 1)
        .map(String::as_str)
        .unwrap_or("")
}

fn split_room_number(room_number: &str) -> (String, String, String) {
    let mut chars = room_number.chars();
    let building = chars.next().map(String::from).unwrap_or_default();
    let floor = chars.next().map(String::from).unwrap_or_default();
    (building, floor, chars.collect())
}

/// Decode one raw sheet row at the given 1-based row position. Rows without
/// both a room number and a name are spacers or section headers, not
/// errors, and yield no record. Room numbers are split as-is; validating
/// them against the layout tables is a caller concern.
pub fn decode_row(row_index: usize, cells: &[String]) -> Option<StudentRecord> {
    let room_number = cell(cells, Column::RoomNumber);
    let name = cell(cells, Column::Name);
    if room_number.is_empty() || name.is_empty() {
        return None;
    }
    let (building, floor, room) = split_room_number(room_number);
    Some(StudentRecord {
        row_index,
        room_number: room_number.to_string(),
        building,
        floor,
        room,
        name: name.to_string(),
        status: Status::from_label(cell(cells, Column::Status)),
        memo: cell(cells, Column::Memo).to_string(),
        parent_phone: cell(cells, Column::ParentPhone).to_string(),
        student_phone: cell(cells, Column::StudentPhone).to_string(),
        lab_seat: cell(cells, Column::LabSeat).to_string(),
        group: cell(cells, Column::Group).to_string(),
        teacher: cell(cells, Column::Teacher).to_string(),
        gender: cell(cells, Column::Gender).to_string(),
        admission_date: cell(cells, Column::AdmissionDate).to_string(),
    })
}
