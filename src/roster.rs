use crate::record::{self, StudentRecord};

/// Every record decoded from one fetch cycle, in sheet order. Snapshots are
/// immutable; a write to the sheet is observed by fetching a new one.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    students: Vec<StudentRecord>,
}

impl Roster {
    /// Decode a raw full-range read. The first row is the sheet header and
    /// never yields a record; data rows keep their 1-based sheet position.
    pub fn decode(rows: &[Vec<String>]) -> Roster {
        let students = rows
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(i, cells)| record::decode_row(i + 1, cells))
            .collect();
        Roster { students }
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Symmetric partial match: a record matches when its name contains the
    /// query or the query contains the name, so both clipped and
    /// over-complete inputs ("김철", "김철수 학생") still resolve. Matching
    /// is exact on the source strings; no case or width folding.
    pub fn find_by_name(&self, query: &str) -> Vec<&StudentRecord> {
        self.students
            .iter()
            .filter(|s| s.name.contains(query) || query.contains(s.name.as_str()))
            .collect()
    }

    pub fn find_by_room(&self, room_number: &str) -> Vec<&StudentRecord> {
        self.students
            .iter()
            .filter(|s| s.room_number == room_number)
            .collect()
    }

    pub fn find_by_lab_seat(&self, seat: &str) -> Vec<&StudentRecord> {
        self.students
            .iter()
            .filter(|s| s.lab_seat == seat)
            .collect()
    }

    /// Floor arrives as a string: callers hold either the digit sliced from
    /// a room number or a plain number, so comparison happens in string
    /// space.
    pub fn find_by_building_floor(&self, building: &str, floor: &str) -> Vec<&StudentRecord> {
        self.students
            .iter()
            .filter(|s| s.building == building && s.floor == floor)
            .collect()
    }
}
