use chrono::{Days, NaiveDateTime, Timelike};
use serde::Serialize;

/// Building codes in sheet order. The first character of every room number
/// must be one of these for the layout tables below to resolve.
pub const BUILDINGS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

pub const FLOORS: [u8; 4] = [1, 2, 3, 4];

/// Every room on this floor is a three-person room, in every building.
pub const TRIPLE_FLOOR: u8 = 4;

/// Status labels a front end should offer. Decoding tolerates anything;
/// see `record::Status::from_label`.
pub const STATUS_LABELS: [&str; 7] = ["외박", "외출", "퇴소", "이동+", "이동-", "정상", "기타"];

/// Nightly reports run from 22:00 through 21:59 the next day, so the
/// reporting day cuts over at 22:00 rather than midnight.
pub const REPORT_START_HOUR: u32 = 22;
pub const REPORT_END_HOUR: u32 = 21;
pub const REPORT_END_MINUTE: u32 = 59;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unknown,
}

pub fn gender_of(building: &str) -> Gender {
    match building {
        "A" | "B" | "C" | "F" => Gender::Male,
        "D" | "E" => Gender::Female,
        _ => Gender::Unknown,
    }
}

fn rooms_per_floor(building: &str) -> Option<u32> {
    match building {
        "A" | "C" => Some(32),
        "B" => Some(21),
        "D" => Some(23),
        "E" => Some(40),
        "F" => Some(17),
        _ => None,
    }
}

/// Inclusive numeric bounds of the valid room numbers on one floor,
/// e.g. B2 -> (201, 221).
pub fn room_range(building: &str, floor: u8) -> Option<(u32, u32)> {
    if !FLOORS.contains(&floor) {
        return None;
    }
    let count = rooms_per_floor(building)?;
    let base = floor as u32 * 100;
    Some((base + 1, base + count))
}

pub fn is_triple_floor(floor: u8) -> bool {
    floor == TRIPLE_FLOOR
}

/// Full room-number strings for one floor, in room order ("A401", ...).
pub fn room_numbers(building: &str, floor: u8) -> Option<Vec<String>> {
    let (start, end) = room_range(building, floor)?;
    Some((start..=end).map(|n| format!("{building}{n:03}")).collect())
}

/// Precomputed sheet-row span for a (building, floor) block, usable as a
/// bulk-read hint. Only the triple floor is mapped; row identity always
/// comes from a decoded record's rowIndex, never from this table.
pub fn row_range(building: &str, floor: u8) -> Option<(u32, u32)> {
    match (building, floor) {
        ("A", 4) => Some((187, 282)),
        ("B", 4) => Some((405, 467)),
        ("C", 4) => Some((653, 748)),
        ("D", 4) => Some((883, 951)),
        ("E", 4) => Some((1184, 1303)),
        ("F", 4) => Some((1402, 1452)),
        _ => None,
    }
}

/// Calendar-day key (YYYY-MM-DD) for deduplicating report submissions.
/// Before the cutover hour the submission still belongs to the previous
/// day's period.
pub fn report_period_id(now: NaiveDateTime) -> String {
    let day = if now.hour() < REPORT_START_HOUR {
        now.date()
            .checked_sub_days(Days::new(1))
            .unwrap_or_else(|| now.date())
    } else {
        now.date()
    };
    day.format("%Y-%m-%d").to_string()
}

pub fn report_window_open(now: NaiveDateTime) -> bool {
    let (hour, minute) = (now.hour(), now.minute());
    hour >= REPORT_START_HOUR
        || hour < REPORT_END_HOUR
        || (hour == REPORT_END_HOUR && minute <= REPORT_END_MINUTE)
}
