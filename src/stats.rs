use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::{self, Gender};
use crate::record::StudentRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub total: u32,
    pub current: u32,
}

impl Tally {
    fn add(&mut self, present: bool) {
        self.total += 1;
        if present {
            self.current += 1;
        }
    }
}

/// Occupancy aggregate over one roster snapshot.
///
/// `status_counts` is keyed by the raw status label, with the empty string
/// as its own key; a caller that wants empty folded into the normal label
/// has to do that itself. Floor keys concatenate building and floor
/// ("A4").
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyStats {
    pub total: u32,
    pub current: u32,
    pub male: Tally,
    pub female: Tally,
    pub other: Tally,
    pub status_counts: BTreeMap<String, u32>,
    pub building_stats: BTreeMap<String, Tally>,
    pub floor_stats: BTreeMap<String, Tally>,
}

/// Single pass, every record counted exactly once. A record is current iff
/// its status is empty or the normal label. Buildings without a gender
/// mapping land in the `other` bucket and touch neither gender tally.
pub fn occupancy(students: &[StudentRecord]) -> OccupancyStats {
    let mut stats = OccupancyStats::default();
    for s in students {
        let present = s.status.is_present();
        stats.total += 1;
        if present {
            stats.current += 1;
        }
        match config::gender_of(&s.building) {
            Gender::Male => stats.male.add(present),
            Gender::Female => stats.female.add(present),
            Gender::Unknown => stats.other.add(present),
        }
        *stats
            .status_counts
            .entry(s.status.label().to_string())
            .or_insert(0) += 1;
        stats
            .building_stats
            .entry(s.building.clone())
            .or_default()
            .add(present);
        stats
            .floor_stats
            .entry(format!("{}{}", s.building, s.floor))
            .or_default()
            .add(present);
    }
    stats
}
