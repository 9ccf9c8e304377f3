mod cache;
mod file;
mod http;
mod range;
mod transport;

pub use cache::{Clock, ReadCache, SystemClock, DEFAULT_VALIDITY};
pub use file::FileTransport;
pub use http::GoogleSheetsTransport;
pub use range::{cell_address, column_letter};
pub use transport::{Transport, TransportError};

use thiserror::Error;
use tracing::debug;

use crate::record::{Column, Status, StudentRecord};
use crate::roster::Roster;

/// Full read span covering every mapped column plus one spare.
pub const ROSTER_RANGE: &str = "A:N";

#[derive(Debug, Error)]
pub enum SheetError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// `update_status` matched nobody; no write was issued.
    #[error("no student matched name {name:?}")]
    NotFound { name: String },
}

/// Cached front onto the tabular service. Reads go through a time-boxed
/// cache keyed by range; any successful write clears the whole cache so a
/// following read cannot be served data predating the write.
pub struct SheetClient {
    transport: Box<dyn Transport>,
    cache: ReadCache,
}

impl SheetClient {
    pub fn new(transport: Box<dyn Transport>) -> SheetClient {
        SheetClient::with_cache(transport, ReadCache::new(DEFAULT_VALIDITY))
    }

    pub fn with_cache(transport: Box<dyn Transport>, cache: ReadCache) -> SheetClient {
        SheetClient { transport, cache }
    }

    pub fn read_range(&mut self, range: &str) -> Result<Vec<Vec<String>>, SheetError> {
        if let Some(rows) = self.cache.get(range) {
            return Ok(rows.to_vec());
        }
        let rows = self.transport.read(range)?;
        debug!(range, rows = rows.len(), "sheet read");
        self.cache.put(range, rows.clone());
        Ok(rows)
    }

    pub fn write_range(&mut self, range: &str, rows: &[Vec<String>]) -> Result<(), SheetError> {
        self.transport.write(range, rows)?;
        debug!(range, "sheet write, cache cleared");
        self.cache.clear();
        Ok(())
    }

    pub fn update_cell(&mut self, row: usize, col: usize, value: &str) -> Result<(), SheetError> {
        let address = range::cell_address(row, col);
        self.write_range(&address, &[vec![value.to_string()]])
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn fetch_roster(&mut self) -> Result<Roster, SheetError> {
        let rows = self.read_range(ROSTER_RANGE)?;
        Ok(Roster::decode(&rows))
    }

    /// Write a new status (and a memo, when non-empty) for the first record
    /// in snapshot order whose name matches; further matches are ignored
    /// and disambiguation stays with the caller. Status and memo are
    /// independently-failable writes with no rollback. The snapshot is not
    /// patched in place: the returned record is a copy carrying the
    /// written values, and only a refetch observes them.
    pub fn update_status(
        &mut self,
        name: &str,
        status: &Status,
        memo: &str,
    ) -> Result<StudentRecord, SheetError> {
        let roster = self.fetch_roster()?;
        let Some(first) = roster.find_by_name(name).into_iter().next() else {
            return Err(SheetError::NotFound {
                name: name.to_string(),
            });
        };
        let mut updated = first.clone();
        self.update_cell(updated.row_index, Column::Status.index(), status.label())?;
        updated.status = status.clone();
        if !memo.is_empty() {
            self.update_cell(updated.row_index, Column::Memo.index(), memo)?;
            updated.memo = memo.to_string();
        }
        Ok(updated)
    }
}
