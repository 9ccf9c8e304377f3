use std::fs;
use std::path::{Path, PathBuf};

use super::range::{parse_range, RangeRef};
use super::transport::{Transport, TransportError};

/// Tab-separated local file standing in for the remote sheet, for offline
/// operation and tests. Cell values may not contain tabs or newlines.
pub struct FileTransport {
    path: PathBuf,
}

impl FileTransport {
    pub fn open(path: &Path) -> Result<FileTransport, TransportError> {
        if !path.is_file() {
            return Err(TransportError::failed(
                "open",
                "",
                format!("{} is not a file", path.display()),
            ));
        }
        Ok(FileTransport {
            path: path.to_path_buf(),
        })
    }

    fn load(&self, op: &'static str, range: &str) -> Result<Vec<Vec<String>>, TransportError> {
        let text = fs::read_to_string(&self.path)
            .map_err(|e| TransportError::failed(op, range, e.to_string()))?;
        Ok(text
            .lines()
            .map(|line| line.split('\t').map(str::to_string).collect())
            .collect())
    }

    fn store(&self, grid: &[Vec<String>], range: &str) -> Result<(), TransportError> {
        let mut text = String::new();
        for row in grid {
            text.push_str(&row.join("\t"));
            text.push('\n');
        }
        fs::write(&self.path, text).map_err(|e| TransportError::failed("write", range, e.to_string()))
    }
}

impl Transport for FileTransport {
    fn read(&mut self, range: &str) -> Result<Vec<Vec<String>>, TransportError> {
        let grid = self.load("read", range)?;
        match parse_range(range)? {
            RangeRef::Columns { start, end } => Ok(grid
                .iter()
                .map(|row| {
                    row.iter()
                        .skip(start - 1)
                        .take(end - start + 1)
                        .cloned()
                        .collect()
                })
                .collect()),
            RangeRef::Cell { row, col } => {
                // Like the remote service, an address past the grid reads
                // back as no values rather than an error.
                Ok(grid
                    .get(row - 1)
                    .and_then(|cells| cells.get(col - 1))
                    .map(|value| vec![vec![value.clone()]])
                    .unwrap_or_default())
            }
        }
    }

    fn write(&mut self, range: &str, rows: &[Vec<String>]) -> Result<(), TransportError> {
        let mut grid = self.load("write", range)?;
        let (row0, col0) = match parse_range(range)? {
            RangeRef::Cell { row, col } => (row, col),
            RangeRef::Columns { start, .. } => (1, start),
        };
        for (r, cells) in rows.iter().enumerate() {
            for (c, value) in cells.iter().enumerate() {
                set_cell(&mut grid, row0 - 1 + r, col0 - 1 + c, value);
            }
        }
        self.store(&grid, range)
    }
}

fn set_cell(grid: &mut Vec<Vec<String>>, row: usize, col: usize, value: &str) {
    while grid.len() <= row {
        grid.push(Vec::new());
    }
    let cells = &mut grid[row];
    while cells.len() <= col {
        cells.push(String::new());
    }
    cells[col] = value.to_string();
}
