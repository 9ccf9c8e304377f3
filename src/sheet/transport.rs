use thiserror::Error;

/// Boundary to the tabular service holding the roster. Implementations
/// resolve range specs (`A:N` spans, `D12` cells) against one sheet.
pub trait Transport {
    fn read(&mut self, range: &str) -> Result<Vec<Vec<String>>, TransportError>;
    fn write(&mut self, range: &str, rows: &[Vec<String>]) -> Result<(), TransportError>;
}

/// A single failed call, surfaced as-is: no retry, no transient/permanent
/// distinction.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Non-success status from the backing service.
    #[error("sheet {op} {range} failed with status {status}")]
    Status {
        op: &'static str,
        range: String,
        status: u16,
    },
    #[error("sheet {op} {range} failed: {message}")]
    Failed {
        op: &'static str,
        range: String,
        message: String,
    },
    #[error("unsupported range {0:?}")]
    BadRange(String),
}

impl TransportError {
    pub fn failed(op: &'static str, range: &str, message: impl Into<String>) -> TransportError {
        TransportError::Failed {
            op,
            range: range.to_string(),
            message: message.into(),
        }
    }
}
