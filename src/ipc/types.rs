use serde::Deserialize;

use crate::sheet::SheetClient;

#[derive(Debug, Deserialize)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub sheet: Option<SheetClient>,
    /// Human-readable description of the connected backend, for `health`.
    pub source: Option<String>,
}
