use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;

use super::transport::{Transport, TransportError};

const API_BASE: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Google Sheets values-API adapter: one spreadsheet, one named sheet,
/// key-based auth. Failures surface immediately; no timeout or retry
/// policy sits in front of the caller.
pub struct GoogleSheetsTransport {
    client: Client,
    spreadsheet_id: String,
    sheet_name: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    // The API omits `values` entirely for an empty range.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

impl GoogleSheetsTransport {
    pub fn new(spreadsheet_id: &str, sheet_name: &str, api_key: &str) -> GoogleSheetsTransport {
        GoogleSheetsTransport {
            client: Client::new(),
            spreadsheet_id: spreadsheet_id.to_string(),
            sheet_name: sheet_name.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn values_url(&self, range: &str) -> String {
        format!(
            "{API_BASE}/{}/values/{}!{}",
            self.spreadsheet_id, self.sheet_name, range
        )
    }
}

impl Transport for GoogleSheetsTransport {
    fn read(&mut self, range: &str) -> Result<Vec<Vec<String>>, TransportError> {
        let resp = self
            .client
            .get(self.values_url(range))
            .query(&[("key", self.api_key.as_str())])
            .send()
            .map_err(|e| TransportError::failed("read", range, e.to_string()))?;
        if !resp.status().is_success() {
            return Err(TransportError::Status {
                op: "read",
                range: range.to_string(),
                status: resp.status().as_u16(),
            });
        }
        let body: ValueRange = resp
            .json()
            .map_err(|e| TransportError::failed("read", range, e.to_string()))?;
        Ok(body.values)
    }

    fn write(&mut self, range: &str, rows: &[Vec<String>]) -> Result<(), TransportError> {
        let resp = self
            .client
            .put(self.values_url(range))
            .query(&[
                ("valueInputOption", "RAW"),
                ("key", self.api_key.as_str()),
            ])
            .json(&json!({ "values": rows }))
            .send()
            .map_err(|e| TransportError::failed("write", range, e.to_string()))?;
        if !resp.status().is_success() {
            return Err(TransportError::Status {
                op: "write",
                range: range.to_string(),
                status: resp.status().as_u16(),
            });
        }
        Ok(())
    }
}
