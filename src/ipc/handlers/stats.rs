use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{sheet_failure, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::sheet::SheetClient;
use crate::stats;

fn stats_occupancy(sheet: &mut SheetClient) -> Result<serde_json::Value, HandlerErr> {
    let roster = sheet.fetch_roster().map_err(sheet_failure)?;
    Ok(json!(stats::occupancy(roster.students())))
}

fn handle_stats_occupancy(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(sheet) = state.sheet.as_mut() else {
        return err(&req.id, "no_sheet", "connect a sheet first", None);
    };
    match stats_occupancy(sheet) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "stats.occupancy" => Some(handle_stats_occupancy(state, req)),
        _ => None,
    }
}
