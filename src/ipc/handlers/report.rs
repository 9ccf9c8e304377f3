use chrono::Local;
use serde_json::json;

use crate::config;
use crate::ipc::error::ok;
use crate::ipc::types::{AppState, Request};

fn handle_report_window(req: &Request) -> serde_json::Value {
    let now = Local::now().naive_local();
    ok(
        &req.id,
        json!({
            "open": config::report_window_open(now),
            "periodId": config::report_period_id(now),
            "now": now.format("%Y-%m-%d %H:%M:%S").to_string(),
        }),
    )
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "report.window" => Some(handle_report_window(req)),
        _ => None,
    }
}
