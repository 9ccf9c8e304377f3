use std::path::Path;
use std::time::Duration;

use serde_json::json;

use crate::config;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{get_required_str, sheet_failure, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::sheet::{
    FileTransport, GoogleSheetsTransport, ReadCache, SheetClient, Transport, DEFAULT_VALIDITY,
};

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "source": state.source.as_deref(),
        }),
    )
}

fn sheet_connect(params: &serde_json::Value) -> Result<(SheetClient, String), HandlerErr> {
    let path = params.get("path").and_then(|v| v.as_str());
    if path.is_none() && params.get("spreadsheetId").is_none() {
        return Err(HandlerErr::bad_params("missing path or spreadsheetId"));
    }

    let (transport, source): (Box<dyn Transport>, String) = if let Some(path) = path {
        let transport = FileTransport::open(Path::new(path)).map_err(|e| HandlerErr {
            code: "sheet_connect_failed",
            message: e.to_string(),
            details: None,
        })?;
        (Box::new(transport), format!("file:{path}"))
    } else {
        let spreadsheet_id = get_required_str(params, "spreadsheetId")?;
        let sheet_name = get_required_str(params, "sheetName")?;
        let api_key = get_required_str(params, "apiKey")?;
        let transport = GoogleSheetsTransport::new(&spreadsheet_id, &sheet_name, &api_key);
        (
            Box::new(transport),
            format!("sheets:{spreadsheet_id}/{sheet_name}"),
        )
    };

    let cache = match params.get("cacheSeconds") {
        None => ReadCache::new(DEFAULT_VALIDITY),
        Some(v) => {
            let Some(secs) = v.as_u64() else {
                return Err(HandlerErr::bad_params("cacheSeconds must be a number"));
            };
            ReadCache::new(Duration::from_secs(secs))
        }
    };

    Ok((SheetClient::with_cache(transport, cache), source))
}

fn handle_sheet_connect(state: &mut AppState, req: &Request) -> serde_json::Value {
    match sheet_connect(&req.params) {
        Ok((client, source)) => {
            state.sheet = Some(client);
            state.source = Some(source.clone());
            ok(&req.id, json!({ "source": source }))
        }
        Err(error) => error.response(&req.id),
    }
}

fn sheet_refresh(sheet: &mut SheetClient) -> Result<serde_json::Value, HandlerErr> {
    sheet.clear_cache();
    let roster = sheet.fetch_roster().map_err(sheet_failure)?;
    Ok(json!({ "students": roster.len() }))
}

fn handle_sheet_refresh(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(sheet) = state.sheet.as_mut() else {
        return err(&req.id, "no_sheet", "connect a sheet first", None);
    };
    match sheet_refresh(sheet) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

fn handle_config_describe(_state: &mut AppState, req: &Request) -> serde_json::Value {
    let genders: serde_json::Map<String, serde_json::Value> = config::BUILDINGS
        .iter()
        .map(|b| (b.to_string(), json!(config::gender_of(b))))
        .collect();
    ok(
        &req.id,
        json!({
            "buildings": config::BUILDINGS,
            "floors": config::FLOORS,
            "tripleFloor": config::TRIPLE_FLOOR,
            "statusLabels": config::STATUS_LABELS,
            "genders": genders,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "sheet.connect" => Some(handle_sheet_connect(state, req)),
        "sheet.refresh" => Some(handle_sheet_refresh(state, req)),
        "config.describe" => Some(handle_config_describe(state, req)),
        _ => None,
    }
}
