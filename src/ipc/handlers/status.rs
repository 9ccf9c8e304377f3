use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{get_optional_str, get_required_str, sheet_failure, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::record::Status;
use crate::sheet::SheetClient;

fn status_update(
    sheet: &mut SheetClient,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let name = get_required_str(params, "name")?;
    // An empty query would match every record under the symmetric name
    // match and silently write to whichever row comes first.
    if name.is_empty() {
        return Err(HandlerErr::bad_params("name must not be empty"));
    }
    let label = get_required_str(params, "status")?;
    let memo = get_optional_str(params, "memo")?.unwrap_or_default();

    let status = Status::from_label(&label);
    let student = sheet
        .update_status(&name, &status, &memo)
        .map_err(sheet_failure)?;
    Ok(json!({ "student": student }))
}

fn handle_status_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(sheet) = state.sheet.as_mut() else {
        return err(&req.id, "no_sheet", "connect a sheet first", None);
    };
    match status_update(sheet, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "status.update" => Some(handle_status_update(state, req)),
        _ => None,
    }
}
