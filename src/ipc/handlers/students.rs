use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{get_required_str, get_string_or_number, sheet_failure, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::sheet::SheetClient;

fn students_list(sheet: &mut SheetClient) -> Result<serde_json::Value, HandlerErr> {
    let roster = sheet.fetch_roster().map_err(sheet_failure)?;
    Ok(json!({ "students": roster.students() }))
}

fn students_find_by_name(
    sheet: &mut SheetClient,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let name = get_required_str(params, "name")?;
    let roster = sheet.fetch_roster().map_err(sheet_failure)?;
    Ok(json!({ "students": roster.find_by_name(&name) }))
}

fn students_find_by_room(
    sheet: &mut SheetClient,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let room_number = get_required_str(params, "roomNumber")?;
    let roster = sheet.fetch_roster().map_err(sheet_failure)?;
    Ok(json!({ "students": roster.find_by_room(&room_number) }))
}

fn students_find_by_lab_seat(
    sheet: &mut SheetClient,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let seat = get_required_str(params, "seat")?;
    let roster = sheet.fetch_roster().map_err(sheet_failure)?;
    Ok(json!({ "students": roster.find_by_lab_seat(&seat) }))
}

fn students_find_by_building_floor(
    sheet: &mut SheetClient,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let building = get_required_str(params, "building")?;
    let floor = get_string_or_number(params, "floor")?;
    let roster = sheet.fetch_roster().map_err(sheet_failure)?;
    Ok(json!({ "students": roster.find_by_building_floor(&building, &floor) }))
}

fn handle_students_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(sheet) = state.sheet.as_mut() else {
        return err(&req.id, "no_sheet", "connect a sheet first", None);
    };
    match students_list(sheet) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

fn handle_students_find_by_name(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(sheet) = state.sheet.as_mut() else {
        return err(&req.id, "no_sheet", "connect a sheet first", None);
    };
    match students_find_by_name(sheet, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

fn handle_students_find_by_room(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(sheet) = state.sheet.as_mut() else {
        return err(&req.id, "no_sheet", "connect a sheet first", None);
    };
    match students_find_by_room(sheet, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

fn handle_students_find_by_lab_seat(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(sheet) = state.sheet.as_mut() else {
        return err(&req.id, "no_sheet", "connect a sheet first", None);
    };
    match students_find_by_lab_seat(sheet, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

fn handle_students_find_by_building_floor(
    state: &mut AppState,
    req: &Request,
) -> serde_json::Value {
    let Some(sheet) = state.sheet.as_mut() else {
        return err(&req.id, "no_sheet", "connect a sheet first", None);
    };
    match students_find_by_building_floor(sheet, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_students_list(state, req)),
        "students.findByName" => Some(handle_students_find_by_name(state, req)),
        "students.findByRoom" => Some(handle_students_find_by_room(state, req)),
        "students.findByLabSeat" => Some(handle_students_find_by_lab_seat(state, req)),
        "students.findByBuildingFloor" => {
            Some(handle_students_find_by_building_floor(state, req))
        }
        _ => None,
    }
}
