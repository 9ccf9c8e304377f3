use serde_json::json;

use crate::config;
use crate::ipc::error::ok;
use crate::ipc::helpers::{get_required_str, get_string_or_number, HandlerErr};
use crate::ipc::types::{AppState, Request};

fn rooms_list(params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let building = get_required_str(params, "building")?;
    let floor_raw = get_string_or_number(params, "floor")?;
    let floor: u8 = floor_raw
        .parse()
        .map_err(|_| HandlerErr::bad_params("floor must be a number"))?;

    let Some(rooms) = config::room_numbers(&building, floor) else {
        return Err(HandlerErr {
            code: "not_found",
            message: format!("no rooms for building {} floor {}", building, floor),
            details: None,
        });
    };

    Ok(json!({
        "building": building,
        "floor": floor,
        "rooms": rooms,
        "roomRange": config::room_range(&building, floor).map(|(a, b)| [a, b]),
        "tripleOccupancy": config::is_triple_floor(floor),
        "rowRange": config::row_range(&building, floor).map(|(a, b)| [a, b]),
    }))
}

fn handle_rooms_list(req: &Request) -> serde_json::Value {
    match rooms_list(&req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "rooms.list" => Some(handle_rooms_list(req)),
        _ => None,
    }
}
