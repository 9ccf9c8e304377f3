use crate::ipc::error::err;
use crate::sheet::{SheetError, TransportError};

pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl HandlerErr {
    pub fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, self.details)
    }

    pub fn bad_params(message: impl Into<String>) -> HandlerErr {
        HandlerErr {
            code: "bad_params",
            message: message.into(),
            details: None,
        }
    }
}

pub fn get_required_str(params: &serde_json::Value, key: &str) -> Result<String, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| HandlerErr::bad_params(format!("missing {}", key)))
}

pub fn get_optional_str(
    params: &serde_json::Value,
    key: &str,
) -> Result<Option<String>, HandlerErr> {
    let Some(v) = params.get(key) else {
        return Ok(None);
    };
    if v.is_null() {
        return Ok(None);
    }
    let Some(s) = v.as_str() else {
        return Err(HandlerErr::bad_params(format!("{} must be a string", key)));
    };
    Ok(Some(s.to_string()))
}

/// Floors arrive as `"4"` or `4` depending on the front end; both collapse
/// to the string form the roster compares against.
pub fn get_string_or_number(params: &serde_json::Value, key: &str) -> Result<String, HandlerErr> {
    let Some(v) = params.get(key) else {
        return Err(HandlerErr::bad_params(format!("missing {}", key)));
    };
    if let Some(s) = v.as_str() {
        return Ok(s.to_string());
    }
    if let Some(n) = v.as_u64() {
        return Ok(n.to_string());
    }
    Err(HandlerErr::bad_params(format!(
        "{} must be a string or number",
        key
    )))
}

pub fn sheet_failure(error: SheetError) -> HandlerErr {
    match error {
        SheetError::NotFound { name } => HandlerErr {
            code: "not_found",
            message: format!("no student matched name {:?}", name),
            details: None,
        },
        SheetError::Transport(t) => {
            let op = match &t {
                TransportError::Status { op, .. } | TransportError::Failed { op, .. } => *op,
                TransportError::BadRange(_) => "read",
            };
            let code = if op == "write" {
                "sheet_write_failed"
            } else {
                "sheet_read_failed"
            };
            HandlerErr {
                code,
                message: t.to_string(),
                details: None,
            }
        }
    }
}
