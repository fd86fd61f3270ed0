use deals_core::DealRecord;
use deals_logging::deals_warn;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum PayloadError {
    #[error("body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Decode a `/deals` response body into its `items`.
///
/// A missing or non-array `items` is an empty page. Entries that do not
/// look like a deal are skipped with a warning.
pub fn decode_deals(bytes: &[u8]) -> Result<Vec<DealRecord>, PayloadError> {
    let mut body = match serde_json::from_slice::<Value>(bytes)? {
        Value::Object(body) => body,
        other => return Err(PayloadError::NotAnObject(json_kind(&other))),
    };

    let items = match body.remove("items") {
        Some(Value::Array(items)) => items,
        Some(other) => {
            deals_warn!("items is {}, treating page as empty", json_kind(&other));
            return Ok(Vec::new());
        }
        None => return Ok(Vec::new()),
    };

    let mut deals = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<DealRecord>(item) {
            Ok(deal) => deals.push(deal),
            Err(err) => deals_warn!("skipping deal at index {}: {}", index, err),
        }
    }
    Ok(deals)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
