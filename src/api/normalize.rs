//! Response Normalization
//!
//! The plant endpoints answer with a bare list, `{ "plants": ... }` or
//! `{ "data": ... }`, holding either a list or a single object.

use serde::Deserialize;
use serde_json::Value;

use super::error::{ApiError, ApiResult};
use crate::models::{Category, Plant};

/// Envelope keys checked in order
const ENVELOPE_KEYS: &[&str] = &["plants", "data"];

/// Reduce any accepted response shape to a list of raw values.
pub fn normalize_plants(body: Value) -> Vec<Value> {
    match body {
        Value::Array(list) => list,
        Value::Object(mut map) => ENVELOPE_KEYS
            .iter()
            .find_map(|key| map.remove(*key).filter(is_present))
            .map(|inner| match inner {
                Value::Array(list) => list,
                single => vec![single],
            })
            .unwrap_or_default(),
        _ => Vec::new(),
    }
}

/// Envelope values that count as absent: null, false, 0 and ""
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Normalize then decode into plants.
pub fn decode_plants(body: Value) -> ApiResult<Vec<Plant>> {
    normalize_plants(body)
        .into_iter()
        .map(|value| serde_json::from_value::<Plant>(value).map_err(ApiError::from))
        .collect()
}

/// First plant of a detail response; an empty response means not found.
pub fn decode_plant(body: Value, plant_id: u32) -> ApiResult<Plant> {
    decode_plants(body)?
        .into_iter()
        .next()
        .ok_or(ApiError::PlantNotFound(plant_id))
}

#[derive(Deserialize)]
struct CategoriesEnvelope {
    #[serde(default)]
    categories: Vec<Category>,
}

/// Decode the `{ "categories": [...] }` envelope.
pub fn decode_categories(body: Value) -> ApiResult<Vec<Category>> {
    let envelope: CategoriesEnvelope = serde_json::from_value(body)?;
    Ok(envelope.categories)
}
