use crate::domain::model::Record;
use crate::utils::error::{CdmError, Result};

/// Turns Golden Schema JSON text into a [`Record`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GoldenSchemaParser;

impl GoldenSchemaParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, json: &str) -> Result<Record> {
        if json.trim().is_empty() {
            return Err(CdmError::InvalidInput {
                message: "JSON string cannot be null or empty".to_string(),
            });
        }

        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| CdmError::MalformedPayload {
                message: format!("Failed to parse JSON: {}", e),
            })?;

        match value {
            serde_json::Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(CdmError::MalformedPayload {
                message: format!(
                    "Golden Schema must be a JSON object, found {}",
                    json_type_name(&other)
                ),
            }),
        }
    }
}

pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
