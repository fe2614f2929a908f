use serde_json::Value;

use crate::error::{Error, Result};
use crate::units::MassUnit;

/// Reads `data.attributes.carbon_<units>` from an estimate response.
///
/// The number is returned as sent by the service; nothing is converted locally.
/// A missing object or key is an error, never a default.
pub fn extract_carbon(response: &Value, units: MassUnit) -> Result<f64> {
    let data = field(response, "data", "data")?;
    let attributes = field(data, "attributes", "data.attributes")?;
    let key = units.attribute_key();
    let path = format!("data.attributes.{key}");
    let value = field(attributes, key, &path)?;

    value
        .as_f64()
        .ok_or_else(|| Error::UnexpectedResponse(format!("`{path}` is not a number: {value}")))
}

fn field<'a>(parent: &'a Value, key: &str, path: &str) -> Result<&'a Value> {
    match parent.get(key) {
        Some(Value::Null) | None => Err(Error::MissingField {
            path: path.to_string(),
        }),
        Some(v) => Ok(v),
    }
}
