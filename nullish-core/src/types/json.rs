use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::BoxDynError;
use crate::json::{JsonObject, JsonValue};
use crate::types::Type;
use crate::value::DriverValue;

impl Type for Vec<JsonValue> {
    fn type_name() -> &'static str {
        "array"
    }

    fn zero() -> Self {
        Vec::new()
    }
}

impl Type for Vec<JsonObject> {
    fn type_name() -> &'static str {
        "array of objects"
    }

    fn zero() -> Self {
        Vec::new()
    }
}

impl Type for JsonObject {
    fn type_name() -> &'static str {
        "object"
    }

    fn zero() -> Self {
        JsonObject::new()
    }
}

impl Encode for Vec<JsonValue> {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        encode_document(self)
    }
}

impl Encode for Vec<JsonObject> {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        encode_document(self)
    }
}

impl Encode for JsonObject {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        encode_document(self)
    }
}

impl Decode for Vec<JsonValue> {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        decode_document(value)
    }
}

impl Decode for Vec<JsonObject> {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        decode_document(value)
    }
}

impl Decode for JsonObject {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        decode_document(value)
    }
}

impl_json_codec_via_serde!(Vec<JsonValue>, Vec<JsonObject>, JsonObject);

fn encode_document<T: Serialize>(document: &T) -> Result<DriverValue, BoxDynError> {
    Ok(DriverValue::Text(serde_json::to_string(document)?))
}

/// Accepts either a structured value the driver already decoded, or the JSON text of one.
/// Either way the document must have the shape of `T`.
fn decode_document<T>(value: DriverValue) -> Result<T, BoxDynError>
where
    T: Type + DeserializeOwned,
{
    match value {
        DriverValue::Json(document) => Ok(serde_json::from_value(document)?),
        DriverValue::Text(text) => Ok(serde_json::from_str(&text)?),
        DriverValue::Blob(blob) => Ok(serde_json::from_slice(&blob)?),
        other => other.unexpected(),
    }
}
