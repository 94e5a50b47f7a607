use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use uuid::Uuid;

use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::BoxDynError;
use crate::json::JsonCodec;
use crate::types::Type;
use crate::value::DriverValue;

// length of the canonical `xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx` form
const HYPHENATED_LEN: usize = 36;

impl Type for Uuid {
    fn type_name() -> &'static str {
        "uuid"
    }

    fn zero() -> Self {
        Uuid::nil()
    }
}

impl Encode for Uuid {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        Ok(DriverValue::Text(self.hyphenated().to_string()))
    }
}

impl Decode for Uuid {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        match value {
            DriverValue::Text(text) => parse_hyphenated(&text),
            DriverValue::Blob(blob) => Ok(Uuid::from_slice(&blob)?),
            other => other.unexpected(),
        }
    }
}

impl JsonCodec for Uuid {
    fn serialize_json<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.hyphenated().encode_lower(&mut Uuid::encode_buffer()))
    }

    fn deserialize_json<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        parse_hyphenated(&text).map_err(D::Error::custom)
    }
}

/// `Uuid::parse_str` also takes the simple, braced and URN forms; only the hyphenated
/// form is canonical here.
fn parse_hyphenated(text: &str) -> Result<Uuid, BoxDynError> {
    if text.len() != HYPHENATED_LEN {
        return Err(format!(
            "expected a {HYPHENATED_LEN}-character hyphenated UUID, got {text:?}"
        )
        .into());
    }

    Ok(Uuid::parse_str(text)?)
}
