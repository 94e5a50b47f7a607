use std::fmt::{self, Display, Formatter};
use std::string::FromUtf8Error;

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::BoxDynError;
use crate::json::{JsonCodec, JsonRawValue};
use crate::types::Type;
use crate::value::DriverValue;

/// Pre-encoded JSON text, passed through without being parsed into a document.
///
/// The text is not validated on construction or when scanned from the driver; it is
/// checked when it is written back out, either to the driver or as JSON.
///
/// ```
/// # use nullish_core::types::{NullJson, RawJson};
/// let raw = NullJson::some(RawJson::new(r#"{"foo":"bar"}"#));
///
/// assert_eq!(raw.to_json().unwrap(), br#"{"foo":"bar"}"#);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RawJson(String);

impl RawJson {
    pub fn new(json: impl Into<String>) -> Self {
        RawJson(json.into())
    }

    pub fn from_bytes(json: Vec<u8>) -> Result<Self, FromUtf8Error> {
        String::from_utf8(json).map(RawJson)
    }

    /// The `null` document.
    pub fn null() -> Self {
        RawJson(String::from("null"))
    }

    pub fn get(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Borrow the text as a validated [`JsonRawValue`].
    pub fn to_raw_value(&self) -> Result<&JsonRawValue, serde_json::Error> {
        serde_json::from_str(&self.0)
    }
}

impl From<Box<JsonRawValue>> for RawJson {
    fn from(raw: Box<JsonRawValue>) -> Self {
        RawJson(raw.get().to_owned())
    }
}

impl From<RawJson> for String {
    fn from(raw: RawJson) -> Self {
        raw.0
    }
}

impl AsRef<str> for RawJson {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for RawJson {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Type for RawJson {
    fn type_name() -> &'static str {
        "raw json"
    }

    fn zero() -> Self {
        RawJson::default()
    }
}

// Binds the document as written, minus surrounding whitespace. Interior formatting is
// kept, matching the verbatim JSON output.
impl Encode for RawJson {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        Ok(DriverValue::Text(self.to_raw_value()?.get().to_owned()))
    }
}

impl Decode for RawJson {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        match value {
            DriverValue::Text(text) => Ok(RawJson(text)),
            // an empty column is the `null` document, not an empty one
            DriverValue::Blob(blob) if blob.is_empty() => Ok(RawJson::null()),
            DriverValue::Blob(blob) => Ok(RawJson::from_bytes(blob)?),
            other => other.unexpected(),
        }
    }
}

impl JsonCodec for RawJson {
    fn serialize_json<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_raw_value()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }

    fn deserialize_json<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Box::<JsonRawValue>::deserialize(deserializer).map(RawJson::from)
    }
}
