use std::str::from_utf8;

use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::BoxDynError;
use crate::json::JsonCodec;
use crate::types::Type;
use crate::value::DriverValue;

impl Type for f64 {
    fn type_name() -> &'static str {
        "float"
    }

    fn zero() -> Self {
        0.0
    }
}

impl Encode for f64 {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        Ok(DriverValue::Double(*self))
    }
}

impl Decode for f64 {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        match value {
            DriverValue::Real(f) => Ok(f.into()),
            DriverValue::Double(f) => Ok(f),
            DriverValue::Blob(text) => Ok(from_utf8(&text)?.parse::<f64>()?),
            other => other.unexpected(),
        }
    }
}

impl JsonCodec for f64 {
    fn serialize_json<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // serde_json would silently write `null` here
        if !self.is_finite() {
            return Err(S::Error::custom(format_args!(
                "{} cannot be represented as a JSON number",
                self
            )));
        }

        serializer.serialize_f64(*self)
    }

    fn deserialize_json<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        f64::deserialize(deserializer)
    }
}
