use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::BoxDynError;
use crate::json::JsonCodec;
use crate::types::Type;
use crate::value::DriverValue;

impl Type for OffsetDateTime {
    fn type_name() -> &'static str {
        "time"
    }

    fn zero() -> Self {
        OffsetDateTime::UNIX_EPOCH
    }
}

impl Encode for OffsetDateTime {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        Ok(DriverValue::Timestamp(*self))
    }
}

impl Decode for OffsetDateTime {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        match value {
            DriverValue::Timestamp(ts) => Ok(ts),
            other => other.unexpected(),
        }
    }
}

// RFC 3339 with as many fractional digits as the nanoseconds need, `Z` for UTC
impl JsonCodec for OffsetDateTime {
    fn serialize_json<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let text = self.format(&Rfc3339).map_err(S::Error::custom)?;

        serializer.serialize_str(&text)
    }

    fn deserialize_json<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        OffsetDateTime::parse(&text, &Rfc3339).map_err(D::Error::custom)
    }
}
