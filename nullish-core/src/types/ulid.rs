use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};
use ulid::Ulid;

use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::BoxDynError;
use crate::json::JsonCodec;
use crate::types::Type;
use crate::value::DriverValue;

impl Type for Ulid {
    fn type_name() -> &'static str {
        "ulid"
    }

    fn zero() -> Self {
        Ulid::nil()
    }
}

impl Encode for Ulid {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        Ok(DriverValue::Blob(self.to_bytes().to_vec()))
    }
}

impl Decode for Ulid {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        match value {
            DriverValue::Text(text) => parse_canonical(&text),
            DriverValue::Blob(blob) => {
                let bytes = <[u8; 16]>::try_from(blob.as_slice()).map_err(|_| {
                    format!("expected 16 bytes for a ULID, got {}", blob.len())
                })?;

                Ok(Ulid::from_bytes(bytes))
            }
            other => other.unexpected(),
        }
    }
}

impl JsonCodec for Ulid {
    fn serialize_json<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }

    fn deserialize_json<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;

        parse_canonical(&text).map_err(D::Error::custom)
    }
}

/// `Ulid::from_string` checks the length and the alphabet and is case-insensitive, but it
/// silently drops the two bits a leading digit above `7` would overflow into.
fn parse_canonical(text: &str) -> Result<Ulid, BoxDynError> {
    if text.as_bytes().first().is_some_and(|first| *first > b'7') {
        return Err(format!("ULID {text:?} overflows 128 bits").into());
    }

    Ok(Ulid::from_string(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ID: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";

    #[test]
    fn it_scans_either_case() {
        let upper = Ulid::decode(DriverValue::Text(ID.into())).unwrap();
        let lower = Ulid::decode(DriverValue::Text(ID.to_lowercase())).unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), ID);
    }

    #[test]
    fn it_rejects_wrong_lengths() {
        assert!(Ulid::decode(DriverValue::Text(ID[..25].into())).is_err());
        assert!(Ulid::decode(DriverValue::Blob(vec![0; 15])).is_err());
        assert!(Ulid::decode(DriverValue::Blob(vec![0; 17])).is_err());
    }

    #[test]
    fn it_rejects_overflowing_text() {
        assert_eq!(parse_canonical("7ZZZZZZZZZZZZZZZZZZZZZZZZZ").unwrap(), Ulid(u128::MAX));
        assert!(parse_canonical("8ZZZZZZZZZZZZZZZZZZZZZZZZZ").is_err());
        assert!(parse_canonical("ZZZZZZZZZZZZZZZZZZZZZZZZZZ").is_err());
        assert!(parse_canonical("zzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }
}
