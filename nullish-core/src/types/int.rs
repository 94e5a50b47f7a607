use atoi::FromRadix10SignedChecked;

use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::BoxDynError;
use crate::types::Type;
use crate::value::DriverValue;

impl Type for i64 {
    fn type_name() -> &'static str {
        "int"
    }

    fn zero() -> Self {
        0
    }
}

impl Encode for i64 {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        Ok(DriverValue::BigInt(*self))
    }
}

impl Decode for i64 {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        match value {
            DriverValue::TinyInt(i) => Ok(i.into()),
            DriverValue::SmallInt(i) => Ok(i.into()),
            DriverValue::Integer(i) => Ok(i.into()),
            DriverValue::BigInt(i) => Ok(i),
            // drivers that defer parsing hand back the textual form
            DriverValue::Blob(text) => parse_integer(&text),
            other => other.unexpected(),
        }
    }
}

impl_json_codec_via_serde!(i64);

fn parse_integer(text: &[u8]) -> Result<i64, BoxDynError> {
    let (value, used) = i64::from_radix_10_signed_checked(text);

    match value {
        Some(value) if used == text.len() && text.last().is_some_and(u8::is_ascii_digit) => {
            Ok(value)
        }

        Some(_) => Err(format!(
            "invalid base-10 integer {:?}",
            String::from_utf8_lossy(text)
        )
        .into()),

        None => Err(format!(
            "base-10 integer {:?} is out of range for i64",
            String::from_utf8_lossy(text)
        )
        .into()),
    }
}
