use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::BoxDynError;
use crate::types::Type;
use crate::value::DriverValue;

impl Type for String {
    fn type_name() -> &'static str {
        "string"
    }

    fn zero() -> Self {
        String::new()
    }
}

impl Encode for String {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        Ok(DriverValue::Text(self.clone()))
    }
}

impl Decode for String {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        match value {
            DriverValue::Text(text) => Ok(text),
            DriverValue::Blob(blob) => Ok(String::from_utf8(blob)?),
            other => other.unexpected(),
        }
    }
}

impl_json_codec_via_serde!(String);
