use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::BoxDynError;
use crate::types::Type;
use crate::value::DriverValue;

impl Type for bool {
    fn type_name() -> &'static str {
        "bool"
    }

    fn zero() -> Self {
        false
    }
}

impl Encode for bool {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        Ok(DriverValue::Bool(*self))
    }
}

impl Decode for bool {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        match value {
            DriverValue::Bool(b) => Ok(b),
            other => other.unexpected(),
        }
    }
}

impl_json_codec_via_serde!(bool);
