use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::decode::Decode;
use crate::encode::Encode;
use crate::error::{BoxDynError, Error, Result};
use crate::json::{DeserializeJson, JsonCodec, SerializeJson, NULL_JSON};
use crate::types::Type;
use crate::value::DriverValue;

/// A value that may be absent, both as a SQL column and as a JSON field.
///
/// `valid == false` is the null state: the payload is then ignored by equality and by
/// both outbound conversions, and every inbound conversion of a null resets it to the
/// kind's zero value.
///
/// The four conversions are:
///
/// * [`to_value`](Self::to_value) / [`Encode`]: to the value bound for the driver.
/// * [`scan`](Self::scan) / [`Decode`]: from the value the driver returned.
/// * [`to_json`](Self::to_json) / [`Serialize`]: to JSON text.
/// * [`unmarshal_json`](Self::unmarshal_json) / [`Deserialize`]: from JSON text.
///
/// ```
/// use nullish_core::types::NullInt;
/// use nullish_core::DriverValue;
///
/// let mut n = NullInt::null();
/// n.scan(DriverValue::Blob(b"42".to_vec()))?;
/// assert_eq!(n, NullInt::some(42));
///
/// assert_eq!(n.to_json()?, b"42");
/// assert_eq!(NullInt::null().to_json()?, b"null");
/// # Ok::<(), nullish_core::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Nullable<T> {
    pub value: T,
    pub valid: bool,
}

impl<T> Nullable<T> {
    #[inline]
    pub const fn new(value: T, valid: bool) -> Self {
        Nullable { value, valid }
    }

    #[inline]
    pub const fn some(value: T) -> Self {
        Nullable { value, valid: true }
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        !self.valid
    }

    pub fn as_option(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}

impl<T: Type> Nullable<T> {
    pub fn null() -> Self {
        Nullable {
            value: T::zero(),
            valid: false,
        }
    }
}

impl<T: Type> Default for Nullable<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: Type> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Self::some)
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}

impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_option() == other.as_option()
    }
}

impl<T: Eq> Eq for Nullable<T> {}

// database boundary

impl<T: Type + Encode> Nullable<T> {
    /// The value to bind for the driver; [`DriverValue::Null`] when null.
    pub fn to_value(&self) -> Result<DriverValue> {
        if !self.valid {
            return Ok(DriverValue::Null);
        }

        self.value.encode_by_ref().map_err(Error::encode)
    }
}

impl<T: Type + Decode> Nullable<T> {
    /// Build a wrapper from the value the driver returned.
    pub fn from_value(value: DriverValue) -> Result<Self> {
        if value.is_null() {
            tracing::trace!(target: "nullish::scan", kind = T::type_name(), "scanned NULL");
            return Ok(Self::null());
        }

        T::decode(value).map(Self::some).map_err(|source| {
            let err = Error::type_conversion(T::type_name(), source);

            tracing::debug!(
                target: "nullish::scan",
                kind = T::type_name(),
                error = %err,
                "rejected driver value"
            );

            err
        })
    }

    /// Replace `self` with the value the driver returned.
    ///
    /// On error `self` is left as it was, but callers should not rely on that.
    pub fn scan(&mut self, value: DriverValue) -> Result<()> {
        *self = Self::from_value(value)?;
        Ok(())
    }
}

impl<T: Type + Encode> Encode for Nullable<T> {
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        self.to_value().map_err(Into::into)
    }
}

impl<T: Type + Decode> Decode for Nullable<T> {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        Self::from_value(value).map_err(Into::into)
    }
}

// JSON boundary

impl<T: Type + JsonCodec> Nullable<T> {
    /// The JSON text of the payload; exactly `null` when null.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        if !self.valid {
            return Ok(NULL_JSON.to_vec());
        }

        serde_json::to_vec(&SerializeJson(&self.value)).map_err(Error::encode)
    }

    /// Build a wrapper from JSON text.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        if data == NULL_JSON {
            return Ok(Self::null());
        }

        serde_json::from_slice(data).map_err(|source| {
            tracing::debug!(
                target: "nullish::json",
                kind = T::type_name(),
                error = %source,
                "rejected JSON input"
            );

            Error::decode(source)
        })
    }

    /// Replace `self` with the value decoded from JSON text.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        *self = Self::from_json(data)?;
        Ok(())
    }
}

impl<T: JsonCodec> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.valid {
            serializer.serialize_some(&SerializeJson(&self.value))
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T: Type + JsonCodec> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<DeserializeJson<T>>::deserialize(deserializer)?;

        Ok(value.map(|DeserializeJson(value)| value).into())
    }
}
