//! The JSON half of the nullable contract.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use serde_json::value::RawValue as JsonRawValue;
pub use serde_json::Value as JsonValue;

/// A string-keyed JSON mapping.
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// The JSON encoding of an absent value, used as the sentinel in both directions.
pub const NULL_JSON: &[u8] = b"null";

/// Describes the JSON shape of a payload kind.
///
/// Most kinds simply defer to their `serde` impls. Kinds with a canonical string form
/// (timestamps and identifiers) or extra validation implement this by hand so that
/// the wrapper, not the payload crate's optional `serde` support, decides the format.
pub trait JsonCodec: Sized {
    fn serialize_json<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer;

    fn deserialize_json<'de, D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>;
}

/// Adapts a [`JsonCodec`] payload to `serde::Serialize`.
pub(crate) struct SerializeJson<'a, T>(pub(crate) &'a T);

impl<T: JsonCodec> Serialize for SerializeJson<'_, T> {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize_json(serializer)
    }
}

/// Adapts a [`JsonCodec`] payload to `serde::Deserialize`.
pub(crate) struct DeserializeJson<T>(pub(crate) T);

impl<'de, T: JsonCodec> Deserialize<'de> for DeserializeJson<T> {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize_json(deserializer).map(DeserializeJson)
    }
}

macro_rules! impl_json_codec_via_serde {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::json::JsonCodec for $ty {
                #[inline]
                fn serialize_json<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: serde::Serializer,
                {
                    serde::Serialize::serialize(self, serializer)
                }

                #[inline]
                fn deserialize_json<'de, D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: serde::Deserializer<'de>,
                {
                    <$ty as serde::Deserialize<'de>>::deserialize(deserializer)
                }
            }
        )+
    };
}
