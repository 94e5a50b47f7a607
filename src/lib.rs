#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Modules
pub use nullish_core::{decode, encode, error, json, types, value};

// Types
pub use nullish_core::{
    BoxDynError, Decode, DriverValue, DriverValueKind, Encode, Error, JsonCodec, Nullable,
    Result, Type, NULL_JSON,
};

pub use nullish_core::types::{
    NullArr, NullArrObj, NullBool, NullFloat, NullInt, NullJson, NullObj, NullString, RawJson,
};

#[cfg(feature = "time")]
#[cfg_attr(docsrs, doc(cfg(feature = "time")))]
pub use nullish_core::types::NullTime;

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
pub use nullish_core::types::NullUuid;

#[cfg(feature = "ulid")]
#[cfg_attr(docsrs, doc(cfg(feature = "ulid")))]
pub use nullish_core::types::NullUlid;

/// Convenience re-export of common traits.
pub mod prelude {
    pub use super::Decode;
    pub use super::Encode;
    pub use super::JsonCodec;
    pub use super::Nullable;
    pub use super::Type;
}
