//! Payload kinds supported by [`Nullable`](crate::Nullable).
//!
//! | Alias          | Payload                     | Driver value (write) | JSON                  |
//! |----------------|-----------------------------|----------------------|-----------------------|
//! | [`NullBool`]   | `bool`                      | `Bool`               | `true` / `false`      |
//! | [`NullInt`]    | `i64`                       | `BigInt`             | number                |
//! | [`NullFloat`]  | `f64`                       | `Double`             | number                |
//! | [`NullString`] | `String`                    | `Text`               | string                |
//! | [`NullArr`]    | `Vec<JsonValue>`            | `Text` (JSON)        | array                 |
//! | [`NullArrObj`] | `Vec<JsonObject>`           | `Text` (JSON)        | array of objects      |
//! | [`NullObj`]    | [`JsonObject`]              | `Text` (JSON)        | object                |
//! | [`NullJson`]   | [`RawJson`]                 | `Text` (JSON)        | embedded verbatim     |
//! | `NullTime`     | `time::OffsetDateTime`      | `Timestamp`          | RFC 3339 string       |
//! | `NullUuid`     | `uuid::Uuid`                | `Text` (hyphenated)  | hyphenated string     |
//! | `NullUlid`     | `ulid::Ulid`                | `Blob` (16 bytes)    | 26-character string   |
//!
//! `NullTime`, `NullUuid` and `NullUlid` require the `time`, `uuid` and `ulid` features
//! respectively.
//!
//! Any external types that have had [`Type`] implemented for, are re-exported in this module
//! for convenience as downstream users need to use a compatible version of the external crate
//! to take advantage of the implementation.

use crate::Nullable;

mod bool;
mod float;
mod int;
mod json;
mod raw_json;
mod str;

#[cfg(feature = "time")]
#[cfg_attr(docsrs, doc(cfg(feature = "time")))]
mod time;

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid;

#[cfg(feature = "ulid")]
#[cfg_attr(docsrs, doc(cfg(feature = "ulid")))]
mod ulid;

pub use crate::json::{JsonObject, JsonValue};
pub use raw_json::RawJson;

#[cfg(feature = "time")]
#[cfg_attr(docsrs, doc(cfg(feature = "time")))]
#[doc(no_inline)]
pub use ::time::OffsetDateTime;

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
#[doc(no_inline)]
pub use ::uuid::Uuid;

#[cfg(feature = "ulid")]
#[cfg_attr(docsrs, doc(cfg(feature = "ulid")))]
#[doc(no_inline)]
pub use ::ulid::Ulid;

/// Metadata every payload kind provides to the wrapper.
pub trait Type {
    /// Human-readable name of the kind, used in error messages and log events.
    fn type_name() -> &'static str;

    /// The value a null wrapper holds.
    fn zero() -> Self
    where
        Self: Sized;
}

pub type NullBool = Nullable<bool>;
pub type NullInt = Nullable<i64>;
pub type NullFloat = Nullable<f64>;
pub type NullString = Nullable<String>;
pub type NullArr = Nullable<Vec<JsonValue>>;
pub type NullArrObj = Nullable<Vec<JsonObject>>;
pub type NullObj = Nullable<JsonObject>;
pub type NullJson = Nullable<RawJson>;

#[cfg(feature = "time")]
#[cfg_attr(docsrs, doc(cfg(feature = "time")))]
pub type NullTime = Nullable<::time::OffsetDateTime>;

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
pub type NullUuid = Nullable<::uuid::Uuid>;

#[cfg(feature = "ulid")]
#[cfg_attr(docsrs, doc(cfg(feature = "ulid")))]
pub type NullUlid = Nullable<::ulid::Ulid>;
