//! Types and traits for decoding values returned by the database driver.

use crate::error::BoxDynError;
use crate::value::DriverValue;

/// A type that can be decoded from a non-`NULL` driver value.
///
/// Implementations try each representation their kind accepts, in a fixed order, and
/// normalize it to a single in-memory form. `NULL` handling belongs to the caller;
/// see [`Nullable`](crate::Nullable) and the impl for `Option<T>`.
pub trait Decode: Sized {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError>;
}

impl<T: Decode> Decode for Option<T> {
    fn decode(value: DriverValue) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(None);
        }

        T::decode(value).map(Some)
    }
}
