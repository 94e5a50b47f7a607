//! Types and traits for encoding values for the database driver.

use crate::error::BoxDynError;
use crate::value::DriverValue;

/// Encode a single payload into the value handed to the driver.
pub trait Encode {
    /// Produces the driver-acceptable representation of `self`.
    ///
    /// Only structured payloads can fail here, and only when they are not representable
    /// as JSON.
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError>;
}

impl<T> Encode for &'_ T
where
    T: Encode + ?Sized,
{
    #[inline]
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        (**self).encode_by_ref()
    }
}

impl<T: Encode> Encode for Option<T> {
    #[inline]
    fn encode_by_ref(&self) -> Result<DriverValue, BoxDynError> {
        match self {
            Some(value) => value.encode_by_ref(),
            None => Ok(DriverValue::Null),
        }
    }
}
