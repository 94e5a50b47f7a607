use std::fmt::{self, Display, Formatter};

use serde_json::Value as JsonValue;

use crate::error::BoxDynError;
use crate::types::Type;

/// A value as handed to, or returned by, a SQL driver.
///
/// The set of shapes a driver may use for a column is finite, so this is a closed union
/// rather than a dynamically typed box. `Null` is the SQL `NULL` marker in both directions.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum DriverValue {
    Null,
    Bool(bool),
    TinyInt(i8),
    SmallInt(i16),
    Integer(i32),
    BigInt(i64),
    Real(f32),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
    #[cfg(feature = "time")]
    Timestamp(time::OffsetDateTime),
    /// A structured value the driver already decoded from a JSON column.
    Json(JsonValue),
}

/// The runtime shape of a [`DriverValue`], without its data.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DriverValueKind {
    Null,
    Bool,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Real,
    Double,
    Text,
    Blob,
    #[cfg(feature = "time")]
    Timestamp,
    Json,
}

impl DriverValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            DriverValueKind::Null => "NULL",
            DriverValueKind::Bool => "BOOLEAN",
            DriverValueKind::TinyInt => "TINYINT",
            DriverValueKind::SmallInt => "SMALLINT",
            DriverValueKind::Integer => "INTEGER",
            DriverValueKind::BigInt => "BIGINT",
            DriverValueKind::Real => "REAL",
            DriverValueKind::Double => "DOUBLE",
            DriverValueKind::Text => "TEXT",
            DriverValueKind::Blob => "BLOB",
            #[cfg(feature = "time")]
            DriverValueKind::Timestamp => "TIMESTAMP",
            DriverValueKind::Json => "JSON",
        }
    }
}

impl Display for DriverValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl DriverValue {
    pub fn kind(&self) -> DriverValueKind {
        match self {
            DriverValue::Null => DriverValueKind::Null,
            DriverValue::Bool(_) => DriverValueKind::Bool,
            DriverValue::TinyInt(_) => DriverValueKind::TinyInt,
            DriverValue::SmallInt(_) => DriverValueKind::SmallInt,
            DriverValue::Integer(_) => DriverValueKind::Integer,
            DriverValue::BigInt(_) => DriverValueKind::BigInt,
            DriverValue::Real(_) => DriverValueKind::Real,
            DriverValue::Double(_) => DriverValueKind::Double,
            DriverValue::Text(_) => DriverValueKind::Text,
            DriverValue::Blob(_) => DriverValueKind::Blob,
            #[cfg(feature = "time")]
            DriverValue::Timestamp(_) => DriverValueKind::Timestamp,
            DriverValue::Json(_) => DriverValueKind::Json,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    pub(crate) fn unexpected<Expected: Type>(&self) -> Result<Expected, BoxDynError> {
        Err(format!(
            "expected {}, got {} value {:?}",
            Expected::type_name(),
            self.kind(),
            self
        )
        .into())
    }
}

macro_rules! impl_from_for_driver_value {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for DriverValue {
                #[inline]
                fn from(value: $ty) -> Self {
                    DriverValue::$variant(value.into())
                }
            }
        )+
    };
}

impl_from_for_driver_value!(
    bool => Bool,
    i8 => TinyInt,
    i16 => SmallInt,
    i32 => Integer,
    i64 => BigInt,
    f32 => Real,
    f64 => Double,
    String => Text,
    &'_ str => Text,
    Vec<u8> => Blob,
    &'_ [u8] => Blob,
    JsonValue => Json,
);

#[cfg(feature = "time")]
impl_from_for_driver_value!(time::OffsetDateTime => Timestamp);

impl<T> From<Option<T>> for DriverValue
where
    T: Into<DriverValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(DriverValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_reports_kinds() {
        assert_eq!(DriverValue::from(42_i16).kind(), DriverValueKind::SmallInt);
        assert_eq!(DriverValue::from("x").kind(), DriverValueKind::Text);
        assert_eq!(DriverValue::from(&b"x"[..]).kind(), DriverValueKind::Blob);
        assert_eq!(DriverValue::from(None::<i64>), DriverValue::Null);
        assert_eq!(DriverValueKind::BigInt.to_string(), "BIGINT");
    }
}
