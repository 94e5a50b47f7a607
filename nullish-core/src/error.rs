//! Types for working with errors produced by nullish.

use std::error::Error as StdError;
use std::result::Result as StdResult;

/// A specialized `Result` type for nullish.
pub type Result<T, E = Error> = StdResult<T, E>;

/// Boxed error returned by the per-kind [`Encode`](crate::Encode) and [`Decode`](crate::Decode) impls.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// Represents all the ways a conversion can fail within nullish.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A value returned by the driver could not be converted into the payload type.
    ///
    /// Either the runtime shape of the value is not one the kind accepts, or a textual
    /// form failed to parse.
    #[error("error occurred while scanning a value into `{kind}`: {source}")]
    TypeConversion {
        kind: &'static str,

        #[source]
        source: BoxDynError,
    },

    /// The input was not valid JSON for the expected shape of the kind.
    #[error("error occurred while decoding JSON: {0}")]
    Decode(#[source] BoxDynError),

    /// The payload could not be encoded for the driver or as JSON.
    #[error("error occurred while encoding a value: {0}")]
    Encode(#[source] BoxDynError),
}

impl Error {
    #[inline]
    pub(crate) fn type_conversion(kind: &'static str, err: impl Into<BoxDynError>) -> Self {
        Error::TypeConversion {
            kind,
            source: err.into(),
        }
    }

    #[inline]
    pub(crate) fn decode(err: impl Into<BoxDynError>) -> Self {
        Error::Decode(err.into())
    }

    #[inline]
    pub(crate) fn encode(err: impl Into<BoxDynError>) -> Self {
        Error::Encode(err.into())
    }

    /// The payload kind named by a [`Error::TypeConversion`].
    pub fn kind(&self) -> Option<&'static str> {
        match self {
            Error::TypeConversion { kind, .. } => Some(kind),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_conversion_names_the_kind() {
        let err = Error::type_conversion("int", "expected an integer, got Text(\"x\")");

        assert_eq!(err.kind(), Some("int"));
        assert_eq!(
            err.to_string(),
            "error occurred while scanning a value into `int`: expected an integer, got Text(\"x\")"
        );
    }

    #[test]
    fn decode_keeps_its_source() {
        let source = serde_json::from_str::<bool>("nope").unwrap_err();
        let err = Error::decode(source);

        assert!(err.kind().is_none());
        assert!(StdError::source(&err).is_some());
    }
}
