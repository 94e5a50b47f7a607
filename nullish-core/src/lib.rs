//! Core of nullish, nullable value wrappers that cross both a SQL driver and a JSON encoder.
//!
//! Not intended to be used directly; see the `nullish` crate.
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
pub mod json;

pub mod decode;
pub mod encode;
pub mod error;
mod nullable;
pub mod types;
pub mod value;

#[doc(inline)]
pub use self::{
    decode::Decode,
    encode::Encode,
    error::{BoxDynError, Error, Result},
    json::{JsonCodec, NULL_JSON},
    nullable::Nullable,
    types::Type,
    value::{DriverValue, DriverValueKind},
};
