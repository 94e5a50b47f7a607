use std::fmt::Debug;

use anyhow::{bail, ensure};
use nullish::{Decode, DriverValue, Encode, Error, JsonCodec, Nullable, Type, NULL_JSON};

pub fn setup_if_needed() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A null wrapper crosses both boundaries as the null marker, and both null markers
/// come back as a null wrapper.
pub fn assert_null_round_trip<T>() -> anyhow::Result<()>
where
    T: Type + Encode + Decode + JsonCodec + Debug,
{
    let null = Nullable::<T>::null();

    ensure!(null.to_value()?.is_null(), "{} did not encode NULL", T::type_name());
    ensure!(
        null.to_json()? == NULL_JSON,
        "{} did not encode JSON null",
        T::type_name()
    );

    ensure!(Nullable::<T>::from_value(DriverValue::Null)?.is_null());
    ensure!(Nullable::<T>::from_json(NULL_JSON)?.is_null());

    Ok(())
}

/// `expected` encodes to exactly `json` and decodes back to an equal wrapper.
pub fn assert_json_round_trip<T>(expected: &Nullable<T>, json: &str) -> anyhow::Result<()>
where
    T: Type + JsonCodec + PartialEq + Debug,
{
    let encoded = expected.to_json()?;

    ensure!(
        encoded == json.as_bytes(),
        "expected JSON {}, got {}",
        json,
        String::from_utf8_lossy(&encoded)
    );

    let decoded = Nullable::<T>::from_json(json.as_bytes())?;

    ensure!(
        &decoded == expected,
        "decoded {:?} from {}, expected {:?}",
        decoded,
        json,
        expected
    );

    Ok(())
}

/// `expected` survives a trip through the driver boundary. Returns the bound value.
pub fn assert_driver_round_trip<T>(expected: &Nullable<T>) -> anyhow::Result<DriverValue>
where
    T: Type + Encode + Decode + PartialEq + Debug,
{
    let value = expected.to_value()?;

    ensure!(!value.is_null(), "{:?} encoded as NULL", expected);

    let scanned = Nullable::<T>::from_value(value.clone())?;

    ensure!(
        &scanned == expected,
        "scanned {:?} from {:?}, expected {:?}",
        scanned,
        value,
        expected
    );

    Ok(value)
}

pub fn assert_scans_to<T>(raw: DriverValue, expected: T) -> anyhow::Result<()>
where
    T: Type + Decode + PartialEq + Debug,
{
    let mut scanned = Nullable::<T>::null();
    scanned.scan(raw.clone())?;

    ensure!(
        scanned == Nullable::some(expected),
        "scanned {:?} from {:?}",
        scanned,
        raw
    );

    Ok(())
}

pub fn assert_scan_rejects<T>(raw: DriverValue) -> anyhow::Result<()>
where
    T: Type + Decode + Debug,
{
    match Nullable::<T>::from_value(raw.clone()) {
        Err(Error::TypeConversion { kind, .. }) if kind == T::type_name() => Ok(()),
        Err(e) => bail!("scanning {:?} failed with the wrong error: {}", raw, e),
        Ok(scanned) => bail!("scanning {:?} should fail, got {:?}", raw, scanned),
    }
}

// Test a payload kind through both boundaries
#[macro_export]
macro_rules! test_type {
    ($name:ident<$ty:ty>($($json:literal == $value:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_type_ $name >] () -> anyhow::Result<()> {
                $crate::setup_if_needed();
                $crate::assert_null_round_trip::<$ty>()?;

                $(
                    let expected = nullish::Nullable::<$ty>::some($value);

                    $crate::assert_json_round_trip(&expected, $json)?;
                    $crate::assert_driver_round_trip(&expected)?;
                )+

                Ok(())
            }
        }
    };
}

// Test JSON encoding and decoding only
#[macro_export]
macro_rules! test_json_type {
    ($name:ident<$ty:ty>($($json:literal == $value:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_json_type_ $name >] () -> anyhow::Result<()> {
                $crate::setup_if_needed();

                $(
                    let expected = nullish::Nullable::<$ty>::some($value);

                    $crate::assert_json_round_trip(&expected, $json)?;
                )+

                Ok(())
            }
        }
    };
}

// Test the raw driver representations a payload kind accepts
#[macro_export]
macro_rules! test_scan {
    ($name:ident<$ty:ty>($($raw:expr => $value:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_scan_ $name >] () -> anyhow::Result<()> {
                $crate::setup_if_needed();

                $(
                    $crate::assert_scans_to::<$ty>(nullish::DriverValue::from($raw), $value)?;
                )+

                Ok(())
            }
        }
    };
}

// Test the raw driver representations a payload kind rejects
#[macro_export]
macro_rules! test_scan_rejects {
    ($name:ident<$ty:ty>($($raw:expr),+ $(,)?)) => {
        paste::item! {
            #[test]
            fn [< test_scan_rejects_ $name >] () -> anyhow::Result<()> {
                $crate::setup_if_needed();

                $(
                    $crate::assert_scan_rejects::<$ty>(nullish::DriverValue::from($raw))?;
                )+

                Ok(())
            }
        }
    };
}
