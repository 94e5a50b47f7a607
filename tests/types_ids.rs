use nullish::types::{Ulid, Uuid};
use nullish::{DriverValue, NullUlid, NullUuid};
use nullish_test::{assert_driver_round_trip, setup_if_needed, test_type};

const UUID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";
const ULID: &str = "01ARZ3NDEKTSV4RRFFQ69G5FAV";

fn uuid() -> Uuid {
    Uuid::parse_str(UUID).unwrap()
}

fn ulid() -> Ulid {
    Ulid::from_string(ULID).unwrap()
}

test_type!(uuid<Uuid>(
    r#""67e55044-10b1-426f-9247-bb680e5fe0c8""# == uuid(),
    r#""00000000-0000-0000-0000-000000000000""# == Uuid::nil(),
));

test_type!(ulid<Ulid>(
    r#""01ARZ3NDEKTSV4RRFFQ69G5FAV""# == ulid(),
    r#""00000000000000000000000000""# == Ulid::nil(),
));

#[test]
fn it_binds_uuids_as_hyphenated_text() -> anyhow::Result<()> {
    setup_if_needed();

    let value = assert_driver_round_trip(&NullUuid::some(uuid()))?;
    assert_eq!(value, DriverValue::Text(UUID.into()));

    Ok(())
}

#[test]
fn it_binds_ulids_as_bytes() -> anyhow::Result<()> {
    setup_if_needed();

    let value = assert_driver_round_trip(&NullUlid::some(ulid()))?;
    assert_eq!(value, DriverValue::Blob(ulid().to_bytes().to_vec()));

    Ok(())
}
