use nullish::types::{JsonObject, RawJson};
use nullish::{
    Error, NullArr, NullArrObj, NullBool, NullFloat, NullInt, NullJson, NullObj, NullString,
};
use nullish_test::setup_if_needed;
use serde::{Deserialize, Serialize};
use serde_json::json;

#[test]
fn it_marshals_mixed_arrays_exactly() -> anyhow::Result<()> {
    setup_if_needed();

    let arr = NullArr::some(vec![json!("a"), json!("b"), json!(1), json!(2)]);
    let data = arr.to_json()?;

    assert_eq!(data, br#"["a","b",1,2]"#);
    assert_eq!(NullArr::from_json(&data)?, arr);

    Ok(())
}

#[test]
fn it_marshals_invalid_wrappers_as_null() -> anyhow::Result<()> {
    setup_if_needed();

    // the stored payload is ignored
    assert_eq!(NullFloat::new(1.5, false).to_json()?, b"null");
    assert_eq!(NullString::new("x".to_owned(), false).to_json()?, b"null");
    assert_eq!(NullObj::null().to_json()?, b"null");
    assert_eq!(NullJson::new(RawJson::new("[1]"), false).to_json()?, b"null");

    Ok(())
}

#[test]
fn it_unmarshals_null_into_the_zero_state() -> anyhow::Result<()> {
    setup_if_needed();

    let mut i = NullInt::some(9);
    i.unmarshal_json(b"null")?;
    assert_eq!(i.value, 0);
    assert!(!i.valid);

    let mut a = NullArrObj::some(vec![JsonObject::new()]);
    a.unmarshal_json(b"null")?;
    assert!(a.value.is_empty());
    assert!(!a.valid);

    // not the exact token, but still JSON null
    assert!(NullBool::from_json(b" null ")?.is_null());

    Ok(())
}

#[test]
fn it_rejects_the_wrong_json_shape() {
    setup_if_needed();

    let cases: Vec<(&str, nullish::Result<()>)> = vec![
        ("bool", NullBool::from_json(b"1").map(drop)),
        ("int", NullInt::from_json(b"1.5").map(drop)),
        ("int", NullInt::from_json(br#""42""#).map(drop)),
        ("float", NullFloat::from_json(b"true").map(drop)),
        ("string", NullString::from_json(b"42").map(drop)),
        ("array", NullArr::from_json(br#"{"a":1}"#).map(drop)),
        ("array of objects", NullArrObj::from_json(br#"["a"]"#).map(drop)),
        ("object", NullObj::from_json(b"[]").map(drop)),
        ("raw json", NullJson::from_json(b"{oops").map(drop)),
        ("malformed", NullArr::from_json(b"[1,").map(drop)),
    ];

    for (what, result) in cases {
        assert!(
            matches!(result, Err(Error::Decode(_))),
            "{what}: expected a decode error, got {result:?}"
        );
    }
}

#[test]
fn it_reads_integers_as_floats() -> anyhow::Result<()> {
    assert_eq!(NullFloat::from_json(b"2")?, NullFloat::some(2.0));
    assert_eq!(NullFloat::from_json(b"-1e3")?, NullFloat::some(-1000.0));

    Ok(())
}

#[test]
fn it_refuses_non_finite_floats() {
    for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(matches!(NullFloat::some(f).to_json(), Err(Error::Encode(_))));
    }
}

#[test]
fn raw_json_null_document_reads_back_as_null() -> anyhow::Result<()> {
    let raw = NullJson::some(RawJson::null());

    assert_eq!(raw.to_json()?, b"null");
    assert!(NullJson::from_json(&raw.to_json()?)?.is_null());

    Ok(())
}

#[test]
fn raw_json_round_trips_through_other_documents() -> anyhow::Result<()> {
    setup_if_needed();

    let documents = json!([{ "foo": "bar" }]);
    let data = serde_json::to_vec(&documents)?;

    let raw = NullJson::some(RawJson::from_bytes(data)?);
    let decoded: serde_json::Value = serde_json::from_slice(&raw.to_json()?)?;

    assert_eq!(decoded, documents);

    Ok(())
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Account {
    id: NullInt,
    email: NullString,
    #[serde(default)]
    tags: NullArr,
    profile: NullObj,
}

#[test]
fn it_embeds_in_serde_structs() -> anyhow::Result<()> {
    setup_if_needed();

    let account = Account {
        id: NullInt::some(1),
        email: NullString::null(),
        tags: NullArr::some(vec![json!("admin")]),
        profile: NullObj::null(),
    };

    let value = serde_json::to_value(&account)?;
    assert_eq!(
        value,
        json!({ "id": 1, "email": null, "tags": ["admin"], "profile": null })
    );

    let decoded: Account = serde_json::from_value(value)?;
    assert_eq!(decoded, account);

    let partial: Account =
        serde_json::from_str(r#"{ "id": null, "email": "a@b.c", "profile": {} }"#)?;
    assert!(partial.id.is_null());
    assert_eq!(partial.email, NullString::some("a@b.c".to_owned()));
    assert!(partial.tags.is_null());
    assert_eq!(partial.profile, NullObj::some(JsonObject::new()));

    Ok(())
}

#[cfg(feature = "uuid")]
#[test]
fn uuids_must_be_hyphenated_in_json() {
    use nullish::NullUuid;

    assert!(NullUuid::from_json(br#""67e55044-10b1-426f-9247-bb680e5fe0c8""#).is_ok());

    for data in [
        &br#""67e5504410b1426f9247bb680e5fe0c8""#[..],
        br#""urn:uuid:67e55044-10b1-426f-9247-bb680e5fe0c8""#,
        br#""not-a-uuid""#,
        b"42",
    ] {
        assert!(matches!(NullUuid::from_json(data), Err(Error::Decode(_))));
    }
}

#[cfg(feature = "ulid")]
#[test]
fn ulids_must_be_canonical_in_json() -> anyhow::Result<()> {
    use nullish::NullUlid;

    let upper = NullUlid::from_json(br#""01ARZ3NDEKTSV4RRFFQ69G5FAV""#)?;
    let lower = NullUlid::from_json(br#""01arz3ndektsv4rrffq69g5fav""#)?;
    assert_eq!(upper, lower);
    assert_eq!(lower.to_json()?, br#""01ARZ3NDEKTSV4RRFFQ69G5FAV""#);

    for data in [
        &br#""01ARZ3NDEKTSV4RRFFQ69G5FA""#[..],
        br#""01ARZ3NDEKTSV4RRFFQ69G5FAU""#,
        br#""8ZZZZZZZZZZZZZZZZZZZZZZZZZ""#,
        br#""ZZZZZZZZZZZZZZZZZZZZZZZZZZ""#,
        br#""67e55044-10b1-426f-9247-bb680e5fe0c8""#,
    ] {
        assert!(matches!(NullUlid::from_json(data), Err(Error::Decode(_))));
    }

    Ok(())
}

#[cfg(feature = "time")]
#[test]
fn timestamps_must_be_rfc3339_in_json() {
    use nullish::NullTime;

    assert!(NullTime::from_json(br#""2024-01-01T12:00:00Z""#).is_ok());
    assert!(matches!(
        NullTime::from_json(br#""2024-01-01 12:00:00""#),
        Err(Error::Decode(_))
    ));
    assert!(matches!(NullTime::from_json(b"1704110400"), Err(Error::Decode(_))));
}
