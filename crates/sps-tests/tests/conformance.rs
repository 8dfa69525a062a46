//! Golden file conformance tests.
//!
//! Each fixture under `tests/golden/` is decoded from disk and checked
//! against its known contents. The committed bytes must match the
//! builders in `sps_tests` exactly, so a change to either side shows up
//! here first.

use std::path::PathBuf;

use sps_decoder::decode_store;
use sps_driver::{DefaultDriver, DriverConfig, OutputMode, StoreDriver};
use sps_tests::{REFERENCE_IDENTIFIER, REFERENCE_SID, REFERENCE_STORE, reference_store, summary_store};
use sps_types::{FormatClass, Signature, TypeError, ValueType};

fn golden(name: &str) -> Vec<u8> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden")
        .join(name)
        .join("store.bin");
    std::fs::read(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

// ── Fixture bytes ───────────────────────────────────────────────────────

#[test]
fn reference_fixture_matches_builder() {
    let bytes = golden("reference");
    assert_eq!(bytes, REFERENCE_STORE);
    assert_eq!(bytes, reference_store());
}

#[test]
fn summary_fixture_matches_builder() {
    assert_eq!(golden("summary"), summary_store());
}

// ── Reference store ─────────────────────────────────────────────────────

#[test]
fn reference_structure() {
    let store = decode_store(&golden("reference")).unwrap();
    assert_eq!(store.source_len(), 141);
    assert_eq!(store.set_count(), 1);

    let set = store.set(0).unwrap();
    assert_eq!(set.size(), 0x89);
    assert_eq!(set.signature(), Signature::SerializedPropertyStorage);
    assert_eq!(set.identifier(), REFERENCE_IDENTIFIER);
    assert_eq!(
        set.identifier().to_string(),
        "{46588AE2-4CBC-4338-BBFC-139326986DCE}"
    );
    assert_eq!(set.format_class(), None);
    assert_eq!(set.record_count(), 1);
    assert_eq!(set.trailing_bytes(), 0);
    assert!(set.record(1).is_none());
    assert!(store.set(1).is_none());
}

#[test]
fn reference_record() {
    let store = decode_store(&REFERENCE_STORE).unwrap();
    let record = store.set(0).unwrap().record(0).unwrap();

    assert_eq!(record.size(), 109);
    assert_eq!(record.entry_type(), Some(4));
    assert_eq!(record.entry_name(), None);
    assert_eq!(record.value_type(), ValueType::UnicodeString);
    assert_eq!(record.value_type().wire_id(), 0x001F);
    assert_eq!(record.data().len(), 92);
    assert_eq!(record.as_string().unwrap(), REFERENCE_SID);
}

#[test]
fn reference_accessors_are_exclusive() {
    let store = decode_store(&REFERENCE_STORE).unwrap();
    let record = store.set(0).unwrap().record(0).unwrap();

    assert!(matches!(record.as_bool(), Err(TypeError::TypeMismatch { .. })));
    assert!(matches!(record.as_i64(), Err(TypeError::TypeMismatch { .. })));
    assert!(matches!(record.as_u64(), Err(TypeError::TypeMismatch { .. })));
    assert!(matches!(record.as_f64(), Err(TypeError::TypeMismatch { .. })));
    assert!(matches!(record.as_filetime(), Err(TypeError::TypeMismatch { .. })));
    assert!(matches!(record.as_guid(), Err(TypeError::TypeMismatch { .. })));
    // A failed accessor leaves the record intact.
    assert_eq!(record.as_string().unwrap(), REFERENCE_SID);
    assert_eq!(record.as_bytes().len(), 92);
}

#[test]
fn reference_decode_is_deterministic() {
    let first = decode_store(&REFERENCE_STORE).unwrap();
    let second = decode_store(&REFERENCE_STORE).unwrap();
    assert_eq!(first.sets(), second.sets());
}

#[test]
fn reference_text_snapshot() {
    let store = decode_store(&golden("reference")).unwrap();
    let out = DefaultDriver.render(&store, &DriverConfig::default()).unwrap();
    insta::assert_snapshot!(out, @r"
    store: 141 bytes, 1 set

    set 0
      size:        137
      signature:   1SPS
      identifier:  {46588AE2-4CBC-4338-BBFC-139326986DCE}
      records:     1

      record 0
        entry type:  4
        value type:  VT_LPWSTR (0x001F)
        size:        109
        value:       S-1-5-21-4060289323-199701022-3924801681-1000
    ");
}

// ── Summary store ───────────────────────────────────────────────────────

#[test]
fn summary_classes_and_layouts() {
    let store = decode_store(&golden("summary")).unwrap();
    assert_eq!(store.set_count(), 2);

    let summary = store.set(0).unwrap();
    assert_eq!(summary.format_class(), Some(FormatClass::SummaryInformation));
    assert_eq!(summary.record_count(), 5);
    assert!(summary.records().iter().all(|r| r.entry_name().is_none()));

    let user = store.set(1).unwrap();
    assert_eq!(user.format_class(), Some(FormatClass::UserDefinedProperties));
    let names: Vec<_> = user.records().iter().filter_map(|r| r.entry_name()).collect();
    assert_eq!(names, ["Reviewed", "Build"]);
    assert!(user.records().iter().all(|r| r.entry_type().is_none()));
}

#[test]
fn summary_values() {
    let store = decode_store(&golden("summary")).unwrap();
    let summary = store.set(0).unwrap();

    assert_eq!(summary.record(0).unwrap().as_i64(), Ok(1252));
    assert_eq!(
        summary.record(1).unwrap().as_string().unwrap(),
        "Quarterly report"
    );
    assert_eq!(summary.record(2).unwrap().as_string().unwrap(), "Ana Lopez");
    assert_eq!(
        summary.record(3).unwrap().as_filetime().unwrap().to_string(),
        "2009-07-25T23:00:00Z"
    );
    assert_eq!(summary.record(4).unwrap().as_i64(), Ok(12));

    let user = store.set(1).unwrap();
    assert_eq!(user.record(0).unwrap().as_bool(), Ok(true));
    assert_eq!(user.record(1).unwrap().as_u64(), Ok(4711));
}

#[test]
fn summary_text_snapshot() {
    let store = decode_store(&golden("summary")).unwrap();
    let out = DefaultDriver.render(&store, &DriverConfig::default()).unwrap();
    insta::assert_snapshot!(out, @r#"
    store: 245 bytes, 2 sets

    set 0
      size:        152
      signature:   1SPS
      identifier:  {F29F85E0-4FF9-1068-AB91-08002B27B3D9}
      class:       FMTID_SummaryInformation (Summary information)
      records:     5

      record 0
        entry type:  1 (PIDSI_CODEPAGE)
        value type:  VT_I2 (0x0002)
        size:        15
        value:       1252

      record 1
        entry type:  2 (PIDSI_TITLE)
        value type:  VT_LPSTR (0x001E)
        size:        34
        value:       Quarterly report

      record 2
        entry type:  4 (PIDSI_AUTHOR)
        value type:  VT_LPWSTR (0x001F)
        size:        37
        value:       Ana Lopez

      record 3
        entry type:  12 (PIDSI_CREATE_DTM)
        value type:  VT_FILETIME (0x0040)
        size:        21
        value:       2009-07-25T23:00:00Z

      record 4
        entry type:  14 (PIDSI_PAGECOUNT)
        value type:  VT_I4 (0x0003)
        size:        17
        value:       12

    set 1
      size:        89
      signature:   1SPS
      identifier:  {D5CDD505-2E9C-101B-9397-08002B2CF9AE}
      class:       FMTID_UserDefinedProperties (User defined)
      records:     2

      record 0
        entry name:  "Reviewed"
        value type:  VT_BOOL (0x000B)
        size:        32
        value:       true

      record 1
        entry name:  "Build"
        value type:  VT_UI4 (0x0013)
        size:        29
        value:       4711
    "#);
}

#[test]
fn summary_json_document() {
    let store = decode_store(&golden("summary")).unwrap();
    let config = DriverConfig {
        mode: OutputMode::Json,
        show_hex: true,
        ..DriverConfig::default()
    };
    let out = DefaultDriver.render(&store, &config).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&out).unwrap();

    assert_eq!(doc["source_len"], 245);
    let sets = doc["sets"].as_array().unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0]["format_class"], "FMTID_SummaryInformation");

    let author = &sets[0]["records"][2];
    assert_eq!(author["entry_type"], 4);
    assert_eq!(author["entry_name"], serde_json::Value::Null);
    assert_eq!(author["property"], "PIDSI_AUTHOR");
    assert_eq!(author["value_type"], "VT_LPWSTR");
    assert_eq!(author["value_type_id"], 0x1F);
    assert_eq!(author["value"], "Ana Lopez");

    let build = &sets[1]["records"][1];
    assert_eq!(build["entry_name"], "Build");
    assert_eq!(build["property"], serde_json::Value::Null);
    assert_eq!(build["data"], "67120000");
}
