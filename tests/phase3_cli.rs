//! Phase 3 tests: CLI commands over files.

use std::fs;

use tempfile::TempDir;

use lz4_msgpack::cli::commands;
use lz4_msgpack::format::{inspect, to_msgpack};
use lz4_msgpack::{EnvelopeConfig, ExtHeader, LzmpError};

fn sample_msgpack() -> Vec<u8> {
    let rows: Vec<(u32, String)> = (0..300).map(|i| (i % 7, "payload".to_string())).collect();
    to_msgpack(&rows).unwrap()
}

#[test]
fn test_pack_unpack_files() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.msgpack");
    let packed = dir.path().join("data.lz4mp");
    let unpacked = dir.path().join("data.out");
    let raw = sample_msgpack();
    fs::write(&input, &raw).unwrap();

    commands::cmd_pack(&input, Some(&packed)).unwrap();
    let envelope = fs::read(&packed).unwrap();
    assert!(envelope.len() < raw.len());
    let info = inspect(&envelope).unwrap();
    assert_eq!(info.header, ExtHeader::Ext8);
    assert_eq!(info.uncompressed_len as usize, raw.len());

    commands::cmd_unpack(&packed, Some(&unpacked), &EnvelopeConfig::default()).unwrap();
    assert_eq!(fs::read(&unpacked).unwrap(), raw);
}

#[test]
fn test_unpack_plain_file_is_copy() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("plain.msgpack");
    let output = dir.path().join("plain.out");
    let raw = to_msgpack(&[1u8, 2, 3]).unwrap();
    fs::write(&input, &raw).unwrap();

    commands::cmd_unpack(&input, Some(&output), &EnvelopeConfig::default()).unwrap();
    assert_eq!(fs::read(&output).unwrap(), raw);
}

#[test]
fn test_inspect_both_formats() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.msgpack");
    let packed = dir.path().join("data.lz4mp");
    fs::write(&input, sample_msgpack()).unwrap();
    commands::cmd_pack(&input, Some(&packed)).unwrap();

    commands::cmd_inspect(&input, false).unwrap();
    commands::cmd_inspect(&input, true).unwrap();
    commands::cmd_inspect(&packed, false).unwrap();
    commands::cmd_inspect(&packed, true).unwrap();
}

#[test]
fn test_json_conversion() {
    let dir = TempDir::new().unwrap();
    let json_file = dir.path().join("doc.json");
    let packed = dir.path().join("doc.lz4mp");
    let rows: Vec<serde_json::Value> = (0..100)
        .map(|i| serde_json::json!({"id": i, "name": "repeated name", "tags": ["a", "b"]}))
        .collect();
    fs::write(&json_file, serde_json::to_string(&rows).unwrap()).unwrap();

    commands::cmd_from_json(&json_file, Some(&packed)).unwrap();
    let envelope = fs::read(&packed).unwrap();
    assert!(inspect(&envelope).is_some());

    let plain = lz4_msgpack::decode(&envelope).unwrap();
    let restored: Vec<serde_json::Value> = lz4_msgpack::format::from_msgpack(&plain).unwrap();
    assert_eq!(restored, rows);

    commands::cmd_to_json(&packed, true, &EnvelopeConfig::default()).unwrap();
}

#[test]
fn test_invalid_json_is_codec_error() {
    let dir = TempDir::new().unwrap();
    let json_file = dir.path().join("bad.json");
    fs::write(&json_file, "{not json").unwrap();
    let out = dir.path().join("bad.lz4mp");

    match commands::cmd_from_json(&json_file, Some(&out)) {
        Err(LzmpError::Codec(_)) => {}
        other => panic!("Expected Codec error, got {:?}", other),
    }
}

#[test]
fn test_unpack_errors() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("data.msgpack");
    let packed = dir.path().join("data.lz4mp");
    let out = dir.path().join("data.out");
    fs::write(&input, sample_msgpack()).unwrap();
    commands::cmd_pack(&input, Some(&packed)).unwrap();

    let small = EnvelopeConfig::with_max_uncompressed_len(16);
    assert!(matches!(
        commands::cmd_unpack(&packed, Some(&out), &small),
        Err(LzmpError::TooLarge { .. })
    ));

    let mut envelope = fs::read(&packed).unwrap();
    envelope.truncate(envelope.len() - 3);
    fs::write(&packed, &envelope).unwrap();
    assert!(matches!(
        commands::cmd_unpack(&packed, Some(&out), &EnvelopeConfig::default()),
        Err(LzmpError::Decompression(_))
    ));

    let missing = dir.path().join("missing.lz4mp");
    assert!(matches!(
        commands::cmd_unpack(&missing, Some(&out), &EnvelopeConfig::default()),
        Err(LzmpError::Io(_))
    ));
}
