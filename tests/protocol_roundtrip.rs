mod common;

use indoc::indoc;
use pretty_assertions::assert_eq;
use rorscore::{
    calculate_rorschach, validate_protocol, Card, Error, Protocol, ValidationConfig,
};
use tempfile::TempDir;

#[test]
fn saved_protocol_loads_back_identically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("protocol.json");
    let protocol = common::rich_protocol();

    protocol.save(&path).unwrap();
    let loaded = Protocol::load(&path).unwrap();

    assert_eq!(loaded, protocol);
    assert_eq!(
        calculate_rorschach(loaded.responses()),
        calculate_rorschach(protocol.responses())
    );
}

#[test]
fn reflection_flags_use_exported_field_names() {
    let json = common::rich_protocol().to_json_pretty().unwrap();
    assert!(json.contains("\"FrScore\": true"));
    assert!(json.contains("\"rFScore\": false"));
}

#[test]
fn exported_file_without_optional_fields_imports() {
    let json = indoc! {r#"
        [
          {"card": "I", "response_index": 1, "location": "W", "dq": "o",
           "determinants": ["F"], "fq": "o", "pair": false, "contents": ["A"],
           "popular": true, "z": "ZW", "special_scores": []},
          {"card": "II", "response_index": 1, "location": "D", "dq": "+",
           "determinants": ["Ma", "FC"], "fq": "o", "pair": true, "contents": ["H"],
           "popular": false, "z": "ZA", "special_scores": ["COP"],
           "gphr": "GHR", "zscore": 3.0}
        ]
    "#};
    let protocol = Protocol::from_json(json).unwrap();

    assert_eq!(protocol.len(), 2);
    let second = &protocol.responses()[1];
    assert_eq!(second.card, Some(Card::II));
    assert!(!second.fr_score);
    assert_eq!(second.gphr.as_deref(), Some("GHR"));
}

#[test]
fn loading_missing_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    match Protocol::load(&path).unwrap_err() {
        Error::FileSystem { path: reported, source, .. } => {
            assert_eq!(reported.as_deref(), Some(path.as_path()));
            assert!(source.is_some());
        }
        other => panic!("expected a file system error, got {other:?}"),
    }
}

#[test]
fn rich_protocol_validates_cleanly() {
    let protocol = common::rich_protocol();
    let report = validate_protocol(&protocol, &ValidationConfig::default()).unwrap();

    assert_eq!(report.valid_responses, 20);
    assert_eq!(report.unassigned_rows, 0);
    assert!(report.is_clean(), "unexpected warnings: {:?}", report.warnings);
}

#[test]
fn short_protocol_missing_cards_is_rejected() {
    let protocol = Protocol::new(common::one_per_card().into_iter().take(9).collect());
    let err = validate_protocol(&protocol, &ValidationConfig::default()).unwrap_err();
    assert!(matches!(err, Error::MissingCards(ref cards) if cards == &vec![Card::X]));
}
