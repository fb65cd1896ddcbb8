use chrono::NaiveDate;
use modelcard_core::{
    Citation, License, ModelCard, ModelMetadata, Owner, RecordError, Reference, Version,
};

fn sample_card() -> ModelCard {
    ModelCard::new(ModelMetadata {
        name: "BERT".to_string(),
        path: "/models/bert".to_string(),
        overview: "Bidirectional encoder.".to_string(),
        documentation: "Fine-tune per task.".to_string(),
        owners: vec![
            Owner::new("Jane Doe", "jane@example.com"),
            Owner::new("", "ml-team@example.com"),
        ],
        version: Some(Version::new(
            "1.0",
            NaiveDate::from_ymd_opt(2024, 1, 1),
            "initial release",
        )),
        licenses: vec![License::new("Apache-2.0", ""), License::new("", "Custom terms")],
        references: vec![
            Reference::new("https://arxiv.org/abs/1810.04805"),
            Reference::new("https://github.com/google-research/bert"),
        ],
        citations: vec![Citation::new("APA", "Devlin et al., 2018")],
    })
}

#[test]
fn json_uses_expected_wire_fields() {
    let json = serde_json::to_value(sample_card()).unwrap();
    let details = &json["modelDetails"];

    assert_eq!(details["name"], "BERT");
    assert_eq!(details["path"], "/models/bert");
    assert_eq!(details["owners"][0]["name"], "Jane Doe");
    assert_eq!(details["owners"][0]["contact"], "jane@example.com");
    assert_eq!(details["version"]["name"], "1.0");
    assert_eq!(details["version"]["date"], "2024-01-01");
    assert_eq!(details["version"]["diff"], "initial release");
    assert_eq!(details["licenses"][0]["identifier"], "Apache-2.0");
    assert_eq!(details["licenses"][1]["customText"], "Custom terms");
    assert_eq!(
        details["references"][0]["reference"],
        "https://arxiv.org/abs/1810.04805"
    );
    assert_eq!(details["citations"][0]["style"], "APA");
    assert_eq!(details["citations"][0]["citation"], "Devlin et al., 2018");
}

#[test]
fn json_roundtrip_preserves_values_and_order() {
    let card = sample_card();
    let encoded = card.to_json().unwrap();
    let decoded = ModelCard::from_json(&encoded).unwrap();

    assert_eq!(decoded, card);
    assert_eq!(
        decoded.model_details.owners[1],
        Owner::new("", "ml-team@example.com")
    );
    assert_eq!(
        decoded.model_details.references[1].reference,
        "https://github.com/google-research/bert"
    );
}

#[test]
fn blank_version_roundtrips_with_empty_date() {
    let card = ModelCard::new(ModelMetadata {
        version: Some(Version::default()),
        ..ModelMetadata::default()
    });
    let encoded = card.to_json().unwrap();
    let json: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(json["modelDetails"]["version"]["date"], "");
    assert_eq!(json["modelDetails"]["owners"], serde_json::json!([]));

    assert_eq!(ModelCard::from_json(&encoded).unwrap(), card);
}

#[test]
fn json_is_pretty_printed_with_two_space_indent() {
    let encoded = sample_card().to_json().unwrap();
    assert!(encoded.starts_with("{\n  \"modelDetails\": {\n    \"name\": \"BERT\""));
}

#[test]
fn decode_tolerates_missing_keys_and_null_date() {
    let card = ModelCard::from_json(
        r#"{"modelDetails":{"name":"tiny","version":{"name":"0.1","date":null}}}"#,
    )
    .unwrap();
    assert_eq!(card.model_details.name, "tiny");
    assert!(card.model_details.owners.is_empty());
    let version = card.model_details.version.unwrap();
    assert_eq!(version.name, "0.1");
    assert_eq!(version.date, None);
    assert_eq!(version.diff, "");
}

#[test]
fn decode_reports_malformed_json() {
    let err = ModelCard::from_json("{\"modelDetails\": ").unwrap_err();
    assert!(matches!(err, RecordError::Decode(_)));
}
