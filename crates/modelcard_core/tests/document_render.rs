use chrono::NaiveDate;
use modelcard_core::render::html::render_html;
use modelcard_core::{
    Citation, License, ModelCard, ModelMetadata, Owner, Reference, Version,
};

fn card() -> ModelCard {
    ModelCard::new(ModelMetadata {
        name: "BERT".to_string(),
        path: "gs://models/bert".to_string(),
        overview: "Encoder <base> & large".to_string(),
        documentation: String::new(),
        owners: vec![Owner::new("Jane Doe", "jane@example.com")],
        version: Some(Version::new(
            "1.0",
            NaiveDate::from_ymd_opt(2024, 1, 1),
            "initial release",
        )),
        licenses: vec![License::new("Apache-2.0", "")],
        references: vec![Reference::new("https://arxiv.org/abs/1810.04805")],
        citations: vec![Citation::new("APA", "Devlin et al., 2018")],
    })
}

#[test]
fn rendering_is_byte_identical_for_equal_cards() {
    assert_eq!(render_html(&card()), render_html(&card().clone()));
}

#[test]
fn sections_appear_in_fixed_order() {
    let html = render_html(&card());
    let positions = [
        "id=\"model-details\"",
        "id=\"owners\"",
        "id=\"version\"",
        "id=\"licenses\"",
        "id=\"references\"",
        "id=\"citations\"",
    ]
    .iter()
    .map(|marker| html.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
    .collect::<Vec<_>>();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}

#[test]
fn document_contains_all_included_values() {
    let html = render_html(&card());
    assert!(html.contains("<title>Model Card for BERT</title>"));
    assert!(html.contains("<dd>Jane Doe</dd>"));
    assert!(html.contains("<dd>jane@example.com</dd>"));
    assert!(html.contains("<dd>2024-01-01</dd>"));
    assert!(html.contains("<dd>Apache-2.0</dd>"));
    assert!(html.contains("<figcaption>APA</figcaption>"));
    assert!(html.contains("<pre>Devlin et al., 2018</pre>"));
}

#[test]
fn user_text_is_escaped() {
    let html = render_html(&card());
    assert!(html.contains("Encoder &lt;base&gt; &amp; large"));
    assert!(!html.contains("<base>"));
}

#[test]
fn document_is_self_contained() {
    let html = render_html(&card());
    assert!(html.contains("<style>"));
    assert!(!html.contains("<link"));
    assert!(!html.contains("<script"));
}
