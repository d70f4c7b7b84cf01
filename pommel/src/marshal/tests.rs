use serde_json::json;

use super::{assemble, flatten};
use crate::error::ModelError;
use crate::property::ModelProperty;
use crate::uris;
use test_helpers::ProjectDoc;

#[test]
fn flatten_emits_document_order_with_markers() {
    let document = ProjectDoc::new("g", "a", "1.0")
        .modules(&["core", "cli"])
        .build();

    let properties = flatten("g:a:1.0", &document).expect("well-formed document");
    let flattened: Vec<&str> = properties.iter().map(ModelProperty::uri).collect();
    assert_eq!(
        flattened,
        [
            uris::BASE,
            uris::MODEL_VERSION,
            uris::GROUP_ID,
            uris::ARTIFACT_ID,
            uris::VERSION,
            uris::MODULES,
            uris::MODULE,
            uris::MODULE,
        ]
    );
    assert_eq!(properties[6].value(), Some("core"));
    assert_eq!(properties[7].value(), Some("cli"));
}

#[test]
fn collection_members_stay_contiguous() {
    let document = ProjectDoc::new("g", "a", "1.0")
        .dependency("org.x", "first", Some("1.0"))
        .dependency("org.x", "second", None)
        .build();

    let properties = flatten("g:a:1.0", &document).expect("well-formed document");
    let member_positions: Vec<usize> = properties
        .iter()
        .enumerate()
        .filter(|(_, property)| uris::is_within(property.uri(), uris::dependencies::X_URI))
        .map(|(index, _)| index)
        .collect();
    let first = member_positions[0];
    assert!(
        member_positions
            .iter()
            .enumerate()
            .all(|(offset, index)| *index == first + offset)
    );
}

#[test]
fn flatten_then_assemble_round_trips() {
    let document = ProjectDoc::new("g", "a", "1.0")
        .field("name", "Widget")
        .scm_url("http://scm/widget")
        .modules(&["core"])
        .dependency("org.x", "dep", Some("2.0"))
        .build_field("finalName", "widget")
        .build();

    let properties = flatten("g:a:1.0", &document).expect("well-formed document");
    let rebuilt = assemble(&properties).expect("sequence assembles");
    assert_eq!(rebuilt, document);
}

#[test]
fn attributes_ride_along_with_their_element() {
    let document = json!({
        "modelVersion": "4.0.0",
        "artifactId": "a",
        "scm": { "@sourceKind": "git", "url": "http://scm" }
    });

    let properties = flatten("a", &document).expect("well-formed document");
    let attribute = properties
        .iter()
        .find(|property| property.uri().contains("#property"))
        .expect("attribute property");
    assert_eq!(attribute.uri(), "project/scm#property/sourceKind");
    assert_eq!(attribute.value(), Some("git"));

    let rebuilt = assemble(&properties).expect("sequence assembles");
    assert_eq!(rebuilt, document);
}

#[test]
fn non_object_root_is_structural() {
    let error = flatten("bad", &json!("scalar")).expect_err("root must be an object");
    assert!(matches!(error.as_ref(), ModelError::Structural { .. }));
}

#[test]
fn array_outside_the_whitelist_is_structural() {
    let document = json!({ "artifactId": "a", "colours": ["red", "green"] });
    let error = flatten("bad", &document).expect_err("colours is not a collection position");
    assert!(error.to_string().contains("colours"));
}

#[test]
fn scalar_at_a_collection_position_is_structural() {
    let document = json!({ "artifactId": "a", "modules": "core" });
    let error = flatten("bad", &document).expect_err("modules must hold members");
    assert!(matches!(error.as_ref(), ModelError::Structural { .. }));
}

#[test]
fn member_field_before_its_member_marker_cannot_assemble() {
    let orphan = vec![
        ModelProperty::new(uris::BASE, None),
        ModelProperty::new(uris::dependencies::X_URI, None),
        ModelProperty::new(uris::dependencies::ARTIFACT_ID, Some("a".into())),
    ];
    let error = assemble(&orphan).expect_err("no member is open");
    assert!(matches!(error.as_ref(), ModelError::Structural { .. }));
}
