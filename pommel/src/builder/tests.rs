use camino::Utf8Path;
use serde::Deserialize;

use super::ModelBuilder;
use crate::domain::DomainModel;
use crate::error::ModelError;
use crate::property::ModelProperty;
use crate::uris;
use test_helpers::ProjectDoc;

fn model(doc: ProjectDoc) -> DomainModel {
    DomainModel::from_document(doc.build()).expect("fixture serializes")
}

#[test]
fn an_empty_chain_is_rejected() {
    let error = ModelBuilder::new()
        .build(&[], &[])
        .expect_err("nothing to build");
    assert!(matches!(error.as_ref(), ModelError::Structural { .. }));
}

#[test]
fn build_produces_an_assembled_document() {
    let chain = vec![
        model(
            ProjectDoc::child("sub")
                .parent("g", "proj", "1.0")
                .build_field("finalName", "${project.artifactId}-${project.version}"),
        ),
        model(ProjectDoc::new("g", "proj", "1.0")),
    ];

    let effective = ModelBuilder::new().build(&chain, &[]).expect("chain builds");
    assert!(effective.problems().is_empty());

    let document = effective.document().expect("sequence assembles");
    assert_eq!(document["artifactId"], "sub");
    assert_eq!(document["version"], "1.0");
    assert_eq!(document["build"]["finalName"], "sub-1.0");
}

#[test]
fn extract_deserializes_the_effective_document() {
    #[derive(Debug, Deserialize)]
    struct Slim {
        #[serde(rename = "artifactId")]
        artifact_id: String,
        version: String,
    }

    let chain = vec![model(ProjectDoc::new("g", "app", "2.0"))];
    let effective = ModelBuilder::new().build(&chain, &[]).expect("chain builds");
    let slim: Slim = effective.extract().expect("document matches the shape");
    assert_eq!(slim.artifact_id, "app");
    assert_eq!(slim.version, "2.0");
}

#[test]
fn concrete_state_round_trips_through_the_model() {
    let chain = vec![model(
        ProjectDoc::new("g", "app", "1.0").build_field("directory", "${pom.basedir}/target"),
    )];
    let mut effective = ModelBuilder::new().build(&chain, &[]).expect("chain builds");
    assert!(!effective.is_concrete());

    let directory = Utf8Path::new("/work/app");
    effective.calculate_concrete_state(directory);
    assert!(effective.is_concrete());
    assert_eq!(
        resolved(effective.properties(), uris::build::DIRECTORY),
        Some("/work/app/target")
    );

    // A second calculation is a no-op.
    effective.calculate_concrete_state(Utf8Path::new("/elsewhere"));
    assert_eq!(
        resolved(effective.properties(), uris::build::DIRECTORY),
        Some("/work/app/target")
    );

    effective.restore_dynamic_state();
    assert!(!effective.is_concrete());
    assert_eq!(
        resolved(effective.properties(), uris::build::DIRECTORY),
        Some("${pom.basedir}/target")
    );

    // So is a second restore.
    effective.restore_dynamic_state();
    assert_eq!(
        resolved(effective.properties(), uris::build::DIRECTORY),
        Some("${pom.basedir}/target")
    );
}

fn resolved<'a>(properties: &'a [ModelProperty], uri: &str) -> Option<&'a str> {
    properties
        .iter()
        .find(|property| property.uri() == uri)
        .and_then(ModelProperty::resolved_value)
}
