use rstest::rstest;

use super::{ContainerAction, ContainerFactory, CoordinateFactory, IdFactory, ModelContainer};
use crate::error::ModelError;
use crate::property::ModelProperty;
use crate::uris;

fn plugin_run(
    group_id: Option<&str>,
    artifact_id: Option<&str>,
    version: Option<&str>,
) -> Vec<ModelProperty> {
    let mut run = vec![ModelProperty::new(uris::build::plugins::PLUGIN, None)];
    if let Some(group_id) = group_id {
        run.push(ModelProperty::new(
            uris::build::plugins::GROUP_ID,
            Some(group_id.into()),
        ));
    }
    if let Some(artifact_id) = artifact_id {
        run.push(ModelProperty::new(
            uris::build::plugins::ARTIFACT_ID,
            Some(artifact_id.into()),
        ));
    }
    if let Some(version) = version {
        run.push(ModelProperty::new(
            uris::build::plugins::VERSION,
            Some(version.into()),
        ));
    }
    run
}

fn plugin(group_id: Option<&str>, artifact_id: &str, version: Option<&str>) -> ModelContainer {
    CoordinateFactory::new()
        .create(plugin_run(group_id, Some(artifact_id), version))
        .unwrap_or_else(|error| panic!("container should build: {error}"))
}

fn execution(id: Option<&str>) -> ModelContainer {
    let mut run = vec![ModelProperty::new(uris::build::plugins::EXECUTION, None)];
    if let Some(id) = id {
        run.push(ModelProperty::new(
            uris::build::plugins::EXECUTION_ID,
            Some(id.into()),
        ));
    }
    IdFactory::new()
        .create(run)
        .unwrap_or_else(|error| panic!("container should build: {error}"))
}

#[rstest]
#[case::unversioned_both(None, None, ContainerAction::Join)]
#[case::child_versioned_ancestor_not(Some("1.0"), None, ContainerAction::Delete)]
#[case::ancestor_versioned_child_not(None, Some("1.0"), ContainerAction::Delete)]
#[case::same_version(Some("1.0"), Some("1.0"), ContainerAction::Join)]
#[case::different_versions(Some("2.0"), Some("1.0"), ContainerAction::Delete)]
fn coordinate_merge_rules(
    #[case] child_version: Option<&str>,
    #[case] ancestor_version: Option<&str>,
    #[case] expected: ContainerAction,
) {
    let child = plugin(Some("g"), "a", child_version);
    let ancestor = plugin(Some("g"), "a", ancestor_version);
    assert_eq!(child.merge_action(&ancestor), expected);
}

fn dependency(kind: Option<&str>) -> ModelContainer {
    let mut run = vec![
        ModelProperty::new(uris::dependencies::DEPENDENCY, None),
        ModelProperty::new(uris::dependencies::GROUP_ID, Some("g".into())),
        ModelProperty::new(uris::dependencies::ARTIFACT_ID, Some("a".into())),
        ModelProperty::new(uris::dependencies::VERSION, Some("1.0".into())),
    ];
    if let Some(kind) = kind {
        run.push(ModelProperty::new(uris::dependencies::TYPE, Some(kind.into())));
    }
    CoordinateFactory::new()
        .create(run)
        .unwrap_or_else(|error| panic!("container should build: {error}"))
}

#[rstest]
#[case::same_type(Some("jar"), Some("jar"), ContainerAction::Join)]
#[case::omitted_type_defaults_to_jar(None, Some("jar"), ContainerAction::Join)]
#[case::different_types(Some("test-jar"), Some("jar"), ContainerAction::Nop)]
fn equal_versions_compare_by_type(
    #[case] child_kind: Option<&str>,
    #[case] ancestor_kind: Option<&str>,
    #[case] expected: ContainerAction,
) {
    assert_eq!(
        dependency(child_kind).merge_action(&dependency(ancestor_kind)),
        expected
    );
}

#[test]
fn different_coordinates_are_unrelated() {
    let child = plugin(Some("g"), "a", Some("1.0"));
    let ancestor = plugin(Some("g"), "b", Some("1.0"));
    assert_eq!(child.merge_action(&ancestor), ContainerAction::Nop);
}

#[test]
fn plugin_group_id_defaults_to_maven_plugins() {
    let shorthand = plugin(None, "maven-compiler-plugin", None);
    let explicit = plugin(
        Some("org.apache.maven.plugins"),
        "maven-compiler-plugin",
        None,
    );
    assert_eq!(shorthand.merge_action(&explicit), ContainerAction::Join);
}

#[rstest]
#[case::equal_ids(Some("default"), Some("default"), ContainerAction::Join)]
#[case::different_ids(Some("a"), Some("b"), ContainerAction::Nop)]
#[case::child_id_missing(None, Some("default"), ContainerAction::Nop)]
#[case::ancestor_id_missing(Some("default"), None, ContainerAction::Nop)]
fn id_merge_rules(
    #[case] child_id: Option<&str>,
    #[case] ancestor_id: Option<&str>,
    #[case] expected: ContainerAction,
) {
    assert_eq!(
        execution(child_id).merge_action(&execution(ancestor_id)),
        expected
    );
}

#[test]
fn mixed_identity_kinds_never_merge() {
    let coordinate = plugin(Some("g"), "a", None);
    let id = execution(Some("default"));
    assert_eq!(coordinate.merge_action(&id), ContainerAction::Nop);
}

#[test]
fn missing_artifact_id_is_an_identity_error() {
    let result = CoordinateFactory::new().create(plugin_run(Some("g"), None, Some("1.0")));
    let error = result.expect_err("artifactId is required");
    assert!(matches!(error.as_ref(), ModelError::Identity { .. }));
    assert!(error.to_string().contains("artifactId"));
}

#[test]
fn empty_run_is_an_identity_error() {
    assert!(CoordinateFactory::new().create(Vec::new()).is_err());
    assert!(IdFactory::new().create(Vec::new()).is_err());
}

#[test]
fn child_value_reads_direct_fields_only() {
    let container = plugin(Some("g"), "a", Some("1.0"));
    assert_eq!(container.child_value("artifactId"), Some("a"));
    assert_eq!(container.child_value("inherited"), None);
}
