use std::sync::Arc;

use serde_json::json;

use super::{FlattenCache, InheritanceTransformer};
use crate::domain::DomainModel;
use crate::property::ModelProperty;
use crate::uris;
use test_helpers::{ProjectDoc, plugin_with_inherited};

fn transformer() -> InheritanceTransformer {
    InheritanceTransformer::new(Arc::new(FlattenCache::new()))
}

fn model(doc: ProjectDoc) -> DomainModel {
    DomainModel::from_document(doc.build()).expect("fixture serializes")
}

fn value_of<'a>(properties: &'a [ModelProperty], uri: &str) -> Option<&'a str> {
    properties
        .iter()
        .find(|property| property.uri() == uri)
        .and_then(ModelProperty::value)
}

#[test]
fn version_is_inherited_across_three_levels() {
    let chain = vec![
        model(ProjectDoc::child("leaf").parent("g", "mid", "2.0")),
        model(ProjectDoc::new("g", "mid", "2.0").parent("g", "root", "2.0")),
        model(ProjectDoc::new("g", "root", "2.0")),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert_eq!(value_of(&merged, uris::VERSION), Some("2.0"));
    assert_eq!(value_of(&merged, uris::ARTIFACT_ID), Some("leaf"));
}

#[test]
fn scm_url_gains_the_descendant_artifact_id() {
    let chain = vec![
        model(ProjectDoc::child("sub").parent("g", "proj", "1.0")),
        model(ProjectDoc::new("g", "proj", "1.0").scm_url("http://x/proj")),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert_eq!(value_of(&merged, uris::scm::URL), Some("http://x/proj/sub"));
}

#[test]
fn project_url_composes_like_scm() {
    let chain = vec![
        model(ProjectDoc::child("sub").parent("g", "proj", "1.0")),
        model(ProjectDoc::new("g", "proj", "1.0").field("url", "http://site/proj")),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert_eq!(value_of(&merged, uris::URL), Some("http://site/proj/sub"));
}

#[test]
fn a_trailing_slash_on_the_projects_own_url_survives() {
    let chain = vec![model(
        ProjectDoc::new("g", "proj", "1.0").field("url", "http://site/proj/"),
    )];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert_eq!(value_of(&merged, uris::URL), Some("http://site/proj/"));
}

#[test]
fn a_trailing_slash_on_the_ancestor_base_does_not_double_up() {
    let chain = vec![
        model(ProjectDoc::child("sub").parent("g", "proj", "1.0")),
        model(ProjectDoc::new("g", "proj", "1.0").scm_url("http://x/proj/")),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert_eq!(value_of(&merged, uris::scm::URL), Some("http://x/proj/sub"));
}

#[test]
fn deeper_chains_append_every_intermediate_segment() {
    let chain = vec![
        model(ProjectDoc::child("leaf").parent("g", "mid", "1.0")),
        model(ProjectDoc::new("g", "mid", "1.0").parent("g", "root", "1.0")),
        model(ProjectDoc::new("g", "root", "1.0").scm_url("http://x/root")),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert_eq!(
        value_of(&merged, uris::scm::URL),
        Some("http://x/root/mid/leaf")
    );
}

#[test]
fn the_child_scm_url_is_never_rewritten() {
    let chain = vec![
        model(
            ProjectDoc::new("g", "leaf", "1.0")
                .parent("g", "proj", "1.0")
                .scm_url("http://x/leaf"),
        ),
        model(ProjectDoc::new("g", "proj", "1.0").scm_url("http://x/proj")),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert_eq!(value_of(&merged, uris::scm::URL), Some("http://x/leaf"));
}

#[test]
fn ancestor_modules_never_appear_in_the_result() {
    let chain = vec![
        model(ProjectDoc::child("sub").parent("g", "proj", "1.0")),
        model(ProjectDoc::new("g", "proj", "1.0").modules(&["sub", "other"])),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert!(!merged
        .iter()
        .any(|property| property.uri() == uris::MODULE));
}

#[test]
fn the_child_module_list_is_kept() {
    let chain = vec![
        model(ProjectDoc::new("g", "agg", "1.0").modules(&["core", "cli"])),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    let modules: Vec<_> = merged
        .iter()
        .filter(|property| property.uri() == uris::MODULE)
        .filter_map(ModelProperty::value)
        .collect();
    assert_eq!(modules, ["core", "cli"]);
}

#[test]
fn uninherited_ancestor_plugin_is_stripped() {
    let chain = vec![
        model(ProjectDoc::child("sub").parent("g", "proj", "1.0")),
        model(
            ProjectDoc::new("g", "proj", "1.0")
                .plugin(plugin_with_inherited("maven-site-plugin", "3.0", "false")),
        ),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert!(!merged
        .iter()
        .any(|property| property.uri() == uris::build::plugins::ARTIFACT_ID));
}

#[test]
fn uninherited_child_plugin_is_retained() {
    let chain = vec![model(
        ProjectDoc::new("g", "proj", "1.0")
            .plugin(plugin_with_inherited("maven-site-plugin", "3.0", "false")),
    )];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert_eq!(
        value_of(&merged, uris::build::plugins::ARTIFACT_ID),
        Some("maven-site-plugin")
    );
}

#[test]
fn ancestor_name_and_packaging_are_not_inherited() {
    let chain = vec![
        model(ProjectDoc::child("sub").parent("g", "proj", "1.0")),
        model(
            ProjectDoc::new("g", "proj", "1.0")
                .field("name", "Parent Project")
                .packaging("pom"),
        ),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    assert_eq!(value_of(&merged, uris::NAME), None);
    assert_eq!(value_of(&merged, uris::PACKAGING), None);
}

#[test]
fn parent_licenses_yield_to_the_child_section() {
    let child = json!({
        "modelVersion": "4.0.0",
        "artifactId": "sub",
        "parent": { "groupId": "g", "artifactId": "proj", "version": "1.0" },
        "licenses": [{ "name": "MIT" }],
    });
    let parent = json!({
        "modelVersion": "4.0.0",
        "groupId": "g",
        "artifactId": "proj",
        "version": "1.0",
        "licenses": [{ "name": "Apache-2.0" }],
    });
    let chain = vec![
        DomainModel::from_document(child).expect("fixture serializes"),
        DomainModel::from_document(parent).expect("fixture serializes"),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    let licenses: Vec<_> = merged
        .iter()
        .filter(|property| property.uri() == "project/licenses#collection/license/name")
        .filter_map(ModelProperty::value)
        .collect();
    assert_eq!(licenses, ["MIT"]);
}

#[test]
fn unversioned_containers_join_with_the_child_winning() {
    let chain = vec![
        model(
            ProjectDoc::child("sub")
                .parent("g", "proj", "1.0")
                .dependency("org.x", "lib", None),
        ),
        model(ProjectDoc::new("g", "proj", "1.0").dependency("org.x", "lib", None)),
    ];

    let merged = transformer().transform(&chain).expect("chain merges");
    let artifact_ids: Vec<_> = merged
        .iter()
        .filter(|property| property.uri() == uris::dependencies::ARTIFACT_ID)
        .collect();
    assert_eq!(artifact_ids.len(), 1);
}

#[test]
fn a_shared_ancestor_is_flattened_once() {
    let cache = Arc::new(FlattenCache::new());
    let transformer = InheritanceTransformer::new(Arc::clone(&cache));

    let sibling_chain = |artifact_id: &str| {
        vec![
            model(ProjectDoc::child(artifact_id).parent("g", "proj", "1.0")),
            model(ProjectDoc::new("g", "proj", "1.0").field("inceptionYear", "2001")),
        ]
    };

    let first = transformer
        .transform(&sibling_chain("alpha"))
        .expect("chain merges");
    assert_eq!(cache.len(), 1);

    let second = transformer
        .transform(&sibling_chain("beta"))
        .expect("chain merges");
    assert_eq!(cache.len(), 1);

    assert_eq!(
        value_of(&first, "project/inceptionYear"),
        value_of(&second, "project/inceptionYear")
    );
}

#[test]
fn a_malformed_level_aborts_the_chain() {
    let chain = vec![DomainModel::from_bytes(b"not a document".to_vec())];
    assert!(transformer().transform(&chain).is_err());
}
