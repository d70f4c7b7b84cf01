//! Per-level inheritance rules.

use std::collections::HashMap;

use crate::container::{ContainerFactory, CoordinateFactory, IdFactory};
use crate::datasource::{DataSource, find_insert_point};
use crate::property::ModelProperty;
use crate::{ModelResult, uris};

/// Boundary URIs where an `inherited == "false"` flag strips the whole run.
pub(crate) const EXECUTION_URIS: &[&str] = &[
    uris::build::plugins::EXECUTION,
    "project/build/pluginManagement/plugins#collection/plugin/executions#collection/execution",
];

pub(crate) const PLUGIN_URIS: &[&str] = &[
    uris::build::plugins::PLUGIN,
    uris::build::plugin_management::PLUGIN,
    uris::reporting::PLUGIN,
];

/// Subtrees an ancestor never contributes to a descendant's model.
pub(crate) const NEVER_INHERITED: &[&str] = &[
    uris::NAME,
    uris::PACKAGING,
    uris::PROFILES,
    uris::build::RESOURCES,
    uris::build::TEST_RESOURCES,
    uris::PLUGIN_REPOSITORIES,
];

/// Sections inherited only when no more specialized level defined them.
pub(crate) const SINGLETON_SECTIONS: &[&str] = &[
    uris::LICENSES,
    uris::ORGANIZATION,
    uris::DEVELOPERS,
    uris::CONTRIBUTORS,
    uris::MAILING_LISTS,
    uris::CI_MANAGEMENT,
    uris::ISSUE_MANAGEMENT,
    uris::distribution_management::REPOSITORY,
    uris::distribution_management::SNAPSHOT_REPOSITORY,
    uris::distribution_management::SITE,
];

/// URL fields composed from an ancestor base plus descendant artifact ids.
pub(crate) const COMPOSED_URL_URIS: &[&str] = &[
    uris::URL,
    uris::scm::URL,
    uris::scm::CONNECTION,
    uris::scm::DEVELOPER_CONNECTION,
    uris::distribution_management::SITE_URL,
];

pub(crate) fn factories() -> Vec<Box<dyn ContainerFactory>> {
    vec![
        Box::new(CoordinateFactory::new()),
        Box::new(IdFactory::new()),
    ]
}

pub(crate) fn value_of<'a>(properties: &'a [ModelProperty], uri: &str) -> Option<&'a str> {
    properties
        .iter()
        .find(|property| property.uri() == uri)
        .and_then(ModelProperty::value)
}

pub(crate) fn has_uri(properties: &[ModelProperty], uri: &str) -> bool {
    properties.iter().any(|property| property.uri() == uri)
}

/// Copy a missing scalar from another position in the same level.
pub(crate) fn synthesize_missing(properties: &mut Vec<ModelProperty>, uri: &str, from: &str) {
    if has_uri(properties, uri) {
        return;
    }
    if let Some(value) = value_of(properties, from).map(str::to_owned) {
        properties.insert(1, ModelProperty::new(uri, Some(value)));
    }
}

/// Remove every property at or beneath the given base URI.
pub(crate) fn strip_within(properties: &mut Vec<ModelProperty>, base: &str) {
    properties.retain(|property| !uris::is_within(property.uri(), base));
}

/// Remove container runs whose `inherited` child is literally `"false"`.
pub(crate) fn strip_uninherited(
    properties: Vec<ModelProperty>,
    boundary_uris: &[&str],
) -> ModelResult<Vec<ModelProperty>> {
    let mut source = DataSource::new(properties, factories());
    for uri in boundary_uris {
        // Deleting invalidates recorded run positions, so re-query after
        // every removal.
        'strip: loop {
            for container in source.query_for(uri)? {
                if container.child_value("inherited") == Some("false") {
                    source.delete(&container);
                    continue 'strip;
                }
            }
            break;
        }
    }
    Ok(source.into_properties())
}

/// Fix URL bases on first definition and append descendant segments.
///
/// `segments` holds the artifact ids of every level already visited, most
/// recent first. The first level to define a field composes its value with
/// the running segments; later definitions are left alone (deduplication
/// discards them in favour of the composed one).
pub(crate) fn compose_urls(
    properties: &mut [ModelProperty],
    fixed: &mut HashMap<&'static str, String>,
    segments: &[String],
) {
    for &uri in COMPOSED_URL_URIS {
        if fixed.contains_key(uri) {
            continue;
        }
        let Some(position) = properties.iter().position(|property| {
            property.uri() == uri && property.value().is_some_and(|value| !value.is_empty())
        }) else {
            continue;
        };
        let base = properties[position]
            .value()
            .unwrap_or_default()
            .trim_end_matches('/')
            .to_owned();
        // Without descendant segments the defining level's value stands,
        // trailing slash included.
        if !segments.is_empty() {
            let composed = format!("{base}/{}", segments.join("/"));
            properties[position] = ModelProperty::new(uri, Some(composed));
        }
        fixed.insert(uri, base);
    }
}

/// Deduplicate a concatenated sequence, child occurrences winning, while
/// keeping collection entries and grouping each property under the last
/// related position.
pub(crate) fn sort(properties: &[ModelProperty]) -> Vec<ModelProperty> {
    let mut sorted: Vec<ModelProperty> = Vec::new();
    for property in properties {
        let repeatable = property.uri().contains("#collection");
        if !repeatable && has_uri(&sorted, property.uri()) {
            continue;
        }
        let at = find_insert_point(property, &sorted);
        sorted.insert(at, property.clone());
    }
    sorted
}
