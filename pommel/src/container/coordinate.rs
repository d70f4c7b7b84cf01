//! Factory for coordinate-identified containers.

use std::sync::Arc;

use crate::container::{ContainerFactory, Identity, ModelContainer, direct_child_value, run_root};
use crate::error::ModelError;
use crate::property::ModelProperty;
use crate::{ModelResult, uris};

/// Applied when a plugin omits its `groupId` (plugin shorthand).
const DEFAULT_GROUP_ID: &str = "org.apache.maven.plugins";

const COORDINATE_URIS: &[&str] = &[
    uris::dependencies::DEPENDENCY,
    uris::dependencies::EXCLUSION,
    uris::dependency_management::DEPENDENCY,
    "project/dependencyManagement/dependencies#collection/dependency/exclusions#collection/exclusion",
    uris::build::plugins::PLUGIN,
    uris::build::plugin_management::PLUGIN,
    "project/build/plugins#collection/plugin/dependencies#collection/dependency",
    "project/build/pluginManagement/plugins#collection/plugin/dependencies#collection/dependency",
    uris::reporting::PLUGIN,
    "project/profiles#collection/profile/dependencies#collection/dependency",
    "project/profiles#collection/profile/dependencyManagement/dependencies#collection/dependency",
    "project/profiles#collection/profile/build/plugins#collection/plugin",
    "project/profiles#collection/profile/build/pluginManagement/plugins#collection/plugin",
    "project/profiles#collection/profile/reporting/plugins#collection/plugin",
];

/// Identifies containers by `(groupId, artifactId, version?, type?)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoordinateFactory;

impl CoordinateFactory {
    /// Create the factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ContainerFactory for CoordinateFactory {
    fn uris(&self) -> &[&'static str] {
        COORDINATE_URIS
    }

    fn create(&self, properties: Vec<ModelProperty>) -> ModelResult<ModelContainer> {
        let Some(root) = run_root(&properties) else {
            return Err(Arc::new(ModelError::identity(
                "",
                "cannot build a coordinate container from an empty run",
            )));
        };
        let root_uri = root.uri().to_owned();

        let Some(artifact_id) = direct_child_value(&properties, &root_uri, "artifactId") else {
            return Err(Arc::new(ModelError::identity(
                &root_uri,
                "coordinate container has no artifactId",
            )));
        };
        let identity = Identity::Coordinate {
            group_id: direct_child_value(&properties, &root_uri, "groupId")
                .unwrap_or(DEFAULT_GROUP_ID)
                .to_owned(),
            artifact_id: artifact_id.to_owned(),
            version: direct_child_value(&properties, &root_uri, "version").map(str::to_owned),
            kind: direct_child_value(&properties, &root_uri, "type").map(str::to_owned),
        };
        Ok(ModelContainer::new(root_uri, properties, identity))
    }
}
