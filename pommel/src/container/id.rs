//! Factory for id-identified containers.

use std::sync::Arc;

use crate::container::{ContainerFactory, Identity, ModelContainer, direct_child_value, run_root};
use crate::error::ModelError;
use crate::property::ModelProperty;
use crate::{ModelResult, uris};

const ID_URIS: &[&str] = &[
    "project/profiles#collection/profile",
    uris::REPOSITORY,
    uris::PLUGIN_REPOSITORY,
    uris::build::plugins::EXECUTION,
    "project/build/pluginManagement/plugins#collection/plugin/executions#collection/execution",
    uris::reporting::REPORT_SET,
    "project/profiles#collection/profile/repositories#collection/repository",
    "project/profiles#collection/profile/pluginRepositories#collection/pluginRepository",
    "project/profiles#collection/profile/build/plugins#collection/plugin/executions#collection/execution",
];

/// Identifies containers by the child element literally named `id`.
///
/// A run with no `id` child is inert: it merges `Nop` against everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdFactory;

impl IdFactory {
    /// Create the factory.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ContainerFactory for IdFactory {
    fn uris(&self) -> &[&'static str] {
        ID_URIS
    }

    fn create(&self, properties: Vec<ModelProperty>) -> ModelResult<ModelContainer> {
        let Some(root) = run_root(&properties) else {
            return Err(Arc::new(ModelError::identity(
                "",
                "cannot build an id container from an empty run",
            )));
        };
        let root_uri = root.uri().to_owned();
        let identity =
            Identity::Id(direct_child_value(&properties, &root_uri, "id").map(str::to_owned));
        Ok(ModelContainer::new(root_uri, properties, identity))
    }
}
