//! Indexed container view over a flattened property sequence.
//!
//! The transformer asks the data source for every container at a given
//! boundary URI, decides merge actions pairwise, and applies them here.
//! Containers are contiguous runs: a run opens at a property whose URI
//! equals the boundary URI and extends over its descendants.

mod fold;

pub(crate) use fold::{find_insert_point, merge_runs};

use std::ops::Range;
use std::sync::Arc;

use crate::container::{ContainerFactory, ModelContainer};
use crate::error::ModelError;
use crate::property::ModelProperty;
use crate::{ModelResult, uris};

/// A property sequence plus the factories that group it into containers.
#[derive(Debug)]
pub struct DataSource {
    properties: Vec<ModelProperty>,
    factories: Vec<Box<dyn ContainerFactory>>,
}

impl DataSource {
    /// Wrap a property sequence with the given container factories.
    #[must_use]
    pub fn new(properties: Vec<ModelProperty>, factories: Vec<Box<dyn ContainerFactory>>) -> Self {
        Self {
            properties,
            factories,
        }
    }

    /// The current property sequence.
    #[must_use]
    pub fn properties(&self) -> &[ModelProperty] {
        &self.properties
    }

    /// Consume the data source, yielding the final sequence.
    #[must_use]
    pub fn into_properties(self) -> Vec<ModelProperty> {
        self.properties
    }

    /// All containers at the given boundary URI, in document order.
    ///
    /// # Errors
    ///
    /// [`ModelError::UnknownContainerUri`] when no factory governs `uri`;
    /// [`ModelError::Identity`] when a run fails identification.
    pub fn query_for(&self, uri: &str) -> ModelResult<Vec<ModelContainer>> {
        let factory = self.factory_for(uri)?;
        let mut containers = Vec::new();
        let mut index = 0;
        while index < self.properties.len() {
            if self.properties[index].uri() != uri {
                index += 1;
                continue;
            }
            let mut end = index + 1;
            while end < self.properties.len()
                && self.properties[end].uri() != uri
                && uris::is_within(self.properties[end].uri(), uri)
            {
                end += 1;
            }
            let mut container = factory.create(self.properties[index..end].to_vec())?;
            container.set_range(index..end);
            containers.push(container);
            index = end;
        }
        Ok(containers)
    }

    /// Merge an ancestor container into a child container.
    ///
    /// The child's run is replaced in place by the merged run (child values
    /// winning on scalar URI collision, collection members kept from both
    /// sides) and the ancestor's run is removed.
    ///
    /// # Errors
    ///
    /// Fails when either run is no longer present in the sequence, or when
    /// the merged run cannot re-identify itself.
    pub fn join(
        &mut self,
        child: &ModelContainer,
        ancestor: &ModelContainer,
    ) -> ModelResult<ModelContainer> {
        let factory = self.factory_for(child.uri())?;
        let child_range = self.find_run(child).ok_or_else(|| {
            Arc::new(ModelError::identity(
                child.uri(),
                "container run is no longer present in the data source",
            ))
        })?;
        let ancestor_range = self.find_run(ancestor).ok_or_else(|| {
            Arc::new(ModelError::identity(
                ancestor.uri(),
                "container run is no longer present in the data source",
            ))
        })?;

        let merged = merge_runs(child.properties(), ancestor.properties());
        let joined = factory.create(merged.clone())?;

        if ancestor_range.start > child_range.start {
            self.properties.drain(ancestor_range);
            self.properties.splice(child_range, merged);
        } else {
            self.properties.splice(child_range, merged);
            self.properties.drain(ancestor_range);
        }
        Ok(joined)
    }

    /// Remove a container's run from the sequence, if still present.
    pub fn delete(&mut self, container: &ModelContainer) {
        if let Some(range) = self.find_run(container) {
            self.properties.drain(range);
        }
    }

    fn factory_for(&self, uri: &str) -> ModelResult<&dyn ContainerFactory> {
        self.factories
            .iter()
            .map(AsRef::as_ref)
            .find(|factory| factory.uris().contains(&uri))
            .ok_or_else(|| {
                Arc::new(ModelError::UnknownContainerUri {
                    uri: uri.to_owned(),
                })
            })
    }

    /// The container's recorded range, provided its run still occupies it.
    ///
    /// Identical runs can appear at several positions, so runs are tracked
    /// by the index range recorded at query time rather than by content.
    /// A container from a stale query resolves to `None`.
    fn find_run(&self, container: &ModelContainer) -> Option<Range<usize>> {
        let range = container.range()?;
        (self.properties.get(range.clone()) == Some(container.properties())).then_some(range)
    }
}
