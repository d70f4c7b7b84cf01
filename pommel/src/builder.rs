//! Pipeline facade: inheritance chain in, effective model out.

use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::DomainModel;
use crate::error::{ModelError, Problems};
use crate::interpolate::{
    ConcreteSnapshot, calculate_concrete_state, interpolate, restore_dynamic_state,
};
use crate::marshal::assemble;
use crate::property::{InterpolatorProperty, ModelProperty};
use crate::transform::{FlattenCache, InheritanceTransformer};
use crate::ModelResult;

/// Builds effective models, sharing one flatten cache across builds.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    cache: Arc<FlattenCache>,
}

impl ModelBuilder {
    /// Create a builder with a fresh cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder sharing an existing cache, as sibling module
    /// builds do.
    #[must_use]
    pub fn with_cache(cache: Arc<FlattenCache>) -> Self {
        Self { cache }
    }

    /// Run transform and interpolation over a chain, most specialized
    /// model first.
    ///
    /// # Errors
    ///
    /// Fails on an empty chain and propagates structural, parse, and
    /// identity errors from the pipeline. Interpolation problems do not
    /// fail the build; they are carried on the returned model.
    pub fn build(
        &self,
        chain: &[DomainModel],
        caller: &[InterpolatorProperty],
    ) -> ModelResult<EffectiveModel> {
        let Some(project) = chain.first() else {
            return Err(Arc::new(ModelError::structural(
                "<none>",
                "inheritance chain is empty",
            )));
        };

        let transformer = InheritanceTransformer::new(Arc::clone(&self.cache));
        let mut properties = transformer.transform(chain)?;

        let mut problems = Problems::new();
        interpolate(&mut properties, project, caller, &mut problems);

        Ok(EffectiveModel {
            properties,
            problems,
            project_directory: project.project_directory().map(Utf8Path::to_path_buf),
            concrete: None,
        })
    }
}

/// The merged, interpolated build model for one project.
#[derive(Debug)]
pub struct EffectiveModel {
    properties: Vec<ModelProperty>,
    problems: Problems,
    project_directory: Option<Utf8PathBuf>,
    concrete: Option<(ConcreteSnapshot, Utf8PathBuf)>,
}

impl EffectiveModel {
    /// The final property sequence.
    #[must_use]
    pub fn properties(&self) -> &[ModelProperty] {
        &self.properties
    }

    /// Problems recovered during interpolation, in the order they arose.
    #[must_use]
    pub fn problems(&self) -> &Problems {
        &self.problems
    }

    /// The project directory the model was built against, when concrete.
    #[must_use]
    pub fn project_directory(&self) -> Option<&Utf8Path> {
        self.project_directory.as_deref()
    }

    /// Assemble the effective document graph from the resolved sequence.
    ///
    /// # Errors
    ///
    /// Propagates assembly failures on an inconsistent sequence.
    pub fn document(&self) -> ModelResult<Value> {
        assemble(&self.properties)
    }

    /// Deserialize the effective document into a typed representation.
    ///
    /// # Errors
    ///
    /// Propagates assembly failures and deserialization mismatches.
    pub fn extract<T: DeserializeOwned>(&self) -> ModelResult<T> {
        let document = self.document()?;
        serde_json::from_value(document).map_err(|source| Arc::new(ModelError::from(source)))
    }

    /// Whether build paths are currently bound to a directory.
    #[must_use]
    pub fn is_concrete(&self) -> bool {
        self.concrete.is_some()
    }

    /// Bind build paths to `directory`. Idempotent: a concrete model is
    /// left untouched.
    pub fn calculate_concrete_state(&mut self, directory: &Utf8Path) {
        if self.concrete.is_some() {
            return;
        }
        let snapshot = calculate_concrete_state(&mut self.properties, directory);
        self.concrete = Some((snapshot, directory.to_path_buf()));
    }

    /// Rewrite build paths back to their portable symbolic form.
    /// Idempotent: a dynamic model is left untouched.
    pub fn restore_dynamic_state(&mut self) {
        let Some((snapshot, directory)) = self.concrete.take() else {
            return;
        };
        restore_dynamic_state(&mut self.properties, &snapshot, &directory);
    }
}

#[cfg(test)]
mod tests;
