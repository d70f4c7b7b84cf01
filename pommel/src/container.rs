//! Identity-bearing groupings of contiguous property runs.
//!
//! A container is one repeatable element (a plugin, a dependency, a
//! profile...) captured as the contiguous run of properties beneath its
//! boundary marker, together with an extracted identity. Two containers at
//! the same position compare via [`ModelContainer::merge_action`], which
//! drives the inheritance merge.

mod coordinate;
mod id;

pub use coordinate::CoordinateFactory;
pub use id::IdFactory;

use std::fmt;
use std::ops::Range;

use crate::ModelResult;
use crate::property::ModelProperty;

/// Outcome of comparing a child container against an ancestor container.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ContainerAction {
    /// Concatenate the runs, child values winning on URI collision.
    Join,
    /// Drop the ancestor's run entirely.
    Delete,
    /// Keep both runs; they describe unrelated entities.
    Nop,
}

/// How a container identifies itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) enum Identity {
    /// Artifact coordinate: plugins, dependencies, exclusions.
    Coordinate {
        group_id: String,
        artifact_id: String,
        version: Option<String>,
        kind: Option<String>,
    },
    /// The value of a child element literally named `id`, when present.
    Id(Option<String>),
}

/// An immutable run of properties plus its extracted identity.
///
/// Containers produced by a data-source query also carry the index range
/// their run occupied at query time; two containers with identical runs
/// stay distinguishable by position.
#[derive(Clone, Debug)]
pub struct ModelContainer {
    uri: String,
    properties: Vec<ModelProperty>,
    identity: Identity,
    range: Option<Range<usize>>,
}

impl ModelContainer {
    pub(crate) fn new(uri: String, properties: Vec<ModelProperty>, identity: Identity) -> Self {
        Self {
            uri,
            properties,
            identity,
            range: None,
        }
    }

    pub(crate) fn set_range(&mut self, range: Range<usize>) {
        self.range = Some(range);
    }

    pub(crate) fn range(&self) -> Option<Range<usize>> {
        self.range.clone()
    }

    /// URI of the container's boundary marker.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// The contiguous property run, boundary marker first.
    #[must_use]
    pub fn properties(&self) -> &[ModelProperty] {
        &self.properties
    }

    /// Decide how `other` (an ancestor-level container) merges into `self`.
    #[must_use]
    pub fn merge_action(&self, other: &Self) -> ContainerAction {
        match (&self.identity, &other.identity) {
            (
                Identity::Coordinate {
                    group_id,
                    artifact_id,
                    version,
                    kind,
                },
                Identity::Coordinate {
                    group_id: other_group,
                    artifact_id: other_artifact,
                    version: other_version,
                    kind: other_kind,
                },
            ) => {
                if group_id != other_group || artifact_id != other_artifact {
                    return ContainerAction::Nop;
                }
                match (version, other_version) {
                    (None, None) => ContainerAction::Join,
                    (Some(_), None) | (None, Some(_)) => ContainerAction::Delete,
                    (Some(mine), Some(theirs)) if mine == theirs => {
                        let mine = kind.as_deref().unwrap_or("jar");
                        let theirs = other_kind.as_deref().unwrap_or("jar");
                        if mine == theirs {
                            ContainerAction::Join
                        } else {
                            ContainerAction::Nop
                        }
                    }
                    (Some(_), Some(_)) => ContainerAction::Delete,
                }
            }
            (Identity::Id(Some(mine)), Identity::Id(Some(theirs))) if mine == theirs => {
                ContainerAction::Join
            }
            (Identity::Id(_), Identity::Id(_)) => ContainerAction::Nop,
            _ => ContainerAction::Nop,
        }
    }

    /// Value of the direct child field named `field`, when present.
    #[must_use]
    pub fn child_value(&self, field: &str) -> Option<&str> {
        let child_uri = format!("{}/{field}", self.uri);
        self.properties
            .iter()
            .find(|property| property.uri() == child_uri)
            .and_then(ModelProperty::value)
    }
}

/// Builds containers of one identity kind over the URIs it governs.
pub trait ContainerFactory: fmt::Debug {
    /// Container boundary URIs this factory is responsible for.
    fn uris(&self) -> &[&'static str];

    /// Build a container from a contiguous run, boundary marker first.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelError::Identity`] when the run is empty or the
    /// identity fields this factory requires are missing.
    fn create(&self, properties: Vec<ModelProperty>) -> ModelResult<ModelContainer>;
}

pub(crate) fn run_root(properties: &[ModelProperty]) -> Option<&ModelProperty> {
    properties.first()
}

pub(crate) fn direct_child_value<'a>(
    properties: &'a [ModelProperty],
    root_uri: &str,
    field: &str,
) -> Option<&'a str> {
    let child_uri = format!("{root_uri}/{field}");
    properties
        .iter()
        .find(|property| property.uri() == child_uri)
        .and_then(ModelProperty::value)
}

#[cfg(test)]
mod tests;
