//! Contracts for external collaborators.
//!
//! The engine stops at the effective model; resolving its dependencies
//! against repositories and classifying resolved artifacts for compilation
//! are supplied by embedders through these traits.

use camino::Utf8Path;
use thiserror::Error;

/// A resolvable artifact coordinate from the effective model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Coordinate {
    /// Group identifier.
    pub group_id: String,
    /// Artifact identifier.
    pub artifact_id: String,
    /// Resolved version.
    pub version: String,
    /// Artifact type, `jar` when unspecified.
    pub kind: Option<String>,
}

/// One node of a resolved dependency tree.
#[derive(Clone, Debug)]
pub struct DependencyNode {
    /// The coordinate this node resolves.
    pub coordinate: Coordinate,
    /// Transitive dependencies, conflict-resolved by the resolver.
    pub children: Vec<DependencyNode>,
}

/// Failure to resolve a coordinate set against the configured repositories.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// A coordinate is not present in any repository.
    #[error("artifact '{group_id}:{artifact_id}:{version}' was not found")]
    NotFound {
        /// Group identifier of the missing artifact.
        group_id: String,
        /// Artifact identifier of the missing artifact.
        artifact_id: String,
        /// Requested version.
        version: String,
    },
    /// Conflict resolution could not produce a single tree.
    #[error("dependency conflict: {message}")]
    Conflict {
        /// Human-readable explanation of the conflict.
        message: String,
    },
}

/// Resolves a coordinate set into a conflict-resolved dependency tree.
pub trait RepositoryResolver {
    /// Resolve `roots` and their transitive closure.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] when any coordinate cannot be resolved or
    /// conflicts cannot be reconciled.
    fn resolve(&self, roots: &[Coordinate]) -> Result<DependencyNode, ResolveError>;
}

/// How a resolved artifact participates in compilation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PathKind {
    /// Placed on the module path.
    Modular,
    /// Placed on the class path.
    Classpath,
}

/// Classifies a jar or output directory for path partitioning.
pub trait PathClassifier {
    /// Classify the artifact at `path`.
    fn classify(&self, path: &Utf8Path) -> PathKind;
}
