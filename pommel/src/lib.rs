//! Effective build model engine for POM-style inheritance chains.
//!
//! A project description is a chain of documents: the project itself plus
//! its ancestors, most specialized first. This crate flattens each level
//! into a URI-keyed property sequence, merges the levels under the
//! inheritance rules, resolves `${...}` tokens in three ordered passes,
//! and assembles the result back into a document graph.
//!
//! The usual entry point is [`ModelBuilder`]:
//!
//! ```rust
//! use pommel::{DomainModel, ModelBuilder};
//! # fn main() -> pommel::ModelResult<()> {
//! let project = DomainModel::from_bytes(
//!     br#"{"modelVersion":"4.0.0","groupId":"g","artifactId":"app","version":"1.0"}"#.to_vec(),
//! );
//! let effective = ModelBuilder::new().build(&[project], &[])?;
//! assert!(effective.problems().is_empty());
//! # Ok(())
//! # }
//! ```

mod builder;
pub mod collab;
mod container;
mod datasource;
mod domain;
mod error;
mod interpolate;
mod marshal;
mod property;
mod transform;
pub mod uris;

pub use builder::{EffectiveModel, ModelBuilder};
pub use container::{
    ContainerAction, ContainerFactory, CoordinateFactory, IdFactory, ModelContainer,
};
pub use datasource::DataSource;
pub use domain::DomainModel;
pub use error::{ModelError, ModelResult, Problem, Problems, Severity};
pub use interpolate::{
    ConcreteSnapshot, calculate_concrete_state, interpolate, restore_dynamic_state,
};
pub use marshal::{assemble, flatten};
pub use property::{InterpolatorProperty, ModelProperty, PropertyTag};
pub use transform::{FlattenCache, InheritanceTransformer};
