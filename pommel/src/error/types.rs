//! Primary error enum for model transformation flows.

use thiserror::Error;

/// Errors that can occur while flattening, merging, or interpolating a model.
///
/// The taxonomy follows the transformation pipeline: structural errors abort
/// the whole chain, identity errors surface when a container is queried, and
/// parse errors cover the document bytes themselves. Recoverable interpolation
/// failures are not errors; they accumulate as [`crate::Problems`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ModelError {
    /// The document cannot be flattened into a property sequence.
    #[error("structural error in model '{model_id}': {message}")]
    Structural {
        /// Identity of the offending model, `groupId:artifactId:version`.
        model_id: String,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// A container could not establish its required identity fields.
    #[error("identity error at '{uri}': {message}")]
    Identity {
        /// URI of the container that failed identification.
        uri: String,
        /// Human-readable explanation of the failure.
        message: String,
    },

    /// Raw document bytes failed to parse into a value graph.
    #[error("failed to parse model document: {source}")]
    Parse {
        /// Underlying deserialization error.
        #[source]
        source: Box<serde_json::Error>,
    },

    /// A queried container URI has no registered factory.
    #[error("no container factory registered for '{uri}'")]
    UnknownContainerUri {
        /// The unregistered URI.
        uri: String,
    },
}

impl ModelError {
    /// Construct a structural error for the given model identity.
    #[must_use]
    pub fn structural(model_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Structural {
            model_id: model_id.into(),
            message: message.into(),
        }
    }

    /// Construct an identity error for the given container URI.
    #[must_use]
    pub fn identity(uri: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Identity {
            uri: uri.into(),
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(source: serde_json::Error) -> Self {
        Self::Parse {
            source: Box::new(source),
        }
    }
}
