//! The domain model: one level of an inheritance chain.

use std::sync::{Arc, OnceLock};

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;

use crate::ModelResult;
use crate::error::ModelError;

/// One document in an inheritance chain, with identity and base-directory
/// context.
///
/// The raw bytes are immutable after construction; the value graph is
/// parsed on first use. A model carrying a project directory is *concrete*
/// (bound to a build tree); one without is *dynamic* (portable).
#[derive(Debug)]
pub struct DomainModel {
    bytes: Vec<u8>,
    document: OnceLock<ModelResult<Value>>,
    project_directory: Option<Utf8PathBuf>,
}

impl DomainModel {
    /// Wrap raw document bytes; parsing is deferred until first access.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            document: OnceLock::new(),
            project_directory: None,
        }
    }

    /// Wrap an already-parsed document graph.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] when the graph cannot be serialized
    /// back to bytes.
    pub fn from_document(document: Value) -> ModelResult<Self> {
        let bytes = serde_json::to_vec(&document)
            .map_err(|source| Arc::new(ModelError::from(source)))?;
        let cell = OnceLock::new();
        let _ = cell.set(Ok(document));
        Ok(Self {
            bytes,
            document: cell,
            project_directory: None,
        })
    }

    /// Attach the project base directory, marking the model concrete.
    #[must_use]
    pub fn with_project_directory(mut self, directory: Utf8PathBuf) -> Self {
        self.project_directory = Some(directory);
        self
    }

    /// The raw document bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The parsed document graph.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Parse`] when the bytes are not a valid
    /// document; the same error is returned on every subsequent call.
    pub fn document(&self) -> ModelResult<&Value> {
        let parsed = self
            .document
            .get_or_init(|| serde_json::from_slice(&self.bytes).map_err(|source| Arc::new(ModelError::from(source))));
        match parsed {
            Ok(document) => Ok(document),
            Err(error) => Err(Arc::clone(error)),
        }
    }

    /// Identity as `groupId:artifactId:version`.
    ///
    /// `groupId` and `version` fall back to the `parent` declaration when
    /// the level omits them; a field with no value anywhere is rendered
    /// empty.
    ///
    /// # Errors
    ///
    /// Propagates the parse error when the document is malformed.
    pub fn id(&self) -> ModelResult<String> {
        let document = self.document()?;
        let field = |name: &str| -> &str {
            document
                .get(name)
                .and_then(Value::as_str)
                .or_else(|| {
                    document
                        .get("parent")
                        .and_then(|parent| parent.get(name))
                        .and_then(Value::as_str)
                })
                .unwrap_or("")
        };
        Ok(format!(
            "{}:{}:{}",
            field("groupId"),
            document.get("artifactId").and_then(Value::as_str).unwrap_or(""),
            field("version"),
        ))
    }

    /// The project base directory, when the model is concrete.
    #[must_use]
    pub fn project_directory(&self) -> Option<&Utf8Path> {
        self.project_directory.as_deref()
    }

    /// Whether build paths may be bound to a real directory.
    #[must_use]
    pub fn is_concrete(&self) -> bool {
        self.project_directory.is_some()
    }
}
