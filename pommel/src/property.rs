//! The `(uri, value)` pair abstraction over flattened documents.
//!
//! A flattened document is an ordered sequence of [`ModelProperty`] values.
//! Order is significant: containers are contiguous runs, and reassembly
//! walks the sequence front to back. Each property is write-once apart from
//! the resolved-value slot the interpolator fills in.

mod interpolator;

pub use interpolator::{InterpolatorProperty, PropertyTag};

use crate::uris;

/// One position/value pair in a flattened document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModelProperty {
    uri: String,
    value: Option<String>,
    resolved: Option<String>,
}

impl ModelProperty {
    /// Create a property; the resolved slot starts as a copy of the value.
    #[must_use]
    pub fn new(uri: impl Into<String>, value: Option<String>) -> Self {
        let resolved = value.clone();
        Self {
            uri: uri.into(),
            value,
            resolved,
        }
    }

    /// Schema position of this property.
    #[must_use]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Original, never-interpolated value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Interpolated value; equal to [`Self::value`] until resolution runs.
    #[must_use]
    pub fn resolved_value(&self) -> Option<&str> {
        self.resolved.as_deref()
    }

    /// Replace the resolved value outright.
    pub fn set_resolved_value(&mut self, value: Option<String>) {
        self.resolved = value;
    }

    /// Returns `true` once no `${...}` token remains in the resolved value.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved
            .as_deref()
            .is_none_or(|resolved| !resolved.contains("${"))
    }

    /// Substitute one interpolator property into the resolved value.
    ///
    /// Returns `true` when at least one occurrence of the key was replaced.
    pub fn resolve_with(&mut self, source: &InterpolatorProperty) -> bool {
        let Some(resolved) = self.resolved.as_ref() else {
            return false;
        };
        if !resolved.contains(source.key()) {
            return false;
        }
        self.resolved = Some(resolved.replace(source.key(), source.value()));
        true
    }

    /// Reflect this property as an interpolation source.
    ///
    /// The URI is rewritten to a dotted token relative to `base_uri`
    /// (`project/build/finalName` with an empty base becomes
    /// `${project.build.finalName}`). Marker-bearing URIs and unvalued
    /// properties reflect as nothing.
    #[must_use]
    pub fn as_interpolator_property(
        &self,
        base_uri: &str,
        tag: PropertyTag,
    ) -> Option<InterpolatorProperty> {
        if uris::has_marker(&self.uri) {
            return None;
        }
        let value = self.resolved.as_deref().or(self.value.as_deref())?;
        let relative = self
            .uri
            .strip_prefix(base_uri)
            .map_or(self.uri.as_str(), |rest| rest.trim_start_matches('/'));
        let key = format!("${{{}}}", relative.replace('/', "."));
        Some(InterpolatorProperty::new(key, value, tag))
    }

    /// Returns `true` when `other` sits directly beneath this property.
    #[must_use]
    pub fn is_parent_of(&self, other: &Self) -> bool {
        uris::parent(&other.uri) == Some(self.uri.as_str())
    }

    /// Number of path segments in the URI.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.uri.split('/').count()
    }

    /// URI of the enclosing position, or `None` at the base.
    #[must_use]
    pub fn parent_uri(&self) -> Option<&str> {
        uris::parent(&self.uri)
    }
}
