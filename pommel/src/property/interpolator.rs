//! Interpolation sources and their priority tags.

/// Which kind of source supplied an interpolation binding.
///
/// Variants are ordered by priority: an earlier tag outranks a later one
/// when two sources bind the same token. Within a tag, the first binding
/// supplied wins (sorting is stable and substitution consumes tokens).
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum PropertyTag {
    /// Caller-supplied system properties; highest priority.
    SystemProperties,
    /// Caller-supplied execution properties and standard bindings.
    ExecutionProperties,
    /// Bindings reflected from the project document itself.
    ProjectProperties,
}

/// One `${token}` binding available during interpolation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterpolatorProperty {
    key: String,
    value: String,
    tag: PropertyTag,
}

impl InterpolatorProperty {
    /// Create a binding; `key` carries the full `${...}` form.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>, tag: PropertyTag) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            tag,
        }
    }

    /// The token this binding resolves, `${...}` delimiters included.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Replacement text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Priority classification of the source.
    #[must_use]
    pub const fn tag(&self) -> PropertyTag {
        self.tag
    }

    /// Rewrite the key in place, keeping value and tag.
    pub(crate) fn set_key(&mut self, key: String) {
        self.key = key;
    }
}
