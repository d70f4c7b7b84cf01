//! Test fixtures shared across crates.
//!
//! This crate provides builders for project document fixtures used by the
//! inheritance and interpolation test suites. Documents are plain
//! [`serde_json::Value`] object graphs in the shape the `pommel` marshaller
//! expects; the builders keep tests free of hand-written JSON blobs.

use serde_json::{Map, Value, json};

/// Fluent builder for a project document fixture.
///
/// # Examples
///
/// ```
/// use pommel_test_helpers::ProjectDoc;
///
/// let doc = ProjectDoc::new("org.example", "app", "1.0")
///     .packaging("jar")
///     .scm_url("http://scm.example/app")
///     .build();
/// assert_eq!(doc["artifactId"], "app");
/// ```
#[derive(Debug, Clone)]
pub struct ProjectDoc {
    root: Map<String, Value>,
}

impl ProjectDoc {
    /// Start a document with the given coordinates.
    #[must_use]
    pub fn new(group_id: &str, artifact_id: &str, version: &str) -> Self {
        let mut root = Map::new();
        root.insert("modelVersion".into(), json!("4.0.0"));
        root.insert("groupId".into(), json!(group_id));
        root.insert("artifactId".into(), json!(artifact_id));
        root.insert("version".into(), json!(version));
        Self { root }
    }

    /// Start a document that omits `groupId` and `version`, as a module
    /// inheriting both from its parent would.
    #[must_use]
    pub fn child(artifact_id: &str) -> Self {
        let mut root = Map::new();
        root.insert("modelVersion".into(), json!("4.0.0"));
        root.insert("artifactId".into(), json!(artifact_id));
        Self { root }
    }

    /// Set the `parent` block.
    #[must_use]
    pub fn parent(mut self, group_id: &str, artifact_id: &str, version: &str) -> Self {
        self.root.insert(
            "parent".into(),
            json!({
                "groupId": group_id,
                "artifactId": artifact_id,
                "version": version,
            }),
        );
        self
    }

    /// Set an arbitrary top-level scalar field.
    #[must_use]
    pub fn field(mut self, name: &str, value: &str) -> Self {
        self.root.insert(name.into(), json!(value));
        self
    }

    /// Set the packaging.
    #[must_use]
    pub fn packaging(self, packaging: &str) -> Self {
        self.field("packaging", packaging)
    }

    /// Set `scm/url`.
    #[must_use]
    pub fn scm_url(mut self, url: &str) -> Self {
        self.scm_entry("url", url);
        self
    }

    /// Set `scm/connection`.
    #[must_use]
    pub fn scm_connection(mut self, connection: &str) -> Self {
        self.scm_entry("connection", connection);
        self
    }

    fn scm_entry(&mut self, key: &str, value: &str) {
        let scm = self
            .root
            .entry("scm")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = scm {
            map.insert(key.into(), json!(value));
        }
    }

    /// Set the module list.
    #[must_use]
    pub fn modules(mut self, modules: &[&str]) -> Self {
        self.root.insert("modules".into(), json!(modules));
        self
    }

    /// Add a `<properties>` entry.
    #[must_use]
    pub fn property(mut self, name: &str, value: &str) -> Self {
        let props = self
            .root
            .entry("properties")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = props {
            map.insert(name.into(), json!(value));
        }
        self
    }

    /// Add a dependency with an optional version.
    #[must_use]
    pub fn dependency(mut self, group_id: &str, artifact_id: &str, version: Option<&str>) -> Self {
        let mut dep = Map::new();
        dep.insert("groupId".into(), json!(group_id));
        dep.insert("artifactId".into(), json!(artifact_id));
        if let Some(v) = version {
            dep.insert("version".into(), json!(v));
        }
        push_item(&mut self.root, "dependencies", Value::Object(dep));
        self
    }

    /// Add a build plugin from a pre-assembled value.
    #[must_use]
    pub fn plugin(mut self, plugin: Value) -> Self {
        let build = self
            .root
            .entry("build")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = build {
            push_item(map, "plugins", plugin);
        }
        self
    }

    /// Set a field under `build`.
    #[must_use]
    pub fn build_field(mut self, name: &str, value: &str) -> Self {
        let build = self
            .root
            .entry("build")
            .or_insert_with(|| Value::Object(Map::new()));
        if let Value::Object(map) = build {
            map.insert(name.into(), json!(value));
        }
        self
    }

    /// Finish the builder, returning the document graph.
    #[must_use]
    pub fn build(self) -> Value {
        Value::Object(self.root)
    }

    /// Finish the builder, returning serialized document bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        serde_json::to_vec(&self.build()).unwrap_or_default()
    }
}

fn push_item(map: &mut Map<String, Value>, key: &str, item: Value) {
    let entry = map
        .entry(key)
        .or_insert_with(|| Value::Array(Vec::new()));
    if let Value::Array(items) = entry {
        items.push(item);
    }
}

/// Shorthand for a plugin value with an `inherited` flag.
#[must_use]
pub fn plugin_with_inherited(artifact_id: &str, version: &str, inherited: &str) -> Value {
    json!({
        "groupId": "org.apache.maven.plugins",
        "artifactId": artifact_id,
        "version": version,
        "inherited": inherited,
    })
}

/// Shorthand for a plugin value carrying a single execution.
#[must_use]
pub fn plugin_with_execution(artifact_id: &str, version: &str, execution: Value) -> Value {
    json!({
        "groupId": "org.apache.maven.plugins",
        "artifactId": artifact_id,
        "version": version,
        "executions": [execution],
    })
}

#[cfg(test)]
mod tests {
    use super::ProjectDoc;

    #[test]
    fn builder_produces_ordered_document() {
        let doc = ProjectDoc::new("g", "a", "1.0")
            .dependency("org.dep", "lib", Some("2.0"))
            .build();
        assert_eq!(doc["groupId"], "g");
        assert_eq!(doc["dependencies"][0]["artifactId"], "lib");
    }

    #[test]
    fn child_omits_coordinates() {
        let doc = ProjectDoc::child("sub").parent("g", "p", "1.0").build();
        assert!(doc.get("groupId").is_none());
        assert_eq!(doc["parent"]["groupId"], "g");
    }
}
