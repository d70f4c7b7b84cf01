//! Concrete ⇄ dynamic build-path state.
//!
//! A concrete model carries absolute build paths bound to its project
//! directory; a dynamic model expresses them symbolically against
//! `${pom.basedir}` and `${pom.build.directory}` so it can be serialized
//! and reused outside the originating build tree. The two operations here
//! are inverses up to representation and each is idempotent.

use camino::{Utf8Path, Utf8PathBuf};

use crate::interpolate::sources::is_second_pass;
use crate::property::ModelProperty;
use crate::uris;

const BASEDIR_TOKENS: &[&str] = &["${pom.basedir}", "${project.basedir}", "${basedir}"];
const BUILD_DIRECTORY_TOKENS: &[&str] = &["${pom.build.directory}", "${project.build.directory}"];

/// Snapshot of the dynamic values taken when a model went concrete.
#[derive(Clone, Debug, Default)]
pub struct ConcreteSnapshot {
    entries: Vec<SnapshotEntry>,
}

#[derive(Clone, Debug)]
struct SnapshotEntry {
    uri: String,
    dynamic: String,
    concrete: String,
}

impl ConcreteSnapshot {
    /// Whether any build path was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Bind every build-path property to the project directory, returning the
/// snapshot needed to restore the dynamic form.
pub fn calculate_concrete_state(
    properties: &mut [ModelProperty],
    project_directory: &Utf8Path,
) -> ConcreteSnapshot {
    // The build directory aligns first; other paths may reference it.
    let mut snapshot = ConcreteSnapshot::default();
    align_one(properties, uris::build::DIRECTORY, project_directory, None, &mut snapshot);
    let build_directory = value_of(properties, uris::build::DIRECTORY).map(str::to_owned);

    let indices: Vec<usize> = properties
        .iter()
        .enumerate()
        .filter(|(_, property)| is_second_pass(property) && property.uri() != uris::build::DIRECTORY)
        .map(|(index, _)| index)
        .collect();
    for index in indices {
        let uri = properties[index].uri().to_owned();
        align_one(
            properties,
            &uri,
            project_directory,
            build_directory.as_deref(),
            &mut snapshot,
        );
    }
    snapshot
}

/// Restore the symbolic form captured by [`calculate_concrete_state`].
///
/// A value mutated while the model was concrete has no snapshot to return
/// to; it is rewritten against the directory prefixes instead, so edits
/// survive the round trip in symbolic form.
pub fn restore_dynamic_state(
    properties: &mut [ModelProperty],
    snapshot: &ConcreteSnapshot,
    project_directory: &Utf8Path,
) {
    let build_directory = value_of(properties, uris::build::DIRECTORY).map(str::to_owned);
    for entry in &snapshot.entries {
        let Some(property) = properties
            .iter_mut()
            .find(|property| property.uri() == entry.uri)
        else {
            continue;
        };
        let Some(current) = property.resolved_value() else {
            continue;
        };
        if current == entry.concrete {
            property.set_resolved_value(Some(entry.dynamic.clone()));
        } else {
            let symbolic = unalign(current, project_directory, build_directory.as_deref());
            property.set_resolved_value(Some(symbolic));
        }
    }
}

fn align_one(
    properties: &mut [ModelProperty],
    uri: &str,
    project_directory: &Utf8Path,
    build_directory: Option<&str>,
    snapshot: &mut ConcreteSnapshot,
) {
    let Some(property) = properties.iter_mut().find(|property| property.uri() == uri) else {
        return;
    };
    let Some(dynamic) = property.resolved_value().map(str::to_owned) else {
        return;
    };
    let concrete = align(&dynamic, project_directory, build_directory);
    property.set_resolved_value(Some(concrete.clone()));
    snapshot.entries.push(SnapshotEntry {
        uri: uri.to_owned(),
        dynamic,
        concrete,
    });
}

fn align(value: &str, project_directory: &Utf8Path, build_directory: Option<&str>) -> String {
    for token in BASEDIR_TOKENS {
        if let Some(rest) = value.strip_prefix(token) {
            return format!("{project_directory}{rest}");
        }
    }
    if let Some(build_directory) = build_directory {
        for token in BUILD_DIRECTORY_TOKENS {
            if let Some(rest) = value.strip_prefix(token) {
                return format!("{build_directory}{rest}");
            }
        }
    }
    if value.contains("${") || Utf8Path::new(value).is_absolute() {
        return value.to_owned();
    }
    Utf8PathBuf::from(project_directory).join(value).into_string()
}

fn unalign(value: &str, project_directory: &Utf8Path, build_directory: Option<&str>) -> String {
    if let Some(build_directory) = build_directory {
        if let Some(rest) = value.strip_prefix(build_directory) {
            return format!("${{pom.build.directory}}{rest}");
        }
    }
    if let Some(rest) = value.strip_prefix(project_directory.as_str()) {
        return format!("${{pom.basedir}}{rest}");
    }
    value.to_owned()
}

fn value_of<'a>(properties: &'a [ModelProperty], uri: &str) -> Option<&'a str> {
    properties
        .iter()
        .find(|property| property.uri() == uri)
        .and_then(ModelProperty::resolved_value)
}
