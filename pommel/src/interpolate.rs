//! Three-pass `${...}` token resolution.
//!
//! Pass one substitutes using caller bindings, standard `basedir`
//! bindings, bindings reflected from the first-pass properties, and user
//! `<properties>` entries. Pass two absolutizes build paths against a
//! concrete project directory. Pass three recomputes the source set from
//! every property, so tokens referencing build directories resolve to
//! their final absolute values. Unresolved tokens are left verbatim.

mod aliases;
mod concrete;
mod sources;

pub use concrete::{ConcreteSnapshot, calculate_concrete_state, restore_dynamic_state};

use camino::Utf8Path;

use crate::domain::DomainModel;
use crate::error::Problems;
use crate::property::{InterpolatorProperty, ModelProperty};

use aliases::AliasTable;

/// Bound on substitution rounds per pass; values may introduce new tokens.
const MAX_SUBSTITUTION_ROUNDS: usize = 16;

/// Resolve tokens across the merged property sequence in place.
///
/// Best effort by design: failures to build a source are recorded into
/// `problems` and substitution proceeds with the sources that remain.
pub fn interpolate(
    properties: &mut [ModelProperty],
    model: &DomainModel,
    caller: &[InterpolatorProperty],
    problems: &mut Problems,
) {
    let alias_version = !sources::caller_binds_project_version(caller);
    let aliases = match AliasTable::new(alias_version) {
        Ok(table) => Some(table),
        Err(error) => {
            problems.warn(format!("alias table failed to build: {error}"), None);
            None
        }
    };

    // Pass 1: sources reflected from the first-pass subset only.
    let first_pass: Vec<&ModelProperty> = properties
        .iter()
        .filter(|property| sources::is_first_pass(property))
        .collect();
    let pass_sources = sources::assemble(caller, model, &first_pass, aliases.as_ref());
    substitute(properties, &pass_sources);
    tracing::debug!(sources = pass_sources.len(), "first interpolation pass done");

    // Pass 2: absolutize second-pass values against a concrete directory.
    if let Some(directory) = model.project_directory() {
        absolutize(properties, directory);
    }

    // Pass 3: recompute sources from the full sequence and re-substitute.
    let all: Vec<&ModelProperty> = properties.iter().collect();
    let pass_sources = sources::assemble(caller, model, &all, aliases.as_ref());
    substitute(properties, &pass_sources);
    tracing::debug!(sources = pass_sources.len(), "final interpolation pass done");
}

/// Apply sorted sources repeatedly until the sequence is stable.
fn substitute(properties: &mut [ModelProperty], pass_sources: &[InterpolatorProperty]) {
    for _ in 0..MAX_SUBSTITUTION_ROUNDS {
        let mut changed = false;
        for property in properties.iter_mut() {
            if property.is_resolved() {
                continue;
            }
            for source in pass_sources {
                changed |= property.resolve_with(source);
            }
        }
        if !changed {
            break;
        }
    }
}

/// Rewrite token-free relative second-pass values as absolute paths.
fn absolutize(properties: &mut [ModelProperty], directory: &Utf8Path) {
    for property in properties.iter_mut() {
        if !sources::is_second_pass(property) {
            continue;
        }
        let Some(resolved) = property.resolved_value() else {
            continue;
        };
        if resolved.contains("${") || Utf8Path::new(resolved).is_absolute() {
            continue;
        }
        let absolute = directory.join(resolved).into_string();
        property.set_resolved_value(Some(absolute));
    }
}
