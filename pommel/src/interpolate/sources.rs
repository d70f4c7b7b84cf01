//! Assembly of the interpolation source set for one pass.

use crate::domain::DomainModel;
use crate::interpolate::aliases::AliasTable;
use crate::property::{InterpolatorProperty, ModelProperty, PropertyTag};
use crate::uris;

const USER_PROPERTY_PREFIX: &str = "project/properties/";

/// Build the sorted source set for one substitution pass.
///
/// Order of assembly: caller-supplied bindings, standard `basedir`
/// bindings (concrete models only), bindings reflected from `reflect`,
/// then user `<properties>` entries. The final stable sort by tag makes
/// caller sources win while preserving first-writer order within a tag.
pub(crate) fn assemble(
    caller: &[InterpolatorProperty],
    model: &DomainModel,
    reflect: &[&ModelProperty],
    aliases: Option<&AliasTable>,
) -> Vec<InterpolatorProperty> {
    let mut sources: Vec<InterpolatorProperty> = caller.to_vec();
    sources.extend(standard(model));

    for property in reflect {
        let Some(binding) = property.as_interpolator_property("", PropertyTag::ProjectProperties)
        else {
            continue;
        };
        if let Some(aliases) = aliases {
            sources.extend(aliases.expand(&binding));
        }
        sources.push(binding);
    }

    sources.extend(user_properties(reflect));
    sources.sort_by_key(InterpolatorProperty::tag);
    sources
}

/// `${basedir}` bindings, emitted only for concrete models.
fn standard(model: &DomainModel) -> Vec<InterpolatorProperty> {
    let Some(directory) = model.project_directory() else {
        return Vec::new();
    };
    ["${basedir}", "${project.basedir}", "${pom.basedir}"]
        .into_iter()
        .map(|key| {
            InterpolatorProperty::new(key, directory.as_str(), PropertyTag::ExecutionProperties)
        })
        .collect()
}

/// Every user `<properties>` entry exposed as `${name}`.
fn user_properties(reflect: &[&ModelProperty]) -> Vec<InterpolatorProperty> {
    reflect
        .iter()
        .filter_map(|property| {
            let name = property.uri().strip_prefix(USER_PROPERTY_PREFIX)?;
            if name.contains('/') {
                return None;
            }
            let value = property.resolved_value().or(property.value())?;
            Some(InterpolatorProperty::new(
                format!("${{{name}}}"),
                value,
                PropertyTag::ProjectProperties,
            ))
        })
        .collect()
}

/// Whether the caller already binds `project.version`, which disables the
/// conditional version aliasing.
pub(crate) fn caller_binds_project_version(caller: &[InterpolatorProperty]) -> bool {
    caller
        .iter()
        .any(|binding| binding.key() == "${project.version}")
}

/// Partition test: first-pass properties feed the reflected source set of
/// the first substitution round.
pub(crate) fn is_first_pass(property: &ModelProperty) -> bool {
    property.value().is_some()
        && !uris::has_marker(property.uri())
        && (!uris::is_within(property.uri(), uris::build::X_URI)
            || property.uri() == uris::build::FINAL_NAME)
        && property.uri() != uris::reporting::OUTPUT_DIRECTORY
}

/// Second-pass properties: build-path positions absolutized between the
/// first and final substitution rounds.
pub(crate) fn is_second_pass(property: &ModelProperty) -> bool {
    property.value().is_some() && !uris::has_marker(property.uri()) && !is_first_pass(property)
}
