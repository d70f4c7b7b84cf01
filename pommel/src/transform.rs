//! Inheritance transformer: reduces a chain of domain models to one merged
//! property sequence.
//!
//! The chain is ordered most specialized first (index 0 is the project
//! being built). Each level is flattened, filtered by the inheritance
//! rules, and appended; the concatenated sequence is then deduplicated
//! (child first, so child values win) and registered containers are merged
//! pairwise by their factories' actions.

mod cache;
mod rules;

pub use cache::FlattenCache;

use std::collections::HashMap;
use std::sync::Arc;

use crate::container::ContainerAction;
use crate::datasource::DataSource;
use crate::domain::DomainModel;
use crate::marshal::flatten;
use crate::property::ModelProperty;
use crate::{ModelResult, uris};

/// Merges an inheritance chain into the raw (pre-interpolation) effective
/// property sequence.
#[derive(Debug)]
pub struct InheritanceTransformer {
    cache: Arc<FlattenCache>,
}

impl InheritanceTransformer {
    /// Create a transformer backed by the given flatten cache.
    #[must_use]
    pub fn new(cache: Arc<FlattenCache>) -> Self {
        Self { cache }
    }

    /// Transform the chain, most specialized model first.
    ///
    /// # Errors
    ///
    /// Structural and parse errors abort the whole transformation; identity
    /// errors surface when the container merge phase queries a container
    /// that cannot identify itself.
    pub fn transform(&self, chain: &[DomainModel]) -> ModelResult<Vec<ModelProperty>> {
        let mut merged: Vec<ModelProperty> = Vec::new();
        // Artifact ids of visited levels, most recent first; drives URL
        // composition across levels.
        let mut segments: Vec<String> = Vec::new();
        let mut fixed_urls: HashMap<&'static str, String> = HashMap::new();
        let mut sections_seen: Vec<&'static str> = Vec::new();

        for (index, model) in chain.iter().enumerate() {
            let id = model.id()?;
            // Cached entries hold the ancestor-filtered form, so the cache
            // only serves ancestor levels.
            let cached = if index > 0 { self.cache.get(&id) } else { None };
            let mut level = if let Some(cached) = cached {
                tracing::debug!(model = %id, "reusing cached level");
                cached.as_ref().clone()
            } else {
                let level = process_level(model, &id, index, &mut fixed_urls, &segments)?;
                if index > 0 {
                    self.cache.insert_if_absent(id.clone(), level.clone());
                }
                level
            };
            if index > 0 {
                // Singleton sections are inherited only when no more
                // specialized level defined them.
                for &section in &sections_seen {
                    rules::strip_within(&mut level, section);
                }
            }
            note_sections(&level, &mut sections_seen);
            segments.insert(0, artifact_id_of(&level));
            merged.extend(level);
        }

        tracing::debug!(levels = chain.len(), "merging concatenated sequence");
        let sorted = rules::sort(&merged);
        merge_containers(sorted)
    }
}

/// Steps applied to a freshly flattened level before it is appended.
fn process_level(
    model: &DomainModel,
    id: &str,
    index: usize,
    fixed_urls: &mut HashMap<&'static str, String>,
    segments: &[String],
) -> ModelResult<Vec<ModelProperty>> {
    let document = model.document()?;
    let mut level = flatten(id, document)?;

    rules::synthesize_missing(&mut level, uris::VERSION, uris::parent::VERSION);
    rules::synthesize_missing(&mut level, uris::GROUP_ID, uris::parent::GROUP_ID);

    if index > 0 {
        // Ancestor module lists never leak into a descendant's model.
        rules::strip_within(&mut level, uris::MODULES);
        level = rules::strip_uninherited(level, rules::EXECUTION_URIS)?;
        level = rules::strip_uninherited(level, rules::PLUGIN_URIS)?;
    }

    rules::compose_urls(&mut level, fixed_urls, segments);

    if index > 0 {
        for &base in rules::NEVER_INHERITED {
            rules::strip_within(&mut level, base);
        }
    }
    Ok(level)
}

/// Apply factory merge actions pairwise, child container against later
/// ancestor container, until the sequence is stable.
fn merge_containers(properties: Vec<ModelProperty>) -> ModelResult<Vec<ModelProperty>> {
    let mut source = DataSource::new(properties, rules::factories());
    let boundary_uris: Vec<&'static str> = rules::factories()
        .iter()
        .flat_map(|factory| factory.uris().to_vec())
        .collect();

    for uri in boundary_uris {
        'merge: loop {
            let containers = source.query_for(uri)?;
            for child_index in 0..containers.len() {
                for ancestor_index in child_index + 1..containers.len() {
                    let child = &containers[child_index];
                    let ancestor = &containers[ancestor_index];
                    match child.merge_action(ancestor) {
                        ContainerAction::Join => {
                            source.join(child, ancestor)?;
                            continue 'merge;
                        }
                        ContainerAction::Delete => {
                            source.delete(ancestor);
                            continue 'merge;
                        }
                        ContainerAction::Nop => {}
                    }
                }
            }
            break;
        }
    }
    Ok(source.into_properties())
}

fn artifact_id_of(level: &[ModelProperty]) -> String {
    rules::value_of(level, uris::ARTIFACT_ID)
        .unwrap_or_default()
        .to_owned()
}

fn note_sections(level: &[ModelProperty], sections_seen: &mut Vec<&'static str>) {
    for &section in rules::SINGLETON_SECTIONS {
        if !sections_seen.contains(&section)
            && level
                .iter()
                .any(|property| uris::is_within(property.uri(), section))
        {
            sections_seen.push(section);
        }
    }
}

#[cfg(test)]
mod tests;
