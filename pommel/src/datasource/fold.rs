//! Positional merge of property runs.

use crate::property::ModelProperty;
use crate::uris;

/// Merge an ancestor run into a child run.
///
/// The child run is kept verbatim. Ancestor properties are folded in when
/// their URI is absent from the result, or unconditionally when they are
/// members of a nested collection (the relative path below the container
/// boundary passes through a `#collection` marker). Each folded property
/// lands directly after the last property related to it, keeping subtrees
/// grouped.
pub(crate) fn merge_runs(
    child: &[ModelProperty],
    ancestor: &[ModelProperty],
) -> Vec<ModelProperty> {
    let Some(base) = child.first().map(|root| root.uri().to_owned()) else {
        return ancestor.to_vec();
    };
    let mut merged: Vec<ModelProperty> = child.to_vec();
    for property in ancestor {
        let relative = property.uri().strip_prefix(base.as_str()).unwrap_or("");
        let nested_member =
            relative.contains("#collection") && !relative.ends_with("#collection");
        if !nested_member && merged.iter().any(|known| known.uri() == property.uri()) {
            continue;
        }
        let at = find_insert_point(property, &merged);
        merged.insert(at, property.clone());
    }
    merged
}

/// Index just past the last property related to `incoming`: a property at
/// the same URI, one enclosing it, or one inside a same-URI sibling's
/// subtree. Keeps repeated collection members from landing inside each
/// other's runs.
pub(crate) fn find_insert_point(incoming: &ModelProperty, sequence: &[ModelProperty]) -> usize {
    for (index, known) in sequence.iter().enumerate().rev() {
        if uris::is_within(incoming.uri(), known.uri())
            || uris::is_within(known.uri(), incoming.uri())
        {
            return index + 1;
        }
    }
    sequence.len()
}
