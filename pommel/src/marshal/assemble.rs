//! Ordered property sequence back to a document graph.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::ModelError;
use crate::property::ModelProperty;
use crate::{ModelResult, uris};

/// Rebuild a document graph from an ordered property sequence.
///
/// Resolved values are used, so assembling after interpolation yields the
/// effective document. Collection markers become arrays, member markers
/// open a new array element, and `#property` entries become `@`-prefixed
/// attribute keys on their element.
///
/// # Errors
///
/// [`ModelError::Structural`] when the sequence is inconsistent, e.g. a
/// member property arrives before its collection opened.
pub fn assemble(properties: &[ModelProperty]) -> ModelResult<Value> {
    let mut root = Value::Object(Map::new());
    for property in properties {
        if property.uri() == uris::BASE {
            continue;
        }
        insert(&mut root, property)?;
    }
    Ok(root)
}

fn insert(root: &mut Value, property: &ModelProperty) -> ModelResult<()> {
    let uri = property.uri();
    let text = property.resolved_value().map(str::to_owned);

    if let Some((element_uri, attribute)) = uri.split_once("#property/") {
        let element = navigate(root, element_uri, uri)?;
        let map = as_object(element, uri)?;
        map.insert(
            format!("@{attribute}"),
            text.map_or(Value::Null, Value::String),
        );
        return Ok(());
    }

    if uri.ends_with("#collection") {
        // Marker; navigation materializes the array.
        navigate(root, uri, uri)?;
        return Ok(());
    }

    let Some((parent_uri, name)) = uri.rsplit_once('/') else {
        return Err(misplaced(uri));
    };

    if parent_uri.ends_with("#collection") {
        let collection = navigate(root, parent_uri, uri)?;
        let Some(array) = collection.as_array_mut() else {
            return Err(misplaced(uri));
        };
        match text {
            Some(text) => array.push(Value::String(text)),
            None => array.push(Value::Object(Map::new())),
        }
        return Ok(());
    }

    let parent = navigate(root, parent_uri, uri)?;
    let map = as_object(parent, uri)?;
    match text {
        Some(text) => {
            map.insert(name.to_owned(), Value::String(text));
        }
        None => {
            map.entry(name.to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
        }
    }
    Ok(())
}

/// Walk to the node at `uri`, creating intermediate objects and arrays.
/// Collection segments step into the most recently opened member.
fn navigate<'a>(root: &'a mut Value, uri: &str, context: &str) -> ModelResult<&'a mut Value> {
    let segments: Vec<&str> = uri.split('/').collect();
    let mut current = root;
    let mut index = 1;
    while index < segments.len() {
        let segment = segments[index];
        if let Some(name) = segment.strip_suffix("#collection") {
            let map = as_object(current, context)?;
            let node = map
                .entry(name.to_owned())
                .or_insert_with(|| Value::Array(Vec::new()));
            if index + 1 >= segments.len() {
                return Ok(node);
            }
            let Some(array) = node.as_array_mut() else {
                return Err(misplaced(context));
            };
            let Some(member) = array.last_mut() else {
                return Err(misplaced(context));
            };
            current = member;
            index += 2;
        } else {
            let map = as_object(current, context)?;
            current = map
                .entry(segment.to_owned())
                .or_insert_with(|| Value::Object(Map::new()));
            index += 1;
        }
    }
    Ok(current)
}

fn as_object<'a>(value: &'a mut Value, context: &str) -> ModelResult<&'a mut Map<String, Value>> {
    value.as_object_mut().ok_or_else(|| misplaced(context))
}

fn misplaced(uri: &str) -> Arc<ModelError> {
    Arc::new(ModelError::structural(
        "effective-model",
        format!("property '{uri}' cannot be placed in the document graph"),
    ))
}
