//! Document graph to ordered property sequence.

use std::sync::Arc;

use serde_json::Value;

use crate::error::ModelError;
use crate::property::ModelProperty;
use crate::{ModelResult, uris};

/// Flatten a document into its ordered property sequence.
///
/// Emits one marker property per element node and one valued property per
/// scalar leaf, in document order. Arrays are only legal at whitelisted
/// collection positions; an object at such a position flattens as a
/// single-member collection.
///
/// # Errors
///
/// [`ModelError::Structural`] when the root is not an object, an array
/// appears at a non-whitelisted position, or a collection position holds a
/// scalar.
pub fn flatten(model_id: &str, document: &Value) -> ModelResult<Vec<ModelProperty>> {
    let Some(root) = document.as_object() else {
        return Err(structural(model_id, "document root is not an object"));
    };
    let mut properties = vec![ModelProperty::new(uris::BASE, None)];
    flatten_object(model_id, uris::BASE, root, &mut properties)?;
    Ok(properties)
}

fn flatten_object(
    model_id: &str,
    parent_uri: &str,
    object: &serde_json::Map<String, Value>,
    out: &mut Vec<ModelProperty>,
) -> ModelResult<()> {
    for (key, value) in object {
        if let Some(attribute) = key.strip_prefix('@') {
            let uri = format!("{parent_uri}#property/{attribute}");
            out.push(ModelProperty::new(uri, scalar_text(value)));
            continue;
        }
        let collection_uri = format!("{parent_uri}/{key}#collection");
        if let Some(item_tag) = uris::collection_item(&collection_uri) {
            flatten_collection(model_id, &collection_uri, item_tag, value, out)?;
            continue;
        }
        let uri = format!("{parent_uri}/{key}");
        match value {
            Value::Object(child) => {
                out.push(ModelProperty::new(uri.clone(), None));
                flatten_object(model_id, &uri, child, out)?;
            }
            Value::Array(_) => {
                return Err(structural(
                    model_id,
                    format!("'{uri}' is not a collection position but holds an array"),
                ));
            }
            scalar => out.push(ModelProperty::new(uri, scalar_text(scalar))),
        }
    }
    Ok(())
}

fn flatten_collection(
    model_id: &str,
    collection_uri: &str,
    item_tag: &str,
    value: &Value,
    out: &mut Vec<ModelProperty>,
) -> ModelResult<()> {
    out.push(ModelProperty::new(collection_uri, None));
    let item_uri = format!("{collection_uri}/{item_tag}");
    let members: &[Value] = match value {
        Value::Array(members) => members,
        Value::Object(_) => std::slice::from_ref(value),
        _ => {
            return Err(structural(
                model_id,
                format!("collection '{collection_uri}' holds a scalar"),
            ));
        }
    };
    for member in members {
        match member {
            Value::Object(child) => {
                out.push(ModelProperty::new(item_uri.clone(), None));
                flatten_object(model_id, &item_uri, child, out)?;
            }
            Value::Array(_) => {
                return Err(structural(
                    model_id,
                    format!("collection '{collection_uri}' holds a nested array"),
                ));
            }
            scalar => out.push(ModelProperty::new(item_uri.clone(), scalar_text(scalar))),
        }
    }
    Ok(())
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

fn structural(model_id: &str, message: impl Into<String>) -> Arc<ModelError> {
    Arc::new(ModelError::structural(model_id, message))
}
