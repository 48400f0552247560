use super::value::JsonValue;
use std::collections::HashSet;
use std::mem::discriminant;

/// Checks a document for structural validity.
///
/// Primitives and `null` are always valid. An array is valid when every
/// element is. An object is valid when no key is blank, keys are unique
/// within the object, every value is valid, and the same object instance is
/// not encountered twice in one pass (identity comparison, guarding against
/// aliased or cyclic structures). The property scan of an object stops at
/// its first violation.
#[must_use]
pub fn is_valid(value: &JsonValue) -> bool {
    let mut visited: HashSet<*const JsonValue> = HashSet::new();
    validate(value, &mut visited)
}

fn validate(value: &JsonValue, visited: &mut HashSet<*const JsonValue>) -> bool {
    match value {
        JsonValue::String(_) | JsonValue::Number(_) | JsonValue::Bool(_) | JsonValue::Null => true,
        JsonValue::Array(items) => items.iter().all(|item| validate(item, visited)),
        JsonValue::Object(map) => {
            if !visited.insert(value as *const JsonValue) {
                return false;
            }
            let mut seen_keys: HashSet<&str> = HashSet::with_capacity(map.len());
            for (key, child) in map {
                if key.trim().is_empty() || !seen_keys.insert(key.as_str()) {
                    return false;
                }
                if !validate(child, visited) {
                    return false;
                }
            }
            true
        }
    }
}

/// Checks that every array in the document holds elements of one variant.
///
/// An empty array passes. A non-empty array passes only when each element
/// carries the same variant tag as the first and no element is `null`
/// (`null` is never an accepted element type). Elements themselves are not
/// descended into; object property values are checked recursively.
#[must_use]
pub fn arrays_uniform(value: &JsonValue) -> bool {
    match value {
        JsonValue::Array(items) => uniform_elements(items),
        JsonValue::Object(map) => map.values().all(arrays_uniform),
        _ => true,
    }
}

fn uniform_elements(items: &[JsonValue]) -> bool {
    let Some(first) = items.first() else {
        return true;
    };
    items
        .iter()
        .all(|item| discriminant(item) == discriminant(first) && !item.is_null())
}
