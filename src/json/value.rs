use indexmap::IndexMap;
use std::fmt;

/// Ordered key/value storage backing [`JsonValue::Object`].
///
/// Iteration order is insertion order. Inserting an existing key replaces
/// the value but keeps the key's original position (last write wins).
pub type JsonMap = IndexMap<String, JsonValue>;

/// Numeric payload of a [`JsonValue::Number`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JsonNumber {
    Int(i64),
    Float(f64),
}

impl fmt::Display for JsonNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JsonNumber::Int(n) => write!(f, "{n}"),
            JsonNumber::Float(n) => write!(f, "{n}"),
        }
    }
}

/// A JSON document value.
///
/// Values own their children exclusively, so a document is always a finite
/// tree. Equality is structural: arrays compare order-sensitively, objects
/// compare as maps regardless of insertion order, `Null` equals only
/// itself.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonValue {
    String(String),
    Number(JsonNumber),
    Bool(bool),
    Null,
    Array(Vec<JsonValue>),
    Object(JsonMap),
}

impl JsonValue {
    /// Builds an array value from `items`.
    pub fn array<I>(items: I) -> Self
    where
        I: IntoIterator<Item = JsonValue>,
    {
        JsonValue::Array(items.into_iter().collect())
    }

    /// Builds an object value from `pairs`.
    ///
    /// A key occurring more than once keeps its first position and the last
    /// value written for it.
    pub fn object<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, JsonValue)>,
    {
        let mut map = JsonMap::new();
        for (key, value) in pairs {
            map.insert(key, value);
        }
        JsonValue::Object(map)
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Serializes the value to its canonical JSON text.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        let mut out = String::new();
        self.write_json(&mut out);
        out
    }

    fn write_json(&self, out: &mut String) {
        match self {
            JsonValue::String(s) => {
                out.push('"');
                escape_into(s, out);
                out.push('"');
            }
            JsonValue::Number(n) => out.push_str(&n.to_string()),
            JsonValue::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            JsonValue::Null => out.push_str("null"),
            JsonValue::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    item.write_json(out);
                }
                out.push(']');
            }
            JsonValue::Object(map) => {
                out.push('{');
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    out.push('"');
                    escape_into(key, out);
                    out.push_str("\":");
                    value.write_json(out);
                }
                out.push('}');
            }
        }
    }

    /// Applies `transform` to every element of an array value.
    ///
    /// Returns `None` when the value is not an array.
    pub fn map_array<F>(&self, transform: F) -> Option<JsonValue>
    where
        F: FnMut(&JsonValue) -> JsonValue,
    {
        match self {
            JsonValue::Array(items) => Some(JsonValue::Array(items.iter().map(transform).collect())),
            _ => None,
        }
    }

    /// Keeps the array elements matching `predicate`.
    ///
    /// Returns `None` when the value is not an array.
    pub fn filter_array<F>(&self, mut predicate: F) -> Option<JsonValue>
    where
        F: FnMut(&JsonValue) -> bool,
    {
        match self {
            JsonValue::Array(items) => Some(JsonValue::Array(
                items.iter().filter(|item| predicate(item)).cloned().collect(),
            )),
            _ => None,
        }
    }

    /// Keeps the object properties matching `predicate`.
    ///
    /// Returns `None` when the value is not an object.
    pub fn filter_object<F>(&self, mut predicate: F) -> Option<JsonValue>
    where
        F: FnMut(&str, &JsonValue) -> bool,
    {
        match self {
            JsonValue::Object(map) => Some(JsonValue::Object(
                map.iter()
                    .filter(|(key, value)| predicate(key, value))
                    .map(|(key, value)| (key.clone(), value.clone()))
                    .collect(),
            )),
            _ => None,
        }
    }
}

impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}

/// Escapes `s` for inclusion in a JSON string literal.
///
/// Only the seven short escape forms are produced; every other character,
/// control or not, passes through unchanged.
#[must_use]
pub fn escape_json(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    escape_into(s, &mut out);
    out
}

fn escape_into(s: &str, out: &mut String) {
    for ch in s.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000C}' => out.push_str("\\f"),
            _ => out.push(ch),
        }
    }
}
