use super::value::{JsonMap, JsonNumber, JsonValue};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

/// Conversion from an application value into a [`JsonValue`] document.
///
/// Implementations exist for primitives, strings, `Option`, sequences and
/// string-keyed maps; plain records and unit enums derive the trait through
/// `#[derive(ToJson)]`. The set of implementations is the supported input
/// domain - anything outside it fails to compile rather than at dispatch
/// time.
pub trait ToJson {
    fn to_json(&self) -> JsonValue;
}

impl ToJson for JsonValue {
    fn to_json(&self) -> JsonValue {
        self.clone()
    }
}

impl<T: ToJson + ?Sized> ToJson for &T {
    fn to_json(&self) -> JsonValue {
        (**self).to_json()
    }
}

/// A unit return serializes as an empty string body.
impl ToJson for () {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(String::new())
    }
}

impl ToJson for bool {
    fn to_json(&self) -> JsonValue {
        JsonValue::Bool(*self)
    }
}

macro_rules! int_to_json {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToJson for $ty {
                fn to_json(&self) -> JsonValue {
                    JsonValue::Number(JsonNumber::Int(i64::from(*self)))
                }
            }
        )*
    };
}

int_to_json!(i8, i16, i32, i64, u8, u16, u32);

impl ToJson for f32 {
    fn to_json(&self) -> JsonValue {
        JsonValue::Number(JsonNumber::Float(f64::from(*self)))
    }
}

impl ToJson for f64 {
    fn to_json(&self) -> JsonValue {
        JsonValue::Number(JsonNumber::Float(*self))
    }
}

impl ToJson for str {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.to_string())
    }
}

impl ToJson for String {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl ToJson for Cow<'_, str> {
    fn to_json(&self) -> JsonValue {
        JsonValue::String(self.clone().into_owned())
    }
}

impl<T: ToJson> ToJson for Option<T> {
    fn to_json(&self) -> JsonValue {
        match self {
            Some(value) => value.to_json(),
            None => JsonValue::Null,
        }
    }
}

impl<T: ToJson> ToJson for [T] {
    fn to_json(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(ToJson::to_json).collect())
    }
}

impl<T: ToJson> ToJson for Vec<T> {
    fn to_json(&self) -> JsonValue {
        self.as_slice().to_json()
    }
}

impl<T: ToJson, const N: usize> ToJson for [T; N] {
    fn to_json(&self) -> JsonValue {
        self.as_slice().to_json()
    }
}

impl<T: ToJson> ToJson for HashMap<String, T> {
    fn to_json(&self) -> JsonValue {
        JsonValue::Object(collect_map(self.iter()))
    }
}

impl<T: ToJson> ToJson for BTreeMap<String, T> {
    fn to_json(&self) -> JsonValue {
        JsonValue::Object(collect_map(self.iter()))
    }
}

impl<T: ToJson> ToJson for IndexMap<String, T> {
    fn to_json(&self) -> JsonValue {
        JsonValue::Object(collect_map(self.iter()))
    }
}

fn collect_map<'a, T: ToJson + 'a>(
    entries: impl Iterator<Item = (&'a String, &'a T)>,
) -> JsonMap {
    entries
        .map(|(key, value)| (key.clone(), value.to_json()))
        .collect()
}
