//! JSON tree manipulation for GraphQL response data.

use serde_json_bytes::ByteString;
use serde_json_bytes::Map;
use serde_json_bytes::Value;

/// A JSON object.
pub type Object = Map<ByteString, Value>;

pub(crate) trait ValueExt {
    /// Rebuilds the tree, offering every object entry to `visit`.
    ///
    /// Children are rebuilt before their parent entry is offered. `Some`
    /// replaces the entry's value, `None` keeps it. Arrays and key order are
    /// preserved, and `self` is left untouched.
    #[must_use]
    fn map_entries(&self, visit: &impl Fn(&ByteString, &Value) -> Option<Value>) -> Value;
}

impl ValueExt for Value {
    fn map_entries(&self, visit: &impl Fn(&ByteString, &Value) -> Option<Value>) -> Value {
        match self {
            Value::Object(object) => {
                let mut rebuilt = Object::new();
                for (key, value) in object {
                    let value = value.map_entries(visit);
                    let value = visit(key, &value).unwrap_or(value);
                    rebuilt.insert(key.clone(), value);
                }
                Value::Object(rebuilt)
            }
            Value::Array(values) => Value::Array(
                values
                    .iter()
                    .map(|value| value.map_entries(visit))
                    .collect(),
            ),
            value => value.clone(),
        }
    }
}
