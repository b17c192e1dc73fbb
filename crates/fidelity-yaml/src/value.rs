//! The native value tree produced by loading and consumed by dumping.

use crate::classify;
use hashlink::LinkedHashMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem::discriminant;

/// An insertion-ordered mapping with `Value` keys.
///
/// This is the same ordered-map type the document engine uses for its own
/// hash nodes, so loaded documents keep their key order exactly.
pub type Mapping = LinkedHashMap<Value, Value>;

/// A native YAML value.
///
/// Loading produces only `Null`, `String`, `Sequence` and `Mapping`: scalars
/// keep the exact text the author wrote, with no int/float/bool/timestamp
/// reinterpretation. The remaining variants (`Bool`, `Int`, `Float`, `Bytes`)
/// are accepted as dump inputs and converted to styled scalars on the way
/// out, but are never produced by `load`.
#[derive(Debug, Clone)]
pub enum Value {
    /// YAML null. Dumps as an empty scalar, never the literal `null` or `~`.
    Null,

    /// A text scalar, kept verbatim from the source.
    String(String),

    /// Dump-only input; emitted as the word `yes` or `no`.
    Bool(bool),

    /// Dump-only input; canonical decimals stay unquoted.
    Int(i64),

    /// Dump-only input; always emitted quoted so `1.0` never collapses
    /// into `1` on reload.
    Float(f64),

    /// Dump-only input; must decode as UTF-8, then follows the text rules.
    Bytes(Vec<u8>),

    /// An ordered list of values.
    Sequence(Vec<Value>),

    /// An insertion-ordered mapping.
    Mapping(Mapping),
}

impl Value {
    /// Build a sequence value from an iterator of items.
    pub fn sequence<I>(items: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        Value::Sequence(items.into_iter().collect())
    }

    /// Build a mapping value from an iterator of key/value pairs.
    ///
    /// Later occurrences of an equal key overwrite the earlier value while
    /// keeping the first-seen position, matching the permissive load path.
    pub fn mapping<I>(entries: I) -> Value
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let mut map = Mapping::new();
        for (key, value) in entries {
            if let Some(slot) = map.get_mut(&key) {
                *slot = value;
            } else {
                map.insert(key, value);
            }
        }
        Value::Mapping(map)
    }

    /// Convert any `Debug` input into a text value.
    ///
    /// This is the catch-all for caller data outside the accepted dump
    /// inputs: the dump path never fails on it, it degrades to the debug
    /// representation rendered as a string scalar.
    pub fn from_debug<T: fmt::Debug>(input: &T) -> Value {
        Value::String(format!("{input:?}"))
    }

    /// Check whether this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the text if this is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the items if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a mapping entry by string key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Mapping(map) => map
                .iter()
                .find(|(k, _)| matches!(k, Value::String(s) if s == key))
                .map(|(_, v)| v),
            _ => None,
        }
    }
}

// Floats compare and hash by bit pattern so any value, floats included, can
// serve as a mapping key. Mapping equality is order-sensitive: two mappings
// with the same entries in a different order are different values.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Bytes(a), Value::Bytes(b)) => a == b,
            (Value::Sequence(a), Value::Sequence(b)) => a == b,
            (Value::Mapping(a), Value::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .zip(b.iter())
                        .all(|((ka, va), (kb, vb))| ka == kb && va == vb)
            }
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::String(s) => s.hash(state),
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::Sequence(items) => items.hash(state),
            Value::Mapping(map) => {
                map.len().hash(state);
                for (key, value) in map.iter() {
                    key.hash(state);
                    value.hash(state);
                }
            }
        }
    }
}

/// Scalar text form, used for duplicate-key error messages.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::String(s) => f.write_str(s),
            Value::Bool(b) => f.write_str(if *b { "yes" } else { "no" }),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => f.write_str(&classify::format_float(*x)),
            Value::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
            Value::Sequence(_) | Value::Mapping(_) => write!(f, "{self:?}"),
        }
    }
}

// Mapping keys are stringified through their scalar form so the output stays
// valid JSON regardless of the key type.
impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::String(s) => serializer.serialize_str(s),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Bytes(b) => serializer.serialize_bytes(b),
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Mapping(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map.iter() {
                    match key {
                        Value::String(s) => out.serialize_entry(s, value)?,
                        other => out.serialize_entry(&other.to_string(), value)?,
                    }
                }
                out.end()
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Sequence(items)
    }
}

impl From<Mapping> for Value {
    fn from(map: Mapping) -> Self {
        Value::Mapping(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_builder_keeps_first_position_on_duplicate() {
        let value = Value::mapping([
            (Value::from("a"), Value::from("1")),
            (Value::from("b"), Value::from("2")),
            (Value::from("a"), Value::from("3")),
        ]);

        let map = value.as_mapping().unwrap();
        let keys: Vec<&Value> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![&Value::from("a"), &Value::from("b")]);
        assert_eq!(value.get("a"), Some(&Value::from("3")));
    }

    #[test]
    fn test_mapping_equality_is_order_sensitive() {
        let ab = Value::mapping([
            (Value::from("a"), Value::from("1")),
            (Value::from("b"), Value::from("2")),
        ]);
        let ba = Value::mapping([
            (Value::from("b"), Value::from("2")),
            (Value::from("a"), Value::from("1")),
        ]);
        assert_ne!(ab, ba);
    }

    #[test]
    fn test_float_keys_are_usable() {
        let value = Value::mapping([(Value::from(123.34), Value::from("tha"))]);
        let map = value.as_mapping().unwrap();
        assert_eq!(map.get(&Value::from(123.34)), Some(&Value::from("tha")));
    }

    #[test]
    fn test_display_renders_scalar_text() {
        assert_eq!(Value::from("a").to_string(), "a");
        assert_eq!(Value::from(42i64).to_string(), "42");
        assert_eq!(Value::Null.to_string(), "");
    }

    #[test]
    fn test_from_debug_falls_back_to_text() {
        let value = Value::from_debug(&(1, "x"));
        assert_eq!(value.as_str(), Some("(1, \"x\")"));
    }

    #[test]
    fn test_serialize_to_json_preserves_order() {
        let value = Value::mapping([
            (Value::from("b"), Value::from("1")),
            (Value::from("a"), Value::sequence([Value::Null, Value::from("x")])),
        ]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, r#"{"b":"1","a":[null,"x"]}"#);
    }
}
