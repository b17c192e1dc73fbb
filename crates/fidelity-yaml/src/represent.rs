//! Representation policy: native values to annotated nodes.
//!
//! One representation function per variant, selected by static pattern
//! match. The function is pure: repeated or shared substructure in the
//! caller's data is re-represented at every site, so no anchors or aliases
//! can ever appear in the output.

use crate::classify;
use crate::node::{Node, ScalarNode, ScalarStyle, ScalarTag};
use crate::value::Value;
use crate::Result;

/// Represent a native value as a node tree ready for emission.
///
/// Total over the accepted inputs; the only failure is a `Value::Bytes`
/// payload that does not decode as UTF-8.
pub fn represent(value: &Value) -> Result<Node> {
    Ok(match value {
        Value::Null => Node::Scalar(represent_null()),
        Value::String(s) => Node::Scalar(represent_text(s.clone())),
        Value::Bool(b) => Node::Scalar(represent_bool(*b)),
        Value::Int(i) => Node::Scalar(represent_text(i.to_string())),
        Value::Float(x) => Node::Scalar(represent_float(*x)),
        Value::Bytes(b) => Node::Scalar(represent_text(String::from_utf8(b.clone())?)),
        Value::Sequence(items) => {
            Node::Sequence(items.iter().map(represent).collect::<Result<_>>()?)
        }
        Value::Mapping(map) => {
            let mut entries = Vec::with_capacity(map.len());
            for (key, value) in map.iter() {
                entries.push((represent(key)?, represent(value)?));
            }
            Node::Mapping(entries)
        }
    })
}

/// Null is an empty scalar, never the literal `null` or `~`.
fn represent_null() -> ScalarNode {
    ScalarNode {
        tag: ScalarTag::Null,
        text: String::new(),
        style: ScalarStyle::Plain,
    }
}

/// Booleans read as `yes`/`no`; the loader hands them back as those exact
/// strings, so the round trip is unambiguous.
fn represent_bool(value: bool) -> ScalarNode {
    ScalarNode {
        tag: ScalarTag::Bool,
        text: if value { "yes" } else { "no" }.to_string(),
        style: ScalarStyle::Plain,
    }
}

/// Floats are always quoted so `1.0` can never merge with `1` on reload.
fn represent_float(value: f64) -> ScalarNode {
    ScalarNode {
        tag: ScalarTag::Str,
        text: classify::format_float(value),
        style: ScalarStyle::SingleQuoted,
    }
}

/// Text styling:
/// - control characters force double quotes with escapes;
/// - multi-line text uses a literal block, preserving newlines exactly;
/// - a bare canonical integer is re-tagged int and left unquoted, purely
///   for readability;
/// - anything whose plain form would be reinterpreted, or is syntactically
///   unsafe unquoted, is single-quoted.
fn represent_text(text: String) -> ScalarNode {
    if classify::needs_double_quotes(&text) {
        return ScalarNode {
            tag: ScalarTag::Str,
            text,
            style: ScalarStyle::DoubleQuoted,
        };
    }
    if text.contains('\n') {
        return ScalarNode {
            tag: ScalarTag::Str,
            text,
            style: ScalarStyle::Literal,
        };
    }
    if classify::is_bare_integer(&text) {
        return ScalarNode {
            tag: ScalarTag::Int,
            text,
            style: ScalarStyle::Plain,
        };
    }
    let style = if classify::resolves_as_typed(&text) || !classify::plain_safe(&text) {
        ScalarStyle::SingleQuoted
    } else {
        ScalarStyle::Plain
    };
    ScalarNode {
        tag: ScalarTag::Str,
        text,
        style,
    }
}
