//! String classification helpers shared by both directions.
//!
//! The dump path must never emit a plain scalar that a YAML 1.1 loader would
//! reinterpret as a typed value, so these predicates mirror the implicit
//! resolver patterns the construction policy neutralizes on the way in. The
//! classifier may over-approximate "typed" (extra quoting is harmless); it
//! must never under-approximate.

use once_cell::sync::Lazy;
use regex::Regex;

/// Plain forms a YAML 1.1 implicit resolver would treat as non-string:
/// null forms, the y/n/yes/no/true/false/on/off boolean family, decimal,
/// binary, octal, hex and sexagesimal integers, floats (including `.inf`,
/// `.nan`, exponents and sexagesimal), and date/timestamp shapes.
static TYPED_SCALAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"~|null|Null|NULL",
        r"|y|Y|yes|Yes|YES|n|N|no|No|NO",
        r"|true|True|TRUE|false|False|FALSE",
        r"|on|On|ON|off|Off|OFF",
        r"|[-+]?(?:0b[0-1_]+|0x[0-9a-fA-F_]+|0o?[0-7_]+",
        r"|(?:0|[1-9][0-9_]*)|[1-9][0-9_]*(?::[0-5]?[0-9])+)",
        r"|[-+]?(?:[0-9][0-9_]*\.[0-9_]*(?:[eE][-+]?[0-9]+)?",
        r"|\.[0-9_]+(?:[eE][-+]?[0-9]+)?",
        r"|[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*",
        r"|[0-9][0-9_]*[eE][-+]?[0-9]+",
        r"|\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN))",
        r"|[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}(?:[Tt ].*)?",
        r")$",
    ))
    .expect("typed-scalar pattern is valid")
});

/// True when `text` is the bare unquoted form of a canonical decimal integer:
/// ASCII digits only, with no leading zero except `"0"` itself.
///
/// `"007"`, `"+1"` and the empty string are not bare integers; they stay
/// quoted strings so nothing reinterprets them on reload.
pub(crate) fn is_bare_integer(text: &str) -> bool {
    !text.is_empty()
        && text.bytes().all(|b| b.is_ascii_digit())
        && (text == "0" || !text.starts_with('0'))
}

/// True when the plain (unquoted) form of `text` would resolve to a typed
/// value under YAML 1.1 implicit resolution.
pub(crate) fn resolves_as_typed(text: &str) -> bool {
    text.is_empty() || TYPED_SCALAR.is_match(text)
}

/// True when `text` is syntactically safe as a plain scalar in block context.
pub(crate) fn plain_safe(text: &str) -> bool {
    let Some(first) = text.chars().next() else {
        return false;
    };
    match first {
        // Indicators only when followed by a space or standing alone.
        '-' | '?' | ':' => {
            if text.len() == 1 || text.as_bytes()[1] == b' ' {
                return false;
            }
        }
        ',' | '[' | ']' | '{' | '}' | '#' | '&' | '*' | '!' | '|' | '>' | '\'' | '"' | '%'
        | '@' | '`' => return false,
        _ => {}
    }
    if text.starts_with(' ') || text.ends_with(' ') {
        return false;
    }
    if text.contains(": ") || text.ends_with(':') {
        return false;
    }
    if text.contains(" #") || text.contains('\t') {
        return false;
    }
    if text.starts_with("---") || text.starts_with("...") {
        return false;
    }
    true
}

/// True when `text` holds characters a single-quoted or literal scalar cannot
/// carry and the emitter must fall back to double quotes with escapes.
pub(crate) fn needs_double_quotes(text: &str) -> bool {
    text.chars().any(|c| c != '\n' && (c.is_control() || c == '\u{7f}'))
}

/// Render a float the way the dump path quotes it: a fractional part is kept
/// (`1.0`, never `1`) so the value cannot merge with an integer on reload.
pub(crate) fn format_float(value: f64) -> String {
    if value.is_nan() {
        return ".nan".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            ".inf".to_string()
        } else {
            "-.inf".to_string()
        };
    }
    if value == value.trunc() && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
