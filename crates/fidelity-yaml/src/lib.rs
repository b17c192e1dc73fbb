//! Type-stable YAML loading and deterministic dumping.
//!
//! This crate is a thin policy layer over the `yaml_rust2` document engine.
//! It narrows YAML to a predictable dialect for configuration and metadata
//! files:
//!
//! - **Loading is type-stable.** Every scalar comes back as the exact text
//!   the author wrote: `01` stays `"01"`, `yes` stays `"yes"`, `2019-01-01`
//!   stays `"2019-01-01"`. The only non-string load result is null, for a
//!   truly empty plain scalar. Mappings keep their key order.
//! - **Duplicate keys are either rejected or resolved.** Strict loading
//!   fails on the first duplicate key in document order; permissive loading
//!   (the default) keeps the last value at the first-seen position.
//! - **Dumping is deterministic and diff-friendly.** Block style only,
//!   two-space indents, no anchors, aliases, tags or document markers, and
//!   quoting that guarantees the text survives a reload by any YAML 1.1
//!   loader: typed-looking strings are quoted, floats are always quoted,
//!   multi-line text uses literal blocks.
//!
//! ```
//! use fidelity_yaml::{load, dump, Value};
//!
//! let doc = load("version: 01\nflags:\n  - yes\n").unwrap();
//! assert_eq!(doc.get("version"), Some(&Value::from("01")));
//!
//! let out = dump(&doc).unwrap();
//! assert_eq!(out, "version: '01'\nflags:\n  - 'yes'\n");
//! ```

mod classify;
mod construct;
mod emit;
mod error;
mod node;
mod options;
mod represent;
mod value;

pub use error::{Error, Result};
pub use node::{Node, ScalarNode, ScalarStyle, ScalarTag};
pub use options::{DumpOptions, Encoding, LineBreak, LoadOptions};
pub use represent::represent;
pub use value::{Mapping, Value};

/// Load the first YAML document of `source` with default options.
///
/// Duplicate mapping keys are allowed; the last value wins. An empty input
/// loads as [`Value::Null`].
pub fn load(source: &str) -> Result<Value> {
    construct::load_str(source, &LoadOptions::default())
}

/// Load the first YAML document of `source`.
pub fn load_with(source: &str, options: &LoadOptions) -> Result<Value> {
    construct::load_str(source, options)
}

/// Load from raw bytes, which must be UTF-8 (a leading byte-order mark is
/// accepted and skipped).
pub fn load_bytes(source: &[u8]) -> Result<Value> {
    let source = source.strip_prefix(b"\xef\xbb\xbf").unwrap_or(source);
    load(std::str::from_utf8(source)?)
}

/// Dump `value` as YAML text with default options.
pub fn dump(value: &Value) -> Result<String> {
    dump_with(value, &DumpOptions::default())
}

/// Dump `value` as YAML text.
///
/// The output is a total function of the input value and options: dumping
/// the same value twice yields byte-identical text.
pub fn dump_with(value: &Value, options: &DumpOptions) -> Result<String> {
    let tree = represent::represent(value)?;
    Ok(emit::emit_document(&tree, options))
}

/// Dump `value` to bytes in the encoding named by `options.encoding`.
///
/// UTF-16 output starts with a byte-order mark; UTF-8 output carries none.
pub fn dump_to_bytes(value: &Value, options: &DumpOptions) -> Result<Vec<u8>> {
    let text = dump_with(value, options)?;
    Ok(match options.encoding {
        Encoding::Utf8 => text.into_bytes(),
        Encoding::Utf16Le => {
            let mut out = vec![0xff, 0xfe];
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_le_bytes());
            }
            out
        }
        Encoding::Utf16Be => {
            let mut out = vec![0xfe, 0xff];
            for unit in text.encode_utf16() {
                out.extend_from_slice(&unit.to_be_bytes());
            }
            out
        }
    })
}
