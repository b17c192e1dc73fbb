//! Block-style emitter for annotated node trees.
//!
//! The engine's own emitter accepts no per-scalar style annotations, so the
//! fixed emission parameters live here instead: block style only, no flow
//! (except the unavoidable `[]`/`{}` for empty containers), no tags, no
//! anchors, no document markers, uniform indentation with list items always
//! indented under their parent key.

use crate::node::{Node, ScalarNode, ScalarStyle};
use crate::options::DumpOptions;

/// Render a node tree as YAML text using the fixed parameter set.
pub(crate) fn emit_document(root: &Node, options: &DumpOptions) -> String {
    // Same validity range the engine's emitter enforces.
    let indent = if (2..=9).contains(&options.indent) {
        options.indent
    } else {
        2
    };
    let mut emitter = Emitter {
        out: String::new(),
        indent,
    };
    emitter.emit_root(root);
    options.line_break.apply(emitter.out)
}

struct Emitter {
    out: String,
    indent: usize,
}

impl Emitter {
    fn emit_root(&mut self, node: &Node) {
        match node {
            Node::Scalar(s) if s.is_empty_plain() => self.out.push('\n'),
            Node::Scalar(s) if s.style == ScalarStyle::Literal => {
                self.write_literal(&s.text, 1);
            }
            Node::Scalar(s) => {
                self.write_scalar_inline(s);
                self.out.push('\n');
            }
            Node::Sequence(items) if items.is_empty() => self.out.push_str("[]\n"),
            Node::Mapping(entries) if entries.is_empty() => self.out.push_str("{}\n"),
            Node::Sequence(items) => self.emit_seq(items, 0, false),
            Node::Mapping(entries) => self.emit_map(entries, 0, false),
        }
    }

    fn emit_seq(&mut self, items: &[Node], level: usize, mut inline_first: bool) {
        for item in items {
            if !inline_first {
                self.indent_to(level);
            }
            inline_first = false;
            self.out.push('-');
            self.emit_after_marker(item, level);
        }
    }

    fn emit_map(&mut self, entries: &[(Node, Node)], level: usize, mut inline_first: bool) {
        for (key, value) in entries {
            if !inline_first {
                self.indent_to(level);
            }
            inline_first = false;
            match key {
                Node::Scalar(k) => {
                    self.write_key(k);
                    self.out.push(':');
                    self.emit_after_colon(value, level);
                }
                _ => {
                    // Non-scalar keys take the explicit key form.
                    self.out.push('?');
                    self.emit_after_marker(key, level);
                    self.indent_to(level);
                    self.out.push(':');
                    self.emit_after_colon(value, level);
                }
            }
        }
    }

    /// Continue a `-` or `?` line. Nested containers stay on the marker's
    /// line, padded so their own children align one indent level deeper.
    fn emit_after_marker(&mut self, node: &Node, level: usize) {
        match node {
            Node::Scalar(s) if s.is_empty_plain() => self.out.push('\n'),
            Node::Scalar(s) if s.style == ScalarStyle::Literal => {
                self.out.push(' ');
                self.write_literal(&s.text, level + 1);
            }
            Node::Scalar(s) => {
                self.out.push(' ');
                self.write_scalar_inline(s);
                self.out.push('\n');
            }
            Node::Sequence(items) if items.is_empty() => self.out.push_str(" []\n"),
            Node::Mapping(entries) if entries.is_empty() => self.out.push_str(" {}\n"),
            Node::Sequence(items) => {
                self.pad_to_next_level();
                self.emit_seq(items, level + 1, true);
            }
            Node::Mapping(entries) => {
                self.pad_to_next_level();
                self.emit_map(entries, level + 1, true);
            }
        }
    }

    /// Continue a `key:` line.
    fn emit_after_colon(&mut self, value: &Node, level: usize) {
        match value {
            Node::Scalar(s) if s.is_empty_plain() => self.out.push('\n'),
            Node::Scalar(s) if s.style == ScalarStyle::Literal => {
                self.out.push(' ');
                self.write_literal(&s.text, level + 1);
            }
            Node::Scalar(s) => {
                self.out.push(' ');
                self.write_scalar_inline(s);
                self.out.push('\n');
            }
            Node::Sequence(items) if items.is_empty() => self.out.push_str(" []\n"),
            Node::Mapping(entries) if entries.is_empty() => self.out.push_str(" {}\n"),
            Node::Sequence(items) => {
                self.out.push('\n');
                self.emit_seq(items, level + 1, false);
            }
            Node::Mapping(entries) => {
                self.out.push('\n');
                self.emit_map(entries, level + 1, false);
            }
        }
    }

    fn write_key(&mut self, key: &ScalarNode) {
        // A multi-line key cannot open a literal block in key position;
        // it degrades to double quotes with escaped newlines.
        if key.style == ScalarStyle::Literal {
            self.out.push('"');
            self.out.push_str(&escape_double_quoted(&key.text));
            self.out.push('"');
        } else {
            self.write_scalar_inline(key);
        }
    }

    fn write_scalar_inline(&mut self, scalar: &ScalarNode) {
        match scalar.style {
            ScalarStyle::Plain => self.out.push_str(&scalar.text),
            ScalarStyle::SingleQuoted => {
                self.out.push('\'');
                self.out.push_str(&scalar.text.replace('\'', "''"));
                self.out.push('\'');
            }
            ScalarStyle::DoubleQuoted => {
                self.out.push('"');
                self.out.push_str(&escape_double_quoted(&scalar.text));
                self.out.push('"');
            }
            // Literal scalars are routed through write_literal by callers.
            ScalarStyle::Literal => self.out.push_str(&scalar.text),
        }
    }

    /// Write a literal block header and its indented body. The chomping
    /// indicator is chosen so the text reloads byte-identically: `|-` for
    /// no trailing newline, `|` for exactly one, `|+` for more.
    fn write_literal(&mut self, text: &str, content_level: usize) {
        self.out.push('|');
        if text.starts_with(' ') {
            // Explicit indentation indicator; leading spaces would
            // otherwise be eaten by indentation detection.
            self.out.push((b'0' + self.indent as u8) as char);
        }
        let body = if let Some(stripped) = text.strip_suffix('\n') {
            if stripped.ends_with('\n') {
                self.out.push('+');
            }
            stripped
        } else {
            self.out.push('-');
            text
        };
        self.out.push('\n');
        for line in body.split('\n') {
            if line.is_empty() {
                self.out.push('\n');
            } else {
                self.indent_to(content_level);
                self.out.push_str(line);
                self.out.push('\n');
            }
        }
    }

    fn indent_to(&mut self, level: usize) {
        for _ in 0..level * self.indent {
            self.out.push(' ');
        }
    }

    /// After a `-` or `?` the cursor sits one column past the marker; pad
    /// so an inline container's children line up at the next indent level.
    fn pad_to_next_level(&mut self) {
        for _ in 0..self.indent - 1 {
            self.out.push(' ');
        }
    }
}

fn escape_double_quoted(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            '\0' => escaped.push_str("\\0"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                escaped.push_str(&format!("\\x{:02x}", c as u32));
            }
            c => escaped.push(c),
        }
    }
    escaped
}
