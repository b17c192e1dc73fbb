//! The annotated node tree handed to the emitter.
//!
//! This is the dump-side counterpart of the engine's parse events: every
//! scalar carries the tag the representation policy chose for it and the
//! style it must be written in. Tags are never emitted (canonical form is
//! disabled), but they record the policy decision and are observable in
//! tests.

/// How a scalar is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarStyle {
    /// Bare, unquoted.
    Plain,
    /// Single-quoted, with internal quotes doubled.
    SingleQuoted,
    /// Double-quoted with escapes; fallback for control characters.
    DoubleQuoted,
    /// Literal block (`|`), for multi-line text.
    Literal,
}

/// The type tag the representation policy assigned to a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarTag {
    Str,
    Int,
    Bool,
    Null,
}

/// A styled scalar node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarNode {
    pub tag: ScalarTag,
    pub text: String,
    pub style: ScalarStyle,
}

impl ScalarNode {
    /// True for the empty plain scalar, the dump form of null: it leaves
    /// nothing after `key:` or `-`.
    pub fn is_empty_plain(&self) -> bool {
        self.text.is_empty() && self.style == ScalarStyle::Plain
    }
}

/// A node tree ready for emission. Mappings keep their entry order;
/// sequences keep their item order; there are no anchors, aliases or
/// document markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Scalar(ScalarNode),
    Sequence(Vec<Node>),
    Mapping(Vec<(Node, Node)>),
}
