//! Configuration for the load and dump entry points.
//!
//! These are plain structs passed into pure functions; nothing here wraps or
//! inherits from the document engine's own configuration.

/// Options for [`load_with`](crate::load_with).
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// When false, loading fails on the first duplicate mapping key found in
    /// document order. When true (the default), the last value for a
    /// duplicated key wins and the key keeps its first-seen position.
    pub allow_duplicate_keys: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            allow_duplicate_keys: true,
        }
    }
}

/// Line-break style for emitted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreak {
    /// POSIX line feeds, the fixed default.
    #[default]
    Lf,
    /// Carriage return + line feed.
    CrLf,
}

/// Output byte encoding for [`dump_to_bytes`](crate::dump_to_bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// UTF-8, no byte-order mark.
    #[default]
    Utf8,
    /// UTF-16 little-endian, with a byte-order mark.
    Utf16Le,
    /// UTF-16 big-endian, with a byte-order mark.
    Utf16Be,
}

/// Options for [`dump_with`](crate::dump_with) and
/// [`dump_to_bytes`](crate::dump_to_bytes).
///
/// Everything beyond these fields is fixed: block style only, no anchors or
/// aliases, no type tags, no `---`/`...` document markers.
#[derive(Debug, Clone)]
pub struct DumpOptions {
    /// Indent width, applied uniformly. Anything above 2 yields oddly deep
    /// vertical indents on lists and maps. Values outside 2..=9 fall back
    /// to 2, matching the engine's emitter.
    pub indent: usize,

    /// Soft line-width hint. The block emitter never folds lines, so this is
    /// carried for parity with the engine's emitter settings, not a contract.
    pub width: usize,

    /// Line-break style. Fixed to LF by default.
    pub line_break: LineBreak,

    /// Byte encoding used by `dump_to_bytes`. Ignored by `dump`/`dump_with`,
    /// which return text.
    pub encoding: Encoding,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            indent: 2,
            width: 90,
            line_break: LineBreak::Lf,
            encoding: Encoding::Utf8,
        }
    }
}

impl LineBreak {
    pub(crate) fn apply(self, text: String) -> String {
        match self {
            LineBreak::Lf => text,
            LineBreak::CrLf => text.replace('\n', "\r\n"),
        }
    }
}
