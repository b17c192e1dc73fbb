//! Construction policy: engine events to native values.
//!
//! Loading drives the engine's low-level event parser instead of its stock
//! loader, so scalars arrive as raw text before any implicit type
//! resolution happens. `01`, `2019-01-01`, `yes` and `3.14` all survive as
//! the exact substring the author wrote. Tags are ignored wholesale, which
//! also makes foreign tags (`!ruby/...` and friends) degrade to inert plain
//! values instead of invoking any typed construction.

use std::collections::HashMap;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::{Marker, TScalarStyle};

use crate::options::LoadOptions;
use crate::value::{Mapping, Value};
use crate::{Error, Result};

/// Load the first document of `source` into a native value.
///
/// An input with no document loads as `Value::Null`.
pub(crate) fn load_str(source: &str, options: &LoadOptions) -> Result<Value> {
    let mut parser = Parser::new_from_str(source);
    let mut builder = ValueBuilder::new(!options.allow_duplicate_keys);

    // false = single document only
    let parsed = parser.load(&mut builder, false);

    // A duplicate key found before a later scan error is the error that
    // happened first in document order; report it.
    if let Some(err) = builder.error.take() {
        return Err(err);
    }
    parsed.map_err(Error::from)?;

    Ok(builder.root.take().unwrap_or(Value::Null))
}

/// Builder that implements MarkedEventReceiver to construct native values.
struct ValueBuilder {
    /// Fail on the first duplicate mapping key.
    check_duplicates: bool,

    /// Stack of containers being constructed.
    stack: Vec<BuildNode>,

    /// The completed root value.
    root: Option<Value>,

    /// Completed values by anchor id. Aliases materialize independent
    /// copies from here; no identity is ever shared with the caller.
    anchors: HashMap<usize, Value>,

    /// First error encountered; later events are ignored once set.
    error: Option<Error>,
}

/// A container being constructed during parsing.
enum BuildNode {
    Sequence {
        anchor: usize,
        items: Vec<Value>,
    },
    Mapping {
        anchor: usize,
        entries: Mapping,
        pending_key: Option<Value>,
    },
}

impl ValueBuilder {
    fn new(check_duplicates: bool) -> Self {
        Self {
            check_duplicates,
            stack: Vec::new(),
            root: None,
            anchors: HashMap::new(),
            error: None,
        }
    }

    fn finish_node(&mut self, anchor: usize, value: Value) {
        // Anchor id 0 means the node is unanchored.
        if anchor > 0 {
            self.anchors.insert(anchor, value.clone());
        }
        self.push_complete(value);
    }

    fn push_complete(&mut self, value: Value) {
        let Some(top) = self.stack.last_mut() else {
            self.root = Some(value);
            return;
        };

        match top {
            BuildNode::Sequence { items, .. } => items.push(value),
            BuildNode::Mapping {
                entries,
                pending_key,
                ..
            } => {
                if let Some(key) = pending_key.take() {
                    // Last writer wins, first-seen position kept.
                    if let Some(slot) = entries.get_mut(&key) {
                        *slot = value;
                    } else {
                        entries.insert(key, value);
                    }
                } else {
                    if self.check_duplicates && entries.contains_key(&value) {
                        self.error = Some(Error::DuplicateKey {
                            key: value.to_string(),
                        });
                        return;
                    }
                    *pending_key = Some(value);
                }
            }
        }
    }
}

impl MarkedEventReceiver for ValueBuilder {
    fn on_event(&mut self, ev: Event, _marker: Marker) {
        if self.error.is_some() {
            return;
        }

        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}

            Event::Scalar(text, style, aid, _tag) => {
                // The only scalar that constructs as null is the truly empty
                // plain one (`key:` with nothing after it). `~`, `null`,
                // quoted empties and every other scalar stay verbatim text.
                let value = if text.is_empty() && matches!(style, TScalarStyle::Plain) {
                    Value::Null
                } else {
                    Value::String(text)
                };
                self.finish_node(aid, value);
            }

            Event::SequenceStart(aid, _tag) => {
                self.stack.push(BuildNode::Sequence {
                    anchor: aid,
                    items: Vec::new(),
                });
            }

            Event::SequenceEnd => {
                let node = self.stack.pop().expect("SequenceEnd without SequenceStart");
                match node {
                    BuildNode::Sequence { anchor, items } => {
                        self.finish_node(anchor, Value::Sequence(items));
                    }
                    BuildNode::Mapping { .. } => panic!("expected sequence on the build stack"),
                }
            }

            Event::MappingStart(aid, _tag) => {
                self.stack.push(BuildNode::Mapping {
                    anchor: aid,
                    entries: Mapping::new(),
                    pending_key: None,
                });
            }

            Event::MappingEnd => {
                let node = self.stack.pop().expect("MappingEnd without MappingStart");
                match node {
                    BuildNode::Mapping {
                        anchor, entries, ..
                    } => {
                        self.finish_node(anchor, Value::Mapping(entries));
                    }
                    BuildNode::Sequence { .. } => panic!("expected mapping on the build stack"),
                }
            }

            Event::Alias(aid) => {
                // A completed anchor materializes an independent copy at
                // every use site. An alias to a container still under
                // construction (a self-reference) cannot be copied and
                // resolves to null.
                let value = self.anchors.get(&aid).cloned().unwrap_or(Value::Null);
                self.push_complete(value);
            }
        }
    }
}
