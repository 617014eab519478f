//! Graph node and predicate identifiers.

use crate::Timestamp;
use alloc::string::String;
use chrono::SecondsFormat;
use core::fmt;

/// Renders a timestamp the way every cell rendering path does.
pub fn format_timestamp(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// A graph node, identified by its type and id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node {
    node_type: String,
    id: String,
}

impl Node {
    /// Creates a new node.
    pub fn new(node_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            id: id.into(),
        }
    }

    /// Returns the node type.
    #[inline]
    pub fn node_type(&self) -> &str {
        &self.node_type
    }

    /// Returns the node id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}>", self.node_type, self.id)
    }
}

/// A predicate, optionally anchored at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Predicate {
    id: String,
    anchor: Option<Timestamp>,
}

impl Predicate {
    /// Creates an immutable predicate.
    pub fn immutable(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            anchor: None,
        }
    }

    /// Creates a temporal predicate anchored at `anchor`.
    pub fn temporal(id: impl Into<String>, anchor: Timestamp) -> Self {
        Self {
            id: id.into(),
            anchor: Some(anchor),
        }
    }

    /// Returns the predicate id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the time anchor, if the predicate is temporal.
    #[inline]
    pub fn anchor(&self) -> Option<&Timestamp> {
        self.anchor.as_ref()
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.anchor {
            None => write!(f, "\"{}\"@[]", self.id),
            Some(ts) => write!(f, "\"{}\"@[{}]", self.id, format_timestamp(ts)),
        }
    }
}
