//! The recursive node tree produced by the decoder (§3 `Node`).

use std::collections::BTreeMap;

/// Attribute map: finite, ordered by key, keys unique within a node.
///
/// A `BTreeMap` gives the deterministic iteration order the source's test
/// fixtures rely on without needing a separate insertion-order tracker.
pub type Attrs = BTreeMap<String, String>;

/// The payload carried by a [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    /// No content (odd `lsize`).
    None,
    /// Raw bytes, from a `BINARY_8`/`BINARY_20`/`BINARY_32` blob whose
    /// descriptor was not `"message"`.
    Bytes(Vec<u8>),
    /// A short inline string, from a content tag that was neither a list
    /// tag nor a binary-blob tag.
    String(String),
    /// An opaque protobuf-encoded `message` blob.
    ///
    /// The decoder never interprets these bytes itself; a caller-supplied
    /// hook (see [`crate::binary::decoder::Decoder::with_message_decoder`])
    /// may deserialize them into an application type. The second field
    /// carries [`crate::error::DecodeError::ProtobufDecodeError`] if the
    /// hook returned one — the raw bytes are kept as the content either
    /// way, per the non-fatal recovery policy.
    ProtoMessage(Vec<u8>, Option<crate::error::DecodeError>),
    /// A nested list of child nodes.
    List(Vec<Node>),
}

/// A recursive record `{ desc, attrs, content }` (§3).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Non-empty node descriptor (e.g. `"action"`, `"message"`).
    pub desc: String,
    /// Attribute map; `None` when the node carried zero attribute pairs.
    pub attrs: Option<Attrs>,
    /// The node's payload.
    pub content: Content,
}

impl Node {
    /// Look up an attribute by key.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.as_ref()?.get(key).map(String::as_str)
    }

    /// Children of a `List` node, or an empty slice for any other content.
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::List(nodes) => nodes,
            _ => &[],
        }
    }
}
