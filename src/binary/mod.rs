//! The tagged binary node-tree protocol (C3/C4, §4.1).
//!
//! ```text
//! bytes ──▶ Decoder::read_node ──▶ Node { desc, attrs, content }
//!                                              │
//!                                              └─ content: None | Bytes | String
//!                                                          | ProtoMessage | List<Node>
//! ```

pub mod decoder;
pub mod node;
pub mod tags;
pub mod tokens;

pub use decoder::{decode, Decoder, MessageDecoder};
pub use node::{Attrs, Content, Node};
