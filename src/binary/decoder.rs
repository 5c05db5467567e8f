//! Stateful tagged-binary decoder (C4, §4.1).
//!
//! Single-pass, non-backtracking: the decoder owns its buffer exclusively
//! per call and advances a cursor that never moves backward. All multi-byte
//! integers are big-endian unless a call explicitly asks for little-endian.

use crate::binary::node::{Attrs, Content, Node};
use crate::binary::tags::{self, *};
use crate::binary::tokens::{DOUBLE_BYTE_TOKENS, SINGLE_BYTE_TOKENS};
use crate::error::DecodeError;

/// Hook invoked for a `message` node's opaque blob.
///
/// The decoder never parses protobuf itself (see §1 scope); when set, this
/// callback gets the raw bytes and may return a re-encoded form to store as
/// [`Content::ProtoMessage`], or an error to report as
/// [`DecodeError::ProtobufDecodeError`] (non-fatal — the node is still
/// produced, with the raw bytes as its content).
pub type MessageDecoder = dyn Fn(&[u8]) -> Result<Vec<u8>, String> + Send + Sync;

/// A stateful reader over a byte buffer producing a [`Node`] tree.
pub struct Decoder<'a> {
    data: &'a [u8],
    index: usize,
    message_decoder: Option<&'a MessageDecoder>,
}

impl<'a> Decoder<'a> {
    /// Create a decoder positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            index: 0,
            message_decoder: None,
        }
    }

    /// Attach a hook for deserializing `message` blobs.
    pub fn with_message_decoder(mut self, hook: &'a MessageDecoder) -> Self {
        self.message_decoder = Some(hook);
        self
    }

    /// Current cursor position, for diagnostics.
    pub fn position(&self) -> usize {
        self.index
    }

    fn check_eos(&self, length: usize) -> Result<(), DecodeError> {
        if self.index + length > self.data.len() {
            Err(DecodeError::UnexpectedEnd)
        } else {
            Ok(())
        }
    }

    fn next(&mut self) -> u8 {
        let val = self.data[self.index];
        self.index += 1;
        val
    }

    fn read_byte(&mut self) -> Result<u8, DecodeError> {
        self.check_eos(1)?;
        Ok(self.next())
    }

    /// Read an `n`-byte (1..=9) unsigned integer, big-endian by default.
    fn read_int(&mut self, n: usize, little_endian: bool) -> Result<u64, DecodeError> {
        self.check_eos(n)?;
        let mut val: u64 = 0;
        for i in 0..n {
            let shift = if little_endian { i } else { n - 1 - i };
            val |= (self.next() as u64) << (shift * 8);
        }
        Ok(val)
    }

    fn read_int20(&mut self) -> Result<usize, DecodeError> {
        self.check_eos(3)?;
        let b0 = self.next() as usize;
        let b1 = self.next() as usize;
        let b2 = self.next() as usize;
        Ok(((b0 & 0x0F) << 16) | (b1 << 8) | b2)
    }

    fn read_string_from_chars(&mut self, length: usize) -> Result<String, DecodeError> {
        self.check_eos(length)?;
        let bytes = &self.data[self.index..self.index + length];
        self.index += length;
        Ok(String::from_utf8_lossy(bytes).into_owned())
    }

    fn read_bytes(&mut self, length: usize) -> Result<&'a [u8], DecodeError> {
        self.check_eos(length)?;
        let bytes = &self.data[self.index..self.index + length];
        self.index += length;
        Ok(bytes)
    }

    fn unpack_hex(val: u8) -> Result<char, DecodeError> {
        match val {
            0..=9 => Ok((b'0' + val) as char),
            10..=15 => Ok((b'A' + val - 10) as char),
            _ => Err(DecodeError::InvalidHex(val)),
        }
    }

    fn unpack_nibble(val: u8) -> Result<char, DecodeError> {
        match val {
            0..=9 => Ok((b'0' + val) as char),
            10 => Ok('-'),
            11 => Ok('.'),
            15 => Ok('\0'),
            _ => Err(DecodeError::InvalidNibble(val)),
        }
    }

    fn unpack_byte(tag: u8, val: u8) -> Result<char, DecodeError> {
        if tag == NIBBLE_8 {
            Self::unpack_nibble(val)
        } else {
            Self::unpack_hex(val)
        }
    }

    /// Packed-alphabet read (§4.1.3) for `HEX_8`/`NIBBLE_8`.
    fn read_packed8(&mut self, tag: u8) -> Result<String, DecodeError> {
        let start_byte = self.read_byte()?;
        let count = start_byte & 0x7F;
        let mut out = String::with_capacity(count as usize * 2);
        for _ in 0..count {
            let curr = self.read_byte()?;
            out.push(Self::unpack_byte(tag, (curr & 0xF0) >> 4)?);
            out.push(Self::unpack_byte(tag, curr & 0x0F)?);
        }
        if start_byte >> 7 != 0 {
            out.pop();
        }
        Ok(out)
    }

    fn get_token(index: u8) -> Result<&'static str, DecodeError> {
        if !SINGLE_BYTE_TOKEN_RANGE.contains(&index) {
            return Err(DecodeError::InvalidTag(index));
        }
        Ok(SINGLE_BYTE_TOKENS[index as usize])
    }

    fn get_token_double(dict: u8, second: u8) -> Result<&'static str, DecodeError> {
        let n = 256 * dict as usize + second as usize;
        DOUBLE_BYTE_TOKENS
            .get(n)
            .copied()
            .ok_or(DecodeError::InvalidTag(second))
    }

    /// Dispatch a tag byte to its string reading (§4.1.2).
    fn read_string(&mut self, tag: u8) -> Result<String, DecodeError> {
        if SINGLE_BYTE_TOKEN_RANGE.contains(&tag) {
            return Ok(Self::get_token(tag)?.to_string());
        }

        if tags::is_dictionary_tag(tag) {
            let dict = match tag {
                DICTIONARY_0 => 0,
                DICTIONARY_1 => 1,
                DICTIONARY_2 => 2,
                _ => 3,
            };
            let second = self.read_byte()?;
            return Ok(Self::get_token_double(dict, second)?.to_string());
        }

        if tag == LIST_EMPTY {
            return Ok(String::new());
        }

        match tag {
            BINARY_8 => {
                let n = self.read_byte()? as usize;
                self.read_string_from_chars(n)
            }
            BINARY_20 => {
                let n = self.read_int20()?;
                self.read_string_from_chars(n)
            }
            BINARY_32 => {
                let n = self.read_int(4, false)? as usize;
                self.read_string_from_chars(n)
            }
            JID_PAIR => {
                let t1 = self.read_byte()?;
                let identity = self.read_string(t1)?;
                let t2 = self.read_byte()?;
                let domain = self.read_string(t2)?;
                Ok(format!("{identity}@{domain}"))
            }
            HEX_8 | NIBBLE_8 => self.read_packed8(tag),
            _ => Err(DecodeError::InvalidTag(tag)),
        }
    }

    fn read_list_size(&mut self, tag: u8) -> Result<usize, DecodeError> {
        match tag {
            LIST_EMPTY => Ok(0),
            LIST_8 => Ok(self.read_byte()? as usize),
            LIST_16 => Ok(self.read_int(2, false)? as usize),
            _ => Err(DecodeError::InvalidListTag(tag)),
        }
    }

    fn read_attributes(&mut self, n: usize) -> Result<Option<Attrs>, DecodeError> {
        if n == 0 {
            return Ok(None);
        }
        let mut attrs = Attrs::new();
        for _ in 0..n {
            let kt = self.read_byte()?;
            let key = self.read_string(kt)?;
            let vt = self.read_byte()?;
            let value = self.read_string(vt)?;
            if attrs.insert(key.clone(), value).is_some() {
                return Err(DecodeError::DuplicateAttributeKey(key));
            }
        }
        Ok(Some(attrs))
    }

    /// Read one [`Node`] (§4.1.4).
    pub fn read_node(&mut self) -> Result<Node, DecodeError> {
        let lb = self.read_byte()?;
        let lsize = self.read_list_size(lb)?;

        let dt = self.read_byte()?;
        if dt == STREAM_END {
            return Err(DecodeError::UnexpectedStreamEnd);
        }
        let desc = self.read_string(dt)?;
        if lsize == 0 || desc.is_empty() {
            return Err(DecodeError::InvalidNode);
        }

        let attrs = self.read_attributes((lsize - 1) >> 1)?;

        let content = if lsize % 2 == 0 {
            let ct = self.read_byte()?;
            if tags::is_list_tag(ct) {
                Content::List(self.read_list(ct)?)
            } else {
                match ct {
                    BINARY_8 => {
                        let n = self.read_byte()? as usize;
                        let bytes = self.read_bytes(n)?;
                        self.finish_binary_content(&desc, bytes)
                    }
                    BINARY_20 => {
                        let n = self.read_int20()?;
                        let bytes = self.read_bytes(n)?;
                        self.finish_binary_content(&desc, bytes)
                    }
                    BINARY_32 => {
                        let n = self.read_int(4, false)? as usize;
                        let bytes = self.read_bytes(n)?;
                        self.finish_binary_content(&desc, bytes)
                    }
                    _ => Content::String(self.read_string(ct)?),
                }
            }
        } else {
            Content::None
        };

        Ok(Node {
            desc,
            attrs,
            content,
        })
    }

    fn finish_binary_content(&self, desc: &str, bytes: &[u8]) -> Content {
        if desc == "message" {
            match self.message_decoder {
                Some(hook) => match hook(bytes) {
                    Ok(decoded) => Content::ProtoMessage(decoded, None),
                    Err(err) => {
                        Content::ProtoMessage(bytes.to_vec(), Some(DecodeError::ProtobufDecodeError(err)))
                    }
                },
                None => Content::ProtoMessage(bytes.to_vec(), None),
            }
        } else {
            Content::Bytes(bytes.to_vec())
        }
    }

    /// Read a list of `read_list_size(tag)` nodes.
    pub fn read_list(&mut self, tag: u8) -> Result<Vec<Node>, DecodeError> {
        let lsize = self.read_list_size(tag)?;
        let mut nodes = Vec::with_capacity(lsize);
        for _ in 0..lsize {
            nodes.push(self.read_node()?);
        }
        Ok(nodes)
    }
}

/// Decode a single [`Node`] from `bytes`, starting at index 0.
///
/// Trailing bytes are permitted: the format is self-delimiting.
pub fn decode(bytes: &[u8]) -> Result<Node, DecodeError> {
    Decoder::new(bytes).read_node()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    #[test]
    fn read_int_matches_big_and_little_endian() {
        let buf = [0x01, 0x02, 0x03, 0x04];
        let mut d = Decoder::new(&buf);
        assert_eq!(d.read_int(4, false).unwrap(), 0x01020304);

        let mut d = Decoder::new(&buf);
        assert_eq!(d.read_int(4, true).unwrap(), 0x04030201);
    }

    #[test]
    fn read_int20_packs_twenty_bits() {
        let buf = [0x0F, 0xFF, 0xFF];
        let mut d = Decoder::new(&buf);
        assert_eq!(d.read_int20().unwrap(), 0xFFFFF);
    }

    #[test]
    fn jid_pair_combines_identity_and_domain() {
        // JID_PAIR, BINARY_8, 3, "web", BINARY_8, 5, "width"
        let mut buf = vec![JID_PAIR, BINARY_8, 3];
        buf.extend_from_slice(b"web");
        buf.push(BINARY_8);
        buf.push(5);
        buf.extend_from_slice(b"width");
        let mut d = Decoder::new(&buf);
        let tag = d.read_byte().unwrap();
        assert_eq!(d.read_string(tag).unwrap(), "web@width");
    }

    #[test]
    fn packed_hex_round_trip() {
        // HEX_8, count=2 (even, no trailing drop), bytes encode 'A','B','C','D'
        let buf = [HEX_8, 0x02, 0xAB, 0xCD];
        let mut d = Decoder::new(&buf);
        assert_eq!(d.read_packed8(HEX_8).unwrap(), "ABCD");
    }

    #[test]
    fn packed_nibble_drops_trailing_char_on_odd_length() {
        // top bit of start byte set => odd count, drop last char
        let buf = [NIBBLE_8, 0x81, 0x01];
        let mut d = Decoder::new(&buf);
        // digits '0' and '1' from nibble 0 and 1, then drop the second
        assert_eq!(d.read_packed8(NIBBLE_8).unwrap(), "0");
    }

    #[test]
    fn stream_end_as_descriptor_is_an_error() {
        let buf = [LIST_8, 1, STREAM_END];
        let mut d = Decoder::new(&buf);
        assert_eq!(d.read_node(), Err(DecodeError::UnexpectedStreamEnd));
    }

    #[test]
    fn truncated_buffer_is_unexpected_end() {
        let buf = [LIST_8];
        let mut d = Decoder::new(&buf);
        assert_eq!(d.read_node(), Err(DecodeError::UnexpectedEnd));
    }

    /// A failing message-decoder hook is non-fatal: the node is still
    /// produced, carrying the raw bytes plus the hook's error (§7).
    #[test]
    fn failing_message_hook_keeps_raw_bytes_and_attaches_error() {
        // LIST_8 2, desc="message" (single-byte token), content BINARY_8 3 "abc"
        let message_index = SINGLE_BYTE_TOKENS
            .iter()
            .position(|t| *t == "message")
            .unwrap() as u8;
        let buf = [LIST_8, 2, message_index, BINARY_8, 3, b'a', b'b', b'c'];

        let hook: &MessageDecoder = &|_bytes| Err("bad protobuf".to_string());
        let mut d = Decoder::new(&buf).with_message_decoder(hook);
        let node = d.read_node().unwrap();

        match node.content {
            Content::ProtoMessage(bytes, Some(err)) => {
                assert_eq!(bytes, b"abc");
                assert_eq!(err, DecodeError::ProtobufDecodeError("bad protobuf".to_string()));
            }
            other => panic!("expected ProtoMessage with error, got {other:?}"),
        }
    }

    /// The 385-byte hex fixture (§8 scenario 1): a top-level `action` node
    /// with `last`/`add` attributes and four `message` children carrying
    /// opaque protobuf blobs.
    #[test]
    fn hex_fixture_decodes_action_node_with_four_messages() {
        let data = hex(concat!(
            "f806092f5a0a10f804f80234fc6c0a350a1b3931373532393837313131374073",
            "2e77686174736170702e6e657410011a143345423030393637354537454433374141",
            "424632122b0a292a7069616e6f20726f6f6d2074696d696e6773206172653a2a0a20",
            "363a3030414d2d31323a3030414d18b3faa7f3052003f80234fc4c0a410a1b393137",
            "35323938373131313740732e77686174736170702e6e657410001a2030464345433",
            "5333330463634393239433645394132434646443242433845414418bdfaa7f305c0",
            "0101f80234fc930a350a1b393137353239383731313137407",
            "32e77686174736170702e6e657410011a14334542303033433742353339414644",
            "303937353312520a50536f727279206672656e2c204920636f756c646e277420756e",
            "6465727374616e6420274c69627261272e2054797065202768656c702720746f206b",
            "6e6f77207768617420616c6c20492063616e20646f18c1faa7f3052003f80234fc54",
            "0a410a1b393137353239383731313137407",
            "32e77686174736170702e6e657410001a20413132333042384436423041314437",
            "393345433241453245413043313638443812090a076c69627261727918c2faa7f305",
        ));

        let node = decode(&data).unwrap();
        assert_eq!(node.desc, "action");
        let attrs = node.attrs.unwrap();
        assert_eq!(attrs.get("last").map(String::as_str), Some("true"));
        assert_eq!(attrs.get("add").map(String::as_str), Some("before"));

        let children = node.children();
        assert_eq!(children.len(), 4);
        for child in children {
            assert_eq!(child.desc, "message");
            assert!(child.attrs.is_none());
            assert!(matches!(child.content, Content::ProtoMessage(_, None)));
        }
    }
}
