use crate::types::{Quaternion, Vector2, Vector3};
use crate::wire::{order, BodyLen, ElemCount, Ser};
use anyhow::Result;
use derive_more::Deref;

/// Count of bytes a `write_*` call appended.
#[derive(Deref, Clone, Copy, PartialEq, Eq, Debug)]
pub struct WriteLen(usize);
impl WriteLen {
    pub fn new_manual(i: usize) -> Self {
        Self(i)
    }
}

/// An append-only output buffer with one `write_*` per primitive kind.
///
/// The buffer grows with amortized reallocation; bytes already written are
/// never re-copied by a subsequent append. `into_bytes` hands the finished
/// encoding to the transport.
pub struct WireWriter {
    buf: Vec<u8>,
}

impl WireWriter {
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn append(&mut self, bytes: &[u8]) -> WriteLen {
        self.buf.extend_from_slice(bytes);
        WriteLen(bytes.len())
    }

    pub fn write_i32(&mut self, value: i32) -> Result<WriteLen> {
        Ok(self.append(&order::to_wire(value.to_ne_bytes())))
    }

    pub fn write_f32(&mut self, value: f32) -> Result<WriteLen> {
        Ok(self.append(&order::to_wire(value.to_ne_bytes())))
    }

    /// Booleans occupy one byte.
    pub fn write_bool(&mut self, value: bool) -> Result<WriteLen> {
        Ok(self.append(&[u8::from(value)]))
    }

    pub fn write_byte(&mut self, value: u8) -> Result<WriteLen> {
        Ok(self.append(&[value]))
    }

    /// Length prefix, then the UTF-8 content bytes passed through the same
    /// wire-order transform as numeric bytes. Reversing UTF-8 content is a
    /// quirk of the established wire contract, kept for compatibility with
    /// existing peers; [`WireReader::read_string`] applies the exact
    /// inverse over the same window, so round-trips are unaffected.
    ///
    /// [`WireReader::read_string`]: crate::wire::WireReader::read_string
    pub fn write_str(&mut self, value: &str) -> Result<WriteLen> {
        if value.is_empty() {
            return self.write_i32(0);
        }

        let mut body = value.as_bytes().to_vec();
        order::to_wire_in_place(&mut body);

        let mut w_len = *BodyLen::from_body(&body)?.ser(self)?;
        w_len += *self.append(&body);
        Ok(WriteLen(w_len))
    }

    /// Length prefix, then the bytes verbatim. Unlike string content, a raw
    /// buffer is not byte-order adjusted.
    pub fn write_bytes(&mut self, value: &[u8]) -> Result<WriteLen> {
        if value.is_empty() {
            return self.write_i32(0);
        }

        let mut w_len = *BodyLen::from_body(value)?.ser(self)?;
        w_len += *self.append(value);
        Ok(WriteLen(w_len))
    }

    pub fn write_vector2(&mut self, value: Vector2) -> Result<WriteLen> {
        let mut w_len = *self.write_f32(value.x)?;
        w_len += *self.write_f32(value.y)?;
        Ok(WriteLen(w_len))
    }

    pub fn write_vector3(&mut self, value: Vector3) -> Result<WriteLen> {
        let mut w_len = *self.write_f32(value.x)?;
        w_len += *self.write_f32(value.y)?;
        w_len += *self.write_f32(value.z)?;
        Ok(WriteLen(w_len))
    }

    pub fn write_quaternion(&mut self, value: Quaternion) -> Result<WriteLen> {
        let mut w_len = *self.write_f32(value.x)?;
        w_len += *self.write_f32(value.y)?;
        w_len += *self.write_f32(value.z)?;
        w_len += *self.write_f32(value.w)?;
        Ok(WriteLen(w_len))
    }

    /// Element count, then each element's encoding in input order. An empty
    /// slice encodes as count `0` with no element bytes.
    pub fn write_seq<T: Ser>(&mut self, items: &[T]) -> Result<WriteLen> {
        let mut w_len = *ElemCount::from_items(items)?.ser(self)?;
        for item in items {
            w_len += *item.ser(self)?;
        }
        Ok(WriteLen(w_len))
    }
}

impl Default for WireWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// Ordered concatenation of byte sequences into a single exact-capacity
/// allocation. Inputs are untouched; runs in time linear in total output
/// size.
pub fn join_bytes<B: AsRef<[u8]>>(parts: &[B]) -> Vec<u8> {
    let total_len = parts.iter().map(|part| part.as_ref().len()).sum();
    let mut joined = Vec::with_capacity(total_len);
    for part in parts {
        joined.extend_from_slice(part.as_ref());
    }
    joined
}
