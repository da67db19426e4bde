use crate::types::{Quaternion, Vector2, Vector3};
use crate::wire::{order, BodyLen, Deser, ElemCount, WireError};
use anyhow::Result;

/// A cursor over an immutable input buffer with one `read_*` per primitive
/// kind. Every successful read advances the cursor by exactly the bytes it
/// consumed; `0 <= offset() <= buffer len` holds at every step.
///
/// Bounds are checked before any byte access. A read that would cross the
/// buffer end fails with [`WireError::OutOfBounds`]; the failing access
/// does not advance the cursor.
pub struct WireReader<'a> {
    buf: &'a [u8],
    offset: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.offset
    }
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], WireError> {
        if needed > self.remaining() {
            return Err(WireError::OutOfBounds {
                needed,
                offset: self.offset,
                len: self.buf.len(),
            });
        }
        let taken = &self.buf[self.offset..self.offset + needed];
        self.offset += needed;
        Ok(taken)
    }

    fn take_fixed<const N: usize>(&mut self) -> Result<[u8; N], WireError> {
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(self.take(N)?);
        Ok(bytes)
    }

    pub fn read_i32(&mut self) -> Result<i32> {
        let bytes = self.take_fixed::<4>()?;
        Ok(i32::from_ne_bytes(order::from_wire(bytes)))
    }

    pub fn read_f32(&mut self) -> Result<f32> {
        let bytes = self.take_fixed::<4>()?;
        Ok(f32::from_ne_bytes(order::from_wire(bytes)))
    }

    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.take(1)?[0] != 0)
    }

    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Inverse of [`WireWriter::write_str`]: the content bytes are passed
    /// back through the wire-order transform before UTF-8 decoding.
    ///
    /// [`WireWriter::write_str`]: crate::wire::WireWriter::write_str
    pub fn read_string(&mut self) -> Result<String> {
        let body_len = BodyLen::deser(self)?;
        let mut body = self.take(*body_len as usize)?.to_vec();
        order::from_wire_in_place(&mut body);
        Ok(String::from_utf8(body)?)
    }

    pub fn read_bytes(&mut self) -> Result<Vec<u8>> {
        let body_len = BodyLen::deser(self)?;
        Ok(self.take(*body_len as usize)?.to_vec())
    }

    pub fn read_vector2(&mut self) -> Result<Vector2> {
        let x = self.read_f32()?;
        let y = self.read_f32()?;
        Ok(Vector2 { x, y })
    }

    pub fn read_vector3(&mut self) -> Result<Vector3> {
        let x = self.read_f32()?;
        let y = self.read_f32()?;
        let z = self.read_f32()?;
        Ok(Vector3 { x, y, z })
    }

    pub fn read_quaternion(&mut self) -> Result<Quaternion> {
        let x = self.read_f32()?;
        let y = self.read_f32()?;
        let z = self.read_f32()?;
        let w = self.read_f32()?;
        Ok(Quaternion { x, y, z, w })
    }

    /// Inverse of [`WireWriter::write_seq`]. The preallocation is clamped
    /// to the remaining buffer length, so a corrupt count cannot balloon
    /// allocation; decoding then fails on the first missing element.
    ///
    /// [`WireWriter::write_seq`]: crate::wire::WireWriter::write_seq
    pub fn read_seq<T: Deser>(&mut self) -> Result<Vec<T>> {
        let count = *ElemCount::deser(self)? as usize;
        let mut items = Vec::with_capacity(count.min(self.remaining()));
        for _ in 0..count {
            items.push(T::deser(self)?);
        }
        Ok(items)
    }
}
