use crate::wire::{WireReader, WireWriter, WriteLen};
use anyhow::Result;
use derive_more::Deref;

/// Byte count of a string or raw-buffer body. Carried on the wire through
/// the i32 codec; a decoded prefix `<= 0` means the empty body.
#[derive(Deref, Clone, Copy)]
pub struct BodyLen(u32);
impl BodyLen {
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let int = u32::try_from(body.len())?;
        Ok(Self(int))
    }
    pub fn ser(&self, w: &mut WireWriter) -> Result<WriteLen> {
        let int = i32::try_from(self.0)?;
        w.write_i32(int)
    }
    pub fn deser(r: &mut WireReader) -> Result<Self> {
        let int = r.read_i32()?;
        let int = u32::try_from(int).unwrap_or(0);
        Ok(Self(int))
    }
}

/// Element count of an encoded sequence. Same wire representation and
/// `<= 0` handling as [`BodyLen`].
#[derive(Deref, Clone, Copy)]
pub struct ElemCount(u32);
impl ElemCount {
    pub fn from_items<T>(items: &[T]) -> Result<Self> {
        let int = u32::try_from(items.len())?;
        Ok(Self(int))
    }
    pub fn ser(&self, w: &mut WireWriter) -> Result<WriteLen> {
        let int = i32::try_from(self.0)?;
        w.write_i32(int)
    }
    pub fn deser(r: &mut WireReader) -> Result<Self> {
        let int = r.read_i32()?;
        let int = u32::try_from(int).unwrap_or(0);
        Ok(Self(int))
    }
}
