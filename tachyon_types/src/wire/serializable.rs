use crate::types::{Quaternion, Vector2, Vector3};
use crate::wire::{WireReader, WireWriter, WriteLen};
use anyhow::Result;

/// One impl per primitive kind, delegating to the corresponding
/// [`WireWriter`] method. Lets sequence framing and structured-type codecs
/// stay generic over element kind.
pub trait Ser {
    fn ser(&self, w: &mut WireWriter) -> Result<WriteLen>;
}

pub trait Deser: Sized {
    fn deser(r: &mut WireReader) -> Result<Self>;
}

impl Ser for i32 {
    fn ser(&self, w: &mut WireWriter) -> Result<WriteLen> {
        w.write_i32(*self)
    }
}
impl Deser for i32 {
    fn deser(r: &mut WireReader) -> Result<Self> {
        r.read_i32()
    }
}

impl Ser for f32 {
    fn ser(&self, w: &mut WireWriter) -> Result<WriteLen> {
        w.write_f32(*self)
    }
}
impl Deser for f32 {
    fn deser(r: &mut WireReader) -> Result<Self> {
        r.read_f32()
    }
}

impl Ser for bool {
    fn ser(&self, w: &mut WireWriter) -> Result<WriteLen> {
        w.write_bool(*self)
    }
}
impl Deser for bool {
    fn deser(r: &mut WireReader) -> Result<Self> {
        r.read_bool()
    }
}

impl Ser for u8 {
    fn ser(&self, w: &mut WireWriter) -> Result<WriteLen> {
        w.write_byte(*self)
    }
}
impl Deser for u8 {
    fn deser(r: &mut WireReader) -> Result<Self> {
        r.read_byte()
    }
}

impl Ser for String {
    fn ser(&self, w: &mut WireWriter) -> Result<WriteLen> {
        w.write_str(self)
    }
}
impl Deser for String {
    fn deser(r: &mut WireReader) -> Result<Self> {
        r.read_string()
    }
}

impl Ser for Vector2 {
    fn ser(&self, w: &mut WireWriter) -> Result<WriteLen> {
        w.write_vector2(*self)
    }
}
impl Deser for Vector2 {
    fn deser(r: &mut WireReader) -> Result<Self> {
        r.read_vector2()
    }
}

impl Ser for Vector3 {
    fn ser(&self, w: &mut WireWriter) -> Result<WriteLen> {
        w.write_vector3(*self)
    }
}
impl Deser for Vector3 {
    fn deser(r: &mut WireReader) -> Result<Self> {
        r.read_vector3()
    }
}

impl Ser for Quaternion {
    fn ser(&self, w: &mut WireWriter) -> Result<WriteLen> {
        w.write_quaternion(*self)
    }
}
impl Deser for Quaternion {
    fn deser(r: &mut WireReader) -> Result<Self> {
        r.read_quaternion()
    }
}
