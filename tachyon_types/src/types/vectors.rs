use derive_more::From;

/// 2-component float vector. Carries nothing beyond the two floats;
/// any math on it belongs to the consuming engine.
#[derive(From, PartialEq, Clone, Copy, Default, Debug)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}
impl Vector2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 3-component float vector.
#[derive(From, PartialEq, Clone, Copy, Default, Debug)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}
impl Vector3 {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// 4-component rotation. Field order `x, y, z, w` is the wire order.
#[derive(From, PartialEq, Clone, Copy, Default, Debug)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}
impl Quaternion {
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }
}
