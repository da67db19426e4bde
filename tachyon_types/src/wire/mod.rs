//! # Wire format
//!
//! Every value is encoded standalone, big-endian, with no header, version
//! tag, or checksum. The consuming transport frames messages and hands the
//! decoder a complete buffer. The format is not self-describing: the caller
//! knows each value's type; only string/buffer lengths and sequence counts
//! are embedded.
//!
//! The below pseudocode depicts the encoded representations.
//!
//! ```text
//! i32 {
//!     body:       [u8; 4],    // big-endian two's complement
//! }
//!
//! f32 {
//!     body:       [u8; 4],    // big-endian IEEE-754
//! }
//!
//! bool {
//!     body:       u8,         // 0x00 = false, nonzero = true
//! }
//!
//! byte {
//!     body:       u8,         // raw
//! }
//!
//! string {
//!     body_len:   i32,        // count of UTF-8 bytes; 0 for the empty string
//!     body:       [u8; body_len],
//! }
//!
//! byte buffer {
//!     body_len:   i32,
//!     body:       [u8; body_len],
//! }
//!
//! Vector2    { x: f32, y: f32 }
//! Vector3    { x: f32, y: f32, z: f32 }
//! Quaternion { x: f32, y: f32, z: f32, w: f32 }
//!
//! sequence<T> {
//!     elem_count: i32,        // 0 for the empty sequence
//!     elems:      [T; elem_count],
//! }
//! ```
//!
//! Multi-byte integers/floats are normalized to wire order through the
//! explicit transforms in [`order`]. String content bytes go through the
//! same transform as numeric bytes (see [`WireWriter::write_str`]); raw
//! byte buffers do not.

mod error;
mod lengths;
pub mod order;
mod reader;
mod serializable;
mod writer;

pub use error::*;
pub use lengths::*;
pub use reader::*;
pub use serializable::*;
pub use writer::*;
