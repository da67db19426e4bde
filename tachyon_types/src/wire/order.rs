//! Byte-order normalization.
//!
//! The wire carries multi-byte values big-endian. A value's native-order
//! bytes are produced first, then reversed whenever the host is
//! little-endian. Each transform is its own inverse over the same byte
//! window, so `from_wire(to_wire(b)) == b` on every host.

/// Native-order bytes to wire-order bytes.
pub fn to_wire<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    if cfg!(target_endian = "little") {
        bytes.reverse();
    }
    bytes
}

/// Wire-order bytes to native-order bytes.
pub fn from_wire<const N: usize>(bytes: [u8; N]) -> [u8; N] {
    to_wire(bytes)
}

/// [`to_wire`] over a variable-length window.
pub fn to_wire_in_place(bytes: &mut [u8]) {
    if cfg!(target_endian = "little") {
        bytes.reverse();
    }
}

/// [`from_wire`] over a variable-length window.
pub fn from_wire_in_place(bytes: &mut [u8]) {
    to_wire_in_place(bytes);
}
