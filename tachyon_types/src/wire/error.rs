use derive_more::Display;

/// A decode-time data-integrity fault. Surfaced to the caller as-is;
/// never retried or papered over internally.
#[derive(Display, PartialEq, Eq, Clone, Copy, Debug)]
pub enum WireError {
    /// The cursor plus the required byte count would cross the buffer end.
    /// Indicates transport corruption or mismatched field order between
    /// the encoding and decoding endpoints.
    #[display(
        fmt = "decode out of bounds: need {} byte(s) at offset {}, buffer len {}",
        needed,
        offset,
        len
    )]
    OutOfBounds {
        needed: usize,
        offset: usize,
        len: usize,
    },
}

impl std::error::Error for WireError {}
