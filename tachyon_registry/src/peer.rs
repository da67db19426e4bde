use crate::plugin::{DecodeFn, EncodeFn};
use anyhow::Result;

/// The external transport's type-registration surface. The peer owns
/// connection lifecycle, message dispatch, and lookup-by-code during
/// normal message flow; this crate only hands it each validated
/// `(code, encode, decode)` triple, once per type.
pub trait PeerTransport: Send + Sync {
    fn register_type(
        &self,
        type_name: &'static str,
        code: u8,
        encode: EncodeFn,
        decode: DecodeFn,
    ) -> Result<()>;
}
