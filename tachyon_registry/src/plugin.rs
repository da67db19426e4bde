use anyhow::{anyhow, Result};
use std::any::{self, Any};

/// The structured-type plugin contract: exactly two type-level operations
/// with a fixed, agreed field order. Field order is part of the wire
/// contract; reordering fields breaks compatibility with
/// previously-serialized data.
///
/// Both operations are associated with the type, not an instance, so a
/// trait impl can never fail the registry's static-operation validation.
pub trait WireType: Any {
    /// The complete wire encoding of `self`, fields in declared order.
    fn encode(&self) -> Result<Vec<u8>>;

    /// The exact inverse of [`WireType::encode`].
    fn decode(buf: &[u8]) -> Result<Self>
    where
        Self: Sized;
}

/// Type-erased encode operation, as handed to the peer. A plain `fn`
/// pointer: invocable without an instance.
pub type EncodeFn = fn(&dyn Any) -> Result<Vec<u8>>;

/// Type-erased decode operation.
pub type DecodeFn = fn(&[u8]) -> Result<Box<dyn Any>>;

pub(crate) fn encode_erased<T: WireType>(value: &dyn Any) -> Result<Vec<u8>> {
    let value = value
        .downcast_ref::<T>()
        .ok_or_else(|| anyhow!("Value is not a {}", any::type_name::<T>()))?;
    value.encode()
}

pub(crate) fn decode_erased<T: WireType>(buf: &[u8]) -> Result<Box<dyn Any>> {
    let value = T::decode(buf)?;
    Ok(Box::new(value))
}
