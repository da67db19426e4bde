use crate::error::{OpKind, RegistryError};
use crate::plugin::{decode_erased, encode_erased, DecodeFn, EncodeFn, WireType};
use std::any::{self, TypeId};

/// How a candidate operation is invocable.
pub enum CandidateOp<F> {
    /// Type-level; usable by the peer.
    Static(F),
    /// Bound to an instance; the peer has none to offer.
    Instance,
}

/// A structured type proposed for registration. Validated exactly once, at
/// registration time, not at each use.
pub struct TypeCandidate {
    pub type_name: &'static str,
    pub type_id: TypeId,
    pub encode: Option<CandidateOp<EncodeFn>>,
    pub decode: Option<CandidateOp<DecodeFn>>,
}

impl TypeCandidate {
    /// The candidate derived from a [`WireType`] impl. Both operations are
    /// static by construction, so validation cannot fail on this path.
    pub fn of<T: WireType>() -> Self {
        Self {
            type_name: any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            encode: Some(CandidateOp::Static(encode_erased::<T> as EncodeFn)),
            decode: Some(CandidateOp::Static(decode_erased::<T> as DecodeFn)),
        }
    }

    pub(crate) fn validate(self) -> Result<(EncodeFn, DecodeFn), RegistryError> {
        let encode = Self::validate_op(self.type_name, OpKind::Encode, self.encode)?;
        let decode = Self::validate_op(self.type_name, OpKind::Decode, self.decode)?;
        Ok((encode, decode))
    }

    fn validate_op<F>(
        type_name: &'static str,
        op: OpKind,
        candidate_op: Option<CandidateOp<F>>,
    ) -> Result<F, RegistryError> {
        match candidate_op {
            None => Err(RegistryError::MissingOperation { type_name, op }),
            Some(CandidateOp::Instance) => Err(RegistryError::NotStaticOperation { type_name, op }),
            Some(CandidateOp::Static(f)) => Ok(f),
        }
    }
}
