use crate::candidate::TypeCandidate;
use crate::error::RegistryError;
use crate::peer::PeerTransport;
use crate::plugin::{DecodeFn, EncodeFn, WireType};
use anyhow::Result;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A successfully installed type. Once registered, a code maps to the same
/// function pair for the registry's lifetime.
pub struct RegisteredType {
    pub type_name: &'static str,
    pub type_id: TypeId,
    pub code: u8,
    pub encode: EncodeFn,
    pub decode: DecodeFn,
}

/// Outcome of [`TypeRegistry::lookup`].
pub enum Lookup {
    Registered(Arc<RegisteredType>),
    /// A registration was attempted under this code and refused.
    Rejected(RegistryError),
    /// No registration was ever attempted under this code.
    Unknown,
}

#[derive(Default)]
struct Tables {
    by_code: HashMap<u8, Arc<RegisteredType>>,
    rejected: HashMap<u8, RegistryError>,
}

/// The process-wide custom-type table, held behind an explicit handle
/// rather than ambient global state. Created at startup, queried for the
/// rest of the process lifetime, never torn down during normal operation.
///
/// Registration normally happens from a single-threaded startup phase, but
/// inserts are serialized by a lock so concurrent registration of distinct
/// codes is safe.
pub struct TypeRegistry {
    peer: Option<Arc<dyn PeerTransport>>,
    tables: Mutex<Tables>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self {
            peer: None,
            tables: Mutex::default(),
        }
    }

    /// A registry that forwards each validated registration to `peer`,
    /// exactly once per type.
    pub fn with_peer(peer: Arc<dyn PeerTransport>) -> Self {
        Self {
            peer: Some(peer),
            tables: Mutex::default(),
        }
    }

    pub fn register<T: WireType>(&self, code: u8) -> Result<()> {
        self.register_candidate(code, TypeCandidate::of::<T>())
    }

    /// Validates `candidate` and installs it under `code`.
    ///
    /// A refusal ([`RegistryError`]) aborts this registration only: the
    /// registry stays available and previously registered types are
    /// untouched. Refusals other than [`RegistryError::DuplicateCode`] are
    /// remembered, so a later [`TypeRegistry::lookup`] of this code reports
    /// [`Lookup::Rejected`] rather than [`Lookup::Unknown`].
    pub fn register_candidate(&self, code: u8, candidate: TypeCandidate) -> Result<()> {
        let entry = {
            let mut tables = self.lock_tables();

            if let Some(existing) = tables.by_code.get(&code) {
                let err = RegistryError::DuplicateCode {
                    code,
                    existing: existing.type_name,
                };
                log::error!("{}", err);
                return Err(err.into());
            }

            let type_name = candidate.type_name;
            let type_id = candidate.type_id;
            let (encode, decode) = match candidate.validate() {
                Ok(fns) => fns,
                Err(err) => {
                    log::error!("{}", err);
                    tables.rejected.insert(code, err);
                    return Err(err.into());
                }
            };

            let entry = Arc::new(RegisteredType {
                type_name,
                type_id,
                code,
                encode,
                decode,
            });
            tables.by_code.insert(code, Arc::clone(&entry));
            tables.rejected.remove(&code);
            entry
        };

        log::debug!(
            "registered custom type \"{}\" under code {:#04x}",
            entry.type_name,
            code
        );

        // The peer is external code; call it with the lock released.
        if let Some(peer) = &self.peer {
            peer.register_type(entry.type_name, code, entry.encode, entry.decode)?;
        }

        Ok(())
    }

    pub fn lookup(&self, code: u8) -> Lookup {
        let tables = self.lock_tables();
        if let Some(entry) = tables.by_code.get(&code) {
            return Lookup::Registered(Arc::clone(entry));
        }
        if let Some(err) = tables.rejected.get(&code) {
            return Lookup::Rejected(*err);
        }
        Lookup::Unknown
    }

    pub fn registered_count(&self) -> usize {
        self.lock_tables().by_code.len()
    }

    fn lock_tables(&self) -> MutexGuard<'_, Tables> {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
