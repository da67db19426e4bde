//! Process-wide registration of structured ("custom") types with a network
//! peer, under caller-assigned one-byte type codes.
//!
//! A structured type participates by implementing [`WireType`]: two
//! type-level operations, `encode(instance) -> bytes` and
//! `decode(bytes) -> instance`, which internally call the
//! `tachyon_types::wire` codecs field by field in a fixed declared order.
//! [`TypeRegistry`] validates a candidate once at registration time,
//! installs the type-erased function pair, and forwards it to the external
//! [`PeerTransport`].

mod candidate;
mod error;
mod peer;
mod plugin;
mod registry;
mod registry_test;

pub use candidate::*;
pub use error::*;
pub use peer::*;
pub use plugin::*;
pub use registry::*;
