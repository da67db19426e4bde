#[cfg(test)]
mod test {
    use crate::plugin::{decode_erased, DecodeFn, EncodeFn};
    use crate::{
        CandidateOp, Lookup, OpKind, PeerTransport, RegistryError, TypeCandidate, TypeRegistry,
        WireType,
    };
    use anyhow::Result;
    use std::any::{Any, TypeId};
    use std::sync::{Arc, Mutex};
    use tachyon_types::wire::{WireReader, WireWriter};

    #[derive(PartialEq, Debug)]
    struct Health {
        current: i32,
        max: i32,
    }
    impl WireType for Health {
        fn encode(&self) -> Result<Vec<u8>> {
            let mut w = WireWriter::new();
            w.write_i32(self.current)?;
            w.write_i32(self.max)?;
            Ok(w.into_bytes())
        }
        fn decode(buf: &[u8]) -> Result<Self> {
            let mut r = WireReader::new(buf);
            let current = r.read_i32()?;
            let max = r.read_i32()?;
            Ok(Self { current, max })
        }
    }

    fn candidate_sans_encode() -> TypeCandidate {
        TypeCandidate {
            type_name: "fake::Unencodable",
            type_id: TypeId::of::<()>(),
            encode: None,
            decode: Some(CandidateOp::Static(decode_erased::<Health> as DecodeFn)),
        }
    }

    fn candidate_instance_bound_encode() -> TypeCandidate {
        TypeCandidate {
            type_name: "fake::InstanceBound",
            type_id: TypeId::of::<()>(),
            encode: Some(CandidateOp::Instance),
            decode: Some(CandidateOp::Static(decode_erased::<Health> as DecodeFn)),
        }
    }

    fn assert_registry_err(res: Result<()>, expected: RegistryError) {
        let err = res.unwrap_err();
        assert_eq!(err.downcast_ref::<RegistryError>(), Some(&expected));
    }

    #[test]
    fn register_then_roundtrip_through_erased_fns() -> Result<()> {
        let registry = TypeRegistry::new();
        registry.register::<Health>(b'H')?;

        let entry = match registry.lookup(b'H') {
            Lookup::Registered(entry) => entry,
            _ => panic!("expected Registered"),
        };
        assert_eq!(entry.type_id, TypeId::of::<Health>());
        assert_eq!(entry.code, b'H');

        let value = Health {
            current: 71,
            max: 100,
        };
        let bytes = (entry.encode)(&value as &dyn Any)?;
        assert_eq!(bytes, [0, 0, 0, 0x47, 0, 0, 0, 0x64]);

        let decoded = (entry.decode)(&bytes)?;
        let decoded = decoded.downcast_ref::<Health>();
        assert_eq!(decoded, Some(&value));

        Ok(())
    }

    #[test]
    fn encode_fn_rejects_wrong_type() -> Result<()> {
        let registry = TypeRegistry::new();
        registry.register::<Health>(b'H')?;

        let entry = match registry.lookup(b'H') {
            Lookup::Registered(entry) => entry,
            _ => panic!("expected Registered"),
        };
        let not_a_health = 5i32;
        assert!((entry.encode)(&not_a_health as &dyn Any).is_err());

        Ok(())
    }

    #[test]
    fn missing_operation_is_refused_and_remembered() {
        let registry = TypeRegistry::new();

        let res = registry.register_candidate(2, candidate_sans_encode());
        assert_registry_err(
            res,
            RegistryError::MissingOperation {
                type_name: "fake::Unencodable",
                op: OpKind::Encode,
            },
        );

        // Rejected is distinct from never-attempted.
        assert!(matches!(registry.lookup(2), Lookup::Rejected(_)));
        assert!(matches!(registry.lookup(3), Lookup::Unknown));
        assert_eq!(registry.registered_count(), 0);
    }

    #[test]
    fn instance_bound_operation_is_refused() {
        let registry = TypeRegistry::new();

        let res = registry.register_candidate(2, candidate_instance_bound_encode());
        assert_registry_err(
            res,
            RegistryError::NotStaticOperation {
                type_name: "fake::InstanceBound",
                op: OpKind::Encode,
            },
        );
        assert!(matches!(registry.lookup(2), Lookup::Rejected(_)));
    }

    #[test]
    fn refusal_leaves_prior_registrations_intact() -> Result<()> {
        let registry = TypeRegistry::new();
        registry.register::<Health>(1)?;

        registry
            .register_candidate(2, candidate_sans_encode())
            .unwrap_err();

        assert!(matches!(registry.lookup(1), Lookup::Registered(_)));
        assert!(matches!(registry.lookup(2), Lookup::Rejected(_)));
        assert_eq!(registry.registered_count(), 1);

        Ok(())
    }

    #[test]
    fn duplicate_code_is_refused() -> Result<()> {
        let registry = TypeRegistry::new();
        registry.register::<Health>(7)?;

        let res = registry.register_candidate(7, candidate_sans_encode());
        assert_registry_err(
            res,
            RegistryError::DuplicateCode {
                code: 7,
                existing: std::any::type_name::<Health>(),
            },
        );

        // The original entry survives.
        match registry.lookup(7) {
            Lookup::Registered(entry) => assert_eq!(entry.type_id, TypeId::of::<Health>()),
            _ => panic!("expected Registered"),
        }

        Ok(())
    }

    #[derive(Default)]
    struct RecordingPeer {
        seen: Mutex<Vec<(u8, &'static str)>>,
    }
    impl PeerTransport for RecordingPeer {
        fn register_type(
            &self,
            type_name: &'static str,
            code: u8,
            _encode: EncodeFn,
            _decode: DecodeFn,
        ) -> Result<()> {
            self.seen.lock().unwrap().push((code, type_name));
            Ok(())
        }
    }

    #[test]
    fn peer_sees_each_validated_type_once() -> Result<()> {
        let peer = Arc::new(RecordingPeer::default());
        let registry = TypeRegistry::with_peer(Arc::clone(&peer) as Arc<dyn PeerTransport>);

        registry.register::<Health>(b'H')?;
        registry
            .register_candidate(2, candidate_sans_encode())
            .unwrap_err();

        let seen = peer.seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![(b'H', std::any::type_name::<Health>())]
        );

        Ok(())
    }

    #[test]
    fn concurrent_registration_of_distinct_codes() {
        let registry = TypeRegistry::new();

        std::thread::scope(|scope| {
            for code in 0u8..8 {
                let registry = &registry;
                scope.spawn(move || registry.register::<Health>(code).unwrap());
            }
        });

        assert_eq!(registry.registered_count(), 8);
        for code in 0u8..8 {
            assert!(matches!(registry.lookup(code), Lookup::Registered(_)));
        }
    }
}
