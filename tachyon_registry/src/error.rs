use derive_more::Display;

#[derive(Display, PartialEq, Eq, Clone, Copy, Debug)]
pub enum OpKind {
    #[display(fmt = "encode")]
    Encode,
    #[display(fmt = "decode")]
    Decode,
}

/// Why a registration was refused. Each aborts that one registration only;
/// previously registered types and the registry itself are unaffected, and
/// the caller may retry or skip the type.
#[derive(Display, PartialEq, Eq, Clone, Copy, Debug)]
pub enum RegistryError {
    #[display(fmt = "type \"{}\" has no usable {} operation", type_name, op)]
    MissingOperation {
        type_name: &'static str,
        op: OpKind,
    },
    #[display(
        fmt = "{} operation of type \"{}\" requires an instance; it must be a type-level operation",
        op,
        type_name
    )]
    NotStaticOperation {
        type_name: &'static str,
        op: OpKind,
    },
    #[display(
        fmt = "type code {:#04x} is already registered to type \"{}\"",
        code,
        existing
    )]
    DuplicateCode { code: u8, existing: &'static str },
}

impl std::error::Error for RegistryError {}
