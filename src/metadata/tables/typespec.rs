//! `TypeSpec` table (ID 0x1B).
//!
//! Type specifications are anonymous: they carry only a signature blob (a generic
//! instantiation, an array, a pointer...). For naming purposes they answer with fixed
//! placeholder values.
//!
//! See ECMA-335, Partition II, Section 22.39.

use crate::metadata::tables::NamedType;

/// Name reported for every type specification
pub const TYPE_SPEC_NAME: &str = "spec";

/// Namespace reported for every type specification
pub const TYPE_SPEC_NAMESPACE: &str = "unknown";

#[derive(Clone, Debug, PartialEq, Default)]
/// A `TypeSpec` row with its blob index already resolved.
pub struct TypeSpecRow {
    /// The `TypeSpec` signature blob
    pub signature: Vec<u8>,
}

impl NamedType for TypeSpecRow {
    fn name(&self) -> &str {
        TYPE_SPEC_NAME
    }

    fn namespace(&self) -> &str {
        TYPE_SPEC_NAMESPACE
    }
}
