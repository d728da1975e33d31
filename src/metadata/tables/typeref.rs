//! `TypeRef` table (ID 0x01): types defined in another module or assembly.
//!
//! See ECMA-335, Partition II, Section 22.38.

use crate::metadata::tables::NamedType;

#[derive(Clone, Debug, PartialEq)]
/// A `TypeRef` row with its heap indices already resolved.
pub struct TypeRefRow {
    /// The simple name of the referenced type
    pub type_name: String,
    /// The namespace of the referenced type
    pub type_namespace: String,
}

impl NamedType for TypeRefRow {
    fn name(&self) -> &str {
        &self.type_name
    }

    fn namespace(&self) -> &str {
        &self.type_namespace
    }
}
