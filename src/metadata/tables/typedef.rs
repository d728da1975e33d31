//! `TypeDef` table (ID 0x02).
//!
//! Defines every type (class, interface, value type, enum, delegate) of the module. Each row
//! stores only the *first* row of the contiguous runs it owns in the `Field` and `MethodDef`
//! tables; the end of a run is the start of the next `TypeDef` row's run:
//! ```text
//! // Type A owns fields  [A.field_list  .. B.field_list)
//! // Type A owns methods [A.method_list .. B.method_list)
//! ```
//!
//! See ECMA-335, Partition II, Section 22.37.

use crate::metadata::tables::{CodedIndex, NamedType};

#[allow(non_snake_case)]
/// Type attribute flag constants for `TypeDef` entries.
pub mod TypeAttributes {
    /// Mask for extracting type visibility information.
    pub const VISIBILITY_MASK: u32 = 0x0000_0007;
    /// Type has no public scope (internal to assembly).
    pub const NOT_PUBLIC: u32 = 0x0000_0000;
    /// Type has public scope (visible outside assembly).
    pub const PUBLIC: u32 = 0x0000_0001;
    /// Nested type with public visibility.
    pub const NESTED_PUBLIC: u32 = 0x0000_0002;
    /// Nested type with private visibility.
    pub const NESTED_PRIVATE: u32 = 0x0000_0003;
    /// Nested type with family (protected) visibility.
    pub const NESTED_FAMILY: u32 = 0x0000_0004;
    /// Nested type with assembly (internal) visibility.
    pub const NESTED_ASSEMBLY: u32 = 0x0000_0005;
    /// Nested type with family AND assembly visibility.
    pub const NESTED_FAM_AND_ASSEM: u32 = 0x0000_0006;
    /// Nested type with family OR assembly visibility.
    pub const NESTED_FAM_OR_ASSEM: u32 = 0x0000_0007;

    /// Mask for extracting class semantics (class vs interface).
    pub const CLASS_SEMANTICS_MASK: u32 = 0x0000_0020;
    /// Type is a class.
    pub const CLASS: u32 = 0x0000_0000;
    /// Type is an interface.
    pub const INTERFACE: u32 = 0x0000_0020;

    /// Type is abstract.
    pub const ABSTRACT: u32 = 0x0000_0080;
    /// Type cannot be derived from.
    pub const SEALED: u32 = 0x0000_0100;
}

#[derive(Clone, Debug, PartialEq)]
/// A `TypeDef` row with its heap indices already resolved.
pub struct TypeDefRow {
    /// a 4-byte bitmask of type `TypeAttributes`
    pub flags: u32,
    /// The simple name of the type
    pub type_name: String,
    /// The namespace of the type, empty for the global namespace
    pub type_namespace: String,
    /// The base type; a `TypeDefOrRef` coded index, null for interfaces and `System.Object`
    pub extends: CodedIndex,
    /// an index into the Field table; it marks the first of a contiguous run of Fields owned by this Type
    pub field_list: u32,
    /// an index into the `MethodDef` table; it marks the first of a continguous run of Methods owned by this Type
    pub method_list: u32,
}

impl TypeDefRow {
    /// `true` if the class semantics bits mark this type as an interface
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.flags & TypeAttributes::CLASS_SEMANTICS_MASK == TypeAttributes::INTERFACE
    }
}

impl NamedType for TypeDefRow {
    fn name(&self) -> &str {
        &self.type_name
    }

    fn namespace(&self) -> &str {
        &self.type_namespace
    }
}
