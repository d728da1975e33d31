//! `Field` table (ID 0x04). Fields are owned in contiguous runs by `TypeDef` rows.
//!
//! See ECMA-335, Partition II, Section 22.15.

#[allow(non_snake_case)]
/// Field attribute flag constants.
///
/// The low three bits are an access *enumeration*, not independent bits; compare the masked
/// value rather than testing single bits.
pub mod FieldAttributes {
    /// Mask for the 3-bit member access enumeration
    pub const FIELD_ACCESS_MASK: u32 = 0x0007;
    /// Member not referenceable
    pub const COMPILER_CONTROLLED: u32 = 0x0000;
    /// Accessible only by the parent type
    pub const PRIVATE: u32 = 0x0001;
    /// Accessible by sub-types only in this Assembly
    pub const FAM_AND_ASSEM: u32 = 0x0002;
    /// Accessibly by anyone in the Assembly
    pub const ASSEMBLY: u32 = 0x0003;
    /// Accessible only by type and sub-types
    pub const FAMILY: u32 = 0x0004;
    /// Accessibly by sub-types anywhere, plus anyone in assembly
    pub const FAM_OR_ASSEM: u32 = 0x0005;
    /// Accessibly by anyone who has visibility to this scope field contract attributes
    pub const PUBLIC: u32 = 0x0006;
    /// Defined on type, else per instance
    pub const STATIC: u32 = 0x0010;
    /// Field can only be initialized, not written to after init
    pub const INIT_ONLY: u32 = 0x0020;
    /// Value is compile time constant
    pub const LITERAL: u32 = 0x0040;
}

#[derive(Clone, Debug, PartialEq, Default)]
/// A `Field` row with its heap indices already resolved.
pub struct FieldRow {
    /// a 2-byte bitmask of type `FieldAttributes`
    pub flags: u32,
    /// The field name
    pub name: String,
    /// The `FieldSig` signature blob
    pub signature: Vec<u8>,
}
