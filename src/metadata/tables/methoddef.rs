//! `MethodDef` table (ID 0x06).
//!
//! Methods are owned in contiguous runs by `TypeDef` rows, and each method in turn owns a
//! contiguous run of `Param` rows starting at `param_list`.
//!
//! See ECMA-335, Partition II, Section 22.26.

#[allow(non_snake_case)]
/// Method attribute flag constants.
pub mod MethodAttributes {
    /// Mask for the 3-bit member access enumeration
    pub const MEMBER_ACCESS_MASK: u32 = 0x0007;
    /// Member not referenceable
    pub const COMPILER_CONTROLLED: u32 = 0x0000;
    /// Accessible only by the parent type
    pub const PRIVATE: u32 = 0x0001;
    /// Accessible by sub-types only in this Assembly
    pub const FAM_AND_ASSEM: u32 = 0x0002;
    /// Accessibly by anyone in the Assembly
    pub const ASSEM: u32 = 0x0003;
    /// Accessible only by type and sub-types
    pub const FAMILY: u32 = 0x0004;
    /// Accessibly by sub-types anywhere, plus anyone in assembly
    pub const FAM_OR_ASSEM: u32 = 0x0005;
    /// Accessibly by anyone who has visibility to this scope
    pub const PUBLIC: u32 = 0x0006;
    /// Defined on type, else per instance
    pub const STATIC: u32 = 0x0010;
    /// Method may not be overridden
    pub const FINAL: u32 = 0x0020;
    /// Method is virtual
    pub const VIRTUAL: u32 = 0x0040;
    /// Method is abstract
    pub const ABSTRACT: u32 = 0x0400;
}

#[derive(Clone, Debug, PartialEq, Default)]
/// A `MethodDef` row with its heap indices already resolved.
pub struct MethodDefRow {
    /// a 2-byte bitmask of type `MethodAttributes`
    pub flags: u32,
    /// The method name
    pub name: String,
    /// The `MethodDefSig` signature blob
    pub signature: Vec<u8>,
    /// an index into the Param table; it marks the first of a contiguous run of Parameters owned by this method
    pub param_list: u32,
}
