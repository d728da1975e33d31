//! `Param` table (ID 0x08). Parameters are owned in contiguous runs by `MethodDef` rows.
//!
//! See ECMA-335, Partition II, Section 22.33.

#[derive(Clone, Debug, PartialEq, Default)]
/// A `Param` row with its heap indices already resolved.
pub struct ParamRow {
    /// a 2-byte bitmask of type `ParamAttributes`
    pub flags: u32,
    /// Position of the parameter; 0 describes the return value
    pub sequence: u32,
    /// The parameter name
    pub name: String,
}
