//! `GenericParam` table (ID 0x2A).
//!
//! Declares the generic parameters of types and methods. The table is sorted by `owner`, a
//! `TypeOrMethodDef` coded index, and within one owner by `number`. The sort key is the raw
//! coded index value, which interleaves owners as `TypeDef 1, MethodDef 1, TypeDef 2, ...`.
//!
//! See ECMA-335, Partition II, Section 22.20.

use crate::metadata::tables::{CodedIndex, CodedIndexType, OwnedRow, TableRef};

#[derive(Clone, Debug, PartialEq)]
/// A `GenericParam` row with its heap indices already resolved.
pub struct GenericParamRow {
    /// 0-based ordinal of the parameter, left to right
    pub number: u32,
    /// a 2-byte bitmask of type `GenericParamAttributes`
    pub flags: u32,
    /// The declaring type or method; a `TypeOrMethodDef` coded index
    pub owner: CodedIndex,
    /// The parameter name
    pub name: String,
}

impl OwnedRow for GenericParamRow {
    fn owner(&self) -> TableRef {
        self.owner.reference()
    }

    fn owner_key(owner: TableRef) -> Option<u64> {
        CodedIndexType::TypeOrMethodDef
            .encode(owner.table, owner.row)
            .map(u64::from)
    }

    fn ordinal(&self) -> u32 {
        self.number
    }
}
