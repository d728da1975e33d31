//! `InterfaceImpl` table (ID 0x09).
//!
//! One row per (class, interface) pair. The table is sorted ascending by `class`, so all
//! interfaces of one type form a contiguous block that can be found with a binary search.
//!
//! See ECMA-335, Partition II, Section 22.23.

use crate::metadata::tables::{CodedIndex, OwnedRow, TableId, TableRef};

#[derive(Clone, Debug, PartialEq)]
/// An `InterfaceImpl` row.
pub struct InterfaceImplRow {
    /// an index into the `TypeDef` table
    pub class: u32,
    /// The implemented interface; a `TypeDefOrRef` coded index
    pub interface: CodedIndex,
}

impl OwnedRow for InterfaceImplRow {
    fn owner(&self) -> TableRef {
        TableRef::new(TableId::TypeDef, self.class)
    }

    fn owner_key(owner: TableRef) -> Option<u64> {
        match owner.table {
            TableId::TypeDef => Some(u64::from(owner.row)),
            _ => None,
        }
    }
}
