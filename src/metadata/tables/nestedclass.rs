//! `NestedClass` table (ID 0x29).
//!
//! Pairs each nested `TypeDef` with its enclosing `TypeDef`. The table is sorted by the nested
//! class, not the enclosing one, so finding all children of a type needs a full scan.
//!
//! See ECMA-335, Partition II, Section 22.32.

#[derive(Clone, Debug, PartialEq, Default)]
/// A `NestedClass` row.
pub struct NestedClassRow {
    /// an index into the `TypeDef` table, the nested type
    pub nested_class: u32,
    /// an index into the `TypeDef` table, the enclosing type
    pub enclosing_class: u32,
}
