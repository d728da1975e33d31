use crate::metadata::tables::{
    FieldRow, GenericParamRow, InterfaceImplRow, MethodDefRow, NestedClassRow, ParamRow, TableId,
    TableRef, TypeDefRow, TypeRefRow, TypeSpecRow,
};

/// One row of any supported table, borrowed from the store that owns it.
#[derive(Clone, Copy, Debug)]
pub enum TableRow<'a> {
    /// A `TypeRef` row
    TypeRef(&'a TypeRefRow),
    /// A `TypeDef` row
    TypeDef(&'a TypeDefRow),
    /// A `Field` row
    Field(&'a FieldRow),
    /// A `MethodDef` row
    MethodDef(&'a MethodDefRow),
    /// A `Param` row
    Param(&'a ParamRow),
    /// An `InterfaceImpl` row
    InterfaceImpl(&'a InterfaceImplRow),
    /// A `TypeSpec` row
    TypeSpec(&'a TypeSpecRow),
    /// A `NestedClass` row
    NestedClass(&'a NestedClassRow),
    /// A `GenericParam` row
    GenericParam(&'a GenericParamRow),
}

impl TableRow<'_> {
    /// The table this row belongs to
    #[must_use]
    pub fn table(&self) -> TableId {
        match self {
            TableRow::TypeRef(_) => TableId::TypeRef,
            TableRow::TypeDef(_) => TableId::TypeDef,
            TableRow::Field(_) => TableId::Field,
            TableRow::MethodDef(_) => TableId::MethodDef,
            TableRow::Param(_) => TableId::Param,
            TableRow::InterfaceImpl(_) => TableId::InterfaceImpl,
            TableRow::TypeSpec(_) => TableId::TypeSpec,
            TableRow::NestedClass(_) => TableId::NestedClass,
            TableRow::GenericParam(_) => TableId::GenericParam,
        }
    }
}

/// A typed table row.
///
/// Ties a row struct to its [`TableId`] and allows narrowing an untyped [`TableRow`] back to it.
pub trait Row: Sized + Send + Sync + 'static {
    /// The table rows of this type live in
    const TABLE: TableId;

    /// Narrow `row` to `Self`, or `None` if it belongs to another table
    fn from_table_row(row: TableRow<'_>) -> Option<&'_ Self>;

    /// Wrap a reference to this row as an untyped [`TableRow`]
    fn as_table_row(&self) -> TableRow<'_>;
}

macro_rules! impl_row {
    ($raw:ty, $id:expr, $variant:ident) => {
        impl Row for $raw {
            const TABLE: TableId = $id;

            fn from_table_row(row: TableRow<'_>) -> Option<&'_ Self> {
                match row {
                    TableRow::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn as_table_row(&self) -> TableRow<'_> {
                TableRow::$variant(self)
            }
        }
    };
}

impl_row!(TypeRefRow, TableId::TypeRef, TypeRef);
impl_row!(TypeDefRow, TableId::TypeDef, TypeDef);
impl_row!(FieldRow, TableId::Field, Field);
impl_row!(MethodDefRow, TableId::MethodDef, MethodDef);
impl_row!(ParamRow, TableId::Param, Param);
impl_row!(InterfaceImplRow, TableId::InterfaceImpl, InterfaceImpl);
impl_row!(TypeSpecRow, TableId::TypeSpec, TypeSpec);
impl_row!(NestedClassRow, TableId::NestedClass, NestedClass);
impl_row!(GenericParamRow, TableId::GenericParam, GenericParam);

/// A row tied to an owning row through a key column the table is sorted by.
///
/// The owner-sorted tables (`InterfaceImpl`, `GenericParam`) implement this so a binary search
/// can locate the block of rows belonging to one owner.
pub trait OwnedRow: Row {
    /// The row this row belongs to
    fn owner(&self) -> TableRef;

    /// Position of `owner` in this table's sort order.
    ///
    /// `None` means rows of this table can never belong to `owner` (its table is not part of
    /// the owner column's domain).
    fn owner_key(owner: TableRef) -> Option<u64>;

    /// Secondary sort key within one owner's block
    fn ordinal(&self) -> u32 {
        0
    }
}
