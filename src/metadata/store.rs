//! The metadata store boundary.
//!
//! The resolver never parses binary metadata itself. It reads rows through a
//! [`MetadataStore`]: an immutable, fully parsed snapshot addressed by `(table, 1-based row)`.
//! [`MemoryStore`] is a ready-made implementation over in-memory [`MetadataTable`]s, used for
//! synthetic fixtures and by callers that already hold decoded rows.
//!
//! # Thread Safety
//!
//! The resolver performs no locking. Sharing one store between resolvers on several threads
//! requires the store's reads to be safe under concurrency, which is expressed by the store
//! being `Sync`. [`MemoryStore`] is `Sync`.

use crate::{
    metadata::tables::{
        FieldRow, GenericParamRow, InterfaceImplRow, MetadataTable, MethodDefRow, NestedClassRow,
        OwnedRow, ParamRow, Row, TableId, TableRef, TableRow, TypeDefRow, TypeRefRow, TypeSpecRow,
    },
    Error, Result,
};

/// Row-level read access to parsed metadata tables.
pub trait MetadataStore {
    /// Number of rows in `table`, 0 if the table is absent
    fn row_count(&self, table: TableId) -> u32;

    /// The row `rid` of `table`, or `None` for row 0 and rows past the end
    fn row_at(&self, table: TableId, rid: u32) -> Option<TableRow<'_>>;

    /// The row `rid` of `R`'s table, typed.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the row does not exist.
    fn get<R: Row>(&self, rid: u32) -> Result<&R>
    where
        Self: Sized,
    {
        self.row_at(R::TABLE, rid)
            .and_then(R::from_table_row)
            .ok_or(Error::NotFound {
                table: R::TABLE,
                row: rid,
            })
    }
}

/// Mutable access to one typed table of a [`MemoryStore`].
pub trait TableAccess<R: Row> {
    /// The table holding rows of type `R`
    fn table(&self) -> &MetadataTable<R>;

    /// The table holding rows of type `R`, mutably
    fn table_mut(&mut self) -> &mut MetadataTable<R>;
}

/// An in-memory metadata store.
///
/// Rows are appended per table with [`MemoryStore::push`], which hands back the new row's
/// [`TableRef`]. The owner-sorted tables must end up sorted by owner before resolution; push
/// them in order, or call [`MemoryStore::sort_owner_tables`] once all rows are in.
///
/// ```rust
/// use dotcomplete::metadata::{
///     store::{MemoryStore, MetadataStore},
///     tables::{TableId, TypeRefRow},
/// };
///
/// let mut store = MemoryStore::new();
/// let object = store.push(TypeRefRow {
///     type_name: "Object".to_string(),
///     type_namespace: "System".to_string(),
/// });
///
/// assert_eq!(object.row, 1);
/// assert_eq!(store.row_count(TableId::TypeRef), 1);
/// assert_eq!(store.get::<TypeRefRow>(1)?.type_name, "Object");
/// assert!(store.get::<TypeRefRow>(2).is_err());
/// # Ok::<(), dotcomplete::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    type_refs: MetadataTable<TypeRefRow>,
    type_defs: MetadataTable<TypeDefRow>,
    fields: MetadataTable<FieldRow>,
    methods: MetadataTable<MethodDefRow>,
    params: MetadataTable<ParamRow>,
    interface_impls: MetadataTable<InterfaceImplRow>,
    type_specs: MetadataTable<TypeSpecRow>,
    nested_classes: MetadataTable<NestedClassRow>,
    generic_params: MetadataTable<GenericParamRow>,
}

macro_rules! impl_table_access {
    ($raw:ty, $field:ident) => {
        impl TableAccess<$raw> for MemoryStore {
            fn table(&self) -> &MetadataTable<$raw> {
                &self.$field
            }

            fn table_mut(&mut self) -> &mut MetadataTable<$raw> {
                &mut self.$field
            }
        }
    };
}

impl_table_access!(TypeRefRow, type_refs);
impl_table_access!(TypeDefRow, type_defs);
impl_table_access!(FieldRow, fields);
impl_table_access!(MethodDefRow, methods);
impl_table_access!(ParamRow, params);
impl_table_access!(InterfaceImplRow, interface_impls);
impl_table_access!(TypeSpecRow, type_specs);
impl_table_access!(NestedClassRow, nested_classes);
impl_table_access!(GenericParamRow, generic_params);

impl MemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `row` to its table and return a reference to it
    pub fn push<R: Row>(&mut self, row: R) -> TableRef
    where
        Self: TableAccess<R>,
    {
        let rid = self.table_mut().push(row);
        TableRef::new(R::TABLE, rid)
    }

    /// Stable-sort `InterfaceImpl` and `GenericParam` by owner, as ECMA-335 requires.
    ///
    /// Within one owner, generic parameters are ordered by their ordinal. Rows whose owner falls
    /// outside the owner column's domain sort last.
    pub fn sort_owner_tables(&mut self) {
        sort_by_owner(&mut self.interface_impls);
        sort_by_owner(&mut self.generic_params);
    }
}

fn sort_by_owner<R: OwnedRow>(table: &mut MetadataTable<R>) {
    table.sort_by_key(|row| {
        (
            R::owner_key(row.owner()).unwrap_or(u64::MAX),
            row.ordinal(),
        )
    });
}

impl MetadataStore for MemoryStore {
    fn row_count(&self, table: TableId) -> u32 {
        match table {
            TableId::TypeRef => self.type_refs.row_count(),
            TableId::TypeDef => self.type_defs.row_count(),
            TableId::Field => self.fields.row_count(),
            TableId::MethodDef => self.methods.row_count(),
            TableId::Param => self.params.row_count(),
            TableId::InterfaceImpl => self.interface_impls.row_count(),
            TableId::TypeSpec => self.type_specs.row_count(),
            TableId::NestedClass => self.nested_classes.row_count(),
            TableId::GenericParam => self.generic_params.row_count(),
        }
    }

    fn row_at(&self, table: TableId, rid: u32) -> Option<TableRow<'_>> {
        match table {
            TableId::TypeRef => self.type_refs.get(rid).map(Row::as_table_row),
            TableId::TypeDef => self.type_defs.get(rid).map(Row::as_table_row),
            TableId::Field => self.fields.get(rid).map(Row::as_table_row),
            TableId::MethodDef => self.methods.get(rid).map(Row::as_table_row),
            TableId::Param => self.params.get(rid).map(Row::as_table_row),
            TableId::InterfaceImpl => self.interface_impls.get(rid).map(Row::as_table_row),
            TableId::TypeSpec => self.type_specs.get(rid).map(Row::as_table_row),
            TableId::NestedClass => self.nested_classes.get(rid).map(Row::as_table_row),
            TableId::GenericParam => self.generic_params.get(rid).map(Row::as_table_row),
        }
    }
}
