//! Owner search over owner-sorted tables.
//!
//! `InterfaceImpl` and `GenericParam` carry a back-reference to the row that owns them and are
//! sorted by it. Finding the rows of one owner is a lower-bound binary search followed by a
//! forward scan. Ordering uses [`OwnedRow::owner_key`], the value the owner column would hold in
//! the binary table.

use crate::{
    metadata::{
        store::MetadataStore,
        tables::{OwnedRow, TableRef},
    },
    Result,
};

fn key_at<R: OwnedRow, S: MetadataStore>(store: &S, rid: u32) -> Result<u64> {
    Ok(R::owner_key(store.get::<R>(rid)?.owner()).unwrap_or(u64::MAX))
}

/// Lower-bound search for the first `R` row whose owner is not ordered before `owner`.
///
/// Returns `None` when every row sorts before `owner`, or when `owner` lives in a table the
/// owner column cannot reference. The returned row is not necessarily owned by `owner`; callers
/// compare owners while scanning forward.
///
/// # Errors
/// Returns [`crate::Error::NotFound`] if the store reports rows it cannot produce, and
/// [`crate::Error::Malformed`] if it reports more rows than can be addressed.
pub fn first_owned_row<R: OwnedRow, S: MetadataStore>(
    store: &S,
    owner: TableRef,
) -> Result<Option<TableRef>> {
    let Some(key) = R::owner_key(owner) else {
        return Ok(None);
    };

    let count = store.row_count(R::TABLE);
    let mut low = 1;
    let mut high = count
        .checked_add(1)
        .ok_or_else(|| malformed_error!("{:?} row count overflows", R::TABLE))?;
    while low < high {
        let mid = low + (high - low) / 2;
        if key_at::<R, S>(store, mid)? < key {
            low = mid + 1;
        } else {
            high = mid;
        }
    }

    log::trace!("{:?} lower bound in {:?} is row {}", owner, R::TABLE, low);
    if low > count {
        Ok(None)
    } else {
        Ok(Some(TableRef::new(R::TABLE, low)))
    }
}

/// All `R` rows owned by `owner`, in table order.
///
/// # Errors
/// Returns [`crate::Error::NotFound`] if the store reports rows it cannot produce.
pub fn owned_rows<'s, R: OwnedRow, S: MetadataStore>(
    store: &'s S,
    owner: TableRef,
) -> Result<Vec<&'s R>> {
    let mut rows = Vec::new();
    let Some(first) = first_owned_row::<R, S>(store, owner)? else {
        return Ok(rows);
    };

    let count = store.row_count(R::TABLE);
    for rid in first.row..=count {
        let row = store.get::<R>(rid)?;
        if row.owner() != owner {
            break;
        }
        rows.push(row);
    }

    log::trace!("{:?} owns {} {:?} rows", owner, rows.len(), R::TABLE);
    Ok(rows)
}

/// The row `ordinal` positions after the first row owned by `owner`.
///
/// Returns `None` if `owner` owns no rows, or if the row reached belongs to another owner.
///
/// # Errors
/// Returns [`crate::Error::NotFound`] if the store reports rows it cannot produce.
pub fn owned_row_at<'s, R: OwnedRow, S: MetadataStore>(
    store: &'s S,
    owner: TableRef,
    ordinal: u32,
) -> Result<Option<&'s R>> {
    let Some(first) = first_owned_row::<R, S>(store, owner)? else {
        return Ok(None);
    };

    let target = first.offset(ordinal);
    if !target.exists(store) {
        return Ok(None);
    }

    let row = store.get::<R>(target.row)?;
    if row.owner() == owner {
        Ok(Some(row))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            store::MemoryStore,
            tables::{GenericParamRow, InterfaceImplRow, TableId},
        },
        test::{generic_param, interface_impl},
    };

    fn type_def(row: u32) -> TableRef {
        TableRef::new(TableId::TypeDef, row)
    }

    fn method_def(row: u32) -> TableRef {
        TableRef::new(TableId::MethodDef, row)
    }

    #[test]
    fn lower_bound() {
        let mut store = MemoryStore::new();
        for class in [1, 3, 3, 3, 7] {
            store.push(interface_impl(class, TableId::TypeRef, 1));
        }

        let first = |row| first_owned_row::<InterfaceImplRow, _>(&store, type_def(row)).unwrap();
        assert_eq!(first(1), Some(TableRef::new(TableId::InterfaceImpl, 1)));
        assert_eq!(first(2), Some(TableRef::new(TableId::InterfaceImpl, 2)));
        assert_eq!(first(3), Some(TableRef::new(TableId::InterfaceImpl, 2)));
        assert_eq!(first(7), Some(TableRef::new(TableId::InterfaceImpl, 5)));
        assert_eq!(first(8), None);

        // InterfaceImpl.Class can only reference TypeDef
        assert_eq!(
            first_owned_row::<InterfaceImplRow, _>(&store, method_def(1)).unwrap(),
            None
        );
    }

    #[test]
    fn scan_stops_at_next_owner() {
        let mut store = MemoryStore::new();
        for (class, iface) in [(1, 1), (3, 2), (3, 3), (3, 4), (7, 5)] {
            store.push(interface_impl(class, TableId::TypeRef, iface));
        }

        let rows = owned_rows::<InterfaceImplRow, _>(&store, type_def(3)).unwrap();
        let interfaces: Vec<u32> = rows.iter().map(|r| r.interface.row).collect();
        assert_eq!(interfaces, vec![2, 3, 4]);

        assert!(owned_rows::<InterfaceImplRow, _>(&store, type_def(2))
            .unwrap()
            .is_empty());
        assert!(owned_rows::<InterfaceImplRow, _>(&store, type_def(9))
            .unwrap()
            .is_empty());
    }

    /// Claims a full InterfaceImpl table that has no room for the search sentinel.
    struct Saturated(MemoryStore);

    impl MetadataStore for Saturated {
        fn row_count(&self, table: TableId) -> u32 {
            if table == TableId::InterfaceImpl {
                u32::MAX
            } else {
                self.0.row_count(table)
            }
        }

        fn row_at(&self, table: TableId, rid: u32) -> Option<crate::metadata::tables::TableRow<'_>> {
            self.0.row_at(table, rid)
        }
    }

    #[test]
    fn row_count_overflow() {
        let store = Saturated(MemoryStore::new());
        assert!(matches!(
            first_owned_row::<InterfaceImplRow, _>(&store, type_def(1)),
            Err(crate::Error::Malformed { .. })
        ));
    }

    #[test]
    fn empty_table() {
        let store = MemoryStore::new();
        assert_eq!(
            first_owned_row::<GenericParamRow, _>(&store, type_def(1)).unwrap(),
            None
        );
        assert!(owned_row_at::<GenericParamRow, _>(&store, type_def(1), 0)
            .unwrap()
            .is_none());
    }

    #[test]
    fn ordinal_offset() {
        let mut store = MemoryStore::new();
        store.push(generic_param(type_def(1), 0, "TKey"));
        store.push(generic_param(type_def(1), 1, "TValue"));
        store.push(generic_param(method_def(1), 0, "TResult"));
        store.push(generic_param(type_def(2), 0, "T"));
        store.sort_owner_tables();

        let name = |owner, ordinal| {
            owned_row_at::<GenericParamRow, _>(&store, owner, ordinal)
                .unwrap()
                .map(|row| row.name.clone())
        };

        assert_eq!(name(type_def(1), 0).as_deref(), Some("TKey"));
        assert_eq!(name(type_def(1), 1).as_deref(), Some("TValue"));
        assert_eq!(name(method_def(1), 0).as_deref(), Some("TResult"));
        assert_eq!(name(type_def(2), 0).as_deref(), Some("T"));

        // offset walks into the next owner's parameters
        assert_eq!(name(type_def(1), 2), None);
        // no parameters declared at all
        assert_eq!(name(type_def(3), 0), None);
        assert_eq!(name(method_def(2), 0), None);
    }
}
