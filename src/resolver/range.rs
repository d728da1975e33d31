//! List-range derivation.
//!
//! Owner rows such as `TypeDef` or `MethodDef` only store the first row of the member run they
//! own. The run ends where the next owner's run starts, or one past the last member row when the
//! owner is the last row of its table.

use crate::{
    metadata::{
        store::MetadataStore,
        tables::{Row, TableId, TableRef},
    },
    Result,
};

/// Half-open run `[start, end)` of rows in a member table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListRange {
    /// Member table the run lives in
    pub table: TableId,
    /// First member row
    pub start: u32,
    /// One past the last member row
    pub end: u32,
}

impl ListRange {
    /// Number of member rows in the run
    #[must_use]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start) as usize
    }

    /// True if the owner has no members
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// References to every member row of the run
    pub fn iter(&self) -> impl Iterator<Item = TableRef> + '_ {
        (self.start..self.end).map(move |row| TableRef::new(self.table, row))
    }
}

/// Derive the member run owned by `owner`.
///
/// `start_of` reads the list column of an owner row. The run starts at the owner's value and ends
/// at the next owner's value; for the last owner, it ends at the member table's sentinel
/// `row_count + 1`. A next-owner value below the start is treated as stale and clamped to the
/// sentinel.
///
/// The run is not checked against the member table: a null start or an end past the sentinel
/// produces a run whose rows fail to resolve with [`crate::Error::NotFound`].
///
/// # Errors
/// Returns [`crate::Error::NotFound`] if `owner` does not address an existing `R` row, and
/// [`crate::Error::Malformed`] if the member table reports more rows than can be addressed.
pub fn list_range<R, S, F>(
    store: &S,
    owner: TableRef,
    member_table: TableId,
    start_of: F,
) -> Result<ListRange>
where
    R: Row,
    S: MetadataStore,
    F: Fn(&R) -> u32,
{
    let sentinel = store
        .row_count(member_table)
        .checked_add(1)
        .ok_or_else(|| malformed_error!("{:?} row count overflows", member_table))?;
    let start = start_of(owner.resolve::<R, S>(store)?);

    let next = owner.next();
    let mut end = if next.exists(store) {
        start_of(next.resolve::<R, S>(store)?)
    } else {
        sentinel
    };

    if end < start {
        log::warn!(
            "{:?} list end {} is below start {}, clamping to {}",
            owner,
            end,
            start,
            sentinel
        );
        end = sentinel;
    }

    log::trace!("{:?} owns {:?} rows [{}, {})", owner, member_table, start, end);
    Ok(ListRange {
        table: member_table,
        start,
        end,
    })
}
