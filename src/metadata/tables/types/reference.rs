//! Row identity, separated from row data.
//!
//! A [`TableRef`] names one row of one table and nothing more. It can be compared, ordered and
//! advanced without touching the backing store; the row's data is only decoded when
//! [`TableRef::resolve`] or [`TableRef::data`] is called.

use std::fmt;

use crate::{
    metadata::{
        store::MetadataStore,
        tables::{Row, TableId, TableRow},
        token::Token,
    },
    Error, Result,
};

/// A lightweight handle to one row: `(table, 1-based row)`.
///
/// Row 0 is the null reference. References order by table first, then row.
///
/// ```rust
/// use dotcomplete::metadata::tables::{TableId, TableRef};
///
/// let a = TableRef::new(TableId::TypeDef, 4);
/// let b = TableRef::new(TableId::MethodDef, 1);
/// assert!(a < b);
/// assert_eq!(a.next(), TableRef::new(TableId::TypeDef, 5));
/// assert!(TableRef::new(TableId::Field, 0).is_null());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TableRef {
    /// The table this reference points into
    pub table: TableId,
    /// The 1-based row, 0 for the null reference
    pub row: u32,
}

impl TableRef {
    /// Create a reference to `row` of `table`
    #[must_use]
    pub fn new(table: TableId, row: u32) -> Self {
        TableRef { table, row }
    }

    /// Map a token to a reference, if its table is one this crate navigates
    #[must_use]
    pub fn from_token(token: Token) -> Option<Self> {
        Some(TableRef::new(token.table_id()?, token.row()))
    }

    /// `true` for row 0
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.row == 0
    }

    /// The metadata token of the referenced row
    #[must_use]
    pub fn token(&self) -> Token {
        Token::from_parts(self.table, self.row)
    }

    /// The following row of the same table
    #[must_use]
    pub fn next(&self) -> Self {
        self.offset(1)
    }

    /// The row `count` rows further down the same table
    #[must_use]
    pub fn offset(&self, count: u32) -> Self {
        TableRef::new(self.table, self.row.saturating_add(count))
    }

    /// `true` if the row exists in `store`
    pub fn exists<S: MetadataStore>(&self, store: &S) -> bool {
        self.row != 0 && self.row <= store.row_count(self.table)
    }

    /// Fetch the untyped row data from `store`.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] for row 0 or rows past the end of the table.
    pub fn data<'s, S: MetadataStore>(&self, store: &'s S) -> Result<TableRow<'s>> {
        store.row_at(self.table, self.row).ok_or(Error::NotFound {
            table: self.table,
            row: self.row,
        })
    }

    /// Fetch the row as `R`.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the row does not exist, or if it lives in a different
    /// table than `R`.
    pub fn resolve<'s, R: Row, S: MetadataStore>(&self, store: &'s S) -> Result<&'s R> {
        if self.table != R::TABLE {
            return Err(Error::NotFound {
                table: R::TABLE,
                row: self.row,
            });
        }

        store.get::<R>(self.row)
    }
}

impl fmt::Debug for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}[{}]", self.table, self.row)
    }
}
