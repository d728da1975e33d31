//! Metadata tokens.
//!
//! A token is the 32-bit identifier the CLI uses to name one row in one metadata table: the high
//! byte carries the table id, the low 24 bits the 1-based row. Signature blobs reference types
//! through tokens, so tokens are the bridge between decoded signatures and table rows.

use std::fmt;

use crate::metadata::tables::TableId;

/// A metadata token (ECMA-335 II.22).
///
/// ```rust
/// use dotcomplete::metadata::{tables::TableId, token::Token};
///
/// let token = Token::new(0x0200_0005);
/// assert_eq!(token.table(), 0x02);
/// assert_eq!(token.row(), 5);
/// assert_eq!(token.table_id(), Some(TableId::TypeDef));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Token(pub u32);

impl Token {
    /// Wrap a raw token value
    #[must_use]
    pub fn new(value: u32) -> Self {
        Token(value)
    }

    /// Build the token of `row` in `table`
    #[must_use]
    pub fn from_parts(table: TableId, row: u32) -> Self {
        Token(table.token_prefix() | (row & 0x00FF_FFFF))
    }

    /// The raw 32-bit value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    /// The table byte
    #[must_use]
    pub fn table(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The table this token points into, if it is one this crate knows
    #[must_use]
    pub fn table_id(&self) -> Option<TableId> {
        TableId::from_token_table(self.table())
    }

    /// The 1-based row
    #[must_use]
    pub fn row(&self) -> u32 {
        self.0 & 0x00FF_FFFF
    }

    /// `true` for a token with row 0, which never addresses a row
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.row() == 0
    }
}

impl From<u32> for Token {
    fn from(value: u32) -> Self {
        Token(value)
    }
}

impl From<Token> for u32 {
    fn from(token: Token) -> Self {
        token.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Token(0x{:08x}, table: 0x{:02x}, row: {})",
            self.0,
            self.table(),
            self.row()
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}
