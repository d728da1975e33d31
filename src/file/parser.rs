//! Cursor-based byte parser for metadata blobs.
//!
//! [`Parser`] keeps a position inside a borrowed byte slice and offers bounds-checked reads of
//! primitives plus the ECMA-335 compressed encodings (II.23.2) that signature blobs are built
//! from: compressed unsigned integers and `TypeDefOrRefOrSpecEncoded` tokens.
//!
//! ```rust
//! use dotcomplete::Parser;
//!
//! let blob = [0x81, 0x02, 0x49];
//! let mut parser = Parser::new(&blob);
//!
//! assert_eq!(parser.read_compressed_uint()?, 0x0102);
//! assert_eq!(parser.read_compressed_token()?.value(), 0x0100_0012);
//! assert!(!parser.has_more_data());
//! # Ok::<(), dotcomplete::Error>(())
//! ```

use crate::{
    file::io::{read_le_at, CilIO},
    metadata::token::Token,
    Result,
};

/// A forward-only reader over a byte slice.
pub struct Parser<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser positioned at the first byte of `data`
    #[must_use]
    pub fn new(data: &'a [u8]) -> Self {
        Parser { data, position: 0 }
    }

    /// Total length of the underlying data
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the underlying data is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `true` while unread bytes remain
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.position < self.data.len()
    }

    /// Move forward by one byte
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at the end of the data.
    pub fn advance(&mut self) -> Result<()> {
        self.advance_by(1)
    }

    /// Move forward by `step` bytes
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if fewer than `step` bytes remain.
    pub fn advance_by(&mut self, step: usize) -> Result<()> {
        if self.position + step > self.data.len() {
            return Err(out_of_bounds_error!());
        }

        self.position += step;
        Ok(())
    }

    /// Current position within the data
    #[must_use]
    pub fn pos(&self) -> usize {
        self.position
    }

    /// Look at the current byte without consuming it
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] at the end of the data.
    pub fn peek_byte(&self) -> Result<u8> {
        if self.position >= self.data.len() {
            return Err(out_of_bounds_error!());
        }
        Ok(self.data[self.position])
    }

    /// Read a little-endian `T` and advance past it
    ///
    /// # Errors
    /// Returns [`crate::Error::OutOfBounds`] if not enough data remains.
    pub fn read_le<T: CilIO>(&mut self) -> Result<T> {
        read_le_at::<T>(self.data, &mut self.position)
    }

    /// Read a compressed unsigned integer (ECMA-335 II.23.2).
    ///
    /// One, two or four bytes, selected by the high bits of the first byte:
    /// `0xxxxxxx`, `10xxxxxx xxxxxxxx`, `110xxxxx xxxxxxxx xxxxxxxx xxxxxxxx`.
    ///
    /// # Errors
    /// Returns an error on truncated data or an invalid leading byte.
    pub fn read_compressed_uint(&mut self) -> Result<u32> {
        let first_byte = self.read_le::<u8>()?;

        // 1-byte encoding: 0xxxxxxx
        if (first_byte & 0x80) == 0 {
            return Ok(u32::from(first_byte));
        }

        // 2-byte encoding: 10xxxxxx xxxxxxxx
        if (first_byte & 0xC0) == 0x80 {
            let second_byte = self.read_le::<u8>()?;
            let value = ((u32::from(first_byte) & 0x3F) << 8) | u32::from(second_byte);
            return Ok(value);
        }

        // 4-byte encoding: 110xxxxx xxxxxxxx xxxxxxxx xxxxxxxx
        if (first_byte & 0xE0) == 0xC0 {
            let b1 = u32::from(self.read_le::<u8>()?);
            let b2 = u32::from(self.read_le::<u8>()?);
            let b3 = u32::from(self.read_le::<u8>()?);
            let value = ((u32::from(first_byte) & 0x1F) << 24) | (b1 << 16) | (b2 << 8) | b3;
            return Ok(value);
        }

        Err(malformed_error!("Invalid compressed uint - {}", first_byte))
    }

    /// Read a `TypeDefOrRefOrSpecEncoded` value and expand it to a full [`Token`].
    ///
    /// The two low bits select the table (`TypeDef`, `TypeRef`, `TypeSpec`), the remaining bits
    /// are the row.
    ///
    /// # Errors
    /// Returns an error on truncated data, the reserved table tag `3`, or a row that does not fit
    /// in the 24 row bits of a token.
    pub fn read_compressed_token(&mut self) -> Result<Token> {
        let compressed_token = self.read_compressed_uint()?;

        let table: u32 = match compressed_token & 0x3 {
            0x0 => 0x0200_0000, // TypeDef
            0x1 => 0x0100_0000, // TypeRef
            0x2 => 0x1B00_0000, // TypeSpec
            _ => {
                return Err(malformed_error!(
                    "Invalid compressed token - {}",
                    compressed_token
                ))
            }
        };

        let table_index = compressed_token >> 2;
        if table_index > 0x00FF_FFFF {
            return Err(malformed_error!(
                "Compressed token row exceeds 24 bits - {}",
                compressed_token
            ));
        }

        Ok(Token::new(table | table_index))
    }
}
