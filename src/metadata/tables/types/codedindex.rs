//! Coded indices.
//!
//! Coded indices combine a table identifier and row index into a single value by using the
//! lower bits to encode which table is being referenced, and the remaining bits for the row.
//! Only the combinations needed to navigate types and their generic parameters are modelled.
//!
//! ## References
//!
//! - [ECMA-335 Standard](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Section II.24.2.6

use strum::{EnumCount, EnumIter};

use crate::{
    metadata::{
        tables::{TableId, TableRef},
        token::Token,
    },
    Result,
};

/// The coded index combinations used by the type resolver.
///
/// The order of tables returned by [`CodedIndexType::tables`] is the encoding order: the
/// position of a table in that slice is its tag value.
#[derive(Debug, Hash, Eq, PartialEq, Clone, Copy, EnumIter, EnumCount)]
pub enum CodedIndexType {
    /// References `TypeDef`, `TypeRef`, or `TypeSpec` tables.
    ///
    /// Used by `TypeDef.Extends` and `InterfaceImpl.Interface`.
    TypeDefOrRef,

    /// References `TypeDef` or `MethodDef` tables.
    ///
    /// Used by `GenericParam.Owner`.
    TypeOrMethodDef,
}

impl CodedIndexType {
    /// Returns the tables that can be referenced by this coded index type, in encoding order.
    #[must_use]
    pub fn tables(&self) -> &'static [TableId] {
        match self {
            CodedIndexType::TypeDefOrRef => {
                &[TableId::TypeDef, TableId::TypeRef, TableId::TypeSpec]
            }
            CodedIndexType::TypeOrMethodDef => &[TableId::TypeDef, TableId::MethodDef],
        }
    }

    /// Number of low bits holding the table tag
    #[must_use]
    pub fn tag_bits(&self) -> u32 {
        let count = self.tables().len() as u32;
        u32::BITS - (count - 1).leading_zeros()
    }

    /// Split a raw coded index value into its table and row.
    ///
    /// # Errors
    /// Returns [`crate::Error::Malformed`] if the tag does not name a table of this combination.
    pub fn decode(&self, value: u32) -> Result<CodedIndex> {
        let bits = self.tag_bits();
        let tag = (value & ((1 << bits) - 1)) as usize;
        let row = value >> bits;

        match self.tables().get(tag) {
            Some(table) => Ok(CodedIndex::new(*table, row)),
            None => Err(malformed_error!(
                "Invalid tag {} for coded index {:?} - {}",
                tag,
                self,
                value
            )),
        }
    }

    /// Encode `table`/`row` into the raw coded index value.
    ///
    /// Returns `None` if `table` is not part of this combination, or if `row` does not fit next to
    /// the tag bits. The raw value is also the key
    /// ECMA-335 sorts coded-index columns by, which makes it usable for ordered searches.
    #[must_use]
    pub fn encode(&self, table: TableId, row: u32) -> Option<u32> {
        let tag = self.tables().iter().position(|t| *t == table)? as u32;
        Some(row.checked_mul(1 << self.tag_bits())? | tag)
    }
}

/// A decoded representation of a coded index value.
///
/// ## Fields
///
/// - `tag`: The specific metadata table being referenced
/// - `row`: The 1-based row index within that table, 0 for a null reference
/// - `token`: The computed metadata token
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodedIndex {
    /// The [`TableId`] this index is referring to.
    pub tag: TableId,

    /// The row ID that this `CodedIndex` is pointing to.
    ///
    /// Row 0 is reserved and indicates a null reference.
    pub row: u32,

    /// The computed metadata token for this coded index.
    pub token: Token,
}

impl CodedIndex {
    /// Creates a new `CodedIndex` with the specified table and row.
    #[must_use]
    pub fn new(tag: TableId, row: u32) -> CodedIndex {
        CodedIndex {
            tag,
            row,
            token: Token::from_parts(tag, row),
        }
    }

    /// `true` if this index does not reference any row
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.row == 0
    }

    /// The referenced row as a [`TableRef`]
    #[must_use]
    pub fn reference(&self) -> TableRef {
        TableRef::new(self.tag, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_bits() {
        assert_eq!(CodedIndexType::TypeDefOrRef.tag_bits(), 2);
        assert_eq!(CodedIndexType::TypeOrMethodDef.tag_bits(), 1);
    }

    #[test]
    fn decode_type_def_or_ref() {
        let ci = CodedIndexType::TypeDefOrRef.decode(0x0D).unwrap();
        assert_eq!(ci.tag, TableId::TypeRef);
        assert_eq!(ci.row, 3);
        assert_eq!(ci.token, Token::new(0x0100_0003));

        let ci = CodedIndexType::TypeDefOrRef.decode(0x0E).unwrap();
        assert_eq!(ci.tag, TableId::TypeSpec);
        assert_eq!(ci.row, 3);

        assert!(CodedIndexType::TypeDefOrRef.decode(0x0F).is_err());
    }

    #[test]
    fn decode_type_or_method_def() {
        let ci = CodedIndexType::TypeOrMethodDef.decode(0x07).unwrap();
        assert_eq!(ci.tag, TableId::MethodDef);
        assert_eq!(ci.row, 3);
        assert_eq!(ci.reference(), TableRef::new(TableId::MethodDef, 3));
    }

    #[test]
    fn encode_orders_by_row_then_tag() {
        let ci_type = CodedIndexType::TypeOrMethodDef;
        let type3 = ci_type.encode(TableId::TypeDef, 3).unwrap();
        let method3 = ci_type.encode(TableId::MethodDef, 3).unwrap();
        let type4 = ci_type.encode(TableId::TypeDef, 4).unwrap();

        assert!(type3 < method3);
        assert!(method3 < type4);
        assert_eq!(ci_type.encode(TableId::Field, 1), None);
    }

    #[test]
    fn encode_overflow() {
        let ci_type = CodedIndexType::TypeOrMethodDef;
        assert_eq!(ci_type.encode(TableId::MethodDef, 0x7FFF_FFFF), Some(0xFFFF_FFFF));
        assert_eq!(ci_type.encode(TableId::TypeDef, 0x8000_0000), None);

        let ci_type = CodedIndexType::TypeDefOrRef;
        assert_eq!(ci_type.encode(TableId::TypeRef, u32::MAX), None);
    }

    #[test]
    fn null_index() {
        let ci = CodedIndex::new(TableId::TypeDef, 0);
        assert!(ci.is_null());
        assert!(ci.token.is_null());
    }
}
