use strum::{EnumCount, EnumIter};

/// Identifiers of the ECMA-335 metadata tables this crate navigates.
///
/// The numeric values are the table ids defined in ECMA-335 II.22 and double as the high byte of
/// a [`crate::metadata::token::Token`]. Variants are declared in ascending id order, so the
/// derived ordering matches the numeric one.
///
/// ## Reference
/// * [ECMA-335 Partition II, Section 22](https://ecma-international.org/wp-content/uploads/ECMA-335_6th_edition_june_2012.pdf) - Metadata Tables
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, EnumIter, EnumCount)]
pub enum TableId {
    /// `TypeRef` table (0x01) - References to types defined in other scopes.
    TypeRef = 0x01,

    /// `TypeDef` table (0x02) - Types defined in this module.
    ///
    /// Each row stores the first row of its contiguous runs in `Field` and `MethodDef`.
    TypeDef = 0x02,

    /// `Field` table (0x04) - Field definitions, owned in runs by `TypeDef` rows.
    Field = 0x04,

    /// `MethodDef` table (0x06) - Method definitions, owned in runs by `TypeDef` rows.
    ///
    /// Each row stores the first row of its contiguous run in `Param`.
    MethodDef = 0x06,

    /// `Param` table (0x08) - Parameter definitions, owned in runs by `MethodDef` rows.
    Param = 0x08,

    /// `InterfaceImpl` table (0x09) - Interfaces implemented by types, sorted by class.
    InterfaceImpl = 0x09,

    /// `TypeSpec` table (0x1B) - Anonymous type specifications (generic instantiations, arrays).
    TypeSpec = 0x1B,

    /// `NestedClass` table (0x29) - Nested type to enclosing type pairs.
    NestedClass = 0x29,

    /// `GenericParam` table (0x2A) - Generic parameters, sorted by owner.
    GenericParam = 0x2A,
}

impl TableId {
    /// The token high byte for this table, shifted into place
    #[must_use]
    pub fn token_prefix(self) -> u32 {
        (self as u32) << 24
    }

    /// Map a token's table byte back to a [`TableId`]
    #[must_use]
    pub fn from_token_table(table: u8) -> Option<TableId> {
        match table {
            0x01 => Some(TableId::TypeRef),
            0x02 => Some(TableId::TypeDef),
            0x04 => Some(TableId::Field),
            0x06 => Some(TableId::MethodDef),
            0x08 => Some(TableId::Param),
            0x09 => Some(TableId::InterfaceImpl),
            0x1B => Some(TableId::TypeSpec),
            0x29 => Some(TableId::NestedClass),
            0x2A => Some(TableId::GenericParam),
            _ => None,
        }
    }
}
