//! ECMA-335 metadata tables, as seen by the type resolver.
//!
//! Rows are exposed with their heap indices already resolved: names are `String`s and signature
//! blobs are byte vectors. Binary table layout and heap decoding are the job of whichever
//! [`crate::metadata::store::MetadataStore`] produced the rows.
//!
//! # Structural conventions
//!
//! - Row ids are 1-based; row 0 is the null reference.
//! - *List* columns (`TypeDef.FieldList`, `TypeDef.MethodList`, `MethodDef.ParamList`) store the
//!   first row of a contiguous run; the run ends where the next owner's run starts.
//! - *Owner-sorted* tables (`InterfaceImpl`, `GenericParam`) are sorted by their owner column,
//!   see [`OwnedRow`].
//!
//! # Key Components
//!
//! - [`TableId`] / [`TableRef`] - Table identifiers and row identity
//! - [`CodedIndex`] / [`CodedIndexType`] - Compact multi-table references
//! - [`Row`] / [`TableRow`] - Typed and untyped row views
//! - [`MetadataTable`] - A vector-backed table
//! - [`NamedType`] / [`TypeDefOrRef`] - Name/namespace capability of type rows

mod field;
mod genericparam;
mod interfaceimpl;
mod methoddef;
mod nestedclass;
mod param;
mod typedef;
mod typeref;
mod types;
mod typespec;

pub use field::*;
pub use genericparam::*;
pub use interfaceimpl::*;
pub use methoddef::*;
pub use nestedclass::*;
pub use param::*;
pub use typedef::*;
pub use typeref::*;
pub use types::*;
pub use typespec::*;
