//! Shared building blocks of the metadata tables: identifiers, coded indices, row identity and
//! the typed/untyped row views.

mod codedindex;
mod named;
mod reference;
mod row;
mod table;
mod tableid;

pub use codedindex::*;
pub use named::*;
pub use reference::*;
pub use row::*;
pub use table::*;
pub use tableid::*;
