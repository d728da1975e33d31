// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # dotcomplete
//!
//! Structural type information for code completion, resolved out of .NET (ECMA-335) metadata
//! tables.
//!
//! Given an already-parsed set of metadata tables, `dotcomplete` navigates them the way the
//! format requires (list columns with implicit ends, owner-sorted tables, coded indices, generic
//! parameter ownership) and produces a small, serializable description of each type: its name,
//! base type, interfaces, fields, methods with parameters, nested types and generic parameters.
//!
//! ## Architecture
//!
//! - [`metadata`] - Table rows, tokens, coded indices, the [`metadata::store::MetadataStore`]
//!   boundary and the signature blob decoder
//! - [`resolver`] - List-range scanning, owner search, generic variable resolution and the
//!   [`resolver::TypeResolver`] itself
//! - [`content`] - The output model: [`content::Type`], [`content::Method`],
//!   [`content::Field`], [`content::Variable`] and [`content::Flags`]
//!
//! ## Quick Start
//!
//! ```rust
//! use dotcomplete::prelude::*;
//!
//! let mut store = MemoryStore::new();
//! let object = store.push(TypeRefRow {
//!     type_name: "Object".to_string(),
//!     type_namespace: "System".to_string(),
//! });
//! let widget = store.push(TypeDefRow {
//!     flags: TypeAttributes::PUBLIC,
//!     type_name: "Widget".to_string(),
//!     type_namespace: "Demo".to_string(),
//!     extends: CodedIndex::new(object.table, object.row),
//!     field_list: 1,
//!     method_list: 1,
//! });
//! store.push(FieldRow {
//!     flags: FieldAttributes::PUBLIC,
//!     name: "count".to_string(),
//!     // FIELD I4
//!     signature: vec![0x06, 0x08],
//! });
//!
//! let ty = TypeResolver::new(&store, widget)?.to_type()?;
//! assert_eq!(ty.extends[0].name.absolute, "System.Object");
//! assert_eq!(ty.fields[0].variable.ty.name.absolute, "System.Int32");
//! assert_eq!(ty.fields[0].flags.accessibility(), Accessibility::Public);
//! # Ok::<(), dotcomplete::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`Result<T>`]. A missing row is [`Error::NotFound`], a bad
//! signature blob is [`Error::Malformed`], [`Error::OutOfBounds`] or [`Error::RecursionLimit`].
//! [`Error::NotApplicable`] is a condition rather than a failure: it is what
//! [`resolver::TypeResolver::extends`] reports for interfaces.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never installs a logger.

#[macro_use]
pub(crate) mod error;
pub(crate) mod file;

#[cfg(test)]
pub(crate) mod test;

pub mod content;
pub mod metadata;
pub mod prelude;
pub mod resolver;

/// `dotcomplete` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `dotcomplete` Error type
///
/// Every fallible operation of the crate reports one of its variants.
pub use error::Error;

/// Little-endian cursor over a byte slice, with the compressed integer encodings of ECMA-335
pub use file::parser::Parser;
