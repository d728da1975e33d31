//! ECMA-335 metadata as seen by the resolver.
//!
//! - [`token`] - 32-bit metadata tokens
//! - [`tables`] - Row types, table identifiers, coded indices and row references
//! - [`store`] - The [`store::MetadataStore`] trait and the in-memory [`store::MemoryStore`]
//! - [`signatures`] - Field and method signature blob decoding

pub mod signatures;
pub mod store;
pub mod tables;
pub mod token;
