//! # dotcomplete Prelude
//!
//! The types needed to build a store, resolve a type and inspect the result.
//!
//! ```rust
//! use dotcomplete::prelude::*;
//! ```

/// The main error type for all dotcomplete operations
pub use crate::Error;

/// The result type used throughout dotcomplete
pub use crate::Result;

// ================================================================================================
// Metadata
// ================================================================================================

pub use crate::metadata::{
    signatures::{BlobDecoder, SignatureDecoder, TypeSignature},
    store::{MemoryStore, MetadataStore},
    tables::{
        CodedIndex, CodedIndexType, FieldAttributes, FieldRow, GenericParamRow, InterfaceImplRow,
        MethodAttributes, MethodDefRow, NamedType, NestedClassRow, ParamRow, TableId, TableRef,
        TypeAttributes, TypeDefRow, TypeRefRow, TypeSpecRow,
    },
    token::Token,
};

// ================================================================================================
// Resolution
// ================================================================================================

pub use crate::resolver::{resolve_all, ResolverOptions, TypeResolver};

// ================================================================================================
// Output model
// ================================================================================================

pub use crate::content::{Accessibility, Field, Flags, FullyQualifiedName, Method, Type, Variable};
