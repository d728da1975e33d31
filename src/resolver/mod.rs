//! Type resolution over metadata tables.
//!
//! This module turns `TypeDef` rows into [`crate::content::Type`] trees. It is built from a few
//! small pieces, each usable on its own:
//!
//! - [`list_range`] - member runs of list columns (`FieldList`, `MethodList`, `ParamList`)
//! - [`first_owned_row`] / [`owned_rows`] / [`owned_row_at`] - owner search in owner-sorted
//!   tables (`InterfaceImpl`, `GenericParam`)
//! - [`TypeBuilder`] - conversion of decoded signature types, including `VAR`/`MVAR` markers
//! - [`TypeResolver`] - the per-type entry point
//! - [`resolve_all`] - every type of a store, resolved in parallel
//!
//! # Thread Safety
//!
//! Resolution only reads from the store. Any number of resolvers can run against one store from
//! several threads as long as the store is `Sync`; [`resolve_all`] relies on exactly that.

mod access;
mod generics;
mod options;
mod owner;
mod range;
mod typedef;

pub use access::{field_flags, method_flags, type_flags};
pub use generics::{GenericContext, TypeBuilder};
pub use options::ResolverOptions;
pub use owner::{first_owned_row, owned_row_at, owned_rows};
pub use range::{list_range, ListRange};
pub use typedef::TypeResolver;

use rayon::prelude::*;

use crate::{
    content::Type,
    metadata::{
        store::MetadataStore,
        tables::{TableId, TableRef},
    },
    Result,
};

/// Resolve every `TypeDef` row of `store`, in row order.
///
/// Types are resolved in parallel. Nested types appear both on their own and inside their
/// enclosing type when [`ResolverOptions::include_nested`] is set.
///
/// # Errors
/// Returns the error of the first failing row, in row order.
pub fn resolve_all<S: MetadataStore + Sync>(store: &S, options: ResolverOptions) -> Result<Vec<Type>> {
    let count = store.row_count(TableId::TypeDef);
    log::debug!("Resolving {} types", count);

    let results: Vec<Result<Type>> = (1..=count)
        .into_par_iter()
        .map(|rid| {
            TypeResolver::with_options(store, TableRef::new(TableId::TypeDef, rid), options)?
                .to_type()
        })
        .collect();

    results.into_iter().collect()
}
