use crate::{
    metadata::{
        store::MetadataStore,
        tables::{TableRef, TableRow, TypeDefRow, TypeRefRow, TypeSpecRow},
    },
    Error, Result,
};

/// The `{name, namespace}` capability shared by every row a type reference can resolve to.
pub trait NamedType {
    /// The simple name of the type
    fn name(&self) -> &str;

    /// The namespace of the type, empty for the global namespace
    fn namespace(&self) -> &str;

    /// `Namespace.Name`, or just `Name` in the global namespace
    fn absolute_name(&self) -> String {
        match self.namespace() {
            "" => self.name().to_string(),
            namespace => format!("{}.{}", namespace, self.name()),
        }
    }
}

/// The row a `TypeDefOrRef` coded index resolves to.
#[derive(Clone, Copy, Debug)]
pub enum TypeDefOrRef<'a> {
    /// A type defined in this module
    TypeDef(&'a TypeDefRow),
    /// A type defined elsewhere
    TypeRef(&'a TypeRefRow),
    /// An anonymous type specification
    TypeSpec(&'a TypeSpecRow),
}

impl<'a> TypeDefOrRef<'a> {
    /// Resolve `reference` against `store`.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the row does not exist or the reference points into a table
    /// that cannot hold a type.
    pub fn resolve<S: MetadataStore>(store: &'a S, reference: TableRef) -> Result<Self> {
        match reference.data(store)? {
            TableRow::TypeDef(row) => Ok(TypeDefOrRef::TypeDef(row)),
            TableRow::TypeRef(row) => Ok(TypeDefOrRef::TypeRef(row)),
            TableRow::TypeSpec(row) => Ok(TypeDefOrRef::TypeSpec(row)),
            _ => Err(Error::NotFound {
                table: reference.table,
                row: reference.row,
            }),
        }
    }
}

impl NamedType for TypeDefOrRef<'_> {
    fn name(&self) -> &str {
        match self {
            TypeDefOrRef::TypeDef(row) => row.name(),
            TypeDefOrRef::TypeRef(row) => row.name(),
            TypeDefOrRef::TypeSpec(row) => row.name(),
        }
    }

    fn namespace(&self) -> &str {
        match self {
            TypeDefOrRef::TypeDef(row) => row.namespace(),
            TypeDefOrRef::TypeRef(row) => row.namespace(),
            TypeDefOrRef::TypeSpec(row) => row.namespace(),
        }
    }
}
