//! Resolution of one `TypeDef` row into a [`Type`].
//!
//! [`TypeResolver`] walks the tables around a single type definition: the base type reference,
//! the `InterfaceImpl` rows owned by the type, its field and method runs, the parameter runs of
//! each method, nested classes and declared generic parameters. Signatures are decoded by a
//! [`SignatureDecoder`], [`BlobDecoder`] unless another one is supplied.
//!
//! Any lookup or decode failure aborts the enumeration it occurs in. The only condition that is
//! not treated as a failure by [`TypeResolver::to_type`] is [`Error::NotApplicable`], raised by
//! [`TypeResolver::extends`] for interfaces.

use crate::{
    content::{Field, FullyQualifiedName, Method, Type, Variable},
    metadata::{
        signatures::{BlobDecoder, SignatureDecoder},
        store::MetadataStore,
        tables::{
            FieldRow, GenericParamRow, InterfaceImplRow, MethodDefRow, NamedType, NestedClassRow,
            ParamRow, TableId, TableRef, TypeDefOrRef, TypeDefRow,
        },
    },
    resolver::{
        access::{field_flags, method_flags, type_flags},
        generics::{GenericContext, TypeBuilder},
        owner::owned_rows,
        range::list_range,
        ResolverOptions,
    },
    Error, Result,
};

/// Builds the type-description tree of a single type definition.
///
/// The resolver borrows the store for its lifetime and never writes to it. Every operation
/// re-reads the tables; nothing is cached between calls.
///
/// # Examples
///
/// ```rust
/// use dotcomplete::metadata::store::MemoryStore;
/// use dotcomplete::metadata::tables::{CodedIndex, TableId, TableRef, TypeAttributes, TypeDefRow};
/// use dotcomplete::resolver::TypeResolver;
///
/// let mut store = MemoryStore::new();
/// let reference = store.push(TypeDefRow {
///     flags: TypeAttributes::PUBLIC,
///     type_name: "Widget".to_string(),
///     type_namespace: "Demo".to_string(),
///     extends: CodedIndex::new(TableId::TypeRef, 0),
///     field_list: 1,
///     method_list: 1,
/// });
///
/// let ty = TypeResolver::new(&store, reference)?.to_type()?;
/// assert_eq!(ty.name.absolute, "Demo.Widget");
/// assert!(ty.fields.is_empty());
/// # Ok::<(), dotcomplete::Error>(())
/// ```
pub struct TypeResolver<'a, S: MetadataStore, D: SignatureDecoder = BlobDecoder> {
    store: &'a S,
    decoder: D,
    reference: TableRef,
    row: &'a TypeDefRow,
    options: ResolverOptions,
    depth: usize,
}

impl<'a, S: MetadataStore> TypeResolver<'a, S, BlobDecoder> {
    /// Create a resolver for the `TypeDef` row at `reference` with default options
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if `reference` is not an existing `TypeDef` row.
    pub fn new(store: &'a S, reference: TableRef) -> Result<Self> {
        Self::with_options(store, reference, ResolverOptions::default())
    }

    /// Create a resolver for the `TypeDef` row at `reference`
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if `reference` is not an existing `TypeDef` row.
    pub fn with_options(store: &'a S, reference: TableRef, options: ResolverOptions) -> Result<Self> {
        let row = reference.resolve::<TypeDefRow, S>(store)?;
        log::debug!(
            "Resolver for {:?} '{}'",
            reference,
            row.absolute_name()
        );

        Ok(TypeResolver {
            store,
            decoder: BlobDecoder,
            reference,
            row,
            options,
            depth: 0,
        })
    }
}

impl<'a, S: MetadataStore, D: SignatureDecoder + Clone> TypeResolver<'a, S, D> {
    /// Replace the signature decoder
    pub fn with_decoder<E: SignatureDecoder + Clone>(self, decoder: E) -> TypeResolver<'a, S, E> {
        TypeResolver {
            store: self.store,
            decoder,
            reference: self.reference,
            row: self.row,
            options: self.options,
            depth: self.depth,
        }
    }

    /// The `TypeDef` row being resolved
    pub fn reference(&self) -> TableRef {
        self.reference
    }

    /// The decoded `TypeDef` row
    pub fn row(&self) -> &'a TypeDefRow {
        self.row
    }

    /// The active options
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    fn builder(&self, method: Option<TableRef>) -> TypeBuilder<'a, S> {
        let context = match method {
            Some(method) => GenericContext::for_method(self.reference, method),
            None => GenericContext::for_type(self.reference),
        };
        TypeBuilder::new(self.store, context, self.options.max_depth)
    }

    /// The base type, as a list of at most one entry
    ///
    /// An empty list means the type has no base (`System.Object` itself, `<Module>`).
    ///
    /// # Errors
    /// Returns [`Error::NotApplicable`] for interfaces, which have no base type, and
    /// [`Error::NotFound`] if the base type reference dangles.
    pub fn extends(&self) -> Result<Vec<Type>> {
        if self.row.is_interface() {
            return Err(Error::NotApplicable(self.reference.token()));
        }
        if self.row.extends.is_null() {
            return Ok(Vec::new());
        }

        let base = TypeDefOrRef::resolve(self.store, self.row.extends.reference())?;
        Ok(vec![Type::named(base.name(), base.namespace())])
    }

    /// Interfaces listed in the `InterfaceImpl` table for this type
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if an interface reference dangles.
    pub fn implements(&self) -> Result<Vec<Type>> {
        owned_rows::<InterfaceImplRow, S>(self.store, self.reference)?
            .into_iter()
            .map(|row| {
                let interface = TypeDefOrRef::resolve(self.store, row.interface.reference())?;
                Ok(Type::named(interface.name(), interface.namespace()))
            })
            .collect()
    }

    /// Fields owned by this type
    ///
    /// # Errors
    /// Returns an error if a field row is missing or its signature cannot be decoded.
    pub fn fields(&self) -> Result<Vec<Field>> {
        let range = list_range::<TypeDefRow, S, _>(
            self.store,
            self.reference,
            TableId::Field,
            |row| row.field_list,
        )?;
        let builder = self.builder(None);

        let mut fields = Vec::with_capacity(range.len());
        for reference in range.iter() {
            let row = reference.resolve::<FieldRow, S>(self.store)?;
            let signature = self.decoder.decode_field(&row.signature)?;

            fields.push(Field {
                variable: Variable {
                    name: row.name.clone(),
                    ty: builder.resolve(&signature.base)?,
                },
                flags: field_flags(row.flags),
            });
        }

        Ok(fields)
    }

    /// Parameter names of `method`, from its `Param` run
    ///
    /// The variables carry no type; [`TypeResolver::methods`] fills them in from the decoded
    /// method signature.
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if `method` or one of its parameter rows is missing.
    pub fn parameters(&self, method: TableRef) -> Result<Vec<Variable>> {
        let range = list_range::<MethodDefRow, S, _>(
            self.store,
            method,
            TableId::Param,
            |row| row.param_list,
        )?;

        range
            .iter()
            .map(|reference| {
                let row = reference.resolve::<ParamRow, S>(self.store)?;
                Ok(Variable::named(&row.name))
            })
            .collect()
    }

    /// Methods owned by this type
    ///
    /// Parameter types come from the decoded signature and are assigned by position. When the
    /// signature and the `Param` run disagree on the count, only the common prefix gets a type.
    ///
    /// # Errors
    /// Returns an error if a method or parameter row is missing, or a signature cannot be
    /// decoded.
    pub fn methods(&self) -> Result<Vec<Method>> {
        let range = list_range::<TypeDefRow, S, _>(
            self.store,
            self.reference,
            TableId::MethodDef,
            |row| row.method_list,
        )?;

        let mut methods = Vec::with_capacity(range.len());
        for reference in range.iter() {
            methods.push(self.method(reference)?);
        }

        Ok(methods)
    }

    fn method(&self, reference: TableRef) -> Result<Method> {
        let row = reference.resolve::<MethodDefRow, S>(self.store)?;
        let mut parameters = self.parameters(reference)?;
        let signature = self.decoder.decode_method(&row.signature)?;
        let builder = self.builder(Some(reference));

        if parameters.len() != signature.params.len() {
            log::warn!(
                "{:?} '{}' has {} parameter rows but {} signature parameters, typing {}",
                reference,
                row.name,
                parameters.len(),
                signature.params.len(),
                parameters.len().min(signature.params.len())
            );
        }
        for (parameter, decoded) in parameters.iter_mut().zip(&signature.params) {
            parameter.ty = builder.resolve_parameter(decoded)?;
        }

        let returns = Variable {
            name: String::new(),
            ty: builder.resolve_parameter(&signature.return_type)?,
        };

        let specialization = if self.options.include_generic_parameters {
            self.generic_parameters(reference)?
        } else {
            Vec::new()
        };

        Ok(Method {
            name: row.name.clone(),
            flags: method_flags(row.flags),
            returns: vec![returns],
            parameters,
            specialization,
        })
    }

    /// Types declared inside this type, resolved with the same options
    ///
    /// # Errors
    /// Returns [`Error::RecursionLimit`] if nesting exceeds the configured depth, or any error
    /// raised while resolving a nested type.
    pub fn nested_types(&self) -> Result<Vec<Type>> {
        let mut nested = Vec::new();
        for rid in 1..=self.store.row_count(TableId::NestedClass) {
            let row = self.store.get::<NestedClassRow>(rid)?;
            if row.enclosing_class != self.reference.row {
                continue;
            }

            if self.depth >= self.options.max_depth {
                return Err(Error::RecursionLimit(self.options.max_depth));
            }

            let inner = TypeResolver {
                store: self.store,
                decoder: self.decoder.clone(),
                reference: TableRef::new(TableId::TypeDef, row.nested_class),
                row: self.store.get::<TypeDefRow>(row.nested_class)?,
                options: self.options,
                depth: self.depth + 1,
            };
            nested.push(inner.to_type()?);
        }

        Ok(nested)
    }

    /// Declared generic parameters of `owner` (a `TypeDef` or `MethodDef`), as name-only types
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] if the store reports rows it cannot produce.
    pub fn generic_parameters(&self, owner: TableRef) -> Result<Vec<Type>> {
        let mut params = owned_rows::<GenericParamRow, S>(self.store, owner)?;
        params.sort_by_key(|row| row.number);

        Ok(params
            .into_iter()
            .map(|row| Type::named(&row.name, ""))
            .collect())
    }

    /// Assemble the complete description of this type
    ///
    /// # Errors
    /// Returns the first failure of any member enumeration. [`Error::NotApplicable`] from
    /// [`TypeResolver::extends`] is not a failure and results in an empty `extends` list.
    pub fn to_type(&self) -> Result<Type> {
        let extends = match self.extends() {
            Ok(extends) => extends,
            Err(error) if error.is_not_applicable() => Vec::new(),
            Err(error) => return Err(error),
        };

        let types = if self.options.include_nested {
            self.nested_types()?
        } else {
            Vec::new()
        };

        let specialization = if self.options.include_generic_parameters {
            self.generic_parameters(self.reference)?
        } else {
            Vec::new()
        };

        let ty = Type {
            name: FullyQualifiedName::new(self.row.name(), self.row.namespace()),
            specialization,
            flags: type_flags(self.row.flags),
            methods: self.methods()?,
            fields: self.fields()?,
            types,
            extends,
            implements: self.implements()?,
        };

        log::debug!(
            "Resolved {:?} '{}': {} fields, {} methods",
            self.reference,
            self.row.absolute_name(),
            ty.fields.len(),
            ty.methods.len()
        );
        Ok(ty)
    }
}
