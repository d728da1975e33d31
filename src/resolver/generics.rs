//! Conversion of decoded signature types into [`Type`] values.
//!
//! Class and value-type references resolve through the `TypeDef`/`TypeRef`/`TypeSpec` tables.
//! Generic instantiations resolve their definition and then each argument. `VAR` and `MVAR`
//! markers are looked up in the `GenericParam` table: the owner's first declared parameter is
//! found with [`owned_row_at`], then offset by the marker's ordinal.

use crate::{
    content::Type,
    metadata::{
        signatures::{SignatureParameter, TypeSignature},
        store::MetadataStore,
        tables::{GenericParamRow, NamedType, TableRef, TypeDefOrRef},
        token::Token,
    },
    resolver::owner::owned_row_at,
    Error, Result,
};

/// Owners that `VAR` and `MVAR` markers refer to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GenericContext {
    /// Declaring type; owner of `VAR` markers
    pub type_def: TableRef,
    /// Method being resolved, if any; owner of `MVAR` markers
    pub method: Option<TableRef>,
}

impl GenericContext {
    /// Context for members of `type_def` that are not methods
    #[must_use]
    pub fn for_type(type_def: TableRef) -> Self {
        GenericContext {
            type_def,
            method: None,
        }
    }

    /// Context for the signature of `method`, declared by `type_def`
    #[must_use]
    pub fn for_method(type_def: TableRef, method: TableRef) -> Self {
        GenericContext {
            type_def,
            method: Some(method),
        }
    }
}

/// Resolves [`TypeSignature`] trees against a store.
pub struct TypeBuilder<'a, S: MetadataStore> {
    store: &'a S,
    context: GenericContext,
    max_depth: usize,
}

impl<'a, S: MetadataStore> TypeBuilder<'a, S> {
    /// Create a builder for one generic context
    pub fn new(store: &'a S, context: GenericContext, max_depth: usize) -> Self {
        TypeBuilder {
            store,
            context,
            max_depth,
        }
    }

    /// Resolve a signature type
    ///
    /// # Errors
    /// Returns [`Error::NotFound`] for dangling type references and [`Error::RecursionLimit`]
    /// for types nested deeper than the configured bound.
    pub fn resolve(&self, signature: &TypeSignature) -> Result<Type> {
        self.resolve_at(signature, 0)
    }

    /// Resolve a parameter or return slot, marking by-ref slots with `&`
    ///
    /// # Errors
    /// See [`TypeBuilder::resolve`].
    pub fn resolve_parameter(&self, parameter: &SignatureParameter) -> Result<Type> {
        let ty = self.resolve_at(&parameter.base, 0)?;
        if parameter.by_ref {
            Ok(with_suffix(ty, "&"))
        } else {
            Ok(ty)
        }
    }

    fn resolve_at(&self, signature: &TypeSignature, depth: usize) -> Result<Type> {
        if depth > self.max_depth {
            return Err(Error::RecursionLimit(self.max_depth));
        }

        match signature {
            TypeSignature::GenericInst(definition, arguments) => {
                let mut ty = self.resolve_at(definition, depth + 1)?;
                for argument in arguments {
                    ty.specialization.push(self.resolve_at(argument, depth + 1)?);
                }
                Ok(ty)
            }
            TypeSignature::GenericParamType(ordinal) => {
                self.variable(Some(self.context.type_def), *ordinal)
            }
            TypeSignature::GenericParamMethod(ordinal) => {
                self.variable(self.context.method, *ordinal)
            }
            TypeSignature::Class(token) | TypeSignature::ValueType(token) => self.reference(*token),
            TypeSignature::SzArray(array) => {
                Ok(with_suffix(self.resolve_at(&array.base, depth + 1)?, "[]"))
            }
            TypeSignature::Array(array) => {
                let suffix = format!("[{}]", ",".repeat(array.rank.saturating_sub(1) as usize));
                Ok(with_suffix(self.resolve_at(&array.base, depth + 1)?, &suffix))
            }
            TypeSignature::ByRef(inner) => Ok(with_suffix(self.resolve_at(inner, depth + 1)?, "&")),
            TypeSignature::Ptr(pointer) => {
                Ok(with_suffix(self.resolve_at(&pointer.base, depth + 1)?, "*"))
            }
            TypeSignature::Pinned(inner)
            | TypeSignature::ModifiedRequired(_, inner)
            | TypeSignature::ModifiedOptional(_, inner) => self.resolve_at(inner, depth + 1),
            other => Ok(match primitive_name(other) {
                Some(name) => Type::named(name, "System"),
                None => Type::default(),
            }),
        }
    }

    fn reference(&self, token: Token) -> Result<Type> {
        let reference = TableRef::from_token(token)
            .ok_or_else(|| malformed_error!("Signature references non-type token {}", token))?;
        let row = TypeDefOrRef::resolve(self.store, reference)?;

        Ok(Type::named(row.name(), row.namespace()))
    }

    fn variable(&self, owner: Option<TableRef>, ordinal: u32) -> Result<Type> {
        let Some(owner) = owner else {
            log::trace!("MVAR {} outside of a method signature", ordinal);
            return Ok(Type::default());
        };

        match owned_row_at::<GenericParamRow, S>(self.store, owner, ordinal)? {
            Some(param) => Ok(Type::named(&param.name, "")),
            None => {
                log::trace!("{:?} declares no generic parameter {}", owner, ordinal);
                Ok(Type::default())
            }
        }
    }
}

fn with_suffix(mut ty: Type, suffix: &str) -> Type {
    ty.name.relative.push_str(suffix);
    if !ty.name.absolute.is_empty() {
        ty.name.absolute.push_str(suffix);
    }
    ty
}

fn primitive_name(signature: &TypeSignature) -> Option<&'static str> {
    Some(match signature {
        TypeSignature::Void => "Void",
        TypeSignature::Boolean => "Boolean",
        TypeSignature::Char => "Char",
        TypeSignature::I1 => "SByte",
        TypeSignature::U1 => "Byte",
        TypeSignature::I2 => "Int16",
        TypeSignature::U2 => "UInt16",
        TypeSignature::I4 => "Int32",
        TypeSignature::U4 => "UInt32",
        TypeSignature::I8 => "Int64",
        TypeSignature::U8 => "UInt64",
        TypeSignature::R4 => "Single",
        TypeSignature::R8 => "Double",
        TypeSignature::String => "String",
        TypeSignature::TypedByRef => "TypedReference",
        TypeSignature::I => "IntPtr",
        TypeSignature::U => "UIntPtr",
        TypeSignature::Object => "Object",
        _ => return None,
    })
}
