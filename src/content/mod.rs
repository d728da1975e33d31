//! Language-agnostic description of a type's shape, as consumed by code completion.
//!
//! Everything in here is plain data: the resolver in [`crate::resolver`] builds these values from
//! the metadata tables and hands them to the caller, who owns them outright. Nothing keeps a
//! reference back into the metadata store.
//!
//! Every model type implements `serde::Serialize` and `serde::Deserialize`. Empty names, empty
//! lists and zero flags are skipped on output so serialized payloads stay compact; missing fields
//! deserialize to their empty defaults.
//!
//! # Example
//!
//! ```rust
//! use dotcomplete::content::{Accessibility, Flags, Type};
//!
//! let mut ty = Type::named("List`1", "System.Collections.Generic");
//! ty.flags = Flags::CLASS.with_accessibility(Accessibility::Public);
//!
//! assert_eq!(ty.name.relative, "List`1");
//! assert_eq!(ty.name.absolute, "System.Collections.Generic.List`1");
//! assert_eq!(ty.flags.accessibility(), Accessibility::Public);
//! ```

mod flags;

pub use flags::{Accessibility, Flags};

use serde::{Deserialize, Serialize};

/// Name of a type, both as written inside its namespace and fully qualified.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FullyQualifiedName {
    /// Name without namespace, e.g. `Dictionary`2`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub relative: String,
    /// `namespace.relative`; empty when the type has no namespace
    #[serde(skip_serializing_if = "String::is_empty")]
    pub absolute: String,
}

impl FullyQualifiedName {
    /// Build a name from its relative part and namespace
    #[must_use]
    pub fn new(name: &str, namespace: &str) -> Self {
        let absolute = if namespace.is_empty() {
            String::new()
        } else {
            format!("{}.{}", namespace, name)
        };

        FullyQualifiedName {
            relative: name.to_string(),
            absolute,
        }
    }

    /// True if neither part is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.relative.is_empty() && self.absolute.is_empty()
    }
}

/// A type together with its members.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Type {
    /// Qualified name
    #[serde(skip_serializing_if = "FullyQualifiedName::is_empty")]
    pub name: FullyQualifiedName,
    /// Generic arguments of an instantiation, or the declared generic parameters of a definition
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub specialization: Vec<Type>,
    /// Class/interface and accessibility
    #[serde(skip_serializing_if = "Flags::is_empty")]
    pub flags: Flags,
    /// Declared methods
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,
    /// Declared fields
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
    /// Nested types
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<Type>,
    /// Base type; at most one entry
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<Type>,
    /// Implemented interfaces
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<Type>,
}

impl Type {
    /// A bare type carrying only a name
    #[must_use]
    pub fn named(name: &str, namespace: &str) -> Self {
        Type {
            name: FullyQualifiedName::new(name, namespace),
            ..Type::default()
        }
    }

    /// True if nothing at all is known about this type
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.specialization.is_empty()
            && self.flags.is_empty()
            && self.methods.is_empty()
            && self.fields.is_empty()
            && self.types.is_empty()
            && self.extends.is_empty()
            && self.implements.is_empty()
    }
}

/// A named, typed slot: parameter, return value or the data part of a field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Variable {
    /// Slot name; empty for return values
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Slot type; empty when it could not be determined
    #[serde(rename = "type", skip_serializing_if = "Type::is_empty")]
    pub ty: Type,
}

impl Variable {
    /// A variable with a name and no type yet
    #[must_use]
    pub fn named(name: &str) -> Self {
        Variable {
            name: name.to_string(),
            ty: Type::default(),
        }
    }
}

/// A field: its variable plus member flags.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Field {
    /// Name and type
    #[serde(flatten)]
    pub variable: Variable,
    /// Static and accessibility
    #[serde(skip_serializing_if = "Flags::is_empty")]
    pub flags: Flags,
}

/// A method signature.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Method {
    /// Method name
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Static, final and accessibility
    #[serde(skip_serializing_if = "Flags::is_empty")]
    pub flags: Flags,
    /// Return slot; the resolver always produces exactly one entry
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub returns: Vec<Variable>,
    /// Parameters in declaration order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Variable>,
    /// Declared generic parameters
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub specialization: Vec<Type>,
}
