//! Translation of ECMA-335 attribute bits into [`Flags`].

use crate::{
    content::{Accessibility, Flags},
    metadata::tables::{FieldAttributes, MethodAttributes, TypeAttributes},
};

/// Accessibility of a field or method from its 3-bit member access value.
///
/// `Field` and `MethodDef` share the same access encoding.
fn member_accessibility(access: u32) -> Accessibility {
    match access {
        FieldAttributes::PUBLIC => Accessibility::Public,
        FieldAttributes::PRIVATE => Accessibility::Private,
        FieldAttributes::FAMILY | FieldAttributes::FAM_OR_ASSEM | FieldAttributes::FAM_AND_ASSEM => {
            Accessibility::Protected
        }
        _ => Accessibility::Unset,
    }
}

/// Flags of a `Field` row: static and accessibility.
#[must_use]
pub fn field_flags(attributes: u32) -> Flags {
    let mut flags = Flags::empty();
    if attributes & FieldAttributes::STATIC != 0 {
        flags |= Flags::STATIC;
    }

    flags.with_accessibility(member_accessibility(
        attributes & FieldAttributes::FIELD_ACCESS_MASK,
    ))
}

/// Flags of a `MethodDef` row: static, final and accessibility.
#[must_use]
pub fn method_flags(attributes: u32) -> Flags {
    let mut flags = Flags::empty();
    if attributes & MethodAttributes::STATIC != 0 {
        flags |= Flags::STATIC;
    }
    if attributes & MethodAttributes::FINAL != 0 {
        flags |= Flags::FINAL;
    }

    flags.with_accessibility(member_accessibility(
        attributes & MethodAttributes::MEMBER_ACCESS_MASK,
    ))
}

/// Flags of a `TypeDef` row: class or interface, and visibility.
#[must_use]
pub fn type_flags(attributes: u32) -> Flags {
    let mut flags = if attributes & TypeAttributes::CLASS_SEMANTICS_MASK == TypeAttributes::INTERFACE
    {
        Flags::INTERFACE
    } else {
        Flags::CLASS
    };

    let access = match attributes & TypeAttributes::VISIBILITY_MASK {
        TypeAttributes::PUBLIC | TypeAttributes::NESTED_PUBLIC => Accessibility::Public,
        TypeAttributes::NESTED_PRIVATE => Accessibility::Private,
        TypeAttributes::NESTED_FAMILY
        | TypeAttributes::NESTED_FAM_OR_ASSEM
        | TypeAttributes::NESTED_FAM_AND_ASSEM => Accessibility::Protected,
        _ => Accessibility::Unset,
    };
    flags.set_accessibility(access);
    flags
}
