//! Row and signature-blob builders for unit tests.

use crate::metadata::{
    signatures::{CALLING_CONVENTION, ELEMENT_TYPE},
    tables::{
        CodedIndex, FieldRow, GenericParamRow, InterfaceImplRow, MethodDefRow, NestedClassRow,
        ParamRow, TableId, TableRef, TypeAttributes, TypeDefRow, TypeRefRow,
    },
};

// Helper function to create a public class without base type
pub fn type_def(name: &str, namespace: &str, field_list: u32, method_list: u32) -> TypeDefRow {
    TypeDefRow {
        flags: TypeAttributes::PUBLIC,
        type_name: name.to_string(),
        type_namespace: namespace.to_string(),
        extends: CodedIndex::new(TableId::TypeRef, 0),
        field_list,
        method_list,
    }
}

// Helper function to create a TypeRef
pub fn type_ref(name: &str, namespace: &str) -> TypeRefRow {
    TypeRefRow {
        type_name: name.to_string(),
        type_namespace: namespace.to_string(),
    }
}

// Helper function to create a Field
pub fn field(name: &str, flags: u32, signature: &[u8]) -> FieldRow {
    FieldRow {
        flags,
        name: name.to_string(),
        signature: signature.to_vec(),
    }
}

// Helper function to create a MethodDef
pub fn method(name: &str, flags: u32, signature: Vec<u8>, param_list: u32) -> MethodDefRow {
    MethodDefRow {
        flags,
        name: name.to_string(),
        signature,
        param_list,
    }
}

// Helper function to create a Param
pub fn param(sequence: u32, name: &str) -> ParamRow {
    ParamRow {
        flags: 0,
        sequence,
        name: name.to_string(),
    }
}

// Helper function to create an InterfaceImpl of TypeDef `class`
pub fn interface_impl(class: u32, table: TableId, row: u32) -> InterfaceImplRow {
    InterfaceImplRow {
        class,
        interface: CodedIndex::new(table, row),
    }
}

// Helper function to create a GenericParam
pub fn generic_param(owner: TableRef, number: u32, name: &str) -> GenericParamRow {
    GenericParamRow {
        number,
        flags: 0,
        owner: CodedIndex::new(owner.table, owner.row),
        name: name.to_string(),
    }
}

// Helper function to create a NestedClass
pub fn nested_class(nested_class: u32, enclosing_class: u32) -> NestedClassRow {
    NestedClassRow {
        nested_class,
        enclosing_class,
    }
}

/// Field signature blob around an encoded type
pub fn field_sig(ty: &[u8]) -> Vec<u8> {
    let mut blob = vec![CALLING_CONVENTION::FIELD];
    blob.extend_from_slice(ty);
    blob
}

/// Instance method signature blob; types must be single-byte encodable
pub fn method_sig(ret: &[u8], params: &[&[u8]]) -> Vec<u8> {
    let mut blob = vec![CALLING_CONVENTION::HASTHIS, params.len() as u8];
    blob.extend_from_slice(ret);
    for param in params {
        blob.extend_from_slice(param);
    }
    blob
}

/// `VAR n`
pub fn var(ordinal: u8) -> Vec<u8> {
    vec![ELEMENT_TYPE::VAR, ordinal]
}
