//! Integration tests for type resolution over synthetic in-memory tables.
//!
//! Each test assembles a small `MemoryStore` by hand, the way a compiler would have laid out the
//! tables, and checks the resolved type-description tree.

use dotcomplete::{
    metadata::signatures::{SignatureField, SignatureMethod, SignatureParameter},
    prelude::*,
    resolver::{first_owned_row, list_range},
    Result,
};

const FIELD: u8 = 0x06;
const HASTHIS: u8 = 0x20;
const VOID: u8 = 0x01;
const I4: u8 = 0x08;
const STRING: u8 = 0x0e;
const CLASS: u8 = 0x12;
const VAR: u8 = 0x13;
const GENERICINST: u8 = 0x15;
const MVAR: u8 = 0x1e;

fn class(name: &str, namespace: &str, field_list: u32, method_list: u32) -> TypeDefRow {
    TypeDefRow {
        flags: TypeAttributes::PUBLIC,
        type_name: name.to_string(),
        type_namespace: namespace.to_string(),
        extends: CodedIndex::new(TableId::TypeRef, 0),
        field_list,
        method_list,
    }
}

fn field(name: &str, flags: u32, ty: &[u8]) -> FieldRow {
    let mut signature = vec![FIELD];
    signature.extend_from_slice(ty);
    FieldRow {
        flags,
        name: name.to_string(),
        signature,
    }
}

fn method(name: &str, flags: u32, ret: &[u8], params: &[&[u8]], param_list: u32) -> MethodDefRow {
    let mut signature = vec![HASTHIS, params.len() as u8];
    signature.extend_from_slice(ret);
    for param in params {
        signature.extend_from_slice(param);
    }
    MethodDefRow {
        flags,
        name: name.to_string(),
        signature,
        param_list,
    }
}

fn param(sequence: u32, name: &str) -> ParamRow {
    ParamRow {
        flags: 0,
        sequence,
        name: name.to_string(),
    }
}

fn generic_param(owner: TableRef, number: u32, name: &str) -> GenericParamRow {
    GenericParamRow {
        number,
        flags: 0,
        owner: CodedIndex::new(owner.table, owner.row),
        name: name.to_string(),
    }
}

fn type_def(row: u32) -> TableRef {
    TableRef::new(TableId::TypeDef, row)
}

/// Fields of a type run from its FieldList up to the next type's FieldList.
#[test]
fn fields_cover_list_range() -> Result<()> {
    let mut store = MemoryStore::new();
    store.push(class("Before", "", 1, 1));
    let foo = store.push(class("Foo", "Demo", 5, 1));
    store.push(class("Next", "Demo", 8, 1));
    for i in 1..=10 {
        store.push(field(&format!("f{}", i), FieldAttributes::PUBLIC, &[I4]));
    }

    let fields = TypeResolver::new(&store, foo)?.fields()?;
    let names: Vec<&str> = fields.iter().map(|f| f.variable.name.as_str()).collect();
    assert_eq!(names, vec!["f5", "f6", "f7"]);

    // last type owns everything up to the end of the Field table
    let last = TypeResolver::new(&store, type_def(3))?.fields()?;
    assert_eq!(last.len(), 3);
    assert_eq!(last[2].variable.name, "f10");
    Ok(())
}

/// A next-owner list start below the current one clamps to the end of the member table.
#[test]
fn inconsistent_list_pointer_clamps() -> Result<()> {
    let mut store = MemoryStore::new();
    let first = store.push(class("First", "", 4, 1));
    store.push(class("Second", "", 2, 1));
    for i in 1..=6 {
        store.push(field(&format!("f{}", i), 0, &[I4]));
    }

    let range = list_range::<TypeDefRow, _, _>(&store, first, TableId::Field, |row| row.field_list)?;
    assert_eq!((range.start, range.end), (4, 7));

    let fields = TypeResolver::new(&store, first)?.fields()?;
    assert_eq!(fields.len(), 3);
    Ok(())
}

/// A null FieldList is not an empty run; the missing Field row surfaces as NotFound.
#[test]
fn null_field_list_is_not_found() -> Result<()> {
    let mut store = MemoryStore::new();
    let first = store.push(class("First", "", 0, 1));
    store.push(class("Second", "", 3, 1));
    for i in 1..=5 {
        store.push(field(&format!("f{}", i), 0, &[I4]));
    }

    match TypeResolver::new(&store, first)?.fields() {
        Err(Error::NotFound { table, row }) => {
            assert_eq!(table, TableId::Field);
            assert_eq!(row, 0);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    Ok(())
}

/// A next-owner FieldList past the end of the Field table is kept, not clamped.
#[test]
fn field_list_past_end_is_not_found() -> Result<()> {
    let mut store = MemoryStore::new();
    let first = store.push(class("First", "", 2, 1));
    store.push(class("Second", "", 9, 1));
    for i in 1..=4 {
        store.push(field(&format!("f{}", i), 0, &[I4]));
    }

    let range = list_range::<TypeDefRow, _, _>(&store, first, TableId::Field, |row| row.field_list)?;
    assert_eq!((range.start, range.end), (2, 9));

    match TypeResolver::new(&store, first)?.fields() {
        Err(Error::NotFound { table, row }) => {
            assert_eq!(table, TableId::Field);
            assert_eq!(row, 5);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    Ok(())
}

/// VAR n resolves to the n-th generic parameter of the owner, or an empty name.
#[test]
fn generic_variables_resolve_by_ordinal() -> Result<()> {
    let mut store = MemoryStore::new();
    let pair = store.push(class("Pair`2", "Demo", 1, 1));
    let plain = store.push(class("Plain", "Demo", 4, 1));
    store.push(field("first", FieldAttributes::PUBLIC, &[VAR, 0]));
    store.push(field("second", FieldAttributes::PUBLIC, &[VAR, 1]));
    store.push(field("third", FieldAttributes::PUBLIC, &[VAR, 2]));
    store.push(field("orphan", FieldAttributes::PUBLIC, &[VAR, 0]));

    // pushed out of order on purpose
    store.push(generic_param(plain, 0, "Unused"));
    store.push(generic_param(pair, 1, "TSecond"));
    store.push(generic_param(pair, 0, "TFirst"));
    store.sort_owner_tables();
    assert!(first_owned_row::<GenericParamRow, _>(&store, plain)?.is_some());

    let fields = TypeResolver::new(&store, pair)?.fields()?;
    let types: Vec<&str> = fields
        .iter()
        .map(|f| f.variable.ty.name.relative.as_str())
        .collect();
    assert_eq!(types, vec!["TFirst", "TSecond", ""]);

    let mut bare = MemoryStore::new();
    let owner = bare.push(class("NoGenerics", "", 1, 1));
    bare.push(field("value", 0, &[VAR, 0]));
    let fields = TypeResolver::new(&bare, owner)?.fields()?;
    assert!(fields[0].variable.ty.name.is_empty());
    Ok(())
}

/// MVAR resolves against the method, VAR against the declaring type.
#[test]
fn method_variables() -> Result<()> {
    let mut store = MemoryStore::new();
    let list = store.push(class("List`1", "Demo", 1, 1));
    let convert = store.push(method(
        "ConvertAll",
        MethodAttributes::PUBLIC,
        &[MVAR, 0],
        &[&[VAR, 0]],
        1,
    ));
    store.push(param(1, "item"));
    store.push(generic_param(list, 0, "T"));
    store.push(generic_param(convert, 0, "TOutput"));
    store.sort_owner_tables();

    let methods = TypeResolver::new(&store, list)?.methods()?;
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].returns[0].ty.name.relative, "TOutput");
    assert_eq!(methods[0].parameters[0].ty.name.relative, "T");
    assert_eq!(methods[0].specialization.len(), 1);
    assert_eq!(methods[0].specialization[0].name.relative, "TOutput");
    Ok(())
}

/// Generic instantiations carry their arguments as specialization.
#[test]
fn generic_instantiation() -> Result<()> {
    let mut store = MemoryStore::new();
    let holder = store.push(class("Holder`1", "Demo", 1, 1));
    store.push(TypeRefRow {
        type_name: "Dictionary`2".to_string(),
        type_namespace: "System.Collections.Generic".to_string(),
    });
    // GENERICINST CLASS TypeRef[1] 2 string VAR0
    store.push(field(
        "map",
        FieldAttributes::PRIVATE,
        &[GENERICINST, CLASS, 0x05, 2, STRING, VAR, 0],
    ));
    store.push(generic_param(holder, 0, "TValue"));
    store.sort_owner_tables();

    let fields = TypeResolver::new(&store, holder)?.fields()?;
    let ty = &fields[0].variable.ty;
    assert_eq!(ty.name.absolute, "System.Collections.Generic.Dictionary`2");
    let arguments: Vec<&str> = ty
        .specialization
        .iter()
        .map(|t| t.name.relative.as_str())
        .collect();
    assert_eq!(arguments, vec!["String", "TValue"]);
    Ok(())
}

/// extends() on an interface is the NotApplicable condition; to_type() turns it into an empty list.
#[test]
fn interface_extends_is_not_applicable() -> Result<()> {
    let mut store = MemoryStore::new();
    let mut row = class("IDisposable", "System", 1, 1);
    row.flags = TypeAttributes::PUBLIC | TypeAttributes::INTERFACE;
    let iface = store.push(row);

    let resolver = TypeResolver::new(&store, iface)?;
    match resolver.extends() {
        Err(Error::NotApplicable(token)) => assert_eq!(token, iface.token()),
        other => panic!("expected NotApplicable, got {:?}", other),
    }

    let ty = resolver.to_type()?;
    assert!(ty.extends.is_empty());
    assert!(ty.flags.contains(Flags::INTERFACE));
    Ok(())
}

/// implements() is empty, not an error, when no InterfaceImpl row matches.
#[test]
fn implements_empty_without_rows() -> Result<()> {
    let mut store = MemoryStore::new();
    let lonely = store.push(class("Lonely", "", 1, 1));
    let busy = store.push(class("Busy", "", 1, 1));
    store.push(TypeRefRow {
        type_name: "IComparable".to_string(),
        type_namespace: "System".to_string(),
    });
    store.push(InterfaceImplRow {
        class: busy.row,
        interface: CodedIndex::new(TableId::TypeRef, 1),
    });

    assert!(TypeResolver::new(&store, lonely)?.implements()?.is_empty());

    let implements = TypeResolver::new(&store, busy)?.implements()?;
    assert_eq!(implements.len(), 1);
    assert_eq!(implements[0].name.absolute, "System.IComparable");
    Ok(())
}

/// TypeSpec base types and interfaces resolve to the placeholder name.
#[test]
fn type_spec_references_use_placeholder() -> Result<()> {
    let mut store = MemoryStore::new();
    let mut row = class("Derived", "Demo", 1, 1);
    row.extends = CodedIndex::new(TableId::TypeSpec, 1);
    let derived = store.push(row);
    store.push(TypeSpecRow {
        signature: vec![GENERICINST, CLASS, 0x09, 0x01, I4],
    });
    store.push(InterfaceImplRow {
        class: derived.row,
        interface: CodedIndex::new(TableId::TypeSpec, 1),
    });

    let resolver = TypeResolver::new(&store, derived)?;
    let extends = resolver.extends()?;
    assert_eq!(extends.len(), 1);
    assert_eq!(extends[0].name.relative, "spec");
    assert_eq!(extends[0].name.absolute, "unknown.spec");

    let implements = resolver.implements()?;
    assert_eq!(implements.len(), 1);
    assert_eq!(implements[0].name.relative, "spec");
    assert_eq!(implements[0].name.absolute, "unknown.spec");
    Ok(())
}

/// Every raw field access value maps to exactly one accessibility.
#[test]
fn field_flags_have_single_accessibility() -> Result<()> {
    let mut store = MemoryStore::new();
    let owner = store.push(class("Flags", "", 1, 1));
    for access in 0..8u32 {
        store.push(field(
            &format!("f{}", access),
            access | FieldAttributes::STATIC,
            &[I4],
        ));
    }

    let fields = TypeResolver::new(&store, owner)?.fields()?;
    let expected = [
        Accessibility::Unset,
        Accessibility::Private,
        Accessibility::Protected,
        Accessibility::Unset,
        Accessibility::Protected,
        Accessibility::Protected,
        Accessibility::Public,
        Accessibility::Unset,
    ];
    for (field, expected) in fields.iter().zip(expected) {
        let access = field.flags.accessibility();
        assert_eq!(access, expected, "field {}", field.variable.name);
        assert_eq!(field.flags.with_accessibility(access), field.flags);
        assert!(field.flags.contains(Flags::STATIC));
    }
    Ok(())
}

/// Only min(rows, signature params) parameters receive a type.
#[test]
fn parameter_count_mismatch_types_common_prefix() -> Result<()> {
    let mut store = MemoryStore::new();
    let owner = store.push(class("Mismatch", "", 1, 1));
    // three Param rows, two signature parameters
    store.push(method("Many", 0, &[VOID], &[&[I4], &[STRING]], 1));
    // one Param row, two signature parameters
    store.push(method("Few", 0, &[VOID], &[&[I4], &[STRING]], 4));
    store.push(param(1, "a"));
    store.push(param(2, "b"));
    store.push(param(3, "c"));
    store.push(param(1, "x"));

    let methods = TypeResolver::new(&store, owner)?.methods()?;

    let many = &methods[0];
    assert_eq!(many.parameters.len(), 3);
    assert_eq!(many.parameters[0].ty.name.absolute, "System.Int32");
    assert_eq!(many.parameters[1].ty.name.absolute, "System.String");
    assert!(many.parameters[2].ty.is_empty());

    let few = &methods[1];
    assert_eq!(few.parameters.len(), 1);
    assert_eq!(few.parameters[0].name, "x");
    assert_eq!(few.parameters[0].ty.name.absolute, "System.Int32");
    assert_eq!(few.returns.len(), 1);
    assert_eq!(few.returns[0].ty.name.absolute, "System.Void");
    Ok(())
}

/// A malformed signature aborts the whole enumeration.
#[test]
fn decode_failure_aborts_enumeration() -> Result<()> {
    let mut store = MemoryStore::new();
    let owner = store.push(class("Broken", "", 1, 1));
    store.push(field("ok", 0, &[I4]));
    store.push(FieldRow {
        flags: 0,
        name: "bad".to_string(),
        signature: vec![0x07, I4],
    });

    let result = TypeResolver::new(&store, owner)?.fields();
    assert!(matches!(result, Err(Error::Malformed { .. })));
    assert!(TypeResolver::new(&store, owner)?.to_type().is_err());
    Ok(())
}

/// A dangling base type reference is NotFound, not a silent empty base.
#[test]
fn dangling_reference_is_not_found() -> Result<()> {
    let mut store = MemoryStore::new();
    let mut row = class("Derived", "", 1, 1);
    row.extends = CodedIndex::new(TableId::TypeRef, 3);
    let derived = store.push(row);

    match TypeResolver::new(&store, derived)?.extends() {
        Err(Error::NotFound { table, row }) => {
            assert_eq!(table, TableId::TypeRef);
            assert_eq!(row, 3);
        }
        other => panic!("expected NotFound, got {:?}", other),
    }
    Ok(())
}

/// Decoder that reports fixed shapes regardless of the blob.
#[derive(Clone)]
struct FixedDecoder;

impl SignatureDecoder for FixedDecoder {
    fn decode_field(&self, _blob: &[u8]) -> Result<SignatureField> {
        Ok(SignatureField {
            modifiers: vec![],
            base: TypeSignature::Boolean,
        })
    }

    fn decode_method(&self, _blob: &[u8]) -> Result<SignatureMethod> {
        Ok(SignatureMethod {
            has_this: true,
            param_count: 1,
            return_type: SignatureParameter {
                modifiers: vec![],
                by_ref: false,
                base: TypeSignature::Char,
            },
            params: vec![SignatureParameter {
                modifiers: vec![],
                by_ref: true,
                base: TypeSignature::I4,
            }],
            ..SignatureMethod::default()
        })
    }
}

#[test]
fn custom_decoder() -> Result<()> {
    let mut store = MemoryStore::new();
    let owner = store.push(class("Custom", "", 1, 1));
    store.push(FieldRow {
        flags: 0,
        name: "flag".to_string(),
        signature: vec![],
    });
    store.push(MethodDefRow {
        flags: 0,
        name: "Run".to_string(),
        signature: vec![],
        param_list: 1,
    });
    store.push(param(1, "counter"));

    let ty = TypeResolver::new(&store, owner)?
        .with_decoder(FixedDecoder)
        .to_type()?;
    assert_eq!(ty.fields[0].variable.ty.name.absolute, "System.Boolean");
    assert_eq!(ty.methods[0].returns[0].ty.name.absolute, "System.Char");
    assert_eq!(ty.methods[0].parameters[0].ty.name.relative, "Int32&");
    Ok(())
}

/// Empty names, lists and flags are left out of the serialized form.
#[test]
fn serialization_omits_empty_values() -> Result<()> {
    let mut store = MemoryStore::new();
    let owner = store.push(class("Point", "", 1, 1));
    store.push(field("x", FieldAttributes::PUBLIC, &[I4]));

    let ty = TypeResolver::new(&store, owner)?.to_type()?;
    let json = serde_json::to_value(&ty).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "name": { "relative": "Point" },
            "flags": Flags::CLASS.with_accessibility(Accessibility::Public).bits(),
            "fields": [{
                "name": "x",
                "type": { "name": { "relative": "Int32", "absolute": "System.Int32" } },
                "flags": 1
            }]
        })
    );

    let back: Type = serde_json::from_value(json).unwrap();
    assert_eq!(back, ty);
    Ok(())
}

/// Every type of a store, in row order.
#[test]
fn resolve_all_in_row_order() -> Result<()> {
    let mut store = MemoryStore::new();
    for i in 0..32 {
        store.push(class(&format!("T{}", i), "Bulk", 1, 1));
    }
    store.push(field("shared", 0, &[I4]));

    let types = resolve_all(&store, ResolverOptions::default())?;
    assert_eq!(types.len(), 32);
    for (i, ty) in types.iter().enumerate() {
        assert_eq!(ty.name.relative, format!("T{}", i));
    }
    // only the last type owns the field
    assert_eq!(types[31].fields.len(), 1);
    assert!(types[..31].iter().all(|t| t.fields.is_empty()));
    Ok(())
}

#[test]
fn resolve_all_reports_first_failure() {
    let mut store = MemoryStore::new();
    store.push(class("Good", "", 1, 1));
    let mut bad = class("Bad", "", 1, 1);
    bad.extends = CodedIndex::new(TableId::TypeRef, 7);
    store.push(bad);
    let mut worse = class("Worse", "", 1, 1);
    worse.extends = CodedIndex::new(TableId::TypeRef, 9);
    store.push(worse);

    match resolve_all(&store, ResolverOptions::minimal()) {
        Err(Error::NotFound { row, .. }) => assert_eq!(row, 7),
        other => panic!("expected NotFound, got {:?}", other.map(|t| t.len())),
    }
}
