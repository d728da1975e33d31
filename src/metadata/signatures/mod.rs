//! Field and method signature decoding.
//!
//! Fields and methods describe their types in compressed signature blobs (ECMA-335 II.23.2).
//! The resolver consumes them through the [`SignatureDecoder`] trait; [`BlobDecoder`] is the
//! default implementation backed by [`SignatureParser`].
//!
//! # Examples
//!
//! ```rust
//! use dotcomplete::metadata::signatures::{parse_method_signature, TypeSignature};
//!
//! // instance string M(int32)
//! let method = parse_method_signature(&[0x20, 0x01, 0x0E, 0x08])?;
//!
//! assert!(method.has_this);
//! assert_eq!(method.return_type.base, TypeSignature::String);
//! assert_eq!(method.params[0].base, TypeSignature::I4);
//! # Ok::<(), dotcomplete::Error>(())
//! ```
//!
//! # References
//!
//! - ECMA-335 6th Edition, Partition II, Section 23.2 - Blobs and Signatures

mod parser;
mod types;

pub use parser::*;
pub use types::*;

use crate::Result;

#[allow(non_snake_case)]
/// Element type bytes used in signature blobs (II.23.1.16)
pub mod ELEMENT_TYPE {
    /// Marks end of a list
    pub const END: u8 = 0x00;
    /// void
    pub const VOID: u8 = 0x01;
    /// bool
    pub const BOOLEAN: u8 = 0x02;
    /// char
    pub const CHAR: u8 = 0x03;
    /// int8
    pub const I1: u8 = 0x04;
    /// unsigned int8
    pub const U1: u8 = 0x05;
    /// int16
    pub const I2: u8 = 0x06;
    /// unsigned int16
    pub const U2: u8 = 0x07;
    /// int32
    pub const I4: u8 = 0x08;
    /// unsigned int32
    pub const U4: u8 = 0x09;
    /// int64
    pub const I8: u8 = 0x0a;
    /// unsigned int64
    pub const U8: u8 = 0x0b;
    /// float32
    pub const R4: u8 = 0x0c;
    /// float64
    pub const R8: u8 = 0x0d;
    /// System.String
    pub const STRING: u8 = 0x0e;
    /// Followed by type
    pub const PTR: u8 = 0x0f;
    /// Followed by type
    pub const BYREF: u8 = 0x10;
    /// Followed by `TypeDef` or `TypeRef` token
    pub const VALUETYPE: u8 = 0x11;
    /// Followed by `TypeDef` or `TypeRef` token
    pub const CLASS: u8 = 0x12;
    /// Generic parameter in a generic type definition, represented as number
    pub const VAR: u8 = 0x13;
    /// type rank boundsCount bound1 … loCount lo1 …
    pub const ARRAY: u8 = 0x14;
    /// Generic type instantiation. Followed by type type-arg-count type-1 ... type-n
    pub const GENERICINST: u8 = 0x15;
    /// `TypedReference`
    pub const TYPEDBYREF: u8 = 0x16;
    /// `System.IntPtr`
    pub const I: u8 = 0x18;
    /// `System.UIntPtr`
    pub const U: u8 = 0x19;
    /// Followed by full method signature
    pub const FNPTR: u8 = 0x1b;
    /// `System.Object`
    pub const OBJECT: u8 = 0x1c;
    /// Single-dim array with 0 lower bound
    pub const SZARRAY: u8 = 0x1d;
    /// Generic parameter in a generic method definition, represented as number
    pub const MVAR: u8 = 0x1e;
    /// Required modifier : followed by a `TypeDef` or `TypeRef` token
    pub const CMOD_REQD: u8 = 0x1f;
    /// Optional modifier : followed by a `TypeDef` or `TypeRef` token
    pub const CMOD_OPT: u8 = 0x20;
    /// Implemented within the CLI
    pub const INTERNAL: u8 = 0x21;
    /// Sentinel for vararg method signature
    pub const SENTINEL: u8 = 0x41;
    /// Denotes a local variable that points at a pinned object
    pub const PINNED: u8 = 0x45;
}

#[allow(non_snake_case)]
/// Leading byte of method and field signatures (II.23.2.1, II.23.2.4)
pub mod CALLING_CONVENTION {
    /// Mask for the calling convention kind in the low nibble
    pub const KIND_MASK: u8 = 0x0F;
    /// Managed default convention
    pub const DEFAULT: u8 = 0x00;
    /// Unmanaged cdecl
    pub const C: u8 = 0x01;
    /// Unmanaged stdcall
    pub const STDCALL: u8 = 0x02;
    /// Unmanaged thiscall
    pub const THISCALL: u8 = 0x03;
    /// Unmanaged fastcall
    pub const FASTCALL: u8 = 0x04;
    /// Managed vararg
    pub const VARARG: u8 = 0x05;
    /// Leading byte of a field signature
    pub const FIELD: u8 = 0x06;
    /// Method declares generic parameters
    pub const GENERIC: u8 = 0x10;
    /// Instance method
    pub const HASTHIS: u8 = 0x20;
    /// `this` is passed explicitly as the first parameter
    pub const EXPLICITTHIS: u8 = 0x40;
}

/// Turns signature blobs into structured signatures.
///
/// Implementations must be usable from several resolvers at once if those run on multiple
/// threads; [`BlobDecoder`] is stateless.
pub trait SignatureDecoder {
    /// Decode a `FieldSig` blob
    ///
    /// # Errors
    /// Returns an error if the blob is malformed or uses an unsupported encoding.
    fn decode_field(&self, blob: &[u8]) -> Result<SignatureField>;

    /// Decode a `MethodDefSig` blob
    ///
    /// # Errors
    /// Returns an error if the blob is malformed or uses an unsupported encoding.
    fn decode_method(&self, blob: &[u8]) -> Result<SignatureMethod>;
}

/// The default [`SignatureDecoder`], decoding ECMA-335 blobs with [`SignatureParser`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BlobDecoder;

impl SignatureDecoder for BlobDecoder {
    fn decode_field(&self, blob: &[u8]) -> Result<SignatureField> {
        parse_field_signature(blob)
    }

    fn decode_method(&self, blob: &[u8]) -> Result<SignatureMethod> {
        parse_method_signature(blob)
    }
}

/// Parse a `MethodSignature` from a byte slice
///
/// ## Arguments
/// * 'data' - The input slice to parse
///
/// # Errors
/// Returns an error if the signature data is malformed or parsing fails
pub fn parse_method_signature(data: &[u8]) -> Result<SignatureMethod> {
    let mut parser = SignatureParser::new(data);
    parser.parse_method_signature()
}

/// Parse a `FieldSignature` from a byte slice
///
/// ## Arguments
/// * 'data' - The input slice to parse
///
/// # Errors
/// Returns an error if the signature data is malformed or parsing fails
pub fn parse_field_signature(data: &[u8]) -> Result<SignatureField> {
    let mut parser = SignatureParser::new(data);
    parser.parse_field_signature()
}
