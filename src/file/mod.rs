//! Byte-level reading primitives used to decode metadata blobs.
//!
//! - [`io`] - Bounds-checked little-endian reads
//! - [`parser`] - Cursor-based [`parser::Parser`] with ECMA-335 compressed encodings

pub mod io;
pub mod parser;
