use thiserror::Error;

use crate::metadata::{tables::TableId, token::Token};

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! out_of_bounds_error {
    () => {
        crate::Error::OutOfBounds
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Table Access Errors
/// - [`Error::NotFound`] - A row lookup addressed a row that does not exist (row 0, or past the end)
///
/// ## Domain Conditions
/// - [`Error::NotApplicable`] - The requested operation has no meaning for this row, e.g. asking an
///   interface for its base type. Callers treat this as "no result", never as a failure.
///
/// ## Signature Decoding Errors
/// - [`Error::Malformed`] - A signature blob is corrupted or uses an unsupported encoding
/// - [`Error::OutOfBounds`] - A signature blob ended early
/// - [`Error::RecursionLimit`] - Nesting exceeded the configured maximum depth
///
/// # Examples
///
/// ```rust
/// use dotcomplete::{Error, metadata::tables::TableId};
///
/// let err = Error::NotFound { table: TableId::Field, row: 7 };
/// assert!(!err.is_not_applicable());
/// assert_eq!(err.to_string(), "Row 7 of table Field does not exist");
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A table lookup addressed a nonexistent row.
    ///
    /// Row indices are 1-based, so row 0 (the null reference) always ends up here, as does any
    /// row beyond the table's row count. This indicates corrupt or inconsistent table data and
    /// aborts the current resolution.
    #[error("Row {row} of table {table:?} does not exist")]
    NotFound {
        /// The table that was addressed
        table: TableId,
        /// The 1-based row that was requested
        row: u32,
    },

    /// The operation does not apply to the referenced row.
    ///
    /// Raised by [`crate::resolver::TypeResolver::extends`] for interfaces, which have no base
    /// type. The associated [`Token`] identifies the `TypeDef` row.
    #[error("TypeDef {0} is an interface, not a class")]
    NotApplicable(Token),

    /// A signature blob is damaged and could not be decoded.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// An out of bound access was attempted while decoding a blob.
    #[error("Out of Bound read would have occurred!")]
    OutOfBounds,

    /// Recursion limit reached.
    ///
    /// Signature decoding and type resolution are recursive; a maximum depth is enforced so that
    /// hostile or cyclic metadata cannot overflow the stack. The associated value is the limit.
    #[error("Reach the maximum recursion level allowed - {0}")]
    RecursionLimit(usize),
}

impl Error {
    /// Returns `true` for the [`Error::NotApplicable`] domain condition.
    #[must_use]
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Error::NotApplicable(_))
    }
}
