//! Error types for dtype mapping and binary-layout derivation.

use thiserror::Error;

use crate::dtype::Dtype;

/// Result type for ctree operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The dtype has no spelling for the requested target language.
    #[error("unable to map dtype '{dtype}' to a {target} type")]
    UnsupportedDtype { dtype: Dtype, target: &'static str },

    /// The dtype has no width-suffixed vector spelling.
    #[error("dtype '{dtype}' has no vector type of width {count}")]
    UnsupportedVectorType { dtype: Dtype, count: u32 },

    /// The declarator cannot be described by a binary layout.
    #[error("declarator '{what}' has no binary layout")]
    NoStructFormat { what: String },

    /// A positional value list does not match the struct's field count.
    #[error("expected {expected} field values, got {actual}")]
    FieldArityMismatch { expected: usize, actual: usize },

    /// A field value does not fit the field's declared type.
    #[error("value for field '{field}' does not fit its declared type")]
    FieldTypeMismatch { field: String },

    /// A byte buffer does not match the struct's packed size.
    #[error("buffer of {actual} bytes does not match struct size {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// A struct was built from an empty field list.
    #[error("struct '{tpname}' must have at least one field")]
    EmptyStruct { tpname: String },
}
