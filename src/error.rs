//! Error types shared across the crate.

use std::path::PathBuf;

/// Error raised anywhere in the template-to-DDL pipeline.
///
/// Template-structure problems carry the offending file path or value so the
/// message can be surfaced to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum SqlGenError {
    #[error("invalid sql reserved word: {0}")]
    InvalidReservedWord(String),

    #[error("unknown key token: {0}")]
    UnknownKeyToken(String),

    #[error("invalid template, please check file: {0}")]
    InvalidTemplate(PathBuf),

    #[error("empty field name in template row")]
    EmptyFieldName,

    #[error("unparseable length value: {0}")]
    InvalidLength(String),

    #[error("extra attributes must be a text cell, got: {0}")]
    NonStringExtra(String),

    #[error("cannot open workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    #[error("sheet index {index} out of range for {path}")]
    SheetIndex { index: usize, path: PathBuf },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SqlGenError>;
