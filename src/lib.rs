//! sqlgen - spreadsheet schema templates to MySQL CREATE TABLE statements
//!
//! Provides:
//! - Template reading (row classification + field-record normalization)
//! - Column/table models with construction-time validation and defaulting
//! - DDL rendering and the per-sheet generation pipeline
//! - Sheet-selection expressions for the CLI batch driver

pub mod cli;
pub mod error;
pub mod export;
pub mod import;
pub mod models;
pub mod reserved;

// Re-export commonly used types
pub use error::{Result, SqlGenError};
pub use export::DdlGenerator;
pub use import::{Cell, FieldRecord, Template, TemplateReader};
pub use models::{DefaultValue, FieldName, FieldSpec, KeyRole, Length, TableOptions, TableSpec};
