//! Core models for columns and tables.
//!
//! A `FieldSpec` is built once from a normalized field record and is
//! immutable afterwards; a `TableSpec` owns its fields exclusively. Both
//! render their own DDL clauses and are discarded after rendering.

pub mod field;
pub mod table;

pub use field::{DefaultValue, FieldName, FieldSpec, KeyRole, Length};
pub use table::{TableOptions, TableSpec};
