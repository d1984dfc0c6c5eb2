//! Template import
//!
//! Turns raw spreadsheet rows into a structured template: table metadata
//! plus one normalized field record per data row. The workbook itself is
//! read by the `excel` module; everything downstream works on plain rows of
//! `Cell` values, so templates can also be parsed from in-memory data.

pub mod excel;
pub mod template;

use crate::models::{KeyRole, Length};

/// Primitive spreadsheet cell value as handed back by the sheet reader.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Str(String),
    Int(i64),
    Float(f64),
}

impl Cell {
    /// Text form of the cell; integral floats render without the fraction.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Str(s) => s.clone(),
            Cell::Int(i) => i.to_string(),
            Cell::Float(f) if f.fract() == 0.0 => (*f as i64).to_string(),
            Cell::Float(f) => f.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// One column of the template after field-level normalization.
///
/// Still raw in one respect: `default` stays a plain cell value here, its
/// final typed form is decided during `FieldSpec` construction.
#[derive(Debug, Clone)]
pub struct FieldRecord {
    pub name: String,
    pub data_type: String,
    pub length: Option<Length>,
    pub nullable: bool,
    pub default: Cell,
    pub key: Option<KeyRole>,
    pub extra: Vec<String>,
    pub comment: String,
}

/// Parsed template for one sheet: table metadata plus its field records in
/// sheet order.
#[derive(Debug, Clone)]
pub struct Template {
    pub table: String,
    pub comment: String,
    pub fields: Vec<FieldRecord>,
}

// Re-export for convenience
pub use excel::read_sheet;
pub use template::TemplateReader;
