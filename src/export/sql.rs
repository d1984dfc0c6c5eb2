//! Sheet-to-statement pipeline.

use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::import::{excel, TemplateReader};
use crate::models::TableSpec;

/// Generator for CREATE TABLE statements from template workbooks.
pub struct DdlGenerator;

impl DdlGenerator {
    /// Render the CREATE TABLE statement for one sheet of a template file.
    pub fn generate_sheet(path: &Path, index: usize) -> Result<String> {
        let rows = excel::read_sheet(path, index)?;
        let template = TemplateReader::parse_rows(&rows, path)?;
        info!(
            table = %template.table,
            fields = template.fields.len(),
            sheet = index,
            "parsed template"
        );
        let table = TableSpec::from_template(template)?;
        Ok(table.clause())
    }

    /// Render every requested sheet, newline-separated in the given order.
    ///
    /// Aborts on the first failing sheet; no partial output is produced
    /// for it.
    pub fn generate(path: &Path, sheets: &[usize]) -> Result<String> {
        let mut clauses = Vec::with_capacity(sheets.len());
        for &sheet in sheets {
            clauses.push(Self::generate_sheet(path, sheet)?);
        }
        Ok(clauses.join("\n"))
    }

    /// Write rendered statements to a file, or to stdout when no path is
    /// given.
    pub fn write(sql: &str, output: Option<&Path>) -> Result<()> {
        match output {
            Some(path) => fs::write(path, sql)?,
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(sql.as_bytes())?;
                stdout.write_all(b"\n")?;
            }
        }
        Ok(())
    }
}
