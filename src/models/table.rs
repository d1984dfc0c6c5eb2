//! Table model: aggregation, key derivation and statement rendering.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::import::Template;
use crate::models::field::{FieldName, FieldSpec};

/// Table-level options. Unset options contribute no token to the rendered
/// statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableOptions {
    pub engine: Option<String>,
    pub charset: Option<String>,
    pub row_format: Option<String>,
    pub auto_increment: Option<u64>,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            engine: Some("InnoDB".to_string()),
            charset: Some("utf8mb4".to_string()),
            row_format: Some("DYNAMIC".to_string()),
            auto_increment: None,
        }
    }
}

/// The validated model of one table: metadata, options and its columns in
/// sheet order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSpec {
    name: String,
    comment: String,
    options: TableOptions,
    fields: Vec<FieldSpec>,
}

impl TableSpec {
    /// Aggregate fields into a table. A later field with an already-seen
    /// name overwrites the earlier one in place, keeping the original
    /// position; collisions are not an error.
    pub fn new(
        name: String,
        comment: String,
        options: TableOptions,
        fields: Vec<FieldSpec>,
    ) -> Self {
        let mut ordered: Vec<FieldSpec> = Vec::with_capacity(fields.len());
        let mut positions: HashMap<FieldName, usize> = HashMap::new();
        for field in fields {
            match positions.get(field.name()) {
                Some(&at) => ordered[at] = field,
                None => {
                    positions.insert(field.name().clone(), ordered.len());
                    ordered.push(field);
                }
            }
        }
        Self { name, comment, options, fields: ordered }
    }

    /// Build a table from a parsed template with the default options.
    pub fn from_template(template: Template) -> Result<Self> {
        let mut fields = Vec::with_capacity(template.fields.len());
        for record in template.fields {
            fields.push(FieldSpec::from_record(record)?);
        }
        Ok(Self::new(template.table, template.comment, TableOptions::default(), fields))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn options(&self) -> &TableOptions {
        &self.options
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// First field flagged PRIMARY, in sheet order. Later PRIMARY fields
    /// keep the role in the model but are ignored here.
    pub fn primary(&self) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.is_primary())
    }

    /// Every INDEX field, each rendered as its own named index.
    pub fn indexes(&self) -> Vec<&FieldSpec> {
        self.fields.iter().filter(|f| f.is_index()).collect()
    }

    /// Every UNIQUE field; all of them merge into one composite unique key.
    pub fn uniques(&self) -> Vec<&FieldSpec> {
        self.fields.iter().filter(|f| f.is_unique()).collect()
    }

    fn unique_key_name(members: &[&FieldSpec]) -> String {
        let joined: Vec<&str> = members.iter().map(|f| f.name().as_str()).collect();
        format!("uk_{}", joined.join("_"))
    }

    /// Render the full CREATE TABLE statement.
    pub fn clause(&self) -> String {
        let mut defs: Vec<String> =
            self.fields.iter().map(|f| format!("  {}", f.clause())).collect();

        if let Some(pk) = self.primary() {
            defs.push(format!("  PRIMARY KEY (`{}`)", pk.name()));
        }
        for index in self.indexes() {
            defs.push(format!(
                "  INDEX `{}_index` USING BTREE (`{}`)",
                index.name(),
                index.name()
            ));
        }
        let uniques = self.uniques();
        if !uniques.is_empty() {
            let cols: Vec<String> =
                uniques.iter().map(|f| format!("`{}`", f.name())).collect();
            defs.push(format!(
                "  UNIQUE KEY `{}` ({})",
                Self::unique_key_name(&uniques),
                cols.join(", ")
            ));
        }

        let mut sql =
            format!("CREATE TABLE IF NOT EXISTS `{}` (\n{}\n)", self.name, defs.join(",\n"));

        if let Some(engine) = self.options.engine.as_deref().filter(|v| !v.is_empty()) {
            sql.push_str(&format!(" ENGINE={engine}"));
        }
        if let Some(auto_increment) = self.options.auto_increment {
            sql.push_str(&format!(" AUTO_INCREMENT={auto_increment}"));
        }
        if let Some(charset) = self.options.charset.as_deref().filter(|v| !v.is_empty()) {
            sql.push_str(&format!(" DEFAULT CHARSET={charset}"));
        }
        if let Some(row_format) = self.options.row_format.as_deref().filter(|v| !v.is_empty()) {
            sql.push_str(&format!(" ROW_FORMAT={row_format}"));
        }
        if !self.comment.is_empty() {
            sql.push_str(&format!(" COMMENT=\"{}\"", self.comment));
        }
        sql.push(';');
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::{Cell, FieldRecord};
    use crate::models::KeyRole;

    fn field(name: &str, data_type: &str, key: Option<KeyRole>) -> FieldSpec {
        FieldSpec::from_record(FieldRecord {
            name: name.to_string(),
            data_type: data_type.to_string(),
            length: None,
            nullable: true,
            default: Cell::Empty,
            key,
            extra: Vec::new(),
            comment: String::new(),
        })
        .unwrap()
    }

    fn table(fields: Vec<FieldSpec>) -> TableSpec {
        TableSpec::new("t".to_string(), String::new(), TableOptions::default(), fields)
    }

    #[test]
    fn test_name_collision_overwrites_in_place() {
        let spec = table(vec![
            field("a", "INT", None),
            field("b", "INT", None),
            field("a", "VARCHAR", None),
        ]);
        assert_eq!(spec.fields().len(), 2);
        assert_eq!(spec.fields()[0].name().as_str(), "a");
        assert_eq!(spec.fields()[0].data_type(), "VARCHAR");
        assert_eq!(spec.fields()[1].name().as_str(), "b");
    }

    #[test]
    fn test_first_primary_wins() {
        // two PRIMARY rows: only the first drives the key clause, current
        // behavior preserved deliberately
        let spec = table(vec![
            field("a", "INT", Some(KeyRole::Primary)),
            field("b", "INT", Some(KeyRole::Primary)),
        ]);
        assert_eq!(spec.primary().unwrap().name().as_str(), "a");
        let sql = spec.clause();
        assert!(sql.contains("PRIMARY KEY (`a`)"));
        assert!(!sql.contains("PRIMARY KEY (`b`)"));
        assert!(spec.fields()[1].is_primary());
    }

    #[test]
    fn test_each_index_field_gets_own_clause() {
        let spec = table(vec![
            field("x", "INT", Some(KeyRole::Index)),
            field("y", "INT", Some(KeyRole::Index)),
        ]);
        let sql = spec.clause();
        assert!(sql.contains("INDEX `x_index` USING BTREE (`x`)"));
        assert!(sql.contains("INDEX `y_index` USING BTREE (`y`)"));
    }

    #[test]
    fn test_unique_fields_merge_into_one_composite_key() {
        // all UNIQUE fields fold into a single composite key, current
        // behavior preserved deliberately
        let spec = table(vec![
            field("a", "INT", Some(KeyRole::Unique)),
            field("b", "INT", Some(KeyRole::Unique)),
        ]);
        let sql = spec.clause();
        assert_eq!(sql.matches("UNIQUE KEY").count(), 1);
        assert!(sql.contains("UNIQUE KEY `uk_a_b` (`a`, `b`)"));
    }

    #[test]
    fn test_unique_naming_extends_beyond_two_members() {
        let spec = table(vec![
            field("a", "INT", Some(KeyRole::Unique)),
            field("b", "INT", Some(KeyRole::Unique)),
            field("c", "INT", Some(KeyRole::Unique)),
        ]);
        assert!(spec.clause().contains("UNIQUE KEY `uk_a_b_c` (`a`, `b`, `c`)"));
    }

    #[test]
    fn test_default_options_rendered() {
        let sql = table(vec![field("a", "INT", None)]).clause();
        assert!(sql.contains("ENGINE=InnoDB"));
        assert!(sql.contains("DEFAULT CHARSET=utf8mb4"));
        assert!(sql.contains("ROW_FORMAT=DYNAMIC"));
        assert!(!sql.contains("AUTO_INCREMENT="));
        assert!(sql.trim_end().ends_with(';'));
    }

    #[test]
    fn test_unset_options_contribute_no_token() {
        let options = TableOptions {
            engine: None,
            charset: None,
            row_format: None,
            auto_increment: None,
        };
        let sql = TableSpec::new(
            "bare".to_string(),
            String::new(),
            options,
            vec![field("a", "INT", None)],
        )
        .clause();
        assert!(!sql.contains("ENGINE="));
        assert!(!sql.contains("CHARSET="));
        assert!(!sql.contains("ROW_FORMAT="));
        assert!(!sql.contains("COMMENT="));
    }

    #[test]
    fn test_table_comment_option() {
        let sql = TableSpec::new(
            "user".to_string(),
            "用户表".to_string(),
            TableOptions::default(),
            vec![field("a", "INT", None)],
        )
        .clause();
        assert!(sql.contains("COMMENT=\"用户表\""));
    }

    #[test]
    fn test_auto_increment_rendered_when_set() {
        let options = TableOptions { auto_increment: Some(1000), ..TableOptions::default() };
        let sql = TableSpec::new("t".to_string(), String::new(), options, vec![field("a", "INT", None)])
            .clause();
        assert!(sql.contains("AUTO_INCREMENT=1000"));
    }
}
