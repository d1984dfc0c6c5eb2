//! Column model: validation, defaulting and per-column clause rendering.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SqlGenError};
use crate::import::{Cell, FieldRecord};
use crate::reserved;

/// Structural role of a column in the table's keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyRole {
    Primary,
    Index,
    Unique,
}

impl KeyRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyRole::Primary => "PRIMARY",
            KeyRole::Index => "INDEX",
            KeyRole::Unique => "UNIQUE",
        }
    }
}

/// Column length: single display width or a precision/scale pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Length {
    Single(i64),
    Pair(i64, i64),
}

/// Normalized default value. Quoting is decided once, at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DefaultValue {
    Int(i64),
    Float(f64),
    /// Rendered wrapped in double quotes.
    Text(String),
    /// Reserved keyword such as CURRENT_TIMESTAMP, rendered bare.
    Keyword(String),
}

/// Identity key of a column. Field equality and hashing go by name alone,
/// so any deduplicating container must key on this type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldName(String);

impl FieldName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The validated, semantically typed model of one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSpec {
    name: FieldName,
    data_type: String,
    length: Option<Length>,
    nullable: bool,
    default: Option<DefaultValue>,
    comment: String,
    key: Option<KeyRole>,
    extra: Vec<String>,
}

impl PartialEq for FieldSpec {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for FieldSpec {}

impl std::hash::Hash for FieldSpec {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl FieldSpec {
    /// Validate a normalized field record and run defaulting and length
    /// fixup. Validation order: Type, Extra and Key tokens against the
    /// reserved-word list, then the name.
    pub fn from_record(record: FieldRecord) -> Result<Self> {
        if !reserved::is_token_allowed(&record.data_type) {
            return Err(SqlGenError::InvalidReservedWord(record.data_type));
        }
        if !reserved::are_all_tokens_allowed(&record.extra) {
            return Err(SqlGenError::InvalidReservedWord(record.extra.join(",")));
        }
        if let Some(key) = record.key {
            if !reserved::is_token_allowed(key.as_str()) {
                return Err(SqlGenError::InvalidReservedWord(key.as_str().to_string()));
            }
        }
        let name = record.name.trim().to_string();
        if name.is_empty() {
            return Err(SqlGenError::EmptyFieldName);
        }

        let default = infer_default(&record.data_type, &record.default);
        // date/time types never carry a length, whatever the template said
        let length = if reserved::is_datetime_type(&record.data_type) {
            None
        } else {
            record.length
        };

        Ok(Self {
            name: FieldName(name),
            data_type: record.data_type,
            length,
            nullable: record.nullable,
            default,
            comment: record.comment,
            key: record.key,
            extra: record.extra,
        })
    }

    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    pub fn length(&self) -> Option<Length> {
        self.length
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn default(&self) -> Option<&DefaultValue> {
        self.default.as_ref()
    }

    pub fn key_role(&self) -> Option<KeyRole> {
        self.key
    }

    pub fn extra(&self) -> &[String] {
        &self.extra
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn is_primary(&self) -> bool {
        self.key == Some(KeyRole::Primary)
    }

    pub fn is_index(&self) -> bool {
        self.key == Some(KeyRole::Index)
    }

    pub fn is_unique(&self) -> bool {
        self.key == Some(KeyRole::Unique)
    }

    /// Render this column's definition clause.
    ///
    /// Fragments are joined with single spaces without compacting the empty
    /// ones; the double spaces that leaves are documented current behavior
    /// and carry no meaning.
    pub fn clause(&self) -> String {
        let dtype = match self.length {
            Some(Length::Single(n)) => format!("{}({})", self.data_type, n),
            Some(Length::Pair(precision, scale)) => {
                format!("{}({},{})", self.data_type, precision, scale)
            }
            None => self.data_type.clone(),
        };
        let null = if self.nullable { "" } else { "NOT NULL" };
        let default = match &self.default {
            Some(DefaultValue::Int(i)) => format!("DEFAULT {i}"),
            Some(DefaultValue::Float(f)) => format!("DEFAULT {f}"),
            Some(DefaultValue::Text(s)) => format!("DEFAULT \"{s}\""),
            Some(DefaultValue::Keyword(k)) => format!("DEFAULT {k}"),
            None => String::new(),
        };
        let extra = self.extra.join(" ");
        let comment = if self.comment.is_empty() {
            String::new()
        } else {
            format!("COMMENT \"{}\"", self.comment)
        };
        format!("`{}` {} {} {} {} {}", self.name, dtype, null, default, extra, comment)
    }
}

/// Default inference over the raw cell the template supplied.
///
/// String-like types turn an absent default into the empty-string literal;
/// numeric types keep an absent default unset so the column can default to
/// NULL. Supplied numbers are coerced (integral floats to integers, and to
/// quoted text on string-like columns); supplied strings stay bare only
/// when they are themselves reserved keywords.
fn infer_default(data_type: &str, raw: &Cell) -> Option<DefaultValue> {
    let string_like = reserved::is_string_type(data_type);
    match raw {
        Cell::Empty => string_like.then(|| DefaultValue::Text(String::new())),
        Cell::Str(s) if s.is_empty() => string_like.then(|| DefaultValue::Text(String::new())),
        Cell::Str(s) => {
            if reserved::is_token_allowed(&s.to_uppercase()) {
                Some(DefaultValue::Keyword(s.clone()))
            } else {
                Some(DefaultValue::Text(s.clone()))
            }
        }
        Cell::Int(i) => Some(if string_like {
            DefaultValue::Text(i.to_string())
        } else {
            DefaultValue::Int(*i)
        }),
        Cell::Float(f) if f.fract() == 0.0 => {
            let i = *f as i64;
            Some(if string_like {
                DefaultValue::Text(i.to_string())
            } else {
                DefaultValue::Int(i)
            })
        }
        Cell::Float(f) => Some(if string_like {
            DefaultValue::Text(f.to_string())
        } else {
            DefaultValue::Float(*f)
        }),
    }
}
