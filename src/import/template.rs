//! Row classification and field-record normalization.
//!
//! A template sheet mixes marker rows (database name, table name, table
//! comment), one header row and numbered data rows. Rows are classified by
//! their leading cell; data rows are accepted only when their sequence
//! number matches the running count, which filters out stray annotation
//! rows interleaved in the sheet.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Result, SqlGenError};
use crate::import::{Cell, FieldRecord, Template};
use crate::models::{KeyRole, Length};

const DB_NAME_MARKER: &str = "库名";
const TABLE_NAME_MARKER: &str = "表名";
const TABLE_COMMENT_MARKER: &str = "表注释";
const SEQ_MARKER: &str = "seq";
const SEQ_MARKER_LOCALIZED: &str = "序号";

/// Canonical header keys, shared between the English and localized header
/// vocabularies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum HeaderKey {
    Seq,
    Field,
    Type,
    Length,
    Null,
    Default,
    Key,
    Extra,
    Comment,
}

/// Localized header labels mapped to canonical keys.
static HEADER_LABELS: Lazy<HashMap<&'static str, HeaderKey>> = Lazy::new(|| {
    HashMap::from([
        ("序号", HeaderKey::Seq),
        ("字段名", HeaderKey::Field),
        ("类型", HeaderKey::Type),
        ("长度", HeaderKey::Length),
        ("可空", HeaderKey::Null),
        ("默认值", HeaderKey::Default),
        ("键", HeaderKey::Key),
        ("额外属性", HeaderKey::Extra),
        ("注释", HeaderKey::Comment),
    ])
});

/// Key-role synonyms: localized labels plus MySQL's abbreviated and full
/// tokens, matched case-insensitively.
static KEY_SYNONYMS: Lazy<HashMap<&'static str, KeyRole>> = Lazy::new(|| {
    HashMap::from([
        ("主键", KeyRole::Primary),
        ("PRI", KeyRole::Primary),
        ("PRIMARY", KeyRole::Primary),
        ("索引", KeyRole::Index),
        ("普通索引", KeyRole::Index),
        ("MUL", KeyRole::Index),
        ("INDEX", KeyRole::Index),
        ("唯一索引", KeyRole::Unique),
        ("唯一键", KeyRole::Unique),
        ("UNI", KeyRole::Unique),
        ("UNIQUE", KeyRole::Unique),
    ])
});

/// Reader turning one sheet's raw rows into a [`Template`].
pub struct TemplateReader;

impl TemplateReader {
    /// Parse the full set of rows for one sheet. `path` only feeds error
    /// messages.
    pub fn parse_rows(rows: &[Vec<Cell>], path: &Path) -> Result<Template> {
        let mut table = String::new();
        let mut comment = String::new();
        let mut header: Option<Vec<Option<HeaderKey>>> = None;
        let mut accepted: Vec<&Vec<Cell>> = Vec::new();
        let mut expected_seq: i64 = 1;

        for row in rows {
            let lead = row.first().cloned().unwrap_or(Cell::Empty);
            if let Cell::Str(s) = &lead {
                let marker = s.trim();
                if marker == DB_NAME_MARKER {
                    // recorded for the log, not used downstream
                    debug!(db = %cell_at(row, 1).to_text(), "database name marker ignored");
                    continue;
                }
                if marker == TABLE_NAME_MARKER {
                    table = cell_at(row, 1).to_text().trim().to_string();
                    continue;
                }
                if marker == TABLE_COMMENT_MARKER {
                    comment = cell_at(row, 1).to_text().trim().to_string();
                    continue;
                }
                if marker.eq_ignore_ascii_case(SEQ_MARKER) || marker == SEQ_MARKER_LOCALIZED {
                    header = Some(row.iter().map(|c| header_key(&c.to_text())).collect());
                    continue;
                }
            }
            if let Some(seq) = seq_number(&lead) {
                if seq == expected_seq {
                    accepted.push(row);
                    expected_seq += 1;
                } else {
                    debug!(seq, expected = expected_seq, "dropping out-of-sequence row");
                }
            }
        }

        let header = match header {
            Some(keys) if !table.is_empty() && !accepted.is_empty() => keys,
            _ => return Err(SqlGenError::InvalidTemplate(path.to_path_buf())),
        };

        let mut fields = Vec::with_capacity(accepted.len());
        for row in accepted {
            fields.push(normalize(&header, row)?);
        }

        Ok(Template { table, comment, fields })
    }
}

fn cell_at(row: &[Cell], idx: usize) -> Cell {
    row.get(idx).cloned().unwrap_or(Cell::Empty)
}

fn header_key(label: &str) -> Option<HeaderKey> {
    let label = label.trim();
    if let Some(key) = HEADER_LABELS.get(label) {
        return Some(*key);
    }
    match label.to_ascii_lowercase().as_str() {
        "seq" => Some(HeaderKey::Seq),
        "field" => Some(HeaderKey::Field),
        "type" => Some(HeaderKey::Type),
        "length" => Some(HeaderKey::Length),
        "null" => Some(HeaderKey::Null),
        "default" => Some(HeaderKey::Default),
        "key" => Some(HeaderKey::Key),
        "extra" => Some(HeaderKey::Extra),
        "comment" => Some(HeaderKey::Comment),
        _ => None,
    }
}

fn seq_number(cell: &Cell) -> Option<i64> {
    match cell {
        Cell::Int(i) => Some(*i),
        Cell::Float(f) => Some(*f as i64),
        Cell::Str(s) => {
            let s = s.trim();
            if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) {
                s.parse().ok()
            } else {
                None
            }
        }
        Cell::Empty => None,
    }
}

/// Zip one accepted data row against the header and normalize every cell.
/// Columns missing from the row come through as `Empty`, so the per-key
/// absence rules apply uniformly.
fn normalize(keys: &[Option<HeaderKey>], row: &[Cell]) -> Result<FieldRecord> {
    let mut cells: HashMap<HeaderKey, &Cell> = HashMap::new();
    for (key, cell) in keys.iter().zip(row) {
        if let Some(key) = key {
            cells.insert(*key, cell);
        }
    }
    let get = |key: HeaderKey| cells.get(&key).copied().cloned().unwrap_or(Cell::Empty);

    let name = get(HeaderKey::Field).to_text().trim().to_string();
    if name.is_empty() {
        return Err(SqlGenError::EmptyFieldName);
    }

    let data_type = get(HeaderKey::Type).to_text().trim().to_uppercase();
    let length = convert_length(&get(HeaderKey::Length))?;
    let nullable = !get(HeaderKey::Null).to_text().trim().eq_ignore_ascii_case("n");
    let default = match get(HeaderKey::Default) {
        Cell::Str(s) => Cell::Str(s.trim().to_string()),
        other => other,
    };
    let key = convert_key(&get(HeaderKey::Key))?;
    let extra = convert_extra(&get(HeaderKey::Extra))?;
    let comment = get(HeaderKey::Comment).to_text().trim().to_string();

    Ok(FieldRecord { name, data_type, length, nullable, default, key, extra, comment })
}

fn convert_length(cell: &Cell) -> Result<Option<Length>> {
    match cell {
        Cell::Empty => Ok(None),
        Cell::Int(i) => Ok(Some(Length::Single(*i))),
        Cell::Float(f) => Ok(Some(Length::Single(f.floor() as i64))),
        Cell::Str(s) => {
            let s = s.trim().replace('，', ",");
            if s.is_empty() {
                return Ok(None);
            }
            if s.contains(',') {
                // keep only numeric-looking segments
                let parts: Vec<i64> =
                    s.split(',').filter_map(|p| p.trim().parse().ok()).collect();
                match parts.as_slice() {
                    [precision, scale, ..] => Ok(Some(Length::Pair(*precision, *scale))),
                    [single] => Ok(Some(Length::Single(*single))),
                    [] => Err(SqlGenError::InvalidLength(s)),
                }
            } else if let Ok(n) = s.parse() {
                Ok(Some(Length::Single(n)))
            } else {
                Err(SqlGenError::InvalidLength(s))
            }
        }
    }
}

fn convert_key(cell: &Cell) -> Result<Option<KeyRole>> {
    if cell.is_empty() {
        return Ok(None);
    }
    let token = cell.to_text().trim().to_uppercase();
    if token.is_empty() {
        return Ok(None);
    }
    match KEY_SYNONYMS.get(token.as_str()) {
        Some(role) => Ok(Some(*role)),
        None => Err(SqlGenError::UnknownKeyToken(token)),
    }
}

fn convert_extra(cell: &Cell) -> Result<Vec<String>> {
    match cell {
        Cell::Empty => Ok(Vec::new()),
        Cell::Str(s) => Ok(s
            .split(',')
            .map(|p| p.trim().to_uppercase())
            .filter(|p| !p.is_empty())
            .collect()),
        other => Err(SqlGenError::NonStringExtra(other.to_text())),
    }
}
