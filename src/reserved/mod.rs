//! Reserved-word vocabulary for the MySQL dialect.
//!
//! Every Type, Extra and Key token coming out of a template must belong to
//! the fixed allow-list below before a model can be built. The category sets
//! drive default inference and length fixup during field construction.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Type names accepted in the `Type` column.
const TYPE_WORDS: &[&str] = &[
    "TINYINT", "SMALLINT", "MEDIUMINT", "INT", "INTEGER", "BIGINT", "FLOAT", "DOUBLE", "DECIMAL",
    "NUMERIC", "BIT", "CHAR", "VARCHAR", "BINARY", "VARBINARY", "TINYTEXT", "TEXT", "MEDIUMTEXT",
    "LONGTEXT", "TINYBLOB", "BLOB", "MEDIUMBLOB", "LONGBLOB", "DATE", "DATETIME", "TIMESTAMP",
    "TIME", "YEAR", "ENUM", "SET", "JSON", "BOOL", "BOOLEAN",
];

/// Attribute, literal and key-role keywords accepted in the `Extra`,
/// `Default` and `Key` columns.
const KEYWORD_WORDS: &[&str] = &[
    "UNSIGNED",
    "ZEROFILL",
    "AUTO_INCREMENT",
    "CURRENT_TIMESTAMP",
    "ON UPDATE CURRENT_TIMESTAMP",
    "NULL",
    "PRIMARY",
    "INDEX",
    "UNIQUE",
];

static RESERVED_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    TYPE_WORDS
        .iter()
        .chain(KEYWORD_WORDS.iter())
        .copied()
        .collect()
});

/// Types that take a quoted empty-string default when the template leaves
/// the default blank.
static STRING_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["CHAR", "VARCHAR", "TINYTEXT", "TEXT", "MEDIUMTEXT", "LONGTEXT"]
        .into_iter()
        .collect()
});

static NUMERIC_TYPES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "TINYINT", "SMALLINT", "MEDIUMINT", "INT", "INTEGER", "BIGINT", "FLOAT", "DOUBLE",
        "DECIMAL", "NUMERIC",
    ]
    .into_iter()
    .collect()
});

/// Types that never carry a length, whatever the template supplied.
static DATETIME_TYPES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["DATE", "DATETIME", "TIMESTAMP", "TIME", "YEAR"].into_iter().collect());

/// Whether a single token belongs to the dialect allow-list.
pub fn is_token_allowed(token: &str) -> bool {
    RESERVED_WORDS.contains(token)
}

/// Whether every token in the list is individually allowed.
pub fn are_all_tokens_allowed<I, S>(tokens: I) -> bool
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens.into_iter().all(|t| is_token_allowed(t.as_ref()))
}

pub fn is_string_type(data_type: &str) -> bool {
    STRING_TYPES.contains(data_type)
}

pub fn is_numeric_type(data_type: &str) -> bool {
    NUMERIC_TYPES.contains(data_type)
}

pub fn is_datetime_type(data_type: &str) -> bool {
    DATETIME_TYPES.contains(data_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tokens() {
        assert!(is_token_allowed("BIGINT"));
        assert!(is_token_allowed("AUTO_INCREMENT"));
        assert!(is_token_allowed("CURRENT_TIMESTAMP"));
        assert!(!is_token_allowed("bigint"));
        assert!(!is_token_allowed("DROP TABLE"));
    }

    #[test]
    fn test_token_lists() {
        assert!(are_all_tokens_allowed(["UNSIGNED", "AUTO_INCREMENT"]));
        assert!(!are_all_tokens_allowed(["UNSIGNED", "BOGUS"]));
        assert!(are_all_tokens_allowed(Vec::<String>::new()));
    }

    #[test]
    fn test_categories() {
        assert!(is_string_type("VARCHAR"));
        assert!(!is_string_type("BLOB"));
        assert!(is_numeric_type("DECIMAL"));
        assert!(is_datetime_type("TIMESTAMP"));
        assert!(!is_datetime_type("VARCHAR"));
    }
}
