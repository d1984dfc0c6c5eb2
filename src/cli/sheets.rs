//! Sheet-selection expressions: `"5"`, `"1-6"`, `"2,4,7"`.

use anyhow::{bail, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static SINGLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+$").unwrap());
static RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+)-(\d+)$").unwrap());
static LIST: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(,\d+)*$").unwrap());

/// Expand a sheet-selection expression into an ordered list of sheet
/// indices. Ranges are inclusive; comma lists are de-duplicated keeping
/// first-occurrence order.
pub fn parse_sheets(expr: &str) -> Result<Vec<usize>> {
    let expr = expr.trim();

    if SINGLE.is_match(expr) {
        return Ok(vec![expr.parse()?]);
    }

    if let Some(caps) = RANGE.captures(expr) {
        let start: usize = caps[1].parse()?;
        let end: usize = caps[2].parse()?;
        if end < start {
            bail!("end sheet index must be greater than start sheet index");
        }
        return Ok((start..=end).collect());
    }

    if LIST.is_match(expr) {
        let mut sheets = Vec::new();
        for part in expr.split(',') {
            let sheet: usize = part.parse()?;
            if !sheets.contains(&sheet) {
                sheets.push(sheet);
            }
        }
        return Ok(sheets);
    }

    bail!("invalid sheet expression: {expr}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_sheet() {
        assert_eq!(parse_sheets("5").unwrap(), vec![5]);
        assert_eq!(parse_sheets("0").unwrap(), vec![0]);
    }

    #[test]
    fn test_inclusive_range() {
        assert_eq!(parse_sheets("1-3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_sheets("4-4").unwrap(), vec![4]);
    }

    #[test]
    fn test_reversed_range_rejected() {
        assert!(parse_sheets("2-1").is_err());
    }

    #[test]
    fn test_comma_list_keeps_first_occurrence_order() {
        assert_eq!(parse_sheets("7,2,4").unwrap(), vec![7, 2, 4]);
        assert_eq!(parse_sheets("3,1,3,1").unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(parse_sheets("").is_err());
        assert!(parse_sheets("a").is_err());
        assert!(parse_sheets("1-").is_err());
        assert!(parse_sheets("1,2-3").is_err());
        assert!(parse_sheets("-1").is_err());
    }
}
