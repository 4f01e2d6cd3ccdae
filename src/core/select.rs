//! Database index extraction from `SELECT` queries.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::SELECT_COMMAND;
use crate::core::error::SelectQueryError;

static QUOTES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]"#).expect("quote pattern is valid"));

/// Parse the database index out of a `SELECT <index>` query.
///
/// Quotes around the index are ignored. The index is not checked against the
/// number of databases the server is configured with.
pub fn db_index_from_select_query(query: &str) -> Result<i64, SelectQueryError> {
    let mut parts = query.split_whitespace();
    let command = parts.next().unwrap_or_default();
    if !command.eq_ignore_ascii_case(SELECT_COMMAND) {
        return Err(SelectQueryError::InvalidCommand);
    }

    let index = parts.next().ok_or(SelectQueryError::ParseError)?;
    QUOTES
        .replace_all(index, "")
        .trim()
        .parse()
        .map_err(|_| SelectQueryError::ParseError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_index() {
        assert_eq!(db_index_from_select_query("SELECT 3"), Ok(3));
        assert_eq!(db_index_from_select_query("  select   15 "), Ok(15));
        assert_eq!(db_index_from_select_query("Select 0"), Ok(0));
    }

    #[test]
    fn test_quoted_index() {
        assert_eq!(db_index_from_select_query("SELECT '4'"), Ok(4));
        assert_eq!(db_index_from_select_query(r#"SELECT "7""#), Ok(7));
    }

    #[test]
    fn test_index_is_not_range_checked() {
        assert_eq!(db_index_from_select_query("SELECT 999"), Ok(999));
        assert_eq!(db_index_from_select_query("SELECT -1"), Ok(-1));
    }

    #[test]
    fn test_non_numeric_index() {
        assert_eq!(
            db_index_from_select_query("SELECT 'x'"),
            Err(SelectQueryError::ParseError)
        );
        assert_eq!(
            db_index_from_select_query("SELECT 3abc"),
            Err(SelectQueryError::ParseError)
        );
        assert_eq!(
            db_index_from_select_query("SELECT ''"),
            Err(SelectQueryError::ParseError)
        );
    }

    #[test]
    fn test_quotes_inside_index_are_stripped() {
        assert_eq!(db_index_from_select_query(r#"SELECT 1'2"3"#), Ok(123));
        assert_eq!(db_index_from_select_query("SELECT\t'9'"), Ok(9));
    }

    #[test]
    fn test_missing_index() {
        assert_eq!(
            db_index_from_select_query("SELECT"),
            Err(SelectQueryError::ParseError)
        );
    }

    #[test]
    fn test_not_a_select() {
        assert_eq!(
            db_index_from_select_query("GET k"),
            Err(SelectQueryError::InvalidCommand)
        );
        assert_eq!(
            db_index_from_select_query("SELECTED 1"),
            Err(SelectQueryError::InvalidCommand)
        );
        assert_eq!(db_index_from_select_query(""), Err(SelectQueryError::InvalidCommand));
    }
}
