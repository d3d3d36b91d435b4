// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use calamine::{Data, Range, Reader, Xlsx};
use std::io::Cursor;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpreadsheetError {
    #[error("failed to read spreadsheet: {0}")]
    Read(String),
    #[error("spreadsheet has no sheets")]
    NoSheets,
}

/// Extract search queries from an uploaded .xlsx file.
///
/// Takes the first column of the first sheet; every non-empty text cell is
/// one query, in row order. Numeric and blank cells are skipped, as is any
/// header cell that happens to be empty. A textual header row is not
/// special-cased and simply becomes a query.
pub fn extract_queries(bytes: &[u8]) -> Result<Vec<String>, SpreadsheetError> {
    let mut workbook = Xlsx::new(Cursor::new(bytes.to_vec()))
        .map_err(|e| SpreadsheetError::Read(e.to_string()))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(SpreadsheetError::NoSheets)?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| SpreadsheetError::Read(e.to_string()))?;

    Ok(queries_from_range(&range))
}

fn queries_from_range(range: &Range<Data>) -> Vec<String> {
    range
        .rows()
        .filter_map(|row| row.first())
        .filter_map(|cell| match cell {
            Data::String(text) if !text.trim().is_empty() => Some(text.trim().to_string()),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_non_empty_text_cells_of_the_first_column() {
        let mut range = Range::new((0, 0), (4, 1));
        range.set_value((0, 0), Data::String("keyword".to_string()));
        range.set_value((1, 0), Data::String("  CF-LV9RDAVS  ".to_string()));
        range.set_value((2, 0), Data::String("   ".to_string()));
        range.set_value((3, 0), Data::Float(42.0));
        range.set_value((4, 0), Data::String("Let's note".to_string()));
        range.set_value((1, 1), Data::String("ignored column".to_string()));

        let queries = queries_from_range(&range);
        assert_eq!(queries, vec!["keyword", "CF-LV9RDAVS", "Let's note"]);
    }

    #[test]
    fn empty_range_yields_no_queries() {
        let range: Range<Data> = Range::new((0, 0), (0, 0));
        assert!(queries_from_range(&range).is_empty());
    }

    #[test]
    fn garbage_bytes_are_a_read_error() {
        let err = extract_queries(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, SpreadsheetError::Read(_)));
    }
}
