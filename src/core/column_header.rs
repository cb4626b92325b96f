use crate::utils::file_parsing::{split_csv_preserving_quotes, strip_surrounding_quotes};

/// Field names taken from the first line of a delimited input file.
///
/// Columns are addressed two ways: the 1-based column number a user types on
/// the command line, and the 0-based field index used when splitting rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnHeader {
    field_names: Vec<String>,
}

impl ColumnHeader {
    pub fn new(field_names: Vec<String>) -> ColumnHeader {
        ColumnHeader { field_names }
    }

    /// Builds a header from a raw header line, stripping quotes around names.
    pub fn parse(line: &str) -> ColumnHeader {
        let field_names = split_csv_preserving_quotes(line)
            .iter()
            .map(|f| strip_surrounding_quotes(f).to_string())
            .collect();
        ColumnHeader { field_names }
    }

    pub fn number_of_fields(&self) -> usize {
        self.field_names.len()
    }

    pub fn field_at_index(&self, index: usize) -> Option<&str> {
        self.field_names.get(index).map(String::as_str)
    }

    /// Maps a 1-based column number to its field index, if the header has it.
    pub fn index_of_column(&self, column: usize) -> Option<usize> {
        if column >= 1 && column <= self.field_names.len() {
            Some(column - 1)
        } else {
            None
        }
    }
}
