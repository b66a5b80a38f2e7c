use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::core::error::Result;

/// One CSV file read into memory: a header-name → column map plus the raw
/// field rows. Field access is by header name so column order in the source
/// export does not matter.
pub struct CsvTable {
    columns: HashMap<String, usize>,
    rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn read(path: &Path) -> Result<CsvTable> {
        let text = fs::read_to_string(path)?;
        let mut lines = text.lines();

        let columns = match lines.next() {
            Some(header) => parse_line(header)
                .into_iter()
                .enumerate()
                .map(|(i, name)| (name, i))
                .collect(),
            None => HashMap::new(),
        };

        let rows = lines
            .filter(|line| !line.is_empty())
            .map(parse_line)
            .collect();

        Ok(CsvTable { columns, rows })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Field of `row` under the named header; empty string when the column
    /// is absent or the row is short.
    pub fn field<'a>(&self, row: &'a [String], name: &str) -> &'a str {
        self.columns
            .get(name)
            .and_then(|&i| row.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Split one CSV line into fields, handling RFC 4180 quoted fields and
/// doubled-quote escapes.
fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == ',' {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}
