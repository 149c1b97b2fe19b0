use std::path::Path;

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// An in-memory CSV file: trimmed headers plus string rows.
///
/// All four Olympic sources carry their header in the first row, so no
/// header detection is needed; cells are trimmed and BOM-stripped, and
/// fully blank rows are skipped.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?
        .iter()
        .map(normalize_cell)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvRead {
            path: path.to_path_buf(),
            source: Box::new(e),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        let mut row = Vec::with_capacity(headers.len());
        for idx in 0..headers.len() {
            let value = record.get(idx).unwrap_or("");
            row.push(normalize_cell(value));
        }
        rows.push(row);
    }

    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".csv")
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn reads_headers_and_rows_trimmed() {
        let file = write_temp_csv("noc, country\nGRE, Greece \nUSA,United States\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers, vec!["noc", "country"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0], vec!["GRE", "Greece"]);
    }

    #[test]
    fn skips_blank_rows_and_strips_bom() {
        let file = write_temp_csv("\u{feff}noc,country\n,\nFRA,France\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.headers[0], "noc");
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0], vec!["FRA", "France"]);
    }

    #[test]
    fn short_records_are_padded() {
        let file = write_temp_csv("a,b,c\n1,2\n");
        let table = read_csv_table(file.path()).unwrap();
        assert_eq!(table.rows[0], vec!["1", "2", ""]);
    }
}
