//! Module reading the user-provided input file into records, independent of its format.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::domain::{FileFormat, Record};
use crate::error::Error;


/// Reads all records of the file at `path`, using the reader for `format`.
pub fn read_records(path: &Path, format: FileFormat) -> Result<Vec<Record>, Error> {
    match format {
        FileFormat::Csv => read_csv(std::fs::File::open(path)?),
        FileFormat::Spreadsheet => read_spreadsheet(path),
    }
}

/// Parses comma-separated data with a header row. Values are kept verbatim;
/// cells missing from short rows are left out of the record, cells beyond the
/// header of long rows are kept under the column `_<index>`.
pub fn read_csv(reader: impl Read) -> Result<Vec<Record>, Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    csv_reader
        .into_records()
        .map(|result| -> Result<Record, Error> {
            let row = result?;
            let mut record = Record::new();
            for (index, value) in row.iter().enumerate() {
                match headers.get(index) {
                    Some(name) => record.insert(name, value),
                    None => record.insert(format!("_{index}"), value),
                }
            }
            Ok(record)
        })
        .collect()
}

/// Reads the first sheet of an xlsx workbook. The first row holds the column names.
pub fn read_spreadsheet(path: &Path) -> Result<Vec<Record>, Error> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let Some(range) = workbook.worksheet_range_at(0) else {
        return Ok(Vec::new());
    };
    let range = range?;

    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Ok(Vec::new());
    };
    let headers = column_names(header_row);

    let records = rows
        .filter(|row| !row.iter().all(|cell| matches!(cell, Data::Empty)))
        .map(|row| {
            let mut record = Record::new();
            for (name, cell) in headers.iter().zip(row) {
                match cell {
                    Data::Float(f) => record.insert_number(name.as_str(), *f),
                    Data::Int(i) => record.insert_number(name.as_str(), *i as f64),
                    other => record.insert(name.as_str(), cell_to_string(other)),
                }
            }
            record
        })
        .collect();

    Ok(records)
}

/// Column names from the header row. Blank cells are named `__EMPTY`, and repeated
/// names get a `_<n>` suffix so that no column is lost.
fn column_names(header_row: &[Data]) -> Vec<String> {
    let mut used: HashSet<String> = HashSet::new();
    header_row
        .iter()
        .map(|cell| {
            let mut base = cell_to_string(cell);
            if base.is_empty() {
                base = "__EMPTY".to_string();
            }
            let mut name = base.clone();
            let mut n = 0;
            while !used.insert(name.clone()) {
                n += 1;
                name = format!("{base}_{n}");
            }
            name
        })
        .collect()
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
