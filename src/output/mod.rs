//! Module writing enriched records back out in the format family of the input.

use std::io::Write;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};

use crate::domain::{FileFormat, Record};
use crate::error::Error;


const CSV_OUTPUT_NAME: &str = "output.csv";
const SHEET_NAME: &str = "Sheet1";

/// Where the output for `input` is written: next to the input file.
pub fn output_path(input: &Path, format: FileFormat) -> PathBuf {
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    match format {
        FileFormat::Csv => dir.join(CSV_OUTPUT_NAME),
        FileFormat::Spreadsheet => {
            let stem = input
                .file_stem()
                .map(|stem| stem.to_string_lossy())
                .unwrap_or_default();
            dir.join(format!("{stem}_output.xlsx"))
        }
    }
}

pub fn write_records(records: &[Record], path: &Path, format: FileFormat) -> Result<(), Error> {
    match format {
        FileFormat::Csv => write_csv(records, std::fs::File::create(path)?),
        FileFormat::Spreadsheet => write_spreadsheet(records, path),
    }
}

/// The output columns: the keys of the first record in order, followed by
/// keys first seen in later records.
pub fn header(records: &[Record]) -> Vec<&str> {
    let mut columns: Vec<&str> = Vec::new();
    for column in records.iter().flat_map(Record::columns) {
        if !columns.contains(&column) {
            columns.push(column);
        }
    }
    columns
}

pub fn write_csv(records: &[Record], writer: impl Write) -> Result<(), Error> {
    let columns = header(records);
    let mut wtr = csv::Writer::from_writer(writer);

    if !columns.is_empty() {
        wtr.write_record(&columns)?;
    }
    for record in records {
        wtr.write_record(columns.iter().map(|column| record.get(column)))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a single-sheet workbook with a header row. Numbers read from a spreadsheet are
/// written as number cells, all other values as string cells; empty values stay blank.
pub fn write_spreadsheet(records: &[Record], path: &Path) -> Result<(), Error> {
    let columns = header(records);
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, column) in columns.iter().enumerate() {
        sheet.write_string(0, col_index(col)?, *column)?;
    }
    for (row, record) in records.iter().enumerate() {
        let row = row_index(row + 1)?;
        for (col, column) in columns.iter().enumerate() {
            let col = col_index(col)?;
            if let Some(number) = record.number(column) {
                sheet.write_number(row, col, number)?;
                continue;
            }
            let value = record.get(column);
            if !value.is_empty() {
                sheet.write_string(row, col, value)?;
            }
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn row_index(row: usize) -> Result<u32, XlsxError> {
    u32::try_from(row).map_err(|_| XlsxError::RowColumnLimitError)
}

fn col_index(col: usize) -> Result<u16, XlsxError> {
    u16::try_from(col).map_err(|_| XlsxError::RowColumnLimitError)
}
