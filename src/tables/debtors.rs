use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::TableError;
use crate::pipeline::DebtorRecord;

pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<DebtorRecord>, TableError> {
    let file = std::fs::File::open(path)?;
    from_reader(file)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Vec<DebtorRecord>, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<DebtorRow>() {
        let row = row?;
        records.push(DebtorRecord {
            birth_number: row.birth_number,
            outstanding_principal: row.outstanding_principal,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct DebtorRow {
    birth_number: String,
    outstanding_principal: f64,
}
