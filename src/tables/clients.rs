use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::TableError;
use crate::pipeline::ClientRecord;

pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ClientRecord>, TableError> {
    let file = std::fs::File::open(path)?;
    from_reader(file)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ClientRecord>, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.deserialize::<ClientRow>() {
        let row = row?;
        records.push(ClientRecord {
            birth_number: row.birth_number,
            name: row.name,
            surname: row.surname,
            phone: row.phone,
            email: row.email,
            monthly_salary: row.monthly_salary,
            country: row.country,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct ClientRow {
    birth_number: String,
    name: String,
    surname: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    email: String,
    monthly_salary: f64,
    country: String,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_rows_and_blank_phone_becomes_none() {
        let csv = "birth_number,name,surname,phone,email,monthly_salary,country\n\
9007201234,Jan,Novak,+420 777 123 456,jan.novak@example.com,45000,Czech Republic\n\
9651155128,Petra,Svobodova,,petra.svobodova@example.com,30000,Czech Republic\n";

        let records = from_reader(Cursor::new(csv)).expect("parse succeeds");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].phone.as_deref(), Some("+420 777 123 456"));
        assert_eq!(records[0].monthly_salary, 45_000.0);
        assert!(records[1].phone.is_none());
    }

    #[test]
    fn rejects_non_numeric_salary() {
        let csv = "birth_number,name,surname,phone,email,monthly_salary,country\n\
9007201234,Jan,Novak,,jan@example.com,plenty,Czech Republic\n";

        let error = from_reader(Cursor::new(csv)).expect_err("salary must be numeric");
        assert!(matches!(error, TableError::Csv(_)));
    }
}
