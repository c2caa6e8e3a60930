use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use super::TableError;
use crate::pipeline::{RateTier, Sex};

pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RateTier>, TableError> {
    let file = std::fs::File::open(path)?;
    from_reader(file)
}

pub fn from_reader<R: Read>(reader: R) -> Result<Vec<RateTier>, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut tiers = Vec::new();

    for row in csv_reader.deserialize::<RateRow>() {
        let row = row?;
        tiers.push(RateTier {
            sex: parse_sex(&row.sex)?,
            min_age: row.min_age,
            rate: row.interest_rate,
        });
    }

    Ok(tiers)
}

#[derive(Debug, Deserialize)]
struct RateRow {
    sex: String,
    min_age: u8,
    interest_rate: f64,
}

fn parse_sex(value: &str) -> Result<Sex, TableError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "male" | "m" => Ok(Sex::Male),
        "female" | "f" => Ok(Sex::Female),
        _ => Err(TableError::UnknownSex {
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_tiers_for_both_sexes() {
        let csv = "sex,min_age,interest_rate\n\
Male,20,4.1\n\
Female,30,3.5\n";

        let tiers = from_reader(Cursor::new(csv)).expect("parse succeeds");
        assert_eq!(tiers.len(), 2);
        assert_eq!(tiers[0].sex, Sex::Male);
        assert_eq!(tiers[0].min_age, 20);
        assert_eq!(tiers[1].rate, 3.5);
    }

    #[test]
    fn sex_parsing_ignores_case() {
        assert_eq!(parse_sex("FEMALE").expect("parses"), Sex::Female);
        assert_eq!(parse_sex(" m ").expect("parses"), Sex::Male);
    }

    #[test]
    fn unknown_sex_value_is_an_error() {
        let csv = "sex,min_age,interest_rate\nOther,20,4.1\n";
        let error = from_reader(Cursor::new(csv)).expect_err("unknown sex must fail");
        assert!(matches!(error, TableError::UnknownSex { value } if value == "Other"));
    }
}
