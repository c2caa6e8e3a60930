use chrono::NaiveDate;

use super::domain::{DecodedIdentity, Sex};

/// Birth numbers carry only two year digits; holders born outside the 1900s
/// are out of scope for this dataset.
const ASSUMED_CENTURY: i32 = 1900;

/// The encoding adds 50 to the birth month for female holders, which shifts
/// the month-tens digit by 5. Offset detection deliberately inspects that
/// single digit, matching the legacy behavior for every month a calendar
/// will accept.
const FEMALE_MONTH_TENS_OFFSET: u32 = 5;

/// Digits needed to recover the `YYMMDD` prefix.
const DATE_DIGITS: usize = 6;

#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("birth number too short to carry a birth date ({length} digit(s))")]
    TooShort { length: usize },
    #[error("birth number contains non-digit character '{found}'")]
    NonDigit { found: char },
    #[error("birth number encodes no valid calendar date ({year:04}-{month:02}-{day:02})")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Decodes sex and birth date from a national birth number.
pub fn decode(birth_number: &str) -> Result<DecodedIdentity, DecodeError> {
    let digits = date_digits(birth_number)?;

    let month_tens = digits[2];
    let sex = sex_from_month_tens(month_tens);

    let corrected_tens = if month_tens >= FEMALE_MONTH_TENS_OFFSET {
        month_tens - FEMALE_MONTH_TENS_OFFSET
    } else {
        month_tens
    };

    let year = ASSUMED_CENTURY + (digits[0] * 10 + digits[1]) as i32;
    let month = corrected_tens * 10 + digits[3];
    let day = digits[4] * 10 + digits[5];

    let birth_date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DecodeError::InvalidDate { year, month, day })?;

    Ok(DecodedIdentity { sex, birth_date })
}

/// Month-tens digits 0 and 1 belong to men; the female offset pushes the
/// digit to 5 or above.
fn sex_from_month_tens(tens: u32) -> Sex {
    if tens > 1 {
        Sex::Female
    } else {
        Sex::Male
    }
}

fn date_digits(birth_number: &str) -> Result<[u32; DATE_DIGITS], DecodeError> {
    let trimmed = birth_number.trim();
    let mut chars = trimmed.chars();
    let mut digits = [0u32; DATE_DIGITS];

    for slot in digits.iter_mut() {
        let found = chars.next().ok_or_else(|| DecodeError::TooShort {
            length: trimmed.chars().count(),
        })?;
        *slot = found
            .to_digit(10)
            .ok_or(DecodeError::NonDigit { found })?;
    }

    Ok(digits)
}

/// Average-length year used for the whole-year age approximation. No
/// leap-aware calendar arithmetic is intended here.
const DAYS_PER_YEAR: f64 = 365.25;

/// Age in whole years on the given reference date.
pub fn age_on(birth_date: NaiveDate, reference: NaiveDate) -> u8 {
    let days = reference.signed_duration_since(birth_date).num_days();
    if days <= 0 {
        return 0;
    }

    (days as f64 / DAYS_PER_YEAR).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_tens_boundary_separates_sexes() {
        assert_eq!(sex_from_month_tens(0), Sex::Male);
        assert_eq!(sex_from_month_tens(1), Sex::Male);
        assert_eq!(sex_from_month_tens(2), Sex::Female);
        assert_eq!(sex_from_month_tens(5), Sex::Female);
    }

    #[test]
    fn decodes_male_birth_number() {
        let identity = decode("9007201234").expect("valid birth number");
        assert_eq!(identity.sex, Sex::Male);
        assert_eq!(
            identity.birth_date,
            NaiveDate::from_ymd_opt(1990, 7, 20).expect("valid date")
        );
    }

    #[test]
    fn decodes_female_birth_number_with_month_offset() {
        let identity = decode("9651155128").expect("valid birth number");
        assert_eq!(identity.sex, Sex::Female);
        assert_eq!(
            identity.birth_date,
            NaiveDate::from_ymd_opt(1996, 1, 15).expect("valid date")
        );
    }

    #[test]
    fn female_month_tens_six_maps_to_month_ten_and_up() {
        let identity = decode("9261244321").expect("valid birth number");
        assert_eq!(identity.sex, Sex::Female);
        assert_eq!(
            identity.birth_date,
            NaiveDate::from_ymd_opt(1992, 11, 24).expect("valid date")
        );
    }

    #[test]
    fn rejects_day_out_of_range() {
        let error = decode("9605343456").expect_err("day 34 must not decode");
        assert!(matches!(
            error,
            DecodeError::InvalidDate {
                year: 1996,
                month: 5,
                day: 34
            }
        ));
    }

    #[test]
    fn rejects_month_without_offset_in_female_band() {
        // tens digit 2 reads as Female but reconstructs month 20.
        let error = decode("9420011234").expect_err("month 20 must not decode");
        assert!(matches!(error, DecodeError::InvalidDate { month: 20, .. }));
    }

    #[test]
    fn rejects_short_and_non_digit_identifiers() {
        assert!(matches!(
            decode("94051"),
            Err(DecodeError::TooShort { length: 5 })
        ));
        assert!(matches!(
            decode("94x5121234"),
            Err(DecodeError::NonDigit { found: 'x' })
        ));
    }

    #[test]
    fn age_floors_partial_years() {
        let birth = NaiveDate::from_ymd_opt(1996, 1, 15).expect("valid date");
        let reference = NaiveDate::from_ymd_opt(2026, 3, 1).expect("valid date");
        assert_eq!(age_on(birth, reference), 30);

        let day_before_thirty = NaiveDate::from_ymd_opt(2026, 1, 10).expect("valid date");
        assert_eq!(age_on(birth, day_before_thirty), 29);
    }

    #[test]
    fn age_is_zero_for_reference_before_birth() {
        let birth = NaiveDate::from_ymd_opt(1996, 1, 15).expect("valid date");
        let reference = NaiveDate::from_ymd_opt(1995, 1, 1).expect("valid date");
        assert_eq!(age_on(birth, reference), 0);
    }
}
