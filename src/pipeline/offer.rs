use super::domain::{ClientProfile, MortgageOffer};

/// Flat income-to-loan conversion factor: nine years of gross salary.
/// Isolated here so the cap can be tuned without touching the pipeline.
pub const MORTGAGE_INCOME_MULTIPLIER: f64 = 108.0;

/// Substituted when a client left no phone number.
pub const PHONE_FALLBACK: &str = "contact by email only";

pub fn max_mortgage(monthly_salary: f64) -> f64 {
    monthly_salary * MORTGAGE_INCOME_MULTIPLIER
}

/// Assembles the final offer from the retained client fields and the
/// resolved interest rate.
pub fn build_offer(profile: ClientProfile, interest_rate: f64) -> MortgageOffer {
    let record = profile.record;

    MortgageOffer {
        max_mortgage: max_mortgage(record.monthly_salary),
        name: record.name,
        surname: record.surname,
        phone: record.phone.unwrap_or_else(|| PHONE_FALLBACK.to_string()),
        email: record.email,
        interest_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::domain::{ClientRecord, Sex};

    fn profile(phone: Option<&str>, monthly_salary: f64) -> ClientProfile {
        ClientProfile {
            record: ClientRecord {
                birth_number: "9007201234".to_string(),
                name: "Jan".to_string(),
                surname: "Novak".to_string(),
                phone: phone.map(str::to_string),
                email: "jan.novak@example.com".to_string(),
                monthly_salary,
                country: "Czech Republic".to_string(),
            },
            sex: Sex::Male,
            age: 35,
        }
    }

    #[test]
    fn max_mortgage_is_nine_years_of_gross_income() {
        assert_eq!(max_mortgage(30_000.0), 3_240_000.0);
    }

    #[test]
    fn offer_carries_client_fields_and_rate() {
        let offer = build_offer(profile(Some("+420 777 123 456"), 45_000.0), 3.9);

        assert_eq!(offer.name, "Jan");
        assert_eq!(offer.surname, "Novak");
        assert_eq!(offer.phone, "+420 777 123 456");
        assert_eq!(offer.email, "jan.novak@example.com");
        assert_eq!(offer.interest_rate, 3.9);
        assert_eq!(offer.max_mortgage, 4_860_000.0);
    }

    #[test]
    fn missing_phone_falls_back_to_sentinel() {
        let offer = build_offer(profile(None, 30_000.0), 3.5);
        assert_eq!(offer.phone, PHONE_FALLBACK);
    }
}
