use super::domain::{RateTier, Sex};

/// Applicants residing outside this country pay the foreign surcharge.
pub const DOMESTIC_COUNTRY: &str = "Czech Republic";

/// Flat addition to the resolved base rate for non-domestic applicants, in
/// the same percentage units as the tier rates.
pub const FOREIGN_SURCHARGE: f64 = 0.2;

#[derive(Debug, thiserror::Error)]
pub enum RateError {
    #[error("no {} rate tier covers age {age}", .sex.label())]
    NoMatchingTier { sex: Sex, age: u8 },
}

/// Interest schedule partitioned by sex, read-only for the run.
///
/// Tiers are sorted ascending by minimum qualifying age at construction
/// rather than trusting input order.
#[derive(Debug, Clone)]
pub struct RateSchedule {
    male: Vec<RateTier>,
    female: Vec<RateTier>,
}

impl RateSchedule {
    pub fn new(tiers: Vec<RateTier>) -> Self {
        let mut male = Vec::new();
        let mut female = Vec::new();

        for tier in tiers {
            match tier.sex {
                Sex::Male => male.push(tier),
                Sex::Female => female.push(tier),
            }
        }

        male.sort_by_key(|tier| tier.min_age);
        female.sort_by_key(|tier| tier.min_age);

        Self { male, female }
    }

    fn tiers(&self, sex: Sex) -> &[RateTier] {
        match sex {
            Sex::Male => &self.male,
            Sex::Female => &self.female,
        }
    }

    /// Resolves the milestone tier: the largest minimum age not exceeding
    /// the applicant's age. An age below the lowest tier is a data-contract
    /// violation and surfaces as an error instead of a default rate.
    pub fn resolve(&self, sex: Sex, age: u8, country: &str) -> Result<f64, RateError> {
        let mut milestone = None;
        for tier in self.tiers(sex) {
            if tier.min_age <= age {
                milestone = Some(tier);
            } else {
                break;
            }
        }

        let tier = milestone.ok_or(RateError::NoMatchingTier { sex, age })?;

        let mut rate = tier.rate;
        if country != DOMESTIC_COUNTRY {
            rate += FOREIGN_SURCHARGE;
        }

        Ok(rate)
    }
}
