mod decoder;
mod domain;
mod offer;
mod rates;
mod screening;

pub use decoder::{age_on, decode, DecodeError};
pub use domain::{
    ClientProfile, ClientRecord, DebtorRecord, DecodedIdentity, MortgageOffer, RateTier, RunStats,
    Sex,
};
pub use offer::{build_offer, max_mortgage, MORTGAGE_INCOME_MULTIPLIER, PHONE_FALLBACK};
pub use rates::{RateError, RateSchedule, DOMESTIC_COUNTRY, FOREIGN_SURCHARGE};
pub use screening::{debt_exceeds_income, within_eligible_age};

use chrono::NaiveDate;
use tracing::info;

/// Output of one batch run: the offers plus the per-stage population counts.
#[derive(Debug, Clone, PartialEq)]
pub struct OfferBatch {
    pub offers: Vec<MortgageOffer>,
    pub stats: RunStats,
}

/// Error raised while deriving offers. Any occurrence aborts the batch so a
/// partial population is never emitted.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("client birth number '{birth_number}' is malformed: {source}")]
    MalformedIdentifier {
        birth_number: String,
        #[source]
        source: DecodeError,
    },
    #[error(transparent)]
    Rate(#[from] RateError),
}

/// Stateless engine applying the eligibility and offer rules to one batch.
///
/// The rate schedule is the only state shared across clients and it is
/// read-only; every other step is a pure per-client function.
pub struct MortgagePipeline {
    schedule: RateSchedule,
    reference_date: NaiveDate,
}

impl MortgagePipeline {
    pub fn new(tiers: Vec<RateTier>, reference_date: NaiveDate) -> Self {
        Self {
            schedule: RateSchedule::new(tiers),
            reference_date,
        }
    }

    pub fn run(
        &self,
        clients: Vec<ClientRecord>,
        debtors: &[DebtorRecord],
    ) -> Result<OfferBatch, PipelineError> {
        let input_clients = clients.len();

        let mut profiles = Vec::with_capacity(clients.len());
        for record in clients {
            profiles.push(self.decode_profile(record)?);
        }
        info!(
            clients = profiles.len(),
            "decoded demographics from birth numbers"
        );

        profiles.retain(|profile| within_eligible_age(profile.sex, profile.age));
        let after_age_screen = profiles.len();
        info!(retained = after_age_screen, "age and sex screen complete");

        let debts = screening::debtor_index(debtors);
        profiles.retain(|profile| screening::passes_debt_screen(profile, &debts));
        let after_debt_screen = profiles.len();
        info!(retained = after_debt_screen, "debt screen complete");

        let mut offers = Vec::with_capacity(profiles.len());
        for profile in profiles {
            let rate =
                self.schedule
                    .resolve(profile.sex, profile.age, &profile.record.country)?;
            offers.push(build_offer(profile, rate));
        }
        info!(
            offers = offers.len(),
            "interest rates resolved, offers assembled"
        );

        Ok(OfferBatch {
            offers,
            stats: RunStats {
                input_clients,
                after_age_screen,
                after_debt_screen,
            },
        })
    }

    fn decode_profile(&self, record: ClientRecord) -> Result<ClientProfile, PipelineError> {
        let identity =
            decode(&record.birth_number).map_err(|source| PipelineError::MalformedIdentifier {
                birth_number: record.birth_number.clone(),
                source,
            })?;

        let age = age_on(identity.birth_date, self.reference_date);

        Ok(ClientProfile {
            record,
            sex: identity.sex,
            age,
        })
    }
}
