use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sex decoded from the national birth number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn label(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

/// Client row exactly as supplied by the client table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientRecord {
    pub birth_number: String,
    pub name: String,
    pub surname: String,
    pub phone: Option<String>,
    pub email: String,
    pub monthly_salary: f64,
    pub country: String,
}

/// Demographic facts recovered from a birth number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedIdentity {
    pub sex: Sex,
    pub birth_date: NaiveDate,
}

/// Client enriched with decoded demographics. Age is a function of the
/// birth number and the run's reference date, recomputed every batch rather
/// than stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientProfile {
    pub record: ClientRecord,
    pub sex: Sex,
    pub age: u8,
}

/// Registry row for a client carrying outstanding debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtorRecord {
    pub birth_number: String,
    pub outstanding_principal: f64,
}

/// One row of the sex/age-tiered interest schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTier {
    pub sex: Sex,
    pub min_age: u8,
    pub rate: f64,
}

/// Final offer emitted for a surviving client. Built once at the end of the
/// batch and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageOffer {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
    pub interest_rate: f64,
    pub max_mortgage: f64,
}

/// Population counts after each screening stage, for summaries and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub input_clients: usize,
    pub after_age_screen: usize,
    pub after_debt_screen: usize,
}
