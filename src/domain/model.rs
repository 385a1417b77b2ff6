use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// The known passport fields, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Byr,
    Iyr,
    Eyr,
    Hgt,
    Hcl,
    Ecl,
    Pid,
    Cid,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Byr,
        Field::Iyr,
        Field::Eyr,
        Field::Hgt,
        Field::Hcl,
        Field::Ecl,
        Field::Pid,
        Field::Cid,
    ];

    /// Every field except the country id.
    pub const REQUIRED: [Field; 7] = [
        Field::Byr,
        Field::Iyr,
        Field::Eyr,
        Field::Hgt,
        Field::Hcl,
        Field::Ecl,
        Field::Pid,
    ];

    /// Maps a token key to a field, ignoring ASCII case. Unknown keys yield `None`.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.key().eq_ignore_ascii_case(key))
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::Byr => "byr",
            Field::Iyr => "iyr",
            Field::Eyr => "eyr",
            Field::Hgt => "hgt",
            Field::Hcl => "hcl",
            Field::Ecl => "ecl",
            Field::Pid => "pid",
            Field::Cid => "cid",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Field::Byr => "birth year",
            Field::Iyr => "issue year",
            Field::Eyr => "expiration year",
            Field::Hgt => "height",
            Field::Hcl => "hair color",
            Field::Ecl => "eye color",
            Field::Pid => "passport id",
            Field::Cid => "country id",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One passport entry. Absent fields hold the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub byr: String,
    pub iyr: String,
    pub eyr: String,
    pub hgt: String,
    pub hcl: String,
    pub ecl: String,
    pub pid: String,
    pub cid: String,
}

impl Record {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Byr => &self.byr,
            Field::Iyr => &self.iyr,
            Field::Eyr => &self.eyr,
            Field::Hgt => &self.hgt,
            Field::Hcl => &self.hcl,
            Field::Ecl => &self.ecl,
            Field::Pid => &self.pid,
            Field::Cid => &self.cid,
        }
    }

    pub(crate) fn set(&mut self, field: Field, value: &str) {
        let slot = match field {
            Field::Byr => &mut self.byr,
            Field::Iyr => &mut self.iyr,
            Field::Eyr => &mut self.eyr,
            Field::Hgt => &mut self.hgt,
            Field::Hcl => &mut self.hcl,
            Field::Ecl => &mut self.ecl,
            Field::Pid => &mut self.pid,
            Field::Cid => &mut self.cid,
        };
        slot.clear();
        slot.push_str(value);
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

/// A failed strict-policy check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub field: Field,
    pub reason: String,
}

impl Violation {
    pub fn new(field: Field, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Outcome of validating one record under both policies.
#[derive(Debug, Clone, Serialize)]
pub struct Verdict {
    pub index: usize,
    pub presence_valid: bool,
    pub strict_valid: bool,
    pub violations: Vec<Violation>,
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub verdicts: Vec<Verdict>,
}

impl ValidationResult {
    pub fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        for verdict in &self.verdicts {
            tally.record(verdict);
        }
        tally
    }
}

/// Counts produced by one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub total: usize,
    pub presence_valid: usize,
    pub strict_valid: usize,
}

impl Tally {
    pub fn record(&mut self, verdict: &Verdict) {
        self.total += 1;
        if verdict.presence_valid {
            self.presence_valid += 1;
        }
        if verdict.strict_valid {
            self.strict_valid += 1;
        }
    }
}

/// JSON form of a tally, stamped with the time it was produced.
#[derive(Debug, Clone, Serialize)]
pub struct TallyReport {
    #[serde(flatten)]
    pub tally: Tally,
    pub generated_at: DateTime<Utc>,
}

impl TallyReport {
    pub fn new(tally: Tally) -> Self {
        Self::at(tally, Utc::now())
    }

    pub fn at(tally: Tally, generated_at: DateTime<Utc>) -> Self {
        Self { tally, generated_at }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
