//! Validation policies for parsed records.
//!
//! [`PresencePolicy`] only asks that the required fields are filled in.
//! [`StrictPolicy`] also range-checks the years and height and format-checks
//! the colors and passport id. Malformed values fail their check; they are
//! never an error.

use crate::domain::model::{Field, Record, Violation};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static HAIR_COLOR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#[0-9a-f]{6}$").unwrap());

static PASSPORT_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{9}$").unwrap());

// Nine digits anywhere in the value. Only used to flag near misses in the logs.
static PASSPORT_ID_LOOSE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]{9}").unwrap());

pub trait ValidationPolicy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Every failing field of `record`, in field order.
    fn violations(&self, record: &Record) -> Vec<Violation>;

    fn is_valid(&self, record: &Record) -> bool {
        self.violations(record).is_empty()
    }
}

/// Valid when every field but the country id is non-empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct PresencePolicy;

impl ValidationPolicy for PresencePolicy {
    fn name(&self) -> &'static str {
        "presence"
    }

    fn violations(&self, record: &Record) -> Vec<Violation> {
        Field::REQUIRED
            .into_iter()
            .filter(|field| record.get(*field).is_empty())
            .map(|field| Violation::new(field, format!("{} is missing", field.description())))
            .collect()
    }

    fn is_valid(&self, record: &Record) -> bool {
        Field::REQUIRED
            .iter()
            .all(|field| !record.get(*field).is_empty())
    }
}

/// Inclusive integer range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: i64,
    pub max: i64,
}

impl Bounds {
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Limits applied by [`StrictPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrictRules {
    pub eye_colors: Vec<String>,
    pub birth_year: Bounds,
    pub issue_year: Bounds,
    pub expiration_year: Bounds,
    pub height_cm: Bounds,
    pub height_in: Bounds,
}

impl Default for StrictRules {
    fn default() -> Self {
        Self {
            eye_colors: ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"]
                .into_iter()
                .map(String::from)
                .collect(),
            birth_year: Bounds::new(1920, 2002),
            issue_year: Bounds::new(2010, 2020),
            expiration_year: Bounds::new(2020, 2030),
            height_cm: Bounds::new(150, 193),
            height_in: Bounds::new(59, 76),
        }
    }
}

/// Valid when every required field is present and well formed.
#[derive(Debug, Clone, Default)]
pub struct StrictPolicy {
    rules: StrictRules,
}

impl StrictPolicy {
    pub fn new(rules: StrictRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &StrictRules {
        &self.rules
    }

    fn check(&self, field: Field, value: &str) -> Option<String> {
        if value.is_empty() {
            return Some(format!("{} is missing", field.description()));
        }
        match field {
            Field::Byr => check_year(value, self.rules.birth_year),
            Field::Iyr => check_year(value, self.rules.issue_year),
            Field::Eyr => check_year(value, self.rules.expiration_year),
            Field::Hgt => self.check_height(value),
            Field::Hcl => check_hair_color(value),
            Field::Ecl => self.check_eye_color(value),
            Field::Pid => check_passport_id(value),
            Field::Cid => None,
        }
    }

    fn check_height(&self, value: &str) -> Option<String> {
        let (number, bounds, unit) = if let Some(number) = value.strip_suffix("cm") {
            (number, self.rules.height_cm, "cm")
        } else if let Some(number) = value.strip_suffix("in") {
            (number, self.rules.height_in, "in")
        } else {
            tracing::debug!("Height without a known unit: {}", value);
            return Some(format!("'{}' does not end in cm or in", value));
        };

        match number.parse::<i64>() {
            Ok(height) if bounds.contains(height) => None,
            Ok(height) => Some(format!(
                "{}{} is outside {}..={}{}",
                height, unit, bounds.min, bounds.max, unit
            )),
            Err(_) => {
                tracing::debug!("Height with an unparseable number: {}", value);
                Some(format!("'{}' is not a number followed by {}", value, unit))
            }
        }
    }

    fn check_eye_color(&self, value: &str) -> Option<String> {
        if self.rules.eye_colors.iter().any(|color| color == value) {
            None
        } else {
            Some(format!("'{}' is not one of {}", value, self.rules.eye_colors.join(", ")))
        }
    }
}

impl ValidationPolicy for StrictPolicy {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn violations(&self, record: &Record) -> Vec<Violation> {
        Field::REQUIRED
            .into_iter()
            .filter_map(|field| {
                self.check(field, record.get(field))
                    .map(|reason| Violation::new(field, reason))
            })
            .collect()
    }
}

fn check_year(value: &str, bounds: Bounds) -> Option<String> {
    match value.parse::<i64>() {
        Ok(year) if bounds.contains(year) => None,
        Ok(year) => Some(format!("{} is outside {}..={}", year, bounds.min, bounds.max)),
        Err(_) => Some(format!("'{}' is not a year", value)),
    }
}

fn check_hair_color(value: &str) -> Option<String> {
    if HAIR_COLOR_RE.is_match(value) {
        None
    } else {
        Some(format!("'{}' is not # followed by six lowercase hex digits", value))
    }
}

fn check_passport_id(value: &str) -> Option<String> {
    if PASSPORT_ID_RE.is_match(value) {
        return None;
    }
    if PASSPORT_ID_LOOSE_RE.is_match(value) {
        tracing::debug!(
            "Passport id {} ({} chars) contains nine digits but is not exactly nine digits",
            value,
            value.len()
        );
    }
    Some(format!("'{}' is not exactly nine digits", value))
}
