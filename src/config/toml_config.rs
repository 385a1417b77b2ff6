use crate::core::policy::StrictRules;
use crate::utils::error::Result;
use crate::utils::validation::{validate_bounds, validate_non_empty_list, Validate};
use std::path::Path;

/// Loader for strict-policy rules files.
///
/// ```toml
/// eye_colors = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"]
///
/// [birth_year]
/// min = 1920
/// max = 2002
/// ```
///
/// Every key and table is optional; anything omitted keeps its default limit.
/// A table that is present must set both `min` and `max`.
pub struct RulesConfig;

impl RulesConfig {
    /// 從 TOML 檔案載入規則
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<StrictRules> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析規則並驗證
    pub fn from_toml_str(content: &str) -> Result<StrictRules> {
        let rules: StrictRules = toml::from_str(content)?;
        rules.validate()?;
        Ok(rules)
    }
}

impl Validate for StrictRules {
    fn validate(&self) -> Result<()> {
        validate_non_empty_list("eye_colors", &self.eye_colors)?;
        validate_bounds("birth_year", self.birth_year.min, self.birth_year.max)?;
        validate_bounds("issue_year", self.issue_year.min, self.issue_year.max)?;
        validate_bounds(
            "expiration_year",
            self.expiration_year.min,
            self.expiration_year.max,
        )?;
        validate_bounds("height_cm", self.height_cm.min, self.height_cm.max)?;
        validate_bounds("height_in", self.height_in.min, self.height_in.max)?;
        Ok(())
    }
}
