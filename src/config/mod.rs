pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::policy::StrictRules;
#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "passport-check")]
#[command(about = "Count passport records that pass presence and strict validation")]
pub struct CliConfig {
    /// Batch file of blank-line separated passport records
    pub input: String,

    #[arg(long, help = "TOML file overriding the strict validation limits")]
    pub rules: Option<String>,

    #[arg(long, help = "Write a per-record CSV report to this path")]
    pub report: Option<String>,

    #[arg(long, help = "Print the tally as JSON")]
    pub json: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    #[serde(default)]
    pub strict_rules: StrictRules,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads `--rules` into `strict_rules`. Without `--rules` the defaults stay.
    pub fn load_rules(&mut self) -> Result<()> {
        if let Some(path) = &self.rules {
            tracing::debug!("Loading validation rules from {}", path);
            self.strict_rules = toml_config::RulesConfig::from_file(path)?;
        }
        Ok(())
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        if let Some(rules) = &self.rules {
            validate_path("rules", rules)?;
        }
        if let Some(report) = &self.report {
            validate_path("report", report)?;
        }
        self.strict_rules.validate()
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input
    }

    fn report_path(&self) -> Option<&str> {
        self.report.as_deref()
    }

    fn rules(&self) -> &StrictRules {
        &self.strict_rules
    }
}
