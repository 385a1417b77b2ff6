pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::RulesConfig};
pub use crate::core::{
    engine::CheckEngine,
    parser::{parse_record, records, records_from_str, Records},
    pipeline::{count_valid, PassportPipeline},
    policy::{Bounds, PresencePolicy, StrictPolicy, StrictRules, ValidationPolicy},
};
pub use crate::domain::model::{Field, Record, Tally, TallyReport};
pub use crate::utils::error::{CheckError, Result};
