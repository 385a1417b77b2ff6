pub mod engine;
pub mod parser;
pub mod pipeline;
pub mod policy;

pub use crate::domain::model::{Field, Record, Tally, ValidationResult, Verdict, Violation};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
