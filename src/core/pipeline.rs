use crate::core::parser::records_from_str;
use crate::core::policy::{PresencePolicy, StrictPolicy, ValidationPolicy};
use crate::core::{ConfigProvider, Pipeline, Record, Storage, Tally, ValidationResult, Verdict};
use crate::utils::error::{CheckError, Result};
use serde::Serialize;

pub struct PassportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    presence: PresencePolicy,
    strict: StrictPolicy,
}

impl<S: Storage, C: ConfigProvider> PassportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        let strict = StrictPolicy::new(config.rules().clone());
        Self {
            storage,
            config,
            presence: PresencePolicy,
            strict,
        }
    }

    fn judge(&self, index: usize, record: &Record) -> Verdict {
        let violations = self.strict.violations(record);
        Verdict {
            index,
            presence_valid: self.presence.is_valid(record),
            strict_valid: violations.is_empty(),
            violations,
        }
    }
}

#[derive(Serialize)]
struct ReportRow<'a> {
    index: usize,
    presence_valid: bool,
    strict_valid: bool,
    violations: &'a str,
}

fn render_report(result: &ValidationResult) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for verdict in &result.verdicts {
        let violations = verdict
            .violations
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        writer.serialize(ReportRow {
            index: verdict.index,
            presence_valid: verdict.presence_valid,
            strict_valid: verdict.strict_valid,
            violations: &violations,
        })?;
    }
    writer
        .into_inner()
        .map_err(|e| CheckError::IoError(e.into_error()))
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PassportPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<Record>> {
        let path = self.config.input_path();
        tracing::debug!("Reading batch file: {}", path);
        let data = self.storage.read_file(path).await?;
        tracing::debug!("Read {} bytes", data.len());

        let text = String::from_utf8_lossy(&data);
        Ok(records_from_str(&text).collect())
    }

    async fn transform(&self, data: Vec<Record>) -> Result<ValidationResult> {
        let verdicts = data
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let verdict = self.judge(index, record);
                if !verdict.strict_valid {
                    tracing::debug!(
                        "Record {} failed {} policy: {} violation(s)",
                        index,
                        self.strict.name(),
                        verdict.violations.len()
                    );
                }
                verdict
            })
            .collect();

        Ok(ValidationResult { verdicts })
    }

    async fn load(&self, result: ValidationResult) -> Result<Tally> {
        if let Some(report_path) = self.config.report_path() {
            let report = render_report(&result)?;
            tracing::debug!("Writing report ({} bytes) to {}", report.len(), report_path);
            self.storage.write_file(report_path, &report).await?;
        }

        Ok(result.tally())
    }
}

/// Counts presence-valid and strict-valid records in `text` using the
/// default rules.
pub fn count_valid(text: &str) -> Tally {
    let presence = PresencePolicy;
    let strict = StrictPolicy::default();
    let mut tally = Tally::default();
    for (index, record) in records_from_str(text).enumerate() {
        let violations = strict.violations(&record);
        tally.record(&Verdict {
            index,
            presence_valid: presence.is_valid(&record),
            strict_valid: violations.is_empty(),
            violations,
        });
    }
    tally
}
