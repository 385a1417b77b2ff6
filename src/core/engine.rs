use crate::core::{Pipeline, Tally};
use crate::utils::error::Result;

pub struct CheckEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CheckEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Tally> {
        tracing::info!("Starting passport check");

        tracing::info!("Parsing records...");
        let records = self.pipeline.extract().await?;
        tracing::info!("Parsed {} records", records.len());

        tracing::info!("Validating records...");
        let result = self.pipeline.transform(records).await?;
        tracing::info!("Validated {} records", result.verdicts.len());

        let tally = self.pipeline.load(result).await?;
        tracing::info!(
            "Presence-valid: {}, strict-valid: {} (of {})",
            tally.presence_valid,
            tally.strict_valid,
            tally.total
        );

        Ok(tally)
    }
}
