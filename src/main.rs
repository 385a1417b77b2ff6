use clap::Parser;
use passport_check::utils::{logger, validation::Validate};
use passport_check::{CheckEngine, CliConfig, LocalStorage, PassportPipeline, Tally, TallyReport};

fn print_tally(tally: Tally, json: bool) -> passport_check::Result<()> {
    if json {
        println!("{}", TallyReport::new(tally).to_json()?);
    } else {
        println!("presence-valid: {}", tally.presence_valid);
        println!("strict-valid: {}", tally.strict_valid);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    // 載入並驗證規則
    if let Err(e) = config.load_rules().and_then(|_| config.validate()) {
        tracing::error!("Configuration validation failed: {}", e);
        tracing::error!("Suggestion: {}", e.recovery_suggestion());
        eprintln!("{}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let json = config.json;
    let pipeline = PassportPipeline::new(LocalStorage::default(), config);
    let engine = CheckEngine::new(pipeline);

    match engine.run().await {
        Ok(tally) => print_tally(tally, json)?,
        Err(e) => {
            tracing::error!(
                "Passport check failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("{}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
