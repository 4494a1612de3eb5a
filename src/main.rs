use clap::Parser;
use golden_cdm::utils::{logger, validation::Validate};
use golden_cdm::{AppConfig, CdmError, CdmProcessor, CliConfig};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();
    let verbose = cli.verbose;

    let config = match AppConfig::from_cli(cli).and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(None, verbose, Default::default());
            exit_with(&e, "n/a");
        }
    };

    logger::init_cli_logger(config.log_level.as_deref(), config.verbose, config.log_format);

    tracing::info!("Starting golden-cdm");
    tracing::debug!("Config: {:?}", config);
    tracing::info!("Using input source: {}", config.input);

    let processor = CdmProcessor::from_config(&config);

    if let Err(e) = run(&processor, &config).await {
        exit_with(&e, processor.correlation_id());
    }

    tracing::info!("golden-cdm completed successfully");
}

async fn run(processor: &CdmProcessor, config: &AppConfig) -> Result<(), CdmError> {
    let Some(terms) = processor.process_input(&config.input).await? else {
        tracing::warn!("No economic terms data provided in Golden Schema");
        return Ok(());
    };

    tracing::info!("EconomicTerms created successfully");

    match &config.output_path {
        Some(path) => processor.write_output(path, &terms).await?,
        None => println!("{}", processor.render(&terms)),
    }

    Ok(())
}

fn exit_with(e: &CdmError, correlation_id: &str) -> ! {
    tracing::error!(
        correlation_id,
        "golden-cdm failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    std::process::exit(e.exit_code());
}
