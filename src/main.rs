use clap::Parser;
use package_sorter::utils::{logger, validation::Validate};
use package_sorter::{inspect, CliConfig, OutputFormat, SortError};

fn main() {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(&config) {
        tracing::error!(
            "Classification failed: {} (Category: {:?})",
            e,
            e.category()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), SortError> {
    config.validate()?;

    let measurement = config.measurement()?;
    let report = inspect(&measurement);
    tracing::info!(category = %report.category, "package sorted");

    match config.format {
        OutputFormat::Text => println!("{}", report.category),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
