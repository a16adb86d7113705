use clap::Parser;
use geo_ratio::core::render;
use geo_ratio::utils::logger;
use geo_ratio::{AppError, CliConfig, OutputFormat, RatioCalculator, RatioEngine};

fn main() {
    let config = CliConfig::parse();

    // Initialize logging
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!("❌ geo-ratio failed: {} (Category: {:?})", e, e.category());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        std::process::exit(e.category().exit_code());
    }
}

fn run(config: &CliConfig) -> Result<(), AppError> {
    let settings = config.settings()?;
    let calculator = RatioCalculator::new(settings.tolerances);
    let engine = RatioEngine::new(calculator, settings.engine_options());

    match engine.run(config.query()) {
        Ok(report) => {
            let output = match settings.format {
                OutputFormat::Text => render::render_text(&report, settings.precision),
                OutputFormat::Json => render::render_json(&report)?,
            };
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            // JSON consumers get a machine-readable error on stdout as well
            if settings.format == OutputFormat::Json {
                println!("{}", render::render_json_error(&e)?);
            }
            Err(e.into())
        }
    }
}
