use balanced_groups::utils::error::{ErrorSeverity, GroupingError};
use balanced_groups::utils::{logger, validation::Validate};
use balanced_groups::{CliConfig, GroupingEngine, LocalStorage};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    // Initialize logging
    logger::init_logger(config.verbose, config.log_json);

    tracing::info!("Starting balanced-groups CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // Create storage and engine, then run
    let engine = GroupingEngine::new(LocalStorage::default(), config);

    match engine.run() {
        Ok(outcome) => {
            match &outcome.written_to {
                Some(path) => println!("📁 Report saved to: {}", path),
                None => print!("{}", outcome.rendered),
            }
        }
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &GroupingError) -> ! {
    tracing::error!(
        "❌ Grouping failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    // Exit code follows error severity
    let exit_code = match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}
