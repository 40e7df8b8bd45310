use balanced_groups::config::toml_config::TomlConfig;
use balanced_groups::core::ConfigProvider;
use balanced_groups::utils::error::ErrorSeverity;
use balanced_groups::utils::{logger, validation::Validate};
use balanced_groups::{resolve, GroupingEngine, LocalStorage};
use clap::Parser;
use std::path::Path;

#[derive(Parser)]
#[command(name = "toml-groups")]
#[command(about = "Balanced grouping driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "groups.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    log_json: bool,

    /// Override grouping.requested_groups from config
    #[arg(short, long)]
    groups: Option<usize>,

    /// Show the resolved group count without forming groups
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    logger::init_logger(args.verbose, args.log_json);

    tracing::info!("🚀 Starting TOML-based grouping");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    // Load TOML configuration
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    // Apply command-line overrides
    if let Some(groups) = args.groups {
        config.grouping.requested_groups = groups;
        tracing::info!("🔧 Requested groups overridden to: {}", groups);
    }

    // Validate configuration
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    // relative paths in the config are relative to the config file
    let base = Path::new(&args.config)
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default();
    let engine = GroupingEngine::new(LocalStorage::new(base), config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - no groups will be formed");
        match engine.load_participants() {
            Ok(participants) => {
                let resolution = resolve(participants.len(), engine.config().requested_groups());
                println!("Participants: {}", participants.len());
                println!("Requested groups: {}", resolution.requested);
                println!("Resolved groups: {}", resolution.groups);
                if let Some(adjustment) = resolution.adjustment {
                    println!("Notice: {}", adjustment);
                }
            }
            Err(e) => {
                eprintln!("❌ {}", e.user_friendly_message());
                std::process::exit(1);
            }
        }
        return;
    }

    // Run grouping
    match engine.run() {
        Ok(outcome) => {
            match &outcome.written_to {
                Some(path) => println!("📁 Report saved to: {}", path),
                None => print!("{}", outcome.rendered),
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Grouping failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
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
    }
}
