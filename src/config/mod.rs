pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::{ConfigProvider, OutputFormat};
    use crate::utils::error::{GroupingError, Result};
    use crate::utils::validation::{
        validate_path, validate_positive_number, validate_score_bounds, Validate,
    };
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "balanced-groups")]
    #[command(about = "Split scored participants into balanced groups of at most four")]
    pub struct CliConfig {
        /// CSV file with a `score` column and an optional `name` column
        #[arg(short, long)]
        pub input: Option<String>,

        /// Inline scores, e.g. --scores 9,8.5,7
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        pub scores: Vec<f64>,

        /// Desired number of groups (adjusted if it cannot be honoured)
        #[arg(short, long, default_value = "1")]
        pub groups: usize,

        #[arg(short, long, value_enum, default_value = "table")]
        pub format: OutputFormat,

        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        pub output: Option<String>,

        #[arg(long, default_value = "0.0")]
        pub score_min: f64,

        #[arg(long, default_value = "10.0")]
        pub score_max: f64,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,
    }

    impl ConfigProvider for CliConfig {
        fn input_path(&self) -> Option<&str> {
            self.input.as_deref()
        }

        fn inline_scores(&self) -> &[f64] {
            &self.scores
        }

        fn requested_groups(&self) -> usize {
            self.groups
        }

        fn score_bounds(&self) -> (f64, f64) {
            (self.score_min, self.score_max)
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn output_path(&self) -> Option<&str> {
            self.output.as_deref()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_positive_number("groups", self.groups, 1)?;
            validate_score_bounds(self.score_min, self.score_max)?;

            match (&self.input, self.scores.is_empty()) {
                (Some(_), false) => {
                    return Err(GroupingError::ConfigError {
                        message: "use either --input or --scores, not both".to_string(),
                    })
                }
                (None, true) => {
                    return Err(GroupingError::MissingConfigError {
                        field: "input or scores".to_string(),
                    })
                }
                (Some(path), true) => validate_path("input", path)?,
                (None, false) => {}
            }

            if let Some(output) = &self.output {
                validate_path("output", output)?;
            }
            Ok(())
        }
    }

}
