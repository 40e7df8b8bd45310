use crate::core::{ConfigProvider, OutputFormat};
use crate::utils::error::{GroupingError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub grouping: GroupingConfig,
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingConfig {
    pub requested_groups: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    pub scores: Option<Vec<f64>>,
    pub score_min: Option<f64>,
    pub score_max: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GroupingError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML text after substituting `${VAR}` references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| GroupingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GroupingError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Checks group count, score bounds and that exactly one input source is set.
    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_positive_number(
            "grouping.requested_groups",
            self.grouping.requested_groups,
            1,
        )?;

        let (min, max) = self.score_bounds();
        crate::utils::validation::validate_score_bounds(min, max)?;

        match (&self.input.path, &self.input.scores) {
            (Some(_), Some(_)) => {
                return Err(GroupingError::ConfigValidationError {
                    field: "input".to_string(),
                    message: "set either input.path or input.scores, not both".to_string(),
                })
            }
            (None, None) => {
                return Err(GroupingError::MissingConfigError {
                    field: "input.path or input.scores".to_string(),
                })
            }
            (Some(path), None) => crate::utils::validation::validate_path("input.path", path)?,
            (None, Some(_)) => {}
        }

        if let Some(path) = &self.output.path {
            crate::utils::validation::validate_path("output.path", path)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> Option<&str> {
        self.input.path.as_deref()
    }

    fn inline_scores(&self) -> &[f64] {
        self.input.scores.as_deref().unwrap_or(&[])
    }

    fn requested_groups(&self) -> usize {
        self.grouping.requested_groups
    }

    fn score_bounds(&self) -> (f64, f64) {
        (
            self.input.score_min.unwrap_or(0.0),
            self.input.score_max.unwrap_or(10.0),
        )
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
