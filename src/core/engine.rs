use crate::adapters::{participants, report};
use crate::core::{balancer, resolver};
use crate::domain::model::{GroupingResult, Participant, Resolution};
use crate::domain::ports::{ConfigProvider, Storage};
use crate::utils::error::{GroupingError, Result};
use crate::utils::validation::validate_positive_number;

/// Everything a finished run produced.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub resolution: Resolution,
    pub result: GroupingResult,
    pub rendered: String,
    /// Set when the report went to storage instead of stdout.
    pub written_to: Option<String>,
}

/// Drives one grouping run: load, resolve, balance, render, store.
pub struct GroupingEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> GroupingEngine<S, C> {
    /// Creates an engine that reads and writes files through `storage`.
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    /// Returns the configuration the engine was built with.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Loads participants from the configured CSV file, or from the inline
    /// scores when no file is set. An empty list is an error.
    pub fn load_participants(&self) -> Result<Vec<Participant>> {
        let bounds = self.config.score_bounds();
        let loaded = match self.config.input_path() {
            Some(path) => {
                tracing::debug!("Reading participants from: {}", path);
                let data = self.storage.read_file(path)?;
                participants::parse_participants_csv(&data, bounds)?
            }
            None => participants::participants_from_scores(self.config.inline_scores(), bounds)?,
        };

        if loaded.is_empty() {
            return Err(GroupingError::EmptyInputError);
        }
        Ok(loaded)
    }

    /// Runs the whole pipeline. The report is written to storage when an
    /// output path is configured; otherwise it is only returned in the outcome.
    pub fn run(&self) -> Result<RunOutcome> {
        tracing::info!("Starting grouping run");

        // Load
        let participants = self.load_participants()?;
        tracing::info!("Loaded {} participants", participants.len());

        // Resolve and balance
        validate_positive_number("groups", self.config.requested_groups(), 1)?;
        let resolution = resolver::resolve(participants.len(), self.config.requested_groups());

        let result = balancer::balance(&participants, resolution.groups)?;
        tracing::info!(
            "Formed {} groups (averages: {:?})",
            result.group_count(),
            result.rounded_averages().iter().map(|(_, a)| *a).collect::<Vec<_>>()
        );

        // Render and store
        let rendered = report::render(&result, &resolution, self.config.output_format())?;

        let written_to = match self.config.output_path() {
            Some(path) => {
                self.storage.write_file(path, rendered.as_bytes())?;
                tracing::info!("Report saved to: {}", path);
                Some(path.to_string())
            }
            None => None,
        };

        Ok(RunOutcome {
            resolution,
            result,
            rendered,
            written_to,
        })
    }
}
