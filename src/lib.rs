pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::balancer::balance;
pub use crate::core::engine::{GroupingEngine, RunOutcome};
pub use crate::core::resolver::{resolve, resolve_group_count};
pub use domain::model::{
    Group, GroupAdjustment, GroupingResult, Participant, Resolution, GROUP_CAPACITY,
};
pub use utils::error::{GroupingError, Result};
