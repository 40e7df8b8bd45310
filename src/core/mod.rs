pub mod balancer;
pub mod engine;
pub mod resolver;

pub use crate::domain::model::{Group, GroupingResult, Participant, Resolution};
pub use crate::domain::ports::{ConfigProvider, OutputFormat, Storage};
pub use crate::utils::error::Result;
