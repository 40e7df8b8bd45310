// Adapters layer: participant input formats and report rendering.

pub mod participants;
pub mod report;
