//! Shared type definitions for the ClickSafe URL analysis client
//!
//! Everything the presentation layer needs to render an analysis outcome
//! lives here: the parsed analysis report, the per-source reputation
//! checks, and the verdict band derived from the numeric risk score.

pub mod analysis;

// Re-export commonly used types for easier imports
pub use analysis::{AnalysisReport, ReputationCheck, ReputationStatus, VerdictBand};
