//! Per-image processing built on the geometry core

pub mod config;
pub mod locate;
pub mod markup;

pub use config::{LocateConfig, MarkupConfig};
pub use locate::{ImageScore, LocateOutcome, LocatePipeline, LocateSummary};
pub use markup::{MarkupOutcome, MarkupPipeline, MarkupReport};
