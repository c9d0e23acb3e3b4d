//! Kinship Analyzer
//!
//! Wires the kinship crates into one run: fetch and narrow an account's
//! data, weigh and classify counterparts, rank them, and lay the ranking
//! out as both a family tree and concentric rings.
//!
//! # Pipeline
//!
//! ```text
//!                    ┌─► aggregate ─► WeightCalculator ─┐
//! DataSource ─► Dataset                                  ├─► RankSelector ─┬─► FamilyTree
//!                    └─► Relationships::classify ───────┘                  └─► RadialPartitioner
//! ```
//!
//! All I/O happens in [`Analyzer::analyze`] before the pipeline starts;
//! [`Analyzer::analyze_dataset`] is pure and takes `now` explicitly.

mod analyzer;
mod config;
mod error;
mod report;

pub use analyzer::Analyzer;
pub use config::AnalyzerConfig;
pub use error::{Error, Result};
pub use report::{Report, RunStats, View};
