//! Run configuration.

use std::path::Path;

use kinship_core::WeightConfig;
use kinship_layout::RadialConfig;
use kinship_rank::RankConfig;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Every tunable of one analysis run.
///
/// Missing fields take their defaults, so a config file only needs the
/// values it changes. Ring bounds merge the same way, field by field:
///
/// ```json
/// { "weight": { "decay_constant": 0.05 }, "radial": { "core": { "cap": 9 } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub weight: WeightConfig,
    pub rank: RankConfig,
    pub radial: RadialConfig,
}

impl AnalyzerConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}
