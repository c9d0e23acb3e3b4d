//! Pipeline orchestration.

use chrono::{DateTime, Utc};
use kinship_core::{aggregate, Relationships, WeightCalculator};
use kinship_layout::{Canvas, RadialPartitioner};
use kinship_rank::RankSelector;
use kinship_source::{DataSource, Dataset, Progress};

use crate::config::AnalyzerConfig;
use crate::error::{Error, Result};
use crate::report::{Report, RunStats};

/// Runs the full pipeline for one account at a time.
///
/// Construction validates the whole configuration; an `Analyzer` that
/// exists can always produce a report.
#[derive(Debug, Clone)]
pub struct Analyzer {
    config: AnalyzerConfig,
    weights: WeightCalculator,
    selector: RankSelector,
    partitioner: RadialPartitioner,
}

impl Analyzer {
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        let weights = WeightCalculator::new(config.weight)?;
        config.rank.validate()?;
        let partitioner = RadialPartitioner::new(config.radial)?;
        if config.rank.max_nodes > config.radial.max_nodes {
            return Err(Error::SelectionExceedsLayout {
                selected: config.rank.max_nodes,
                capacity: config.radial.max_nodes,
            });
        }
        Ok(Self {
            selector: RankSelector::new(config.rank),
            weights,
            partitioner,
            config,
        })
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Fetch `handle` from `source` and analyze it.
    pub fn analyze(
        &self,
        source: &(impl DataSource + ?Sized),
        handle: &str,
        now: DateTime<Utc>,
        canvas: Canvas,
        progress: &mut dyn FnMut(Progress),
    ) -> Result<Report> {
        tracing::info!(handle, %now, "starting analysis");
        let dataset = Dataset::fetch(source, handle, progress)?;
        let report = self.analyze_dataset(&dataset, now, canvas);
        tracing::info!(
            account = %report.account.id,
            candidates = report.stats.candidates,
            selected = report.stats.selected,
            rings = report.radial.rings.len(),
            "analysis complete"
        );
        Ok(report)
    }

    /// Analyze already-narrowed inputs. Pure: no I/O, no clock.
    pub fn analyze_dataset(&self, dataset: &Dataset, now: DateTime<Utc>, canvas: Canvas) -> Report {
        let account = &dataset.account;

        let interactions = aggregate(&account.id, &dataset.posts.records, &dataset.likes.records);
        let weighted = self.weights.weigh_all(&interactions, now);
        let relationships = Relationships::classify(
            &account.id,
            &dataset.following.records,
            &dataset.followers.records,
        );

        let ranking = self.selector.rank(&account.id, &weighted, &relationships);
        let family = ranking.family(account, &self.config.rank.family);
        let radial = self.partitioner.partition(ranking.selected(), canvas);

        let stats = RunStats {
            candidates: ranking.len(),
            selected: ranking.selected().len(),
            interactions: *interactions.stats(),
            relations: relationships.counts(),
            rejected: dataset.rejections(),
        };

        Report {
            account: account.clone(),
            generated_at: now,
            ranked: ranking.selected().to_vec(),
            family,
            radial,
            stats,
        }
    }
}
