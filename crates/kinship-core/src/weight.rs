//! Time-decayed interaction weight.
//!
//! ```text
//! weight = (Σ count[kind] × coefficient[kind]) × e^(−decay × days)
//! ```
//!
//! `days` is measured from the bucket's most recent interaction to a `now`
//! supplied by the caller. Nothing in this module reads a clock, so the same
//! bucket and the same `now` always give the same weight.

use chrono::{DateTime, Utc};

use crate::error::{ConfigError, Result};
use crate::{InteractionKind, Interactions, UserStatBucket};

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Per-kind coefficients and the daily decay rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WeightConfig {
    pub reply: f64,
    pub quote: f64,
    pub retweet: f64,
    pub like: f64,
    /// Exponential falloff per day (0.1 ≈ 10% per day)
    pub decay_constant: f64,
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self {
            reply: 3.0,
            quote: 2.5,
            retweet: 1.5,
            like: 0.5,
            decay_constant: 0.1,
        }
    }
}

impl WeightConfig {
    /// Coefficient applied to one interaction kind.
    pub const fn coefficient(&self, kind: InteractionKind) -> f64 {
        match kind {
            InteractionKind::Reply => self.reply,
            InteractionKind::Quote => self.quote,
            InteractionKind::Retweet => self.retweet,
            InteractionKind::Like => self.like,
        }
    }

    /// Check every coefficient is finite and non-negative, and so is the decay.
    pub fn validate(&self) -> Result<()> {
        for kind in InteractionKind::ALL {
            let value = self.coefficient(kind);
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidCoefficient {
                    name: kind.as_str(),
                    value,
                });
            }
        }
        if !self.decay_constant.is_finite() || self.decay_constant < 0.0 {
            return Err(ConfigError::InvalidDecay(self.decay_constant));
        }
        Ok(())
    }
}

/// A counterpart with its weight for one analysis run.
#[derive(Debug, Clone, Copy)]
pub struct WeightedUser<'a> {
    pub bucket: &'a UserStatBucket,
    /// Never negative
    pub weight: f64,
}

/// Weighs buckets with a validated configuration.
#[derive(Debug, Clone)]
pub struct WeightCalculator {
    config: WeightConfig,
}

impl Default for WeightCalculator {
    fn default() -> Self {
        Self {
            config: WeightConfig::default(),
        }
    }
}

impl WeightCalculator {
    /// Validate `config` and build a calculator around it.
    pub fn new(config: WeightConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &WeightConfig {
        &self.config
    }

    /// Undecayed weight: coefficient-weighted sum of counts.
    pub fn base_weight(&self, bucket: &UserStatBucket) -> f64 {
        InteractionKind::ALL
            .iter()
            .map(|&kind| f64::from(bucket.count(kind)) * self.config.coefficient(kind))
            .sum()
    }

    /// Multiplier for an interaction `days` old. Negative ages count as 0.
    pub fn decay_factor(&self, days: f64) -> f64 {
        (-self.config.decay_constant * days.max(0.0)).exp()
    }

    /// Weight of `bucket` as of `now`. Zero for a bucket with no events.
    pub fn weigh(&self, bucket: &UserStatBucket, now: DateTime<Utc>) -> f64 {
        match bucket.last_interaction() {
            Some(last) => self.base_weight(bucket) * self.decay_factor(days_between(last, now)),
            None => 0.0,
        }
    }

    /// Weigh every bucket, in counterpart-identity order.
    pub fn weigh_all<'a>(&self, interactions: &'a Interactions, now: DateTime<Utc>) -> Vec<WeightedUser<'a>> {
        interactions
            .iter()
            .map(|bucket| WeightedUser {
                bucket,
                weight: self.weigh(bucket, now),
            })
            .collect()
    }
}

/// Fractional days from `from` to `to`, clamped at zero.
pub fn days_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    ((to - from).num_milliseconds() as f64 / MILLIS_PER_DAY).max(0.0)
}
