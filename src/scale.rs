use anyhow::{bail, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::RenderError;

/// How counts are spread across tag cloud weights.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Scaling {
    #[default]
    Linear,
    Logarithmic,
}

/// Maps tag counts to weight buckets `1..=gradations`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scale {
    scaling: Scaling,
    min: u32,
    step: f64,
}

impl Scale {
    pub fn new(
        scaling: Scaling,
        min: u32,
        max: u32,
        gradations: usize,
    ) -> Result<Self> {
        if gradations < 2 {
            bail!(RenderError::TooFewGradations { gradations });
        }

        let range = f64::from(max.saturating_sub(min));
        let divisions = (gradations - 1) as f64;
        let step = match scaling {
            Scaling::Linear => range / divisions,
            Scaling::Logarithmic => range.log10() / divisions,
        };

        Ok(Scale { scaling, min, step })
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn weight(&self, count: u32) -> u32 {
        // No spread in counts, everything goes in the lowest bucket.
        if !(self.step.is_finite() && self.step > 0.0) {
            return 1;
        }

        // Floor at 1 so the smallest count doesn't hit log10(0).
        let adjusted = f64::from(count.saturating_sub(self.min).max(1));
        let weight = match self.scaling {
            Scaling::Linear => adjusted / self.step + 1.0,
            Scaling::Logarithmic => adjusted.log10() / self.step + 1.0,
        };
        weight.round_ties_even() as u32
    }
}
