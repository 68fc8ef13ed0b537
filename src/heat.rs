use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::{count_range, Hsl, HeatMapOptions, TagCount};

/// What the heat map color and width follow.
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
pub enum Correlation {
    /// Rank in the descending list, hue steps evenly from item to item.
    #[default]
    ByIndex,
    /// Count relative to the smallest and largest count shown.
    ByCount,
}

/// Background color and width of one heat map item.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Shade {
    pub color: Hsl,
    /// Width percentage.
    pub width: f64,
}

impl Shade {
    /// Inline CSS for the item.
    pub fn style(&self) -> String {
        format!(
            "background: {}; width: {}%",
            self.color.to_hex(),
            self.width.trunc() as i64
        )
    }
}

/// Runs from red for the most used tag to pale blue (hue 0.5) for the least
/// used one.
#[derive(Clone, Debug)]
pub struct HeatGradient {
    correlation: Correlation,
    taper: bool,
    min_width: f64,

    min: u32,
    range: u32,

    color: Hsl,
    width: f64,
    hue_step: f64,
    width_step: f64,
}

impl HeatGradient {
    /// Set up a gradient for `items`, which must already be in descending
    /// order for rank correlation.
    pub fn new(options: &HeatMapOptions, items: &[TagCount]) -> Self {
        let min_width = f64::from(options.min_width_percentage);
        let (min, max) = count_range(items);
        let n = items.len().max(1) as f64;
        let width_step = (100.0 - min_width) / n;

        HeatGradient {
            correlation: options.correlation,
            taper: options.taper_width,
            min_width,
            min,
            range: max - min,
            color: Hsl::new(0.0, options.saturation, options.luminance),
            // Start one step wide so the first item lands at 100%.
            width: 100.0 + width_step,
            hue_step: 0.5 / n,
            width_step,
        }
    }

    /// Shade for the next item.
    pub fn next_shade(&mut self, count: u32) -> Shade {
        match self.correlation {
            Correlation::ByCount => {
                let ratio = if self.range == 0 {
                    0.0
                } else {
                    f64::from(count.saturating_sub(self.min))
                        / f64::from(self.range)
                };
                let color = Hsl::new(
                    0.5 - 0.5 * ratio,
                    self.color.saturation(),
                    self.color.luminance(),
                );
                let width = if self.taper {
                    self.min_width + (100.0 - self.min_width) * ratio
                } else {
                    100.0
                };
                Shade { color, width }
            }
            Correlation::ByIndex => {
                let color = self.color;
                self.color.rotate(self.hue_step);
                let width = if self.taper {
                    self.width -= self.width_step;
                    self.width
                } else {
                    100.0
                };
                Shade { color, width }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(counts: &[u32]) -> Vec<TagCount> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &n)| TagCount::new(format!("t{i}"), n))
            .collect()
    }

    fn shades(options: &HeatMapOptions, counts: &[u32]) -> Vec<Shade> {
        let items = items(counts);
        let mut gradient = HeatGradient::new(options, &items);
        items.iter().map(|t| gradient.next_shade(t.count)).collect()
    }

    #[test]
    fn test_by_index() {
        let shades =
            shades(&HeatMapOptions::default(), &[50, 40, 30, 20, 10]);

        let widths: Vec<f64> = shades.iter().map(|s| s.width).collect();
        assert_eq!(widths, vec![100.0, 90.0, 80.0, 70.0, 60.0]);

        assert_eq!(shades[0].color.hue(), 0.0);
        assert_eq!(shades[0].style(), "background: #ff0000; width: 100%");
        assert_eq!(shades[1].style(), "background: #ff9900; width: 90%");
        assert!(shades.iter().all(|s| s.color.hue() < 0.5));
    }

    #[test]
    fn test_by_index_without_taper() {
        let options = HeatMapOptions {
            taper_width: false,
            ..Default::default()
        };
        assert!(shades(&options, &[3, 2, 1]).iter().all(|s| s.width == 100.0));
    }

    #[test]
    fn test_by_count() {
        let options = HeatMapOptions {
            correlation: Correlation::ByCount,
            ..Default::default()
        };
        let shades = shades(&options, &[10, 5, 0]);

        assert_eq!(shades[0].color.hue(), 0.0);
        assert_eq!(shades[1].color.hue(), 0.25);
        assert_eq!(shades[2].color.hue(), 0.5);

        assert_eq!(shades[0].width, 100.0);
        assert_eq!(shades[1].width, 75.0);
        assert_eq!(shades[2].width, 50.0);

        assert_eq!(shades[0].color.to_hex(), "#ff0000");
        assert_eq!(shades[2].color.to_hex(), "#00ffff");
    }

    #[test]
    fn test_by_count_flat() {
        let options = HeatMapOptions {
            correlation: Correlation::ByCount,
            ..Default::default()
        };
        for s in shades(&options, &[4, 4, 4]) {
            assert_eq!(s.color.hue(), 0.5);
            assert_eq!(s.width, 50.0);
        }
    }

    #[test]
    fn test_width_truncates() {
        let shade = Shade {
            color: Hsl::new(0.0, 1.0, 0.5),
            width: 66.9,
        };
        assert_eq!(shade.style(), "background: #ff0000; width: 66%");
    }

    #[test]
    fn test_saturation_and_luminance_carry_over() {
        let options = HeatMapOptions {
            saturation: 0.0,
            luminance: 1.0,
            ..Default::default()
        };
        for s in shades(&options, &[2, 1]) {
            assert_eq!(s.color.to_hex(), "#ffffff");
        }
    }
}
