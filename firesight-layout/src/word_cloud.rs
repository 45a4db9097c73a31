use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use crate::error::LayoutError;
use crate::measurement::{EstimatedTextMeasurer, TextMeasurementConfig, TextMeasurer};
use crate::rtree::{BoxInstance, PlacedBoxTree};
use crate::spiral::ArchimedeanSpiral;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordLayoutConfig {
    pub width: f32,
    pub height: f32,
    /// Weight (font size) per occurrence
    pub weight_multiplier: f32,
    /// Minimum gap kept between placed boxes
    pub padding: f32,
    pub max_spiral_steps: usize,
    pub char_width_ratio: f32,
    /// Fixed seed for rotation and spiral direction draws. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl WordLayoutConfig {
    /// Random source for rotation and spiral direction draws
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

impl Default for WordLayoutConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 300.0,
            weight_multiplier: 10.0,
            padding: 5.0,
            max_spiral_steps: 10_000,
            char_width_ratio: 0.6,
            seed: None,
        }
    }
}

/// A word placed on the layout canvas.
///
/// `x` and `y` are the centre of the word's box in canvas coordinates, with the
/// origin at the top-left corner. `width` and `height` already account for the
/// rotation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedWord {
    pub text: String,
    pub weight: f32,
    pub x: f32,
    pub y: f32,
    pub rotation_degrees: f32,
    pub width: f32,
    pub height: f32,
}

impl PlacedWord {
    /// `[x0, y0, x1, y1]` of the word's box
    pub fn bounds(&self) -> [f32; 4] {
        box_bounds(self.x, self.y, self.width, self.height)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WordLayout {
    pub words: Vec<PlacedWord>,
    /// Words that found no free slot, in placement order
    pub dropped: Vec<String>,
}

fn box_bounds(cx: f32, cy: f32, width: f32, height: f32) -> [f32; 4] {
    [
        cx - width / 2.0,
        cy - height / 2.0,
        cx + width / 2.0,
        cy + height / 2.0,
    ]
}

/// Places words by probing an outward spiral from the canvas centre.
pub struct WordLayoutEngine {
    config: WordLayoutConfig,
    measurer: Box<dyn TextMeasurer>,
}

impl WordLayoutEngine {
    pub fn try_new(config: WordLayoutConfig) -> Result<Self, LayoutError> {
        let measurer = EstimatedTextMeasurer {
            char_width_ratio: config.char_width_ratio,
        };
        Self::try_new_with_measurer(config, Box::new(measurer))
    }

    pub fn try_new_with_measurer(
        config: WordLayoutConfig,
        measurer: Box<dyn TextMeasurer>,
    ) -> Result<Self, LayoutError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(config.width) || !valid(config.height) {
            return Err(LayoutError::InvalidCanvas {
                width: config.width,
                height: config.height,
            });
        }
        Ok(Self { config, measurer })
    }

    pub fn config(&self) -> &WordLayoutConfig {
        &self.config
    }

    /// Lays out `frequencies` with the configured seed, or an entropy seed when unset
    pub fn layout<'a>(&self, frequencies: impl IntoIterator<Item = (&'a str, usize)>) -> WordLayout {
        self.layout_with_rng(frequencies, &mut self.config.rng())
    }

    /// Lays out `frequencies` drawing rotations and spiral directions from `rng`.
    ///
    /// Repeated keys are merged. Keys with a zero count or empty text are never
    /// placed. Words are placed in order of descending weight, ties broken by text.
    #[tracing::instrument(skip_all)]
    pub fn layout_with_rng<'a, R: Rng>(
        &self,
        frequencies: impl IntoIterator<Item = (&'a str, usize)>,
        rng: &mut R,
    ) -> WordLayout {
        let mut merged: IndexMap<&str, usize> = IndexMap::new();
        for (text, count) in frequencies {
            *merged.entry(text).or_default() += count;
        }

        let mut candidates: Vec<(&str, f32)> = merged
            .into_iter()
            .filter(|(text, count)| *count > 0 && !text.is_empty())
            .map(|(text, count)| (text, count as f32 * self.config.weight_multiplier))
            .collect();
        candidates.sort_by(|a, b| {
            Reverse(OrderedFloat(a.1))
                .cmp(&Reverse(OrderedFloat(b.1)))
                .then_with(|| a.0.cmp(b.0))
        });

        let mut tree = PlacedBoxTree::new();
        let mut result = WordLayout::default();
        for (text, weight) in candidates {
            match self.place(text, weight, &tree, rng) {
                Some(word) => {
                    tree.insert(BoxInstance::new(word.bounds()));
                    result.words.push(word);
                }
                None => result.dropped.push(text.to_string()),
            }
        }

        if !result.dropped.is_empty() {
            tracing::debug!(
                placed = result.words.len(),
                dropped = result.dropped.len(),
                "word layout overflow"
            );
        }
        result
    }

    fn place<R: Rng>(
        &self,
        text: &str,
        weight: f32,
        tree: &PlacedBoxTree,
        rng: &mut R,
    ) -> Option<PlacedWord> {
        let WordLayoutConfig {
            width: canvas_width,
            height: canvas_height,
            padding,
            ..
        } = self.config;

        let quarter_turn = rng.gen_bool(0.5);
        let clockwise = rng.gen_bool(0.5);

        let bounds = self
            .measurer
            .measure_text_bounds(&TextMeasurementConfig {
                text,
                font_size: weight,
            })
            .rotated(quarter_turn);
        if bounds.width > canvas_width || bounds.height > canvas_height {
            return None;
        }

        let center = [canvas_width / 2.0, canvas_height / 2.0];
        let max_delta = canvas_width.hypot(canvas_height);
        let spiral = ArchimedeanSpiral::new(canvas_width, canvas_height, clockwise);

        for [dx, dy] in spiral.take(self.config.max_spiral_steps) {
            if dx.abs().min(dy.abs()) >= max_delta {
                break;
            }
            let (x, y) = (center[0] + dx, center[1] + dy);
            let [x0, y0, x1, y1] = box_bounds(x, y, bounds.width, bounds.height);
            if x0 < 0.0 || y0 < 0.0 || x1 > canvas_width || y1 > canvas_height {
                continue;
            }
            if tree.intersects_any(&[x0 - padding, y0 - padding, x1 + padding, y1 + padding]) {
                continue;
            }
            return Some(PlacedWord {
                text: text.to_string(),
                weight,
                x,
                y,
                rotation_degrees: if quarter_turn { 90.0 } else { 0.0 },
                width: bounds.width,
                height: bounds.height,
            });
        }
        None
    }
}

/// Lays out word frequencies on a `canvas_width` x `canvas_height` canvas with
/// default settings and an entropy-seeded random source.
pub fn layout<'a>(
    frequencies: impl IntoIterator<Item = (&'a str, usize)>,
    canvas_width: f32,
    canvas_height: f32,
) -> Result<WordLayout, LayoutError> {
    let engine = WordLayoutEngine::try_new(WordLayoutConfig {
        width: canvas_width,
        height: canvas_height,
        ..Default::default()
    })?;
    Ok(engine.layout(frequencies))
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    fn seeded(seed: u64) -> WordLayoutEngine {
        WordLayoutEngine::try_new(WordLayoutConfig {
            seed: Some(seed),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_seeded_config_rng_repeats() {
        let config = WordLayoutConfig {
            seed: Some(99),
            ..Default::default()
        };
        let (mut first, mut second) = (config.rng(), config.rng());
        for _ in 0..16 {
            assert_eq!(first.gen::<u64>(), second.gen::<u64>());
        }
    }

    #[test]
    fn test_largest_word_at_centre() {
        let layout = seeded(7).layout([("Napa", 1), ("Butte", 3)]);
        let first = &layout.words[0];
        assert_eq!(first.text, "Butte");
        assert_approx_eq!(f32, first.weight, 30.0);
        assert_approx_eq!(f32, first.x, 250.0);
        assert_approx_eq!(f32, first.y, 150.0);
        assert!(first.rotation_degrees == 0.0 || first.rotation_degrees == 90.0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let frequencies = [("Butte", 4), ("Napa", 2), ("Shasta", 2), ("Lake", 1)];
        assert_eq!(seeded(42).layout(frequencies), seeded(42).layout(frequencies));
    }

    #[test]
    fn test_zero_counts_and_empty_keys_skipped() {
        let layout = seeded(1).layout([("Butte", 0), ("", 3), ("Napa", 1)]);
        let texts: Vec<_> = layout.words.iter().map(|w| w.text.as_str()).collect();
        assert_eq!(texts, vec!["Napa"]);
        assert!(layout.dropped.is_empty());
    }

    #[test]
    fn test_repeated_keys_merge() {
        let layout = seeded(3).layout([("Napa", 1), ("Napa", 2)]);
        assert_eq!(layout.words.len(), 1);
        assert_approx_eq!(f32, layout.words[0].weight, 30.0);
    }

    #[test]
    fn test_oversized_word_dropped() {
        let layout = seeded(5).layout([("Los Angeles", 100)]);
        assert!(layout.words.is_empty());
        assert_eq!(layout.dropped, vec!["Los Angeles".to_string()]);
    }

    #[test]
    fn test_invalid_canvas() {
        let err = WordLayoutEngine::try_new(WordLayoutConfig {
            width: 0.0,
            ..Default::default()
        })
        .err();
        assert_eq!(
            err,
            Some(LayoutError::InvalidCanvas {
                width: 0.0,
                height: 300.0
            })
        );
        assert!(layout([("Napa", 1)], f32::NAN, 10.0).is_err());
    }

    #[test]
    fn test_free_layout_fn() {
        let layout = layout([("Napa", 1), ("Butte", 2)], 400.0, 400.0).unwrap();
        assert_eq!(layout.words.len(), 2);
    }
}
