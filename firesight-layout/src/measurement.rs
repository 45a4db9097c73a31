/// Core trait for sizing a word's box before placement
pub trait TextMeasurer: Send + Sync {
    /// Measures the bounding dimensions for a text string with given configuration
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds;
}

/// Configuration needed for text measurement
#[derive(Debug, Clone)]
pub struct TextMeasurementConfig<'a> {
    /// The text string to measure
    pub text: &'a str,
    /// Font size in layout units
    pub font_size: f32,
}

/// Unrotated extent of a measured string
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBounds {
    pub width: f32,
    pub height: f32,
}

impl TextBounds {
    /// Swaps width and height for a quarter turn
    pub fn rotated(self, quarter_turn: bool) -> Self {
        if quarter_turn {
            Self {
                width: self.height,
                height: self.width,
            }
        } else {
            self
        }
    }
}

/// Font-free measurer that assumes every character has the same advance.
///
/// Width is `chars * font_size * char_width_ratio` and height is the font size.
#[derive(Debug, Clone, Copy)]
pub struct EstimatedTextMeasurer {
    pub char_width_ratio: f32,
}

impl Default for EstimatedTextMeasurer {
    fn default() -> Self {
        Self {
            char_width_ratio: 0.6,
        }
    }
}

impl TextMeasurer for EstimatedTextMeasurer {
    fn measure_text_bounds(&self, config: &TextMeasurementConfig) -> TextBounds {
        let chars = config.text.chars().count() as f32;
        TextBounds {
            width: chars * config.font_size * self.char_width_ratio,
            height: config.font_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_estimated_bounds() {
        let measurer = EstimatedTextMeasurer::default();
        let bounds = measurer.measure_text_bounds(&TextMeasurementConfig {
            text: "Napa",
            font_size: 20.0,
        });
        assert_approx_eq!(f32, bounds.width, 48.0);
        assert_approx_eq!(f32, bounds.height, 20.0);

        let rotated = bounds.rotated(true);
        assert_approx_eq!(f32, rotated.width, 20.0);
        assert_approx_eq!(f32, rotated.height, 48.0);
        assert_eq!(bounds.rotated(false), bounds);
    }

    #[test]
    fn test_counts_chars_not_bytes() {
        let measurer = EstimatedTextMeasurer {
            char_width_ratio: 1.0,
        };
        let bounds = measurer.measure_text_bounds(&TextMeasurementConfig {
            text: "Señora",
            font_size: 1.0,
        });
        assert_approx_eq!(f32, bounds.width, 6.0);
    }
}
