use crate::{color::Color, error::RingError};

/// Text readout shown at the center of the ring.
///
/// The template may contain a single `{}` slot, replaced by the whole-number
/// percentage on every repaint. Substitution always starts from the template
/// supplied here, so repeated repaints never compound earlier substitutions.
/// An empty template disables the readout entirely.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    template: String,
    font_size: i32,
    color: Color,
}

impl Label {
    /// Creates a label from a template and font size.
    ///
    /// Fails with [`RingError::NonPositive`] when `font_size <= 0`.
    pub fn new(template: impl Into<String>, font_size: i32) -> Result<Self, RingError> {
        if font_size <= 0 {
            return Err(RingError::NonPositive {
                what: "label font size",
                value: font_size,
            });
        }
        Ok(Self {
            template: template.into(),
            font_size,
            color: Color::WHITE,
        })
    }

    /// The default percentage readout: `"{}%"` at font size 40.
    ///
    /// Each call produces a fresh label, so instances never share state.
    pub fn percent() -> Self {
        Self {
            template: "{}%".to_string(),
            font_size: 40,
            color: Color::WHITE,
        }
    }

    /// Returns this label with its tint color replaced.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = color.into();
        self
    }

    /// The original template text, slot included.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Font size in pixels.
    pub fn font_size(&self) -> i32 {
        self.font_size
    }

    /// Tint applied when the rasterized text is blitted.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Whether the readout is disabled (empty template).
    pub fn is_empty(&self) -> bool {
        self.template.is_empty()
    }

    /// Substitutes `percent` into the template's `{}` slot.
    ///
    /// A template without a slot renders verbatim.
    pub fn resolve(&self, percent: i32) -> String {
        self.template.replacen("{}", &percent.to_string(), 1)
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::percent()
    }
}
