//! The progress ring widget: validated state and redraw orchestration.

use glam::Vec2;
use tracing::{debug, trace};

use crate::{
    cap::CapStyle,
    color::Color,
    error::RingError,
    label::Label,
    px::{Px, PxPosition, PxSize},
    renderer::{ArcCommand, RenderSurface},
};

/// Construction defaults for [`ProgressRing`].
pub struct RingDefaults;

impl RingDefaults {
    /// Default stroke thickness for both arcs.
    pub const THICKNESS: i32 = 10;
    /// Default stroke cap for the foreground arc.
    pub const CAP_STYLE: CapStyle = CapStyle::Round;
    /// Default cap tessellation density.
    pub const CAP_PRECISION: i32 = 10;
    /// Default foreground arc color.
    pub const PROGRESS_COLOR: Color = Color::RED;
    /// Default background arc color.
    pub const BACKGROUND_COLOR: Color = Color::new(0.26, 0.26, 0.26, 1.0);
    /// Default maximum progress (the value corresponding to 100%).
    pub const MAX: i32 = 100;
    /// Default minimum progress (the value corresponding to 0%).
    pub const MIN: i32 = 0;
    /// Default side length of the square bounding box.
    pub const WIDGET_SIZE: i32 = 200;
}

/// A circular progress indicator.
///
/// The ring draws a full-circle background arc, a foreground arc sweeping
/// proportionally to the normalized progress, and a centered percentage
/// readout. All configuration goes through validated setters; a rejected
/// mutation leaves every field untouched and never repaints.
///
/// Repainting happens exactly when the committed value changes: `set_value`
/// repaints synchronously through the supplied [`RenderSurface`] before it
/// returns. Hosts that need a paint for other reasons (expose, resize) call
/// [`render`](Self::render) directly.
#[derive(Debug, Clone)]
pub struct ProgressRing {
    thickness: i32,
    cap_style: CapStyle,
    cap_precision: i32,
    progress_color: Color,
    background_color: Color,
    max: i32,
    min: i32,
    value: i32,
    widget_size: i32,
    label: Label,
    label_size: PxSize,
    position: PxPosition,
}

impl Default for ProgressRing {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressRing {
    /// Creates a ring with the documented defaults: thickness 10, round caps
    /// at precision 10, opaque red on dark gray, bounds `[0, 100]`, a 200 px
    /// bounding box and a `"{}%"` readout at font size 40.
    pub fn new() -> Self {
        Self {
            thickness: RingDefaults::THICKNESS,
            cap_style: RingDefaults::CAP_STYLE,
            cap_precision: RingDefaults::CAP_PRECISION,
            progress_color: RingDefaults::PROGRESS_COLOR,
            background_color: RingDefaults::BACKGROUND_COLOR,
            max: RingDefaults::MAX,
            min: RingDefaults::MIN,
            value: RingDefaults::MIN,
            widget_size: RingDefaults::WIDGET_SIZE,
            label: Label::percent(),
            label_size: PxSize::ZERO,
            position: PxPosition::ORIGIN,
        }
    }

    // --- Accessors ---

    /// Stroke width of both arcs, in pixels.
    pub fn thickness(&self) -> i32 {
        self.thickness
    }

    /// Cap shape of the foreground arc's endpoints.
    pub fn cap_style(&self) -> CapStyle {
        self.cap_style
    }

    /// Cap tessellation density.
    pub fn cap_precision(&self) -> i32 {
        self.cap_precision
    }

    /// Foreground arc color.
    pub fn progress_color(&self) -> Color {
        self.progress_color
    }

    /// Background arc color.
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// Upper progress bound (the value shown as 100%).
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Lower progress bound (the value shown as 0%).
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Current progress value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Side length of the square bounding box, in pixels.
    pub fn widget_size(&self) -> i32 {
        self.widget_size
    }

    /// The centered readout label.
    pub fn label(&self) -> &Label {
        &self.label
    }

    /// Measured pixel size of the readout as of the last repaint.
    pub fn label_size(&self) -> PxSize {
        self.label_size
    }

    /// Top-left corner of the bounding box in the host's coordinate space.
    pub fn position(&self) -> PxPosition {
        self.position
    }

    // --- Validated setters ---

    /// Sets the stroke width of both arcs.
    ///
    /// Fails with [`RingError::NonPositive`] when `thickness <= 0`.
    pub fn set_thickness(&mut self, thickness: i32) -> Result<(), RingError> {
        if thickness <= 0 {
            return Err(RingError::NonPositive {
                what: "bar thickness",
                value: thickness,
            });
        }
        self.thickness = thickness;
        Ok(())
    }

    /// Sets the foreground cap style by name, normalizing case and
    /// whitespace. Fails with [`RingError::UnknownCapStyle`] when the name is
    /// not one of `round`, `none` or `square`.
    pub fn set_cap_style(&mut self, name: &str) -> Result<(), RingError> {
        self.cap_style = name.parse()?;
        Ok(())
    }

    /// Sets the foreground cap style from an already-typed value.
    pub fn set_cap(&mut self, cap: CapStyle) {
        self.cap_style = cap;
    }

    /// Sets the cap tessellation density.
    ///
    /// Fails with [`RingError::NonPositive`] when `precision <= 0`.
    pub fn set_cap_precision(&mut self, precision: i32) -> Result<(), RingError> {
        if precision <= 0 {
            return Err(RingError::NonPositive {
                what: "cap precision",
                value: precision,
            });
        }
        self.cap_precision = precision;
        Ok(())
    }

    /// Sets the foreground arc color. Stored as given; component validity is
    /// deferred to the renderer.
    pub fn set_progress_color(&mut self, color: impl Into<Color>) {
        self.progress_color = color.into();
    }

    /// Sets the background arc color. Stored as given.
    pub fn set_background_color(&mut self, color: impl Into<Color>) {
        self.background_color = color.into();
    }

    /// Raises or lowers the upper progress bound.
    ///
    /// Fails with [`RingError::MaxNotAboveMin`] when `max <= min`. The
    /// current value is not re-validated against the new bound.
    pub fn set_max(&mut self, max: i32) -> Result<(), RingError> {
        if max <= self.min {
            return Err(RingError::MaxNotAboveMin { max, min: self.min });
        }
        self.max = max;
        Ok(())
    }

    /// Raises or lowers the lower progress bound, snapping the current value
    /// to it.
    ///
    /// Fails with [`RingError::MinAboveMax`] when `min > max`. On success the
    /// current value is reset to the new minimum; the next committed value
    /// change repaints from there.
    pub fn set_min(&mut self, min: i32) -> Result<(), RingError> {
        if min > self.max {
            return Err(RingError::MinAboveMax { min, max: self.max });
        }
        self.min = min;
        self.value = min;
        Ok(())
    }

    /// Commits a new progress value, repainting through `surface` when it
    /// differs from the current one.
    ///
    /// Fails with [`RingError::ValueOutOfRange`] when `value` lies outside
    /// `[min, max]`; a rejected value never repaints. Setting the current
    /// value again is a no-op: no drawing command is issued.
    pub fn set_value<S: RenderSurface>(
        &mut self,
        value: i32,
        surface: &mut S,
    ) -> Result<(), RingError> {
        if value < self.min || value > self.max {
            return Err(RingError::ValueOutOfRange {
                value,
                min: self.min,
                max: self.max,
            });
        }
        if value == self.value {
            trace!(value, "progress unchanged, skipping repaint");
            return Ok(());
        }
        self.value = value;
        self.render(surface);
        Ok(())
    }

    /// Sets the side length of the square bounding box.
    ///
    /// Fails with [`RingError::NonPositive`] when `size <= 0`.
    pub fn set_widget_size(&mut self, size: i32) -> Result<(), RingError> {
        if size <= 0 {
            return Err(RingError::NonPositive {
                what: "widget size",
                value: size,
            });
        }
        self.widget_size = size;
        Ok(())
    }

    /// Replaces the readout label. The label's original template is kept, so
    /// later repaints substitute into it rather than into prior output.
    pub fn set_label(&mut self, label: Label) {
        self.label = label;
    }

    /// Moves the widget within the host's coordinate space. Placement is the
    /// host's concern and is not validated.
    pub fn set_position(&mut self, position: PxPosition) {
        self.position = position;
    }

    // --- Derived state ---

    /// Current progress remapped linearly from `[min, max]` onto `[0, 1]`.
    ///
    /// The bounds invariant keeps the span positive except transiently when
    /// `set_min` has pinned `min == max`; the value equals `min` then, so the
    /// progress is zero by definition.
    pub fn normalized_progress(&self) -> f32 {
        let span = self.max - self.min;
        if span == 0 {
            return 0.0;
        }
        (self.value - self.min) as f32 / span as f32
    }

    /// Whole-number percentage, as substituted into the readout template.
    pub fn percent(&self) -> i32 {
        (self.normalized_progress() * 100.0) as i32
    }

    fn arc_center(&self) -> Vec2 {
        let half = self.widget_size as f32 / 2.0;
        Vec2::new(
            self.position.x.to_f32() + half,
            self.position.y.to_f32() + half,
        )
    }

    fn arc_radius(&self) -> f32 {
        self.widget_size as f32 / 2.0 - self.thickness as f32
    }

    /// Repaints the whole widget: background circle, foreground sweep and the
    /// centered readout. Every previously issued command is discarded first.
    pub fn render<S: RenderSurface>(&mut self, surface: &mut S) {
        let sweep = self.normalized_progress() * 360.0;
        debug!(value = self.value, sweep, "repainting progress ring");

        surface.clear();

        // Rasterize the readout first so its measured size is current.
        let readout = if self.label.is_empty() {
            None
        } else {
            let text = self.label.resolve(self.percent());
            let (size, texture) = surface.rasterize_text(&text, self.label.font_size());
            self.label_size = size;
            Some(texture)
        };

        let center = self.arc_center();
        let radius = self.arc_radius();
        let width = self.thickness as f32;

        surface.stroke_arc(&ArcCommand::full_circle(
            center,
            radius,
            width,
            self.background_color,
        ));

        surface.stroke_arc(&ArcCommand {
            center,
            radius,
            start_angle_degrees: 0.0,
            sweep_angle_degrees: sweep,
            stroke_width_px: width,
            cap: self.cap_style,
            cap_precision: self.cap_precision,
            color: self.progress_color,
        });

        if let Some(texture) = readout {
            let half = Px(self.widget_size) / 2;
            let offset = PxPosition::new(
                half - self.label_size.width / 2,
                half - self.label_size.height / 2,
            );
            surface.blit(
                &texture,
                self.label.color(),
                self.position.offset(offset.x, offset.y),
                self.label_size,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every command so tests can assert on the redraw protocol.
    #[derive(Default)]
    struct SpySurface {
        clears: usize,
        arcs: Vec<ArcCommand>,
        texts: Vec<String>,
        blits: Vec<(PxPosition, PxSize)>,
    }

    impl RenderSurface for SpySurface {
        type Texture = ();

        fn clear(&mut self) {
            self.clears += 1;
            self.arcs.clear();
            self.blits.clear();
        }

        fn stroke_arc(&mut self, command: &ArcCommand) {
            self.arcs.push(*command);
        }

        fn rasterize_text(&mut self, text: &str, font_size: i32) -> (PxSize, ()) {
            self.texts.push(text.to_string());
            // Crude fixed-advance metrics, good enough for layout assertions.
            let width = text.len() as i32 * font_size / 2;
            (PxSize::new(Px(width), Px(font_size)), ())
        }

        fn blit(&mut self, _texture: &(), _tint: Color, position: PxPosition, size: PxSize) {
            self.blits.push((position, size));
        }
    }

    #[test]
    fn normalized_progress_spans_unit_interval() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        assert_eq!(ring.normalized_progress(), 0.0);
        ring.set_value(100, &mut surface).unwrap();
        assert_eq!(ring.normalized_progress(), 1.0);
        ring.set_value(25, &mut surface).unwrap();
        assert_eq!(ring.normalized_progress(), 0.25);
    }

    #[test]
    fn set_min_snaps_value_to_new_floor() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        ring.set_value(70, &mut surface).unwrap();
        ring.set_min(20).unwrap();
        assert_eq!(ring.value(), 20);
        assert_eq!(ring.normalized_progress(), 0.0);
    }

    #[test]
    fn unchanged_value_issues_no_redraw() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        ring.set_value(50, &mut surface).unwrap();
        assert_eq!(surface.clears, 1);
        ring.set_value(50, &mut surface).unwrap();
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.texts.len(), 1);
    }

    #[test]
    fn bound_setters_reject_crossings() {
        let mut ring = ProgressRing::new();

        assert_eq!(
            ring.set_max(0),
            Err(RingError::MaxNotAboveMin { max: 0, min: 0 })
        );
        assert_eq!(
            ring.set_max(-5),
            Err(RingError::MaxNotAboveMin { max: -5, min: 0 })
        );
        assert_eq!(
            ring.set_min(101),
            Err(RingError::MinAboveMax { min: 101, max: 100 })
        );
        // Bounds untouched after the rejections.
        assert_eq!(ring.min(), 0);
        assert_eq!(ring.max(), 100);
    }

    #[test]
    fn dimension_setters_reject_non_positive_values() {
        let mut ring = ProgressRing::new();

        assert_eq!(
            ring.set_thickness(0),
            Err(RingError::NonPositive {
                what: "bar thickness",
                value: 0,
            })
        );
        assert_eq!(
            ring.set_cap_precision(-1),
            Err(RingError::NonPositive {
                what: "cap precision",
                value: -1,
            })
        );
        assert_eq!(
            ring.set_widget_size(0),
            Err(RingError::NonPositive {
                what: "widget size",
                value: 0,
            })
        );
        assert_eq!(ring.thickness(), RingDefaults::THICKNESS);
        assert_eq!(ring.cap_precision(), RingDefaults::CAP_PRECISION);
        assert_eq!(ring.widget_size(), RingDefaults::WIDGET_SIZE);
    }

    #[test]
    fn cap_style_setter_normalizes_and_rejects() {
        let mut ring = ProgressRing::new();

        ring.set_cap_style("RouND").unwrap();
        assert_eq!(ring.cap_style(), CapStyle::Round);
        assert_eq!(
            ring.set_cap_style("oval"),
            Err(RingError::UnknownCapStyle("oval".to_string()))
        );
        assert_eq!(ring.cap_style(), CapStyle::Round);
    }

    #[test]
    fn out_of_range_value_is_rejected_without_redraw() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        assert_eq!(
            ring.set_value(101, &mut surface),
            Err(RingError::ValueOutOfRange {
                value: 101,
                min: 0,
                max: 100,
            })
        );
        assert_eq!(
            ring.set_value(-1, &mut surface),
            Err(RingError::ValueOutOfRange {
                value: -1,
                min: 0,
                max: 100,
            })
        );
        assert_eq!(ring.value(), 0);
        assert_eq!(surface.clears, 0);
    }

    #[test]
    fn half_progress_draws_half_sweep_and_percent_readout() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        ring.set_value(50, &mut surface).unwrap();

        assert_eq!(ring.normalized_progress(), 0.5);
        assert_eq!(surface.texts, vec!["50%".to_string()]);
        assert_eq!(surface.arcs.len(), 2);

        let background = &surface.arcs[0];
        assert_eq!(background.sweep_angle_degrees, 360.0);
        assert_eq!(background.center, Vec2::new(100.0, 100.0));
        assert_eq!(background.radius, 90.0);
        assert_eq!(background.stroke_width_px, 10.0);
        assert_eq!(background.color, RingDefaults::BACKGROUND_COLOR);

        let foreground = &surface.arcs[1];
        assert_eq!(foreground.start_angle_degrees, 0.0);
        assert_eq!(foreground.sweep_angle_degrees, 180.0);
        assert_eq!(foreground.cap, CapStyle::Round);
        assert_eq!(foreground.color, Color::RED);
    }

    #[test]
    fn rebounding_above_old_range_reads_zero_percent() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        ring.set_min(100).unwrap();
        ring.set_max(150).unwrap();
        ring.set_value(100, &mut surface).unwrap();

        assert_eq!(ring.normalized_progress(), 0.0);
        ring.render(&mut surface);
        assert_eq!(surface.texts.last().unwrap(), "0%");
    }

    #[test]
    fn full_range_value_draws_full_sweep() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        ring.set_max(10).unwrap();
        ring.set_value(10, &mut surface).unwrap();

        assert_eq!(ring.normalized_progress(), 1.0);
        assert_eq!(surface.arcs[1].sweep_angle_degrees, 360.0);
    }

    #[test]
    fn relabeling_substitutes_into_each_supplied_template() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        ring.set_label(Label::new("{} done", 20).unwrap());
        ring.set_value(30, &mut surface).unwrap();
        assert_eq!(surface.texts.last().unwrap(), "30 done");

        ring.set_label(Label::new("at {}", 20).unwrap());
        ring.set_value(60, &mut surface).unwrap();
        assert_eq!(surface.texts.last().unwrap(), "at 60");

        // Repainting again substitutes into the template, not prior output.
        ring.render(&mut surface);
        assert_eq!(surface.texts.last().unwrap(), "at 60");
    }

    #[test]
    fn empty_label_skips_the_blit() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        ring.set_label(Label::new("", 20).unwrap());
        ring.set_value(40, &mut surface).unwrap();

        assert!(surface.texts.is_empty());
        assert!(surface.blits.is_empty());
        assert_eq!(surface.arcs.len(), 2);
    }

    #[test]
    fn readout_is_centered_in_the_bounding_box() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        ring.set_position(PxPosition::new(Px(340), Px(100)));
        ring.set_value(50, &mut surface).unwrap();

        // "50%" at font size 40 measures 60x40 under the spy's metrics.
        let (position, size) = surface.blits[0];
        assert_eq!(size, PxSize::new(Px(60), Px(40)));
        assert_eq!(position, PxPosition::new(Px(340 + 100 - 30), Px(100 + 100 - 20)));
        assert_eq!(ring.label_size(), size);
    }

    #[test]
    fn repaint_discards_prior_commands() {
        let mut surface = SpySurface::default();
        let mut ring = ProgressRing::new();

        ring.set_value(10, &mut surface).unwrap();
        ring.set_value(20, &mut surface).unwrap();

        // Full repaint, not incremental: exactly one frame's worth remains.
        assert_eq!(surface.clears, 2);
        assert_eq!(surface.arcs.len(), 2);
        assert_eq!(surface.blits.len(), 1);
    }
}
