//! The narrow seam between the widget and its host's rasterizer.
//!
//! The widget never touches pixels. It emits [`ArcCommand`]s and label blits
//! against a [`RenderSurface`], which a host backs with whatever vector
//! rasterizer and font stack it has. Arc stroking, cap tessellation and text
//! shaping all live on the far side of this trait.

use glam::Vec2;

use crate::{
    cap::CapStyle,
    color::Color,
    px::{PxPosition, PxSize},
};

/// Draw command for a circular arc stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCommand {
    /// Arc center in physical pixels.
    pub center: Vec2,
    /// Arc radius in physical pixels, measured to the stroke centerline.
    pub radius: f32,
    /// Start angle in degrees, where 0° is at 3 o'clock.
    pub start_angle_degrees: f32,
    /// Sweep angle in degrees, in the clockwise direction.
    pub sweep_angle_degrees: f32,
    /// Stroke width in physical pixels.
    pub stroke_width_px: f32,
    /// Stroke cap applied to arc ends.
    pub cap: CapStyle,
    /// Tessellation density for the cap shape.
    pub cap_precision: i32,
    /// Stroke color.
    pub color: Color,
}

impl ArcCommand {
    /// A full 360° circle stroke. Caps are invisible on a closed stroke, so
    /// the renderer's defaults apply.
    pub fn full_circle(center: Vec2, radius: f32, stroke_width_px: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            start_angle_degrees: 0.0,
            sweep_angle_degrees: 360.0,
            stroke_width_px,
            cap: CapStyle::Round,
            cap_precision: 10,
            color,
        }
    }
}

/// Host-provided drawing collaborator.
///
/// One widget exclusively borrows its surface for the duration of a repaint;
/// all calls happen synchronously on the thread that owns the rendering
/// context.
pub trait RenderSurface {
    /// Handle to rasterized text, owned by the surface's backend.
    type Texture;

    /// Discards every drawing command previously issued to this surface.
    fn clear(&mut self);

    /// Strokes a circular arc.
    fn stroke_arc(&mut self, command: &ArcCommand);

    /// Shapes and rasterizes `text` at `font_size`, returning the measured
    /// pixel size alongside the texture handle.
    fn rasterize_text(&mut self, text: &str, font_size: i32) -> (PxSize, Self::Texture);

    /// Draws a previously rasterized texture at `position`, scaled to `size`
    /// and modulated by `tint`.
    fn blit(&mut self, texture: &Self::Texture, tint: Color, position: PxPosition, size: PxSize);
}
