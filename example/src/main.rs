//! Animated demo of the progress ring against a logging render surface.
//!
//! The surface stands in for a real rasterizer: every drawing command the
//! widget issues is logged instead of painted. Three differently configured
//! rings advance one unit per tick and wrap around at their maximum, the same
//! choreography a host's animation driver would produce.

use std::{thread, time::Duration};

use arcmeter::{
    ArcCommand, Color, Label, ProgressRing, Px, PxPosition, PxSize, RenderSurface, RingError,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render surface that logs commands instead of rasterizing them.
#[derive(Default)]
struct TraceSurface {
    frame: u64,
}

impl RenderSurface for TraceSurface {
    /// The "texture" is just the shaped text itself.
    type Texture = String;

    fn clear(&mut self) {
        self.frame += 1;
        info!(frame = self.frame, "clear surface");
    }

    fn stroke_arc(&mut self, command: &ArcCommand) {
        info!(
            center = ?command.center,
            radius = command.radius,
            sweep = command.sweep_angle_degrees,
            width = command.stroke_width_px,
            cap = command.cap.as_str(),
            "stroke arc"
        );
    }

    fn rasterize_text(&mut self, text: &str, font_size: i32) -> (PxSize, String) {
        // Fixed-advance estimate; a real backend would shape the text.
        let width = text.len() as i32 * font_size / 2;
        (
            PxSize::new(Px(width), Px(font_size)),
            text.to_string(),
        )
    }

    fn blit(&mut self, texture: &String, _tint: Color, position: PxPosition, size: PxSize) {
        info!(text = %texture, ?position, ?size, "blit label");
    }
}

fn advance(ring: &mut ProgressRing, surface: &mut TraceSurface) -> Result<(), RingError> {
    if ring.value() < ring.max() {
        ring.set_value(ring.value() + 1, surface)
    } else {
        ring.set_value(ring.min(), surface)
    }
}

fn main() -> Result<(), RingError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut surface = TraceSurface::default();

    let mut narrow_band = ProgressRing::new();
    narrow_band.set_position(PxPosition::new(Px(0), Px(100)));
    narrow_band.set_thickness(15)?;
    narrow_band.set_cap_style("RouND")?;
    narrow_band.set_progress_color(Color::GREEN);
    narrow_band.set_background_color(Color::BLUE);
    narrow_band.set_cap_precision(3)?;
    narrow_band.set_min(100)?;
    narrow_band.set_max(150)?;
    narrow_band.set_widget_size(300)?;
    narrow_band.set_label(Label::new("I am a label\ninjected in the\nharness :)\n--={}=--", 40)?);

    let mut plain = ProgressRing::new();
    plain.set_position(PxPosition::new(Px(340), Px(100)));

    let mut compact = ProgressRing::new();
    compact.set_position(PxPosition::new(Px(580), Px(100)));
    compact.set_cap_style("SqUArE")?;
    compact.set_thickness(5)?;
    compact.set_progress_color((0.8, 0.8, 0.5, 1.0));
    compact.set_cap_precision(100)?;
    compact.set_max(10)?;
    compact.set_widget_size(100)?;
    compact.set_label(Label::new("Loading...\n{}%", 10)?.with_color([1.0, 1.0, 0.5, 1.0]));

    let mut rings = [narrow_band, plain, compact];

    for _ in 0..120 {
        for ring in &mut rings {
            advance(ring, &mut surface)?;
        }
        thread::sleep(Duration::from_millis(100));
    }

    Ok(())
}
