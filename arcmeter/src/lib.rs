//! A circular (ring-shaped) progress indicator widget.
//!
//! The widget owns its configuration (stroke thickness, cap style and
//! precision, colors, progress bounds, overall size and a text label),
//! validates every mutation, and converts the current progress value into arc
//! geometry plus a centered percentage readout. Drawing itself is delegated to
//! a host-provided [`RenderSurface`]; the widget only decides *what* to draw
//! and *when* a repaint is warranted.
//!
//! # Usage
//!
//! ```
//! use arcmeter::{ArcCommand, Color, ProgressRing, PxPosition, PxSize, RenderSurface};
//!
//! // A surface that discards everything; a real host would rasterize.
//! struct NullSurface;
//!
//! impl RenderSurface for NullSurface {
//!     type Texture = ();
//!
//!     fn clear(&mut self) {}
//!     fn stroke_arc(&mut self, _command: &ArcCommand) {}
//!     fn rasterize_text(&mut self, _text: &str, _font_size: i32) -> (PxSize, ()) {
//!         (PxSize::ZERO, ())
//!     }
//!     fn blit(&mut self, _texture: &(), _tint: Color, _position: PxPosition, _size: PxSize) {}
//! }
//!
//! let mut surface = NullSurface;
//! let mut ring = ProgressRing::new();
//! ring.set_thickness(15)?;
//! ring.set_cap_style("RouND")?;
//! // Committing a new value repaints synchronously.
//! ring.set_value(50, &mut surface)?;
//! assert_eq!(ring.normalized_progress(), 0.5);
//! # Ok::<(), arcmeter::RingError>(())
//! ```

pub mod cap;
pub mod color;
pub mod error;
pub mod label;
pub mod px;
pub mod renderer;
pub mod ring;

pub use cap::CapStyle;
pub use color::Color;
pub use error::RingError;
pub use label::Label;
pub use px::{Px, PxPosition, PxSize};
pub use renderer::{ArcCommand, RenderSurface};
pub use ring::{ProgressRing, RingDefaults};
