//! Velum is a slide layout and rendering transform engine.
//!
//! It takes an already-parsed [`Deck`] — slides whose shapes, text runs and
//! lists are positioned in percentage-of-canvas coordinates — and replays
//! each slide as a sequence of absolute-coordinate vector primitives on an
//! abstract [`Surface`]. Colors, opacities and text layout are fully
//! resolved by the engine; encoding the primitives into bytes (SVG, PDF,
//! raster) is the surface implementation's job.
//!
//! The typical flow:
//!
//! - Build a [`FontCatalog`] (the only shared configuration) and a
//!   [`RenderSession`] around it
//! - Call [`RenderSession::render_slide`] per slide, or
//!   [`RenderSession::render_deck`] to render all slides in parallel onto
//!   independent surfaces
//!
//! Rendering is stateless and deterministic: the same deck, canvas and
//! session always emit the same call sequence.
#![forbid(unsafe_code)]

pub mod color;
pub mod compositor;
pub mod core;
pub mod error;
pub mod fonts;
pub mod model;
mod shapes;
pub mod surface;
mod text;

pub use crate::color::{FillStyle, StrokeStyle};
pub use crate::compositor::{RenderOpts, RenderSession, RenderStats};
pub use crate::core::{Canvas, Point};
pub use crate::error::{VelumError, VelumResult};
pub use crate::fonts::FontCatalog;
pub use crate::model::{
    ArcEntry, CurveEntry, Deck, EllipseEntry, ImageEntry, LineEntry, ListEntry, ListItem,
    ListKind, PolygonEntry, RectEntry, Slide, TextEntry, TextMode,
};
pub use crate::surface::{DrawCall, GradientStop, RecordingSurface, Surface, TextAnchor, TextAttrs};
