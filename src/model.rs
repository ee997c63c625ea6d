use serde::{Deserialize, Serialize};

use crate::{
    core::Canvas,
    error::{VelumError, VelumResult},
};

/// A fully-parsed presentation: canvas dimensions plus an ordered list of
/// slides.
///
/// The deck is read-only input to the engine. Producing it (markup
/// compilation, deserialization transport) is the job of upstream
/// components; the engine only consumes it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    /// Optional presentation title.
    #[serde(default)]
    pub title: Option<String>,
    /// Canvas every slide renders against; 1920x1080 when the deck names
    /// none.
    #[serde(default)]
    pub canvas: Canvas,
    /// Slides in presentation order.
    #[serde(default)]
    pub slides: Vec<Slide>,
}

impl Deck {
    /// Reject decks whose canvas cannot be rendered against.
    ///
    /// Schema-level validation (field presence, types) is upstream's
    /// responsibility; this only guards the dimensions every percentage
    /// coordinate resolves against.
    pub fn validate(&self) -> VelumResult<()> {
        if !(self.canvas.width > 0.0) || !(self.canvas.height > 0.0) {
            return Err(VelumError::validation(
                "canvas width/height must be finite and > 0",
            ));
        }
        Ok(())
    }
}

/// One slide: optional background treatment plus shape entries grouped by
/// category.
///
/// Input order within a category is preserved at draw time; order *across*
/// categories is fixed by the compositor.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Slide {
    /// Background color; unset leaves the canvas untouched.
    #[serde(default)]
    pub bg: Option<String>,
    /// First gradient stop color. A gradient is drawn only when both stops
    /// are set.
    #[serde(default)]
    pub grad_color1: Option<String>,
    /// Second gradient stop color.
    #[serde(default)]
    pub grad_color2: Option<String>,
    /// Default foreground for text and lists; `"black"` when unset.
    #[serde(default)]
    pub fg: Option<String>,
    #[serde(default)]
    pub images: Vec<ImageEntry>,
    #[serde(default)]
    pub rects: Vec<RectEntry>,
    #[serde(default)]
    pub ellipses: Vec<EllipseEntry>,
    #[serde(default)]
    pub curves: Vec<CurveEntry>,
    #[serde(default)]
    pub arcs: Vec<ArcEntry>,
    #[serde(default)]
    pub lines: Vec<LineEntry>,
    #[serde(default)]
    pub polygons: Vec<PolygonEntry>,
    #[serde(default)]
    pub texts: Vec<TextEntry>,
    #[serde(default)]
    pub lists: Vec<ListEntry>,
}

/// Filled rectangle centered at `(xp, yp)`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RectEntry {
    /// Center x as percent of canvas width.
    pub xp: f64,
    /// Center y as percent of canvas height (0 = bottom).
    pub yp: f64,
    /// Width as percent of canvas width.
    #[serde(default)]
    pub wp: f64,
    /// Height as percent of canvas height. Ignored when `hr` is set.
    #[serde(default)]
    pub hp: f64,
    /// Height as percent of the *computed width*; takes precedence over
    /// `hp` when non-zero.
    #[serde(default)]
    pub hr: f64,
    /// Fill color; mid-gray when unset.
    #[serde(default)]
    pub color: Option<String>,
    /// Opacity control: 0 = opaque, negative = transparent, positive = percent.
    #[serde(default)]
    pub opacity: f64,
}

/// Filled ellipse centered at `(xp, yp)`. Same sizing rules as [`RectEntry`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EllipseEntry {
    /// Center x as percent of canvas width.
    pub xp: f64,
    /// Center y as percent of canvas height (0 = bottom).
    pub yp: f64,
    /// Width as percent of canvas width.
    #[serde(default)]
    pub wp: f64,
    /// Height as percent of canvas height. Ignored when `hr` is set.
    #[serde(default)]
    pub hp: f64,
    /// Height as percent of the computed width; takes precedence over `hp`.
    #[serde(default)]
    pub hr: f64,
    /// Fill color; mid-gray when unset.
    #[serde(default)]
    pub color: Option<String>,
    /// Opacity control: 0 = opaque, negative = transparent, positive = percent.
    #[serde(default)]
    pub opacity: f64,
}

/// Stroked straight line between two percentage points.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LineEntry {
    pub xp1: f64,
    pub yp1: f64,
    pub xp2: f64,
    pub yp2: f64,
    /// Stroke width as percent of canvas width; 0 falls back to 2.0 units.
    #[serde(default)]
    pub sp: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub opacity: f64,
}

/// Stroked quadratic curve from `(xp1, yp1)` through control point
/// `(xp2, yp2)` to `(xp3, yp3)`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CurveEntry {
    pub xp1: f64,
    pub yp1: f64,
    pub xp2: f64,
    pub yp2: f64,
    pub xp3: f64,
    pub yp3: f64,
    /// Stroke width as percent of canvas width; 0 falls back to 2.0 units.
    #[serde(default)]
    pub sp: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub opacity: f64,
}

/// Stroked elliptical arc around `(xp, yp)` from `a1` to `a2` degrees,
/// measured clockwise.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ArcEntry {
    pub xp: f64,
    pub yp: f64,
    /// Horizontal diameter as percent of canvas *width*.
    #[serde(default)]
    pub wp: f64,
    /// Vertical diameter, also as percent of canvas *width*.
    #[serde(default)]
    pub hp: f64,
    /// Start angle in degrees.
    #[serde(default)]
    pub a1: f64,
    /// End angle in degrees.
    #[serde(default)]
    pub a2: f64,
    /// Stroke width as percent of canvas width; 0 falls back to 2.0 units.
    #[serde(default)]
    pub sp: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub opacity: f64,
}

/// Filled polygon from parallel percentage coordinate lists.
///
/// Lists must have equal length >= 3; malformed entries are skipped at draw
/// time (counted in [`crate::RenderStats`]), never an error.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PolygonEntry {
    /// X coordinates as percent of canvas width.
    #[serde(default)]
    pub xs: Vec<f64>,
    /// Y coordinates as percent of canvas height (0 = bottom).
    #[serde(default)]
    pub ys: Vec<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub opacity: f64,
}

/// Placed image, centered at `(xp, yp)`, with an optional caption below.
///
/// The `name` reference is opaque to the engine; the drawing surface
/// resolves it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ImageEntry {
    pub xp: f64,
    pub yp: f64,
    /// Natural width in pixels.
    pub width: f64,
    /// Natural height in pixels.
    pub height: f64,
    /// Uniform scale percent applied to both dimensions; 0 = unset.
    #[serde(default)]
    pub scale: f64,
    /// When set and the (scaled) width is below the canvas width, stretch to
    /// full canvas width preserving aspect. Never downscales.
    #[serde(default)]
    pub autoscale: bool,
    /// Opaque image reference handed to the surface.
    pub name: String,
    /// Caption text drawn below the image.
    #[serde(default)]
    pub caption: Option<String>,
    /// Caption font size as percent of canvas width; 0 defaults to 2%.
    #[serde(default)]
    pub sp: f64,
    /// Caption font token; `sans` when unset.
    #[serde(default)]
    pub font: Option<String>,
    /// Caption color; slide foreground when unset.
    #[serde(default)]
    pub color: Option<String>,
    /// Caption alignment token; centered when unset.
    #[serde(default)]
    pub align: Option<String>,
}

/// Rendering mode for a [`TextEntry`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextMode {
    /// Each embedded line drawn as-is.
    #[default]
    Plain,
    /// Word-wrapped paragraph.
    Block,
    /// Literal block in a monospace font over a background panel.
    Code,
}

/// A text run anchored at `(xp, yp)`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TextEntry {
    pub xp: f64,
    pub yp: f64,
    /// Font size as percent of canvas width.
    pub sp: f64,
    /// Wrap width as percent of canvas width (`block` mode only); 0 defaults
    /// to half the canvas.
    #[serde(default)]
    pub wp: f64,
    /// Rotation in degrees about the anchor; applied only when > 0.
    #[serde(default)]
    pub rotation: f64,
    /// Line-spacing multiplier; 0 defaults to 1.4.
    #[serde(default)]
    pub lp: f64,
    /// Literal text, possibly multi-line via embedded line breaks.
    #[serde(default)]
    pub text: String,
    /// Font token; `sans` when unset.
    #[serde(default)]
    pub font: Option<String>,
    /// Alignment token (`left`/`center`/`right` and synonyms).
    #[serde(default)]
    pub align: Option<String>,
    #[serde(default)]
    pub mode: TextMode,
    /// Text color; slide foreground when unset.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub opacity: f64,
}

/// Marker style for a [`ListEntry`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListKind {
    /// Items drawn without a prefix.
    #[default]
    Plain,
    /// A filled circular marker before each item.
    Bullet,
    /// `"N. "` prefix, 1-indexed.
    Number,
}

/// One list item with optional per-item style overrides.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListItem {
    pub text: String,
    /// Overrides the list color when set.
    #[serde(default)]
    pub color: Option<String>,
    /// Overrides the list font token when set.
    #[serde(default)]
    pub font: Option<String>,
    /// Per-item opacity control; 0 = opaque.
    #[serde(default)]
    pub opacity: f64,
}

/// A vertical list anchored at `(xp, yp)`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ListEntry {
    pub xp: f64,
    pub yp: f64,
    /// Font size as percent of canvas width.
    pub sp: f64,
    /// Rotation in degrees about the anchor; applied only when > 0.
    #[serde(default)]
    pub rotation: f64,
    /// Line-spacing multiplier; 0 defaults to 2.0.
    #[serde(default)]
    pub lp: f64,
    #[serde(default)]
    pub items: Vec<ListItem>,
    #[serde(default)]
    pub kind: ListKind,
    /// Font token; `sans` when unset.
    #[serde(default)]
    pub font: Option<String>,
    /// Alignment token; centering applies to every item uniformly.
    #[serde(default)]
    pub align: Option<String>,
    /// List color; slide foreground when unset.
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub opacity: f64,
}
