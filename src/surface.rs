//! The abstract drawing surface the engine emits primitives onto.
//!
//! A [`Surface`] receives absolute coordinates and fully-resolved styles;
//! the engine performs every guard (polygon point counts, stroke-width
//! fallbacks) itself, so implementations may assume well-formed calls. How
//! calls become bytes (SVG, PDF, raster) is entirely the implementation's
//! concern.

use crate::{
    color::{FillStyle, StrokeStyle},
    error::VelumResult,
};

/// Horizontal text anchoring relative to the draw position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Text starts at the position (left-aligned).
    #[default]
    Start,
    /// Text is centered on the position.
    Middle,
    /// Text ends at the position (right-aligned).
    End,
}

/// Fully-resolved text attributes for a single [`Surface::draw_text`] call.
#[derive(Clone, Debug, PartialEq)]
pub struct TextAttrs {
    /// Resolved fill color.
    pub fill: String,
    /// Fill opacity in `[0, 1]`; `None` omits the attribute entirely
    /// (single-line text is drawn opaque).
    pub opacity: Option<f64>,
    /// Concrete font family (already looked up through the catalog).
    pub font_family: String,
    /// Font size in absolute canvas units.
    pub size: f64,
    pub anchor: TextAnchor,
}

/// One stop of a two-stop vertical gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Offset along the gradient axis, 0-100.
    pub offset: f64,
    /// Resolved stop color.
    pub color: String,
    /// Stop opacity in `[0, 1]`.
    pub opacity: f64,
}

/// The fixed vocabulary of drawing calls the engine emits.
///
/// Every method is fallible so encoder back-ends can propagate their own
/// I/O or encoding failures; the engine never swallows surface errors.
pub trait Surface {
    /// Open a viewport at the slide's canvas dimensions. Always the first
    /// call of a slide render.
    fn begin_viewport(&mut self, width: f64, height: f64) -> VelumResult<()>;
    /// Close the viewport. Always the last call of a slide render.
    fn end_viewport(&mut self) -> VelumResult<()>;

    /// Fill an axis-aligned rectangle; `(x, y)` is the top-left corner.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &FillStyle) -> VelumResult<()>;
    /// Fill an ellipse centered at `(cx, cy)` with radii `(rx, ry)`.
    fn fill_ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        style: &FillStyle,
    ) -> VelumResult<()>;
    /// Fill a polygon given parallel absolute coordinate lists.
    fn fill_polygon(&mut self, xs: &[f64], ys: &[f64], style: &FillStyle) -> VelumResult<()>;

    /// Stroke a straight line segment.
    fn stroke_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: &StrokeStyle,
    ) -> VelumResult<()>;
    /// Stroke an elliptical arc from `(sx, sy)` to `(ex, ey)` with radii
    /// `(rx, ry)`; `large_arc` selects the major sweep. Arcs are never
    /// filled.
    #[allow(clippy::too_many_arguments)]
    fn stroke_arc(
        &mut self,
        sx: f64,
        sy: f64,
        rx: f64,
        ry: f64,
        large_arc: bool,
        ex: f64,
        ey: f64,
        style: &StrokeStyle,
    ) -> VelumResult<()>;
    /// Stroke a quadratic curve from `(x1, y1)` to `(x2, y2)` with control
    /// point `(cx, cy)`.
    #[allow(clippy::too_many_arguments)]
    fn stroke_quad_curve(
        &mut self,
        x1: f64,
        y1: f64,
        cx: f64,
        cy: f64,
        x2: f64,
        y2: f64,
        style: &StrokeStyle,
    ) -> VelumResult<()>;

    /// Place an image by opaque reference; `(x, y)` is the top-left corner.
    fn place_image(&mut self, x: f64, y: f64, w: f64, h: f64, reference: &str) -> VelumResult<()>;

    /// Draw one run of text at a baseline position.
    fn draw_text(&mut self, x: f64, y: f64, text: &str, attrs: &TextAttrs) -> VelumResult<()>;

    /// Open a group rotated by `degrees` about `(cx, cy)`. Subsequent calls
    /// keep using absolute coordinates; the transform is the surface's
    /// concern.
    fn begin_rotation(&mut self, cx: f64, cy: f64, degrees: f64) -> VelumResult<()>;
    /// Close the innermost group opened by [`Surface::begin_rotation`].
    fn end_group(&mut self) -> VelumResult<()>;

    /// Define a vertical (top-to-bottom) linear gradient for later fills.
    fn define_linear_gradient(&mut self, id: &str, stops: &[GradientStop]) -> VelumResult<()>;
    /// Fill the full viewport with a previously defined gradient.
    fn fill_with_gradient(&mut self, id: &str) -> VelumResult<()>;
}

/// One captured [`Surface`] call.
///
/// Field-for-field mirror of the trait vocabulary, used by
/// [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    BeginViewport {
        width: f64,
        height: f64,
    },
    EndViewport,
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        style: FillStyle,
    },
    FillEllipse {
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        style: FillStyle,
    },
    FillPolygon {
        xs: Vec<f64>,
        ys: Vec<f64>,
        style: FillStyle,
    },
    StrokeLine {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: StrokeStyle,
    },
    StrokeArc {
        sx: f64,
        sy: f64,
        rx: f64,
        ry: f64,
        large_arc: bool,
        ex: f64,
        ey: f64,
        style: StrokeStyle,
    },
    StrokeQuadCurve {
        x1: f64,
        y1: f64,
        cx: f64,
        cy: f64,
        x2: f64,
        y2: f64,
        style: StrokeStyle,
    },
    PlaceImage {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        reference: String,
    },
    DrawText {
        x: f64,
        y: f64,
        text: String,
        attrs: TextAttrs,
    },
    BeginRotation {
        cx: f64,
        cy: f64,
        degrees: f64,
    },
    EndGroup,
    DefineLinearGradient {
        id: String,
        stops: Vec<GradientStop>,
    },
    FillWithGradient {
        id: String,
    },
}

/// An in-memory surface that records every call instead of encoding it.
///
/// Useful for snapshot-style assertions on the emitted call sequence; the
/// crate's own integration tests are written against it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls captured so far, in emission order.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Consume the surface, returning the captured calls.
    pub fn into_calls(self) -> Vec<DrawCall> {
        self.calls
    }
}

impl Surface for RecordingSurface {
    fn begin_viewport(&mut self, width: f64, height: f64) -> VelumResult<()> {
        self.calls.push(DrawCall::BeginViewport { width, height });
        Ok(())
    }

    fn end_viewport(&mut self) -> VelumResult<()> {
        self.calls.push(DrawCall::EndViewport);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, style: &FillStyle) -> VelumResult<()> {
        self.calls.push(DrawCall::FillRect {
            x,
            y,
            width: w,
            height: h,
            style: style.clone(),
        });
        Ok(())
    }

    fn fill_ellipse(
        &mut self,
        cx: f64,
        cy: f64,
        rx: f64,
        ry: f64,
        style: &FillStyle,
    ) -> VelumResult<()> {
        self.calls.push(DrawCall::FillEllipse {
            cx,
            cy,
            rx,
            ry,
            style: style.clone(),
        });
        Ok(())
    }

    fn fill_polygon(&mut self, xs: &[f64], ys: &[f64], style: &FillStyle) -> VelumResult<()> {
        self.calls.push(DrawCall::FillPolygon {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            style: style.clone(),
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: &StrokeStyle,
    ) -> VelumResult<()> {
        self.calls.push(DrawCall::StrokeLine {
            x1,
            y1,
            x2,
            y2,
            style: style.clone(),
        });
        Ok(())
    }

    fn stroke_arc(
        &mut self,
        sx: f64,
        sy: f64,
        rx: f64,
        ry: f64,
        large_arc: bool,
        ex: f64,
        ey: f64,
        style: &StrokeStyle,
    ) -> VelumResult<()> {
        self.calls.push(DrawCall::StrokeArc {
            sx,
            sy,
            rx,
            ry,
            large_arc,
            ex,
            ey,
            style: style.clone(),
        });
        Ok(())
    }

    fn stroke_quad_curve(
        &mut self,
        x1: f64,
        y1: f64,
        cx: f64,
        cy: f64,
        x2: f64,
        y2: f64,
        style: &StrokeStyle,
    ) -> VelumResult<()> {
        self.calls.push(DrawCall::StrokeQuadCurve {
            x1,
            y1,
            cx,
            cy,
            x2,
            y2,
            style: style.clone(),
        });
        Ok(())
    }

    fn place_image(&mut self, x: f64, y: f64, w: f64, h: f64, reference: &str) -> VelumResult<()> {
        self.calls.push(DrawCall::PlaceImage {
            x,
            y,
            width: w,
            height: h,
            reference: reference.to_owned(),
        });
        Ok(())
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, attrs: &TextAttrs) -> VelumResult<()> {
        self.calls.push(DrawCall::DrawText {
            x,
            y,
            text: text.to_owned(),
            attrs: attrs.clone(),
        });
        Ok(())
    }

    fn begin_rotation(&mut self, cx: f64, cy: f64, degrees: f64) -> VelumResult<()> {
        self.calls.push(DrawCall::BeginRotation { cx, cy, degrees });
        Ok(())
    }

    fn end_group(&mut self) -> VelumResult<()> {
        self.calls.push(DrawCall::EndGroup);
        Ok(())
    }

    fn define_linear_gradient(&mut self, id: &str, stops: &[GradientStop]) -> VelumResult<()> {
        self.calls.push(DrawCall::DefineLinearGradient {
            id: id.to_owned(),
            stops: stops.to_vec(),
        });
        Ok(())
    }

    fn fill_with_gradient(&mut self, id: &str) -> VelumResult<()> {
        self.calls
            .push(DrawCall::FillWithGradient { id: id.to_owned() });
        Ok(())
    }
}
