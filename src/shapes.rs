//! Primitive drawer: one shape entry in, one absolute-coordinate surface
//! call out.

use crate::{
    color::{DEFAULT_SHAPE_COLOR, FillStyle, StrokeStyle, resolve_color},
    core::{Canvas, pct, polar},
    error::VelumResult,
    fonts::FontCatalog,
    model::{ArcEntry, CurveEntry, EllipseEntry, ImageEntry, LineEntry, PolygonEntry, RectEntry},
    surface::Surface,
    text,
};

/// Stroke width used when the computed width is exactly 0 ("unspecified",
/// as opposed to explicitly thin).
const DEFAULT_STROKE_WIDTH: f64 = 2.0;

/// Caption font size when the entry's `sp` is unset, as percent of canvas
/// width.
const DEFAULT_CAPTION_PCT: f64 = 2.0;

/// Rect/ellipse height: `hp` percent of canvas height, unless the
/// height-ratio override is set, which wins and resolves against the
/// computed width instead.
fn box_dims(canvas: Canvas, wp: f64, hp: f64, hr: f64) -> (f64, f64) {
    let w = pct(wp, canvas.width);
    let h = if hr == 0.0 {
        pct(hp, canvas.height)
    } else {
        pct(hr, w)
    };
    (w, h)
}

fn shape_fill(color: Option<&str>, opacity: f64) -> FillStyle {
    FillStyle::resolve(color.unwrap_or(DEFAULT_SHAPE_COLOR), opacity)
}

fn shape_stroke(width: f64, color: Option<&str>, opacity: f64) -> StrokeStyle {
    let width = if width == 0.0 {
        DEFAULT_STROKE_WIDTH
    } else {
        width
    };
    StrokeStyle::resolve(width, color.unwrap_or(DEFAULT_SHAPE_COLOR), opacity)
}

pub(crate) fn draw_rect(
    surface: &mut dyn Surface,
    canvas: Canvas,
    rect: &RectEntry,
) -> VelumResult<()> {
    let (x, y, _) = canvas.dimen(rect.xp, rect.yp, 0.0);
    let (w, h) = box_dims(canvas, rect.wp, rect.hp, rect.hr);
    let style = shape_fill(rect.color.as_deref(), rect.opacity);
    surface.fill_rect(x - w / 2.0, y - h / 2.0, w, h, &style)
}

pub(crate) fn draw_ellipse(
    surface: &mut dyn Surface,
    canvas: Canvas,
    ellipse: &EllipseEntry,
) -> VelumResult<()> {
    let (x, y, _) = canvas.dimen(ellipse.xp, ellipse.yp, 0.0);
    let (w, h) = box_dims(canvas, ellipse.wp, ellipse.hp, ellipse.hr);
    let style = shape_fill(ellipse.color.as_deref(), ellipse.opacity);
    surface.fill_ellipse(x, y, w / 2.0, h / 2.0, &style)
}

pub(crate) fn draw_line(
    surface: &mut dyn Surface,
    canvas: Canvas,
    line: &LineEntry,
) -> VelumResult<()> {
    let (x1, y1, sw) = canvas.dimen(line.xp1, line.yp1, line.sp);
    let (x2, y2, _) = canvas.dimen(line.xp2, line.yp2, 0.0);
    let style = shape_stroke(sw, line.color.as_deref(), line.opacity);
    surface.stroke_line(x1, y1, x2, y2, &style)
}

pub(crate) fn draw_curve(
    surface: &mut dyn Surface,
    canvas: Canvas,
    curve: &CurveEntry,
) -> VelumResult<()> {
    let (x1, y1, sw) = canvas.dimen(curve.xp1, curve.yp1, curve.sp);
    let (cx, cy, _) = canvas.dimen(curve.xp2, curve.yp2, 0.0);
    let (x2, y2, _) = canvas.dimen(curve.xp3, curve.yp3, 0.0);
    let style = shape_stroke(sw, curve.color.as_deref(), curve.opacity);
    surface.stroke_quad_curve(x1, y1, cx, cy, x2, y2, &style)
}

/// Arc endpoints come from polar projection at *negated* angles: model
/// angles run clockwise while `polar` is counter-clockwise.
pub(crate) fn draw_arc(
    surface: &mut dyn Surface,
    canvas: Canvas,
    arc: &ArcEntry,
) -> VelumResult<()> {
    let (x, y, sw) = canvas.dimen(arc.xp, arc.yp, arc.sp);
    // Both diameters resolve against canvas width.
    let rx = pct(arc.wp, canvas.width) / 2.0;
    let ry = pct(arc.hp, canvas.width) / 2.0;
    let start = polar(x, y, rx, -arc.a1);
    let end = polar(x, y, ry, -arc.a2);
    let large_arc = arc.a2 - arc.a1 >= 180.0;
    let style = shape_stroke(sw, arc.color.as_deref(), arc.opacity);
    surface.stroke_arc(start.x, start.y, rx, ry, large_arc, end.x, end.y, &style)
}

/// Returns `false` when the entry was skipped (mismatched or too-short
/// coordinate lists); degraded output beats an aborted slide here.
pub(crate) fn draw_polygon(
    surface: &mut dyn Surface,
    canvas: Canvas,
    poly: &PolygonEntry,
) -> VelumResult<bool> {
    if poly.xs.len() != poly.ys.len() || poly.xs.len() < 3 {
        return Ok(false);
    }
    let xs: Vec<f64> = poly.xs.iter().map(|&x| pct(x, canvas.width)).collect();
    let ys: Vec<f64> = poly
        .ys
        .iter()
        .map(|&y| pct(100.0 - y, canvas.height))
        .collect();
    let style = shape_fill(poly.color.as_deref(), poly.opacity);
    surface.fill_polygon(&xs, &ys, &style)?;
    Ok(true)
}

pub(crate) fn draw_image(
    surface: &mut dyn Surface,
    canvas: Canvas,
    image: &ImageEntry,
    fg: &str,
    fonts: &FontCatalog,
) -> VelumResult<()> {
    let (x, y, _) = canvas.dimen(image.xp, image.yp, 0.0);
    let mut iw = image.width;
    let mut ih = image.height;

    if image.scale > 0.0 {
        iw *= image.scale / 100.0;
        ih *= image.scale / 100.0;
    }
    // Upscale-only: stretch to full canvas width, preserving aspect.
    if image.autoscale && iw < canvas.width {
        ih = (canvas.width / iw) * ih;
        iw = canvas.width;
    }

    let midx = iw / 2.0;
    let midy = ih / 2.0;
    surface.place_image(x - midx, y - midy, iw, ih, &image.name)?;

    if let Some(caption) = image.caption.as_deref().filter(|c| !c.is_empty()) {
        let capsize = if image.sp == 0.0 {
            pct(DEFAULT_CAPTION_PCT, canvas.width)
        } else {
            pct(image.sp, canvas.width)
        };
        let font = image.font.as_deref().unwrap_or("sans");
        let color = image.color.as_deref().unwrap_or(fg);
        let align = image.align.as_deref().unwrap_or("center");
        text::show_text(
            surface,
            x,
            y + midy + capsize * 2.0,
            caption,
            capsize,
            font,
            color,
            align,
            fonts,
        )?;
    }
    Ok(())
}

/// List-item marker: a small filled circle up-and-left of the baseline.
/// Radius is a quarter of the font size, offsets a fixed ratio of it.
pub(crate) fn draw_bullet(
    surface: &mut dyn Surface,
    x: f64,
    y: f64,
    size: f64,
    color: &str,
    opacity: f64,
) -> VelumResult<()> {
    let radius = size / 4.0;
    let style = FillStyle {
        color: resolve_color(color),
        opacity,
    };
    surface.fill_ellipse(x - size, y - size / 3.0, radius, radius, &style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};

    const CANVAS: Canvas = Canvas {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn height_ratio_overrides_hp() {
        let (w, h) = box_dims(CANVAS, 20.0, 10.0, 0.0);
        assert_eq!((w, h), (200.0, 80.0));

        // hr resolves against the computed width, not the canvas height.
        let (w, h) = box_dims(CANVAS, 20.0, 10.0, 50.0);
        assert_eq!((w, h), (200.0, 100.0));
    }

    #[test]
    fn zero_stroke_width_falls_back() {
        assert_eq!(shape_stroke(0.0, None, 0.0).width, 2.0);
        assert_eq!(shape_stroke(0.5, None, 0.0).width, 0.5);
    }

    #[test]
    fn polygon_guard_skips_malformed_entries() {
        let mut surface = RecordingSurface::new();
        let short = PolygonEntry {
            xs: vec![0.0, 10.0],
            ys: vec![0.0, 10.0],
            ..PolygonEntry::default()
        };
        assert!(!draw_polygon(&mut surface, CANVAS, &short).unwrap());

        let mismatched = PolygonEntry {
            xs: vec![0.0, 10.0, 20.0],
            ys: vec![0.0, 10.0],
            ..PolygonEntry::default()
        };
        assert!(!draw_polygon(&mut surface, CANVAS, &mismatched).unwrap());
        assert!(surface.calls().is_empty());
    }

    #[test]
    fn polygon_coordinates_flip_vertically() {
        let mut surface = RecordingSurface::new();
        let poly = PolygonEntry {
            xs: vec![0.0, 50.0, 100.0],
            ys: vec![0.0, 100.0, 0.0],
            ..PolygonEntry::default()
        };
        assert!(draw_polygon(&mut surface, CANVAS, &poly).unwrap());
        match &surface.calls()[0] {
            DrawCall::FillPolygon { xs, ys, .. } => {
                assert_eq!(xs, &[0.0, 500.0, 1000.0]);
                assert_eq!(ys, &[800.0, 0.0, 800.0]);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[test]
    fn bullet_geometry_tracks_font_size() {
        let mut surface = RecordingSurface::new();
        draw_bullet(&mut surface, 100.0, 60.0, 12.0, "black", 1.0).unwrap();
        match &surface.calls()[0] {
            DrawCall::FillEllipse { cx, cy, rx, ry, .. } => {
                assert_eq!(*cx, 88.0);
                assert_eq!(*cy, 56.0);
                assert_eq!(*rx, 3.0);
                assert_eq!(*ry, 3.0);
            }
            other => panic!("unexpected call {other:?}"),
        }
    }
}
