//! Slide compositor: orchestrates one slide render from background to the
//! final shape category, in a fixed layer order.

use rayon::prelude::*;

use crate::{
    color::FillStyle,
    error::{VelumError, VelumResult},
    fonts::FontCatalog,
    model::{Deck, Slide},
    shapes,
    surface::{GradientStop, Surface},
    text,
};

/// Gradient handle shared between the define and fill calls of one slide.
const GRADIENT_ID: &str = "slidegrad";

/// Foreground used for text and lists when the slide leaves `fg` unset.
const DEFAULT_FOREGROUND: &str = "black";

/// Tunable rendering knobs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOpts {
    /// Proportional-width factor for the block-text wrap estimate. The
    /// default is calibrated for common sans families; recalibrate per
    /// font family rather than patching layout logic.
    pub wrap_factor: f64,
}

impl Default for RenderOpts {
    fn default() -> Self {
        Self { wrap_factor: 0.65 }
    }
}

/// Per-slide diagnostics for behavior the engine absorbs instead of
/// reporting as errors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Polygon entries skipped for mismatched or too-short coordinate
    /// lists.
    pub polygons_skipped: u32,
}

/// An immutable rendering context: font catalog plus options.
///
/// Sessions are cheap to build and safe to share across threads; rendering
/// holds no mutable state outside the caller's surface, so N slides can
/// render concurrently onto N surfaces from one session.
#[derive(Clone, Debug, Default)]
pub struct RenderSession {
    fonts: FontCatalog,
    opts: RenderOpts,
}

impl RenderSession {
    /// Session with default options.
    pub fn new(fonts: FontCatalog) -> Self {
        Self::with_opts(fonts, RenderOpts::default())
    }

    /// Session with explicit options.
    pub fn with_opts(fonts: FontCatalog, opts: RenderOpts) -> Self {
        Self { fonts, opts }
    }

    /// The session's font catalog.
    pub fn fonts(&self) -> &FontCatalog {
        &self.fonts
    }

    /// Render one slide of `deck` onto `surface`.
    ///
    /// The only data error reported is an out-of-range `index`; everything
    /// else degrades gracefully (see [`RenderStats`]). Surface failures
    /// propagate unchanged.
    #[tracing::instrument(skip(self, deck, surface), fields(slide = index))]
    pub fn render_slide(
        &self,
        deck: &Deck,
        index: usize,
        surface: &mut dyn Surface,
    ) -> VelumResult<RenderStats> {
        let Some(slide) = deck.slides.get(index) else {
            return Err(VelumError::slide_index(index, deck.slides.len()));
        };
        self.compose(deck, slide, surface)
    }

    /// Render every slide concurrently, one independent surface per slide.
    ///
    /// `make_surface` is invoked once per slide; results come back in slide
    /// order. There is no cross-slide ordering requirement, so this is a
    /// plain parallel map.
    pub fn render_deck<S, F>(&self, deck: &Deck, make_surface: F) -> VelumResult<Vec<(S, RenderStats)>>
    where
        S: Surface + Send,
        F: Fn() -> S + Sync,
    {
        (0..deck.slides.len())
            .into_par_iter()
            .map(|index| {
                let mut surface = make_surface();
                let stats = self.render_slide(deck, index, &mut surface)?;
                Ok((surface, stats))
            })
            .collect()
    }

    /// One pass over a slide: viewport, background layers, then the nine
    /// shape categories in fixed order. Entries within a category keep
    /// their input order; there is no z-index.
    fn compose(
        &self,
        deck: &Deck,
        slide: &Slide,
        surface: &mut dyn Surface,
    ) -> VelumResult<RenderStats> {
        let canvas = deck.canvas;
        let mut stats = RenderStats::default();

        surface.begin_viewport(canvas.width, canvas.height)?;

        if let Some(bg) = &slide.bg {
            let style = FillStyle::resolve(bg, 0.0);
            surface.fill_rect(0.0, 0.0, canvas.width, canvas.height, &style)?;
        }
        // The gradient layers above the flat background and needs both
        // stops; a single stop color is ignored.
        if let (Some(c1), Some(c2)) = (&slide.grad_color1, &slide.grad_color2) {
            let stops = [
                GradientStop {
                    offset: 0.0,
                    color: crate::color::resolve_color(c1),
                    opacity: 1.0,
                },
                GradientStop {
                    offset: 100.0,
                    color: crate::color::resolve_color(c2),
                    opacity: 1.0,
                },
            ];
            surface.define_linear_gradient(GRADIENT_ID, &stops)?;
            surface.fill_with_gradient(GRADIENT_ID)?;
        }

        let fg = slide.fg.as_deref().unwrap_or(DEFAULT_FOREGROUND);

        for image in &slide.images {
            shapes::draw_image(surface, canvas, image, fg, &self.fonts)?;
        }
        for rect in &slide.rects {
            shapes::draw_rect(surface, canvas, rect)?;
        }
        for ellipse in &slide.ellipses {
            shapes::draw_ellipse(surface, canvas, ellipse)?;
        }
        for curve in &slide.curves {
            shapes::draw_curve(surface, canvas, curve)?;
        }
        for arc in &slide.arcs {
            shapes::draw_arc(surface, canvas, arc)?;
        }
        for line in &slide.lines {
            shapes::draw_line(surface, canvas, line)?;
        }
        for polygon in &slide.polygons {
            if !shapes::draw_polygon(surface, canvas, polygon)? {
                stats.polygons_skipped += 1;
                tracing::warn!(
                    xs = polygon.xs.len(),
                    ys = polygon.ys.len(),
                    "skipping malformed polygon"
                );
            }
        }
        for entry in &slide.texts {
            text::draw_text_entry(surface, canvas, entry, fg, &self.fonts, self.opts.wrap_factor)?;
        }
        for list in &slide.lists {
            text::draw_list(surface, canvas, list, fg, &self.fonts)?;
        }

        surface.end_viewport()?;
        Ok(stats)
    }
}
