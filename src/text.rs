//! Text and list layout.
//!
//! Layout is deliberately approximate: line width is estimated from the
//! font size and character count rather than glyph metrics, so block-mode
//! breaks are coarse. Rotation never changes layout math; it only wraps the
//! emitted calls in a surface-level transform group.

use crate::{
    color::{FillStyle, resolve_color, set_opacity},
    core::{Canvas, pct},
    error::VelumResult,
    fonts::FontCatalog,
    model::{ListEntry, ListKind, TextEntry, TextMode},
    shapes,
    surface::{Surface, TextAnchor, TextAttrs},
};

/// Line-spacing multiplier for text runs that leave `lp` unset.
const DEFAULT_LINE_SPACING: f64 = 1.4;
/// Line-spacing multiplier for lists that leave `lp` unset.
const DEFAULT_LIST_SPACING: f64 = 2.0;
/// Background panel behind `code` blocks.
const CODE_PANEL_COLOR: &str = "rgb(240,240,240)";
/// Fixed inset between a code panel's right edge and the canvas edge.
const CODE_RIGHT_INSET: f64 = 20.0;
/// Word that forces a line break inside block text: the literal
/// two-character backslash-n sequence, distinct from an embedded newline.
const BREAK_MARKER: &str = r"\n";

/// Map an alignment token onto a text anchor; unknown tokens anchor at the
/// start.
pub(crate) fn text_anchor(token: &str) -> TextAnchor {
    match token {
        "center" | "middle" | "mid" | "c" => TextAnchor::Middle,
        "left" | "start" | "l" => TextAnchor::Start,
        "right" | "end" | "e" => TextAnchor::End,
        _ => TextAnchor::Start,
    }
}

/// Place one fully attributed line of text. Single-line text carries no
/// opacity attribute.
#[allow(clippy::too_many_arguments)]
pub(crate) fn show_text(
    surface: &mut dyn Surface,
    x: f64,
    y: f64,
    text: &str,
    size: f64,
    font_token: &str,
    color: &str,
    align: &str,
    fonts: &FontCatalog,
) -> VelumResult<()> {
    let attrs = TextAttrs {
        fill: resolve_color(color),
        opacity: None,
        font_family: fonts.lookup(font_token).to_owned(),
        size,
        anchor: text_anchor(align),
    };
    surface.draw_text(x, y, text, &attrs)
}

/// Lay out one text run according to its rendering mode.
pub(crate) fn draw_text_entry(
    surface: &mut dyn Surface,
    canvas: Canvas,
    entry: &TextEntry,
    fg: &str,
    fonts: &FontCatalog,
    wrap_factor: f64,
) -> VelumResult<()> {
    let mut font = entry.font.as_deref().unwrap_or("sans");
    let color = entry.color.as_deref().unwrap_or(fg);
    let lp = if entry.lp == 0.0 {
        DEFAULT_LINE_SPACING
    } else {
        entry.lp
    };
    let (x, y, fs) = canvas.dimen(entry.xp, entry.yp, entry.sp);
    let ls = lp * fs;

    if entry.rotation > 0.0 {
        surface.begin_rotation(x, y, entry.rotation)?;
    }

    match entry.mode {
        TextMode::Block => {
            let wrap_width = if entry.wp == 0.0 {
                canvas.width / 2.0
            } else {
                pct(entry.wp, canvas.width)
            };
            let attrs = TextAttrs {
                fill: resolve_color(color),
                opacity: Some(set_opacity(entry.opacity)),
                font_family: fonts.lookup(font).to_owned(),
                size: fs,
                anchor: TextAnchor::Start,
            };
            text_wrap(surface, x, y, wrap_width, ls, &entry.text, &attrs, wrap_factor)?;
        }
        mode => {
            if mode == TextMode::Code {
                font = "mono";
                let line_count = entry.text.split('\n').count();
                let panel = FillStyle::resolve(CODE_PANEL_COLOR, entry.opacity);
                surface.fill_rect(
                    x - fs,
                    y - fs,
                    canvas.width - x - CODE_RIGHT_INSET,
                    line_count as f64 * ls,
                    &panel,
                )?;
            }
            let align = entry.align.as_deref().unwrap_or("");
            let mut ty = y;
            for line in entry.text.split('\n') {
                show_text(surface, x, ty, line, fs, font, color, align, fonts)?;
                ty += ls;
            }
        }
    }

    if entry.rotation > 0.0 {
        surface.end_group()?;
    }
    Ok(())
}

/// Word-wrap text into lines no wider (approximately) than `wrap_width`.
///
/// Words accumulate into a buffer; once the estimated width
/// (`size x byte-count x wrap_factor`) exceeds `wrap_width + x` the buffer
/// is flushed. The estimate runs a word behind, so lines can overflow by up
/// to one word; breaks are approximate, never glyph-exact.
#[allow(clippy::too_many_arguments)]
fn text_wrap(
    surface: &mut dyn Surface,
    x: f64,
    y: f64,
    wrap_width: f64,
    leading: f64,
    text: &str,
    attrs: &TextAttrs,
    wrap_factor: f64,
) -> VelumResult<()> {
    let mut yp = y;
    let mut line = String::new();
    for word in text
        .split(|c: char| c == ' ' || c == '\n' || c == '\t')
        .filter(|w| !w.is_empty())
    {
        if word == BREAK_MARKER {
            yp += leading;
            continue;
        }
        line.push_str(word);
        line.push(' ');
        if attrs.size * line.len() as f64 * wrap_factor > wrap_width + x {
            surface.draw_text(x, yp, &line, attrs)?;
            yp += leading;
            line.clear();
        }
    }
    if !line.is_empty() {
        surface.draw_text(x, yp, &line, attrs)?;
    }
    Ok(())
}

/// Lay out a list: one item per line, optional numbering or bullet markers,
/// per-item style overrides.
pub(crate) fn draw_list(
    surface: &mut dyn Surface,
    canvas: Canvas,
    list: &ListEntry,
    fg: &str,
    fonts: &FontCatalog,
) -> VelumResult<()> {
    let font_token = list.font.as_deref().unwrap_or("sans");
    let color = list.color.as_deref().unwrap_or(fg);
    let lp = if list.lp == 0.0 {
        DEFAULT_LIST_SPACING
    } else {
        list.lp
    };
    let (mut x, y, fs) = canvas.dimen(list.xp, list.yp, list.sp);
    let ls = lp * fs;
    let list_opacity = set_opacity(list.opacity);
    // Centering is list-level; items never realign individually.
    let centered = matches!(list.align.as_deref(), Some("center" | "c"));

    if list.rotation > 0.0 {
        surface.begin_rotation(x, y, list.rotation)?;
    }
    if list.kind == ListKind::Bullet {
        x += fs;
    }

    let mut ty = y;
    for (i, item) in list.items.iter().enumerate() {
        let rendered = match list.kind {
            ListKind::Number => format!("{}. {}", i + 1, item.text),
            _ => item.text.clone(),
        };
        if list.kind == ListKind::Bullet {
            shapes::draw_bullet(surface, x, ty, fs, color, list_opacity)?;
        }
        let attrs = TextAttrs {
            fill: resolve_color(item.color.as_deref().unwrap_or(color)),
            opacity: Some(set_opacity(item.opacity)),
            font_family: fonts
                .lookup(item.font.as_deref().unwrap_or(font_token))
                .to_owned(),
            size: fs,
            anchor: if centered {
                TextAnchor::Middle
            } else {
                TextAnchor::Start
            },
        };
        surface.draw_text(x, ty, &rendered, &attrs)?;
        ty += ls;
    }

    if list.rotation > 0.0 {
        surface.end_group()?;
    }
    Ok(())
}
