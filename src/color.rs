//! Color token resolution and opacity controls.
//!
//! Color tokens are opaque passthrough strings (named colors, `rgb(...)`
//! notation) except for `hsv(h,s,v)` tokens, which are converted to `rgb`
//! before reaching the surface. Opacity uses the deck convention where 0 is
//! the sentinel for "default/opaque", not "invisible".

/// Default fill for shapes whose color is unset.
pub const DEFAULT_SHAPE_COLOR: &str = "rgb(127,127,127)";

/// Resolved fill: color string plus opacity in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct FillStyle {
    /// Resolved color (hsv tokens already converted).
    pub color: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl FillStyle {
    pub(crate) fn resolve(color: &str, opacity_ctl: f64) -> Self {
        Self {
            color: resolve_color(color),
            opacity: set_opacity(opacity_ctl),
        }
    }
}

/// Resolved stroke: absolute width plus color and opacity.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in absolute canvas units.
    pub width: f64,
    /// Resolved color (hsv tokens already converted).
    pub color: String,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl StrokeStyle {
    pub(crate) fn resolve(width: f64, color: &str, opacity_ctl: f64) -> Self {
        Self {
            width,
            color: resolve_color(color),
            opacity: set_opacity(opacity_ctl),
        }
    }
}

/// Resolve the opacity control into an alpha value:
/// negative means fully transparent, positive is a percentage, and zero is
/// the sentinel for default (fully opaque).
pub fn set_opacity(v: f64) -> f64 {
    if v < 0.0 {
        0.0
    } else if v > 0.0 {
        v / 100.0
    } else {
        1.0
    }
}

/// Normalize a color token: `hsv(h,s,v)` converts to `rgb(r,g,b)`, anything
/// else passes through unchanged.
pub fn resolve_color(token: &str) -> String {
    if token.starts_with("hsv(") && token.ends_with(')') && token.len() > 5 {
        hsv_token_to_rgb(token)
    } else {
        token.to_owned()
    }
}

/// Convert an `hsv(...)` functional token into `rgb(...)` notation.
///
/// Tokens that do not carry exactly three numeric fields resolve to black.
fn hsv_token_to_rgb(token: &str) -> String {
    let inner: String = token[4..token.len() - 1]
        .chars()
        .filter(|c| *c != ' ' && *c != '\t')
        .collect();
    let fields: Vec<&str> = inner.split(',').collect();

    let (mut red, mut green, mut blue) = (0u8, 0u8, 0u8);
    if fields.len() == 3 {
        let h = fields[0].parse().unwrap_or(0.0);
        let s = fields[1].parse().unwrap_or(0.0);
        let v = fields[2].parse().unwrap_or(0.0);
        (red, green, blue) = hsv_to_rgb(h, s, v);
    }
    format!("rgb({red},{green},{blue})")
}

/// Convert `hsv(h in [0,360), s and v in [0,100])` to RGB channels.
///
/// Saturation or value above 100 resolves to black rather than an error.
/// Channels are truncated, not rounded, to stay bit-compatible with output
/// produced before this engine.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let s = s / 100.0;
    let v = v / 100.0;
    if s > 1.0 || v > 1.0 {
        return (0, 0, 0);
    }
    let h = h % 360.0;
    let c = v * s;
    let section = h / 60.0;
    let x = c * (1.0 - ((section % 2.0) - 1.0).abs());

    // Negative hues land outside every sector and resolve to black.
    if !(0.0..=6.0).contains(&section) {
        return (0, 0, 0);
    }
    let (r, g, b) = if section <= 1.0 {
        (c, x, 0.0)
    } else if section <= 2.0 {
        (x, c, 0.0)
    } else if section <= 3.0 {
        (0.0, c, x)
    } else if section <= 4.0 {
        (0.0, x, c)
    } else if section <= 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = v - c;
    (
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_control_convention() {
        assert_eq!(set_opacity(0.0), 1.0);
        assert_eq!(set_opacity(-5.0), 0.0);
        assert_eq!(set_opacity(-1.0), 0.0);
        assert_eq!(set_opacity(50.0), 0.5);
        assert_eq!(set_opacity(100.0), 1.0);
    }

    #[test]
    fn primary_hues_dominate_expected_channel() {
        let (r, g, b) = hsv_to_rgb(0.0, 100.0, 100.0);
        assert!(r > g && r > b);
        assert_eq!((r, g, b), (255, 0, 0));

        let (r, g, b) = hsv_to_rgb(120.0, 100.0, 100.0);
        assert!(g > r && g > b);

        let (r, g, b) = hsv_to_rgb(240.0, 100.0, 100.0);
        assert!(b > r && b > g);
    }

    #[test]
    fn out_of_range_saturation_or_value_is_black() {
        assert_eq!(hsv_to_rgb(0.0, 150.0, 100.0), (0, 0, 0));
        assert_eq!(hsv_to_rgb(0.0, 100.0, 101.0), (0, 0, 0));
    }

    #[test]
    fn channels_truncate_rather_than_round() {
        // v=50% of 255 is 127.5; truncation keeps 127.
        assert_eq!(hsv_to_rgb(0.0, 100.0, 50.0), (127, 0, 0));
    }

    #[test]
    fn hsv_tokens_convert_and_others_pass_through() {
        assert_eq!(resolve_color("hsv(0,100,100)"), "rgb(255,0,0)");
        assert_eq!(resolve_color("hsv( 240, 100, 100 )"), "rgb(0,0,255)");
        assert_eq!(resolve_color("rebeccapurple"), "rebeccapurple");
        assert_eq!(resolve_color("rgb(1,2,3)"), "rgb(1,2,3)");
        // Too short to be a real token.
        assert_eq!(resolve_color("hsv()"), "hsv()");
    }

    #[test]
    fn malformed_hsv_token_is_black() {
        assert_eq!(resolve_color("hsv(1,2)"), "rgb(0,0,0)");
        assert_eq!(resolve_color("hsv(a,b,c)"), "rgb(0,0,0)");
    }

    #[test]
    fn style_resolution_combines_color_and_opacity() {
        let fill = FillStyle::resolve("hsv(120,100,100)", -1.0);
        assert_eq!(fill.opacity, 0.0);
        assert!(fill.color.starts_with("rgb("));

        let stroke = StrokeStyle::resolve(2.0, "blue", 25.0);
        assert_eq!(stroke.width, 2.0);
        assert_eq!(stroke.color, "blue");
        assert_eq!(stroke.opacity, 0.25);
    }
}
