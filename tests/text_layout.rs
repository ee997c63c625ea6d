//! Text and list layout behavior observed through the recording surface.

use velum::{
    Canvas, Deck, DrawCall, FontCatalog, ListEntry, ListItem, ListKind, RecordingSurface,
    RenderOpts, RenderSession, Slide, TextAnchor, TextEntry, TextMode,
};

const CANVAS_W: f64 = 1000.0;

fn render_with(session: &RenderSession, slide: Slide) -> Vec<DrawCall> {
    let deck = Deck {
        title: None,
        canvas: Canvas::new(CANVAS_W, 1000.0),
        slides: vec![slide],
    };
    let mut surface = RecordingSurface::new();
    session
        .render_slide(&deck, 0, &mut surface)
        .expect("render");
    surface.into_calls()
}

fn render(slide: Slide) -> Vec<DrawCall> {
    render_with(&RenderSession::new(FontCatalog::default()), slide)
}

fn text_calls(calls: &[DrawCall]) -> Vec<(f64, f64, String, velum::TextAttrs)> {
    calls
        .iter()
        .filter_map(|c| match c {
            DrawCall::DrawText { x, y, text, attrs } => {
                Some((*x, *y, text.clone(), attrs.clone()))
            }
            _ => None,
        })
        .collect()
}

fn text_slide(entry: TextEntry) -> Slide {
    Slide {
        texts: vec![entry],
        ..Slide::default()
    }
}

#[test]
fn plain_multiline_advances_by_line_spacing() {
    let calls = render(text_slide(TextEntry {
        xp: 10.0,
        yp: 50.0,
        sp: 2.0,
        text: "first\nsecond".to_string(),
        ..TextEntry::default()
    }));

    let texts = text_calls(&calls);
    assert_eq!(texts.len(), 2);
    // fs = 2% of 1000 = 20; default multiplier 1.4 gives a 28 unit leading.
    let (x0, y0, ref t0, ref a0) = texts[0];
    let (x1, y1, ref t1, _) = texts[1];
    assert_eq!((t0.as_str(), t1.as_str()), ("first", "second"));
    assert_eq!(x0, x1);
    assert!((y1 - y0 - 28.0).abs() < 1e-9);
    assert_eq!(a0.size, 20.0);
    // Single-line text is drawn opaque, with no opacity attribute at all.
    assert_eq!(a0.opacity, None);
    assert_eq!(a0.anchor, TextAnchor::Start);
    assert_eq!((x0, y0), (100.0, 500.0));
}

#[test]
fn explicit_line_spacing_multiplier_wins() {
    let calls = render(text_slide(TextEntry {
        xp: 10.0,
        yp: 50.0,
        sp: 2.0,
        lp: 2.0,
        text: "a\nb".to_string(),
        ..TextEntry::default()
    }));

    let texts = text_calls(&calls);
    assert!((texts[1].1 - texts[0].1 - 40.0).abs() < 1e-9);
}

#[test]
fn rotation_wraps_calls_in_a_transform_group() {
    let calls = render(text_slide(TextEntry {
        xp: 10.0,
        yp: 50.0,
        sp: 2.0,
        rotation: 45.0,
        text: "tilted".to_string(),
        ..TextEntry::default()
    }));

    match &calls[1] {
        DrawCall::BeginRotation { cx, cy, degrees } => {
            assert_eq!((*cx, *cy, *degrees), (100.0, 500.0, 45.0));
        }
        other => panic!("unexpected call {other:?}"),
    }
    assert!(matches!(calls[2], DrawCall::DrawText { .. }));
    assert!(matches!(calls[3], DrawCall::EndGroup));

    // Rotation affects the transform only; the text position is the same
    // absolute anchor.
    let texts = text_calls(&calls);
    assert_eq!((texts[0].0, texts[0].1), (100.0, 500.0));
}

#[test]
fn zero_rotation_emits_no_group() {
    let calls = render(text_slide(TextEntry {
        xp: 10.0,
        yp: 50.0,
        sp: 2.0,
        text: "flat".to_string(),
        ..TextEntry::default()
    }));
    assert!(
        !calls
            .iter()
            .any(|c| matches!(c, DrawCall::BeginRotation { .. } | DrawCall::EndGroup))
    );
}

#[test]
fn code_mode_draws_panel_then_mono_lines() {
    let calls = render(text_slide(TextEntry {
        xp: 10.0,
        yp: 50.0,
        sp: 2.0,
        mode: TextMode::Code,
        text: "let x = 1;\nuse(x);".to_string(),
        ..TextEntry::default()
    }));

    // fs = 20, ls = 28, two lines.
    match &calls[1] {
        DrawCall::FillRect {
            x,
            y,
            width,
            height,
            style,
        } => {
            assert_eq!((*x, *y), (80.0, 480.0));
            assert_eq!(*width, CANVAS_W - 100.0 - 20.0);
            assert_eq!(*height, 56.0);
            assert_eq!(style.color, "rgb(240,240,240)");
            assert_eq!(style.opacity, 1.0);
        }
        other => panic!("unexpected call {other:?}"),
    }

    let texts = text_calls(&calls);
    assert_eq!(texts.len(), 2);
    let mono = FontCatalog::default().lookup("mono").to_owned();
    assert!(texts.iter().all(|(_, _, _, a)| a.font_family == mono));
}

#[test]
fn block_mode_wraps_within_default_half_canvas() {
    let words = "the quick brown fox jumps over the lazy dog and keeps \
                 going well past a single line of output text";
    let entry = TextEntry {
        xp: 10.0,
        yp: 80.0,
        sp: 2.0,
        mode: TextMode::Block,
        text: words.to_string(),
        ..TextEntry::default()
    };
    let calls = render(text_slide(entry));
    let texts = text_calls(&calls);
    assert!(texts.len() > 1, "expected the text to wrap");

    let fs = 20.0;
    let x = 100.0;
    let wrap_width = CANVAS_W / 2.0;
    let longest_word = words.split(' ').map(str::len).max().unwrap() as f64;
    for (_, _, line, attrs) in &texts {
        // The estimate may overflow by up to one word, never more.
        let estimated = fs * line.len() as f64 * 0.65;
        assert!(
            estimated <= wrap_width + x + fs * (longest_word + 1.0) * 0.65,
            "line too wide: {line:?}"
        );
        assert_eq!(attrs.opacity, Some(1.0));
    }

    // Successive lines move down by the leading.
    for pair in texts.windows(2) {
        assert!((pair[1].1 - pair[0].1 - 28.0).abs() < 1e-9);
    }
}

#[test]
fn block_mode_honors_explicit_wrap_width() {
    let text = "alpha beta gamma delta epsilon zeta eta theta iota kappa";
    let narrow = render(text_slide(TextEntry {
        xp: 10.0,
        yp: 80.0,
        sp: 2.0,
        wp: 20.0,
        mode: TextMode::Block,
        text: text.to_string(),
        ..TextEntry::default()
    }));
    let wide = render(text_slide(TextEntry {
        xp: 10.0,
        yp: 80.0,
        sp: 2.0,
        wp: 90.0,
        mode: TextMode::Block,
        text: text.to_string(),
        ..TextEntry::default()
    }));
    assert!(text_calls(&narrow).len() > text_calls(&wide).len());
}

#[test]
fn block_break_marker_advances_without_flushing() {
    let calls = render(text_slide(TextEntry {
        xp: 10.0,
        yp: 50.0,
        sp: 2.0,
        mode: TextMode::Block,
        text: r"alpha \n beta".to_string(),
        ..TextEntry::default()
    }));

    let texts = text_calls(&calls);
    // The marker moves the cursor down one leading; the buffered words keep
    // accumulating and flush once at the end.
    assert_eq!(texts.len(), 1);
    let (_, y, ref line, _) = texts[0];
    assert_eq!(line.as_str(), "alpha beta ");
    assert!((y - (500.0 + 28.0)).abs() < 1e-9);
}

#[test]
fn wrap_factor_is_tunable() {
    let entry = || TextEntry {
        xp: 10.0,
        yp: 80.0,
        sp: 2.0,
        mode: TextMode::Block,
        text: "one two three four five six seven eight nine ten".to_string(),
        ..TextEntry::default()
    };

    let default_lines = text_calls(&render(text_slide(entry()))).len();

    let tight = RenderSession::with_opts(
        FontCatalog::default(),
        RenderOpts { wrap_factor: 2.0 },
    );
    let tight_lines = text_calls(&render_with(&tight, text_slide(entry()))).len();
    assert!(tight_lines > default_lines);
}

#[test]
fn block_opacity_applies_to_every_line() {
    let calls = render(text_slide(TextEntry {
        xp: 10.0,
        yp: 80.0,
        sp: 2.0,
        opacity: 50.0,
        mode: TextMode::Block,
        text: "short".to_string(),
        ..TextEntry::default()
    }));
    let texts = text_calls(&calls);
    assert!(texts.iter().all(|(_, _, _, a)| a.opacity == Some(0.5)));
}

fn list_slide(list: ListEntry) -> Slide {
    Slide {
        lists: vec![list],
        ..Slide::default()
    }
}

#[test]
fn numbered_lists_prefix_one_indexed() {
    let calls = render(list_slide(ListEntry {
        xp: 10.0,
        yp: 50.0,
        sp: 2.0,
        kind: ListKind::Number,
        items: vec![
            ListItem {
                text: "first".to_string(),
                ..ListItem::default()
            },
            ListItem {
                text: "second".to_string(),
                ..ListItem::default()
            },
        ],
        ..ListEntry::default()
    }));

    let texts = text_calls(&calls);
    assert_eq!(texts[0].2, "1. first");
    assert_eq!(texts[1].2, "2. second");
    // Default list spacing is 2.0 x fs.
    assert!((texts[1].1 - texts[0].1 - 40.0).abs() < 1e-9);
}

#[test]
fn bullet_lists_indent_and_mark_each_item() {
    let calls = render(list_slide(ListEntry {
        xp: 10.0,
        yp: 50.0,
        sp: 2.0,
        kind: ListKind::Bullet,
        items: vec![
            ListItem {
                text: "a".to_string(),
                ..ListItem::default()
            },
            ListItem {
                text: "b".to_string(),
                ..ListItem::default()
            },
        ],
        ..ListEntry::default()
    }));

    // Marker, item, marker, item.
    let kinds: Vec<_> = calls[1..calls.len() - 1]
        .iter()
        .map(|c| match c {
            DrawCall::FillEllipse { .. } => "marker",
            DrawCall::DrawText { .. } => "item",
            other => panic!("unexpected call {other:?}"),
        })
        .collect();
    assert_eq!(kinds, ["marker", "item", "marker", "item"]);

    // fs = 20: text indents to x + fs, the marker sits back at the anchor.
    let texts = text_calls(&calls);
    assert_eq!(texts[0].0, 120.0);
    match &calls[1] {
        DrawCall::FillEllipse { cx, cy, rx, .. } => {
            assert_eq!(*cx, 100.0);
            assert_eq!(*rx, 5.0);
            assert!((cy - (500.0 - 20.0 / 3.0)).abs() < 1e-9);
        }
        other => panic!("unexpected call {other:?}"),
    }
}

#[test]
fn list_items_override_color_font_and_opacity() {
    let fonts = FontCatalog::default();
    let calls = render(list_slide(ListEntry {
        xp: 10.0,
        yp: 50.0,
        sp: 2.0,
        color: Some("navy".to_string()),
        items: vec![
            ListItem {
                text: "styled".to_string(),
                color: Some("hsv(0,100,100)".to_string()),
                font: Some("mono".to_string()),
                opacity: 25.0,
            },
            ListItem {
                text: "inherits".to_string(),
                ..ListItem::default()
            },
        ],
        ..ListEntry::default()
    }));

    let texts = text_calls(&calls);
    let styled = &texts[0].3;
    assert_eq!(styled.fill, "rgb(255,0,0)");
    assert_eq!(styled.font_family, fonts.lookup("mono"));
    assert_eq!(styled.opacity, Some(0.25));

    let inherits = &texts[1].3;
    assert_eq!(inherits.fill, "navy");
    assert_eq!(inherits.font_family, fonts.lookup("sans"));
    // Item opacity 0 is the opaque sentinel, not "inherit the list value".
    assert_eq!(inherits.opacity, Some(1.0));
}

#[test]
fn centered_lists_anchor_every_item_uniformly() {
    for align in ["center", "c"] {
        let calls = render(list_slide(ListEntry {
            xp: 50.0,
            yp: 50.0,
            sp: 2.0,
            align: Some(align.to_string()),
            items: vec![
                ListItem {
                    text: "a".to_string(),
                    ..ListItem::default()
                },
                ListItem {
                    text: "b".to_string(),
                    ..ListItem::default()
                },
            ],
            ..ListEntry::default()
        }));
        let texts = text_calls(&calls);
        assert!(
            texts
                .iter()
                .all(|(_, _, _, a)| a.anchor == TextAnchor::Middle)
        );
    }
}

#[test]
fn rotated_lists_render_inside_a_group() {
    let calls = render(list_slide(ListEntry {
        xp: 10.0,
        yp: 50.0,
        sp: 2.0,
        rotation: 90.0,
        items: vec![ListItem {
            text: "sideways".to_string(),
            ..ListItem::default()
        }],
        ..ListEntry::default()
    }));

    assert!(matches!(calls[1], DrawCall::BeginRotation { .. }));
    assert!(matches!(
        calls[calls.len() - 2],
        DrawCall::EndGroup
    ));
}
