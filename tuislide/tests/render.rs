use tuislide::text::draw_text;
use tuislide::{Buffer, Cell, Rect, Rgb, Slider, SliderState, TextStyle, Track, Visual};

struct Blank;

impl Visual for Blank {
    fn render(&self, _area: Rect, _buf: &mut Buffer) {}
}

/// Track stand-in that stamps every cell, for asserting slot replacement.
struct Stamp(char);

impl Visual for Stamp {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.fill(area, Cell::new(self.0));
    }
}

// ============================================================================
// Slider rendering
// ============================================================================

#[test]
fn test_default_knob_sits_at_leading_edge() {
    let mut buf = Buffer::new(20, 1);
    let slider = Slider::new("s");

    slider.render(Rect::from_size(20, 1), 0.0, &mut buf);

    assert_eq!(buf.get(0, 0).map(|c| c.ch), Some('●'));
}

#[test]
fn test_default_knob_sits_at_trailing_edge() {
    let mut buf = Buffer::new(20, 1);
    let slider = Slider::new("s");

    slider.render(Rect::from_size(20, 1), 1.0, &mut buf);

    assert_eq!(buf.get(19, 0).map(|c| c.ch), Some('●'));
}

#[test]
fn test_knob_offset_at_midpoint() {
    let mut buf = Buffer::new(21, 1);
    let slider = Slider::new("s");

    // travel range 20, so the knob lands on column 10
    slider.render(Rect::from_size(21, 1), 0.5, &mut buf);

    assert_eq!(buf.get(10, 0).map(|c| c.ch), Some('●'));
}

#[test]
fn test_default_track_is_a_pill() {
    let mut buf = Buffer::new(10, 1);
    let slider = Slider::new("s").handle(Blank, 1);

    slider.render(Rect::from_size(10, 1), 0.0, &mut buf);

    let fill = Track::default().color.to_rgb();
    assert_eq!(buf.get(0, 0).map(|c| c.ch), Some('▐'));
    assert_eq!(buf.get(9, 0).map(|c| c.ch), Some('▌'));
    assert_eq!(buf.get(5, 0).map(|c| c.bg), Some(fill));
}

#[test]
fn test_custom_visuals_replace_defaults() {
    let mut buf = Buffer::new(10, 1);
    let slider = Slider::new("s").track(Stamp('t')).handle(Stamp('h'), 2);

    slider.render(Rect::from_size(10, 1), 0.0, &mut buf);

    // handle covers the first two columns, track everything after
    assert_eq!(buf.get(0, 0).map(|c| c.ch), Some('h'));
    assert_eq!(buf.get(1, 0).map(|c| c.ch), Some('h'));
    assert_eq!(buf.get(2, 0).map(|c| c.ch), Some('t'));
    assert_eq!(buf.get(9, 0).map(|c| c.ch), Some('t'));
}

#[test]
fn test_trailing_space_stays_untouched() {
    let mut buf = Buffer::new(20, 1);
    let slider = Slider::new("s").track(Blank);

    slider.render(Rect::from_size(20, 1), 0.0, &mut buf);

    // knob at column 0, everything trailing it is passive
    for x in 1..20 {
        assert_eq!(buf.get(x, 0), Some(&Cell::default()));
    }
}

#[test]
fn test_empty_area_renders_nothing() {
    let mut buf = Buffer::new(10, 1);
    let slider = Slider::new("s");

    slider.render(Rect::new(0, 0, 0, 1), 0.5, &mut buf);
    slider.render(Rect::new(0, 0, 10, 0), 0.5, &mut buf);

    for x in 0..10 {
        assert_eq!(buf.get(x, 0), Some(&Cell::default()));
    }
}

#[test]
fn test_render_follows_external_value_writes() {
    // owner repositions the handle between frames without any gesture
    let mut buf = Buffer::new(21, 1);
    let slider = Slider::new("s");
    let state = SliderState::new();
    let mut value: f32 = 0.0;
    slider.render(Rect::from_size(21, 1), value, &mut buf);
    assert_eq!(buf.get(0, 0).map(|c| c.ch), Some('●'));

    value = 1.0;
    buf.clear();
    slider.render(Rect::from_size(21, 1), value, &mut buf);

    assert!(!state.is_dragging("s"));
    assert_eq!(buf.get(20, 0).map(|c| c.ch), Some('●'));
}

// ============================================================================
// Buffer and text
// ============================================================================

#[test]
fn test_buffer_diff_reports_changed_cells() {
    let clean = Buffer::new(4, 2);
    let mut dirty = clean.clone();
    dirty.set(2, 1, Cell::new('x'));

    let changes: Vec<_> = dirty.diff(&clean).map(|(x, y, c)| (x, y, c.ch)).collect();
    assert_eq!(changes, vec![(2, 1, 'x')]);
}

#[test]
fn test_fill_clips_to_buffer() {
    let mut buf = Buffer::new(4, 2);
    buf.fill(Rect::new(2, 0, 10, 10), Cell::new('x'));

    assert_eq!(buf.get(3, 1).map(|c| c.ch), Some('x'));
    assert_eq!(buf.get(0, 0).map(|c| c.ch), Some(' '));
}

#[test]
fn test_draw_text_advances_by_display_width() {
    let mut buf = Buffer::new(10, 1);
    let advance = draw_text(
        &mut buf,
        0,
        0,
        "ab",
        Rgb::new(255, 255, 255),
        TextStyle::new(),
    );

    assert_eq!(advance, 2);
    assert_eq!(buf.get(0, 0).map(|c| c.ch), Some('a'));
    assert_eq!(buf.get(1, 0).map(|c| c.ch), Some('b'));
}

#[test]
fn test_draw_text_marks_wide_continuations() {
    let mut buf = Buffer::new(10, 1);
    let advance = draw_text(
        &mut buf,
        0,
        0,
        "日a",
        Rgb::new(255, 255, 255),
        TextStyle::new(),
    );

    assert_eq!(advance, 3);
    assert_eq!(buf.get(0, 0).map(|c| c.ch), Some('日'));
    assert_eq!(buf.get(1, 0).map(|c| c.wide_continuation), Some(true));
    assert_eq!(buf.get(2, 0).map(|c| c.ch), Some('a'));
}
