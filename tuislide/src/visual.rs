use crate::buffer::{Buffer, Cell};
use crate::layout::Rect;
use crate::types::Color;

/// An opaque, swappable renderable unit.
///
/// A visual has no behavior of its own: it is handed a box and draws
/// into it. The slider owns one per slot (track and handle) and never
/// looks inside; any host type can occupy a slot by implementing this.
pub trait Visual: Send + Sync {
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Default track background: a pill-shaped translucent gray fill.
///
/// The rounded-rectangle corner radius of "half the height" collapses
/// to half-block end caps at terminal resolution.
pub struct Track {
    pub color: Color,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            color: Color::oklcha(0.65, 0.0, 0.0, 0.75),
        }
    }
}

impl Track {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Visual for Track {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        fill_pill(area, self.color, buf);
    }
}

/// Default handle: a circle sized to the track height.
///
/// At single-cell size this is a `●` over whatever the track drew;
/// larger handles render as a filled pill.
pub struct Knob {
    pub color: Color,
}

impl Default for Knob {
    fn default() -> Self {
        Self {
            color: Color::rgb(255, 255, 255),
        }
    }
}

impl Knob {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Visual for Knob {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        if area.width == 1 && area.height == 1 {
            // Keep the track's fill visible around the dot.
            let bg = buf.get(area.x, area.y).map(|c| c.bg).unwrap_or_default();
            buf.set(
                area.x,
                area.y,
                Cell::new('●').with_fg(self.color.to_rgb()).with_bg(bg),
            );
        } else {
            fill_pill(area, self.color, buf);
        }
    }
}

/// Fill `area` with `color`, using half-block end caps so single-row
/// fills read as pills rather than bars.
fn fill_pill(area: Rect, color: Color, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    let rgb = color.to_rgb();

    if area.width == 1 {
        for y in area.top()..area.bottom() {
            buf.set(area.x, y, Cell::new('█').with_fg(rgb));
        }
        return;
    }

    for y in area.top()..area.bottom() {
        buf.set(area.left(), y, Cell::new('▐').with_fg(rgb));
        for x in area.left() + 1..area.right() - 1 {
            buf.set(x, y, Cell::new(' ').with_bg(rgb));
        }
        buf.set(area.right() - 1, y, Cell::new('▌').with_fg(rgb));
    }
}
