use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::buffer::{Buffer, Cell};
use crate::types::{Rgb, TextStyle};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Draw a single line of text into the buffer, returning the columns
/// consumed. Double-width characters mark their trailing cell as a
/// continuation so the terminal flush skips it.
pub fn draw_text(buf: &mut Buffer, x: u16, y: u16, text: &str, fg: Rgb, style: TextStyle) -> u16 {
    let mut cursor = x;

    for ch in text.chars() {
        let width = char_width(ch) as u16;
        if width == 0 {
            continue;
        }
        if cursor >= buf.width() {
            break;
        }

        buf.set(cursor, y, Cell::new(ch).with_fg(fg).with_style(style));
        if width == 2 {
            if let Some(cell) = buf.get_mut(cursor + 1, y) {
                *cell = Cell::default();
                cell.wide_continuation = true;
            }
        }

        cursor += width;
    }

    cursor - x
}
