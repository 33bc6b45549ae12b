use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuislide::text::draw_text;
use tuislide::{Event, Key, Rect, Rgb, Slider, SliderState, Terminal, TextStyle};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let slider = Slider::new("demo");
    let mut state = SliderState::new();
    let mut percent: f32 = 0.6;

    loop {
        let (width, _) = term.size();
        let area = Rect::new(0, 3, width, 1).inset_x(2);

        term.draw(|buf| {
            draw_text(
                buf,
                2,
                1,
                &format!("{percent:.2}  drag the knob / arrows nudge / q quits"),
                Rgb::new(220, 220, 220),
                TextStyle::new(),
            );
            slider.render(area, percent, buf);
        })?;

        let events = term.poll(None)?;
        state.process_events(&events, &slider, area, &mut percent);

        for event in &events {
            match event {
                Event::Key {
                    key: Key::Char('q'),
                    ..
                }
                | Event::Key {
                    key: Key::Escape, ..
                } => {
                    return Ok(());
                }
                // The owner can reposition the handle by writing the
                // value directly between frames.
                Event::Key { key: Key::Left, .. } => percent = (percent - 0.05).max(0.0),
                Event::Key {
                    key: Key::Right, ..
                } => percent = (percent + 0.05).min(1.0),
                _ => {}
            }
        }
    }
}
