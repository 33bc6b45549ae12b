use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tuislide::text::draw_text;
use tuislide::{
    Buffer, Cell, Color, Event, Key, Knob, Rect, Rgb, Slider, SliderState, Terminal, TextStyle,
    Track, Visual,
};

/// Blue track whose lightness ramps from left to right.
struct GradientTrack;

impl Visual for GradientTrack {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        for x in area.left()..area.right() {
            let t = f32::from(x - area.x) / f32::from(area.width.max(1));
            let rgb = Color::oklch(0.45 + 0.25 * t, 0.12, 250.0).to_rgb();
            for y in area.top()..area.bottom() {
                buf.set(x, y, Cell::new(' ').with_bg(rgb));
            }
        }
    }
}

/// Handle that draws an arrow over whatever the track painted.
struct ArrowHandle;

impl Visual for ArrowHandle {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let (cx, cy) = area.center();
        let bg = buf.get(cx, cy).map(|c| c.bg).unwrap_or_default();
        buf.set(
            cx,
            cy,
            Cell::new('▶').with_fg(Rgb::new(80, 200, 120)).with_bg(bg),
        );
    }
}

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("gallery.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut term = Terminal::new()?;
    let mut state = SliderState::new();

    let mut temperature: f32 = 0.0;
    let mut opacity: f32 = 0.5;
    let mut volume: f32 = 0.6;
    let mut thick: f32 = 0.25;

    loop {
        let (width, _) = term.size();

        // Reconfigured each frame; the opacity slider's track fades with
        // its own value.
        let temperature_slider = Slider::new("temperature")
            .track(GradientTrack)
            .handle(Knob::new(Color::rgb(30, 30, 30)), 3);
        let opacity_slider = Slider::new("opacity")
            .track(Track::new(Color::oklcha(0.55, 0.2, 25.0, opacity)))
            .handle(ArrowHandle, 3);
        let volume_slider = Slider::new("volume");
        let thick_slider = Slider::new("thick").handle(Knob::default(), 4);

        let temperature_area = Rect::new(0, 2, width, 1).inset_x(2);
        let opacity_area = Rect::new(0, 5, width, 1).inset_x(2);
        let volume_area = Rect::new(0, 8, width, 1).inset_x(2);
        let thick_area = Rect::new(0, 11, width, 2).inset_x(2);

        term.draw(|buf| {
            let label = Rgb::new(220, 220, 220);
            let plain = TextStyle::new();

            draw_text(
                buf,
                2,
                1,
                &format!("Temperature: {:.0}", 32.0 + temperature * 48.0),
                label,
                plain,
            );
            temperature_slider.render(temperature_area, temperature, buf);

            draw_text(buf, 2, 4, &format!("Opacity: {opacity:.2}"), label, plain);
            opacity_slider.render(opacity_area, opacity, buf);

            draw_text(
                buf,
                2,
                7,
                &format!("Volume: {:.0}", volume * 10.0),
                label,
                plain,
            );
            volume_slider.render(volume_area, volume, buf);

            draw_text(buf, 2, 10, &format!("Thick: {thick:.2}"), label, plain);
            thick_slider.render(thick_area, thick, buf);

            draw_text(buf, 2, 14, "q quits", label, TextStyle::new().dim());
        })?;

        let events = term.poll(None)?;

        state.process_events(&events, &temperature_slider, temperature_area, &mut temperature);
        state.process_events(&events, &opacity_slider, opacity_area, &mut opacity);
        state.process_events(&events, &volume_slider, volume_area, &mut volume);
        state.process_events(&events, &thick_slider, thick_area, &mut thick);

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
                _ => {}
            }
        }
    }
}
