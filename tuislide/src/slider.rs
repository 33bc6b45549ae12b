use std::collections::HashMap;

use crate::buffer::Buffer;
use crate::event::{Event, MouseButton};
use crate::geometry::{offset_from_percentage, percentage_from_drag, DragSample};
use crate::layout::Rect;
use crate::visual::{Knob, Track, Visual};

/// A draggable slider control.
///
/// The slider itself is a configuration value: it holds the two visual
/// slots and the declared handle width, nothing else. The percentage it
/// reports lives with the caller and is passed in each frame — the
/// slider reads it to position the handle and writes it back during a
/// drag (see [`SliderState`]).
///
/// Customization is builder-chained; each call consumes the slider and
/// returns the fully-configured value:
///
/// ```
/// use tuislide::{Color, Knob, Slider, Track};
///
/// let slider = Slider::new("volume")
///     .track(Track::new(Color::oklch(0.5, 0.12, 250.0)))
///     .handle(Knob::default(), 3);
/// ```
pub struct Slider {
    id: String,
    track: Option<Box<dyn Visual>>,
    handle: Option<Box<dyn Visual>>,
    handle_width: Option<u16>,
}

impl Slider {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            track: None,
            handle: None,
            handle_width: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Replace the track (background) visual.
    pub fn track(mut self, visual: impl Visual + 'static) -> Self {
        self.track = Some(Box::new(visual));
        self
    }

    /// Replace the handle visual and declare its width.
    ///
    /// The width feeds the geometry: it reduces the travel range so the
    /// handle's far edge stops at the end of the track instead of
    /// sliding past it.
    pub fn handle(mut self, visual: impl Visual + 'static, width: u16) -> Self {
        self.handle = Some(Box::new(visual));
        self.handle_width = Some(width);
        self
    }

    /// Configured handle width, or the measured track height when the
    /// caller left it unset (a square handle).
    pub fn handle_width(&self, area: Rect) -> u16 {
        self.handle_width.unwrap_or(area.height)
    }

    /// The cells the handle occupies at the given percentage.
    ///
    /// This is also the drag hit area. The declared handle width feeds
    /// the offset math unclamped, but the returned rect is clipped to
    /// the track so an oversized handle renders as a stationary,
    /// track-filling block instead of overflowing.
    pub fn handle_rect(&self, area: Rect, percentage: f32) -> Rect {
        let handle_width = self.handle_width(area);
        let offset = offset_from_percentage(
            percentage,
            f32::from(area.width),
            f32::from(handle_width),
        )
        .round() as u16;

        Rect::new(
            area.x + offset,
            area.y,
            handle_width.min(area.width - offset),
            area.height,
        )
    }

    /// Render one frame: track over the full area, handle at the offset
    /// for `percentage`. Cells trailing the handle are left untouched.
    ///
    /// An empty (unmeasured) area renders nothing.
    pub fn render(&self, area: Rect, percentage: f32, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        match &self.track {
            Some(visual) => visual.render(area, buf),
            None => Track::default().render(area, buf),
        }

        let handle_area = self.handle_rect(area, percentage);
        match &self.handle {
            Some(visual) => visual.render(handle_area, buf),
            None => Knob::default().render(handle_area, buf),
        }
    }
}

/// Where a drag gesture grabbed the handle.
#[derive(Debug, Clone, Copy)]
struct DragOrigin {
    start_x: u16,
    base_offset: f32,
}

/// Tracks in-flight drag gestures for sliders.
///
/// User-managed state that persists across frames, keyed by slider id
/// so one state can serve several sliders.
#[derive(Debug, Default)]
pub struct SliderState {
    drags: HashMap<String, DragOrigin>,
}

impl SliderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self, id: &str) -> bool {
        self.drags.contains_key(id)
    }

    /// Feed events to one slider, writing drag updates into `value`.
    ///
    /// A left press inside the handle begins a gesture, capturing the
    /// press column and the handle's offset at that moment. Every drag
    /// while the gesture is live recomputes the percentage and writes it
    /// synchronously, so the handle tracks the pointer within the same
    /// frame. Release ends the gesture; there is no rollback.
    ///
    /// Returns true if `value` changed. Nothing is processed while
    /// `area` is empty (the control has not been measured yet).
    pub fn process_events(
        &mut self,
        events: &[Event],
        slider: &Slider,
        area: Rect,
        value: &mut f32,
    ) -> bool {
        let mut changed = false;

        for event in events {
            match event {
                Event::Click {
                    x,
                    y,
                    button: MouseButton::Left,
                } => {
                    if area.is_empty() {
                        continue;
                    }
                    if slider.handle_rect(area, *value).contains(*x, *y) {
                        let base_offset = offset_from_percentage(
                            *value,
                            f32::from(area.width),
                            f32::from(slider.handle_width(area)),
                        );
                        log::debug!(
                            "[slider] {} drag begin at x={x} base_offset={base_offset}",
                            slider.id()
                        );
                        self.drags.insert(
                            slider.id().to_string(),
                            DragOrigin {
                                start_x: *x,
                                base_offset,
                            },
                        );
                    }
                }

                Event::Drag {
                    x,
                    button: MouseButton::Left,
                    ..
                } => {
                    let Some(origin) = self.drags.get(slider.id()) else {
                        continue;
                    };
                    if area.is_empty() {
                        continue;
                    }

                    let sample = DragSample::new(f32::from(origin.start_x), f32::from(*x));
                    let next = percentage_from_drag(
                        sample,
                        origin.base_offset,
                        f32::from(area.width),
                        f32::from(slider.handle_width(area)),
                    );
                    log::trace!("[slider] {} drag update x={x} -> {next}", slider.id());

                    if next != *value {
                        *value = next;
                        changed = true;
                    }
                }

                Event::Release {
                    button: MouseButton::Left,
                    ..
                } => {
                    if self.drags.remove(slider.id()).is_some() {
                        log::debug!("[slider] {} drag end at {value}", slider.id());
                    }
                }

                _ => {}
            }
        }

        changed
    }
}
