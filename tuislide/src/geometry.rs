//! Stateless coordinate conversion between drag gestures and the
//! slider's normalized percentage.
//!
//! The handle occupies width of its own, so the usable travel range is
//! the track width minus the handle width; both conversions below work
//! over that range. Everything here is pure and clamps instead of
//! failing: a handle as wide as (or wider than) its track simply cannot
//! travel.

/// A point-in-time snapshot of a pointer drag, carrying the gesture's
/// start and current horizontal positions in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub start_x: f32,
    pub current_x: f32,
}

impl DragSample {
    pub const fn new(start_x: f32, current_x: f32) -> Self {
        Self { start_x, current_x }
    }

    /// Horizontal distance travelled since the gesture began.
    pub fn delta(&self) -> f32 {
        self.current_x - self.start_x
    }
}

/// Convert a live drag into the percentage the handle has been dragged
/// to, given the offset the handle had when the gesture began.
///
/// The result is always in `[0, 1]`. When the travel range is zero or
/// negative the handle cannot move and the percentage is forced to 0.
pub fn percentage_from_drag(
    sample: DragSample,
    base_offset: f32,
    track_width: f32,
    handle_width: f32,
) -> f32 {
    let travel = track_width - handle_width;
    if travel <= 0.0 {
        return 0.0;
    }

    let adjusted = base_offset + sample.delta();
    (adjusted / travel).clamp(0.0, 1.0)
}

/// Convert a percentage into the handle's offset from the track's
/// leading edge.
///
/// The percentage is clamped to `[0, 1]`, keeping this symmetric with
/// [`percentage_from_drag`]; the result is always in
/// `[0, track_width - handle_width]`, degenerating to 0 when the handle
/// is at least as wide as the track.
pub fn offset_from_percentage(percentage: f32, track_width: f32, handle_width: f32) -> f32 {
    let travel = (track_width - handle_width).max(0.0);
    travel * percentage.clamp(0.0, 1.0)
}
