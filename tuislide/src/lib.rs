pub mod buffer;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod slider;
pub mod terminal;
pub mod text;
pub mod types;
pub mod visual;

pub use buffer::{Buffer, Cell};
pub use event::{translate, Event, Key, Modifiers, MouseButton};
pub use geometry::{offset_from_percentage, percentage_from_drag, DragSample};
pub use layout::Rect;
pub use slider::{Slider, SliderState};
pub use terminal::Terminal;
pub use types::{Color, Rgb, TextStyle};
pub use visual::{Knob, Track, Visual};
