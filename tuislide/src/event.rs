use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseEventKind};

/// High-level input events.
///
/// Mouse events carry raw cell coordinates; widgets hit-test themselves
/// against the rect the host measured for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button press
    Click { x: u16, y: u16, button: MouseButton },
    /// Mouse moved with a button held
    Drag { x: u16, y: u16, button: MouseButton },
    /// Mouse button release
    Release { x: u16, y: u16, button: MouseButton },
    /// Mouse moved with no button held
    MouseMove { x: u16, y: u16 },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Tab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Translate raw crossterm events into [`Event`]s.
///
/// Unmapped input (scroll wheels, unknown keys, key repeats on
/// platforms that report them) is dropped.
pub fn translate(raw: &[CrosstermEvent]) -> Vec<Event> {
    let mut events = Vec::new();

    for event in raw {
        match event {
            CrosstermEvent::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(key) = convert_key(key_event.code) {
                    events.push(Event::Key {
                        key,
                        modifiers: convert_modifiers(key_event.modifiers),
                    });
                }
            }

            CrosstermEvent::Mouse(mouse_event) => {
                let x = mouse_event.column;
                let y = mouse_event.row;

                match mouse_event.kind {
                    MouseEventKind::Down(button) => events.push(Event::Click {
                        x,
                        y,
                        button: convert_button(button),
                    }),
                    MouseEventKind::Drag(button) => events.push(Event::Drag {
                        x,
                        y,
                        button: convert_button(button),
                    }),
                    MouseEventKind::Up(button) => events.push(Event::Release {
                        x,
                        y,
                        button: convert_button(button),
                    }),
                    MouseEventKind::Moved => events.push(Event::MouseMove { x, y }),
                    _ => {}
                }
            }

            CrosstermEvent::Resize(width, height) => events.push(Event::Resize {
                width: *width,
                height: *height,
            }),

            _ => {}
        }
    }

    events
}

fn convert_key(code: crossterm::event::KeyCode) -> Option<Key> {
    use crossterm::event::KeyCode;
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        _ => None,
    }
}

fn convert_modifiers(mods: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers;
    Modifiers {
        shift: mods.contains(KeyModifiers::SHIFT),
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

fn convert_button(btn: crossterm::event::MouseButton) -> MouseButton {
    use crossterm::event::MouseButton as CtBtn;
    match btn {
        CtBtn::Left => MouseButton::Left,
        CtBtn::Right => MouseButton::Right,
        CtBtn::Middle => MouseButton::Middle,
    }
}
