/// Input events the grid consumes, decoupled from the terminal backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Key {
        key: Key,
        modifiers: Modifiers,
    },
    Click {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    Scroll {
        x: u16,
        y: u16,
        delta: i16,
    },
    Resize {
        width: u16,
        height: u16,
    },
}

/// Simplified key representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

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

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Translate a crossterm event into a grid event. Returns None for events
/// the grid has no use for (key release, hover, drag).
pub fn convert(event: &crossterm::event::Event) -> Option<Event> {
    use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

    match event {
        CtEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key {
            key: convert_key(key.code)?,
            modifiers: convert_modifiers(key.modifiers),
        }),
        CtEvent::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(button) => Some(Event::Click {
                x: mouse.column,
                y: mouse.row,
                button: convert_button(button),
            }),
            MouseEventKind::ScrollUp => Some(Event::Scroll {
                x: mouse.column,
                y: mouse.row,
                delta: -1,
            }),
            MouseEventKind::ScrollDown => Some(Event::Scroll {
                x: mouse.column,
                y: mouse.row,
                delta: 1,
            }),
            _ => None,
        },
        CtEvent::Resize(width, height) => Some(Event::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn convert_key(code: crossterm::event::KeyCode) -> Option<Key> {
    use crossterm::event::KeyCode;

    Some(match code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None,
    })
}

fn convert_modifiers(mods: crossterm::event::KeyModifiers) -> Modifiers {
    use crossterm::event::KeyModifiers;

    Modifiers {
        shift: mods.contains(KeyModifiers::SHIFT),
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
    }
}

fn convert_button(button: crossterm::event::MouseButton) -> MouseButton {
    use crossterm::event::MouseButton as CtButton;

    match button {
        CtButton::Left => MouseButton::Left,
        CtButton::Right => MouseButton::Right,
        CtButton::Middle => MouseButton::Middle,
    }
}
