//! Keyboard bindings used during playback.

/// A key press, as reported by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    ArrowUp,
    ArrowDown,
    Space,
    Enter,
    Escape,
    Char(char),
}

impl Key {
    /// Parse a DOM-style key name (`"ArrowRight"`, `" "`, `"Escape"`, `"a"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            " " | "Space" | "Spacebar" => Key::Space,
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            },
        };
        Some(key)
    }
}

/// A navigation request understood by playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackCommand {
    Next,
    Prev,
    Exit,
}

impl PlaybackCommand {
    /// The command bound to `key`. Only Right, Left, Space and Escape are bound.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::ArrowRight | Key::Space => Some(PlaybackCommand::Next),
            Key::ArrowLeft => Some(PlaybackCommand::Prev),
            Key::Escape => Some(PlaybackCommand::Exit),
            _ => None,
        }
    }
}
