//! Keypress decoding
//!
//! Converts crossterm key events into the `(character, descriptor)` shape
//! the picker reasons about, including the raw byte sequence the key would
//! have produced on a VT terminal. The sequence is what the picker inspects
//! to discard stray escape sequences.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use regex::Regex;
use std::sync::LazyLock;

static ANSI_SEQUENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"[\x1b\x{9b}][\[\]()#;?]*(?:(?:(?:[a-zA-Z\d]*(?:;[a-zA-Z\d]*)*)?\x07)|(?:(?:\d{1,4}(?:;\d{0,4})*)?[\dA-PR-TZcf-ntqry=><~]))",
    )
    .expect("ANSI pattern is valid")
});

/// Whether `s` contains an ANSI escape sequence
///
/// A lone ESC byte is not a sequence.
#[must_use]
pub fn has_ansi(s: &str) -> bool {
    ANSI_SEQUENCE.is_match(s)
}

/// Symbolic key name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyName {
    Escape,
    Backspace,
    Return,
    Up,
    Down,
    Left,
    Right,
    /// `0`-`9` on the main row
    Digit(u8),
    /// Letter keys, lowercased (used for control combinations)
    Letter(char),
    /// Anything else that still produced a byte sequence
    Other,
}

impl KeyName {
    /// Whether this is one of the four arrow keys
    #[must_use]
    pub const fn is_arrow(self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}

/// A single raw input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    /// Printable character carried by the event, if any
    pub ch: Option<char>,
    /// Symbolic name, `None` for plain characters without one (space, punctuation)
    pub name: Option<KeyName>,
    /// Control modifier held
    pub ctrl: bool,
    /// Raw terminal byte sequence
    pub sequence: String,
}

impl KeyPress {
    /// Plain printable character
    #[must_use]
    pub fn char(c: char) -> Self {
        let name = if let Some(d) = c.to_digit(10) {
            #[allow(clippy::cast_possible_truncation)]
            Some(KeyName::Digit(d as u8))
        } else if c.is_ascii_alphabetic() {
            Some(KeyName::Letter(c.to_ascii_lowercase()))
        } else {
            None
        };

        Self {
            ch: Some(c),
            name,
            ctrl: false,
            sequence: c.to_string(),
        }
    }

    /// Named key with its terminal sequence
    #[must_use]
    pub fn named(name: KeyName, sequence: &str) -> Self {
        Self {
            ch: None,
            name: Some(name),
            ctrl: false,
            sequence: sequence.to_string(),
        }
    }

    /// Control + letter
    #[must_use]
    pub fn ctrl(letter: char) -> Self {
        let letter = letter.to_ascii_lowercase();
        let byte = (letter as u32).wrapping_sub('a' as u32).wrapping_add(1);
        Self {
            ch: None,
            name: Some(KeyName::Letter(letter)),
            ctrl: true,
            sequence: char::from_u32(byte).map(String::from).unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn escape() -> Self {
        Self::named(KeyName::Escape, "\x1b")
    }

    #[must_use]
    pub fn backspace() -> Self {
        Self::named(KeyName::Backspace, "\x7f")
    }

    #[must_use]
    pub fn enter() -> Self {
        Self::named(KeyName::Return, "\r")
    }

    #[must_use]
    pub fn up() -> Self {
        Self::named(KeyName::Up, "\x1b[A")
    }

    #[must_use]
    pub fn down() -> Self {
        Self::named(KeyName::Down, "\x1b[B")
    }

    #[must_use]
    pub fn right() -> Self {
        Self::named(KeyName::Right, "\x1b[C")
    }

    #[must_use]
    pub fn left() -> Self {
        Self::named(KeyName::Left, "\x1b[D")
    }

    /// Whether the raw sequence is an escape sequence
    #[must_use]
    pub fn is_escape_sequence(&self) -> bool {
        has_ansi(&self.sequence)
    }

    /// Whether this is an arrow key
    #[must_use]
    pub fn is_arrow(&self) -> bool {
        self.name.is_some_and(KeyName::is_arrow)
    }
}

fn function_key_sequence(n: u8) -> String {
    match n {
        1 => "\x1bOP".to_string(),
        2 => "\x1bOQ".to_string(),
        3 => "\x1bOR".to_string(),
        4 => "\x1bOS".to_string(),
        n => {
            let code = match n {
                5 => 15,
                6..=10 => u16::from(n) + 11,
                11 | 12 => u16::from(n) + 12,
                _ => u16::from(n) + 13,
            };
            format!("\x1b[{code}~")
        }
    }
}

impl From<KeyEvent> for KeyPress {
    fn from(key: KeyEvent) -> Self {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        let mut press = match key.code {
            KeyCode::Char(c) if ctrl && c.is_ascii_alphabetic() => Self::ctrl(c),
            KeyCode::Char(c) if alt => Self {
                ch: None,
                name: Some(KeyName::Other),
                ctrl: false,
                sequence: format!("\x1b{c}"),
            },
            KeyCode::Char(c) => Self::char(c),
            KeyCode::Esc => Self::escape(),
            KeyCode::Backspace => Self::backspace(),
            KeyCode::Enter => Self::enter(),
            KeyCode::Up => Self::up(),
            KeyCode::Down => Self::down(),
            KeyCode::Left => Self::left(),
            KeyCode::Right => Self::right(),
            KeyCode::Tab => Self::named(KeyName::Other, "\t"),
            KeyCode::BackTab => Self::named(KeyName::Other, "\x1b[Z"),
            KeyCode::Home => Self::named(KeyName::Other, "\x1b[H"),
            KeyCode::End => Self::named(KeyName::Other, "\x1b[F"),
            KeyCode::Insert => Self::named(KeyName::Other, "\x1b[2~"),
            KeyCode::Delete => Self::named(KeyName::Other, "\x1b[3~"),
            KeyCode::PageUp => Self::named(KeyName::Other, "\x1b[5~"),
            KeyCode::PageDown => Self::named(KeyName::Other, "\x1b[6~"),
            KeyCode::F(n) => Self::named(KeyName::Other, &function_key_sequence(n)),
            _ => Self::named(KeyName::Other, ""),
        };

        // Control on non-letter keys (ctrl-up etc.) only matters as a flag.
        press.ctrl |= ctrl;
        press
    }
}
