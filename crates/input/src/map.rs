//! Key mapping from terminal events to logical buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Which game's bindings to use. The two games share arrow keys but give
/// Up and Space different meanings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Platformer,
    Puzzle,
}

/// One logical button; each maps to one [`crate::types::InputFrame`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Jump,
    Down,
    Rotate,
    HardDrop,
    Pause,
    Reset,
    Quit,
}

impl Button {
    pub const COUNT: usize = 9;

    pub const ALL: [Button; Button::COUNT] = [
        Button::Left,
        Button::Right,
        Button::Jump,
        Button::Down,
        Button::Rotate,
        Button::HardDrop,
        Button::Pause,
        Button::Reset,
        Button::Quit,
    ];

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

/// Map a key to a button under `layout`.
pub fn map_key(layout: Layout, key: KeyEvent) -> Option<Button> {
    if should_quit(key) {
        return Some(Button::Quit);
    }
    let button = match (layout, key.code) {
        (_, KeyCode::Left | KeyCode::Char('a' | 'A')) => Button::Left,
        (_, KeyCode::Right | KeyCode::Char('d' | 'D')) => Button::Right,
        (_, KeyCode::Char('r' | 'R')) => Button::Reset,

        (Layout::Platformer, KeyCode::Up | KeyCode::Char(' ' | 'w' | 'W')) => Button::Jump,

        (Layout::Puzzle, KeyCode::Up | KeyCode::Char('w' | 'W')) => Button::Rotate,
        (Layout::Puzzle, KeyCode::Down | KeyCode::Char('s' | 'S')) => Button::Down,
        (Layout::Puzzle, KeyCode::Char(' ')) => Button::HardDrop,
        (Layout::Puzzle, KeyCode::Char('p' | 'P')) => Button::Pause,

        _ => return None,
    };
    Some(button)
}

/// q, Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (matches!(key.code, KeyCode::Char('c' | 'C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
