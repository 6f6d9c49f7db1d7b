use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::config::KeybindingMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Movement
    Up,
    Down,
    Top,
    Bottom,
    PageUp,
    PageDown,

    // History
    Back,
    Forward,
    Refresh,
    Quit,

    // Mailboxes
    Inbox,
    Sent,
    Archive,
    Open,

    // Email detail
    Reply,
    ToggleArchive,

    // Composer
    Compose,
    NextField,
    PrevField,
    Send,
}

pub struct KeyBindings {
    bindings: HashMap<KeyEvent, Action>,
}

impl KeyBindings {
    pub fn new(mode: &KeybindingMode) -> Self {
        let bindings = match mode {
            KeybindingMode::Vim => Self::vim_bindings(),
            KeybindingMode::Arrows => Self::arrow_bindings(),
        };
        Self { bindings }
    }

    pub fn get(&self, event: &KeyEvent) -> Option<Action> {
        self.bindings.get(event).copied()
    }

    fn vim_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();

        // Movement
        map.insert(key('j'), Action::Down);
        map.insert(key('k'), Action::Up);
        map.insert(key('g'), Action::Top);
        map.insert(shift_key('G'), Action::Bottom);
        map.insert(ctrl_key('d'), Action::PageDown);
        map.insert(ctrl_key('u'), Action::PageUp);

        // History
        map.insert(key('h'), Action::Back);
        map.insert(key_code(KeyCode::Esc), Action::Back);
        map.insert(key('l'), Action::Forward);
        map.insert(ctrl_key('l'), Action::Refresh);
        map.insert(key('q'), Action::Quit);

        // Mailboxes
        map.insert(key('1'), Action::Inbox);
        map.insert(key('2'), Action::Sent);
        map.insert(key('3'), Action::Archive);
        map.insert(key_code(KeyCode::Enter), Action::Open);

        // Email detail
        map.insert(key('r'), Action::Reply);
        map.insert(key('a'), Action::ToggleArchive);

        // Composer
        map.insert(key('c'), Action::Compose);
        map.insert(key_code(KeyCode::Tab), Action::NextField);
        map.insert(shift_key_code(KeyCode::BackTab), Action::PrevField);
        map.insert(ctrl_key('s'), Action::Send);

        map
    }

    fn arrow_bindings() -> HashMap<KeyEvent, Action> {
        let mut map = HashMap::new();

        // Movement
        map.insert(key_code(KeyCode::Down), Action::Down);
        map.insert(key_code(KeyCode::Up), Action::Up);
        map.insert(key_code(KeyCode::Home), Action::Top);
        map.insert(key_code(KeyCode::End), Action::Bottom);
        map.insert(key_code(KeyCode::PageDown), Action::PageDown);
        map.insert(key_code(KeyCode::PageUp), Action::PageUp);

        // History (browser-style)
        map.insert(alt_key_code(KeyCode::Left), Action::Back);
        map.insert(key_code(KeyCode::Esc), Action::Back);
        map.insert(key_code(KeyCode::Backspace), Action::Back);
        map.insert(alt_key_code(KeyCode::Right), Action::Forward);
        map.insert(key_code(KeyCode::F(5)), Action::Refresh);
        map.insert(ctrl_key('q'), Action::Quit);

        // Mailboxes
        map.insert(key_code(KeyCode::F(1)), Action::Inbox);
        map.insert(key_code(KeyCode::F(2)), Action::Sent);
        map.insert(key_code(KeyCode::F(3)), Action::Archive);
        map.insert(key_code(KeyCode::Enter), Action::Open);

        // Email detail
        map.insert(ctrl_key('r'), Action::Reply);
        map.insert(ctrl_key('a'), Action::ToggleArchive);

        // Composer
        map.insert(ctrl_key('n'), Action::Compose);
        map.insert(key_code(KeyCode::Tab), Action::NextField);
        map.insert(shift_key_code(KeyCode::BackTab), Action::PrevField);
        map.insert(ctrl_key('s'), Action::Send);

        map
    }
}

fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

fn shift_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT)
}

fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn shift_key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::SHIFT)
}

fn alt_key_code(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::ALT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vim_bindings() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);

        assert_eq!(bindings.get(&key('j')), Some(Action::Down));
        assert_eq!(bindings.get(&key('1')), Some(Action::Inbox));
        assert_eq!(bindings.get(&key('h')), Some(Action::Back));
        assert_eq!(bindings.get(&key('l')), Some(Action::Forward));
        assert_eq!(bindings.get(&ctrl_key('s')), Some(Action::Send));
        assert_eq!(bindings.get(&key('q')), Some(Action::Quit));
    }

    #[test]
    fn test_arrow_bindings() {
        let bindings = KeyBindings::new(&KeybindingMode::Arrows);

        assert_eq!(bindings.get(&key_code(KeyCode::Down)), Some(Action::Down));
        assert_eq!(
            bindings.get(&alt_key_code(KeyCode::Left)),
            Some(Action::Back)
        );
        assert_eq!(
            bindings.get(&alt_key_code(KeyCode::Right)),
            Some(Action::Forward)
        );
        assert_eq!(bindings.get(&ctrl_key('q')), Some(Action::Quit));
        assert_eq!(bindings.get(&key('q')), None);
    }
}
