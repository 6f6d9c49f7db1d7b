use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::keybindings::{Action, KeyBindings};
use crate::app::state::{AppState, Panel};

pub enum InputResult {
    Continue,
    Quit,
    Action(Action),
    Char(char),
    Backspace,
}

pub fn handle_input(event: Event, state: &AppState, bindings: &KeyBindings) -> InputResult {
    match event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
            handle_key(key_event, state, bindings)
        }
        _ => InputResult::Continue,
    }
}

fn handle_key(key: KeyEvent, state: &AppState, bindings: &KeyBindings) -> InputResult {
    if is_text_input_mode(state) {
        return handle_text_input(key, bindings);
    }

    match bindings.get(&key) {
        Some(Action::Quit) => InputResult::Quit,
        Some(action) => InputResult::Action(action),
        None => InputResult::Continue,
    }
}

fn is_text_input_mode(state: &AppState) -> bool {
    state.panel() == Panel::Compose
}

fn handle_text_input(key: KeyEvent, bindings: &KeyBindings) -> InputResult {
    let is_typing = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    // Plain characters and editing keys always belong to the form
    match key.code {
        KeyCode::Char(c) if is_typing => return InputResult::Char(c),
        KeyCode::Backspace if is_typing => return InputResult::Backspace,
        KeyCode::Enter if is_typing => return InputResult::Char('\n'),
        KeyCode::Tab => return InputResult::Action(Action::NextField),
        KeyCode::BackTab => return InputResult::Action(Action::PrevField),
        KeyCode::Esc => return InputResult::Action(Action::Back),
        _ => {}
    }

    // Then the control actions that make sense while composing
    match bindings.get(&key) {
        Some(Action::Quit) => InputResult::Quit,
        Some(
            action @ (Action::Send
            | Action::Back
            | Action::Forward
            | Action::NextField
            | Action::PrevField),
        ) => InputResult::Action(action),
        _ => InputResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::NavigationState;
    use crate::config::KeybindingMode;
    use crate::mail::ComposeDraft;

    fn compose_state() -> AppState {
        AppState {
            nav: NavigationState::Compose {
                draft: ComposeDraft::default(),
            },
            ..Default::default()
        }
    }

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_quit_action() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        let state = AppState::default();

        let result = handle_input(
            press(KeyCode::Char('q'), KeyModifiers::NONE),
            &state,
            &bindings,
        );

        assert!(matches!(result, InputResult::Quit));
    }

    #[test]
    fn test_compose_types_bound_letters() {
        let bindings = KeyBindings::new(&KeybindingMode::Vim);
        let state = compose_state();

        for c in ['h', 'q', 'j', '1'] {
            let result = handle_input(press(KeyCode::Char(c), KeyModifiers::NONE), &state, &bindings);
            assert!(matches!(result, InputResult::Char(typed) if typed == c));
        }
    }

    #[test]
    fn test_compose_control_keys() {
        let bindings = KeyBindings::new(&KeybindingMode::Arrows);
        let state = compose_state();

        let send = handle_input(
            press(KeyCode::Char('s'), KeyModifiers::CONTROL),
            &state,
            &bindings,
        );
        assert!(matches!(send, InputResult::Action(Action::Send)));

        // Backspace edits instead of navigating back
        let backspace = handle_input(press(KeyCode::Backspace, KeyModifiers::NONE), &state, &bindings);
        assert!(matches!(backspace, InputResult::Backspace));

        let back = handle_input(press(KeyCode::Left, KeyModifiers::ALT), &state, &bindings);
        assert!(matches!(back, InputResult::Action(Action::Back)));

        // Reply is meaningless while composing
        let reply = handle_input(
            press(KeyCode::Char('r'), KeyModifiers::CONTROL),
            &state,
            &bindings,
        );
        assert!(matches!(reply, InputResult::Continue));
    }
}
