use ratatui::Frame;

use super::composer::render_composer;
use super::mailbox::render_mailbox;
use super::reader::render_reader;
use crate::app::state::{AppState, NavigationState};

/// Draw the single active panel; the others are not rendered at all
pub fn render(frame: &mut Frame, state: &AppState) {
    match state.nav {
        NavigationState::Mailbox { mailbox } => render_mailbox(frame, state, mailbox),
        NavigationState::Compose { .. } => render_composer(frame, state),
        NavigationState::EmailDetail { .. } => render_reader(frame, state),
    }
}
