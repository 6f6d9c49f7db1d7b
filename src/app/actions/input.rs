//! Text input handling (compose form)

use crate::app::state::Panel;

use super::super::App;

impl App {
    pub(crate) fn handle_char(&mut self, c: char) {
        if self.state.panel() == Panel::Compose {
            self.state.compose.insert_char(c);
        }
    }

    pub(crate) fn handle_backspace(&mut self) {
        if self.state.panel() == Panel::Compose {
            self.state.compose.backspace();
        }
    }
}
