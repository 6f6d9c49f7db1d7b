//! Navigation actions (movement, history replay, refresh)

use crate::app::state::Panel;
use crate::constants::PAGE_STEP;

use super::super::App;

impl App {
    /// Replay the previous history entry without pushing a new one
    pub(crate) fn history_back(&mut self) {
        match self.history.back().cloned() {
            Some(nav) => {
                tracing::debug!("History back to {:?}", nav);
                self.enter(nav);
            }
            None => self.state.set_status("No earlier page"),
        }
    }

    /// Replay the next history entry without pushing a new one
    pub(crate) fn history_forward(&mut self) {
        match self.history.forward().cloned() {
            Some(nav) => {
                tracing::debug!("History forward to {:?}", nav);
                self.enter(nav);
            }
            None => self.state.set_status("No later page"),
        }
    }

    /// Re-enter the active history entry, refetching its data
    pub(crate) fn refresh(&mut self) {
        let nav = self
            .history
            .current()
            .cloned()
            .unwrap_or_else(|| self.state.nav.clone());
        self.enter(nav);
    }

    pub(super) fn move_up(&mut self) {
        match self.state.panel() {
            Panel::Mailbox => self.state.mailbox.move_up(),
            Panel::EmailDetail => self.state.reader.scroll_up(),
            Panel::Compose => self.prev_composer_field(),
        }
    }

    pub(super) fn move_down(&mut self) {
        match self.state.panel() {
            Panel::Mailbox => self.state.mailbox.move_down(),
            Panel::EmailDetail => self.state.reader.scroll_down(),
            Panel::Compose => self.next_composer_field(),
        }
    }

    /// Move a page; `direction` is -1 or 1
    pub(super) fn move_page(&mut self, direction: isize) {
        let delta = direction * PAGE_STEP as isize;
        match self.state.panel() {
            Panel::Mailbox => self.state.mailbox.move_by(delta),
            Panel::EmailDetail => self.state.reader.scroll_by(delta),
            Panel::Compose => {}
        }
    }

    pub(super) fn move_to_top(&mut self) {
        match self.state.panel() {
            Panel::Mailbox => self.state.mailbox.move_to_top(),
            Panel::EmailDetail => self.state.reader.scroll = 0,
            Panel::Compose => {}
        }
    }

    pub(super) fn move_to_bottom(&mut self) {
        if self.state.panel() == Panel::Mailbox {
            self.state.mailbox.move_to_bottom();
        }
    }
}
