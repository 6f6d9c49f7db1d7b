//! Main event loop

use anyhow::Result;
use crossterm::event;
use std::time::Duration;

use crate::constants::{POLL_BUSY_MS, POLL_IDLE_MS};
use crate::input::{InputResult, handle_input};

use super::App;
use super::render_thread::RenderThread;

impl App {
    pub(crate) async fn event_loop(&mut self, render_thread: &RenderThread) -> Result<()> {
        loop {
            // Apply completed backend requests first (non-blocking)
            if self.process_service_events() {
                self.dirty = true;
            }

            // Render only when dirty (non-blocking - sends to render thread)
            if self.dirty && render_thread.render(self.state.clone()) {
                self.dirty = false;
            }

            // Poll faster while a request is in flight so spinners move
            let poll_timeout = if self.state.is_loading() {
                POLL_BUSY_MS
            } else {
                POLL_IDLE_MS
            };
            if event::poll(Duration::from_millis(poll_timeout))? {
                let evt = event::read()?;
                // Any input event (including resize) requires re-render
                self.dirty = true;
                match handle_input(evt, &self.state, &self.bindings) {
                    InputResult::Quit => break,
                    InputResult::Action(action) => self.handle_action(action).await?,
                    InputResult::Char(c) => self.handle_char(c),
                    InputResult::Backspace => self.handle_backspace(),
                    InputResult::Continue => {}
                }
            } else if self.state.is_loading() {
                // Keep the spinner animating
                self.dirty = true;
            }

            // Let spawned requests make progress on this thread's runtime
            tokio::task::yield_now().await;
        }

        Ok(())
    }
}
