//! Application core - owns the active panel, navigation history and the
//! requests that populate each panel

mod actions;
mod event_loop;
mod handlers;
pub mod history;
pub mod render_thread;
pub mod state;

use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::mpsc;

use render_thread::RenderThread;

use crate::config::Config;
use crate::input::KeyBindings;
use crate::mail::EmailService;
use handlers::ServiceEvent;
use history::History;
use state::{AppState, HistoryInfo, NavigationState};

pub struct App {
    pub(crate) service: Arc<dyn EmailService>,
    pub(crate) state: AppState,
    pub(crate) history: History,
    pub(crate) bindings: KeyBindings,
    /// Completions of spawned backend requests
    event_tx: mpsc::UnboundedSender<ServiceEvent>,
    event_rx: mpsc::UnboundedReceiver<ServiceEvent>,
    /// Dirty flag: when true, UI needs re-render. Skips renders when nothing changed.
    pub(crate) dirty: bool,
}

impl App {
    pub fn new(config: &Config, service: Arc<dyn EmailService>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let state = AppState {
            server: config.server.base_url.clone(),
            keys: config.ui.keybinding_mode,
            ..Default::default()
        };

        Self {
            service,
            state,
            history: History::default(),
            bindings: KeyBindings::new(&config.ui.keybinding_mode),
            event_tx,
            event_rx,
            dirty: true, // Start dirty for initial render
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Spawn background render thread (owns terminal setup/teardown)
        let render_thread = RenderThread::spawn()?;

        // Initial state: the inbox
        self.show_mailbox("inbox");

        let result = self.event_loop(&render_thread).await;

        // Shutdown render thread (handles terminal cleanup)
        render_thread.shutdown();

        result
    }

    /// Record `nav` in history and enter it
    pub(crate) fn navigate(&mut self, nav: NavigationState) {
        tracing::info!("Navigating to {:?}", nav);
        self.history.push(nav.clone());
        self.enter(nav);
    }

    /// Make `nav` the active state and issue the requests that populate it.
    /// Does not touch history, so replaying an entry is safe.
    pub(crate) fn enter(&mut self, nav: NavigationState) {
        self.state.visit += 1;
        let visit = self.state.visit;
        self.state.nav = nav.clone();
        self.state.clear_status();

        match nav {
            NavigationState::Mailbox { mailbox } => self.load_mailbox(mailbox, visit),
            NavigationState::Compose { draft } => self.state.compose.open(draft),
            NavigationState::EmailDetail { id, from_sent } => {
                self.load_email(id, from_sent, visit)
            }
        }

        self.sync_history_info();
        self.dirty = true;
    }

    fn sync_history_info(&mut self) {
        self.state.history = HistoryInfo {
            position: self.history.position(),
            len: self.history.len(),
            can_go_back: self.history.can_go_back(),
            can_go_forward: self.history.can_go_forward(),
        };
    }

    /// Run `request` on the runtime and deliver its event to the loop
    pub(crate) fn spawn_request<F>(&self, request: F)
    where
        F: Future<Output = ServiceEvent> + Send + 'static,
    {
        let event_tx = self.event_tx.clone();
        tokio::spawn(async move {
            let event = request.await;
            if event_tx.send(event).is_err() {
                tracing::debug!("Service event dropped: receiver closed");
            }
        });
    }

    /// Apply every completed request without waiting. Returns true if any arrived.
    pub(crate) fn process_service_events(&mut self) -> bool {
        let mut had_events = false;
        while let Ok(event) = self.event_rx.try_recv() {
            had_events = true;
            self.handle_service_event(event);
        }
        had_events
    }
}
