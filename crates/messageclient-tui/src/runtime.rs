//! Async runtime
//!
//! Event loop that owns the terminal and the application state: the single
//! place where widgets are mutated. `tokio::select!` multiplexes terminal
//! input with notices posted by client-owned tasks; each drain pulls the
//! queued messages into the transcript in FIFO order.

use std::{
    io::{self, Stdout, stdout},
    sync::Arc,
};

use crossterm::{
    ExecutableCommand,
    event::{Event, EventStream, KeyCode, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use messageclient_api::SharedClient;
use messageclient_app::{App, AppAction, AppEvent, KeyInput, MessageQueue, UiNotice};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;
use tokio::sync::mpsc;

use crate::ui;

/// Runtime errors.
#[derive(Debug, Error)]
pub enum RuntimeError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Window shell: terminal, app state, and the receiving end of the UI
/// dispatcher.
pub struct Runtime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    app: App,
    queue: Arc<MessageQueue>,
    client: SharedClient,
    notices: mpsc::UnboundedReceiver<UiNotice>,
}

impl Runtime {
    /// Take over the terminal and build the shell around `client`.
    pub fn new(
        client: SharedClient,
        queue: Arc<MessageQueue>,
        notices: mpsc::UnboundedReceiver<UiNotice>,
    ) -> Result<Self, RuntimeError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal, app: App::new(), queue, client, notices })
    }

    /// Run the main event loop until the user closes the window.
    pub async fn run(mut self) -> Result<(), RuntimeError> {
        self.render()?;

        let mut event_stream = EventStream::new();
        let mut notices_open = true;

        loop {
            let actions = tokio::select! {
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(event)) => self.handle_terminal_event(event),
                    Some(Err(e)) => return Err(RuntimeError::Io(e)),
                    None => break,
                },
                maybe_notice = self.notices.recv(), if notices_open => match maybe_notice {
                    Some(notice) => self.handle_notice(notice),
                    None => {
                        notices_open = false;
                        vec![]
                    },
                },
            };

            if self.process_actions(actions)? {
                break;
            }
        }

        Ok(())
    }

    /// Translate a terminal event into app events.
    fn handle_terminal_event(&mut self, event: Event) -> Vec<AppAction> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => match convert_key(key.code) {
                Some(key_input) => self.app.handle(AppEvent::Key(key_input)),
                None => vec![],
            },
            Event::Resize(cols, rows) => self.app.handle(AppEvent::Resize(cols, rows)),
            _ => vec![],
        }
    }

    /// Execute one posted notice on the UI task.
    fn handle_notice(&mut self, notice: UiNotice) -> Vec<AppAction> {
        match notice {
            UiNotice::Drain => {
                let mut actions = Vec::new();
                for message in self.queue.drain_available() {
                    actions.extend(self.app.handle(AppEvent::Message(message)));
                }
                actions
            },
            UiNotice::ConnectionStarted { address } => {
                self.app.handle(AppEvent::ConnectionStarted { address })
            },
            UiNotice::ConnectionClosed => self.app.handle(AppEvent::ConnectionClosed),
        }
    }

    /// Execute actions from the app. Returns `true` when quitting.
    fn process_actions(&mut self, actions: Vec<AppAction>) -> Result<bool, RuntimeError> {
        for action in actions {
            match action {
                AppAction::Render => self.render()?,
                AppAction::Quit => {
                    close_current_client(&self.client);
                    return Ok(true);
                },
                AppAction::Send { line } => {
                    if let Err(e) = self.client.get().send_message(&line) {
                        tracing::error!(error = %e, "failed to send message");
                        let actions =
                            self.app.handle(AppEvent::SendFailed { error: e.to_string() });
                        // Only renders come back from a send failure.
                        for action in actions {
                            if action == AppAction::Render {
                                self.render()?;
                            }
                        }
                    }
                },
            }
        }
        Ok(false)
    }

    /// Render the UI.
    fn render(&mut self) -> Result<(), RuntimeError> {
        self.terminal.draw(|frame| {
            ui::render(frame, &self.app);
        })?;
        Ok(())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Convert crossterm `KeyCode` to `KeyInput`.
fn convert_key(code: KeyCode) -> Option<KeyInput> {
    match code {
        KeyCode::Char(c) => Some(KeyInput::Char(c)),
        KeyCode::Enter => Some(KeyInput::Enter),
        KeyCode::Backspace => Some(KeyInput::Backspace),
        KeyCode::Delete => Some(KeyInput::Delete),
        KeyCode::Esc => Some(KeyInput::Esc),
        KeyCode::Left => Some(KeyInput::Left),
        KeyCode::Right => Some(KeyInput::Right),
        KeyCode::Up => Some(KeyInput::Up),
        KeyCode::Down => Some(KeyInput::Down),
        KeyCode::Home => Some(KeyInput::Home),
        KeyCode::End => Some(KeyInput::End),
        _ => None,
    }
}

/// Close the window's current client, reporting (not propagating) failure.
pub fn close_current_client(client: &SharedClient) {
    if let Err(e) = client.get().close() {
        tracing::error!(error = %e, "failed to close connection");
    }
}
