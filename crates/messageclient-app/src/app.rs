//! Application state machine.
//!
//! [`App`] manages the interactive state of the window completely decoupled
//! from I/O: the transcript, the input line, and the connection state. It
//! consumes [`AppEvent`] inputs and produces [`AppAction`] instructions for
//! the runtime to execute.
//!
//! Inbound messages pass through the command interpreter here: a leading
//! `!` marks a local control message, anything else is appended to the
//! transcript verbatim.

use crate::{AppAction, AppEvent, Command, ConnectionState, KeyInput, Transcript, command};

/// UI state machine.
///
/// Pure state machine: no I/O dependencies, fully testable without a
/// terminal. All mutation happens on the UI task.
#[derive(Debug, Clone)]
pub struct App {
    /// Transcript shown in the main view.
    transcript: Transcript,
    /// Connection state for the status line.
    connection: ConnectionState,
    /// Whether the window is shown.
    visible: bool,
    /// Input line buffer.
    input_buffer: String,
    /// Cursor byte position in the input buffer, always on a character
    /// boundary.
    input_cursor: usize,
    /// Terminal dimensions (columns, rows).
    terminal_size: (u16, u16),
    /// Transient status message. `None` if no message.
    status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new App. The window starts visible; a later
    /// `ConnectionStarted` re-shows it.
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            connection: ConnectionState::Disconnected,
            visible: true,
            input_buffer: String::new(),
            input_cursor: 0,
            terminal_size: (80, 24),
            status_message: None,
        }
    }

    /// Process an event and return actions for the runtime.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize(cols, rows) => {
                self.terminal_size = (cols, rows);
                vec![AppAction::Render]
            },
            AppEvent::Message(message) => {
                self.handle_message(&message);
                vec![AppAction::Render]
            },
            AppEvent::ConnectionStarted { address } => {
                self.connection = ConnectionState::Connected { address };
                self.visible = true;
                vec![AppAction::Render]
            },
            AppEvent::ConnectionClosed => {
                self.connection = ConnectionState::Closed;
                vec![AppAction::Render]
            },
            AppEvent::SendFailed { error } => {
                self.status_message = Some(format!("send failed: {error}"));
                vec![AppAction::Render]
            },
        }
    }

    /// Run the command interpreter over one inbound message.
    fn handle_message(&mut self, message: &str) {
        match command::parse(message) {
            Some(Command::Clear) => self.transcript.clear(),
            Some(Command::Unknown) => {},
            None => self.transcript.append(message),
        }
    }

    /// Handle keyboard input.
    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        match key {
            KeyInput::Char(c) => {
                self.input_buffer.insert(self.input_cursor, c);
                self.input_cursor = self.input_cursor.saturating_add(c.len_utf8());
                vec![AppAction::Render]
            },
            KeyInput::Backspace => {
                if let Some(idx) = self.cursor_prev() {
                    self.input_buffer.remove(idx);
                    self.input_cursor = idx;
                }
                vec![AppAction::Render]
            },
            KeyInput::Delete => {
                if self.input_cursor < self.input_buffer.len() {
                    self.input_buffer.remove(self.input_cursor);
                }
                vec![AppAction::Render]
            },
            KeyInput::Left => {
                if let Some(idx) = self.cursor_prev() {
                    self.input_cursor = idx;
                }
                vec![AppAction::Render]
            },
            KeyInput::Right => {
                if let Some(c) = self.input_buffer[self.input_cursor..].chars().next() {
                    self.input_cursor = self.input_cursor.saturating_add(c.len_utf8());
                }
                vec![AppAction::Render]
            },
            KeyInput::Home => {
                self.input_cursor = 0;
                vec![AppAction::Render]
            },
            KeyInput::End => {
                self.input_cursor = self.input_buffer.len();
                vec![AppAction::Render]
            },
            KeyInput::Enter => self.handle_enter(),
            KeyInput::Esc => vec![AppAction::Quit],
            KeyInput::Up | KeyInput::Down => vec![],
        }
    }

    /// Byte index of the character before the cursor. `None` at the start.
    fn cursor_prev(&self) -> Option<usize> {
        self.input_buffer[..self.input_cursor].char_indices().next_back().map(|(idx, _)| idx)
    }

    /// Commit the input line: capture the text, clear the field, and hand
    /// the line (trailing newline appended) to the client.
    fn handle_enter(&mut self) -> Vec<AppAction> {
        let mut line = std::mem::take(&mut self.input_buffer);
        self.input_cursor = 0;
        line.push('\n');
        vec![AppAction::Send { line }, AppAction::Render]
    }

    /// Transcript shown in the main view.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current connection state.
    pub fn connection_state(&self) -> &ConnectionState {
        &self.connection
    }

    /// Whether the window is shown.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Input line contents.
    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    /// Cursor byte position in the input buffer.
    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }

    /// Terminal dimensions (columns, rows).
    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    /// Transient status message. `None` if no message.
    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }
}
