//! Main TUI application state and logic

use crate::sim::{Engine, OpKind};
use crate::structures::StructureKind;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

use super::panes::{
    render_buffer_pane, render_log_pane, render_status_bar, render_trace_pane, LogScrollState,
    StatusRenderData,
};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Buffer,
    Trace,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane (buffer -> trace -> log)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Buffer => FocusedPane::Trace,
            FocusedPane::Trace => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::Buffer,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Buffer => FocusedPane::Log,
            FocusedPane::Trace => FocusedPane::Buffer,
            FocusedPane::Log => FocusedPane::Trace,
        }
    }
}

/// The main application state
pub struct App {
    /// The structure engine being visualized
    pub engine: Engine,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Pending value entry (digits typed so far, at most two)
    pub entry: String,

    /// Per-pane scroll offsets
    pub buffer_scroll: usize,
    pub trace_scroll: usize,
    pub log_scroll: LogScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around the given engine
    pub fn new(engine: Engine) -> Self {
        App {
            engine,
            focused_pane: FocusedPane::Buffer,
            entry: String::new(),
            buffer_scroll: 0,
            trace_scroll: 0,
            log_scroll: LogScrollState::new(),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            // Drive the engine before drawing so the frame shows the
            // freshest phase and any auto-play step it triggered.
            let now = Instant::now();
            self.engine.advance(now);
            self.engine.poll_auto(now);

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Use poll with timeout so phases and auto-play keep moving
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, one-line status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        // Left column: buffer over trace; right column: log
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[0]);

        render_buffer_pane(
            frame,
            left_rows[0],
            self.engine.structure(),
            self.focused_pane == FocusedPane::Buffer,
            &mut self.buffer_scroll,
        );

        let verbs = self.engine.structure().kind().verbs();
        let verb = self.engine.trace().map(|t| match t.op {
            OpKind::Insert => verbs.0,
            OpKind::Remove => verbs.1,
        });
        render_trace_pane(
            frame,
            left_rows[1],
            self.engine.trace(),
            verb,
            self.focused_pane == FocusedPane::Trace,
            &mut self.trace_scroll,
        );

        render_log_pane(
            frame,
            columns[1],
            self.engine.log(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        let kind = self.engine.structure().kind();
        let mode = (kind == StructureKind::PriorityQueue).then(|| self.engine.mode());
        render_status_bar(
            frame,
            status_area,
            StatusRenderData {
                message: &self.status_message,
                kind,
                capacity: self.engine.structure().capacity(),
                mode,
                entry: &self.entry,
                busy_phase: self.engine.active_phase(),
                armed: self.engine.is_armed(),
                inserts: self.engine.counter(OpKind::Insert),
                removes: self.engine.counter(OpKind::Remove),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            // Digits feed the pending value entry (two digits keep it 0-99)
            KeyCode::Char(c @ '0'..='9') => {
                if self.entry.len() < 2 {
                    self.entry.push(c);
                }
                self.status_message = format!("next value: {}", self.entry);
            }
            KeyCode::Backspace => {
                self.entry.pop();
                self.status_message = if self.entry.is_empty() {
                    String::from("next value: random")
                } else {
                    format!("next value: {}", self.entry)
                };
            }
            KeyCode::Esc => {
                self.entry.clear();
                self.status_message = String::from("next value: random");
            }
            KeyCode::Enter | KeyCode::Char('i') => self.submit_insert(),
            KeyCode::Char('d') => self.submit_remove(),
            KeyCode::Char('f') => match self.engine.random_fill() {
                Ok(count) => self.status_message = format!("random fill: {} elements", count),
                Err(rej) => self.status_message = format!("rejected: {}", rej),
            },
            KeyCode::Char(' ') => {
                // Debounce to prevent key repeat spam
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    let armed = self.engine.toggle_auto();
                    self.status_message = if armed {
                        String::from("auto-play armed")
                    } else {
                        String::from("auto-play disarmed")
                    };
                }
            }
            KeyCode::Char('r') => match self.engine.reset() {
                Ok(()) => self.status_message = String::from("reset"),
                Err(rej) => self.status_message = format!("rejected: {}", rej),
            },
            KeyCode::Char('s') => self.select_variant(StructureKind::Stack),
            KeyCode::Char('l') => self.select_variant(StructureKind::LinearQueue),
            KeyCode::Char('c') => self.select_variant(StructureKind::CircularQueue),
            KeyCode::Char('p') => self.select_variant(StructureKind::PriorityQueue),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_capacity(1),
            KeyCode::Char('-') => self.adjust_capacity(-1),
            KeyCode::Char('m') => match self.engine.toggle_mode() {
                Ok(mode) => self.status_message = format!("priority mode: {}", mode.label()),
                Err(rej) => self.status_message = format!("rejected: {}", rej),
            },
            KeyCode::Up => self.scroll_focused(-1),
            KeyCode::Down => self.scroll_focused(1),
            _ => {}
        }
    }

    fn submit_insert(&mut self) {
        let requested = self.entry.parse::<i64>().ok();
        match self.engine.insert(Instant::now(), requested) {
            Ok(()) => {
                self.entry.clear();
                self.status_message = String::from("insert running...");
            }
            Err(rej) => self.status_message = format!("rejected: {}", rej),
        }
    }

    fn submit_remove(&mut self) {
        match self.engine.remove(Instant::now()) {
            Ok(()) => self.status_message = String::from("remove running..."),
            Err(rej) => self.status_message = format!("rejected: {}", rej),
        }
    }

    fn select_variant(&mut self, kind: StructureKind) {
        match self.engine.select(kind) {
            Ok(()) => self.status_message = format!("{} selected", kind.label()),
            Err(rej) => self.status_message = format!("rejected: {}", rej),
        }
    }

    fn adjust_capacity(&mut self, delta: i32) {
        match self.engine.adjust_capacity(delta) {
            Ok(capacity) => self.status_message = format!("capacity: {}", capacity),
            Err(rej) => self.status_message = format!("rejected: {}", rej),
        }
    }

    fn scroll_focused(&mut self, delta: i32) {
        let bump = |offset: &mut usize| {
            if delta < 0 {
                *offset = offset.saturating_sub(1);
            } else {
                *offset = offset.saturating_add(1);
            }
        };
        match self.focused_pane {
            FocusedPane::Buffer => bump(&mut self.buffer_scroll),
            FocusedPane::Trace => bump(&mut self.trace_scroll),
            FocusedPane::Log => bump(&mut self.log_scroll.offset),
        }
    }
}
