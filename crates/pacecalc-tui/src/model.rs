//! TUI application model (Elm architecture).
//!
//! The model is the current input snapshot plus mode, unit, and focus.
//! Every key action mutates the model and the view re-derives the result
//! on the next render; recomputation is synchronous O(1) arithmetic, so
//! there are no worker threads or message channels.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use pacecalc_core::{compute, CalcMode, CalcResult, Field, InputSnapshot, Unit};

use crate::footer::render_footer;
use crate::form::render_form;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::result_panel::render_result;

/// Maximum characters accepted per input field.
const MAX_FIELD_LEN: usize = 6;

/// Number of quick-example presets.
const EXAMPLE_COUNT: usize = 3;

/// Quick-example presets: one filled-in scenario per mode, all in km.
fn example(index: usize) -> (CalcMode, InputSnapshot) {
    match index {
        // 10K in 50:00 -> what pace per km?
        0 => (
            CalcMode::TimeToPace,
            InputSnapshot {
                distance: "10".into(),
                minutes: "50".into(),
                ..Default::default()
            },
        ),
        // 5:30/km for a half marathon -> finish time?
        1 => (
            CalcMode::PaceToTime,
            InputSnapshot {
                distance: "21.1".into(),
                pace_minutes: "5".into(),
                pace_seconds: "30".into(),
                ..Default::default()
            },
        ),
        // 6:00/km for 30 minutes -> how far?
        _ => (
            CalcMode::DurationToDistance,
            InputSnapshot {
                minutes: "30".into(),
                pace_minutes: "6".into(),
                pace_seconds: "0".into(),
                ..Default::default()
            },
        ),
    }
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Active calculation mode.
    pub mode: CalcMode,
    /// Active distance unit.
    pub unit: Unit,
    /// Raw input fields.
    pub snapshot: InputSnapshot,
    /// Index of the focused field within the mode's visible fields.
    pub focus: usize,
    /// Next quick-example preset to load.
    pub example_idx: usize,
}

impl TuiApp {
    /// Create a new TUI app with empty inputs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_quit: false,
            mode: CalcMode::default(),
            unit: Unit::default(),
            snapshot: InputSnapshot::new(),
            focus: 0,
            example_idx: 0,
        }
    }

    /// The field currently focused.
    #[must_use]
    pub fn focused_field(&self) -> Field {
        let fields = self.mode.visible_fields();
        fields[self.focus.min(fields.len() - 1)]
    }

    /// Derive the current result: validity gate ANDed with the engine.
    #[must_use]
    pub fn result(&self) -> Option<CalcResult> {
        if self.snapshot.has_valid_inputs(self.mode) {
            compute(self.mode, &self.snapshot, self.unit)
        } else {
            None
        }
    }

    /// Handle a keyboard action (Elm Update).
    pub fn handle_key_action(&mut self, action: KeyAction) {
        tracing::trace!(?action, "key action");
        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::NextField => {
                self.focus = (self.focus + 1) % self.mode.visible_fields().len();
            }
            KeyAction::PrevField => {
                let len = self.mode.visible_fields().len();
                self.focus = (self.focus + len - 1) % len;
            }
            KeyAction::CycleMode => {
                self.mode = self.mode.next();
                self.focus = 0;
            }
            KeyAction::ToggleUnit => {
                self.unit = self.unit.toggle();
            }
            KeyAction::ClearAll => {
                self.snapshot.clear();
                self.focus = 0;
            }
            KeyAction::LoadExample => {
                let (mode, snapshot) = example(self.example_idx);
                self.mode = mode;
                self.snapshot = snapshot;
                self.unit = Unit::Km;
                self.focus = 0;
                self.example_idx = (self.example_idx + 1) % EXAMPLE_COUNT;
            }
            KeyAction::Input(c) => {
                self.input_char(c);
            }
            KeyAction::Backspace => {
                let field = self.focused_field();
                self.snapshot.field_mut(field).pop();
            }
            KeyAction::None => {}
        }
    }

    /// Append a character to the focused field if it is admissible.
    fn input_char(&mut self, c: char) {
        let field = self.focused_field();
        let text = self.snapshot.field_mut(field);
        if text.len() >= MAX_FIELD_LEN {
            return;
        }
        if c == '.' && (!field.is_decimal() || text.contains('.')) {
            return;
        }
        text.push(c);
    }

    /// Compute the screen layout.
    ///
    /// Returns (header, form, result, footer) rects. The form and result
    /// panels split the middle area left/right.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(9),    // main content
                Constraint::Length(2), // footer
            ])
            .split(area);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(45), // input form
                Constraint::Percentage(55), // result panel
            ])
            .split(outer[1]);

        (outer[0], main[0], main[1], outer[2])
    }

    /// Render the full TUI view (Elm View).
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, form_area, result_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(frame, header_area, self.mode, self.unit);
        render_form(
            frame,
            form_area,
            self.mode,
            self.unit,
            &self.snapshot,
            self.focus,
        );
        let result = self.result();
        render_result(frame, result_area, self.mode, &self.snapshot, result.as_ref());
        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, runs the poll/update/render loop, and tears
    /// down on exit.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                if let Event::Key(key_event) = event::read()? {
                    let action = map_key(key_event);
                    self.handle_key_action(action);
                }
            }
        }

        Self::teardown_terminal(&mut terminal)?;
        Ok(())
    }
}

impl Default for TuiApp {
    fn default() -> Self {
        Self::new()
    }
}
