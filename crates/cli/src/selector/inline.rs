//! Built-in full-screen fuzzy picker.
//!
//! Typing filters the list (Skim-style fuzzy matching, best match first),
//! Up/Down or Ctrl-P/Ctrl-N move the selection, Enter picks and Esc or Ctrl-C
//! cancels.

use std::cmp::Reverse;
use std::io::{self, stdout, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Color::{DarkBlue, DarkGreen, Reset, Yellow};
use crossterm::style::{
    Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{queue, ExecutableCommand};
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use itertools::Itertools;

use cmdy_core::error::{Error, Result};
use cmdy_core::menu::Selector;

/// Rows taken by the header and the filter line.
const CHROME_ROWS: u16 = 2;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = stdout().execute(LeaveAlternateScreen);
    }
}

/// Direction to move the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CycleDirection {
    Up,
    Down,
}

/// What a key press asks the picker to do.
#[derive(Debug, PartialEq, Eq)]
pub enum KeyAction {
    Continue,
    Accept,
    Cancel,
}

/// Selection, scrolling and filter state of the picker.
#[derive(Clone, PartialEq, Debug)]
pub struct PickerState {
    pub selected_index: usize,
    pub offset: usize,
    pub height: u16,
    pub width: u16,
    pub filter_text: String,
}

impl PickerState {
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            selected_index: 0,
            offset: 0,
            height: height.saturating_sub(CHROME_ROWS).max(1),
            width,
            filter_text: String::new(),
        }
    }

    /// Moves the selection, wrapping at both ends and keeping it in view.
    pub fn move_selection(&mut self, direction: CycleDirection, visible_count: usize) {
        if visible_count == 0 {
            return;
        }

        let height = self.height as usize;
        match direction {
            CycleDirection::Up => {
                if self.selected_index == 0 {
                    self.selected_index = visible_count - 1;
                    self.offset = self.selected_index.saturating_sub(height - 1);
                } else {
                    self.selected_index -= 1;
                    if self.selected_index < self.offset {
                        self.offset = self.selected_index;
                    }
                }
            }
            CycleDirection::Down => {
                let next = (self.selected_index + 1) % visible_count;
                if next < self.selected_index {
                    self.offset = 0;
                } else if next >= self.offset + height {
                    self.offset = next + 1 - height;
                }
                self.selected_index = next;
            }
        }
    }

    /// Pulls the selection back inside a list that shrank.
    pub fn clamp(&mut self, visible_count: usize) {
        if self.selected_index >= visible_count {
            self.selected_index = visible_count.saturating_sub(1);
        }
        if self.offset > self.selected_index {
            self.offset = self.selected_index;
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height.saturating_sub(CHROME_ROWS).max(1);
        let height = self.height as usize;
        if self.selected_index >= self.offset + height {
            self.offset = self.selected_index + 1 - height;
        }
    }

    fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.offset = 0;
    }
}

/// Indexes into `displays` that match `filter`, best match first.
///
/// An empty filter keeps every entry in its original order; equal scores keep
/// their original relative order.
#[must_use]
pub fn filter_displays(matcher: &SkimMatcherV2, displays: &[&str], filter: &str) -> Vec<usize> {
    if filter.is_empty() {
        return (0..displays.len()).collect();
    }

    displays
        .iter()
        .enumerate()
        .filter_map(|(i, display)| matcher.fuzzy_match(display, filter).map(|score| (score, i)))
        .sorted_by_key(|(score, i)| (Reverse(*score), *i))
        .map(|(_, i)| i)
        .collect()
}

/// Applies a key press to the picker state.
pub fn handle_key_event(
    key_event: KeyEvent,
    state: &mut PickerState,
    visible_count: usize,
) -> KeyAction {
    let control = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Char('c') if control => KeyAction::Cancel,
        KeyCode::Enter => KeyAction::Accept,
        KeyCode::Up | KeyCode::BackTab => {
            state.move_selection(CycleDirection::Up, visible_count);
            KeyAction::Continue
        }
        KeyCode::Char('p') if control => {
            state.move_selection(CycleDirection::Up, visible_count);
            KeyAction::Continue
        }
        KeyCode::Down | KeyCode::Tab => {
            state.move_selection(CycleDirection::Down, visible_count);
            KeyAction::Continue
        }
        KeyCode::Char('n') if control => {
            state.move_selection(CycleDirection::Down, visible_count);
            KeyAction::Continue
        }
        KeyCode::Backspace => {
            if state.filter_text.pop().is_some() {
                state.reset_selection();
            }
            KeyAction::Continue
        }
        KeyCode::Char(c) if !control => {
            state.filter_text.push(c);
            state.reset_selection();
            KeyAction::Continue
        }
        _ => KeyAction::Continue,
    }
}

fn redraw(
    stdout: &mut Stdout,
    header: &str,
    displays: &[&str],
    visible: &[usize],
    state: &PickerState,
) -> io::Result<()> {
    let width = state.width as usize;

    queue!(
        stdout,
        Clear(ClearType::All),
        MoveTo(0, 0),
        SetBackgroundColor(DarkGreen),
        Print(format!("{:<width$}", format!("  {header}   {}/{}", visible.len(), displays.len()))),
        SetBackgroundColor(Reset),
    )?;

    if visible.is_empty() {
        queue!(
            stdout,
            MoveTo(0, 1),
            SetForegroundColor(Color::Red),
            Print("No matching options!"),
            SetAttribute(Attribute::Reset),
        )?;
    }

    let rows = visible
        .iter()
        .enumerate()
        .skip(state.offset)
        .take(state.height as usize);

    for (row, (position, display_index)) in rows.enumerate() {
        queue!(stdout, MoveTo(0, row as u16 + 1))?;

        let content = format!("{:<width$}", format!("  {}", displays[*display_index]));
        if position == state.selected_index {
            queue!(
                stdout,
                SetAttribute(Attribute::Bold),
                SetBackgroundColor(DarkBlue),
                SetForegroundColor(Yellow),
                Print(content),
                SetAttribute(Attribute::Reset),
                SetBackgroundColor(Reset),
                SetForegroundColor(Reset),
            )?;
        } else {
            queue!(stdout, Print(content))?;
        }
    }

    queue!(
        stdout,
        MoveTo(0, state.height + 1),
        SetAttribute(Attribute::Bold),
        Print(format!("> {}", state.filter_text)),
        SetAttribute(Attribute::Reset),
    )?;

    stdout.flush()
}

fn run_picker(displays: &[&str], header: &str) -> io::Result<Option<String>> {
    let mut stdout = stdout();

    stdout.execute(EnterAlternateScreen)?;
    enable_raw_mode()?;
    let _raw_mode_guard = RawModeGuard; // Restores the terminal on every return path

    let (width, height) = terminal::size()?;
    let mut state = PickerState::new(width, height);
    let matcher = SkimMatcherV2::default();

    loop {
        let visible = filter_displays(&matcher, displays, &state.filter_text);
        state.clamp(visible.len());
        redraw(&mut stdout, header, displays, &visible, &state)?;

        match event::read()? {
            Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                match handle_key_event(key_event, &mut state, visible.len()) {
                    KeyAction::Continue => {}
                    KeyAction::Cancel => return Ok(None),
                    KeyAction::Accept => match visible.get(state.selected_index) {
                        Some(display_index) => {
                            return Ok(Some(displays[*display_index].to_string()))
                        }
                        None => queue!(stdout, Print("\x07"))?,
                    },
                }
            }
            Event::Resize(width, height) => state.resize(width, height),
            _ => {}
        }
    }
}

/// Picker drawn with crossterm, used when `fzf` is unavailable.
#[derive(Debug, Default)]
pub struct InlineSelector;

impl Selector for InlineSelector {
    fn select(&mut self, displays: &[&str], header: &str) -> Result<Option<String>> {
        run_picker(displays, header).map_err(|e| Error::Selector(format!("terminal error: {e}")))
    }
}
