//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use syllabus_core::{Board, CollectionKind, ManualClock};
use syllabus_tui::{LinkOpener, UiState, draw};
use syllabus_types::ui::UiOptions;

pub const START_MILLIS: i64 = 1_700_000_000_000;

/// A board whose ids start at [`START_MILLIS`] and advance by one per entry.
pub fn board() -> Board {
    Board::new(Box::new(ManualClock::new(START_MILLIS, 1)))
}

/// Fill the form of `kind` with `values` (one per field) and submit it.
pub fn add(board: &mut Board, kind: CollectionKind, values: &[&str]) -> bool {
    for (index, value) in values.iter().enumerate() {
        if let Some(field) = board.form_mut(kind).field_mut(index) {
            field.set_text(value);
        }
    }
    board.submit(kind).is_some()
}

pub fn names(board: &Board, kind: CollectionKind) -> Vec<String> {
    board
        .store()
        .names(kind)
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Labels of `kind`'s rendered list, in live order.
pub fn labels(board: &Board, kind: CollectionKind) -> Vec<String> {
    board
        .view(kind)
        .items()
        .iter()
        .map(|item| item.content().label().to_string())
        .collect()
}

/// Records every URL it is asked to open.
#[derive(Debug, Default, Clone)]
pub struct RecordingOpener {
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingOpener {
    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// A board, UI state and in-memory terminal wired together.
pub struct Harness {
    pub board: Board,
    pub ui: UiState,
    pub opener: RecordingOpener,
    terminal: Terminal<TestBackend>,
}

impl Harness {
    pub fn new(width: u16, height: u16) -> Self {
        let opener = RecordingOpener::default();
        let ui = UiState::with_opener(UiOptions::default(), Box::new(opener.clone()));
        Self {
            board: board(),
            ui,
            opener,
            terminal: Terminal::new(TestBackend::new(width, height)).expect("terminal"),
        }
    }

    pub fn draw(&mut self) {
        let Self {
            board,
            ui,
            terminal,
            ..
        } = self;
        terminal.draw(|frame| draw(frame, board, ui)).expect("draw");
    }

    pub fn apply(&mut self, event: Event) -> bool {
        syllabus_tui::apply_event(&mut self.board, &mut self.ui, event)
    }

    /// Interior of `kind`'s list as last drawn.
    pub fn list_area(&self, kind: CollectionKind) -> Rect {
        self.ui.hits().list_area(kind).expect("list drawn")
    }
}

pub fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub fn press(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Down(MouseButton::Left), column, row)
}

pub fn drag(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Drag(MouseButton::Left), column, row)
}

pub fn release(column: u16, row: u16) -> Event {
    mouse(MouseEventKind::Up(MouseButton::Left), column, row)
}
