//! Input handling for the Syllabus TUI.
//!
//! Keyboard edits the focused form field. The mouse drives delete, link
//! activation and the drag gesture:
//!
//! ```text
//! press on delete cell        -> delete
//! press on item               -> pending press
//! drag (first)                -> drag_start, then drag_over
//! drag                        -> drag_over on the list under the pointer
//! release                     -> drop (if over a list), drag_end
//! release without drag        -> open link when pressed on a link label
//! ```

use anyhow::{Result, anyhow};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};
use tokio::sync::mpsc;
use tracing::debug;

use syllabus_core::{Board, DragState, ItemContent};

use crate::opener::open_link;
use crate::state::{PendingPress, UiState};

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(25); // shutdown responsiveness
const INPUT_CHANNEL_CAPACITY: usize = 1024; // bounded: no OOM
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

enum InputMsg {
    Event(Event),
    Error(String),
}

/// Reads terminal events on a blocking thread and hands them to the frame loop.
pub struct InputPump {
    rx: mpsc::Receiver<InputMsg>,
    stop: Arc<AtomicBool>,
    join: Option<tokio::task::JoinHandle<()>>,
}

impl InputPump {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel(INPUT_CHANNEL_CAPACITY);
        let stop = Arc::new(AtomicBool::new(false));
        let stop2 = stop.clone();

        let join = tokio::task::spawn_blocking(move || input_loop(stop2, tx));
        Self {
            rx,
            stop,
            join: Some(join),
        }
    }

    pub async fn shutdown(&mut self) {
        // Close first so a reader blocked on a full channel wakes up.
        self.rx.close();

        self.stop.store(true, Ordering::Release);
        if let Some(join) = self.join.take() {
            let _ = tokio::time::timeout(Duration::from_secs(2), join).await;
        }
    }
}

impl Default for InputPump {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for InputPump {
    fn drop(&mut self) {
        // Best-effort stop; do not block in Drop.
        self.rx.close();
        self.stop.store(true, Ordering::Release);
    }
}

fn input_loop(stop: Arc<AtomicBool>, tx: mpsc::Sender<InputMsg>) {
    while !stop.load(Ordering::Acquire) {
        match event::poll(INPUT_POLL_TIMEOUT) {
            Ok(true) => match event::read() {
                Ok(ev) => {
                    // Backpressure instead of dropping: a drag must see its release.
                    if tx.blocking_send(InputMsg::Event(ev)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                    break;
                }
            },
            Ok(false) => {}
            Err(e) => {
                let _ = tx.blocking_send(InputMsg::Error(e.to_string()));
                break;
            }
        }
    }
}

/// Drain up to one frame's worth of queued events. Returns whether to quit.
pub fn handle_events(board: &mut Board, ui: &mut UiState, input: &mut InputPump) -> Result<bool> {
    let mut processed = 0;
    while processed < MAX_EVENTS_PER_FRAME {
        let ev = match input.rx.try_recv() {
            Ok(InputMsg::Event(ev)) => ev,
            Ok(InputMsg::Error(msg)) => return Err(anyhow!("input error: {msg}")),
            Err(mpsc::error::TryRecvError::Empty) => break,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                return Err(anyhow!("input pump disconnected"));
            }
        };

        if apply_event(board, ui, ev) {
            return Ok(true);
        }
        processed += 1;
    }
    Ok(ui.should_quit())
}

/// Apply one terminal event. Returns whether the app should quit.
pub fn apply_event(board: &mut Board, ui: &mut UiState, event: Event) -> bool {
    match event {
        Event::Key(key) => {
            // Press + repeat only.
            if matches!(key.kind, KeyEventKind::Release) {
                return ui.should_quit();
            }
            handle_key(board, ui, key);
        }
        Event::Paste(text) => {
            let focus = ui.focus();
            if let Some(field) = board.form_mut(focus.kind).field_mut(focus.field) {
                field.insert_str(&text);
            }
        }
        Event::Mouse(mouse) => handle_mouse(board, ui, mouse),
        _ => {}
    }
    ui.should_quit()
}

fn handle_key(board: &mut Board, ui: &mut UiState, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => ui.request_quit(),
        KeyCode::Esc => ui.request_quit(),
        KeyCode::Tab => ui.focus_next(board),
        KeyCode::BackTab => ui.focus_prev(board),
        KeyCode::Enter => {
            board.submit(ui.focus().kind);
        }
        _ => {
            let focus = ui.focus();
            let Some(field) = board.form_mut(focus.kind).field_mut(focus.field) else {
                return;
            };
            match key.code {
                KeyCode::Char('u') if ctrl => field.clear(),
                KeyCode::Char('w') if ctrl => field.delete_word_backward(),
                KeyCode::Char(c) if !ctrl => field.insert_char(c),
                KeyCode::Backspace => field.backspace(),
                KeyCode::Delete => field.delete_forward(),
                KeyCode::Left => field.move_left(),
                KeyCode::Right => field.move_right(),
                KeyCode::Home => field.move_home(),
                KeyCode::End => field.move_end(),
                _ => {}
            }
        }
    }
}

fn handle_mouse(board: &mut Board, ui: &mut UiState, mouse: MouseEvent) {
    let MouseEvent {
        kind, column, row, ..
    } = mouse;
    let pointer_y = f64::from(row);

    match kind {
        MouseEventKind::Down(MouseButton::Left) => {
            // A lost release must not leave the previous drag armed.
            board.drag_end();
            ui.press = None;
            if let Some(focus) = ui.hits.field_at(column, row) {
                ui.set_focus(focus);
                return;
            }
            let Some(region) = ui.hits.region_at(column, row) else {
                return;
            };
            let kind = region.kind;
            let Some(slot) = board.view(kind).slot_at(pointer_y) else {
                return;
            };
            if region.on_delete_cell(column) {
                let index = board.view(kind).items()[slot].index();
                board.delete(kind, index);
                return;
            }
            ui.press = Some(PendingPress {
                kind,
                slot,
                on_label: region.on_label(slot, column),
                dragged: false,
            });
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            let Some(press) = ui.press.as_mut() else {
                return;
            };
            if !press.dragged {
                press.dragged = true;
                if !board.drag_start(press.kind, press.slot) {
                    return;
                }
            }
            if let Some(kind) = ui.hits.list_at(column, row) {
                board.drag_over(kind, pointer_y);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            let Some(press) = ui.press.take() else {
                return;
            };
            if matches!(board.drag_state(), DragState::Dragging(_)) {
                if let Some(kind) = ui.hits.list_at(column, row) {
                    board.drop_on(kind, pointer_y);
                } else {
                    debug!(column, row, "released outside any list");
                }
                board.drag_end();
            } else if !press.dragged && press.on_label {
                activate_link(board, ui, press);
            }
        }
        _ => {}
    }
}

fn activate_link(board: &Board, ui: &UiState, press: PendingPress) {
    let view = board.view(press.kind);
    if let Some(ItemContent::Link { url, .. }) =
        view.items().get(press.slot).map(|item| item.content())
    {
        open_link(ui.opener.as_ref(), url);
    }
}
