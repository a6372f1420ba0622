//! TUI rendering for Syllabus using ratatui.
//!
//! Three columns, one per collection, each with its form on top and its list
//! below. Every draw reports list geometry back to the board and records the
//! hit map mouse input is resolved against.

mod input;
mod opener;
mod state;
mod theme;

pub use input::{InputPump, apply_event, handle_events};
pub use opener::{LinkOpener, SystemOpener};
pub use state::{FieldFocus, HitMap, UiState};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use syllabus_core::{Board, CollectionKind, ItemContent, ListGeometry, TextField, VisualItem};
use syllabus_types::fit_to_width;

use crate::state::{DELETE_CELL_WIDTH, ListRegion};

/// Rows each list item occupies.
const ITEM_HEIGHT: u16 = 1;

/// Main draw function.
pub fn draw(frame: &mut Frame, board: &mut Board, ui: &mut UiState) {
    let options = ui.options();
    let palette = palette(options);
    let glyphs = glyphs(options);
    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),    // Columns
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(chunks[0]);

    // Forms share one height so the lists line up.
    let form_height = CollectionKind::ALL
        .iter()
        .map(|kind| board.form(*kind).fields().len())
        .max()
        .unwrap_or(1) as u16
        + 2;

    ui.hits.clear();
    for (kind, column) in CollectionKind::ALL.into_iter().zip(columns.iter()) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(form_height), Constraint::Min(3)])
            .split(*column);
        draw_form(frame, board, ui, kind, parts[0], &palette, &glyphs);
        draw_list(frame, board, ui, kind, parts[1], &palette, &glyphs);
    }

    draw_key_hints(frame, chunks[1], &palette);
}

fn draw_form(
    frame: &mut Frame,
    board: &Board,
    ui: &mut UiState,
    kind: CollectionKind,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let focus = ui.focus();
    let focused_form = focus.kind == kind;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette, focused_form))
        .title(Span::styled(
            format!(" {} ", kind.form_title()),
            styles::field_label(palette),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = board.form(kind).fields();
    let label_width = fields
        .iter()
        .map(|field| field.label().width())
        .max()
        .unwrap_or(0) as u16
        + 2;

    for (index, field) in fields.iter().enumerate() {
        let row = inner.y.saturating_add(index as u16);
        if row >= inner.bottom() {
            break;
        }
        let row_area = Rect::new(inner.x, row, inner.width, 1);
        let focus_here = FieldFocus::new(kind, index);
        ui.hits.push_field(row_area, focus_here);

        let [label_area, text_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(label_width), Constraint::Min(1)])
            .areas(row_area);

        let label = format!("{}:", field.label());
        frame.render_widget(
            Paragraph::new(Span::styled(label, styles::field_label(palette))),
            label_area,
        );

        let is_focused = focus == focus_here;
        draw_field_text(frame, field, text_area, is_focused, palette, glyphs);
    }
}

/// Draw a field's text, scrolled so the cursor stays visible.
fn draw_field_text(
    frame: &mut Frame,
    field: &TextField,
    area: Rect,
    focused: bool,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    if area.width == 0 {
        return;
    }
    let cursor_column = field.text_before_cursor().width() as u16;
    let horizontal_scroll = cursor_column.saturating_sub(area.width.saturating_sub(1));

    let text = if field.text().is_empty() && !focused {
        Span::styled(glyphs.prompt, styles::key_hint(palette))
    } else {
        Span::styled(field.text(), Style::default().fg(palette.text_primary))
    };
    frame.render_widget(
        Paragraph::new(Line::from(text)).scroll((0, horizontal_scroll)),
        area,
    );

    if focused {
        let cursor_x = area
            .x
            .saturating_add(cursor_column)
            .saturating_sub(horizontal_scroll);
        frame.set_cursor_position((cursor_x, area.y));
    }
}

fn draw_list(
    frame: &mut Frame,
    board: &mut Board,
    ui: &mut UiState,
    kind: CollectionKind,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(styles::border(palette, false))
        .title(Span::styled(
            format!(" {} ", kind.heading()),
            styles::heading(palette),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    board.set_geometry(
        kind,
        ListGeometry::new(f64::from(inner.y), f64::from(ITEM_HEIGHT)),
    );

    let mut labels = Vec::new();
    for (slot, item) in board.view(kind).items().iter().enumerate() {
        let row = inner.y.saturating_add(slot as u16 * ITEM_HEIGHT);
        if row >= inner.bottom() {
            break;
        }
        let row_area = Rect::new(inner.x, row, inner.width, ITEM_HEIGHT);
        let (line, label_span) = item_line(item, inner.width, palette, glyphs);
        labels.push((inner.x + label_span.0, inner.x + label_span.1));
        frame.render_widget(Paragraph::new(line), row_area);
    }

    ui.hits.push_list(ListRegion {
        kind,
        area: inner,
        labels,
    });
}

/// `<grip> <label> ... <delete>` fitted to `width`, plus the label's column span
/// relative to the row start.
fn item_line(
    item: &VisualItem,
    width: u16,
    palette: &Palette,
    glyphs: &Glyphs,
) -> (Line<'static>, (u16, u16)) {
    let width = usize::from(width);
    let (marker, label_style) = match item.content() {
        ItemContent::Text(_) => ("", styles::item(palette)),
        ItemContent::Link { .. } => (glyphs.link, styles::link(palette)),
    };

    let lead = glyphs.grip.width() + 1 + marker.width() + usize::from(!marker.is_empty());
    let tail = usize::from(DELETE_CELL_WIDTH);
    let room = width.saturating_sub(lead + tail);
    let label = fit_to_width(item.content().label(), room, glyphs.ellipsis);
    let label_width = label.width();
    let padding = width.saturating_sub(lead + label_width + tail);

    let mut spans = vec![
        Span::styled(glyphs.grip, styles::grip(palette)),
        Span::raw(" "),
    ];
    if !marker.is_empty() {
        spans.push(Span::styled(marker, styles::link(palette)));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(label, label_style));
    spans.push(Span::raw(" ".repeat(padding + tail - glyphs.delete.width())));
    spans.push(Span::styled(glyphs.delete, styles::delete(palette)));

    let mut line = Line::from(spans);
    if item.is_dragging() {
        line = line.style(styles::dragging(palette));
    }
    let start = lead as u16;
    (line, (start, start + label_width as u16))
}

fn draw_key_hints(frame: &mut Frame, area: Rect, palette: &Palette) {
    let hints = Line::from(vec![
        Span::styled(" Tab", styles::key_highlight(palette)),
        Span::styled(" next field  ", styles::key_hint(palette)),
        Span::styled("Enter", styles::key_highlight(palette)),
        Span::styled(" add  ", styles::key_hint(palette)),
        Span::styled("drag", styles::key_highlight(palette)),
        Span::styled(" reorder  ", styles::key_hint(palette)),
        Span::styled("Esc", styles::key_highlight(palette)),
        Span::styled(" quit ", styles::key_hint(palette)),
    ]);
    frame.render_widget(Paragraph::new(hints), area);
}
