//! Pseudocode trace pane rendering
//!
//! Shows the active (or most recent) operation's pseudocode with the line
//! for the currently executing phase highlighted, so every precondition
//! check and comparison is visible as it happens.

use crate::sim::Trace;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Render the trace pane. `verb` is the variant's name for the operation
/// (PUSH/POP, ENQUEUE/DEQUEUE, INSERT/REMOVE).
pub fn render_trace_pane(
    frame: &mut Frame,
    area: Rect,
    trace: Option<&Trace>,
    verb: Option<&'static str>,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Pseudocode ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let Some(trace) = trace else {
        let paragraph = Paragraph::new("(no operation yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let mut all_items: Vec<ListItem> = Vec::new();

    let header = match trace.phase {
        Some(phase) => Line::from(vec![
            Span::styled(
                format!(" {} ", verb.unwrap_or("op")),
                Style::default()
                    .fg(DEFAULT_THEME.secondary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("· {}", phase.name()),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        None => Line::from(Span::styled(
            format!(" {} · settled", verb.unwrap_or("op")),
            Style::default().fg(DEFAULT_THEME.comment),
        )),
    };
    all_items.push(ListItem::new(header));
    all_items.push(ListItem::new(""));

    for (i, code_line) in trace.code.iter().enumerate() {
        let active = trace.active == Some(i);
        let line = if active {
            Line::from(vec![
                Span::styled(
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    (*code_line).to_string(),
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    (*code_line).to_string(),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
            ])
        };
        all_items.push(ListItem::new(line));
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_items > visible_height {
        *scroll_offset = (*scroll_offset).min(total_items - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
