//! Event log pane rendering

use crate::sim::{EventLog, Severity};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Scroll state for the log pane.
pub struct LogScrollState {
    pub offset: usize,
    pub prev_item_count: usize,
}

impl LogScrollState {
    pub fn new() -> Self {
        LogScrollState {
            offset: 0,
            prev_item_count: 0,
        }
    }
}

impl Default for LogScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the event log pane.
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    log: &EventLog,
    is_focused: bool,
    scroll_state: &mut LogScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if log.is_empty() {
        let paragraph = Paragraph::new("(no events)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let all_items: Vec<ListItem> = log
        .entries()
        .iter()
        .map(|entry| {
            let color = match entry.severity {
                Severity::Info => DEFAULT_THEME.primary,
                Severity::Success => DEFAULT_THEME.success,
                Severity::Error => DEFAULT_THEME.error,
            };
            let line = Line::from(vec![
                Span::styled(
                    format!(" {} ", entry.stamp()),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(entry.message.clone(), Style::default().fg(color)),
            ]);
            ListItem::new(line)
        })
        .collect();

    // Smart auto-scroll: follow the bottom while entries are appended, but
    // respect a manual scroll position otherwise (just clamp it).
    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if total_items > scroll_state.prev_item_count {
        if total_items > visible_height {
            scroll_state.offset = total_items - visible_height;
        } else {
            scroll_state.offset = 0;
        }
    } else if total_items > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_items - visible_height);
    } else {
        scroll_state.offset = 0;
    }
    scroll_state.prev_item_count = total_items;

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(scroll_state.offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
