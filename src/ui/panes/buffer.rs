//! Buffer pane rendering
//!
//! Slot-by-slot view of the active structure: dense variants grow from the
//! bottom (stack) or show the head first (priority queue); slotted variants
//! show every slot with its front/rear markers, including the linear queue's
//! spent slots.

use crate::structures::{SlotView, Structure, StructureKind};
use crate::ui::theme::{element_color, DEFAULT_THEME};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the buffer pane.
pub fn render_buffer_pane(
    frame: &mut Frame,
    area: Rect,
    structure: &Structure,
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

    let kind = structure.kind();
    let title = match structure {
        Structure::PriorityQueue(q) => format!(
            " {} · {} ({}/{}) ",
            kind.label(),
            q.mode().label(),
            structure.occupancy(),
            structure.capacity()
        ),
        _ => format!(
            " {} ({}/{}) ",
            kind.label(),
            structure.occupancy(),
            structure.capacity()
        ),
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    let mut all_items: Vec<ListItem> = Vec::new();
    all_items.push(ListItem::new(pointer_line(structure)));
    all_items.push(ListItem::new(""));

    let views = structure.slot_views();
    let order: Vec<usize> = match kind {
        // The stack grows upward: highest index on top.
        StructureKind::Stack => (0..views.len()).rev().collect(),
        _ => (0..views.len()).collect(),
    };
    for index in order {
        all_items.push(ListItem::new(slot_line(
            index,
            &views[index],
            marker_for(structure, index),
        )));
    }

    // Clamp scroll to the content; capacities are small but short panes
    // still need it.
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

/// Header line summarizing the pointers for the active variant.
fn pointer_line(structure: &Structure) -> Line<'static> {
    let style = Style::default().fg(DEFAULT_THEME.pointer);
    match structure {
        Structure::Stack(s) => {
            let top = if s.is_empty() {
                "—".to_string()
            } else {
                format!("{}", s.len() - 1)
            };
            Line::from(Span::styled(format!(" top = {}", top), style))
        }
        Structure::PriorityQueue(q) => {
            let head = if q.is_empty() { "—" } else { "0" };
            Line::from(Span::styled(
                format!(" head = {} (next remove)", head),
                style,
            ))
        }
        Structure::LinearQueue(_) | Structure::CircularQueue(_) => {
            let (front, rear) = structure.pointers().unwrap_or((-1, -1));
            Line::from(Span::styled(
                format!(" front = {}   rear = {}", front, rear),
                style,
            ))
        }
    }
}

/// Pointer marker shown to the right of a slot, if any.
fn marker_for(structure: &Structure, index: usize) -> Option<&'static str> {
    match structure {
        Structure::Stack(s) => {
            (!s.is_empty() && index == s.len() - 1).then_some("◀ top")
        }
        Structure::PriorityQueue(q) => (!q.is_empty() && index == 0).then_some("◀ head"),
        Structure::LinearQueue(_) | Structure::CircularQueue(_) => {
            let (front, rear) = structure.pointers().unwrap_or((-1, -1));
            let index = index as i32;
            if front == -1 {
                None
            } else if index == front && index == rear {
                Some("◀ F R")
            } else if index == front {
                Some("◀ F")
            } else if index == rear {
                Some("◀ R")
            } else {
                None
            }
        }
    }
}

fn slot_line(index: usize, view: &SlotView<'_>, marker: Option<&'static str>) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" [{:>2}] ", index),
        Style::default().fg(DEFAULT_THEME.index),
    )];
    match view {
        SlotView::Occupied(elem) => {
            let color = element_color(elem.color);
            spans.push(Span::styled("■ ", Style::default().fg(color)));
            spans.push(Span::styled(
                format!("{:>3}", elem.value),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!("  #{}", elem.id),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
        SlotView::Empty => {
            spans.push(Span::styled("·", Style::default().fg(DEFAULT_THEME.comment)));
        }
        SlotView::Spent => {
            spans.push(Span::styled(
                "✕ spent",
                Style::default().fg(DEFAULT_THEME.spent),
            ));
        }
    }
    if let Some(marker) = marker {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            marker,
            Style::default()
                .fg(DEFAULT_THEME.pointer)
                .add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}
