//! Status bar rendering with keybindings and state indicators

use crate::sim::OpCounter;
use crate::structures::{PriorityMode, StructureKind};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar.
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub kind: StructureKind,
    pub capacity: usize,
    pub mode: Option<PriorityMode>,
    /// Pending value entry, as typed so far.
    pub entry: &'a str,
    /// Name of the executing phase while busy.
    pub busy_phase: Option<&'static str>,
    pub armed: bool,
    pub inserts: OpCounter,
    pub removes: OpCounter,
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData) {
    // Split status bar into left and right
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(60),
            ratatui::layout::Constraint::Percentage(40),
        ])
        .split(area);

    // Left side: state chip, structure summary, and the latest message
    let state_chip = match data.busy_phase {
        Some(phase) => Span::styled(
            format!(" BUSY {} ", phase),
            Style::default()
                .bg(DEFAULT_THEME.secondary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            " IDLE ",
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let sep_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.comment);
    let info_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);

    let mut summary = format!(" {} · cap {}", data.kind.label(), data.capacity);
    if let Some(mode) = data.mode {
        summary.push_str(&format!(" · {}", mode.label()));
    }
    if data.entry.is_empty() {
        summary.push_str(" · val ??");
    } else {
        summary.push_str(&format!(" · val {}_", data.entry));
    }
    summary.push_str(&format!(
        " · ins {}/{} rem {}/{} ",
        data.inserts.accepted, data.inserts.failed, data.removes.accepted, data.removes.failed
    ));

    let left_spans = vec![
        state_chip,
        Span::styled(summary, info_style),
        Span::styled("| ", sep_style),
        Span::styled(format!("{} ", data.message), info_style),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.current_line_bg)
        .fg(DEFAULT_THEME.fg);

    let mut right_spans = vec![
        Span::styled(" i/d ", key_style),
        Span::styled(" ins/rem ", desc_style),
        Span::styled(" f ", key_style),
        Span::styled(" fill ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" auto ", desc_style),
        Span::styled(" slcp ", key_style),
        Span::styled(" variant ", desc_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    if data.armed {
        right_spans.push(Span::styled("│", sep_style));
        right_spans.push(Span::styled(
            " ▶ AUTO ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
