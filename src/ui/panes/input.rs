//! Input pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const CURSOR: &str = "▏";

/// Render the input pane; the view follows the last line
pub fn render_input_pane(frame: &mut Frame, area: Rect, input: &str, title: &str) {
    let block = Block::default()
        .title(format!(" Input: {title} "))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::new(1, 0, 0, 0));

    let mut lines: Vec<Line> = input
        .split('\n')
        .map(|line| Line::from(Span::styled(line, Style::default().fg(DEFAULT_THEME.fg))))
        .collect();
    if let Some(last) = lines.last_mut() {
        last.push_span(Span::styled(CURSOR, Style::default().fg(DEFAULT_THEME.border_focused)));
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    let scroll = lines.len().saturating_sub(visible_height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));
    frame.render_widget(paragraph, area);
}
