//! Output pane rendering with C++ highlighting

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

/// Render generated code, or the error that replaced it
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    output: &Result<String, String>,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let code = match output {
        Err(message) => {
            let paragraph = Paragraph::new(format!("error: {message}"))
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.error))
                .wrap(Wrap { trim: false });
            frame.render_widget(paragraph, area);
            return;
        }
        Ok(code) if code.is_empty() => {
            let paragraph = Paragraph::new("(no output)")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
        Ok(code) => code,
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = code.lines().map(|line| ListItem::new(highlight_cpp(line))).collect();

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Clamp only when the code is taller than the pane
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

    frame.render_widget(List::new(visible_items).block(block), area);
}

/// Word-level highlighting for the C++ the generators emit
pub(crate) fn highlight_cpp(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut word_start: Option<usize> = None;
    let mut chars = line.char_indices();

    while let Some((i, c)) = chars.next() {
        if c == '/' && line[i..].starts_with("//") {
            flush_word(line, &mut word_start, i, &mut spans);
            spans.push(Span::styled(&line[i..], Style::default().fg(DEFAULT_THEME.comment)));
            return Line::from(spans);
        }

        if c == '"' || c == '\'' {
            flush_word(line, &mut word_start, i, &mut spans);
            let mut end = line.len();
            let mut escaped = false;
            for (j, d) in chars.by_ref() {
                if escaped {
                    escaped = false;
                } else if d == '\\' {
                    escaped = true;
                } else if d == c {
                    end = j + d.len_utf8();
                    break;
                }
            }
            spans.push(Span::styled(&line[i..end], Style::default().fg(DEFAULT_THEME.string)));
            continue;
        }

        if c.is_alphanumeric() || c == '_' {
            word_start.get_or_insert(i);
            continue;
        }

        flush_word(line, &mut word_start, i, &mut spans);
        let style = match c {
            '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(&line[i..i + c.len_utf8()], style));
    }
    flush_word(line, &mut word_start, line.len(), &mut spans);

    Line::from(spans)
}

fn flush_word<'a>(line: &'a str, start: &mut Option<usize>, end: usize, spans: &mut Vec<Span<'a>>) {
    if let Some(start) = start.take() {
        let word = &line[start..end];
        let is_call = line[end..].starts_with('(');
        spans.push(Span::styled(word, word_style(word, is_call)));
    }
}

fn word_style(word: &str, is_call: bool) -> Style {
    match word {
        "int" | "char" | "string" | "vector" | "auto" | "bool" | "TreeNode" | "ListNode" | "Solution" => {
            Style::default().fg(DEFAULT_THEME.type_name)
        }
        "for" | "if" | "new" | "delete" | "return" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "nullptr" | "null" | "true" | "false" => Style::default().fg(DEFAULT_THEME.number),
        _ if word.bytes().all(|b| b.is_ascii_digit()) => Style::default().fg(DEFAULT_THEME.number),
        _ if is_call => Style::default().fg(DEFAULT_THEME.function),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}
