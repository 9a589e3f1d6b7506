use crate::todo::TodoList;
use crate::ui::theme::{ACCENT, DONE_MARK, GLOBAL_BORDER, TEXT, TEXT_DIM};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, todos: &TodoList) -> Paragraph<'static> {
        let done = todos.done_count();
        let open = todos.len() - done;
        let separator_style = Style::default().fg(TEXT_DIM);

        let line = Line::from(vec![
            Span::styled("  tuido", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} open", open), Style::default().fg(TEXT)),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} done", done), Style::default().fg(DONE_MARK)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
