use crate::ui::app::Focus;
use crate::ui::theme::{GLOBAL_BORDER, TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, focus: Focus, area: Rect) -> Paragraph<'static> {
        let hints = match focus {
            Focus::List => {
                " a: Add │ Enter/e: Edit │ Space: Done │ d: Delete │ j/k: Move │ q: Quit"
            }
            Focus::Draft => " Enter: Add item │ Esc: Back │ Ctrl+Q: Quit",
            Focus::Editor => " Enter: Save │ Esc: Cancel │ Ctrl+Q: Quit",
        };
        let version = format!("v{} ", VERSION);

        // Pad with char counts, not byte counts (the hints contain │).
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
