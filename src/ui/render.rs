use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{ACCENT, DONE_MARK, GLOBAL_BORDER, POPUP_BORDER, SELECTION, TEXT, TEXT_DIM};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.todos()), header);
    frame.render_widget(Footer::new().widget(app.focus(), footer), footer);

    let draft_height = 3.min(body.height);
    let draft_area = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: draft_height,
    };
    let list_area = Rect {
        x: body.x,
        y: body.y + draft_height,
        width: body.width,
        height: body.height.saturating_sub(draft_height),
    };

    draw_draft(frame, app, draft_area);
    draw_list(frame, app, list_area);
    draw_editor(frame, app, body);
}

fn draw_draft(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.focus() == Focus::Draft;
    let border = if focused { ACCENT } else { GLOBAL_BORDER };
    let block = Block::default()
        .title("New item")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let paragraph = Paragraph::new(app.draft().to_string())
        .style(Style::default().fg(TEXT))
        .block(block);
    frame.render_widget(paragraph, area);

    if focused && area.width > 2 && area.height > 2 {
        frame.set_cursor_position(Position::new(
            area.x + 1 + cursor_column(app.draft(), area.width),
            area.y + 1,
        ));
    }
}

fn draw_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .todos()
        .items()
        .iter()
        .map(|item| {
            let (marker, marker_style, text_style) = if item.complete {
                (
                    "[x] ",
                    Style::default().fg(DONE_MARK),
                    Style::default()
                        .fg(TEXT_DIM)
                        .add_modifier(Modifier::CROSSED_OUT),
                )
            } else {
                (
                    "[ ] ",
                    Style::default().fg(TEXT_DIM),
                    Style::default().fg(TEXT),
                )
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, marker_style),
                Span::styled(item.text.clone(), text_style),
            ]))
        })
        .collect();

    let block = Block::default()
        .title("Items")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(SELECTION));

    let mut state = ListState::default().with_selected(app.selected());
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_editor(frame: &mut Frame<'_>, app: &App, body: Rect) {
    let Some(editor) = app.editor() else {
        return;
    };

    let content_width = editor.text.chars().count() as u16;
    let popup_width = content_width.saturating_add(6).max(40).min(body.width);
    let area = centered_rect_by_size(body, popup_width, 3);

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled("Edit item", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let paragraph = Paragraph::new(editor.text.clone())
        .style(Style::default().fg(TEXT))
        .block(block);
    frame.render_widget(paragraph, area);

    if area.width > 2 && area.height > 2 {
        frame.set_cursor_position(Position::new(
            area.x + 1 + cursor_column(&editor.text, area.width),
            area.y + 1,
        ));
    }
}

/// Cursor column inside a bordered one-line input, clamped to its width.
fn cursor_column(text: &str, area_width: u16) -> u16 {
    (text.chars().count() as u16).min(area_width.saturating_sub(3))
}
