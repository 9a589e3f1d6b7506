use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+Q quits from any focus, including mid-edit.
    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::List => handle_list_key(app, key),
        Focus::Draft => handle_draft_key(app, key),
        Focus::Editor => handle_editor_key(app, key),
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus_draft(),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Enter | KeyCode::Char('e') => app.open_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        _ => {}
    }
}

fn handle_draft_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.focus_list(),
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Backspace => app.draft_pop(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.draft_push(ch)
        }
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.submit_edit(),
        KeyCode::Backspace => app.editor_pop(),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.editor_push(ch)
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::SequentialAllocator;

    fn make_app() -> App {
        App::new(Box::new(SequentialAllocator::new()))
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    #[test]
    fn q_quits_from_list() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn q_types_into_draft() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.draft(), "q");
    }

    #[test]
    fn ctrl_q_quits_from_draft() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, ctrl('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn esc_returns_draft_focus_to_list() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('i')));
        assert_eq!(app.focus(), Focus::Draft);
        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.focus(), Focus::List);
    }

    #[test]
    fn enter_in_draft_creates_item() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        for ch in "buy milk".chars() {
            handle_key(&mut app, press(KeyCode::Char(ch)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.todos().len(), 1);
        assert_eq!(app.todos().items()[0].text, "buy milk");
        assert_eq!(app.draft(), "");
    }

    #[test]
    fn ctrl_modified_chars_are_not_typed() {
        let mut app = make_app();
        handle_key(&mut app, press(KeyCode::Char('a')));
        handle_key(&mut app, ctrl('x'));
        assert_eq!(app.draft(), "");
    }
}
