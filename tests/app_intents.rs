use std::collections::HashSet;

use tuido::todo::{SequentialAllocator, TodoId};
use tuido::ui::app::{App, Focus};

fn make_app() -> App {
    App::new(Box::new(SequentialAllocator::new()))
}

fn app_with_items(texts: &[&str]) -> App {
    let mut app = make_app();
    for text in texts {
        for ch in text.chars() {
            app.draft_push(ch);
        }
        app.submit_draft();
    }
    app
}

// -- submit-create ---------------------------------------------------------

#[test]
fn submit_draft_creates_item_and_clears_draft() {
    let mut app = make_app();
    for ch in "buy milk".chars() {
        app.draft_push(ch);
    }
    app.submit_draft();

    assert_eq!(app.todos().len(), 1);
    let item = &app.todos().items()[0];
    assert_eq!(item.text, "buy milk");
    assert!(!item.complete);
    assert_eq!(app.draft(), "");
}

#[test]
fn submit_draft_trims_surrounding_whitespace() {
    let mut app = make_app();
    for ch in "  tidy up  ".chars() {
        app.draft_push(ch);
    }
    app.submit_draft();
    assert_eq!(app.todos().items()[0].text, "tidy up");
}

#[test]
fn whitespace_only_draft_is_withheld() {
    let mut app = make_app();
    for ch in "   ".chars() {
        app.draft_push(ch);
    }
    app.submit_draft();
    assert!(app.todos().is_empty());
    // Draft is kept; nothing was submitted.
    assert_eq!(app.draft(), "   ");
}

#[test]
fn created_items_get_distinct_ids() {
    let app = app_with_items(&["a", "b", "c"]);
    let ids: HashSet<TodoId> = app.todos().items().iter().map(|item| item.id).collect();
    assert_eq!(ids.len(), 3);
}

// -- open-edit / submit-edit / cancel-edit ----------------------------------

#[test]
fn open_edit_copies_the_selected_item() {
    let mut app = app_with_items(&["first"]);
    app.open_edit();

    let editor = app.editor().expect("editor should be open");
    assert_eq!(editor.text, "first");
    assert_eq!(editor.id, app.todos().items()[0].id);
    assert_eq!(app.focus(), Focus::Editor);
}

#[test]
fn submit_edit_renames_and_closes_the_editor() {
    let mut app = app_with_items(&["first"]);
    app.open_edit();
    for ch in " draft".chars() {
        app.editor_push(ch);
    }
    app.submit_edit();

    assert_eq!(app.todos().items()[0].text, "first draft");
    assert!(app.editor().is_none());
    assert_eq!(app.focus(), Focus::List);
}

#[test]
fn submit_edit_with_emptied_text_keeps_editor_open() {
    let mut app = app_with_items(&["first"]);
    app.open_edit();
    for _ in 0.."first".len() {
        app.editor_pop();
    }
    app.submit_edit();

    // Dispatch withheld: item unchanged, editor still open.
    assert_eq!(app.todos().items()[0].text, "first");
    assert!(app.editor().is_some());
    assert_eq!(app.focus(), Focus::Editor);
}

#[test]
fn cancel_edit_discards_the_working_copy() {
    let mut app = app_with_items(&["first"]);
    app.open_edit();
    for ch in " unwanted".chars() {
        app.editor_push(ch);
    }
    app.cancel_edit();

    assert_eq!(app.todos().items()[0].text, "first");
    assert!(app.editor().is_none());
    assert_eq!(app.focus(), Focus::List);
}

// -- toggle ------------------------------------------------------------------

#[test]
fn toggle_selected_flips_completion() {
    let mut app = app_with_items(&["a"]);
    app.toggle_selected();
    assert!(app.todos().items()[0].complete);
    app.toggle_selected();
    assert!(!app.todos().items()[0].complete);
}

#[test]
fn toggle_on_empty_list_is_noop() {
    let mut app = make_app();
    app.toggle_selected();
    assert!(app.todos().is_empty());
}

// -- delete -------------------------------------------------------------------

#[test]
fn delete_selected_removes_the_item() {
    let mut app = app_with_items(&["x", "y"]);
    app.delete_selected();
    assert_eq!(app.todos().len(), 1);
    assert_eq!(app.todos().items()[0].text, "y");
}

#[test]
fn delete_last_item_clamps_selection() {
    let mut app = app_with_items(&["a", "b"]);
    app.move_selection(1);
    assert_eq!(app.selected(), Some(1));
    app.delete_selected();
    assert_eq!(app.selected(), Some(0));
    assert_eq!(app.selected_item().map(|item| item.text.as_str()), Some("a"));
}

#[test]
fn delete_everything_leaves_no_selection() {
    let mut app = app_with_items(&["only"]);
    app.delete_selected();
    assert_eq!(app.selected(), None);
    assert!(app.selected_item().is_none());
}

// -- selection movement --------------------------------------------------------

#[test]
fn selection_wraps_at_both_ends() {
    let mut app = app_with_items(&["a", "b", "c"]);
    assert_eq!(app.selected(), Some(0));
    app.move_selection(-1);
    assert_eq!(app.selected(), Some(2));
    app.move_selection(1);
    assert_eq!(app.selected(), Some(0));
}
