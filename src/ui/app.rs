use crate::mvi::Store;
use crate::todo::{IdAllocator, TodoId, TodoIntent, TodoItem, TodoReducer};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// Moving through the item list.
    List,
    /// Typing into the new-item input.
    Draft,
    /// Editing an existing item in the popup.
    Editor,
}

/// Working copy of an item open for editing.
///
/// Lives only in the view; discarded on cancel, dispatched on commit.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub id: TodoId,
    pub text: String,
}

/// View-side application state.
///
/// Owns the store plus the transient state that does not belong in it:
/// the not-yet-submitted draft text, the in-progress edit, the list
/// cursor, and focus. Everything canonical lives in the store and only
/// changes through dispatched intents.
pub struct App {
    should_quit: bool,
    focus: Focus,
    store: Store<TodoReducer>,
    ids: Box<dyn IdAllocator>,
    selected: usize,
    draft: String,
    editor: Option<EditDraft>,
}

impl App {
    pub fn new(ids: Box<dyn IdAllocator>) -> Self {
        Self {
            should_quit: false,
            focus: Focus::List,
            store: Store::default(),
            ids,
            selected: 0,
            draft: String::new(),
            editor: None,
        }
    }

    pub fn store(&self) -> &Store<TodoReducer> {
        &self.store
    }

    pub fn todos(&self) -> &crate::todo::TodoList {
        self.store.state()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn focus_draft(&mut self) {
        self.focus = Focus::Draft;
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
    }

    pub fn on_tick(&mut self) {}

    // ========================================================================
    // Selection
    // ========================================================================

    /// The list cursor, clamped to the current list. None when empty.
    pub fn selected(&self) -> Option<usize> {
        let len = self.todos().len();
        if len == 0 {
            None
        } else {
            Some(self.selected.min(len - 1))
        }
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.selected()
            .and_then(|index| self.todos().items().get(index))
    }

    /// Move the cursor, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        let len = self.todos().len();
        if len == 0 {
            self.selected = 0;
            return;
        }

        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    // ========================================================================
    // Draft (new-item input)
    // ========================================================================

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_push(&mut self, ch: char) {
        self.draft.push(ch);
    }

    pub fn draft_pop(&mut self) {
        self.draft.pop();
    }

    /// Commit the draft as a new item.
    ///
    /// A whitespace-only draft withholds the dispatch; the draft is
    /// cleared only on a successful create.
    pub fn submit_draft(&mut self) {
        let text = self.draft.trim().to_string();
        if text.is_empty() {
            return;
        }
        let id = self.ids.next_id();
        self.store.dispatch(TodoIntent::Create {
            item: TodoItem::new(id, text),
        });
        self.draft.clear();
    }

    // ========================================================================
    // Editor (rename popup)
    // ========================================================================

    pub fn editor(&self) -> Option<&EditDraft> {
        self.editor.as_ref()
    }

    /// Open the edit popup over the selected item with a working copy of
    /// its text.
    pub fn open_edit(&mut self) {
        let Some(draft) = self.selected_item().map(|item| EditDraft {
            id: item.id,
            text: item.text.clone(),
        }) else {
            return;
        };
        self.editor = Some(draft);
        self.focus = Focus::Editor;
    }

    pub fn editor_push(&mut self, ch: char) {
        if let Some(editor) = &mut self.editor {
            editor.text.push(ch);
        }
    }

    pub fn editor_pop(&mut self) {
        if let Some(editor) = &mut self.editor {
            editor.text.pop();
        }
    }

    /// Commit the edit as a rename.
    ///
    /// Emptied-out text withholds the dispatch and keeps the popup open
    /// so the user can fix it or cancel.
    pub fn submit_edit(&mut self) {
        let Some(editor) = self.editor.take() else {
            return;
        };
        let text = editor.text.trim().to_string();
        if text.is_empty() {
            self.editor = Some(editor);
            return;
        }
        self.store
            .dispatch(TodoIntent::Rename { id: editor.id, text });
        self.focus = Focus::List;
    }

    /// Discard the working copy without dispatching.
    pub fn cancel_edit(&mut self) {
        self.editor = None;
        self.focus = Focus::List;
    }

    // ========================================================================
    // Toggle / delete
    // ========================================================================

    pub fn toggle_selected(&mut self) {
        let Some((id, complete)) = self.selected_item().map(|item| (item.id, item.complete))
        else {
            return;
        };
        self.store.dispatch(TodoIntent::SetComplete {
            id,
            complete: !complete,
        });
    }

    /// Delete immediately, no confirmation step.
    pub fn delete_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };
        self.store.dispatch(TodoIntent::Remove { id });

        let len = self.todos().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::SequentialAllocator;

    fn make_app() -> App {
        App::new(Box::new(SequentialAllocator::new()))
    }

    #[test]
    fn starts_on_list_focus_with_empty_store() {
        let app = make_app();
        assert_eq!(app.focus(), Focus::List);
        assert!(app.todos().is_empty());
        assert_eq!(app.selected(), None);
    }

    #[test]
    fn open_edit_on_empty_list_is_noop() {
        let mut app = make_app();
        app.open_edit();
        assert!(app.editor().is_none());
        assert_eq!(app.focus(), Focus::List);
    }

    #[test]
    fn quit_flag_sticks() {
        let mut app = make_app();
        assert!(!app.should_quit());
        app.request_quit();
        assert!(app.should_quit());
    }
}
