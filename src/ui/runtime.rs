use crate::config::Config;
use crate::todo::UuidAllocator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

pub fn run(config: Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(Box::new(UuidAllocator));
    let events = EventHandler::new(tick_rate);

    // The view subscribes on mount: any store transition marks the screen
    // dirty. Released when `subscription` drops at teardown.
    let needs_redraw = Rc::new(Cell::new(true));
    let redraw = Rc::clone(&needs_redraw);
    let subscription = app.store().subscribe(move |_| redraw.set(true));

    loop {
        if needs_redraw.replace(false) {
            terminal.draw(|frame| draw(frame, &app))?;
        }
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                // Transient view state (draft, selection, focus) changes
                // outside the store and needs its own redraw.
                needs_redraw.set(true);
            }
            Ok(AppEvent::Resize(..)) => needs_redraw.set(true),
            Ok(AppEvent::Tick) => app.on_tick(),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    subscription.unsubscribe();
    drop(guard);
    Ok(())
}
