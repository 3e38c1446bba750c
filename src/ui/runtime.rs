use crate::carousel::scheduler::SystemClock;
use crate::carousel::KeyOutcome;
use crate::config::Config;
use crate::deck::Slide;
use crate::shutdown::ShutdownCoordinator;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Longest the loop sleeps without an input event or due timer.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// How often the input thread re-checks the shutdown flag.
const INPUT_POLL: Duration = Duration::from_millis(50);

pub fn run(slides: Vec<Slide>, config: &Config, reduced_motion: bool) -> io::Result<()> {
    let shutdown = ShutdownCoordinator::new();
    shutdown.install_signal_handlers()?;

    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(slides, config, reduced_motion, SystemClock);
    let events = EventHandler::new(INPUT_POLL, shutdown.handle());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }

    let mut needs_draw = true;
    loop {
        if needs_draw {
            terminal.draw(|frame| draw(frame, &app))?;
            needs_draw = false;
        }
        if app.should_quit() || shutdown.is_shutting_down() {
            break;
        }

        let timeout = app.next_wakeup().map_or(IDLE_WAIT, |due| due.min(IDLE_WAIT));
        match events.next(timeout) {
            Ok(AppEvent::Key(key)) => {
                // Keys the app ignores leave the screen untouched
                needs_draw = handle_key(&mut app, key) == KeyOutcome::Handled;
            }
            Ok(AppEvent::Mouse(mouse)) => {
                handle_mouse(&mut app, mouse);
                needs_draw = true;
            }
            Ok(AppEvent::Resize(cols, rows)) => {
                app.on_resize(cols, rows);
                needs_draw = true;
            }
            Ok(AppEvent::FocusGained) => {}
            Ok(AppEvent::FocusLost) => {
                app.on_focus_lost();
                needs_draw = true;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if app.fire_due_timers() > 0 {
            needs_draw = true;
        }
    }

    shutdown.signal();
    drop(guard);
    Ok(())
}
