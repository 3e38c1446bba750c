use crossterm::event::{self, Event, KeyEvent, MouseEvent};
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Duration;

use crate::shutdown::ShutdownHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus; any drag in progress is cancelled.
    FocusLost,
}

/// Reads terminal input on a background thread and forwards it to the main
/// loop, which is the only place carousel state is touched.
pub struct EventHandler {
    rx: Receiver<AppEvent>,
}

impl EventHandler {
    pub fn new(poll_interval: Duration, shutdown: ShutdownHandle) -> Self {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || loop {
            if shutdown.is_shutting_down() {
                break;
            }

            // Short poll so the shutdown flag is noticed promptly
            match event::poll(poll_interval) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(err) => {
                    tracing::error!(error = %err, "terminal poll failed");
                    break;
                }
            }

            let forwarded = match event::read() {
                Ok(Event::Key(key)) => Some(AppEvent::Key(key)),
                Ok(Event::Mouse(mouse)) => Some(AppEvent::Mouse(mouse)),
                Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                Ok(Event::FocusGained) => Some(AppEvent::FocusGained),
                Ok(Event::FocusLost) => Some(AppEvent::FocusLost),
                Ok(_) => None,
                Err(err) => {
                    tracing::error!(error = %err, "terminal read failed");
                    break;
                }
            };

            if let Some(event) = forwarded {
                if tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx }
    }

    pub fn next(&self, timeout: Duration) -> Result<AppEvent, mpsc::RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}
