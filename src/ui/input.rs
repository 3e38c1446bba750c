use crate::carousel::gesture::PointerButton;
use crate::carousel::scheduler::Clock;
use crate::carousel::{Key, KeyOutcome};
use crate::ui::app::App;
use crate::ui::view::Focus;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key<C: Clock>(app: &mut App<C>, key: KeyEvent) -> KeyOutcome {
    if key.kind != KeyEventKind::Press {
        return KeyOutcome::Ignored;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q')) {
        app.request_quit();
        return KeyOutcome::Handled;
    }

    match key.code {
        KeyCode::Tab => {
            app.cycle_focus(true);
            KeyOutcome::Handled
        }
        KeyCode::BackTab => {
            app.cycle_focus(false);
            KeyOutcome::Handled
        }
        KeyCode::Esc => {
            app.set_focus(Focus::Outside);
            KeyOutcome::Handled
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.activate_focused();
            KeyOutcome::Handled
        }
        KeyCode::Left => app.on_viewport_key(Key::ArrowLeft),
        KeyCode::Right => app.on_viewport_key(Key::ArrowRight),
        _ => app.on_viewport_key(Key::Other),
    }
}

pub fn handle_mouse<C: Clock>(app: &mut App<C>, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(button) => {
            app.on_mouse_down(mouse.column, mouse.row, pointer_button(button))
        }
        MouseEventKind::Drag(MouseButton::Left) => app.on_mouse_drag(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => {
            app.on_mouse_up(mouse.column);
        }
        MouseEventKind::Moved => app.on_mouse_moved(mouse.column, mouse.row),
        _ => {}
    }
}

fn pointer_button(button: MouseButton) -> PointerButton {
    match button {
        MouseButton::Left => PointerButton::Primary,
        MouseButton::Right => PointerButton::Secondary,
        MouseButton::Middle => PointerButton::Middle,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
