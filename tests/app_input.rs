use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use tui_carousel::carousel::scheduler::ManualClock;
use tui_carousel::carousel::{KeyOutcome, MountError};
use tui_carousel::config::Config;
use tui_carousel::deck::Slide;
use tui_carousel::ui::app::App;
use tui_carousel::ui::input::{handle_key, handle_mouse};
use tui_carousel::ui::view::Focus;

fn slides(n: usize) -> Vec<Slide> {
    (1..=n)
        .map(|i| Slide::new(format!("Slide {i}"), "body"))
        .collect()
}

fn app_with(n: usize, reduced_motion: bool) -> (App<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let mut app = App::new(slides(n), &Config::default(), reduced_motion, clock.clone());
    app.on_resize(80, 24);
    (app, clock)
}

fn app(n: usize) -> (App<ManualClock>, ManualClock) {
    app_with(n, false)
}

fn press(app: &mut App<ManualClock>, code: KeyCode) -> KeyOutcome {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(app: &mut App<ManualClock>, kind: MouseEventKind, column: u16, row: u16) {
    handle_mouse(
        app,
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
    );
}

fn index(app: &App<ManualClock>) -> usize {
    app.carousel().unwrap().index()
}

fn live_text(app: &App<ManualClock>) -> String {
    app.carousel().unwrap().presenter().live_text().to_string()
}

fn autoplaying(app: &App<ManualClock>) -> bool {
    app.carousel().unwrap().is_autoplaying()
}

#[test]
fn tab_into_viewport_then_arrow_keys() {
    let (mut app, _clock) = app(3);

    assert_eq!(press(&mut app, KeyCode::Tab), KeyOutcome::Handled);
    assert_eq!(app.focus(), Focus::Viewport);
    assert!(!autoplaying(&app));

    assert_eq!(press(&mut app, KeyCode::Right), KeyOutcome::Handled);
    assert_eq!(live_text(&app), "Slide 2 of 3");
    assert_eq!(press(&mut app, KeyCode::Right), KeyOutcome::Handled);
    assert_eq!(index(&app), 2);
    assert_eq!(live_text(&app), "Slide 3 of 3");
    assert_eq!(app.current_slide().unwrap().title, "Slide 3");
}

#[test]
fn arrow_keys_need_viewport_focus() {
    let (mut app, _clock) = app(3);
    assert_eq!(press(&mut app, KeyCode::Right), KeyOutcome::Ignored);
    assert_eq!(index(&app), 0);

    app.set_focus(Focus::Next);
    assert_eq!(press(&mut app, KeyCode::Left), KeyOutcome::Ignored);
    assert_eq!(index(&app), 0);
}

#[test]
fn other_keys_on_viewport_are_not_consumed() {
    let (mut app, _clock) = app(3);
    app.set_focus(Focus::Viewport);
    assert_eq!(press(&mut app, KeyCode::Char('x')), KeyOutcome::Ignored);
    assert_eq!(press(&mut app, KeyCode::Down), KeyOutcome::Ignored);
}

#[test]
fn key_release_events_are_ignored() {
    let (mut app, _clock) = app(3);
    app.set_focus(Focus::Viewport);
    let release = KeyEvent::new_with_kind(KeyCode::Right, KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(handle_key(&mut app, release), KeyOutcome::Ignored);
    assert_eq!(index(&app), 0);
}

#[test]
fn escape_leaves_the_widget_and_resumes() {
    let (mut app, _clock) = app(3);
    press(&mut app, KeyCode::Tab);
    assert!(!autoplaying(&app));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.focus(), Focus::Outside);
    assert!(autoplaying(&app));
}

#[test]
fn tab_reaches_only_the_current_indicator() {
    let (mut app, _clock) = app(4);
    app.carousel_mut().unwrap().navigate_next();

    for _ in 0..4 {
        press(&mut app, KeyCode::Tab);
    }
    assert_eq!(app.focus(), Focus::Indicator(1));

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus(), Focus::Outside);
    assert!(autoplaying(&app));
}

#[test]
fn enter_activates_focused_buttons() {
    let (mut app, _clock) = app(3);
    app.set_focus(Focus::Next);
    press(&mut app, KeyCode::Enter);
    assert_eq!(index(&app), 1);

    app.set_focus(Focus::Prev);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Char(' '));
    assert_eq!(index(&app), 2);
    assert_eq!(app.focus(), Focus::Prev);
}

#[test]
fn mouse_swipe_left_goes_next() {
    let (mut app, _clock) = app(3);
    let viewport = app.layout().viewport;
    let row = viewport.y + 1;
    let start = viewport.x + 40;

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), start, row);
    assert_eq!(app.focus(), Focus::Viewport);
    assert!(!autoplaying(&app));

    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), start - 5, row);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), start - 10, row);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), start - 10, row);

    assert_eq!(index(&app), 1);
    assert_eq!(live_text(&app), "Slide 2 of 3");
    assert_eq!(app.carousel().unwrap().presenter().captured(), None);
}

#[test]
fn drag_may_leave_the_viewport_while_captured() {
    let (mut app, _clock) = app(3);
    let viewport = app.layout().viewport;
    let start = viewport.x + 2;

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), start, viewport.y);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), start + 30, 0);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), start + 30, 0);

    assert_eq!(index(&app), 2);
}

#[test]
fn short_mouse_drag_stays() {
    let (mut app, _clock) = app(3);
    let viewport = app.layout().viewport;
    let start = viewport.x + 20;

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), start, viewport.y);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), start - 3, viewport.y);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), start - 3, viewport.y);

    assert_eq!(index(&app), 0);
    assert_eq!(live_text(&app), "");
}

#[test]
fn swipe_needs_more_than_five_columns() {
    let (mut app, _clock) = app(3);
    let viewport = app.layout().viewport;
    let start = viewport.x + 30;

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), start, viewport.y);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), start - 5, viewport.y);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), start - 5, viewport.y);
    assert_eq!(index(&app), 0);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), start, viewport.y);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), start - 6, viewport.y);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), start - 6, viewport.y);
    assert_eq!(index(&app), 1);
}

#[test]
fn focus_loss_cancels_a_drag() {
    let (mut app, _clock) = app(3);
    let viewport = app.layout().viewport;
    let start = viewport.x + 40;

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), start, viewport.y);
    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), start - 20, viewport.y);
    assert_eq!(app.on_focus_lost(), None);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), start - 20, viewport.y);

    assert_eq!(index(&app), 0);
    assert!(!app.carousel().unwrap().gesture().is_active());
}

#[test]
fn hover_pauses_and_leaving_resumes() {
    let (mut app, _clock) = app(3);
    let region = app.layout().region;

    mouse(&mut app, MouseEventKind::Moved, region.x + 2, region.y + 2);
    assert!(!autoplaying(&app));
    assert!(app.carousel().unwrap().presenter().hovered());

    mouse(&mut app, MouseEventKind::Moved, 0, 0);
    assert!(autoplaying(&app));
}

#[test]
fn clicking_buttons_and_indicators() {
    let (mut app, _clock) = app(4);
    let layout = app.layout();

    mouse(
        &mut app,
        MouseEventKind::Down(MouseButton::Left),
        layout.prev.x,
        layout.prev.y,
    );
    assert_eq!(index(&app), 3);
    assert_eq!(app.focus(), Focus::Prev);

    let dot = layout.indicators[1];
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), dot.x, dot.y);
    assert_eq!(index(&app), 1);
    assert_eq!(app.focus(), Focus::Indicator(1));
    assert_eq!(live_text(&app), "Slide 2 of 4");
}

#[test]
fn secondary_click_on_button_only_pauses() {
    let (mut app, _clock) = app(3);
    let next = app.layout().next;
    mouse(&mut app, MouseEventKind::Down(MouseButton::Right), next.x, next.y);
    assert_eq!(index(&app), 0);
    assert!(!autoplaying(&app));
}

#[test]
fn clicking_outside_blurs() {
    let (mut app, _clock) = app(3);
    app.set_focus(Focus::Viewport);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 0, 0);
    assert_eq!(app.focus(), Focus::Outside);
    assert!(autoplaying(&app));
}

#[test]
fn due_timers_advance_silently() {
    let (mut app, clock) = app(3);
    assert_eq!(app.next_wakeup(), Some(Duration::from_millis(3000)));

    clock.advance(Duration::from_millis(2999));
    assert_eq!(app.fire_due_timers(), 0);
    clock.advance(Duration::from_millis(1));
    assert_eq!(app.fire_due_timers(), 1);

    assert_eq!(index(&app), 1);
    assert_eq!(live_text(&app), "");
}

#[test]
fn reduced_motion_has_nothing_to_wait_for() {
    let (mut app, clock) = app_with(3, true);
    assert_eq!(app.next_wakeup(), None);
    clock.advance(Duration::from_secs(60));
    assert_eq!(app.fire_due_timers(), 0);
    assert_eq!(index(&app), 0);
}

#[test]
fn empty_deck_stays_inert() {
    let (mut app, _clock) = app(0);
    assert!(app.carousel().is_none());
    assert_eq!(app.mount_error(), Some(&MountError::NoSlides));

    assert_eq!(press(&mut app, KeyCode::Tab), KeyOutcome::Handled);
    assert_eq!(press(&mut app, KeyCode::Right), KeyOutcome::Ignored);
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 10, 10);
    assert_eq!(app.fire_due_timers(), 0);
    assert_eq!(app.next_wakeup(), None);
    assert_eq!(app.focus(), Focus::Outside);
}

#[test]
fn q_quits() {
    let (mut app, _clock) = app(2);
    assert!(!app.should_quit());
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
