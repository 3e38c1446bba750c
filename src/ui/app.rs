use crate::carousel::autoplay::Interaction;
use crate::carousel::gesture::{PointerButton, PointerEvent, Swipe};
use crate::carousel::scheduler::{Clock, IntervalScheduler, SystemClock};
use crate::carousel::{Carousel, Key, KeyOutcome, MountError};
use crate::config::Config;
use crate::deck::Slide;
use crate::ui::layout::{body_rect, CarouselLayout, HitTarget};
use crate::ui::view::{Focus, SlideView};
use ratatui::layout::{Position, Rect};
use std::time::Duration;

/// Terminals report a single mouse, so every mouse gesture uses this id.
pub const MOUSE_POINTER_ID: u64 = 1;

pub type TerminalCarousel<C> = Carousel<SlideView, IntervalScheduler<C>>;

/// Terminal application state around one carousel.
///
/// Translates screen-level input (mouse positions, focus movement) into
/// carousel commands and pause/resume interactions.
pub struct App<C: Clock = SystemClock> {
    should_quit: bool,
    slides: Vec<Slide>,
    carousel: Option<TerminalCarousel<C>>,
    mount_error: Option<MountError>,
    area: Rect,
    cell_width: f64,
    region_label: String,
}

impl<C: Clock> App<C> {
    pub fn new(slides: Vec<Slide>, config: &Config, reduced_motion: bool, clock: C) -> Self {
        let view = SlideView::new(slides.len());
        let scheduler = IntervalScheduler::new(clock);
        let options = config.carousel_options(reduced_motion);
        let (carousel, mount_error) = match Carousel::mount(slides.len(), view, scheduler, options)
        {
            Ok(carousel) => (Some(carousel), None),
            Err(err) => {
                tracing::debug!(error = %err, "carousel not activated");
                (None, Some(err))
            }
        };

        Self {
            should_quit: false,
            slides,
            carousel,
            mount_error,
            area: Rect::default(),
            cell_width: config.gesture.cell_width,
            region_label: config.accessibility.region_label.clone(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn carousel(&self) -> Option<&TerminalCarousel<C>> {
        self.carousel.as_ref()
    }

    pub fn carousel_mut(&mut self) -> Option<&mut TerminalCarousel<C>> {
        self.carousel.as_mut()
    }

    pub fn mount_error(&self) -> Option<&MountError> {
        self.mount_error.as_ref()
    }

    pub fn region_label(&self) -> &str {
        &self.region_label
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        let carousel = self.carousel.as_ref()?;
        self.slides.get(carousel.index())
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.area = Rect::new(0, 0, cols, rows);
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn layout(&self) -> CarouselLayout {
        CarouselLayout::new(body_rect(self.area), self.slides.len())
    }

    pub fn focus(&self) -> Focus {
        self.carousel
            .as_ref()
            .map(|carousel| carousel.presenter().focus())
            .unwrap_or_default()
    }

    /// Move keyboard focus, pausing autoplay when focus enters the widget
    /// and resuming it when focus leaves.
    pub fn set_focus(&mut self, focus: Focus) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        let was_within = carousel.presenter().focus().is_within();
        carousel.presenter_mut().set_focus(focus);
        Self::sync_focus(carousel, was_within);
    }

    pub fn cycle_focus(&mut self, forward: bool) {
        let Some(carousel) = self.carousel.as_ref() else {
            return;
        };
        let view = carousel.presenter();
        let next = view.focus().cycle(forward, view.focusable_indicator());
        self.set_focus(next);
    }

    /// Enter/Space on the focused control.
    pub fn activate_focused(&mut self) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        match carousel.presenter().focus() {
            Focus::Prev => carousel.navigate_prev(),
            Focus::Next => carousel.navigate_next(),
            Focus::Indicator(slide) => carousel.navigate_to(slide),
            Focus::Viewport | Focus::Outside => {}
        }
    }

    /// Arrow keys only navigate while the viewport holds focus.
    pub fn on_viewport_key(&mut self, key: Key) -> KeyOutcome {
        match self.carousel.as_mut() {
            Some(carousel) if carousel.presenter().focus() == Focus::Viewport => {
                carousel.on_key(key)
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Deliver every autoplay tick that has come due. Returns how many
    /// advanced the slideshow.
    pub fn fire_due_timers(&mut self) -> usize {
        let Some(carousel) = self.carousel.as_mut() else {
            return 0;
        };
        let due = carousel.scheduler_mut().poll_due();
        due.into_iter().filter(|timer| carousel.on_timer(*timer)).count()
    }

    /// How long the event loop may sleep before a timer is due.
    pub fn next_wakeup(&self) -> Option<Duration> {
        self.carousel
            .as_ref()
            .and_then(|carousel| carousel.scheduler().until_next())
    }

    pub fn on_mouse_moved(&mut self, column: u16, row: u16) {
        let inside = self.layout().region.contains(Position::new(column, row));
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        if carousel.presenter().hovered() == inside {
            return;
        }
        carousel.presenter_mut().set_hovered(inside);
        carousel.on_interaction(if inside {
            Interaction::HoverEnter
        } else {
            Interaction::HoverLeave
        });
    }

    pub fn on_mouse_down(&mut self, column: u16, row: u16, button: PointerButton) {
        let target = self.layout().hit(column, row);
        let x = self.pointer_x(column);
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        let was_within = carousel.presenter().focus().is_within();

        match target {
            None => carousel.presenter_mut().set_focus(Focus::Outside),
            Some(HitTarget::Viewport) => {
                carousel.presenter_mut().set_focus(Focus::Viewport);
                carousel.on_pointer_down(PointerEvent::mouse(MOUSE_POINTER_ID, button, x));
            }
            Some(target) => {
                carousel.on_interaction(Interaction::PointerDown);
                if button == PointerButton::Primary {
                    match target {
                        HitTarget::Prev => {
                            carousel.presenter_mut().set_focus(Focus::Prev);
                            carousel.navigate_prev();
                        }
                        HitTarget::Next => {
                            carousel.presenter_mut().set_focus(Focus::Next);
                            carousel.navigate_next();
                        }
                        HitTarget::Indicator(slide) => carousel.navigate_to(slide),
                        HitTarget::Viewport | HitTarget::Region => {}
                    }
                }
            }
        }

        Self::sync_focus(carousel, was_within);
    }

    /// Drag events reach the viewport wherever they happen while the mouse
    /// is captured.
    pub fn on_mouse_drag(&mut self, column: u16) {
        let x = self.pointer_x(column);
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };
        if carousel.presenter().captured() == Some(MOUSE_POINTER_ID) {
            carousel.on_pointer_move(PointerEvent::mouse(
                MOUSE_POINTER_ID,
                PointerButton::Primary,
                x,
            ));
        }
    }

    pub fn on_mouse_up(&mut self, column: u16) -> Option<Swipe> {
        let x = self.pointer_x(column);
        let carousel = self.carousel.as_mut()?;
        if carousel.presenter().captured() != Some(MOUSE_POINTER_ID) {
            return None;
        }
        carousel.on_pointer_up(PointerEvent::mouse(
            MOUSE_POINTER_ID,
            PointerButton::Primary,
            x,
        ))
    }

    /// The terminal lost focus mid-drag: the environment cancelled the
    /// gesture.
    pub fn on_focus_lost(&mut self) -> Option<Swipe> {
        let carousel = self.carousel.as_mut()?;
        if !carousel.gesture().tracks(MOUSE_POINTER_ID) {
            return None;
        }
        carousel.on_pointer_cancel(PointerEvent::mouse(
            MOUSE_POINTER_ID,
            PointerButton::Primary,
            0.0,
        ))
    }

    fn pointer_x(&self, column: u16) -> f64 {
        f64::from(column) * self.cell_width
    }

    fn sync_focus(carousel: &mut TerminalCarousel<C>, was_within: bool) {
        let within = carousel.presenter().focus().is_within();
        match (was_within, within) {
            (false, true) => carousel.on_interaction(Interaction::FocusEnter),
            (true, false) => carousel.on_interaction(Interaction::FocusLeave),
            _ => {}
        }
    }
}
