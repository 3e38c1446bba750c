//! Slideshow core: slide index, autoplay, swipe gestures and announcements.
//!
//! A [`Carousel`] is one widget instance. It owns the slide index, the
//! gesture state and the autoplay timer handle, and exposes an explicit
//! command interface that the presentation boundary calls. Every command
//! runs to completion synchronously, so two navigation requests are always
//! applied in arrival order and the visible slide never disagrees with the
//! reported one.

pub mod announcer;
pub mod autoplay;
pub mod gesture;
pub mod index;
pub mod presenter;
pub mod scheduler;

use std::num::NonZeroUsize;
use std::time::Duration;

use thiserror::Error;

use crate::carousel::announcer::Announcer;
use crate::carousel::autoplay::{Autoplay, AutoplayState, Interaction, DEFAULT_INTERVAL};
use crate::carousel::gesture::{
    CancelPolicy, GestureIntent, GestureReducer, GestureState, PointerEvent, Swipe,
    DEFAULT_SWIPE_THRESHOLD,
};
use crate::carousel::index::SlideIndex;
use crate::carousel::presenter::{IndicatorState, Presenter};
use crate::carousel::scheduler::{Scheduler, TimerId};
use crate::ui::mvi::Reducer;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Why a carousel refused to activate. Nothing is scheduled and the
/// presenter is never touched when mounting fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MountError {
    #[error("no slides to show")]
    NoSlides,

    #[error("presenter is missing its {0}")]
    Structure(&'static str),
}

/// Tunables fixed for the lifetime of one carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselOptions {
    pub interval: Duration,
    pub swipe_threshold: f64,
    pub cancel_policy: CancelPolicy,
    /// Sampled once by the caller; autoplay never runs when set.
    pub reduced_motion: bool,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            swipe_threshold: DEFAULT_SWIPE_THRESHOLD,
            cancel_policy: CancelPolicy::default(),
            reduced_motion: false,
        }
    }
}

/// Side effects requested alongside an index update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavOptions {
    pub announce: bool,
    pub focus_indicator: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self {
            announce: true,
            focus_indicator: false,
        }
    }
}

impl NavOptions {
    /// No announcement, no focus change. Used by autoplay and mount.
    pub fn silent() -> Self {
        Self {
            announce: false,
            focus_indicator: false,
        }
    }

    /// Announce and move focus to the new indicator.
    pub fn focused() -> Self {
        Self {
            announce: true,
            focus_indicator: true,
        }
    }
}

/// Keys the viewport listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Whether the carousel consumed a key, suppressing its default action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Handled,
    Ignored,
}

pub struct Carousel<P: Presenter, S: Scheduler> {
    index: SlideIndex,
    gesture: GestureState,
    autoplay: Autoplay,
    announcer: Announcer,
    swipe_threshold: f64,
    cancel_policy: CancelPolicy,
    presenter: P,
    scheduler: S,
}

impl<P: Presenter, S: Scheduler> Carousel<P, S> {
    /// Activate a carousel over `slides` slides.
    ///
    /// Shows the first slide without announcing it, then starts autoplay
    /// unless reduced motion is preferred.
    pub fn mount(
        slides: usize,
        presenter: P,
        scheduler: S,
        options: CarouselOptions,
    ) -> Result<Self, MountError> {
        let count = NonZeroUsize::new(slides).ok_or(MountError::NoSlides)?;
        if let Some(missing) = presenter.structure().missing(slides) {
            return Err(MountError::Structure(missing));
        }

        let mut carousel = Self {
            index: SlideIndex::new(count),
            gesture: GestureState::default(),
            autoplay: Autoplay::new(options.interval, options.reduced_motion),
            announcer: Announcer::new(),
            swipe_threshold: options.swipe_threshold,
            cancel_policy: options.cancel_policy,
            presenter,
            scheduler,
        };
        carousel.set_index(0, NavOptions::silent());
        carousel.start_autoplay();
        tracing::info!(
            slides,
            reduced_motion = options.reduced_motion,
            "carousel mounted"
        );
        Ok(carousel)
    }

    pub fn index(&self) -> usize {
        self.index.current()
    }

    pub fn count(&self) -> usize {
        self.index.count()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access for boundary-owned state (focus, hover). Slide and
    /// indicator state must only change through carousel commands.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn autoplay_state(&self) -> AutoplayState {
        self.autoplay.state()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn reduced_motion(&self) -> bool {
        self.autoplay.reduced_motion()
    }

    /// Announcements made since mount.
    pub fn announcements(&self) -> u64 {
        self.announcer.announced()
    }

    /// The single mutation path for the slide index.
    ///
    /// Redraws the slide and every indicator even when `target` normalizes
    /// to the current index.
    pub fn set_index(&mut self, target: isize, options: NavOptions) {
        let previous = self.index.current();
        let index = self.index.set(target);
        let count = self.index.count();

        self.presenter.show_slide(index);
        for slide in 0..count {
            self.presenter
                .update_indicator(slide, IndicatorState::for_slide(slide, index));
        }
        if options.announce {
            self.announcer.announce(&mut self.presenter, index, count);
        }
        if options.focus_indicator {
            self.presenter.focus_indicator(index);
        }
        tracing::debug!(from = previous, to = index, target, "slide index set");
    }

    pub fn navigate_prev(&mut self) {
        self.set_index(self.index.offset(-1), NavOptions::default());
    }

    pub fn navigate_next(&mut self) {
        self.set_index(self.index.offset(1), NavOptions::default());
    }

    /// Indicator activation: jump to `slide` and keep focus on its indicator.
    pub fn navigate_to(&mut self, slide: usize) {
        let target = isize::try_from(slide).unwrap_or(isize::MAX);
        self.set_index(target, NavOptions::focused());
    }

    /// Viewport keydown.
    pub fn on_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::ArrowLeft => {
                self.navigate_prev();
                KeyOutcome::Handled
            }
            Key::ArrowRight => {
                self.navigate_next();
                KeyOutcome::Handled
            }
            Key::Other => KeyOutcome::Ignored,
        }
    }

    pub fn start_autoplay(&mut self) {
        self.autoplay.start(&mut self.scheduler);
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop(&mut self.scheduler);
    }

    /// Pause on direct interaction, resume when it ends.
    pub fn on_interaction(&mut self, interaction: Interaction) {
        tracing::trace!(?interaction, "interaction");
        if interaction.pauses() {
            self.stop_autoplay();
        } else {
            self.start_autoplay();
        }
    }

    /// Deliver a scheduler tick. Returns false for ticks that do not belong
    /// to the live autoplay timer.
    pub fn on_timer(&mut self, timer: TimerId) -> bool {
        if !self.autoplay.owns(timer) {
            tracing::trace!(timer = timer.raw(), "stale timer tick dropped");
            return false;
        }
        self.set_index(self.index.offset(1), NavOptions::silent());
        true
    }

    /// Pointer pressed on the viewport.
    ///
    /// Any press inside the widget pauses autoplay; only a primary mouse
    /// button or a touch/pen contact starts tracking a swipe. A press while
    /// another pointer is tracked abandons that gesture and frees its capture.
    pub fn on_pointer_down(&mut self, event: PointerEvent) {
        self.on_interaction(Interaction::PointerDown);
        if !event.starts_gesture() {
            return;
        }
        if let GestureState::Active { pointer_id, .. } = self.gesture {
            tracing::trace!(pointer_id, "gesture abandoned by new press");
            self.presenter.release_pointer(pointer_id);
        }
        dispatch_mvi!(
            self,
            gesture,
            GestureReducer,
            GestureIntent::Press {
                pointer_id: event.pointer_id,
                x: event.x,
            }
        );
        self.presenter.capture_pointer(event.pointer_id);
    }

    /// Tracks travel only; never navigates.
    pub fn on_pointer_move(&mut self, event: PointerEvent) {
        dispatch_mvi!(
            self,
            gesture,
            GestureReducer,
            GestureIntent::Move {
                pointer_id: event.pointer_id,
                x: event.x,
            }
        );
    }

    pub fn on_pointer_up(&mut self, event: PointerEvent) -> Option<Swipe> {
        let delta_x = self.finish_gesture(event.pointer_id)?;
        self.on_gesture_end(delta_x)
    }

    /// The environment took the pointer away mid-gesture.
    pub fn on_pointer_cancel(&mut self, event: PointerEvent) -> Option<Swipe> {
        let delta_x = self.finish_gesture(event.pointer_id)?;
        match self.cancel_policy {
            CancelPolicy::Discard => {
                tracing::trace!(delta_x, "cancelled gesture discarded");
                None
            }
            CancelPolicy::Evaluate => self.on_gesture_end(delta_x),
        }
    }

    /// Evaluate a completed drag of `delta_x` and navigate if it was a swipe.
    pub fn on_gesture_end(&mut self, delta_x: f64) -> Option<Swipe> {
        let swipe = Swipe::from_delta(delta_x, self.swipe_threshold)?;
        tracing::debug!(?swipe, delta_x, "swipe recognized");
        self.set_index(self.index.offset(swipe.offset()), NavOptions::default());
        Some(swipe)
    }

    fn finish_gesture(&mut self, pointer_id: u64) -> Option<f64> {
        if !self.gesture.tracks(pointer_id) {
            return None;
        }
        let delta_x = self.gesture.delta_x();
        dispatch_mvi!(
            self,
            gesture,
            GestureReducer,
            GestureIntent::Release { pointer_id }
        );
        self.presenter.release_pointer(pointer_id);
        delta_x
    }
}

impl<P: Presenter, S: Scheduler> Drop for Carousel<P, S> {
    fn drop(&mut self) {
        self.autoplay.stop(&mut self.scheduler);
    }
}

impl<P: Presenter, S: Scheduler> std::fmt::Debug for Carousel<P, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Carousel")
            .field("index", &self.index)
            .field("gesture", &self.gesture)
            .field("autoplay", &self.autoplay)
            .finish_non_exhaustive()
    }
}
