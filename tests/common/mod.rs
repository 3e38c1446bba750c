//! Shared test utilities: a recording presenter and a shareable scheduler.

#![allow(dead_code, unused_imports)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use tui_carousel::carousel::presenter::{IndicatorState, Presenter, Structure};
use tui_carousel::carousel::scheduler::{
    IntervalScheduler, ManualClock, Scheduler, TimerId,
};
use tui_carousel::carousel::{Carousel, CarouselOptions, MountError};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ShowSlide(usize),
    UpdateIndicator(usize, IndicatorState),
    FocusIndicator(usize),
    LiveText(String),
    Capture(u64),
    Release(u64),
}

pub type CallLog = Rc<RefCell<Vec<Call>>>;

/// Presenter that mirrors what a real view would hold and logs every call
/// into a log the test keeps a handle to.
#[derive(Debug)]
pub struct RecordingPresenter {
    pub structure: Structure,
    pub shown: Option<usize>,
    pub indicators: Vec<IndicatorState>,
    pub focused: Option<usize>,
    pub live: Option<String>,
    pub captured: Option<u64>,
    log: CallLog,
}

impl RecordingPresenter {
    pub fn new(slides: usize) -> Self {
        Self::with_structure(Structure::complete(slides))
    }

    pub fn with_structure(structure: Structure) -> Self {
        Self {
            structure,
            shown: None,
            indicators: vec![IndicatorState::default(); structure.indicators],
            focused: None,
            live: None,
            captured: None,
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn log(&self) -> CallLog {
        Rc::clone(&self.log)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    /// Every live-region text written, oldest first.
    pub fn announcements(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|call| match call {
                Call::LiveText(text) => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn selected(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, state)| state.selected)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn focusable(&self) -> Vec<usize> {
        self.indicators
            .iter()
            .enumerate()
            .filter(|(_, state)| state.focusable)
            .map(|(i, _)| i)
            .collect()
    }

    fn record(&self, call: Call) {
        self.log.borrow_mut().push(call);
    }
}

impl Presenter for RecordingPresenter {
    fn structure(&self) -> Structure {
        self.structure
    }

    fn show_slide(&mut self, index: usize) {
        self.shown = Some(index);
        self.record(Call::ShowSlide(index));
    }

    fn update_indicator(&mut self, indicator: usize, state: IndicatorState) {
        self.indicators[indicator] = state;
        self.record(Call::UpdateIndicator(indicator, state));
    }

    fn focus_indicator(&mut self, indicator: usize) {
        self.focused = Some(indicator);
        self.record(Call::FocusIndicator(indicator));
    }

    fn set_live_text(&mut self, text: &str) {
        self.live = Some(text.to_string());
        self.record(Call::LiveText(text.to_string()));
    }

    fn capture_pointer(&mut self, pointer_id: u64) {
        self.captured = Some(pointer_id);
        self.record(Call::Capture(pointer_id));
    }

    fn release_pointer(&mut self, pointer_id: u64) {
        self.captured = None;
        self.record(Call::Release(pointer_id));
    }
}

/// Interval scheduler on a manual clock, shareable so a test can inspect
/// it while the carousel owns a handle.
#[derive(Debug, Clone)]
pub struct SharedScheduler {
    inner: Rc<RefCell<IntervalScheduler<ManualClock>>>,
    clock: ManualClock,
}

impl SharedScheduler {
    pub fn new() -> Self {
        let clock = ManualClock::new();
        Self {
            inner: Rc::new(RefCell::new(IntervalScheduler::new(clock.clone()))),
            clock,
        }
    }

    pub fn live(&self) -> usize {
        self.inner.borrow().live()
    }

    /// Move time forward and return the ticks that came due.
    pub fn advance(&self, by: Duration) -> Vec<TimerId> {
        self.clock.advance(by);
        self.inner.borrow_mut().poll_due()
    }
}

impl Scheduler for SharedScheduler {
    fn schedule_repeating(&mut self, period: Duration) -> TimerId {
        self.inner.borrow_mut().schedule_repeating(period)
    }

    fn cancel(&mut self, id: TimerId) {
        self.inner.borrow_mut().cancel(id);
    }
}

pub type TestCarousel = Carousel<RecordingPresenter, SharedScheduler>;

pub fn mount(slides: usize) -> (TestCarousel, SharedScheduler) {
    mount_with(slides, CarouselOptions::default())
}

pub fn mount_with(slides: usize, options: CarouselOptions) -> (TestCarousel, SharedScheduler) {
    let scheduler = SharedScheduler::new();
    let carousel = Carousel::mount(
        slides,
        RecordingPresenter::new(slides),
        scheduler.clone(),
        options,
    )
    .expect("mount should succeed");
    carousel.presenter().clear();
    (carousel, scheduler)
}

/// Advance time and deliver each due tick; returns how many advanced.
pub fn run_for(carousel: &mut TestCarousel, scheduler: &SharedScheduler, by: Duration) -> usize {
    scheduler
        .advance(by)
        .into_iter()
        .filter(|timer| carousel.on_timer(*timer))
        .count()
}

pub fn reduced_motion() -> CarouselOptions {
    CarouselOptions {
        reduced_motion: true,
        ..CarouselOptions::default()
    }
}
