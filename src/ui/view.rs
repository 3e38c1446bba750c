//! Terminal-side presenter: the state the renderer draws from.

use crate::carousel::presenter::{IndicatorState, Presenter, Structure};

/// Which control holds keyboard focus.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Default)]
pub enum Focus {
    /// Focus is somewhere other than the carousel.
    #[default]
    Outside,
    Viewport,
    Prev,
    Next,
    Indicator(usize),
}

impl Focus {
    pub fn is_within(self) -> bool {
        self != Focus::Outside
    }

    /// Tab order: viewport, previous, next, the one focusable indicator,
    /// then out of the widget. Shift+Tab walks it backwards.
    pub fn cycle(self, forward: bool, focusable_indicator: Option<usize>) -> Focus {
        let mut order = vec![Focus::Outside, Focus::Viewport, Focus::Prev, Focus::Next];
        if let Some(indicator) = focusable_indicator {
            order.push(Focus::Indicator(indicator));
        }
        let position = match self {
            // A focused indicator that lost its tab stop still sits at the
            // end of the order.
            Focus::Indicator(_) => order.len() - 1,
            other => order.iter().position(|f| *f == other).unwrap_or(0),
        };
        let len = order.len();
        let next = if forward {
            (position + 1) % len
        } else {
            (position + len - 1) % len
        };
        order[next]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    current: usize,
    indicators: Vec<IndicatorState>,
    focus: Focus,
    live_text: String,
    captured: Option<u64>,
    hovered: bool,
}

impl SlideView {
    /// One indicator per slide; nothing is selected until the carousel
    /// mounts and draws the first slide.
    pub fn new(slides: usize) -> Self {
        Self {
            current: 0,
            indicators: vec![IndicatorState::default(); slides],
            focus: Focus::Outside,
            live_text: String::new(),
            captured: None,
            hovered: false,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn indicators(&self) -> &[IndicatorState] {
        &self.indicators
    }

    pub fn focusable_indicator(&self) -> Option<usize> {
        self.indicators.iter().position(|state| state.focusable)
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn live_text(&self) -> &str {
        &self.live_text
    }

    pub fn captured(&self) -> Option<u64> {
        self.captured
    }

    pub fn hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }
}

impl Presenter for SlideView {
    fn structure(&self) -> Structure {
        Structure::complete(self.indicators.len())
    }

    fn show_slide(&mut self, index: usize) {
        self.current = index;
    }

    fn update_indicator(&mut self, indicator: usize, state: IndicatorState) {
        if let Some(slot) = self.indicators.get_mut(indicator) {
            *slot = state;
        }
    }

    fn focus_indicator(&mut self, indicator: usize) {
        self.focus = Focus::Indicator(indicator);
    }

    fn set_live_text(&mut self, text: &str) {
        self.live_text.clear();
        self.live_text.push_str(text);
    }

    fn capture_pointer(&mut self, pointer_id: u64) {
        self.captured = Some(pointer_id);
    }

    fn release_pointer(&mut self, pointer_id: u64) {
        if self.captured == Some(pointer_id) {
            self.captured = None;
        }
    }
}
