//! Boundary between the carousel core and whatever draws it.

/// Selection state of one indicator control.
///
/// Only the indicator for the current slide is selected, and only that one
/// is reachable with the Tab key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorState {
    pub selected: bool,
    pub focusable: bool,
}

impl IndicatorState {
    pub fn for_slide(slide: usize, current: usize) -> Self {
        let active = slide == current;
        Self {
            selected: active,
            focusable: active,
        }
    }
}

/// Structural elements a presenter offers to the core.
///
/// Mounting refuses to activate when anything is missing or when the
/// indicator count disagrees with the slide count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Structure {
    pub viewport: bool,
    pub track: bool,
    pub prev_control: bool,
    pub next_control: bool,
    pub indicators: usize,
    pub live_region: bool,
}

impl Structure {
    /// Every element present, with one indicator per slide.
    pub fn complete(slides: usize) -> Self {
        Self {
            viewport: true,
            track: true,
            prev_control: true,
            next_control: true,
            indicators: slides,
            live_region: true,
        }
    }

    /// Name of the first missing or mismatched element, if any.
    pub fn missing(&self, slides: usize) -> Option<&'static str> {
        if !self.viewport {
            Some("viewport")
        } else if !self.track {
            Some("track")
        } else if !self.prev_control {
            Some("previous control")
        } else if !self.next_control {
            Some("next control")
        } else if self.indicators != slides {
            Some("indicators")
        } else if !self.live_region {
            Some("live region")
        } else {
            None
        }
    }
}

/// Rendering side of the carousel.
///
/// The core calls these synchronously from inside its commands; an
/// implementation must not call back into the carousel.
pub trait Presenter {
    /// Elements available for the core to drive.
    fn structure(&self) -> Structure;

    /// Move the visible slide. Called on every index update, including
    /// updates to the slide already shown.
    fn show_slide(&mut self, index: usize);

    fn update_indicator(&mut self, indicator: usize, state: IndicatorState);

    /// Give input focus to an indicator without scrolling the view.
    fn focus_indicator(&mut self, indicator: usize);

    /// Replace the live status text.
    fn set_live_text(&mut self, text: &str);

    /// Route later events for `pointer_id` to the viewport.
    fn capture_pointer(&mut self, pointer_id: u64);

    fn release_pointer(&mut self, pointer_id: u64);
}
