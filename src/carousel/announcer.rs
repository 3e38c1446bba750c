//! Live-region announcements and accessible labels.

use crate::carousel::presenter::Presenter;

/// Status text for the slide at zero-based `index` out of `count`.
pub fn position_message(index: usize, count: usize) -> String {
    format!("Slide {} of {}", index + 1, count)
}

/// Label carried by the slide group itself.
pub fn slide_label(index: usize, count: usize) -> String {
    format!("{} of {}", index + 1, count)
}

pub fn indicator_label(index: usize) -> String {
    format!("Go to slide {}", index + 1)
}

pub const PREV_LABEL: &str = "Previous slide";
pub const NEXT_LABEL: &str = "Next slide";

/// Writes position updates to the presenter's live region.
///
/// Only deliberate, discrete navigation reaches here. Autoplay ticks and
/// drag movement never announce.
#[derive(Debug, Default)]
pub struct Announcer {
    announced: u64,
}

impl Announcer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn announce<P: Presenter>(&mut self, presenter: &mut P, index: usize, count: usize) {
        let message = position_message(index, count);
        tracing::trace!(%message, "announce");
        presenter.set_live_text(&message);
        self.announced += 1;
    }

    /// Number of announcements made since mount.
    pub fn announced(&self) -> u64 {
        self.announced
    }
}
