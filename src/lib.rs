//! Terminal slideshow with autoplay, keyboard navigation and mouse swipes.
//!
//! [`carousel`] holds the widget core and is independent of the terminal;
//! [`ui`] is one presentation boundary for it.

pub mod carousel;
pub mod config;
pub mod deck;
pub mod logging;
pub mod shutdown;
pub mod ui;
