use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use crate::ui::view::Focus;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Key hints for whatever currently holds focus.
pub fn hints_for(focus: Focus) -> &'static str {
    match focus {
        Focus::Outside => " Tab: Focus slides │ Drag: Swipe │ q: Quit",
        Focus::Viewport => " ←/→: Slide │ Tab: Next control │ Esc: Leave │ q: Quit",
        Focus::Prev | Focus::Next | Focus::Indicator(_) => {
            " Enter/Space: Activate │ Tab: Next control │ Esc: Leave │ q: Quit"
        }
    }
}

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, focus: Focus) -> Paragraph<'static> {
        let hints = hints_for(focus);
        let version = format!("v{} ", VERSION);

        // Pad by char count; the hints contain multi-byte arrows
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        Paragraph::new(Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]))
        .style(text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
