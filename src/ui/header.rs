use crate::carousel::autoplay::AutoplayState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_PAUSED};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Autoplay status as shown in the header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PlaybackStatus {
    Playing,
    Paused,
    ReducedMotion,
    Inactive,
}

impl PlaybackStatus {
    pub fn from_autoplay(state: Option<AutoplayState>, reduced_motion: bool) -> Self {
        match state {
            None => PlaybackStatus::Inactive,
            Some(_) if reduced_motion => PlaybackStatus::ReducedMotion,
            Some(AutoplayState::Running { .. }) => PlaybackStatus::Playing,
            Some(AutoplayState::Stopped) => PlaybackStatus::Paused,
        }
    }

    fn label(self) -> &'static str {
        match self {
            PlaybackStatus::Playing => "▶ Autoplay",
            PlaybackStatus::Paused => "⏸ Paused",
            PlaybackStatus::ReducedMotion => "Reduced motion",
            PlaybackStatus::Inactive => "Inactive",
        }
    }
}

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(
        &self,
        title: &str,
        position: Option<String>,
        status: PlaybackStatus,
    ) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let status_style = match status {
            PlaybackStatus::Playing => Style::default().fg(STATUS_OK),
            _ => Style::default().fg(STATUS_PAUSED),
        };
        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(title.to_string(), text_style),
        ];
        if let Some(position) = position {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(position, text_style));
        }
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(status.label(), status_style));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}
