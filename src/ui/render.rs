use crate::carousel::announcer::{indicator_label, slide_label, NEXT_LABEL, PREV_LABEL};
use crate::carousel::scheduler::Clock;
use crate::carousel::MountError;
use crate::ui::app::{App, TerminalCarousel};
use crate::ui::footer::Footer;
use crate::ui::header::{Header, PlaybackStatus};
use crate::ui::layout::{layout_regions, CarouselLayout};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, HEADER_TEXT, INDICATOR_IDLE, REGION_BORDER,
};
use crate::ui::view::Focus;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw<C: Clock>(frame: &mut Frame<'_>, app: &App<C>) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let carousel = app.carousel();
    let position = carousel.map(|c| slide_label(c.index(), c.count()));
    let status = PlaybackStatus::from_autoplay(
        carousel.map(|c| c.autoplay_state()),
        carousel.is_some_and(|c| c.reduced_motion()),
    );
    frame.render_widget(
        Header::new().widget(app.region_label(), position, status),
        header,
    );

    frame.render_widget(Clear, body);
    match carousel {
        Some(carousel) => {
            let layout = CarouselLayout::new(body, app.slides().len());
            draw_carousel(frame, app, carousel, &layout);
        }
        None => draw_inactive(frame, body, app.mount_error()),
    }

    frame.render_widget(Footer::new().widget(footer, app.focus()), footer);
}

fn draw_carousel<C: Clock>(
    frame: &mut Frame<'_>,
    app: &App<C>,
    carousel: &TerminalCarousel<C>,
    layout: &CarouselLayout,
) {
    let view = carousel.presenter();
    let focus = view.focus();

    let region_style = if focus.is_within() {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(REGION_BORDER)
    };
    frame.render_widget(
        Block::default()
            .title(Span::styled(app.region_label().to_string(), region_style))
            .borders(Borders::ALL)
            .border_style(region_style),
        layout.region,
    );

    draw_button(frame, layout.prev, "‹", focus == Focus::Prev);
    draw_button(frame, layout.next, "›", focus == Focus::Next);

    let viewport_style = if focus == Focus::Viewport {
        Style::default().fg(ACCENT)
    } else {
        Style::default().fg(INDICATOR_IDLE)
    };
    let mut lines = Vec::new();
    if let Some(slide) = app.current_slide() {
        lines.push(Line::from(Span::styled(
            slide.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.extend(slide.body.lines().map(|line| Line::from(line.to_string())));
    }
    let mut slide_block = Block::default()
        .title(Span::styled(
            slide_label(view.current(), carousel.count()),
            viewport_style,
        ))
        .borders(Borders::ALL)
        .border_style(viewport_style);
    if let Some(label) = focused_label(focus) {
        slide_block = slide_block.title_bottom(Span::styled(label, Style::default().fg(ACCENT)));
    }
    frame.render_widget(
        Paragraph::new(lines)
            .block(slide_block)
            .wrap(Wrap { trim: false }),
        layout.viewport,
    );

    for (slide, (rect, state)) in layout
        .indicators
        .iter()
        .zip(view.indicators())
        .enumerate()
    {
        if rect.width == 0 {
            continue;
        }
        let (symbol, mut style) = if state.selected {
            ("●", Style::default().fg(ACCENT))
        } else {
            ("○", Style::default().fg(INDICATOR_IDLE))
        };
        if focus == Focus::Indicator(slide) {
            style = style.add_modifier(Modifier::REVERSED);
        }
        frame.render_widget(Paragraph::new(Span::styled(symbol, style)), *rect);
    }

    frame.render_widget(
        Paragraph::new(view.live_text().to_string())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::DIM | Modifier::ITALIC),
            ),
        layout.live,
    );
}

/// Single-glyph button, vertically centered.
fn draw_button(frame: &mut Frame<'_>, area: Rect, glyph: &str, focused: bool) {
    if area.height == 0 {
        return;
    }
    let mut style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD);
    if focused {
        style = style.fg(ACCENT).bg(ACTIVE_HIGHLIGHT);
    }
    let glyph_row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(glyph.to_string(), style)).alignment(Alignment::Center),
        glyph_row,
    );
}

/// Accessible name of the focused control, shown under the slide.
fn focused_label(focus: Focus) -> Option<String> {
    match focus {
        Focus::Prev => Some(PREV_LABEL.to_string()),
        Focus::Next => Some(NEXT_LABEL.to_string()),
        Focus::Indicator(slide) => Some(indicator_label(slide)),
        Focus::Viewport | Focus::Outside => None,
    }
}

fn draw_inactive(frame: &mut Frame<'_>, body: Rect, error: Option<&MountError>) {
    let message = match error {
        Some(MountError::NoSlides) => "No slides to show.".to_string(),
        Some(err) => format!("Carousel unavailable: {err}"),
        None => String::new(),
    };
    frame.render_widget(
        Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(INDICATOR_IDLE))
            .block(Block::default().borders(Borders::ALL)),
        body,
    );
}
