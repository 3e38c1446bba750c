use ratatui::layout::{Constraint, Layout, Margin, Position, Rect};

/// Columns reserved for each of the previous/next buttons.
pub const BUTTON_WIDTH: u16 = 5;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_rect(area: Rect) -> Rect {
    layout_regions(area).1
}

/// Control under a mouse position.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HitTarget {
    Prev,
    Next,
    Viewport,
    Indicator(usize),
    /// Inside the carousel but not on a control (border, live line).
    Region,
}

/// Screen rectangles of every carousel control.
///
/// Shared by the renderer and by mouse hit-testing so both agree on where
/// things are.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CarouselLayout {
    pub region: Rect,
    pub prev: Rect,
    pub viewport: Rect,
    pub next: Rect,
    pub indicators: Vec<Rect>,
    pub live: Rect,
}

impl CarouselLayout {
    pub fn new(region: Rect, slides: usize) -> Self {
        let inner = region.inner(Margin::new(1, 1));
        let [stage, dots, live] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);
        let [prev, viewport, next] = Layout::horizontal([
            Constraint::Length(BUTTON_WIDTH),
            Constraint::Min(0),
            Constraint::Length(BUTTON_WIDTH),
        ])
        .areas(stage);

        Self {
            region,
            prev,
            viewport,
            next,
            indicators: indicator_rects(dots, slides),
            live,
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if !self.region.contains(position) {
            return None;
        }
        if let Some(indicator) = self
            .indicators
            .iter()
            .position(|rect| rect.contains(position))
        {
            return Some(HitTarget::Indicator(indicator));
        }
        let target = if self.prev.contains(position) {
            HitTarget::Prev
        } else if self.next.contains(position) {
            HitTarget::Next
        } else if self.viewport.contains(position) {
            HitTarget::Viewport
        } else {
            HitTarget::Region
        };
        Some(target)
    }
}

/// One-cell indicators separated by a blank column, centered in `row`.
/// Indicators that do not fit get an empty rect.
fn indicator_rects(row: Rect, slides: usize) -> Vec<Rect> {
    let needed = slides.saturating_mul(2).saturating_sub(1);
    let needed = u16::try_from(needed).unwrap_or(u16::MAX);
    let start = row.x + row.width.saturating_sub(needed) / 2;
    (0..slides)
        .map(|i| {
            let offset = u16::try_from(i * 2).unwrap_or(u16::MAX);
            let x = start.saturating_add(offset);
            let width = if x < row.right() && row.height > 0 { 1 } else { 0 };
            Rect {
                x: x.min(row.right()),
                y: row.y,
                width,
                height: row.height.min(1),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controls_are_disjoint_and_hit_tested() {
        let layout = CarouselLayout::new(Rect::new(0, 3, 60, 15), 3);
        assert_eq!(layout.prev.width, BUTTON_WIDTH);
        assert_eq!(layout.next.width, BUTTON_WIDTH);
        assert_eq!(layout.viewport.width, 60 - 2 - 2 * BUTTON_WIDTH);

        assert_eq!(layout.hit(layout.prev.x, layout.prev.y), Some(HitTarget::Prev));
        assert_eq!(layout.hit(layout.next.x, layout.next.y), Some(HitTarget::Next));
        assert_eq!(
            layout.hit(layout.viewport.x + 3, layout.viewport.y + 1),
            Some(HitTarget::Viewport)
        );
        let dot = layout.indicators[2];
        assert_eq!(layout.hit(dot.x, dot.y), Some(HitTarget::Indicator(2)));
        assert_eq!(layout.hit(dot.x + 1, dot.y), Some(HitTarget::Region));
        assert_eq!(layout.hit(0, 0), None);
    }

    #[test]
    fn indicators_are_centered() {
        let rects = indicator_rects(Rect::new(0, 10, 11, 1), 3);
        let xs: Vec<u16> = rects.iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![3, 5, 7]);
    }

    #[test]
    fn overflowing_indicators_collapse() {
        let rects = indicator_rects(Rect::new(0, 0, 4, 1), 4);
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0].width, 1);
        assert_eq!(rects[1].width, 1);
        assert_eq!(rects[2].width, 0);
        assert_eq!(rects[3].width, 0);
    }
}
