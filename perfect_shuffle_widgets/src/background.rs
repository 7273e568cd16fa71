use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::theme::Theme;

/// Card-table felt: a vertical gradient with a slow drifting sheen
pub struct FeltWidget {
    pub tick: u64,
}

impl FeltWidget {
    pub fn new(tick: u64) -> Self {
        Self { tick }
    }
}

impl Widget for FeltWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = f32::from(area.height.max(1));
        // sheen crosses the screen every ~10s at 30fps
        let sheen_x = (self.tick % 300) as f32 / 300.0 * f32::from(area.width.max(1));

        for y in area.top()..area.bottom() {
            let t = f32::from(y - area.top()) / height;
            let base = blend(Theme::FELT, Theme::FELT_DARK, t);
            for x in area.left()..area.right() {
                let distance = (f32::from(x) - sheen_x).abs();
                let color = if distance < 6.0 {
                    blend(base, Theme::FELT, 0.5 - distance / 12.0)
                } else {
                    base
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(" ");
                    cell.set_bg(color);
                }
            }
        }
    }
}

/// Outline of the whole screen, lit in gold as far as `progress` has got,
/// clockwise from the top-left corner.
pub struct ProgressFrameWidget {
    pub progress: f64,
}

impl ProgressFrameWidget {
    pub fn new(progress: f64) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
        }
    }
}

impl Widget for ProgressFrameWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }

        let perimeter = frame_cells(area);
        let lit = (self.progress * perimeter.len() as f64).round() as usize;

        for (i, (x, y, symbol)) in perimeter.into_iter().enumerate() {
            let color = if i < lit { Theme::GOLD } else { Theme::BORDER };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol);
                cell.set_fg(color);
            }
        }
    }
}

/// Border cells in clockwise order starting at the top-left corner
fn frame_cells(area: Rect) -> Vec<(u16, u16, &'static str)> {
    let (left, top) = (area.left(), area.top());
    let (right, bottom) = (area.right() - 1, area.bottom() - 1);
    let mut cells = Vec::with_capacity(2 * (area.width + area.height) as usize);

    cells.push((left, top, "\u{256d}"));
    cells.extend((left + 1..right).map(|x| (x, top, "\u{2500}")));
    cells.push((right, top, "\u{256e}"));
    cells.extend((top + 1..bottom).map(|y| (right, y, "\u{2502}")));
    cells.push((right, bottom, "\u{256f}"));
    cells.extend((left + 1..right).rev().map(|x| (x, bottom, "\u{2500}")));
    cells.push((left, bottom, "\u{2570}"));
    cells.extend((top + 1..bottom).rev().map(|y| (left, y, "\u{2502}")));
    cells
}

fn blend(from: Color, to: Color, t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (f32::from(a) + (f32::from(b) - f32::from(a)) * t) as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => to,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_cells_cover_the_border_once() {
        let area = Rect::new(0, 0, 6, 4);
        let cells = frame_cells(area);
        assert_eq!(cells.len(), 2 * 6 + 2 * 4 - 4);
        assert_eq!(cells[0], (0, 0, "\u{256d}"));
        assert_eq!(cells[5], (5, 0, "\u{256e}"));
    }

    #[test]
    fn test_frame_lights_up_with_progress() {
        let area = Rect::new(0, 0, 6, 4);
        let mut buf = Buffer::empty(area);
        ProgressFrameWidget::new(0.5).render(area, &mut buf);
        let gold = frame_cells(area)
            .iter()
            .filter(|(x, y, _)| buf.cell((*x, *y)).map(|c| c.fg) == Some(Theme::GOLD))
            .count();
        assert_eq!(gold, 8);
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::Rgb(0, 0, 0);
        let b = Color::Rgb(100, 200, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 2.0), b);
    }
}
