use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

const DARKEST: f64 = 28.0;
const LIGHTEST: f64 = 88.0;

/// Decorative grayscale waves drawn behind the panels.
pub(crate) struct WaveBackground {
    phase: f64,
}

impl WaveBackground {
    pub fn new(frame: u64) -> Self {
        Self {
            phase: frame as f64 * 0.12,
        }
    }
}

/// Gray level for one cell.
pub(crate) fn shade(x: u16, y: u16, phase: f64) -> u8 {
    let wave = (f64::from(x) * 0.18 + f64::from(y) * 0.55 + phase).sin();
    let swell = (f64::from(x) * 0.05 - phase * 0.5).cos();
    let level = ((wave + swell) / 4.0 + 0.5).clamp(0.0, 1.0);
    (DARKEST + (LIGHTEST - DARKEST) * level).round() as u8
}

impl Widget for WaveBackground {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                let gray = shade(x, y, self.phase);
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('~').set_fg(Color::Rgb(gray, gray, gray));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_stays_in_range() {
        for phase in [0.0, 1.3, 7.9] {
            for y in 0..40 {
                for x in 0..120 {
                    let gray = shade(x, y, phase);
                    assert!((28..=88).contains(&gray));
                }
            }
        }
    }

    #[test]
    fn test_render_fills_area() {
        let area = Rect::new(0, 0, 8, 3);
        let mut buf = Buffer::empty(area);
        WaveBackground::new(0).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), "~");
        assert_eq!(buf[(7, 2)].symbol(), "~");
    }
}
