#![allow(clippy::cast_possible_truncation)]

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};
use tiny_skia::Pixmap;

pub const HALF_BLOCK: char = '▀';

pub struct Backdrop<'a> {
    pub image: Option<&'a Pixmap>,
}

impl Widget for Backdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(image) = self.image else {
            paint_blank(area, buf);
            return;
        };
        for row in 0..area.height {
            for col in 0..area.width {
                let top = sample(image, col, row * 2);
                let bottom = sample(image, col, row * 2 + 1);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char(HALF_BLOCK).set_fg(top).set_bg(bottom);
                }
            }
        }
    }
}

fn paint_blank(area: Rect, buf: &mut Buffer) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(' ').set_bg(Color::Black);
            }
        }
    }
}

fn sample(image: &Pixmap, x: u16, y: u16) -> Color {
    image
        .pixel(u32::from(x), u32::from(y))
        .map_or(Color::Black, |pixel| {
            let c = pixel.demultiply();
            Color::Rgb(c.red(), c.green(), c.blue())
        })
}

#[cfg(test)]
mod tests {
    use tiny_skia::Color as SkiaColor;

    use super::*;

    #[test]
    fn upper_and_lower_pixels_map_to_fg_and_bg() {
        let mut image = Pixmap::new(1, 2).unwrap();
        image.fill(SkiaColor::from_rgba8(200, 10, 10, 255));
        let bottom = tiny_skia::Rect::from_xywh(0.0, 1.0, 1.0, 1.0).unwrap();
        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(10, 10, 200, 255);
        image.fill_rect(bottom, &paint, tiny_skia::Transform::identity(), None);

        let area = Rect::new(0, 0, 1, 1);
        let mut buf = Buffer::empty(area);
        Backdrop {
            image: Some(&image),
        }
        .render(area, &mut buf);

        let cell = &buf[(0, 0)];
        assert_eq!(cell.symbol(), "▀");
        assert_eq!(cell.fg, Color::Rgb(200, 10, 10));
        assert_eq!(cell.bg, Color::Rgb(10, 10, 200));
    }

    #[test]
    fn cells_past_the_image_fall_back_to_black() {
        let image = Pixmap::new(1, 1).unwrap();
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        Backdrop {
            image: Some(&image),
        }
        .render(area, &mut buf);
        assert_eq!(buf[(1, 0)].fg, Color::Black);
        assert_eq!(buf[(0, 0)].bg, Color::Black);
    }

    #[test]
    fn missing_image_paints_blank_cells() {
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        Backdrop { image: None }.render(area, &mut buf);
        assert_eq!(buf[(2, 1)].symbol(), " ");
        assert_eq!(buf[(2, 1)].bg, Color::Black);
    }
}
