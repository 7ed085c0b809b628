#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use tiny_skia::{
    Color, FillRule, GradientStop, LinearGradient, Paint, PathBuilder, Pixmap, Point,
    RadialGradient, Rect, Shader, SpreadMode, Stroke, Transform,
};

use super::{RenderError, palette::Rgba};

#[derive(Debug, Clone)]
pub struct Canvas {
    pixmap: Option<Pixmap>,
    width: f32,
    height: f32,
    ratio: f32,
    opaque: bool,
}

impl Canvas {
    #[must_use]
    pub fn new(opaque: bool) -> Self {
        Self {
            pixmap: None,
            width: 0.0,
            height: 0.0,
            ratio: 1.0,
            opaque,
        }
    }

    /// Reallocate the backing store at `logical × ratio`. A zero-sized buffer
    /// leaves the canvas detached; drawing into it is then a no-op.
    pub fn resize(&mut self, width: f32, height: f32, ratio: f32) -> Result<(), RenderError> {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.ratio = ratio;
        let (bw, bh) = backing_size(self.width, self.height, ratio);
        if bw == 0 || bh == 0 {
            self.pixmap = None;
            return Ok(());
        }
        let mut pixmap = Pixmap::new(bw, bh).ok_or(RenderError::Allocation {
            width: bw,
            height: bh,
        })?;
        if self.opaque {
            pixmap.fill(Color::BLACK);
        }
        self.pixmap = Some(pixmap);
        Ok(())
    }

    pub fn detach(&mut self) {
        self.pixmap = None;
    }

    #[must_use]
    pub fn logical_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn pixel_ratio(&self) -> f32 {
        self.ratio
    }

    #[must_use]
    pub fn buffer_size(&self) -> (u32, u32) {
        self.pixmap
            .as_ref()
            .map_or((0, 0), |p| (p.width(), p.height()))
    }

    #[must_use]
    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    #[must_use]
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let px = self.pixmap.as_ref()?.pixel(x, y)?.demultiply();
        Some(Rgba::rgba(
            px.red(),
            px.green(),
            px.blue(),
            f32::from(px.alpha()) / 255.0,
        ))
    }

    pub fn clear(&mut self) {
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill(if self.opaque {
                Color::BLACK
            } else {
                Color::TRANSPARENT
            });
        }
    }

    fn base(&self) -> Transform {
        Transform::from_scale(self.ratio, self.ratio)
    }

    fn bounds(&self) -> Result<Rect, RenderError> {
        Rect::from_xywh(0.0, 0.0, self.width, self.height).ok_or(RenderError::Geometry("bounds"))
    }

    pub fn fill_color(&mut self, color: Rgba) -> Result<(), RenderError> {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        self.fill_bounds(&paint)
    }

    pub fn fill_vertical_gradient(&mut self, stops: &[(f32, Rgba)]) -> Result<(), RenderError> {
        if self.pixmap.is_none() {
            return Ok(());
        }
        let shader = LinearGradient::new(
            Point::from_xy(0.0, 0.0),
            Point::from_xy(0.0, self.height),
            gradient_stops(stops, |t| t),
            SpreadMode::Pad,
            Transform::identity(),
        )
        .ok_or(RenderError::Shader("linear sky"))?;
        self.fill_bounds(&shader_paint(shader))
    }

    pub fn fill_radial_gradient(
        &mut self,
        center: (f32, f32),
        inner: f32,
        outer: f32,
        stops: &[(f32, Rgba)],
    ) -> Result<(), RenderError> {
        if self.pixmap.is_none() {
            return Ok(());
        }
        let shader = radial_shader(center, inner, outer, stops)?;
        self.fill_bounds(&shader_paint(shader))
    }

    fn fill_bounds(&mut self, paint: &Paint<'_>) -> Result<(), RenderError> {
        if self.pixmap.is_none() {
            return Ok(());
        }
        let rect = self.bounds()?;
        let transform = self.base();
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill_rect(rect, paint, transform, None);
        }
        Ok(())
    }

    pub fn fill_disc(&mut self, cx: f32, cy: f32, r: f32, color: Rgba) -> Result<(), RenderError> {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        self.fill_circle(cx, cy, r, &paint)
    }

    pub fn fill_soft_disc(
        &mut self,
        cx: f32,
        cy: f32,
        r: f32,
        core: Rgba,
    ) -> Result<(), RenderError> {
        if self.pixmap.is_none() {
            return Ok(());
        }
        let shader = radial_shader(
            (cx, cy),
            0.0,
            r,
            &[(0.0, core), (1.0, Rgba { a: 0.0, ..core })],
        )?;
        self.fill_circle(cx, cy, r, &shader_paint(shader))
    }

    fn fill_circle(
        &mut self,
        cx: f32,
        cy: f32,
        r: f32,
        paint: &Paint<'_>,
    ) -> Result<(), RenderError> {
        if self.pixmap.is_none() {
            return Ok(());
        }
        let path = PathBuilder::from_circle(cx, cy, r).ok_or(RenderError::Geometry("circle"))?;
        let transform = self.base();
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill_path(&path, paint, FillRule::Winding, transform, None);
        }
        Ok(())
    }

    pub fn stroke_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        width: f32,
        color: Rgba,
    ) -> Result<(), RenderError> {
        if self.pixmap.is_none() {
            return Ok(());
        }
        let mut pb = PathBuilder::new();
        pb.move_to(from.0, from.1);
        pb.line_to(to.0, to.1);
        let path = pb.finish().ok_or(RenderError::Geometry("line"))?;
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        let transform = self.base();
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.stroke_path(&path, &paint, &stroke, transform, None);
        }
        Ok(())
    }

    pub fn fill_rotated_rect(
        &mut self,
        (cx, cy): (f32, f32),
        (w, h): (f32, f32),
        angle: f32,
        color: Rgba,
    ) -> Result<(), RenderError> {
        if self.pixmap.is_none() {
            return Ok(());
        }
        let rect =
            Rect::from_xywh(-w / 2.0, -h / 2.0, w, h).ok_or(RenderError::Geometry("rect"))?;
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        let transform = self
            .base()
            .pre_translate(cx, cy)
            .pre_rotate(angle.to_degrees());
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill_rect(rect, &paint, transform, None);
        }
        Ok(())
    }

    pub fn fill_polygon(
        &mut self,
        points: &[(f32, f32)],
        origin: (f32, f32),
        angle: f32,
        color: Rgba,
    ) -> Result<(), RenderError> {
        if self.pixmap.is_none() {
            return Ok(());
        }
        let Some((first, rest)) = points.split_first() else {
            return Ok(());
        };
        let mut pb = PathBuilder::new();
        pb.move_to(first.0, first.1);
        for &(x, y) in rest {
            pb.line_to(x, y);
        }
        pb.close();
        let path = pb.finish().ok_or(RenderError::Geometry("polygon"))?;
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        let transform = self
            .base()
            .pre_translate(origin.0, origin.1)
            .pre_rotate(angle.to_degrees());
        if let Some(pixmap) = self.pixmap.as_mut() {
            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
        Ok(())
    }
}

#[must_use]
pub fn backing_size(width: f32, height: f32, ratio: f32) -> (u32, u32) {
    let scale = |v: f32| {
        let px = (v * ratio).round();
        if px.is_finite() && px > 0.0 {
            px as u32
        } else {
            0
        }
    };
    (scale(width), scale(height))
}

fn shader_paint(shader: Shader<'static>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.shader = shader;
    paint
}

fn gradient_stops(stops: &[(f32, Rgba)], place: impl Fn(f32) -> f32) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|&(offset, color)| GradientStop::new(place(offset).clamp(0.0, 1.0), color.to_skia()))
        .collect()
}

fn radial_shader(
    center: (f32, f32),
    inner: f32,
    outer: f32,
    stops: &[(f32, Rgba)],
) -> Result<Shader<'static>, RenderError> {
    let inner = if outer > inner { inner.max(0.0) } else { 0.0 };
    let place = |t: f32| (inner + t * (outer - inner)) / outer;
    let c = Point::from_xy(center.0, center.1);
    RadialGradient::new(
        c,
        c,
        outer,
        gradient_stops(stops, place),
        SpreadMode::Pad,
        Transform::identity(),
    )
    .ok_or(RenderError::Shader("radial"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::palette::WHITE;

    #[test]
    fn backing_store_follows_pixel_ratio() {
        let mut canvas = Canvas::new(false);
        canvas.resize(800.0, 600.0, 1.5).expect("resize");
        assert_eq!(canvas.buffer_size(), (1200, 900));
        assert_eq!(canvas.logical_size(), (800.0, 600.0));
    }

    #[test]
    fn zero_size_detaches_and_drawing_is_noop() {
        let mut canvas = Canvas::new(false);
        canvas.resize(0.0, 300.0, 2.0).expect("resize");
        assert_eq!(canvas.buffer_size(), (0, 0));
        canvas.fill_color(WHITE).expect("noop fill");
        canvas.fill_disc(1.0, 1.0, 3.0, WHITE).expect("noop disc");
        assert!(canvas.pixel(0, 0).is_none());
    }

    #[test]
    fn fill_color_covers_whole_buffer_at_any_ratio() {
        let mut canvas = Canvas::new(false);
        canvas.resize(10.0, 8.0, 2.0).expect("resize");
        canvas.fill_color(Rgba::hex(0x33_66_99)).expect("fill");
        for (x, y) in [(0, 0), (19, 15), (10, 7)] {
            let px = canvas.pixel(x, y).expect("pixel");
            assert_eq!((px.r, px.g, px.b), (0x33, 0x66, 0x99));
        }
    }

    #[test]
    fn clear_resets_transparent_canvas() {
        let mut canvas = Canvas::new(false);
        canvas.resize(4.0, 4.0, 1.0).expect("resize");
        canvas.fill_color(WHITE).expect("fill");
        canvas.clear();
        let px = canvas.pixel(2, 2).expect("pixel");
        assert!(px.a.abs() < f32::EPSILON);
    }

    #[test]
    fn opaque_canvas_starts_black() {
        let mut canvas = Canvas::new(true);
        canvas.resize(4.0, 4.0, 1.0).expect("resize");
        let px = canvas.pixel(0, 0).expect("pixel");
        assert_eq!((px.r, px.g, px.b), (0, 0, 0));
        assert!((px.a - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn vertical_gradient_runs_top_to_bottom() {
        let mut canvas = Canvas::new(true);
        canvas.resize(4.0, 100.0, 1.0).expect("resize");
        canvas
            .fill_vertical_gradient(&[(0.0, Rgba::hex(0x00_00_00)), (1.0, Rgba::hex(0xff_ff_ff))])
            .expect("gradient");
        let top = canvas.pixel(1, 0).expect("top");
        let bottom = canvas.pixel(1, 99).expect("bottom");
        assert!(top.r < 10);
        assert!(bottom.r > 245);
    }

    #[test]
    fn disc_paints_centre_but_not_corner() {
        let mut canvas = Canvas::new(false);
        canvas.resize(20.0, 20.0, 1.0).expect("resize");
        canvas.fill_disc(10.0, 10.0, 4.0, WHITE).expect("disc");
        assert!(canvas.pixel(10, 10).expect("centre").a > 0.9);
        assert!(canvas.pixel(0, 0).expect("corner").a < f32::EPSILON);
    }
}
