use super::{RenderError, canvas::Canvas, palette::WHITE};

pub fn paint(canvas: &mut Canvas, intensity: f32, threshold: f32) -> Result<(), RenderError> {
    canvas.clear();
    if intensity > threshold {
        canvas.fill_color(WHITE.fade(intensity))?;
    }
    Ok(())
}
