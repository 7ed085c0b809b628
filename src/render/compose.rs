use tiny_skia::{BlendMode, Pixmap, PixmapPaint, Transform};

use super::{Layer, Layers};

const EFFECTS_OPACITY: f32 = 0.7;

impl Layers {
    #[must_use]
    pub fn composite(&self, with_effects: bool) -> Option<Pixmap> {
        let mut out = self.get(Layer::Background).pixmap()?.clone();
        if let Some(scene) = self.get(Layer::Scene).pixmap() {
            out.draw_pixmap(
                0,
                0,
                scene.as_ref(),
                &PixmapPaint {
                    blend_mode: BlendMode::Plus,
                    ..PixmapPaint::default()
                },
                Transform::identity(),
                None,
            );
        }
        if with_effects && let Some(effects) = self.get(Layer::Effects).pixmap() {
            out.draw_pixmap(
                0,
                0,
                effects.as_ref(),
                &PixmapPaint {
                    opacity: EFFECTS_OPACITY,
                    blend_mode: BlendMode::Overlay,
                    ..PixmapPaint::default()
                },
                Transform::identity(),
                None,
            );
        }
        Some(out)
    }
}
