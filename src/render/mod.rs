pub mod background;
pub mod canvas;
pub mod compose;
pub mod effects;
pub mod palette;
pub mod scene;

use rand::Rng;
use thiserror::Error;

use crate::engine::atmosphere::Atmosphere;

pub use canvas::Canvas;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to allocate a {width}x{height} pixmap")]
    Allocation { width: u32, height: u32 },
    #[error("failed to build {0} shader")]
    Shader(&'static str),
    #[error("degenerate {0} geometry")]
    Geometry(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Background,
    Scene,
    Effects,
}

impl Layer {
    pub const ALL: [Layer; 3] = [Layer::Background, Layer::Scene, Layer::Effects];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Layer::Background => "background",
            Layer::Scene => "scene",
            Layer::Effects => "effects",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContextOptions {
    pub opaque: bool,
}

/// A host-owned drawing target. The engine asks each surface for its 2D
/// context once, at construction; `None` means the surface cannot be drawn on.
pub trait Surface {
    fn context_2d(&mut self, options: ContextOptions) -> Option<Canvas>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OffscreenSurface;

impl Surface for OffscreenSurface {
    fn context_2d(&mut self, options: ContextOptions) -> Option<Canvas> {
        Some(Canvas::new(options.opaque))
    }
}

pub struct SurfaceSet<'a> {
    pub background: &'a mut dyn Surface,
    pub scene: &'a mut dyn Surface,
    pub effects: &'a mut dyn Surface,
}

#[derive(Debug, Clone)]
pub struct Layers {
    background: Canvas,
    scene: Canvas,
    effects: Canvas,
}

impl Layers {
    pub fn acquire(surfaces: SurfaceSet<'_>) -> Result<Self, Layer> {
        let background = surfaces
            .background
            .context_2d(ContextOptions { opaque: true })
            .ok_or(Layer::Background)?;
        let scene = surfaces
            .scene
            .context_2d(ContextOptions::default())
            .ok_or(Layer::Scene)?;
        let effects = surfaces
            .effects
            .context_2d(ContextOptions::default())
            .ok_or(Layer::Effects)?;
        Ok(Self {
            background,
            scene,
            effects,
        })
    }

    #[must_use]
    pub fn get(&self, layer: Layer) -> &Canvas {
        match layer {
            Layer::Background => &self.background,
            Layer::Scene => &self.scene,
            Layer::Effects => &self.effects,
        }
    }

    fn get_mut(&mut self, layer: Layer) -> &mut Canvas {
        match layer {
            Layer::Background => &mut self.background,
            Layer::Scene => &mut self.scene,
            Layer::Effects => &mut self.effects,
        }
    }

    pub fn resize(&mut self, width: f32, height: f32, ratio: f32) -> Vec<(Layer, RenderError)> {
        let mut failures = Vec::new();
        for layer in Layer::ALL {
            let canvas = self.get_mut(layer);
            if let Err(err) = canvas.resize(width, height, ratio) {
                canvas.detach();
                failures.push((layer, err));
            }
        }
        failures
    }
}

pub fn paint_frame<R: Rng + ?Sized>(
    layers: &mut Layers,
    atmosphere: &Atmosphere,
    flash_threshold: f32,
    rng: &mut R,
) -> Result<(), RenderError> {
    let pouring = atmosphere.weather().is_some_and(|w| w.is_pouring());
    background::paint(
        &mut layers.background,
        atmosphere.weather(),
        atmosphere.clouds(),
        atmosphere.time(),
    )?;
    scene::paint(&mut layers.scene, atmosphere.particles(), pouring, rng)?;
    effects::paint(
        &mut layers.effects,
        atmosphere.lightning(),
        flash_threshold,
    )
}
