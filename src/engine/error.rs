use thiserror::Error;

use crate::render::{Layer, RenderError};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("{} surface has no 2D context", layer.name())]
    SurfaceUnavailable { layer: Layer },
    #[error("device pixel ratio must be finite and positive, got {0}")]
    InvalidPixelRatio(f32),
    #[error("failed to resize {} layer", layer.name())]
    Resize {
        layer: Layer,
        #[source]
        source: RenderError,
    },
}
