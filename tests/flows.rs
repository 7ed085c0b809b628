mod common;

use atmos_backdrop::{
    domain::weather::WeatherState,
    engine::{
        EngineConfig, EngineError,
        particles::{ParticleKind, ParticleTag},
    },
    render::{Layer, OffscreenSurface, SurfaceSet},
};
use common::{DeadSurface, RecordingScheduler, engine_with, queued_engine};

#[test]
fn pouring_end_to_end() {
    let mut engine = engine_with(RecordingScheduler::default(), EngineConfig::default(), 3);
    engine.resize(400.0, 300.0).expect("resize");
    engine.start();
    engine.set_weather("pouring");

    let before = engine.atmosphere().particles().to_vec();
    assert_eq!(before.len(), 200);
    assert!(before.iter().all(|p| p.tag() == ParticleTag::Rain));

    let handle = engine.scheduler().last_requested().expect("first frame");
    assert!(engine.on_frame(handle));
    assert_eq!(engine.scheduler().requested.len(), 2);

    for (old, new) in before.iter().zip(engine.atmosphere().particles()) {
        let ParticleKind::Rain { fall, length, .. } = old.kind else {
            panic!("expected rain");
        };
        assert!((25.0..40.0).contains(&fall));
        if old.y + fall <= 300.0 {
            assert_eq!(new.y, old.y + fall);
        } else {
            assert_eq!(new.y, -length);
        }
    }
}

#[test]
fn stop_cancels_the_pending_frame() {
    let mut engine = engine_with(RecordingScheduler::default(), EngineConfig::default(), 3);
    engine.start();
    let first = engine.scheduler().last_requested().expect("first frame");
    engine.stop();
    assert_eq!(engine.scheduler().cancelled, vec![first]);

    // A host that fires the cancelled frame anyway gets no tick.
    assert!(!engine.on_frame(first));
    assert_eq!(engine.ticks(), 0);
}

#[test]
fn clouds_survive_stop_and_weather_changes() {
    let mut engine = queued_engine(5);
    engine.resize(640.0, 360.0).expect("resize");
    engine.start();
    engine.pump();
    engine.stop();
    let clouds = engine.atmosphere().clouds().to_vec();
    assert_eq!(clouds.len(), 40);

    engine.set_weather("fog");
    engine.set_weather("rainy");
    engine.start();
    assert_eq!(engine.atmosphere().clouds(), clouds.as_slice());
}

#[test]
fn rainy_then_snowy_swaps_the_whole_population() {
    let mut engine = queued_engine(5);
    engine.resize(400.0, 300.0).expect("resize");
    engine.set_weather("rainy");
    assert_eq!(engine.atmosphere().particles().len(), 100);
    engine.set_weather("snowy");
    let particles = engine.atmosphere().particles();
    assert_eq!(particles.len(), 80);
    assert!(particles.iter().all(|p| p.tag() == ParticleTag::Snow));
}

#[test]
fn same_label_twice_keeps_particles() {
    let mut engine = queued_engine(5);
    engine.resize(400.0, 300.0).expect("resize");
    engine.set_weather("windy");
    let first = engine.atmosphere().particles().to_vec();
    assert!(!engine.set_weather("windy"));
    assert_eq!(engine.atmosphere().particles(), first.as_slice());
}

#[test]
fn lightning_is_cleared_by_calm_weather() {
    let config = EngineConfig {
        flash_chance: 1.0,
        ..EngineConfig::default()
    };
    let mut engine = engine_with(atmos_backdrop::engine::FrameQueue::new(), config, 9);
    engine.resize(100.0, 80.0).expect("resize");
    engine.set_state(WeatherState::LightningRainy);
    engine.start();
    engine.pump();
    assert!(engine.atmosphere().lightning() > 0.5);

    engine.set_weather("sunny");
    assert_eq!(engine.atmosphere().lightning(), 0.0);
}

#[test]
fn flash_paints_the_effects_layer() {
    let config = EngineConfig {
        flash_chance: 1.0,
        ..EngineConfig::default()
    };
    let mut engine = engine_with(atmos_backdrop::engine::FrameQueue::new(), config, 9);
    engine.resize(40.0, 30.0).expect("resize");
    engine.set_weather("lightning");
    engine.start();
    engine.pump();
    let empty = engine.layers().get(Layer::Effects).pixel(10, 10).expect("pixel");
    assert_eq!(empty.a, 0.0);

    // Intensity from the first tick shows on the next paint.
    engine.pump();
    let lit = engine.layers().get(Layer::Effects).pixel(10, 10).expect("pixel");
    assert_eq!((lit.r, lit.g, lit.b), (255, 255, 255));
    assert!(lit.a > 0.5);
}

#[test]
fn resize_scales_buffers_by_device_pixel_ratio() {
    let config = EngineConfig {
        pixel_ratio: 1.5,
        ..EngineConfig::default()
    };
    let mut engine = engine_with(atmos_backdrop::engine::FrameQueue::new(), config, 1);
    engine.resize(800.0, 600.0).expect("resize");
    engine.render().expect("render");
    for layer in Layer::ALL {
        assert_eq!(engine.layers().get(layer).buffer_size(), (1200, 900));
    }
}

#[test]
fn construction_reports_the_dead_surface() {
    let (mut bg, mut scene, mut fx) = (OffscreenSurface, OffscreenSurface, DeadSurface);
    let err = atmos_backdrop::engine::WeatherEngine::new(
        SurfaceSet {
            background: &mut bg,
            scene: &mut scene,
            effects: &mut fx,
        },
        RecordingScheduler::default(),
        EngineConfig::default(),
    )
    .err()
    .expect("construction fails");
    assert!(matches!(
        err,
        EngineError::SurfaceUnavailable {
            layer: Layer::Effects
        }
    ));
    assert_eq!(err.to_string(), "effects surface has no 2D context");
}
