use atmos_backdrop::{
    domain::weather::WeatherState,
    engine::{Atmosphere, Viewport, particles::VIEWPORT_MARGIN},
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn particles_stay_near_the_viewport(
        state_idx in 0usize..WeatherState::ALL.len(),
        width in 0.0f32..1600.0,
        height in 0.0f32..1000.0,
        seed in any::<u64>(),
        ticks in 0usize..400,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut atmos = Atmosphere::new(Viewport { width, height });
        atmos.seed_clouds(40, &mut rng);
        atmos.set_state(WeatherState::ALL[state_idx].clone(), &mut rng);

        for _ in 0..ticks {
            atmos.advance(0.016, &mut rng);
        }

        for particle in atmos.particles() {
            prop_assert!(particle.x >= -VIEWPORT_MARGIN && particle.x <= width + VIEWPORT_MARGIN,
                "x={} width={width} {:?}", particle.x, particle.tag());
            prop_assert!(particle.y >= -VIEWPORT_MARGIN && particle.y <= height + VIEWPORT_MARGIN,
                "y={} height={height} {:?}", particle.y, particle.tag());
        }
    }

    #[test]
    fn particles_return_after_the_viewport_shrinks(
        state_idx in 0usize..WeatherState::ALL.len(),
        width in 0.0f32..400.0,
        height in 0.0f32..300.0,
        seed in any::<u64>(),
        ticks in 1usize..200,
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut atmos = Atmosphere::new(Viewport { width: 1600.0, height: 1000.0 });
        atmos.set_state(WeatherState::ALL[state_idx].clone(), &mut rng);
        atmos.advance(0.016, &mut rng);
        atmos.set_viewport(Viewport { width, height });

        for _ in 0..ticks {
            atmos.advance(0.016, &mut rng);
        }

        for particle in atmos.particles() {
            prop_assert!(particle.x >= -VIEWPORT_MARGIN && particle.x <= width + VIEWPORT_MARGIN,
                "x={} width={width} {:?}", particle.x, particle.tag());
            prop_assert!(particle.y >= -VIEWPORT_MARGIN && particle.y <= height + VIEWPORT_MARGIN,
                "y={} height={height} {:?}", particle.y, particle.tag());
        }
    }

    #[test]
    fn lightning_stays_in_unit_range(seed in any::<u64>(), ticks in 1usize..300) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut atmos = Atmosphere::new(Viewport { width: 200.0, height: 100.0 });
        atmos.set_state(WeatherState::Lightning, &mut rng);
        let tuning = atmos_backdrop::engine::EngineConfig::default().flash_tuning();
        for _ in 0..ticks {
            atmos.step_lightning(tuning, &mut rng);
            prop_assert!((0.0..=1.0).contains(&atmos.lightning()));
        }
    }
}
