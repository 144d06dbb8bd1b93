#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_1_SQRT_2;
    use vplgi::{
        lights::PointLightState,
        math::{Point3, Spectrum, Vec3},
        resolve_bounce,
        scene::Scene,
        LightSource, MemoryLightSink, NoDebugDraw, Orientation, RecordingDebugDraw,
        SpawnerSettings, VplSpawner,
    };

    fn vpl_states<'a>(spawner: &VplSpawner, sink: &'a MemoryLightSink) -> Vec<&'a PointLightState> {
        spawner
            .vpls()
            .iter()
            .map(|&vpl| sink.get(vpl).unwrap())
            .collect()
    }

    #[test]
    fn straight_down_onto_floor() {
        let scene = Scene::floor(1000.0, 0.0, Spectrum::ones());
        let sample = resolve_bounce(
            &scene,
            Point3::new(0.0, 0.0, 100.0),
            Vec3::new(0.0, 0.0, -1.0),
            500.0,
            &mut NoDebugDraw,
        )
        .unwrap();
        assert_abs_diff_eq!(sample.position, Point3::new(0.0, 0.0, 0.0), epsilon = 1e-3);
        assert_abs_diff_eq!(sample.lambert, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(sample.color, Spectrum::ones().normalized(), epsilon = 1e-6);
    }

    #[test]
    fn far_reaching_ray() {
        let scene = Scene::floor(1000.0, 0.0, Spectrum::ones());
        for max_distance in [1e20, 3e38] {
            let sample = resolve_bounce(
                &scene,
                Point3::new(0.0, 0.0, 100.0),
                Vec3::new(0.0, 0.0, -1.0),
                max_distance,
                &mut NoDebugDraw,
            )
            .unwrap();
            assert_abs_diff_eq!(sample.position, Point3::new(0.0, 0.0, 0.0), epsilon = 1e-3);
            assert_abs_diff_eq!(sample.lambert, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn single_ring_over_floor() {
        let settings = SpawnerSettings {
            altitude_samples: 1,
            azimuth_samples: 4,
            max_distance: 1000.0,
            ..SpawnerSettings::default()
        };
        let source = LightSource::new(Point3::new(0.0, 0.0, 100.0), Orientation::default());
        let scene = Scene::floor(1000.0, 0.0, Spectrum::ones());
        let mut spawner = VplSpawner::with_seed(settings, 0);
        let mut sink = MemoryLightSink::new();

        spawner.begin_play(&source, &mut sink);
        let stats = spawner.tick(&source, &scene, &mut sink, &mut NoDebugDraw);
        assert_eq!(stats.placed, 4);

        // The single ring is at 45 degrees so each bounce lands 100 units out
        let expected = [
            Point3::new(-100.0, 0.0, 0.0),
            Point3::new(0.0, -100.0, 0.0),
            Point3::new(100.0, 0.0, 0.0),
            Point3::new(0.0, 100.0, 0.0),
        ];
        for (state, position) in vpl_states(&spawner, &sink).iter().zip(expected) {
            assert_abs_diff_eq!(state.position, position, epsilon = 1e-2);
            assert_abs_diff_eq!(state.intensity, 0.5 * FRAC_1_SQRT_2, epsilon = 1e-5);
            assert_abs_diff_eq!(state.color, Spectrum::ones().normalized(), epsilon = 1e-6);
        }
    }

    #[test]
    fn distance_limits_rings() {
        let settings = SpawnerSettings {
            altitude_samples: 3,
            azimuth_samples: 4,
            max_distance: 200.0,
            ..SpawnerSettings::default()
        };
        let source = LightSource::new(Point3::new(0.0, 0.0, 100.0), Orientation::default());
        let scene = Scene::floor(1000.0, 0.0, Spectrum::ones());
        let mut spawner = VplSpawner::with_seed(settings, 0);
        let mut sink = MemoryLightSink::new();

        spawner.begin_play(&source, &mut sink);
        let stats = spawner.tick(&source, &scene, &mut sink, &mut NoDebugDraw);
        // The outermost ring reaches the floor only after ~386 units
        assert_eq!(stats.samples, 12);
        assert_eq!(stats.placed, 8);

        let strength = 2.0 / 12.0;
        let states = vpl_states(&spawner, &sink);
        for state in &states[..4] {
            assert_abs_diff_eq!(state.intensity, strength * 15.0f32.to_radians().cos(), epsilon = 1e-5);
        }
        for state in &states[4..] {
            assert_abs_diff_eq!(state.intensity, strength * FRAC_1_SQRT_2, epsilon = 1e-5);
        }
    }

    #[test]
    fn room_colors() {
        let settings = SpawnerSettings {
            max_distance: 2000.0,
            debug_draw: true,
            ..SpawnerSettings::default()
        };
        let source = LightSource::new(Point3::new(0.0, 0.0, 300.0), Orientation::default());
        let scene = Scene::room();
        let mut spawner = VplSpawner::with_seed(settings, 0);
        let mut sink = MemoryLightSink::new();
        let mut debug = RecordingDebugDraw::new();

        spawner.begin_play(&source, &mut sink);
        let stats = spawner.tick(&source, &scene, &mut sink, &mut debug);
        // Closed room so nothing escapes
        assert_eq!(stats.placed, 36);
        assert_eq!(debug.sphere_count(), 36);

        let states = vpl_states(&spawner, &sink);
        let wall_intensity = 2.0 / 36.0 * 15.0f32.to_radians().cos();

        // Outermost ring, azimuth 0 goes towards -x
        let green = states[24];
        assert_abs_diff_eq!(green.position.x, -500.0, epsilon = 1e-2);
        assert_abs_diff_eq!(green.position.z, 166.03, epsilon = 1e-1);
        assert_abs_diff_eq!(
            green.color,
            Spectrum::new(0.05, 0.7, 0.05).normalized(),
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(green.intensity, wall_intensity, epsilon = 1e-5);

        let unlit = states[27];
        assert_abs_diff_eq!(unlit.position.y, -500.0, epsilon = 1e-2);
        assert!(unlit.color.is_black());
        assert_abs_diff_eq!(unlit.intensity, wall_intensity, epsilon = 1e-5);

        let red = states[30];
        assert_abs_diff_eq!(red.position.x, 500.0, epsilon = 1e-2);
        assert_abs_diff_eq!(
            red.color,
            Spectrum::new(0.7, 0.05, 0.05).normalized(),
            epsilon = 1e-5
        );

        let white = states[33];
        assert_abs_diff_eq!(white.position.y, 500.0, epsilon = 1e-2);
        assert_abs_diff_eq!(white.color, Spectrum::ones().normalized(), epsilon = 1e-5);

        // Second ring at 150 degrees runs into the ball
        let ball = states[17];
        assert!(ball.color.b > ball.color.r && ball.color.b > ball.color.g);
        assert!(ball.position.z > 0.0);
    }
}
