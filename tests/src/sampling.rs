#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f32::consts::{FRAC_PI_2, PI};
    use vplgi::{
        math::Vec3,
        sampling::{seeded_rng, spherical_direction, SampleGrid},
    };

    #[test]
    fn directions_are_unit_length() {
        let mut rng = seeded_rng(7);
        for (alt_res, az_res, jitter) in [(3, 12, 0.0), (1, 4, 0.0), (7, 5, 0.1), (1, 1, 0.0)] {
            let grid = SampleGrid::new(alt_res, az_res, jitter);
            for (a, z) in grid.cells() {
                let d = grid.direction(a, z, &mut rng);
                assert_abs_diff_eq!(d.len(), 1.0, epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn unjittered_directions_point_down() {
        let mut rng = seeded_rng(0);
        let grid = SampleGrid::new(3, 12, 0.0);
        for (a, z) in grid.cells() {
            assert!(grid.direction(a, z, &mut rng).z < 0.0);
        }
    }

    #[test]
    fn first_cell() {
        let grid = SampleGrid::new(3, 12, 0.0);
        let angles = grid.angles(0, 0);
        assert_abs_diff_eq!(angles.altitude, PI + 0.5 * FRAC_PI_2 / 3.0, epsilon = 1e-6);
        assert_abs_diff_eq!(angles.azimuth, 0.0);

        let mut rng = seeded_rng(0);
        let d = grid.direction(0, 0, &mut rng);
        let expected = Vec3::new(angles.altitude.sin(), 0.0, angles.altitude.cos());
        assert_abs_diff_eq!(d, expected, epsilon = 1e-6);
        assert_abs_diff_eq!(d, Vec3::new(-0.258819, 0.0, -0.965926), epsilon = 1e-5);
    }

    #[test]
    fn azimuth_starts_at_cell_edge() {
        let grid = SampleGrid::new(3, 12, 0.0);
        assert_abs_diff_eq!(grid.angles(0, 3).azimuth, FRAC_PI_2, epsilon = 1e-6);
        assert_abs_diff_eq!(grid.angles(2, 6).azimuth, PI, epsilon = 1e-6);
        assert_abs_diff_eq!(
            grid.angles(2, 0).altitude,
            PI + 2.5 * FRAC_PI_2 / 3.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn single_cell_grid() {
        let grid = SampleGrid::new(1, 1, 0.0);
        let angles = grid.angles(0, 0);
        assert_abs_diff_eq!(angles.altitude, PI + FRAC_PI_2 / 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(angles.azimuth, 0.0);
    }

    #[test]
    fn jitter_stays_in_bounds() {
        let jitter = 5.0f32.to_radians();
        let grid = SampleGrid::new(3, 12, jitter);
        let base = grid.angles(1, 4);
        let mut rng = seeded_rng(1234);

        let mut moved = false;
        for _ in 0..1000 {
            let jittered = base.jittered(grid.jitter(), &mut rng);
            let d_alt = (jittered.altitude - base.altitude).abs();
            let d_az = (jittered.azimuth - base.azimuth).abs();
            assert!(d_alt <= jitter + 1e-6, "altitude off by {}", d_alt);
            assert!(d_az <= jitter + 1e-6, "azimuth off by {}", d_az);
            moved |= d_alt > 0.0 || d_az > 0.0;

            assert_abs_diff_eq!(jittered.to_direction().len(), 1.0, epsilon = 1e-5);
        }
        assert!(moved);
    }

    #[test]
    fn jittered_direction_stays_near_cell() {
        let jitter = 5.0f32.to_radians();
        let grid = SampleGrid::new(3, 12, jitter);
        let center = grid.angles(2, 7).to_direction();
        let mut rng = seeded_rng(99);
        for _ in 0..1000 {
            let d = grid.direction(2, 7, &mut rng);
            // Both axes are off by at most the jitter so the total angle is bounded by their sum
            let angle = d.dot(center).min(1.0).acos();
            assert!(angle <= 2.0 * jitter + 1e-3, "angle {}", angle);
        }
    }

    #[test]
    fn seed_is_reproducible() {
        let grid = SampleGrid::new(3, 12, 0.2);
        let mut a = seeded_rng(42);
        let mut b = seeded_rng(42);
        for (alt, az) in grid.cells() {
            assert_eq!(grid.direction(alt, az, &mut a), grid.direction(alt, az, &mut b));
        }
    }

    #[test]
    fn spherical_direction_axes() {
        assert_relative_eq!(
            spherical_direction(PI, 0.0),
            Vec3::new(0.0, 0.0, -1.0),
            epsilon = 1e-6
        );
        assert_relative_eq!(
            spherical_direction(FRAC_PI_2, FRAC_PI_2),
            Vec3::new(0.0, 1.0, 0.0),
            epsilon = 1e-6
        );
    }
}
