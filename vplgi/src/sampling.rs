use crate::math::Vec3;

use itertools::iproduct;
use rand::{distributions::Uniform, Rng};
use rand_pcg::Pcg32;
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Altitude/azimuth grid of ray directions around a light.
///
/// Altitude cells are sampled at their centers and offset by π so the grid
/// covers the hemisphere below the light. Azimuth cells are sampled at their
/// left edge. Both quirks are kept as is since they define the lighting look.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SampleGrid {
    altitude_resolution: u32,
    azimuth_resolution: u32,
    jitter: f32,
}

impl SampleGrid {
    /// Creates a new `SampleGrid`. `jitter` is the maximum random offset in radians
    /// applied to both angles of each sample.
    ///
    /// Resolutions are clamped to at least 1 and jitter into `[0, π]`. Non-finite
    /// jitter is treated as 0.
    pub fn new(altitude_resolution: u32, azimuth_resolution: u32, jitter: f32) -> Self {
        let jitter = if jitter.is_finite() {
            jitter.clamp(0.0, PI)
        } else {
            0.0
        };
        Self {
            altitude_resolution: altitude_resolution.max(1),
            azimuth_resolution: azimuth_resolution.max(1),
            jitter,
        }
    }

    pub fn altitude_resolution(&self) -> u32 {
        self.altitude_resolution
    }

    pub fn azimuth_resolution(&self) -> u32 {
        self.azimuth_resolution
    }

    pub fn jitter(&self) -> f32 {
        self.jitter
    }

    /// Returns the total number of cells in the grid.
    pub fn sample_count(&self) -> u64 {
        u64::from(self.altitude_resolution) * u64::from(self.azimuth_resolution)
    }

    pub fn altitude_step(&self) -> f32 {
        FRAC_PI_2 / (self.altitude_resolution as f32)
    }

    pub fn azimuth_step(&self) -> f32 {
        TAU / (self.azimuth_resolution as f32)
    }

    /// Iterates all `(altitude, azimuth)` cell indices, altitude major.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        iproduct!(0..self.altitude_resolution, 0..self.azimuth_resolution)
    }

    /// Returns the unjittered angles of the given cell.
    pub fn angles(&self, altitude_index: u32, azimuth_index: u32) -> SphericalAngles {
        debug_assert!(altitude_index < self.altitude_resolution);
        debug_assert!(azimuth_index < self.azimuth_resolution);

        SphericalAngles {
            altitude: ((altitude_index as f32) + 0.5) * self.altitude_step() + PI,
            azimuth: (azimuth_index as f32) * self.azimuth_step(),
        }
    }

    /// Returns the jittered unit direction of the given cell.
    pub fn direction<R: Rng>(
        &self,
        altitude_index: u32,
        azimuth_index: u32,
        rng: &mut R,
    ) -> Vec3<f32> {
        self.angles(altitude_index, azimuth_index)
            .jittered(self.jitter, rng)
            .to_direction()
    }
}

/// A direction as altitude (polar angle from +Z) and azimuth (from +X toward +Y) in radians.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SphericalAngles {
    pub altitude: f32,
    pub azimuth: f32,
}

impl SphericalAngles {
    /// Offsets both angles independently by a uniform random amount in `[-jitter, jitter]`.
    ///
    /// Zero or non-finite jitter returns the angles as is without touching `rng`.
    pub fn jittered<R: Rng>(self, jitter: f32, rng: &mut R) -> Self {
        if jitter.is_finite() && jitter > 0.0 {
            // Offsets past a half turn wrap around anyway
            let jitter = jitter.min(PI);
            let offset = Uniform::new_inclusive(-jitter, jitter);
            Self {
                altitude: self.altitude + rng.sample(offset),
                azimuth: self.azimuth + rng.sample(offset),
            }
        } else {
            self
        }
    }

    pub fn to_direction(self) -> Vec3<f32> {
        spherical_direction(self.altitude, self.azimuth)
    }
}

/// Converts spherical angles into a unit direction.
pub fn spherical_direction(altitude: f32, azimuth: f32) -> Vec3<f32> {
    let sin_altitude = altitude.sin();
    Vec3::new(
        sin_altitude * azimuth.cos(),
        sin_altitude * azimuth.sin(),
        altitude.cos(),
    )
}

/// Creates the sample rng, seeded from the thread rng.
pub fn create_rng() -> Pcg32 {
    // Known seed for debugging
    // let seed = 0x73B9642E74AC471C;
    // Random seed for normal use
    let seed = rand::thread_rng().gen();
    seeded_rng(seed)
}

/// Creates the sample rng with a known seed for reproducible sampling.
pub fn seeded_rng(seed: u64) -> Pcg32 {
    Pcg32::new(seed, 0)
}
