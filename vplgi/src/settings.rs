use crate::vplgi_warn;

use serde::{Deserialize, Serialize};
use std::{fmt, fs, path::Path};

/// Upper limit of samples along either grid axis.
pub const MAX_RESOLUTION: u32 = 256;
/// Jitter past a half turn just wraps around.
pub const MAX_JITTER_DEGREES: f32 = 180.0;

/// Tunables of the VPL spawner.
#[derive(Copy, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SpawnerSettings {
    /// Number of samples along the altitude axis. Total sample count is
    /// `altitude_samples * azimuth_samples`.
    pub altitude_samples: u32,
    /// Number of samples along the azimuth axis.
    pub azimuth_samples: u32,
    /// How far VPLs can be from the light source in world units
    pub max_distance: f32,
    /// Random jitter of sample directions in degrees. Zero gives uniform sampling.
    pub jitter_degrees: f32,
    /// Draw bounce points and rays through the debug drawer
    pub debug_draw: bool,
    /// Strength of the direct light
    pub light_strength: f32,
    pub vpls_cast_shadows: bool,
    /// Quality of VPL shadows
    pub shadow_resolution_scale: f32,
    /// Length of VPL contact shadows in world units
    pub contact_shadow_length: f32,
    /// Inverse squared falloff with physical units instead of unitless exponential falloff
    pub physical_attenuation: bool,
}

impl Default for SpawnerSettings {
    fn default() -> Self {
        Self {
            altitude_samples: 3,
            azimuth_samples: 12,
            max_distance: 500.0,
            jitter_degrees: 0.0,
            debug_draw: false,
            light_strength: 2.0,
            vpls_cast_shadows: true,
            shadow_resolution_scale: 1.0,
            contact_shadow_length: 0.0,
            physical_attenuation: false,
        }
    }
}

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Io(why) => write!(f, "Failed to read settings: {}", why),
            LoadError::Parse(why) => write!(f, "Failed to parse settings: {}", why),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Io(why) => Some(why),
            LoadError::Parse(why) => Some(why),
        }
    }
}

impl SpawnerSettings {
    /// Loads settings from a YAML file. Missing fields get their defaults.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let text = fs::read_to_string(path).map_err(LoadError::Io)?;
        Self::from_yaml(&text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, LoadError> {
        serde_yaml::from_str(text).map_err(LoadError::Parse)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Returns a copy with values the spawner can't work with clamped into range.
    pub fn sanitized(&self) -> Self {
        let defaults = Self::default();
        let mut ret = *self;

        ret.altitude_samples = clamp_resolution("altitude_samples", ret.altitude_samples);
        ret.azimuth_samples = clamp_resolution("azimuth_samples", ret.azimuth_samples);
        if !ret.max_distance.is_finite() || ret.max_distance <= 0.0 {
            vplgi_warn!(
                "max_distance must be positive and finite, got {}. Using {}",
                ret.max_distance,
                defaults.max_distance
            );
            ret.max_distance = defaults.max_distance;
        }
        if !ret.jitter_degrees.is_finite() || ret.jitter_degrees < 0.0 {
            vplgi_warn!(
                "jitter_degrees must be non-negative and finite, got {}. Using 0",
                ret.jitter_degrees
            );
            ret.jitter_degrees = 0.0;
        } else if ret.jitter_degrees > MAX_JITTER_DEGREES {
            vplgi_warn!(
                "jitter_degrees {} is more than a half turn, clamping to {}",
                ret.jitter_degrees,
                MAX_JITTER_DEGREES
            );
            ret.jitter_degrees = MAX_JITTER_DEGREES;
        }
        if !ret.light_strength.is_finite() {
            vplgi_warn!(
                "light_strength must be finite. Using {}",
                defaults.light_strength
            );
            ret.light_strength = defaults.light_strength;
        }
        if !ret.shadow_resolution_scale.is_finite() {
            vplgi_warn!(
                "shadow_resolution_scale must be finite. Using {}",
                defaults.shadow_resolution_scale
            );
            ret.shadow_resolution_scale = defaults.shadow_resolution_scale;
        } else if ret.shadow_resolution_scale < 0.0 {
            vplgi_warn!("shadow_resolution_scale must be non-negative, clamping");
            ret.shadow_resolution_scale = 0.0;
        }
        if !ret.contact_shadow_length.is_finite() || ret.contact_shadow_length < 0.0 {
            vplgi_warn!(
                "contact_shadow_length must be non-negative and finite, got {}. Using 0",
                ret.contact_shadow_length
            );
            ret.contact_shadow_length = 0.0;
        }

        ret
    }

    /// Returns the total number of VPL samples per frame.
    pub fn sample_count(&self) -> u64 {
        u64::from(self.altitude_samples.max(1)) * u64::from(self.azimuth_samples.max(1))
    }
}

fn clamp_resolution(name: &str, resolution: u32) -> u32 {
    if resolution == 0 {
        vplgi_warn!("{} must be at least 1, clamping", name);
        1
    } else if resolution > MAX_RESOLUTION {
        vplgi_warn!(
            "{} {} is over the limit, clamping to {}",
            name,
            resolution,
            MAX_RESOLUTION
        );
        MAX_RESOLUTION
    } else {
        resolution
    }
}
