use crate::math::{Point3, Spectrum};

use strum::{Display, EnumString};

/// Opaque handle to a light owned by a [`LightSink`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightHandle(pub u64);

/// Rotation in degrees.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Orientation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

impl Orientation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString)]
pub enum IntensityUnits {
    Unitless,
    Candelas,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Display, EnumString)]
pub enum Attenuation {
    /// Physically based inverse squared falloff
    InverseSquared,
    /// Artist friendly exponential falloff
    Exponential,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ShadowSettings {
    pub cast_shadows: bool,
    pub resolution_scale: f32,
    pub contact_shadow_length: f32,
    /// Interpret `contact_shadow_length` in world units instead of screen space
    pub contact_shadow_length_in_world_space: bool,
}

impl Default for ShadowSettings {
    fn default() -> Self {
        Self {
            cast_shadows: true,
            resolution_scale: 1.0,
            contact_shadow_length: 0.0,
            contact_shadow_length_in_world_space: true,
        }
    }
}

/// Light lifecycle supplied by the host renderer.
///
/// Handles stay valid until passed to [`LightSink::destroy`]. Calls with a
/// handle the sink doesn't know are ignored.
pub trait LightSink {
    /// Creates a movable point light and returns its handle.
    fn spawn_point_light(&mut self, position: Point3<f32>, orientation: Orientation) -> LightHandle;
    fn set_color(&mut self, light: LightHandle, color: Spectrum<f32>);
    fn set_intensity(&mut self, light: LightHandle, intensity: f32, units: IntensityUnits);
    fn set_shadow_settings(&mut self, light: LightHandle, shadows: ShadowSettings);
    fn set_attenuation(&mut self, light: LightHandle, attenuation: Attenuation);
    fn destroy(&mut self, light: LightHandle);
}
