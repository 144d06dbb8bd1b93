mod light;
mod memory;

pub use light::{
    Attenuation, IntensityUnits, LightHandle, LightSink, Orientation, ShadowSettings,
};
pub use memory::{MemoryLightSink, PointLightState};

use crate::{
    math::{Point3, Spectrum},
    settings::SpawnerSettings,
};

/// Properties shared by every light the spawner places.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LightProperties {
    pub attenuation: Attenuation,
    pub units: IntensityUnits,
    pub shadows: ShadowSettings,
}

impl LightProperties {
    pub fn from_settings(settings: &SpawnerSettings) -> Self {
        // Physical falloff only makes sense with physical units
        let (attenuation, units) = if settings.physical_attenuation {
            (Attenuation::InverseSquared, IntensityUnits::Candelas)
        } else {
            (Attenuation::Exponential, IntensityUnits::Unitless)
        };

        Self {
            attenuation,
            units,
            shadows: ShadowSettings {
                cast_shadows: settings.vpls_cast_shadows,
                resolution_scale: settings.shadow_resolution_scale,
                contact_shadow_length: settings.contact_shadow_length,
                contact_shadow_length_in_world_space: true,
            },
        }
    }
}

/// Spawns a point light in `sink` and configures it with `props`.
pub fn place_light<S>(
    sink: &mut S,
    props: &LightProperties,
    position: Point3<f32>,
    orientation: Orientation,
    color: Spectrum<f32>,
    intensity: f32,
) -> LightHandle
where
    S: LightSink + ?Sized,
{
    let light = sink.spawn_point_light(position, orientation);
    sink.set_color(light, color);
    sink.set_attenuation(light, props.attenuation);
    sink.set_intensity(light, intensity, props.units);
    sink.set_shadow_settings(light, props.shadows);
    light
}
