use super::{Attenuation, IntensityUnits, LightHandle, LightSink, Orientation, ShadowSettings};
use crate::math::{Point3, Spectrum};

use std::collections::BTreeMap;

/// The state of a point light in [`MemoryLightSink`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointLightState {
    pub position: Point3<f32>,
    pub orientation: Orientation,
    pub color: Spectrum<f32>,
    pub intensity: f32,
    pub units: IntensityUnits,
    pub shadows: ShadowSettings,
    pub attenuation: Attenuation,
}

/// A [`LightSink`] that just keeps the lights in memory.
///
/// Handles are never reused so stale ones can be told apart from live ones.
#[derive(Default)]
pub struct MemoryLightSink {
    lights: BTreeMap<LightHandle, PointLightState>,
    next_id: u64,
    spawned_total: usize,
    destroyed_total: usize,
}

impl MemoryLightSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, light: LightHandle) -> Option<&PointLightState> {
        self.lights.get(&light)
    }

    pub fn contains(&self, light: LightHandle) -> bool {
        self.lights.contains_key(&light)
    }

    /// Iterates the live lights in spawn order.
    pub fn lights(&self) -> impl Iterator<Item = (LightHandle, &PointLightState)> {
        self.lights.iter().map(|(&handle, state)| (handle, state))
    }

    pub fn live_count(&self) -> usize {
        self.lights.len()
    }

    pub fn spawned_total(&self) -> usize {
        self.spawned_total
    }

    pub fn destroyed_total(&self) -> usize {
        self.destroyed_total
    }
}

impl LightSink for MemoryLightSink {
    fn spawn_point_light(&mut self, position: Point3<f32>, orientation: Orientation) -> LightHandle {
        let handle = LightHandle(self.next_id);
        self.next_id += 1;
        self.spawned_total += 1;

        self.lights.insert(
            handle,
            PointLightState {
                position,
                orientation,
                color: Spectrum::ones(),
                intensity: 0.0,
                units: IntensityUnits::Unitless,
                shadows: ShadowSettings::default(),
                attenuation: Attenuation::Exponential,
            },
        );

        handle
    }

    fn set_color(&mut self, light: LightHandle, color: Spectrum<f32>) {
        if let Some(state) = self.lights.get_mut(&light) {
            state.color = color;
        }
    }

    fn set_intensity(&mut self, light: LightHandle, intensity: f32, units: IntensityUnits) {
        if let Some(state) = self.lights.get_mut(&light) {
            state.intensity = intensity;
            state.units = units;
        }
    }

    fn set_shadow_settings(&mut self, light: LightHandle, shadows: ShadowSettings) {
        if let Some(state) = self.lights.get_mut(&light) {
            state.shadows = shadows;
        }
    }

    fn set_attenuation(&mut self, light: LightHandle, attenuation: Attenuation) {
        if let Some(state) = self.lights.get_mut(&light) {
            state.attenuation = attenuation;
        }
    }

    fn destroy(&mut self, light: LightHandle) {
        if self.lights.remove(&light).is_some() {
            self.destroyed_total += 1;
        }
    }
}
