use crate::math::Spectrum;

use std::collections::HashMap;

/// A surface material exposing named vector parameters like an engine
/// material instance would.
#[derive(Clone, Debug, Default)]
pub struct Material {
    pub vector_params: HashMap<String, Spectrum<f32>>,
}

impl Material {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `Material` with only the albedo `"Color"` parameter set.
    pub fn colored(color: Spectrum<f32>) -> Self {
        Self::new().with_param(crate::bounce::COLOR_PARAMETER, color)
    }

    pub fn with_param(mut self, param: &str, value: Spectrum<f32>) -> Self {
        self.vector_params.insert(param.into(), value);
        self
    }

    pub fn param(&self, param: &str) -> Option<Spectrum<f32>> {
        self.vector_params.get(param).copied()
    }
}
