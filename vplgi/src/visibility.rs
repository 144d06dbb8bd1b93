use crate::math::{Normal, Point3, Spectrum};

/// Opaque handle to a scene component that a ray can hit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ComponentId(pub usize);

/// Opaque handle to a material owned by the scene.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MaterialId(pub usize);

/// What a visibility ray should report back.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceParams {
    /// Trace against per-triangle geometry instead of simplified collision
    pub trace_complex: bool,
    /// Fill [`TraceHit::face_index`]
    pub return_face_index: bool,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            trace_complex: true,
            return_face_index: true,
        }
    }
}

/// The closest surface hit by a visibility ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TraceHit {
    pub impact_point: Point3<f32>,
    /// Unit surface normal at the impact point
    pub impact_normal: Normal<f32>,
    pub component: ComponentId,
    pub face_index: Option<usize>,
}

/// Scene queries supplied by the host.
pub trait VisibilityQuery {
    /// Finds the closest surface on the segment from `origin` to `target`.
    fn cast_visibility_ray(
        &self,
        origin: Point3<f32>,
        target: Point3<f32>,
        params: TraceParams,
    ) -> Option<TraceHit>;

    /// Finds the material used on the given face of `component`.
    fn resolve_material(&self, component: ComponentId, face_index: Option<usize>)
        -> Option<MaterialId>;

    /// Looks up a named vector parameter of `material` as RGB.
    fn vector_parameter(&self, material: MaterialId, name: &str) -> Option<Spectrum<f32>>;
}
