use crate::{
    debug_draw::DebugDraw,
    math::{Normal, Point3, Spectrum, Vec3},
    visibility::{TraceHit, TraceParams, VisibilityQuery},
};

/// Material parameter holding the surface albedo.
pub const COLOR_PARAMETER: &str = "Color";

const DEBUG_SPHERE_RADIUS: f32 = 10.0;
const DEBUG_SPHERE_SEGMENTS: u32 = 8;

/// Light bounced off a surface back toward the source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BounceSample {
    /// World position of the bounce
    pub position: Point3<f32>,
    /// Surface albedo normalized to unit length, black if the surface has none
    pub color: Spectrum<f32>,
    /// Clamped cosine between the surface normal and the reversed ray
    pub lambert: f32,
}

/// Casts a ray from `origin` along unit `direction` up to `max_distance` and
/// resolves the single bounce off the closest surface.
///
/// Returns `None` if nothing is hit. Surfaces without a readable color still
/// produce a sample, with black color.
pub fn resolve_bounce<V>(
    scene: &V,
    origin: Point3<f32>,
    direction: Vec3<f32>,
    max_distance: f32,
    debug: &mut dyn DebugDraw,
) -> Option<BounceSample>
where
    V: VisibilityQuery + ?Sized,
{
    let target = origin + direction * max_distance;
    let hit = scene.cast_visibility_ray(origin, target, TraceParams::default())?;

    // Unit length color keeps the hue but leaves the energy to the lambert term
    let color = surface_color(scene, &hit).normalized_or_zero();
    let lambert = lambert(hit.impact_normal, direction);

    debug.draw_sphere(
        hit.impact_point,
        DEBUG_SPHERE_RADIUS,
        DEBUG_SPHERE_SEGMENTS,
        color,
    );
    debug.draw_line(origin, hit.impact_point, Spectrum::new(1.0, 0.0, 0.0));

    Some(BounceSample {
        position: hit.impact_point,
        color,
        lambert,
    })
}

/// Returns `max(0, n · -d)`.
pub fn lambert(n: Normal<f32>, d: Vec3<f32>) -> f32 {
    n.dot_v(-d).max(0.0)
}

fn surface_color<V>(scene: &V, hit: &TraceHit) -> Spectrum<f32>
where
    V: VisibilityQuery + ?Sized,
{
    scene
        .resolve_material(hit.component, hit.face_index)
        .and_then(|material| scene.vector_parameter(material, COLOR_PARAMETER))
        .unwrap_or_else(Spectrum::zeros)
}
