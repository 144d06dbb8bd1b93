mod material;
mod shapes;

pub use material::Material;
pub use shapes::{Shape, ShapeHit, Sphere, TriangleMesh};

use crate::{
    bounce::COLOR_PARAMETER,
    math::{Point3, Ray, Spectrum},
    visibility::{ComponentId, MaterialId, TraceHit, TraceParams, VisibilityQuery},
};

/// A small in-memory scene that answers visibility and material queries the
/// way a game engine host would.
///
/// Every shape is its own component. Tracing is a linear closest-hit search
/// against exact geometry, which is plenty for a handful of shapes.
#[derive(Default)]
pub struct Scene {
    pub name: String,
    shapes: Vec<Box<dyn Shape>>,
    materials: Vec<Material>,
}

impl Scene {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        MaterialId(self.materials.len() - 1)
    }

    pub fn add_shape(&mut self, shape: Box<dyn Shape>) -> ComponentId {
        self.shapes.push(shape);
        ComponentId(self.shapes.len() - 1)
    }

    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// A square floor of `half_size` around the origin at height `z`.
    pub fn floor(half_size: f32, z: f32, color: Spectrum<f32>) -> Self {
        let mut scene = Self::new("floor");
        let material = scene.add_material(Material::colored(color));
        scene.add_shape(Box::new(TriangleMesh::quad(
            [
                Point3::new(-half_size, -half_size, z),
                Point3::new(half_size, -half_size, z),
                Point3::new(half_size, half_size, z),
                Point3::new(-half_size, half_size, z),
            ],
            material,
        )));
        scene
    }

    /// A closed z-up room of 1000x1000x400 units with the floor at z=0, a red
    /// wall at +x, a green wall at -x and a blue ball on the floor.
    ///
    /// The wall at -y uses a material without an albedo so its bounces are black.
    pub fn room() -> Self {
        let mut scene = Self::new("room");

        let white = scene.add_material(Material::colored(Spectrum::ones() * 0.7));
        let red = scene.add_material(Material::colored(Spectrum::new(0.7, 0.05, 0.05)));
        let green = scene.add_material(Material::colored(Spectrum::new(0.05, 0.7, 0.05)));
        let blue = scene.add_material(Material::colored(Spectrum::new(0.1, 0.2, 0.8)));
        let unlit = scene.add_material(
            Material::new().with_param("Emissive", Spectrum::new(0.2, 0.2, 0.2)),
        );
        debug_assert!(scene.materials[unlit.0].param(COLOR_PARAMETER).is_none());

        let (h, top) = (500.0, 400.0);
        let p = Point3::new;

        // Floor and ceiling
        scene.add_shape(Box::new(TriangleMesh::quad(
            [p(-h, -h, 0.0), p(h, -h, 0.0), p(h, h, 0.0), p(-h, h, 0.0)],
            white,
        )));
        scene.add_shape(Box::new(TriangleMesh::quad(
            [p(-h, -h, top), p(-h, h, top), p(h, h, top), p(h, -h, top)],
            white,
        )));
        // Walls
        scene.add_shape(Box::new(TriangleMesh::quad(
            [p(h, -h, 0.0), p(h, -h, top), p(h, h, top), p(h, h, 0.0)],
            red,
        )));
        scene.add_shape(Box::new(TriangleMesh::quad(
            [p(-h, -h, 0.0), p(-h, h, 0.0), p(-h, h, top), p(-h, -h, top)],
            green,
        )));
        scene.add_shape(Box::new(TriangleMesh::quad(
            [p(-h, h, 0.0), p(h, h, 0.0), p(h, h, top), p(-h, h, top)],
            white,
        )));
        scene.add_shape(Box::new(TriangleMesh::quad(
            [p(-h, -h, 0.0), p(-h, -h, top), p(h, -h, top), p(h, -h, 0.0)],
            unlit,
        )));

        scene.add_shape(Box::new(Sphere::new(p(150.0, -100.0, 80.0), 80.0, blue)));

        scene
    }
}

impl VisibilityQuery for Scene {
    fn cast_visibility_ray(
        &self,
        origin: Point3<f32>,
        target: Point3<f32>,
        params: TraceParams,
    ) -> Option<TraceHit> {
        // All geometry is exact so trace_complex has nothing to switch between
        let mut ray = Ray::between(origin, target)?;

        let mut closest = None;
        for (i, shape) in self.shapes.iter().enumerate() {
            if let Some(hit) = shape.intersect(ray) {
                ray.t_max = hit.t;
                closest = Some((i, hit));
            }
        }

        closest.map(|(i, hit)| TraceHit {
            impact_point: hit.p,
            impact_normal: hit.n,
            component: ComponentId(i),
            face_index: if params.return_face_index {
                Some(hit.face_index)
            } else {
                None
            },
        })
    }

    fn resolve_material(
        &self,
        component: ComponentId,
        face_index: Option<usize>,
    ) -> Option<MaterialId> {
        self.shapes.get(component.0)?.material(face_index)
    }

    fn vector_parameter(&self, material: MaterialId, name: &str) -> Option<Spectrum<f32>> {
        self.materials.get(material.0)?.param(name)
    }
}
