use crate::{
    math::{Normal, Point3, Ray},
    visibility::MaterialId,
};

/// Info of a surface hit
#[derive(Copy, Clone, Debug)]
pub struct ShapeHit {
    /// Hit distance
    pub t: f32,
    /// World position
    pub p: Point3<f32>,
    /// Unit surface normal, facing the ray
    pub n: Normal<f32>,
    /// Index of the hit face within the shape
    pub face_index: usize,
}

pub trait Shape: Send + Sync {
    /// Intersects [Ray] with this object. Hits beyond `ray.t_max` are ignored.
    fn intersect(&self, ray: Ray<f32>) -> Option<ShapeHit>;
    /// Returns the material of the given face.
    fn material(&self, face_index: Option<usize>) -> Option<MaterialId>;
}

/// Zero or non-finite directions make the intersection math produce NaNs.
fn valid_direction(ray: Ray<f32>) -> bool {
    let len_sqr = ray.d.len_sqr();
    len_sqr.is_finite() && len_sqr > 0.0
}

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Triangle_Meshes.html

/// A triangle mesh with a material per face.
pub struct TriangleMesh {
    points: Vec<Point3<f32>>,
    /// Triangle vertex indices stored as triplets
    indices: Vec<usize>,
    face_materials: Vec<MaterialId>,
}

impl TriangleMesh {
    /// Creates a new `TriangleMesh` from world space points.
    ///
    /// `face_materials` has one entry per triangle.
    pub fn new(
        points: Vec<Point3<f32>>,
        indices: Vec<usize>,
        face_materials: Vec<MaterialId>,
    ) -> Self {
        assert!(indices.len() % 3 == 0, "Indices should be triplets");
        assert_eq!(
            indices.len() / 3,
            face_materials.len(),
            "Expected a material per face"
        );
        assert!(
            indices.iter().all(|&i| i < points.len()),
            "Index out of bounds"
        );

        Self {
            points,
            indices,
            face_materials,
        }
    }

    /// Creates a quad of two triangles from corners in winding order.
    pub fn quad(corners: [Point3<f32>; 4], material: MaterialId) -> Self {
        Self::new(
            corners.to_vec(),
            vec![0, 1, 2, 0, 2, 3],
            vec![material, material],
        )
    }

    pub fn face_count(&self) -> usize {
        self.face_materials.len()
    }

    fn intersect_face(&self, face: usize, ray: Ray<f32>) -> Option<(f32, Normal<f32>)> {
        if !valid_direction(ray) {
            return None;
        }

        // pbrt's ray-triangle test performs the test in a coordinate space where the
        // ray lies on the +z axis. This way we don't get incorrect misses e.g. on rays
        // that intersect directly on an edge.

        let first = face * 3;
        let p0 = self.points[self.indices[first]];
        let p1 = self.points[self.indices[first + 1]];
        let p2 = self.points[self.indices[first + 2]];

        let n = (p1 - p0).cross(p2 - p0);
        if n.len_sqr() == 0.0 {
            // Degenerate
            return None;
        }
        let n = Normal::from(n.normalized());

        // Permute direction so that Z is largest
        let kz = ray.d.abs().max_dimension();
        let kx = if kz < 2 { kz + 1 } else { 0 };
        let ky = if kx < 2 { kx + 1 } else { 0 };
        let mut p0t = (p0 - ray.o).permuted(kx, ky, kz);
        let mut p1t = (p1 - ray.o).permuted(kx, ky, kz);
        let mut p2t = (p2 - ray.o).permuted(kx, ky, kz);
        let d = ray.d.permuted(kx, ky, kz);

        // Shear to get +Z forward
        let sx = -d.x / d.z;
        let sy = -d.y / d.z;
        let sz = 1.0 / d.z;
        p0t.x += sx * p0t.z;
        p0t.y += sy * p0t.z;
        p1t.x += sx * p1t.z;
        p1t.y += sy * p1t.z;
        p2t.x += sx * p2t.z;
        p2t.y += sy * p2t.z;

        // Edge coefficients
        let (e0, e1, e2) = {
            let e0 = p1t.x * p2t.y - p1t.y * p2t.x;
            let e1 = p2t.x * p0t.y - p2t.y * p0t.x;
            let e2 = p0t.x * p1t.y - p0t.y * p1t.x;

            // Fall back to f64 if we're exactly on any edge
            if (e0 == 0.0) || (e1 == 0.0) || (e2 == 0.0) {
                let e0 = (p1t.x as f64) * (p2t.y as f64) - (p1t.y as f64) * (p2t.x as f64);
                let e1 = (p2t.x as f64) * (p0t.y as f64) - (p2t.y as f64) * (p0t.x as f64);
                let e2 = (p0t.x as f64) * (p1t.y as f64) - (p0t.y as f64) * (p1t.x as f64);
                (e0 as f32, e1 as f32, e2 as f32)
            } else {
                (e0, e1, e2)
            }
        };

        // Miss
        if ((e0 < 0.0) || (e1 < 0.0) || (e2 < 0.0)) && ((e0 > 0.0) || (e1 > 0.0) || (e2 > 0.0)) {
            return None;
        }

        // Edge-on
        let det = e0 + e1 + e2;
        if det == 0.0 {
            return None;
        }

        let t_scaled = e0 * p0t.z * sz + e1 * p1t.z * sz + e2 * p2t.z * sz;
        if ((det < 0.0) && ((t_scaled >= 0.0) || (t_scaled < ray.t_max * det)))
            || ((det > 0.0) && ((t_scaled <= 0.0) || (t_scaled > ray.t_max * det)))
        {
            return None;
        }

        // Surfaces are two-sided so the normal always faces the ray
        let n = if ray.d.dot_n(n) < 0.0 { n } else { -n };

        Some((t_scaled / det, n))
    }
}

impl Shape for TriangleMesh {
    fn intersect(&self, ray: Ray<f32>) -> Option<ShapeHit> {
        let mut closest: Option<(usize, f32, Normal<f32>)> = None;
        let mut ray = ray;
        for face in 0..self.face_count() {
            if let Some((t, n)) = self.intersect_face(face, ray) {
                ray.t_max = t;
                closest = Some((face, t, n));
            }
        }

        closest.map(|(face_index, t, n)| ShapeHit {
            t,
            p: ray.point(t),
            n,
            face_index,
        })
    }

    fn material(&self, face_index: Option<usize>) -> Option<MaterialId> {
        face_index.and_then(|face| self.face_materials.get(face).copied())
    }
}

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Shapes/Spheres.html

/// A sphere object.
pub struct Sphere {
    center: Point3<f32>,
    radius: f32,
    material: MaterialId,
}

impl Sphere {
    /// Creates a new `Sphere`.
    pub fn new(center: Point3<f32>, radius: f32, material: MaterialId) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Shape for Sphere {
    fn intersect(&self, ray: Ray<f32>) -> Option<ShapeHit> {
        if !valid_direction(ray) {
            return None;
        }

        let o = ray.o - self.center;
        let d = ray.d;

        // Quadratic coefficients
        let a = d.len_sqr();
        let b = 2.0 * d.dot(o);
        let c = o.len_sqr() - self.radius * self.radius;

        // Solve quadratic equation for ts
        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }
        let rd = discriminant.sqrt();

        let q = if b < 0.0 {
            -0.5 * (b - rd)
        } else {
            -0.5 * (b + rd)
        };

        // Find hit points
        let mut t0 = q / a;
        let mut t1 = c / q;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t0 > ray.t_max || t1 <= 0.0 {
            return None;
        }
        let mut t = t0;
        if t <= 0.0 {
            t = t1;
            if t > ray.t_max {
                return None;
            }
        }

        let p = ray.point(t);
        let n = Normal::from((p - self.center).normalized());
        // Hits from inside see the inner surface
        let n = if ray.d.dot_n(n) < 0.0 { n } else { -n };

        Some(ShapeHit {
            t,
            p,
            n,
            face_index: 0,
        })
    }

    fn material(&self, _face_index: Option<usize>) -> Option<MaterialId> {
        Some(self.material)
    }
}
