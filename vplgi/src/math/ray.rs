use super::{common::ValueType, point::Point3, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Rays.html

#[derive(Copy, PartialEq, Clone, Debug)]
pub struct Ray<T>
where
    T: ValueType,
{
    pub o: Point3<T>,
    pub d: Vec3<T>,
    pub t_max: T,
}

impl<T> Ray<T>
where
    T: ValueType,
{
    /// Creates a new `Ray`.
    pub fn new(o: Point3<T>, d: Vec3<T>, t_max: T) -> Self {
        let ret = Self { o, d, t_max };
        debug_assert!(!ret.has_nans());
        ret
    }

    /// Creates a finite `Ray` from `o` toward `target` that ends at `target`.
    ///
    /// Returns `None` if the two points coincide or the segment is too long to
    /// represent.
    //
    // The length is computed in f64 as the squared length of long segments
    // overflows f32.
    pub fn between(o: Point3<T>, target: Point3<T>) -> Option<Self> {
        let to_target = target - o;
        let x = to_target.x.to_f64()?;
        let y = to_target.y.to_f64()?;
        let z = to_target.z.to_f64()?;
        let dist = (x * x + y * y + z * z).sqrt();
        if !dist.is_finite() || dist <= 0.0 {
            return None;
        }

        let d = Vec3::new(
            T::from_f64(x / dist)?,
            T::from_f64(y / dist)?,
            T::from_f64(z / dist)?,
        );
        let t_max = T::from_f64(dist)?;
        if !t_max.is_finite() {
            return None;
        }
        Some(Self::new(o, d, t_max))
    }

    /// Checks if any of the members in this `Ray` contain NaNs.
    pub fn has_nans(&self) -> bool {
        self.o.has_nans() || self.d.has_nans() || self.t_max.is_nan()
    }

    /// Finds the [Point3] on this `Ray` at distance `t`.
    pub fn point(&self, t: T) -> Point3<T> {
        self.o + self.d * t
    }
}
