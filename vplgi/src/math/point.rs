use approx::{AbsDiffEq, RelativeEq};
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use super::{common::ValueType, vector::Vec3};

// Based on Physically Based Rendering 3rd ed.
// http://www.pbr-book.org/3ed-2018/Geometry_and_Transformations/Points.html

/// A three-dimensional point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point3<T>
where
    T: ValueType,
{
    /// The x component of the point.
    pub x: T,
    /// The y component of the point.
    pub y: T,
    /// The z component of the point.
    pub z: T,
}

impl_components!(Point3 [x y z]);

impl<T> Point3<T>
where
    T: ValueType,
{
    /// Returns the squared distance between the two points.
    #[inline]
    pub fn dist_sqr(&self, other: Self) -> T {
        (*self - other).len_sqr()
    }

    /// Returns the distance between the two points.
    #[inline]
    pub fn dist(&self, other: Self) -> T {
        (*self - other).len()
    }
}

impl<T> From<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    fn from(v: Vec3<T>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl<T> Add<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    type Output = Self;

    fn add(self, v: Vec3<T>) -> Self {
        Self::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl<T> AddAssign<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    fn add_assign(&mut self, v: Vec3<T>) {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
    }
}

impl<T> Sub<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    type Output = Self;

    fn sub(self, v: Vec3<T>) -> Self {
        Self::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl<T> SubAssign<Vec3<T>> for Point3<T>
where
    T: ValueType,
{
    fn sub_assign(&mut self, v: Vec3<T>) {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
    }
}

impl<T> Sub for Point3<T>
where
    T: ValueType,
{
    type Output = Vec3<T>;

    fn sub(self, other: Self) -> Vec3<T> {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}
