// The containers share most of their surface so it's generated with macros.
// These have to be defined before the modules that expand them.

/// Implements the shared surface of a three-component container: constructors,
/// NaN checks, indexing, scalar arithmetic and the `approx` comparisons.
macro_rules! impl_components {
    ( $( $vec_type:ident [ $c0:ident $c1:ident $c2:ident ] ),+ ) => {
        $(
            impl<T> $vec_type<T>
            where
                T: ValueType,
            {
                /// Constructs a new value.
                ///
                /// Has a debug assert that checks for NaNs.
                #[inline]
                pub fn new($c0: T, $c1: T, $c2: T) -> Self {
                    let v = Self { $c0, $c1, $c2 };
                    debug_assert!(!v.has_nans());
                    v
                }

                /// Constructs a new value of 0s.
                #[inline]
                pub fn zeros() -> Self {
                    Self::from(T::zero())
                }

                /// Constructs a new value of 1s.
                #[inline]
                pub fn ones() -> Self {
                    Self::from(T::one())
                }

                /// Returns `true` if any component is NaN.
                #[inline]
                pub fn has_nans(&self) -> bool {
                    self.$c0.is_nan() || self.$c1.is_nan() || self.$c2.is_nan()
                }
            }

            impl<T> From<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn from(v: T) -> Self {
                    Self {
                        $c0: v,
                        $c1: v,
                        $c2: v,
                    }
                }
            }

            impl<T> Index<usize> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = T;

                fn index(&self, i: usize) -> &T {
                    match i {
                        0 => &self.$c0,
                        1 => &self.$c1,
                        2 => &self.$c2,
                        _ => panic!("Out of bounds {} access with index {}", stringify!($vec_type), i),
                    }
                }
            }

            impl<T> IndexMut<usize> for $vec_type<T>
            where
                T: ValueType,
            {
                fn index_mut(&mut self, i: usize) -> &mut T {
                    match i {
                        0 => &mut self.$c0,
                        1 => &mut self.$c1,
                        2 => &mut self.$c2,
                        _ => panic!("Out of bounds {} access with index {}", stringify!($vec_type), i),
                    }
                }
            }

            impl<T> Mul<T> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn mul(self, s: T) -> Self {
                    Self::new(self.$c0 * s, self.$c1 * s, self.$c2 * s)
                }
            }

            impl<T> Div<T> for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn div(self, s: T) -> Self {
                    Self::new(self.$c0 / s, self.$c1 / s, self.$c2 / s)
                }
            }

            impl<T> MulAssign<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn mul_assign(&mut self, s: T) {
                    self.$c0 *= s;
                    self.$c1 *= s;
                    self.$c2 *= s;
                }
            }

            impl<T> DivAssign<T> for $vec_type<T>
            where
                T: ValueType,
            {
                fn div_assign(&mut self, s: T) {
                    self.$c0 /= s;
                    self.$c1 /= s;
                    self.$c2 /= s;
                }
            }

            impl<T> AbsDiffEq for $vec_type<T>
            where
                T: ValueType + AbsDiffEq<Epsilon = T>,
            {
                type Epsilon = T;

                fn default_epsilon() -> T {
                    T::default_epsilon()
                }

                fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                    self.$c0.abs_diff_eq(&other.$c0, epsilon)
                        && self.$c1.abs_diff_eq(&other.$c1, epsilon)
                        && self.$c2.abs_diff_eq(&other.$c2, epsilon)
                }
            }

            impl<T> RelativeEq for $vec_type<T>
            where
                T: ValueType + RelativeEq + AbsDiffEq<Epsilon = T>,
            {
                fn default_max_relative() -> T {
                    T::default_max_relative()
                }

                fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                    self.$c0.relative_eq(&other.$c0, epsilon, max_relative)
                        && self.$c1.relative_eq(&other.$c1, epsilon, max_relative)
                        && self.$c2.relative_eq(&other.$c2, epsilon, max_relative)
                }
            }
        )*
    };
}

/// Implements the linear algebra on top of [`impl_components`] for the types
/// that behave as proper vectors.
macro_rules! impl_linear {
    ( $( $vec_type:ident [ $c0:ident $c1:ident $c2:ident ] ),+ ) => {
        $(
            impl<T> $vec_type<T>
            where
                T: ValueType,
            {
                /// Returns the dot product of the two values.
                #[inline]
                pub fn dot(&self, other: Self) -> T {
                    debug_assert!(!self.has_nans());
                    debug_assert!(!other.has_nans());

                    self.$c0 * other.$c0 + self.$c1 * other.$c1 + self.$c2 * other.$c2
                }

                /// Returns the squared length.
                #[inline]
                pub fn len_sqr(&self) -> T {
                    self.dot(*self)
                }

                /// Returns the length.
                #[inline]
                pub fn len(&self) -> T {
                    self.len_sqr().sqrt()
                }

                /// Returns the normalized value.
                ///
                /// Zero length input produces NaNs and trips the debug assert in `new`.
                #[inline]
                pub fn normalized(&self) -> Self {
                    *self / self.len()
                }

                /// Returns the normalized value or `self` unchanged if it is too short
                /// to normalize reliably.
                #[inline]
                pub fn normalized_or_zero(&self) -> Self {
                    let len_sqr = self.len_sqr();
                    if len_sqr <= T::degenerate_len_sqr() {
                        *self
                    } else {
                        *self / len_sqr.sqrt()
                    }
                }
            }

            impl<T> Neg for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn neg(self) -> Self {
                    Self::new(-self.$c0, -self.$c1, -self.$c2)
                }
            }

            impl<T> Add for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn add(self, other: Self) -> Self {
                    Self::new(self.$c0 + other.$c0, self.$c1 + other.$c1, self.$c2 + other.$c2)
                }
            }

            impl<T> Sub for $vec_type<T>
            where
                T: ValueType,
            {
                type Output = Self;

                fn sub(self, other: Self) -> Self {
                    Self::new(self.$c0 - other.$c0, self.$c1 - other.$c1, self.$c2 - other.$c2)
                }
            }

            impl<T> AddAssign for $vec_type<T>
            where
                T: ValueType,
            {
                fn add_assign(&mut self, other: Self) {
                    self.$c0 += other.$c0;
                    self.$c1 += other.$c1;
                    self.$c2 += other.$c2;
                }
            }

            impl<T> SubAssign for $vec_type<T>
            where
                T: ValueType,
            {
                fn sub_assign(&mut self, other: Self) {
                    self.$c0 -= other.$c0;
                    self.$c1 -= other.$c1;
                    self.$c2 -= other.$c2;
                }
            }
        )*
    };
}

mod common;
mod normal;
mod point;
mod ray;
mod spectrum;
mod vector;

pub use common::ValueType;
pub use normal::Normal;
pub use point::Point3;
pub use ray::Ray;
pub use spectrum::Spectrum;
pub use vector::Vec3;
