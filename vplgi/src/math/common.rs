use num::cast::{FromPrimitive, ToPrimitive};
use num::traits::Float;
use std::fmt::Debug;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Scalar types that can be stored in the math containers
pub trait ValueType:
    Float + FromPrimitive + ToPrimitive + AddAssign + SubAssign + MulAssign + DivAssign + Debug
{
    /// Squared length under which a vector is considered degenerate for normalization.
    fn degenerate_len_sqr() -> Self {
        Self::from_f64(1e-8).unwrap_or_else(Self::epsilon)
    }
}

// Impl for all matching types
impl<T> ValueType for T where
    T: Float + FromPrimitive + ToPrimitive + AddAssign + SubAssign + MulAssign + DivAssign + Debug
{
}
