//! Defines a spatial 3-vector: (x, y, z)

use super::FourVector;

/// A three-vector
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThreeVector {
    x: f64,
    y: f64,
    z: f64,
}

/// `atan2` that returns a fixed angle, rather than an arbitrary one,
/// when `x` vanishes.
pub(super) fn safe_atan2(y: f64, x: f64) -> f64 {
    if x != 0.0 {
        y.atan2(x)
    } else if y > 0.0 {
        std::f64::consts::FRAC_PI_2
    } else if y < 0.0 {
        -std::f64::consts::FRAC_PI_2
    } else {
        0.0
    }
}

impl ThreeVector {
    /// Creates a new three-vector with the specified components.
    pub fn new(x: f64, y: f64, z: f64) -> ThreeVector {
        ThreeVector{x: x, y: y, z: z}
    }

    /// Creates a new three-vector with magnitude `r`, polar angle `theta`
    /// and azimuthal angle `phi`.
    pub fn from_spherical(r: f64, theta: f64, phi: f64) -> ThreeVector {
        let (st, ct) = theta.sin_cos();
        let (sp, cp) = phi.sin_cos();
        ThreeVector::new(r * st * cp, r * st * sp, r * ct)
    }

    /// Returns the squared magnitude of the three-vector.
    pub fn norm_sqr(self) -> f64 {
        self * self
    }

    /// Returns the magnitude of the three-vector.
    pub fn norm(self) -> f64 {
        self.norm_sqr().sqrt()
    }

    /// Returns a new three-vector which has the same direction,
    /// but unit magnitude.
    ///
    /// # Panics
    /// If `self` does not have positive definite norm.
    pub fn normalize(self) -> Self {
        let mag = self.norm();
        assert!(mag > 0.0);
        self / mag
    }

    /// Polar angle with respect to the z axis, in [0, pi].
    /// Zero for the null vector.
    pub fn theta(self) -> f64 {
        let rho = (self.x * self.x + self.y * self.y).sqrt();
        if rho == 0.0 && self.z == 0.0 {
            0.0
        } else {
            safe_atan2(rho, self.z)
        }
    }

    /// Azimuthal angle around the z axis, in [0, 2 pi).
    pub fn phi(self) -> f64 {
        if self.x == 0.0 && self.y == 0.0 {
            return 0.0;
        }
        let phi = safe_atan2(self.y, self.x);
        if phi < 0.0 {
            phi + 2.0 * std::f64::consts::PI
        } else {
            phi
        }
    }

    /// Rotates `self` around the given `axis` by an angle `theta`,
    /// with positive angles corresponding to a right-handed rotation,
    /// and returns the result. The axis must be correctly normalized.
    pub fn rotate_around(self, axis: ThreeVector, theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        ThreeVector::new(
            (c + axis.x * axis.x * (1.0-c)) * self.x
                + (axis.x * axis.y * (1.0-c) - axis.z * s) * self.y
                + (axis.x * axis.z * (1.0-c) + axis.y * s) * self.z,
            (axis.y * axis.x * (1.0-c) + axis.z * s) * self.x
                + (c + axis.y * axis.y * (1.0-c)) * self.y
                + (axis.y * axis.z * (1.0-c) - axis.x * s) * self.z,
            (axis.z * axis.x * (1.0-c) - axis.y * s) * self.x
                + (axis.z * axis.y * (1.0-c) + axis.x * s) * self.y
                + (c + axis.z * axis.z * (1.0-c)) * self.z
        )
    }

    /// Rotates `self` around the y-axis by angle `theta` and returns
    /// the result.
    pub fn rotate_around_y(self, theta: f64) -> Self {
        self.rotate_around(ThreeVector::new(0.0, 1.0, 0.0), theta)
    }

    /// Rotates `self` around the z-axis by angle `theta` and returns
    /// the result.
    pub fn rotate_around_z(self, theta: f64) -> Self {
        self.rotate_around(ThreeVector::new(0.0, 0.0, 1.0), theta)
    }
}

impl std::ops::Index<i32> for ThreeVector {
    type Output = f64;
    fn index(&self, index: i32) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: a three vector has 3 components but the index is {}", index)
        }
    }
}

// Spatial part of a four-momentum
impl std::convert::From<FourVector> for ThreeVector {
    fn from(fv: FourVector) -> Self {
        ThreeVector {
            x: fv[1],
            y: fv[2],
            z: fv[3],
        }
    }
}

impl std::fmt::Display for ThreeVector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl std::ops::Add for ThreeVector {
    type Output = ThreeVector;
    fn add(self, other: ThreeVector) -> ThreeVector {
        ThreeVector {x: self.x + other.x, y: self.y + other.y, z: self.z + other.z}
    }
}

impl std::ops::Sub for ThreeVector {
    type Output = ThreeVector;
    fn sub(self, other: ThreeVector) -> ThreeVector {
        ThreeVector {x: self.x - other.x, y: self.y - other.y, z: self.z - other.z}
    }
}

// Dot product
impl std::ops::Mul for ThreeVector {
    type Output = f64;
    fn mul(self, other: ThreeVector) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
}

impl std::ops::Mul<f64> for ThreeVector {
    type Output = ThreeVector;
    fn mul(self, other: f64) -> ThreeVector {
        ThreeVector{x: self.x * other, y: self.y * other, z: self.z * other}
    }
}

impl std::ops::Mul<ThreeVector> for f64 {
    type Output = ThreeVector;
    fn mul(self, other: ThreeVector) -> ThreeVector {
        ThreeVector{x: self * other.x, y: self * other.y, z: self * other.z}
    }
}

impl std::ops::Neg for ThreeVector {
    type Output = ThreeVector;
    fn neg(self) -> ThreeVector {
        -1.0 * self
    }
}

impl std::ops::Div<f64> for ThreeVector {
    type Output = ThreeVector;
    fn div(self, other: f64) -> ThreeVector {
        ThreeVector{x: self.x / other, y: self.y / other, z: self.z / other}
    }
}
