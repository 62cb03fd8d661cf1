//! Defines a relativistic 4-momentum: (E, px, py, pz)

use super::ThreeVector;

/// A four-momentum, units of MeV
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FourVector(f64, f64, f64, f64);

impl Default for FourVector {
    fn default() -> Self {
        FourVector(0.0, 0.0, 0.0, 0.0)
    }
}

impl FourVector {
    /// Creates a new four-vector with the specified components.
    pub fn new(e: f64, px: f64, py: f64, pz: f64) -> Self {
        FourVector {0: e, 1: px, 2: py, 3: pz}
    }

    /// Creates a four-vector with total energy `e` and momentum of
    /// magnitude `p` pointing along the polar angle `theta` and
    /// azimuthal angle `phi`.
    pub fn from_spherical(theta: f64, phi: f64, p: f64, e: f64) -> Self {
        let p = ThreeVector::from_spherical(p, theta, phi);
        FourVector::new(e, p[0], p[1], p[2])
    }

    /// Creates a four-vector from an energy and 3-momentum.
    pub fn from_parts(e: f64, p: ThreeVector) -> Self {
        FourVector::new(e, p[0], p[1], p[2])
    }

    /// A particle of mass `m` at rest
    pub fn at_rest(m: f64) -> Self {
        FourVector::new(m, 0.0, 0.0, 0.0)
    }

    pub fn energy(&self) -> f64 {
        self.0
    }

    pub fn px(&self) -> f64 {
        self.1
    }

    pub fn py(&self) -> f64 {
        self.2
    }

    pub fn pz(&self) -> f64 {
        self.3
    }

    /// The 3-momentum
    pub fn momentum(&self) -> ThreeVector {
        ThreeVector::from(*self)
    }

    /// Magnitude of the 3-momentum
    pub fn p(&self) -> f64 {
        self.momentum().norm()
    }

    /// Polar angle of the momentum, in [0, pi]
    pub fn theta(&self) -> f64 {
        self.momentum().theta()
    }

    /// Azimuthal angle of the momentum, in [0, 2 pi)
    pub fn phi(&self) -> f64 {
        self.momentum().phi()
    }

    /// Returns the squared norm of the four-vector
    pub fn norm_sqr(self) -> f64 {
        self * self
    }

    /// Returns the invariant mass, sqrt(E^2 - p^2). Slightly spacelike
    /// vectors, which arise from rounding, have zero mass.
    pub fn invariant_mass(&self) -> f64 {
        self.norm_sqr().max(0.0).sqrt()
    }

    /// Kinetic energy, E - M
    pub fn kinetic_energy(&self) -> f64 {
        self.0 - self.invariant_mass()
    }

    /// The velocity of a particle with this four-momentum, p/E
    pub fn boost_vector(&self) -> ThreeVector {
        self.momentum() / self.0
    }

    /// The boost that takes this four-momentum into its rest frame
    pub fn rest_frame_boost(&self) -> ThreeVector {
        -self.boost_vector()
    }

    /// Returns the four-momentum seen after adding `beta` to its velocity,
    /// i.e. the transform into a frame moving with -`beta`.
    /// Boosting by `beta` and then `-beta` is the identity.
    ///
    /// # Panics
    /// If `beta` is not strictly subluminal.
    pub fn boost(self, beta: ThreeVector) -> Self {
        let b2 = beta.norm_sqr();
        assert!(b2 < 1.0);
        if b2 == 0.0 {
            return self;
        }
        let gamma = 1.0 / (1.0 - b2).sqrt();
        let gfactor = (gamma - 1.0) / b2;
        let p = self.momentum();
        let bp = beta * p;
        let p_prime = p + (gfactor * bp + gamma * self.0) * beta;
        FourVector::from_parts(gamma * (self.0 + bp), p_prime)
    }
}

// Index into four vector
impl std::ops::Index<i32> for FourVector {
    type Output = f64;
    fn index(&self, index: i32) -> &Self::Output {
        match index {
            0 => &self.0,
            1 => &self.1,
            2 => &self.2,
            3 => &self.3,
            _ => panic!("index out of bounds: a four vector has 4 components but the index is {}", index)
        }
    }
}

// Add two four vectors together
impl std::ops::Add for FourVector {
    type Output = FourVector;
    fn add(self, other: FourVector) -> FourVector {
        FourVector {
            0: self.0 + other.0,
            1: self.1 + other.1,
            2: self.2 + other.2,
            3: self.3 + other.3
        }
    }
}

// Subtract two four vectors
impl std::ops::Sub for FourVector {
    type Output = FourVector;
    fn sub(self, other: FourVector) -> FourVector {
        FourVector {
            0: self.0 - other.0,
            1: self.1 - other.1,
            2: self.2 - other.2,
            3: self.3 - other.3
        }
    }
}

// Multiply (i.e. dot) two four vectors together
impl std::ops::Mul for FourVector {
    type Output = f64;
    fn mul(self, other: FourVector) -> f64 {
        self.0 * other.0 - self.1 * other.1 - self.2 * other.2 - self.3 * other.3
    }
}

// Multiply a four vector by a scalar
impl std::ops::Mul<f64> for FourVector {
    type Output = FourVector;
    fn mul (self, other: f64) -> FourVector {
        FourVector {
            0: self.0 * other,
            1: self.1 * other,
            2: self.2 * other,
            3: self.3 * other
        }
    }
}

impl std::fmt::Display for FourVector {
    fn fmt(&self, f : &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.0, self.1, self.2, self.3)
    }
}

impl std::convert::From<[f64; 4]> for FourVector {
    fn from(item: [f64; 4]) -> Self {
        FourVector::new(item[0], item[1], item[2], item[3])
    }
}
