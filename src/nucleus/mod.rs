//! Nuclei: an isotope identity plus a four-momentum

use std::fmt;

use crate::error::KinematicsError;
use crate::geometry::*;

mod mass;
pub use mass::*;

/// A nucleus taking part in a reaction chain.
///
/// The identity (`z`, `a`, `ground_state_mass`, `symbol`) is fixed when
/// the chain is built; the kinematics are overwritten on every sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Nucleus {
    pub z: u32,
    pub a: u32,
    /// units of MeV
    pub ground_state_mass: f64,
    pub symbol: String,
    /// Emission angle in the centre-of-mass frame of the step that produced it
    pub theta_cm: f64,
    pub p4: FourVector,

    pub is_detected: bool,
    pub detected_ke: f64,
    pub detected_theta: f64,
    pub detected_phi: f64,
}

impl Nucleus {
    /// Creates a nucleus at rest, resolving its mass and symbol.
    pub fn new(z: u32, a: u32, masses: &MassTable) -> Result<Self, KinematicsError> {
        let ground_state_mass = masses.mass(z, a)?;
        let symbol = masses.symbol(z, a)?.to_owned();
        Ok(Nucleus {
            z,
            a,
            ground_state_mass,
            symbol,
            theta_cm: 0.0,
            p4: FourVector::at_rest(ground_state_mass),
            is_detected: false,
            detected_ke: 0.0,
            detected_theta: 0.0,
            detected_phi: 0.0,
        })
    }

    /// Sets the four-momentum from spherical momentum components.
    pub fn set_spherical(&mut self, theta: f64, phi: f64, p: f64, e: f64) {
        self.p4 = FourVector::from_spherical(theta, phi, p, e);
    }

    /// Returns the nucleus to rest in its ground state and clears
    /// its per-sample fields.
    pub fn reset(&mut self) {
        self.p4 = FourVector::at_rest(self.ground_state_mass);
        self.theta_cm = 0.0;
        self.is_detected = false;
        self.detected_ke = 0.0;
        self.detected_theta = 0.0;
        self.detected_phi = 0.0;
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.p4.kinetic_energy()
    }

    pub fn excitation_energy(&self) -> f64 {
        self.p4.invariant_mass() - self.ground_state_mass
    }

    pub fn theta(&self) -> f64 {
        self.p4.theta()
    }

    pub fn phi(&self) -> f64 {
        self.p4.phi()
    }

    /// What remains of `self` once `other` is removed: charge, nucleon
    /// number and four-momentum are subtracted. None if `other` holds
    /// more protons or nucleons than `self`.
    pub fn checked_sub(&self, other: &Nucleus) -> Option<Nucleus> {
        let p4 = self.p4 - other.p4;
        Some(Nucleus {
            z: self.z.checked_sub(other.z)?,
            a: self.a.checked_sub(other.a)?,
            ground_state_mass: p4.invariant_mass(),
            symbol: String::new(),
            theta_cm: 0.0,
            p4,
            is_detected: false,
            detected_ke: 0.0,
            detected_theta: 0.0,
            detected_phi: 0.0,
        })
    }
}

// Composite of two nuclei. Charge, nucleon number and four-momentum
// are summed; the composite has no tabulated identity.
impl<'a> std::ops::Add for &'a Nucleus {
    type Output = Nucleus;
    fn add(self, other: &'a Nucleus) -> Nucleus {
        let p4 = self.p4 + other.p4;
        Nucleus {
            z: self.z + other.z,
            a: self.a + other.a,
            ground_state_mass: p4.invariant_mass(),
            symbol: String::new(),
            theta_cm: 0.0,
            p4,
            is_detected: false,
            detected_ke: 0.0,
            detected_theta: 0.0,
            detected_phi: 0.0,
        }
    }
}

impl fmt::Display for Nucleus {
    // "Z A KE (MeV) theta (rad) phi (rad) theta_cm (rad) Ex (MeV) detected"
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
            "{}\t{}\t{:.6e}\t{:.6e}\t{:.6e}\t{:.6e}\t{:.6e}\t{}",
            self.z, self.a,
            self.kinetic_energy(),
            self.theta(), self.phi(),
            self.theta_cm,
            self.excitation_energy(),
            if self.is_detected {1} else {0},
        )
    }
}
