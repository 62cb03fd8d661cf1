//! Errors raised while building or running a reaction chain

use std::fmt;
use std::error::Error;

/// Why did the kinematics fail?
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum KinematicsErrorKind {
    /// The mass data file is missing or unreadable
    MassFile,
    /// An isotope was requested that is not in the mass table
    MissingIsotope,
    /// The chain parameters do not describe a known topology
    InvalidChain,
    /// A target layer is empty or holds an element without stopping data
    TargetMaterial,
    /// The initial target isotope is not in any layer of the target
    ReactionLayer,
    /// The system was run before a target was bound
    UnboundTarget,
    /// A decay has insufficient invariant mass to produce its fragments
    QValue,
    /// The beam energy is below the kinematic threshold
    EnergyThreshold,
    /// The ejectile cannot reach the requested lab angle
    LabAngle,
}

/// Error returned by chain construction, target binding and sampling.
pub struct KinematicsError {
    kind: KinematicsErrorKind,
    cause: String,
}

impl fmt::Debug for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            KinematicsErrorKind::MassFile => write!(f, "Unable to read mass data from \"{}\".", self.cause),
            KinematicsErrorKind::MissingIsotope => write!(f, "No mass data for isotope {}.", self.cause),
            KinematicsErrorKind::InvalidChain => write!(f, "Reaction chain is invalid: {}.", self.cause),
            KinematicsErrorKind::TargetMaterial => write!(f, "Invalid target layer: {}.", self.cause),
            KinematicsErrorKind::ReactionLayer => write!(f, "Target isotope {} is not present in any target layer.", self.cause),
            KinematicsErrorKind::UnboundTarget => write!(f, "No target bound to system {}.", self.cause),
            KinematicsErrorKind::QValue => write!(f, "Negative Q-value for decay {}.", self.cause),
            KinematicsErrorKind::EnergyThreshold => write!(f, "Beam energy below threshold for reaction {}.", self.cause),
            KinematicsErrorKind::LabAngle => write!(f, "Ejectile lab angle beyond the kinematic maximum for reaction {}.", self.cause),
        }
    }
}

impl fmt::Display for KinematicsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for KinematicsError {}

impl KinematicsError {
    fn new(kind: KinematicsErrorKind, cause: String) -> Self {
        Self { kind, cause }
    }

    pub fn mass_file(path: &str) -> Self {
        Self::new(KinematicsErrorKind::MassFile, path.to_owned())
    }

    pub fn missing_isotope(z: u32, a: u32) -> Self {
        Self::new(KinematicsErrorKind::MissingIsotope, format!("(Z = {}, A = {})", z, a))
    }

    pub fn invalid_chain(cause: &str) -> Self {
        Self::new(KinematicsErrorKind::InvalidChain, cause.to_owned())
    }

    pub fn target_material(cause: &str) -> Self {
        Self::new(KinematicsErrorKind::TargetMaterial, cause.to_owned())
    }

    pub fn reaction_layer(symbol: &str) -> Self {
        Self::new(KinematicsErrorKind::ReactionLayer, symbol.to_owned())
    }

    pub fn unbound_target(equation: &str) -> Self {
        Self::new(KinematicsErrorKind::UnboundTarget, equation.to_owned())
    }

    pub fn q_value(equation: &str) -> Self {
        Self::new(KinematicsErrorKind::QValue, equation.to_owned())
    }

    pub fn energy_threshold(equation: &str) -> Self {
        Self::new(KinematicsErrorKind::EnergyThreshold, equation.to_owned())
    }

    pub fn lab_angle(equation: &str) -> Self {
        Self::new(KinematicsErrorKind::LabAngle, equation.to_owned())
    }

    pub fn kind(&self) -> KinematicsErrorKind {
        self.kind
    }

    /// Is this a physics-validity failure of a single sample, rather than
    /// a problem with the configuration?
    pub fn is_rejection(&self) -> bool {
        match self.kind {
            KinematicsErrorKind::QValue
            | KinematicsErrorKind::EnergyThreshold
            | KinematicsErrorKind::LabAngle => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_kinds() {
        assert!(KinematicsError::q_value("8Be->4He+4He").is_rejection());
        assert!(KinematicsError::energy_threshold("12C(p, n)12N").is_rejection());
        assert!(KinematicsError::lab_angle("2H(12C, 12C)2H").is_rejection());
        assert!(!KinematicsError::missing_isotope(3, 9).is_rejection());
        assert!(!KinematicsError::reaction_layer("12C").is_rejection());

        let msg = KinematicsError::missing_isotope(3, 9).to_string();
        println!("{}", msg);
        assert!(msg.contains("Z = 3"));
    }
}
