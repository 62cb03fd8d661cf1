//! Parameters that define a reaction chain

use std::fmt;

use crate::error::KinematicsError;
use crate::reaction::ThetaType;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepKind {
    Reaction,
    Decay,
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StepKind::Reaction => write!(f, "reaction"),
            StepKind::Decay => write!(f, "decay"),
        }
    }
}

/// Sampling parameters for one step of a chain.
///
/// For a reaction, `z` and `a` list the target, projectile and ejectile;
/// for a decay, the parent and the light fragment. The remaining nucleus
/// of each step follows from conservation of charge and nucleon number.
/// Angles are in degrees and energies in MeV.
#[derive(Clone, Debug, PartialEq)]
pub struct StepParameters {
    pub kind: StepKind,
    pub z: Vec<u32>,
    pub a: Vec<u32>,
    pub beam_energy_mean: f64,
    pub beam_energy_sigma: f64,
    pub theta_type: ThetaType,
    pub theta_min: f64,
    pub theta_max: f64,
    pub phi_min: f64,
    pub phi_max: f64,
    /// excitation of the residual (reaction) or heavy fragment (decay)
    pub excitation_mean: f64,
    pub excitation_sigma: f64,
    pub angular_distribution: Option<String>,
}

impl StepParameters {
    fn new(kind: StepKind, z: &[u32], a: &[u32]) -> Self {
        StepParameters {
            kind,
            z: z.to_vec(),
            a: a.to_vec(),
            beam_energy_mean: 0.0,
            beam_energy_sigma: 0.0,
            theta_type: ThetaType::CenterOfMass,
            theta_min: 0.0,
            theta_max: 180.0,
            phi_min: 0.0,
            phi_max: 360.0,
            excitation_mean: 0.0,
            excitation_sigma: 0.0,
            angular_distribution: None,
        }
    }

    /// target + projectile -> ejectile + residual
    pub fn reaction(z: &[u32], a: &[u32]) -> Self {
        Self::new(StepKind::Reaction, z, a)
    }

    /// parent -> light + heavy
    pub fn decay(z: &[u32], a: &[u32]) -> Self {
        Self::new(StepKind::Decay, z, a)
    }

    pub fn with_beam_energy(mut self, mean: f64, sigma: f64) -> Self {
        self.beam_energy_mean = mean;
        self.beam_energy_sigma = sigma;
        self
    }

    pub fn with_theta(mut self, min: f64, max: f64) -> Self {
        self.theta_min = min;
        self.theta_max = max;
        self
    }

    pub fn with_theta_type(mut self, theta_type: ThetaType) -> Self {
        self.theta_type = theta_type;
        self
    }

    pub fn with_phi(mut self, min: f64, max: f64) -> Self {
        self.phi_min = min;
        self.phi_max = max;
        self
    }

    pub fn with_excitation(mut self, mean: f64, sigma: f64) -> Self {
        self.excitation_mean = mean;
        self.excitation_sigma = sigma;
        self
    }

    pub fn with_angular_distribution(mut self, path: &str) -> Self {
        self.angular_distribution = Some(path.to_owned());
        self
    }

    /// Number of nuclei listed for a step of this kind
    fn expected_len(&self) -> usize {
        match self.kind {
            StepKind::Reaction => 3,
            StepKind::Decay => 2,
        }
    }

    /// Checks the step is of the given kind and lists the right number of nuclei.
    pub(super) fn validate(&self, index: usize, kind: StepKind) -> Result<(), KinematicsError> {
        if self.kind != kind {
            return Err(KinematicsError::invalid_chain(
                &format!("step {} is a {}, expected a {}", index + 1, self.kind, kind)
            ));
        }

        let n = self.expected_len();
        if self.z.len() != n || self.a.len() != n {
            return Err(KinematicsError::invalid_chain(
                &format!("step {} ({}) needs {} nuclei, found {} Z and {} A", index + 1, self.kind, n, self.z.len(), self.a.len())
            ));
        }

        Ok(())
    }

    /// The (Z, A) of the nucleus fixed by conservation: the residual of
    /// a reaction or the heavy fragment of a decay.
    pub(super) fn product(&self) -> Result<(u32, u32), KinematicsError> {
        let n = self.expected_len();
        if self.z.len() != n || self.a.len() != n {
            return Err(KinematicsError::invalid_chain(
                &format!("a {} needs {} nuclei, found {} Z and {} A", self.kind, n, self.z.len(), self.a.len())
            ));
        }

        let (z, a): (i64, i64) = match self.kind {
            StepKind::Reaction => (
                self.z[0] as i64 + self.z[1] as i64 - self.z[2] as i64,
                self.a[0] as i64 + self.a[1] as i64 - self.a[2] as i64,
            ),
            StepKind::Decay => (
                self.z[0] as i64 - self.z[1] as i64,
                self.a[0] as i64 - self.a[1] as i64,
            ),
        };

        if z < 0 || a <= 0 || z > a {
            Err(KinematicsError::invalid_chain(&format!("{} produces a nucleus with Z = {}, A = {}", self.kind, z, a)))
        } else {
            Ok((z as u32, a as u32))
        }
    }
}

/// The steps of a reaction chain, in order.
///
/// Three-step chains are coupled if the emission direction of the third
/// step is sampled relative to that of the second.
#[derive(Clone, Debug, PartialEq)]
pub struct ChainParameters {
    pub steps: Vec<StepParameters>,
    pub coupled: bool,
    /// Do the final heavy products lose energy leaving the target?
    pub residual_eloss: bool,
}

impl ChainParameters {
    pub fn new(steps: Vec<StepParameters>) -> Self {
        ChainParameters {
            steps,
            coupled: false,
            residual_eloss: true,
        }
    }

    pub fn coupled(mut self, coupled: bool) -> Self {
        self.coupled = coupled;
        self
    }

    /// Checks that each decay's parent is the heavy product of the
    /// step before.
    pub(super) fn check_sequential(&self) -> Result<(), KinematicsError> {
        for (i, pair) in self.steps.windows(2).enumerate() {
            let (z, a) = pair[0].product()?;
            if pair[1].z[0] != z || pair[1].a[0] != a {
                return Err(KinematicsError::invalid_chain(&format!(
                    "step {} produces (Z = {}, A = {}), but step {} starts from (Z = {}, A = {})",
                    i + 1, z, a, i + 2, pair[1].z[0], pair[1].a[0]
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KinematicsErrorKind;

    #[test]
    fn products() {
        let step = StepParameters::reaction(&[5, 2, 2], &[10, 3, 4]);
        assert_eq!(step.product().unwrap(), (5, 9));
        let step = StepParameters::decay(&[5, 1], &[9, 1]);
        assert_eq!(step.product().unwrap(), (4, 8));
        let step = StepParameters::decay(&[2, 3], &[4, 4]);
        assert!(step.product().is_err());
    }

    #[test]
    fn product_of_short_step() {
        let step = StepParameters::reaction(&[5, 2], &[10, 3]);
        let err = step.product().unwrap_err();
        println!("{}", err);
        assert_eq!(err.kind(), KinematicsErrorKind::InvalidChain);
        let step = StepParameters::decay(&[5], &[9, 1]);
        assert!(step.product().is_err());
    }

    #[test]
    fn sequential_steps() {
        let chain = ChainParameters::new(vec![
            StepParameters::reaction(&[5, 2, 2], &[10, 3, 4]),
            StepParameters::decay(&[5, 1], &[9, 1]),
        ]);
        assert!(chain.check_sequential().is_ok());

        let chain = ChainParameters::new(vec![
            StepParameters::reaction(&[5, 2, 2], &[10, 3, 4]),
            StepParameters::decay(&[4, 2], &[8, 4]),
        ]);
        assert!(chain.check_sequential().is_err());
    }

    #[test]
    fn step_shape() {
        let step = StepParameters::reaction(&[5, 2], &[10, 3]);
        assert!(step.validate(0, StepKind::Reaction).is_err());
        let step = StepParameters::decay(&[5, 1], &[9, 1]);
        assert!(step.validate(1, StepKind::Reaction).is_err());
        assert!(step.validate(1, StepKind::Decay).is_ok());
    }
}
