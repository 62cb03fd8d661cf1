//! Distributions of the per-sample parameters of each step

use rand::prelude::*;
use rand_distr::StandardNormal;

use crate::angular::AngularDistribution;
use crate::constants::*;
use crate::reaction::Reaction;
use super::StepParameters;

/// Normally distributed, or fixed if `sigma` is zero
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gaussian {
    mean: f64,
    sigma: f64,
}

impl Gaussian {
    pub fn new(mean: f64, sigma: f64) -> Self {
        Gaussian {mean, sigma: sigma.abs()}
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        if self.sigma > 0.0 {
            self.mean + self.sigma * rng.sample::<f64, _>(StandardNormal)
        } else {
            self.mean
        }
    }
}

/// Uniformly distributed between `min` and `max`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlatRange {
    min: f64,
    max: f64,
}

impl FlatRange {
    pub fn new(min: f64, max: f64) -> Self {
        FlatRange {min, max}
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.min + (self.max - self.min) * rng.gen::<f64>()
    }
}

/// Polar angles distributed isotropically between two limits,
/// i.e. uniform in cos(theta)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PolarRange {
    cos: FlatRange,
}

impl PolarRange {
    /// Limits in radians
    pub fn new(theta_min: f64, theta_max: f64) -> Self {
        PolarRange {cos: FlatRange::new(theta_min.cos(), theta_max.cos())}
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> f64 {
        self.cos.sample(rng).max(-1.0).min(1.0).acos()
    }
}

/// One sample of a scattering step
#[derive(Copy, Clone, Debug)]
pub struct ReactionDraw {
    pub beam_ke: f64,
    pub theta: f64,
    pub phi: f64,
    pub excitation: f64,
}

impl ReactionDraw {
    pub fn apply(&self, rxn: &mut Reaction, depth: f64) {
        rxn.set_depth(depth);
        rxn.set_beam_ke(self.beam_ke);
        rxn.set_polar_angle(self.theta);
        rxn.set_azimuthal_angle(self.phi);
        rxn.set_excitation(self.excitation);
    }
}

/// One sample of a decay step. `cos_theta` is None if the decay does
/// not happen.
#[derive(Copy, Clone, Debug)]
pub struct DecayDraw {
    pub cos_theta: Option<f64>,
    pub phi: f64,
    pub excitation: f64,
}

impl DecayDraw {
    pub fn occurs(&self) -> bool {
        self.cos_theta.is_some()
    }

    /// Emission angle of the light fragment in the parent's rest frame
    pub fn theta(&self) -> f64 {
        self.cos_theta.unwrap_or(1.0).acos()
    }

    pub fn apply(&self, rxn: &mut Reaction, depth: f64) {
        rxn.set_depth(depth);
        rxn.set_polar_angle(self.theta());
        rxn.set_azimuthal_angle(self.phi);
        rxn.set_excitation(self.excitation);
    }
}

/// Samples the parameters of a scattering step
#[derive(Clone, Debug)]
pub struct ReactionSampler {
    beam: Gaussian,
    theta: PolarRange,
    phi: FlatRange,
    excitation: Gaussian,
}

impl ReactionSampler {
    pub fn new(params: &StepParameters) -> Self {
        ReactionSampler {
            beam: Gaussian::new(params.beam_energy_mean, params.beam_energy_sigma),
            theta: PolarRange::new(params.theta_min * DEG_TO_RAD, params.theta_max * DEG_TO_RAD),
            phi: FlatRange::new(params.phi_min * DEG_TO_RAD, params.phi_max * DEG_TO_RAD),
            excitation: Gaussian::new(params.excitation_mean, params.excitation_sigma),
        }
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> ReactionDraw {
        ReactionDraw {
            beam_ke: self.beam.sample(rng),
            theta: self.theta.sample(rng),
            phi: self.phi.sample(rng),
            excitation: self.excitation.sample(rng).max(0.0),
        }
    }
}

/// Samples the parameters of a decay step
#[derive(Clone, Debug)]
pub struct DecaySampler {
    angular: AngularDistribution,
    phi: FlatRange,
    excitation: Gaussian,
}

impl DecaySampler {
    pub fn new(params: &StepParameters) -> Self {
        let angular = match &params.angular_distribution {
            Some(path) => AngularDistribution::from_file(path),
            None => AngularDistribution::isotropic(),
        };
        Self::from_distribution(angular, params)
    }

    /// Uses the given angular distribution in place of the one named
    /// by `params`.
    pub fn from_distribution(angular: AngularDistribution, params: &StepParameters) -> Self {
        DecaySampler {
            angular,
            phi: FlatRange::new(params.phi_min * DEG_TO_RAD, params.phi_max * DEG_TO_RAD),
            excitation: Gaussian::new(params.excitation_mean, params.excitation_sigma),
        }
    }

    pub fn angular_distribution(&self) -> &AngularDistribution {
        &self.angular
    }

    pub fn sample<R: Rng>(&self, rng: &mut R) -> DecayDraw {
        DecayDraw {
            cos_theta: self.angular.sample(rng),
            phi: self.phi.sample(rng),
            excitation: self.excitation.sample(rng).max(0.0),
        }
    }
}
