//! A reaction followed by two sequential decays, where the direction of
//! the second decay is correlated with that of the first

use std::sync::Arc;

use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::KinematicsError;
use crate::geometry::*;
use crate::nucleus::{MassTable, Nucleus};
use crate::reaction::Reaction;
use crate::target::LayeredTarget;
use super::*;
use super::three_step::ThreeStepChain;

/// Nuclei as for [`ThreeStepSystem`].
///
/// The angle sampled for the third step is measured relative to the
/// direction of breakup1 in the rest frame of breakup2, rather than to
/// the beam axis. Parameters are redrawn until the reaction is above
/// threshold and both decays are allowed.
pub struct CoupledThreeStepSystem {
    nuclei: Vec<Nucleus>,
    step1: Reaction,
    step2: Reaction,
    step3: Reaction,
    step1_sampler: ReactionSampler,
    step2_sampler: DecaySampler,
    step3_sampler: DecaySampler,
    target: Option<Arc<LayeredTarget>>,
    rng: Xoshiro256StarStar,
    equation: String,
}

/// Returns the polar and azimuthal angles of the direction that makes
/// an angle `rel_theta` with `axis`, at azimuth `rel_phi` around it.
pub fn coupled_direction(axis: ThreeVector, rel_theta: f64, rel_phi: f64) -> (f64, f64) {
    let dir = ThreeVector::from_spherical(1.0, rel_theta, rel_phi)
        .rotate_around_y(axis.theta())
        .rotate_around_z(axis.phi());
    (dir.theta(), dir.phi())
}

impl CoupledThreeStepSystem {
    pub fn new(params: &ChainParameters, masses: &MassTable, rng: Xoshiro256StarStar) -> Result<Self, KinematicsError> {
        let ThreeStepChain {nuclei, steps: [step1, step2, step3], equation} = ThreeStepChain::new(params, masses)?;

        Ok(CoupledThreeStepSystem {
            nuclei,
            step1,
            step2,
            step3,
            step1_sampler: ReactionSampler::new(&params.steps[0]),
            step2_sampler: DecaySampler::new(&params.steps[1]),
            step3_sampler: DecaySampler::new(&params.steps[2]),
            target: None,
            rng,
            equation,
        })
    }

    /// Computes the chain for one set of parameters
    fn calculate(&mut self, target: &LayeredTarget, rxn: ReactionDraw, decay1: DecayDraw, decay2: DecayDraw, depth: f64) -> Result<(), KinematicsError> {
        rxn.apply(&mut self.step1, depth);
        decay1.apply(&mut self.step2, depth);
        self.step1.calculate(&mut self.nuclei, target)?;

        // Branches that do not occur leave their products at rest
        if !decay1.occurs() {
            return Ok(());
        }

        // The direction of breakup1 is needed before it is slowed down
        self.step2.calculate_kinematics(&mut self.nuclei, target)?;
        let axis = self.nuclei[4].p4
            .boost(self.nuclei[5].p4.rest_frame_boost())
            .momentum();
        self.step2.apply_energy_loss(&mut self.nuclei, target);

        if !decay2.occurs() {
            return Ok(());
        }

        let (theta, phi) = coupled_direction(axis, decay2.theta(), decay2.phi);
        let decay2 = DecayDraw {cos_theta: Some(theta.cos()), phi, ..decay2};
        decay2.apply(&mut self.step3, depth);
        self.step3.calculate(&mut self.nuclei, target)
    }
}

impl ReactionSystem for CoupledThreeStepSystem {
    fn bind_target(&mut self, target: Arc<LayeredTarget>) -> Result<(), KinematicsError> {
        let layer = reaction_layer(&target, &self.nuclei[0])?;
        self.step1.set_rxn_layer(layer);
        self.step2.set_rxn_layer(layer);
        self.step3.set_rxn_layer(layer);
        self.target = Some(target);
        Ok(())
    }

    fn run_system(&mut self) -> Result<(), KinematicsError> {
        let target = self.target.clone()
            .ok_or_else(|| KinematicsError::unbound_target(&self.equation))?;

        let mut rejected = 0;
        let mut last_error = None;

        while rejected < MAX_RESAMPLES {
            reset_all(&mut self.nuclei);
            let depth = self.rng.gen::<f64>();
            let rxn = self.step1_sampler.sample(&mut self.rng);
            let decay1 = self.step2_sampler.sample(&mut self.rng);
            let decay2 = self.step3_sampler.sample(&mut self.rng);

            if !self.step1.check_reaction_threshold(&self.nuclei, rxn.beam_ke, rxn.excitation) {
                rejected += 1;
                last_error = Some(KinematicsError::energy_threshold(&self.equation));
                continue;
            }
            let decays_allowed = !decay1.occurs()
                || (self.step2.check_decay_threshold(&self.nuclei, rxn.excitation, decay1.excitation)
                    && (!decay2.occurs() || self.step3.check_decay_threshold(&self.nuclei, decay1.excitation, decay2.excitation)));
            if !decays_allowed {
                rejected += 1;
                last_error = Some(KinematicsError::q_value(&self.equation));
                continue;
            }

            match self.calculate(&target, rxn, decay1, decay2, depth) {
                Err(e) if e.is_rejection() => {
                    rejected += 1;
                    last_error = Some(e);
                },
                result => {
                    if rejected > 0 {
                        log::debug!("{}: {} draws rejected before an allowed sample.", self.equation, rejected);
                    }
                    return result;
                }
            }
        }

        log::warn!("{}: no allowed sample after {} draws.", self.equation, MAX_RESAMPLES);
        Err(last_error.unwrap_or_else(|| KinematicsError::energy_threshold(&self.equation)))
    }

    fn nuclei(&self) -> &[Nucleus] {
        &self.nuclei
    }

    fn system_equation(&self) -> &str {
        &self.equation
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;
    use super::*;
    use crate::angular::AngularDistribution;
    use crate::error::KinematicsErrorKind;
    use crate::target::TargetLayer;

    fn boron_chain(he4_ex: f64) -> ChainParameters {
        ChainParameters::new(vec![
            StepParameters::reaction(&[5, 2, 2], &[10, 3, 4])
                .with_beam_energy(24.0, 0.0)
                .with_excitation(2.36, 0.0),
            StepParameters::decay(&[5, 1], &[9, 1]),
            StepParameters::decay(&[4, 2], &[8, 4]).with_excitation(he4_ex, 0.0),
        ]).coupled(true)
    }

    #[test]
    fn relative_angle_is_preserved() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        for _i in 0..1000 {
            let axis = ThreeVector::from_spherical(
                1.0 + rng.gen::<f64>(),
                consts::PI * rng.gen::<f64>(),
                2.0 * consts::PI * rng.gen::<f64>()
            );
            let rel_theta = consts::PI * rng.gen::<f64>();
            let rel_phi = 2.0 * consts::PI * rng.gen::<f64>();

            let (theta, phi) = coupled_direction(axis, rel_theta, rel_phi);
            let dir = ThreeVector::from_spherical(1.0, theta, phi);
            let angle = (dir * axis.normalize()).max(-1.0).min(1.0).acos();
            assert!((angle - rel_theta).abs() < 1.0e-6, "expected {}, got {}", rel_theta, angle);
        }
    }

    #[test]
    fn along_the_axis() {
        let (theta, phi) = coupled_direction(ThreeVector::new(0.0, 0.0, 2.0), 0.4, 1.3);
        assert!((theta - 0.4).abs() < 1.0e-12);
        assert!((phi - 1.3).abs() < 1.0e-12);

        let axis = ThreeVector::from_spherical(1.0, 0.8, 2.5);
        let (theta, phi) = coupled_direction(axis, 0.0, 0.0);
        assert!((theta - 0.8).abs() < 1.0e-9);
        assert!((phi - 2.5).abs() < 1.0e-9);
    }

    #[test]
    fn third_step_follows_second() {
        let masses = MassTable::bundled().unwrap();
        let mut target = LayeredTarget::new();
        target.add_layer(TargetLayer::new(&[5], &[10], &[1], 0.0, &masses).unwrap());

        let chain = boron_chain(0.0);
        let mut system = CoupledThreeStepSystem::new(&chain, &masses, Xoshiro256StarStar::seed_from_u64(2)).unwrap();
        assert_eq!(system.system_equation(), "10B(3He, 4He)9B->1H+8Be->4He+4He");

        // W(x) = 0.25 + 0.75 x^2 about the proton direction, so <x^2> = 7/15
        system.step3_sampler = DecaySampler::from_distribution(
            AngularDistribution::from_coefficients(1, &[0.5, 0.5]).unwrap(), &chain.steps[2]
        );
        system.bind_target(Arc::new(target)).unwrap();

        let n_samples = 4000;
        let mut sum = 0.0;
        for _i in 0..n_samples {
            system.run_system().unwrap();
            let n = system.nuclei();
            let boost = n[5].p4.rest_frame_boost();
            let proton = n[4].p4.boost(boost).momentum();
            let alpha = n[6].p4.boost(boost).momentum();
            assert!((alpha.theta() - n[6].theta_cm).abs() < 1.0e-6);
            let cos = proton.normalize() * alpha.normalize();
            sum += cos * cos;
        }

        let mean = sum / (n_samples as f64);
        println!("<cos^2> relative to the proton = {}", mean);
        assert!((mean - 7.0 / 15.0).abs() < 0.03);
    }

    #[test]
    fn gives_up_on_forbidden_decay() {
        let masses = MassTable::bundled().unwrap();
        let mut target = LayeredTarget::new();
        target.add_layer(TargetLayer::new(&[5], &[10], &[1], 0.0, &masses).unwrap());

        // 8Be in its ground state cannot emit an alpha excited by 5 MeV
        let mut system = CoupledThreeStepSystem::new(&boron_chain(5.0), &masses, Xoshiro256StarStar::seed_from_u64(0)).unwrap();
        system.bind_target(Arc::new(target)).unwrap();
        let err = system.run_system().unwrap_err();
        println!("{}", err);
        assert_eq!(err.kind(), KinematicsErrorKind::QValue);
    }
}
