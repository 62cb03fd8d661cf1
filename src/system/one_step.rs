//! A single reaction: target + projectile -> ejectile + residual

use std::sync::Arc;

use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::{KinematicsError, KinematicsErrorKind};
use crate::nucleus::{MassTable, Nucleus};
use crate::reaction::Reaction;
use crate::target::LayeredTarget;
use super::*;

/// Nuclei: [target, projectile, ejectile, residual]
///
/// Lab angles the ejectile cannot reach are redrawn.
pub struct OneStepSystem {
    nuclei: Vec<Nucleus>,
    step1: Reaction,
    sampler: ReactionSampler,
    target: Option<Arc<LayeredTarget>>,
    rng: Xoshiro256StarStar,
    equation: String,
}

impl OneStepSystem {
    pub fn new(params: &ChainParameters, masses: &MassTable, rng: Xoshiro256StarStar) -> Result<Self, KinematicsError> {
        validate_chain(params, &[StepKind::Reaction])?;
        let step = &params.steps[0];
        let (zr, ar) = step.product()?;

        let nuclei = create_nuclei(&[
            (step.z[0], step.a[0]),
            (step.z[1], step.a[1]),
            (step.z[2], step.a[2]),
            (zr, ar),
        ], masses)?;

        let mut step1 = Reaction::scattering(0, 1, 2, 3);
        step1.set_theta_type(step.theta_type);
        step1.set_residual_eloss(params.residual_eloss);

        let equation = step1.equation(&nuclei);

        Ok(OneStepSystem {
            nuclei,
            step1,
            sampler: ReactionSampler::new(step),
            target: None,
            rng,
            equation,
        })
    }
}

impl ReactionSystem for OneStepSystem {
    fn bind_target(&mut self, target: Arc<LayeredTarget>) -> Result<(), KinematicsError> {
        let layer = reaction_layer(&target, &self.nuclei[0])?;
        self.step1.set_rxn_layer(layer);
        self.target = Some(target);
        Ok(())
    }

    fn run_system(&mut self) -> Result<(), KinematicsError> {
        let target = match self.target.as_deref() {
            Some(t) => t,
            None => return Err(KinematicsError::unbound_target(&self.equation)),
        };

        let mut redrawn = 0;
        loop {
            reset_all(&mut self.nuclei);
            let depth = self.rng.gen::<f64>();
            self.sampler.sample(&mut self.rng).apply(&mut self.step1, depth);
            match self.step1.calculate(&mut self.nuclei, target) {
                Err(e) if e.kind() == KinematicsErrorKind::LabAngle && redrawn < MAX_RESAMPLES => redrawn += 1,
                result => return result,
            }
        }
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
    use super::*;
    use crate::constants::*;
    use crate::reaction::ThetaType;
    use crate::target::TargetLayer;

    #[test]
    fn zero_degrees_on_carbon() {
        let masses = MassTable::bundled().unwrap();
        let mut target = LayeredTarget::new();
        target.add_layer(TargetLayer::new(&[6], &[12], &[1], 30.0, &masses).unwrap());

        let chain = ChainParameters::new(vec![
            StepParameters::reaction(&[6, 1, 1], &[12, 2, 1])
                .with_beam_energy(16.0, 0.0)
                .with_theta(0.0, 0.0)
        ]);
        let mut system = OneStepSystem::new(&chain, &masses, Xoshiro256StarStar::seed_from_u64(0)).unwrap();
        assert_eq!(system.system_equation(), "12C(2H, 1H)13C");
        system.bind_target(Arc::new(target)).unwrap();

        // conservation holds before the products are slowed down
        let target = system.target.clone().unwrap();
        let depth = system.rng.gen::<f64>();
        system.sampler.sample(&mut system.rng).apply(&mut system.step1, depth);
        system.step1.calculate_kinematics(&mut system.nuclei, &target).unwrap();

        let n = system.nuclei();
        let before = n[0].p4 + n[1].p4;
        let after = n[2].p4 + n[3].p4;
        let err = (0..4).map(|i| (before[i] - after[i]).abs()).fold(0.0, f64::max) / before[0];
        println!("before = [{}], after = [{}], err = {:e}", before, after, err);
        assert!(err < 1.0e-9);
        assert!(n[2].theta() < 1.0e-6);

        system.run_system().unwrap();
        let n = system.nuclei();
        assert!(n[2].kinetic_energy() > 0.0);
        assert!(n[2].theta() < 1.0e-6);
        assert!(n[1].kinetic_energy() < 16.0 && n[1].kinetic_energy() > 15.0);
    }

    #[test]
    fn angles_within_range() {
        let masses = MassTable::bundled().unwrap();
        let mut target = LayeredTarget::new();
        target.add_layer(TargetLayer::new(&[6], &[12], &[1], 30.0, &masses).unwrap());

        let chain = ChainParameters::new(vec![
            StepParameters::reaction(&[6, 2, 2], &[12, 3, 4])
                .with_beam_energy(20.0, 0.1)
                .with_theta(30.0, 50.0)
                .with_phi(90.0, 180.0)
                .with_excitation(2.0, 0.0)
        ]);
        let mut system = OneStepSystem::new(&chain, &masses, Xoshiro256StarStar::seed_from_u64(5)).unwrap();
        system.bind_target(Arc::new(target)).unwrap();

        for _i in 0..200 {
            system.run_system().unwrap();
            let n = system.nuclei();
            let theta_cm = n[2].theta_cm / DEG_TO_RAD;
            let phi = n[2].phi() / DEG_TO_RAD;
            assert!(theta_cm >= 30.0 - 1.0e-9 && theta_cm <= 50.0 + 1.0e-9);
            assert!(phi >= 90.0 - 1.0e-6 && phi <= 180.0 + 1.0e-6);
            assert!((n[3].p4.invariant_mass() - n[3].ground_state_mass - 2.0).abs() < 1.0e-6);
        }
    }

    #[test]
    fn inverse_kinematics_redraws_lab_angle() {
        let masses = MassTable::bundled().unwrap();
        let mut target = LayeredTarget::new();
        target.add_layer(TargetLayer::new(&[1], &[2], &[1], 10.0, &masses).unwrap());
        let target = Arc::new(target);

        // 12C cannot scatter from 2H beyond 9.6 degrees
        let step = StepParameters::reaction(&[1, 6, 6], &[2, 12, 12])
            .with_beam_energy(60.0, 0.0)
            .with_theta_type(ThetaType::Lab);

        let chain = ChainParameters::new(vec![step.clone().with_theta(0.0, 30.0)]);
        let mut system = OneStepSystem::new(&chain, &masses, Xoshiro256StarStar::seed_from_u64(0)).unwrap();
        system.bind_target(Arc::clone(&target)).unwrap();
        for _i in 0..200 {
            system.run_system().unwrap();
            let theta = system.nuclei()[2].theta() / DEG_TO_RAD;
            assert!(theta < 9.6, "theta = {}", theta);
        }

        let chain = ChainParameters::new(vec![step.with_theta(20.0, 30.0)]);
        let mut system = OneStepSystem::new(&chain, &masses, Xoshiro256StarStar::seed_from_u64(0)).unwrap();
        system.bind_target(target).unwrap();
        let err = system.run_system().unwrap_err();
        assert_eq!(err.kind(), KinematicsErrorKind::LabAngle);
    }
}
