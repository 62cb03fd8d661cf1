//! A reaction followed by the decay of its residual

use std::sync::Arc;

use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::KinematicsError;
use crate::nucleus::{MassTable, Nucleus};
use crate::reaction::Reaction;
use crate::target::LayeredTarget;
use super::*;

/// Nuclei: [target, projectile, ejectile, residual, breakup1, breakup2].
///
/// Parameters are redrawn until the reaction is above threshold and the
/// residual is able to decay.
pub struct TwoStepSystem {
    nuclei: Vec<Nucleus>,
    step1: Reaction,
    step2: Reaction,
    step1_sampler: ReactionSampler,
    step2_sampler: DecaySampler,
    target: Option<Arc<LayeredTarget>>,
    rng: Xoshiro256StarStar,
    equation: String,
}

impl TwoStepSystem {
    pub fn new(params: &ChainParameters, masses: &MassTable, rng: Xoshiro256StarStar) -> Result<Self, KinematicsError> {
        validate_chain(params, &[StepKind::Reaction, StepKind::Decay])?;
        let (rxn, decay) = (&params.steps[0], &params.steps[1]);
        let (zr, ar) = rxn.product()?;
        let (zb2, ab2) = decay.product()?;

        let nuclei = create_nuclei(&[
            (rxn.z[0], rxn.a[0]),
            (rxn.z[1], rxn.a[1]),
            (rxn.z[2], rxn.a[2]),
            (zr, ar),
            (decay.z[1], decay.a[1]),
            (zb2, ab2),
        ], masses)?;

        let mut step1 = Reaction::scattering(0, 1, 2, 3);
        step1.set_theta_type(rxn.theta_type);
        let mut step2 = Reaction::decay(3, 4, 5);
        step2.set_residual_eloss(params.residual_eloss);

        let equation = format!("{}->{}+{}", step1.equation(&nuclei), nuclei[4].symbol, nuclei[5].symbol);

        Ok(TwoStepSystem {
            nuclei,
            step1,
            step2,
            step1_sampler: ReactionSampler::new(rxn),
            step2_sampler: DecaySampler::new(decay),
            target: None,
            rng,
            equation,
        })
    }
}

impl ReactionSystem for TwoStepSystem {
    fn bind_target(&mut self, target: Arc<LayeredTarget>) -> Result<(), KinematicsError> {
        let layer = reaction_layer(&target, &self.nuclei[0])?;
        self.step1.set_rxn_layer(layer);
        self.step2.set_rxn_layer(layer);
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
            let decay = self.step2_sampler.sample(&mut self.rng);

            if !self.step1.check_reaction_threshold(&self.nuclei, rxn.beam_ke, rxn.excitation) {
                rejected += 1;
                last_error = Some(KinematicsError::energy_threshold(&self.equation));
                continue;
            }
            if decay.occurs() && !self.step2.check_decay_threshold(&self.nuclei, rxn.excitation, decay.excitation) {
                rejected += 1;
                last_error = Some(KinematicsError::q_value(&self.equation));
                continue;
            }

            rxn.apply(&mut self.step1, depth);
            decay.apply(&mut self.step2, depth);

            let result = self.step1.calculate(&mut self.nuclei, &target).and_then(|_| {
                // otherwise the breakup slots stay at rest
                if decay.occurs() {
                    self.step2.calculate(&mut self.nuclei, &target)
                } else {
                    Ok(())
                }
            });

            match result {
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
    use super::*;
    use crate::error::KinematicsErrorKind;
    use crate::target::TargetLayer;

    fn lithium_target(masses: &MassTable) -> Arc<LayeredTarget> {
        let mut target = LayeredTarget::new();
        target.add_layer(TargetLayer::new(&[3], &[7], &[1], 20.0, masses).unwrap());
        Arc::new(target)
    }

    #[test]
    fn rejects_forbidden_draws() {
        let masses = MassTable::bundled().unwrap();
        // 7Li(p, d)6Li, 6Li* -> 4He + 2H is open above 1.47 MeV
        let chain = ChainParameters::new(vec![
            StepParameters::reaction(&[3, 1, 1], &[7, 1, 2])
                .with_beam_energy(12.0, 0.0)
                .with_excitation(2.0, 1.5),
            StepParameters::decay(&[3, 2], &[6, 4]),
        ]);
        let mut system = TwoStepSystem::new(&chain, &masses, Xoshiro256StarStar::seed_from_u64(0)).unwrap();
        assert_eq!(system.system_equation(), "7Li(1H, 2H)6Li->4He+2H");
        system.bind_target(lithium_target(&masses)).unwrap();

        for _i in 0..500 {
            system.run_system().unwrap();
            let n = system.nuclei();
            let ex = n[3].excitation_energy();
            assert!(n[3].p4.invariant_mass() >= n[4].ground_state_mass + n[5].ground_state_mass, "Ex = {}", ex);
        }
    }

    #[test]
    fn gives_up_on_impossible_chain() {
        let masses = MassTable::bundled().unwrap();
        // 6Li in its ground state cannot break up
        let chain = ChainParameters::new(vec![
            StepParameters::reaction(&[3, 1, 1], &[7, 1, 2]).with_beam_energy(12.0, 0.0),
            StepParameters::decay(&[3, 2], &[6, 4]),
        ]);
        let mut system = TwoStepSystem::new(&chain, &masses, Xoshiro256StarStar::seed_from_u64(0)).unwrap();
        system.bind_target(lithium_target(&masses)).unwrap();
        let err = system.run_system().unwrap_err();
        println!("{}", err);
        assert_eq!(err.kind(), KinematicsErrorKind::QValue);
    }

    #[test]
    fn gives_up_below_threshold() {
        let masses = MassTable::bundled().unwrap();
        // 7Li(p, d)6Li has Q = -5.0 MeV
        let chain = ChainParameters::new(vec![
            StepParameters::reaction(&[3, 1, 1], &[7, 1, 2]).with_beam_energy(1.0, 0.0),
            StepParameters::decay(&[3, 2], &[6, 4]),
        ]);
        let mut system = TwoStepSystem::new(&chain, &masses, Xoshiro256StarStar::seed_from_u64(0)).unwrap();
        system.bind_target(lithium_target(&masses)).unwrap();
        let err = system.run_system().unwrap_err();
        assert_eq!(err.kind(), KinematicsErrorKind::EnergyThreshold);
    }
}
