//! A reaction followed by two sequential decays

use std::sync::Arc;

use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::{KinematicsError, KinematicsErrorKind};
use crate::nucleus::{MassTable, Nucleus};
use crate::reaction::Reaction;
use crate::target::LayeredTarget;
use super::*;

/// Nuclei: [target, projectile, ejectile, residual,
/// breakup1, breakup2, breakup3, breakup4].
///
/// The residual decays to breakup1 + breakup2, and breakup2 decays to
/// breakup3 + breakup4. Each decay is sampled independently. Lab
/// angles the ejectile cannot reach are redrawn.
pub struct ThreeStepSystem {
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

/// Nuclei and steps common to both kinds of three-step chain
pub(super) struct ThreeStepChain {
    pub nuclei: Vec<Nucleus>,
    pub steps: [Reaction; 3],
    pub equation: String,
}

impl ThreeStepChain {
    pub fn new(params: &ChainParameters, masses: &MassTable) -> Result<Self, KinematicsError> {
        validate_chain(params, &[StepKind::Reaction, StepKind::Decay, StepKind::Decay])?;
        let (rxn, decay1, decay2) = (&params.steps[0], &params.steps[1], &params.steps[2]);
        let (zr, ar) = rxn.product()?;
        let (zb2, ab2) = decay1.product()?;
        let (zb4, ab4) = decay2.product()?;

        let nuclei = create_nuclei(&[
            (rxn.z[0], rxn.a[0]),
            (rxn.z[1], rxn.a[1]),
            (rxn.z[2], rxn.a[2]),
            (zr, ar),
            (decay1.z[1], decay1.a[1]),
            (zb2, ab2),
            (decay2.z[1], decay2.a[1]),
            (zb4, ab4),
        ], masses)?;

        let mut step1 = Reaction::scattering(0, 1, 2, 3);
        step1.set_theta_type(rxn.theta_type);
        let step2 = Reaction::decay(3, 4, 5);
        let mut step3 = Reaction::decay(5, 6, 7);
        step3.set_residual_eloss(params.residual_eloss);

        let equation = format!("{}->{}+{}->{}+{}",
            step1.equation(&nuclei),
            nuclei[4].symbol, nuclei[5].symbol,
            nuclei[6].symbol, nuclei[7].symbol);

        Ok(ThreeStepChain {
            nuclei,
            steps: [step1, step2, step3],
            equation,
        })
    }
}

impl ThreeStepSystem {
    pub fn new(params: &ChainParameters, masses: &MassTable, rng: Xoshiro256StarStar) -> Result<Self, KinematicsError> {
        let ThreeStepChain {nuclei, steps: [step1, step2, step3], equation} = ThreeStepChain::new(params, masses)?;

        Ok(ThreeStepSystem {
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
}

impl ThreeStepSystem {
    /// Draws and computes one sample
    fn calculate(&mut self, target: &LayeredTarget) -> Result<(), KinematicsError> {
        reset_all(&mut self.nuclei);
        let depth = self.rng.gen::<f64>();
        let rxn = self.step1_sampler.sample(&mut self.rng);
        let decay1 = self.step2_sampler.sample(&mut self.rng);
        let decay2 = self.step3_sampler.sample(&mut self.rng);

        rxn.apply(&mut self.step1, depth);
        decay1.apply(&mut self.step2, depth);
        decay2.apply(&mut self.step3, depth);

        self.step1.calculate(&mut self.nuclei, target)?;

        // Branches that do not occur leave their products at rest
        if !decay1.occurs() {
            return Ok(());
        }
        self.step2.calculate(&mut self.nuclei, target)?;

        if !decay2.occurs() {
            return Ok(());
        }
        self.step3.calculate(&mut self.nuclei, target)
    }
}

impl ReactionSystem for ThreeStepSystem {
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

        let mut redrawn = 0;
        loop {
            match self.calculate(&target) {
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
