//! A single decay: parent -> light + heavy

use std::sync::Arc;

use rand::prelude::*;
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::KinematicsError;
use crate::nucleus::{MassTable, Nucleus};
use crate::reaction::Reaction;
use crate::target::LayeredTarget;
use super::*;

/// Nuclei: [parent, light, heavy]. The parent decays at rest from its
/// ground state.
pub struct DecaySystem {
    nuclei: Vec<Nucleus>,
    step1: Reaction,
    sampler: DecaySampler,
    target: Option<Arc<LayeredTarget>>,
    rng: Xoshiro256StarStar,
    equation: String,
}

impl DecaySystem {
    pub fn new(params: &ChainParameters, masses: &MassTable, rng: Xoshiro256StarStar) -> Result<Self, KinematicsError> {
        validate_chain(params, &[StepKind::Decay])?;
        let step = &params.steps[0];
        let (zh, ah) = step.product()?;

        let nuclei = create_nuclei(&[
            (step.z[0], step.a[0]),
            (step.z[1], step.a[1]),
            (zh, ah),
        ], masses)?;

        let mut step1 = Reaction::decay(0, 1, 2);
        step1.set_residual_eloss(params.residual_eloss);

        let equation = step1.equation(&nuclei);

        Ok(DecaySystem {
            nuclei,
            step1,
            sampler: DecaySampler::new(step),
            target: None,
            rng,
            equation,
        })
    }
}

impl ReactionSystem for DecaySystem {
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

        reset_all(&mut self.nuclei);
        let depth = self.rng.gen::<f64>();
        let draw = self.sampler.sample(&mut self.rng);
        if !draw.occurs() {
            return Ok(());
        }

        draw.apply(&mut self.step1, depth);
        self.step1.calculate(&mut self.nuclei, target)
    }

    fn nuclei(&self) -> &[Nucleus] {
        &self.nuclei
    }

    fn system_equation(&self) -> &str {
        &self.equation
    }
}
