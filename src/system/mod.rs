//! Reaction chains: fixed sequences of reactions and decays sharing
//! an arena of nuclei

use std::sync::Arc;

use enum_dispatch::enum_dispatch;
use rand_xoshiro::Xoshiro256StarStar;

use crate::error::KinematicsError;
use crate::nucleus::{MassTable, Nucleus};
use crate::target::LayeredTarget;

mod params;
mod sampling;
mod one_step;
mod decay;
mod two_step;
mod three_step;
mod coupled;

pub use params::*;
pub use sampling::*;
pub use one_step::OneStepSystem;
pub use decay::DecaySystem;
pub use two_step::TwoStepSystem;
pub use three_step::ThreeStepSystem;
pub use coupled::CoupledThreeStepSystem;

/// Number of times the parameters of a single sample are redrawn
/// before giving up, in chains that reject energetically forbidden
/// draws, and in any chain whose sampled lab angle is out of reach.
pub const MAX_RESAMPLES: usize = 10_000;

/// Common interface of all chain topologies
#[enum_dispatch]
pub trait ReactionSystem {
    /// Binds the target in which the chain takes place. The reaction
    /// occurs in the first layer that contains the initial target
    /// isotope.
    fn bind_target(&mut self, target: Arc<LayeredTarget>) -> Result<(), KinematicsError>;

    /// Draws a new set of parameters and computes the kinematics of
    /// every nucleus in the chain.
    fn run_system(&mut self) -> Result<(), KinematicsError>;

    /// The nuclei of the chain, as left by the last call to `run_system`
    fn nuclei(&self) -> &[Nucleus];

    fn system_equation(&self) -> &str;
}

#[enum_dispatch(ReactionSystem)]
pub enum System {
    OneStep(OneStepSystem),
    Decay(DecaySystem),
    TwoStep(TwoStepSystem),
    ThreeStep(ThreeStepSystem),
    CoupledThreeStep(CoupledThreeStepSystem),
}

/// Creates the system matching the shape of the chain: one reaction,
/// one decay, a reaction followed by one decay, or a reaction followed
/// by two decays (coupled or not).
pub fn create_system(params: &ChainParameters, masses: &MassTable, rng: Xoshiro256StarStar) -> Result<System, KinematicsError> {
    let first = params.steps.first()
        .ok_or_else(|| KinematicsError::invalid_chain("no steps specified"))?;

    let system: System = match (params.steps.len(), first.kind) {
        (1, StepKind::Reaction) => OneStepSystem::new(params, masses, rng)?.into(),
        (1, StepKind::Decay) => DecaySystem::new(params, masses, rng)?.into(),
        (2, _) => TwoStepSystem::new(params, masses, rng)?.into(),
        (3, _) if params.coupled => CoupledThreeStepSystem::new(params, masses, rng)?.into(),
        (3, _) => ThreeStepSystem::new(params, masses, rng)?.into(),
        (n, _) => {
            return Err(KinematicsError::invalid_chain(&format!("chains of {} steps are not supported", n)));
        }
    };

    Ok(system)
}

/// Returns `n` generators seeded from `seed`, each `jump`ed past the
/// one before so that their streams do not overlap.
pub fn rng_streams(seed: u64, n: usize) -> Vec<Xoshiro256StarStar> {
    use rand::SeedableRng;
    let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
    let mut streams = Vec::with_capacity(n);
    for _i in 0..n {
        streams.push(rng.clone());
        rng.jump();
    }
    streams
}

/// Checks that the chain has the expected sequence of step kinds, that
/// each step lists the right number of nuclei, and that each step starts
/// from the heavy product of the one before.
fn validate_chain(params: &ChainParameters, kinds: &[StepKind]) -> Result<(), KinematicsError> {
    if params.steps.len() != kinds.len() {
        return Err(KinematicsError::invalid_chain(
            &format!("expected {} steps, found {}", kinds.len(), params.steps.len())
        ));
    }

    for (i, (step, kind)) in params.steps.iter().zip(kinds.iter()).enumerate() {
        step.validate(i, *kind)?;
        step.product()?;
    }

    params.check_sequential()
}

fn create_nuclei(za: &[(u32, u32)], masses: &MassTable) -> Result<Vec<Nucleus>, KinematicsError> {
    za.iter()
        .map(|&(z, a)| Nucleus::new(z, a, masses))
        .collect()
}

/// Index of the layer in which the chain starts
fn reaction_layer(target: &LayeredTarget, nucleus: &Nucleus) -> Result<usize, KinematicsError> {
    target.find_layer_containing(nucleus.z, nucleus.a)
        .ok_or_else(|| KinematicsError::reaction_layer(&nucleus.symbol))
}

fn reset_all(nuclei: &mut [Nucleus]) {
    for n in nuclei.iter_mut() {
        n.reset();
    }
}
