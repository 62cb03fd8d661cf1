//! Monte Carlo simulation of nuclear reaction and decay chains in
//! layered targets.
//!
//! A chain of up to three steps (a two-body reaction followed by up to
//! two sequential binary decays, or a single decay) is sampled many
//! times. Each sample draws the beam energy, interaction depth,
//! emission angles and excitation energies, solves the relativistic
//! kinematics of every step and corrects the products for the energy
//! they lose in the target.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod special_functions;
pub mod nucleus;
pub mod target;
pub mod angular;
pub mod reaction;
pub mod system;
pub mod pipeline;
pub mod output;
pub mod input;
