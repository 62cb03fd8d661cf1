//! Two-body reactions and decays
//!
//! A `Reaction` does not own any nuclei. It refers to slots in an
//! array of nuclei owned by a reaction system, and to the layered
//! target in which it takes place.

use std::fmt;

use crate::error::KinematicsError;
use crate::geometry::*;
use crate::nucleus::Nucleus;
use crate::target::{LayeredTarget, Projectile};

/// The frame in which the ejectile's polar angle is specified
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ThetaType {
    CenterOfMass,
    Lab,
}

impl fmt::Display for ThetaType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThetaType::CenterOfMass => write!(f, "CM"),
            ThetaType::Lab => write!(f, "lab"),
        }
    }
}

/// A single step of a reaction chain: either
/// target + projectile -> ejectile + residual, or
/// target -> ejectile (light) + residual (heavy).
#[derive(Clone, Debug)]
pub struct Reaction {
    target: usize,
    projectile: Option<usize>,
    ejectile: usize,
    residual: usize,
    theta_type: ThetaType,
    rxn_layer: usize,
    residual_eloss: bool,

    beam_ke: f64,
    theta: f64,
    phi: f64,
    excitation: f64,
    depth: f64,
}

impl Reaction {
    fn new(target: usize, projectile: Option<usize>, ejectile: usize, residual: usize) -> Self {
        Reaction {
            target,
            projectile,
            ejectile,
            residual,
            theta_type: ThetaType::CenterOfMass,
            rxn_layer: 0,
            residual_eloss: false,
            beam_ke: 0.0,
            theta: 0.0,
            phi: 0.0,
            excitation: 0.0,
            depth: 0.5,
        }
    }

    /// A scattering reaction between the nuclei in the given slots
    pub fn scattering(target: usize, projectile: usize, ejectile: usize, residual: usize) -> Self {
        Self::new(target, Some(projectile), ejectile, residual)
    }

    /// The decay of the nucleus in slot `parent`
    pub fn decay(parent: usize, light: usize, heavy: usize) -> Self {
        Self::new(parent, None, light, heavy)
    }

    pub fn is_decay(&self) -> bool {
        self.projectile.is_none()
    }

    pub fn target_slot(&self) -> usize {
        self.target
    }

    pub fn ejectile_slot(&self) -> usize {
        self.ejectile
    }

    pub fn residual_slot(&self) -> usize {
        self.residual
    }

    pub fn rxn_layer(&self) -> usize {
        self.rxn_layer
    }

    pub fn set_rxn_layer(&mut self, layer: usize) {
        self.rxn_layer = layer;
    }

    pub fn set_residual_eloss(&mut self, on: bool) {
        self.residual_eloss = on;
    }

    /// Has no effect on a decay.
    pub fn set_theta_type(&mut self, theta_type: ThetaType) {
        if !self.is_decay() {
            self.theta_type = theta_type;
        }
    }

    /// Beam kinetic energy on entering the target, MeV
    pub fn set_beam_ke(&mut self, ke: f64) {
        self.beam_ke = ke;
    }

    /// Polar angle of the ejectile, in the frame given by the theta type
    pub fn set_polar_angle(&mut self, theta: f64) {
        self.theta = theta;
    }

    pub fn set_azimuthal_angle(&mut self, phi: f64) {
        self.phi = phi;
    }

    /// Excitation energy of the residual, MeV
    pub fn set_excitation(&mut self, ex: f64) {
        self.excitation = ex;
    }

    /// Fraction of the reaction layer crossed by the beam before the reaction
    pub fn set_depth(&mut self, depth: f64) {
        self.depth = depth;
    }

    /// The reaction in standard notation, e.g. "12C(3He, 4He)11C" or "8Be->4He+4He"
    pub fn equation(&self, nuclei: &[Nucleus]) -> String {
        match self.projectile {
            Some(p) => format!("{}({}, {}){}",
                nuclei[self.target].symbol, nuclei[p].symbol,
                nuclei[self.ejectile].symbol, nuclei[self.residual].symbol),
            None => format!("{}->{}+{}",
                nuclei[self.target].symbol, nuclei[self.ejectile].symbol, nuclei[self.residual].symbol),
        }
    }

    /// Can a beam of kinetic energy `beam_ke` produce the residual
    /// with excitation `residual_ex`? Always true for a decay.
    pub fn check_reaction_threshold(&self, nuclei: &[Nucleus], beam_ke: f64, residual_ex: f64) -> bool {
        match self.projectile {
            Some(p) => {
                let mt = nuclei[self.target].ground_state_mass;
                let mp = nuclei[p].ground_state_mass;
                let m_final = nuclei[self.ejectile].ground_state_mass + nuclei[self.residual].ground_state_mass + residual_ex;
                (mt + mp).powi(2) + 2.0 * mt * beam_ke >= m_final.powi(2)
            },
            None => true,
        }
    }

    /// Can the parent, with excitation `parent_ex`, decay to the heavy
    /// fragment with excitation `heavy_ex`? Always true for a scattering
    /// reaction.
    pub fn check_decay_threshold(&self, nuclei: &[Nucleus], parent_ex: f64, heavy_ex: f64) -> bool {
        if self.is_decay() {
            let q = nuclei[self.target].ground_state_mass + parent_ex
                - nuclei[self.ejectile].ground_state_mass
                - nuclei[self.residual].ground_state_mass - heavy_ex;
            q >= 0.0
        } else {
            true
        }
    }

    /// Computes the kinematics and then the energy lost by the products
    /// leaving the target.
    pub fn calculate(&self, nuclei: &mut [Nucleus], target: &LayeredTarget) -> Result<(), KinematicsError> {
        self.calculate_kinematics(nuclei, target)?;
        self.apply_energy_loss(nuclei, target);
        Ok(())
    }

    /// Computes the four-momenta of the products, without energy loss
    /// on exit. For scattering, the beam's energy loss up to the reaction
    /// point is applied first.
    pub fn calculate_kinematics(&self, nuclei: &mut [Nucleus], target: &LayeredTarget) -> Result<(), KinematicsError> {
        match (self.projectile, self.theta_type) {
            (None, _) => self.calculate_decay(nuclei),
            (Some(p), ThetaType::CenterOfMass) => {
                self.prepare_reactants(p, nuclei, target)?;
                self.calculate_reaction_cm(p, nuclei)
            },
            (Some(p), ThetaType::Lab) => {
                self.prepare_reactants(p, nuclei, target)?;
                self.calculate_reaction_lab(p, nuclei)
            },
        }
    }

    /// Sets the target at rest and the projectile moving along +z, with
    /// its energy at the reaction point.
    fn prepare_reactants(&self, p: usize, nuclei: &mut [Nucleus], target: &LayeredTarget) -> Result<(), KinematicsError> {
        let mp = nuclei[p].ground_state_mass;
        let proj = Projectile::with_mass_mev(nuclei[p].z, mp);
        let bke = self.beam_ke - target.projectile_energy_loss(&proj, self.beam_ke, 0.0, self.rxn_layer, self.depth);

        if !(bke > 0.0) || !self.check_reaction_threshold(nuclei, bke, self.excitation) {
            return Err(KinematicsError::energy_threshold(&self.equation(nuclei)));
        }

        let mt = nuclei[self.target].ground_state_mass;
        nuclei[self.target].p4 = FourVector::at_rest(mt);
        nuclei[p].p4 = FourVector::new(bke + mp, 0.0, 0.0, (bke * (bke + 2.0 * mp)).sqrt());
        Ok(())
    }

    /// Sets the residual to what remains of `compound` once the ejectile
    /// has been emitted.
    fn set_residual(&self, compound: &Nucleus, nuclei: &mut [Nucleus]) -> Result<(), KinematicsError> {
        let remainder = compound.checked_sub(&nuclei[self.ejectile])
            .filter(|n| n.z == nuclei[self.residual].z && n.a == nuclei[self.residual].a)
            .ok_or_else(|| KinematicsError::invalid_chain(
                &format!("{} does not conserve charge and nucleon number", self.equation(nuclei))
            ))?;
        nuclei[self.residual].p4 = remainder.p4;
        Ok(())
    }

    fn calculate_reaction_cm(&self, p: usize, nuclei: &mut [Nucleus]) -> Result<(), KinematicsError> {
        let compound = &nuclei[self.target] + &nuclei[p];
        let parent = compound.p4;
        let m = parent.invariant_mass();
        let me = nuclei[self.ejectile].ground_state_mass;
        let mr = nuclei[self.residual].ground_state_mass + self.excitation;

        let e_cm = (me * me - mr * mr + m * m) / (2.0 * m);
        let p_cm = (e_cm * e_cm - me * me).max(0.0).sqrt();

        let ejectile = FourVector::from_spherical(self.theta, self.phi, p_cm, e_cm)
            .boost(parent.boost_vector());

        nuclei[self.ejectile].p4 = ejectile;
        nuclei[self.ejectile].theta_cm = self.theta;
        self.set_residual(&compound, nuclei)
    }

    // Iliadis, Nuclear Physics of Stars, Appendix C
    fn calculate_reaction_lab(&self, p: usize, nuclei: &mut [Nucleus]) -> Result<(), KinematicsError> {
        let mt = nuclei[self.target].ground_state_mass;
        let mp = nuclei[p].ground_state_mass;
        let me = nuclei[self.ejectile].ground_state_mass;
        let mr = nuclei[self.residual].ground_state_mass;
        let bke = nuclei[p].kinetic_energy();

        let q = mt + mp - (me + mr + self.excitation);
        let term1 = (mp * me * bke).sqrt() / (me + mr) * self.theta.cos();
        let term2 = (bke * (mr - mp) + mr * q) / (mr + me);
        let discriminant = term1 * term1 + term2;
        if discriminant < 0.0 {
            return Err(KinematicsError::lab_angle(&self.equation(nuclei)));
        }

        let pos_root = term1 + discriminant.sqrt();
        let neg_root = term1 - discriminant.sqrt();
        let ejectile_ke = if pos_root > 0.0 {pos_root * pos_root} else {neg_root * neg_root};

        let p_e = (ejectile_ke * (ejectile_ke + 2.0 * me)).sqrt();
        let compound = &nuclei[self.target] + &nuclei[p];
        let ejectile = FourVector::from_spherical(self.theta, self.phi, p_e, ejectile_ke + me);

        nuclei[self.ejectile].p4 = ejectile;
        nuclei[self.ejectile].theta_cm = ejectile.boost(compound.p4.rest_frame_boost()).theta();
        self.set_residual(&compound, nuclei)
    }

    fn calculate_decay(&self, nuclei: &mut [Nucleus]) -> Result<(), KinematicsError> {
        let parent = nuclei[self.target].p4;
        let m = parent.invariant_mass();
        let ml = nuclei[self.ejectile].ground_state_mass;
        let mh = nuclei[self.residual].ground_state_mass + self.excitation;

        if m < ml + mh {
            return Err(KinematicsError::q_value(&self.equation(nuclei)));
        }

        let e_cm = (ml * ml - mh * mh + m * m) / (2.0 * m);
        let p_cm = (e_cm * e_cm - ml * ml).max(0.0).sqrt();

        let light = FourVector::from_spherical(self.theta, self.phi, p_cm, e_cm)
            .boost(parent.boost_vector());

        nuclei[self.ejectile].p4 = light;
        nuclei[self.ejectile].theta_cm = self.theta;
        let parent = nuclei[self.target].clone();
        self.set_residual(&parent, nuclei)
    }

    /// Removes the energy lost by the ejectile, and optionally the
    /// residual, on the way out of the target.
    pub fn apply_energy_loss(&self, nuclei: &mut [Nucleus], target: &LayeredTarget) {
        slow_down(&mut nuclei[self.ejectile], target, self.rxn_layer, self.depth);
        if self.residual_eloss {
            slow_down(&mut nuclei[self.residual], target, self.rxn_layer, self.depth);
        }
    }
}

/// Reduces the kinetic energy of `nucleus` by the energy it loses leaving
/// the target, keeping its direction and invariant mass. Nuclei that
/// stop are left at rest.
fn slow_down(nucleus: &mut Nucleus, target: &LayeredTarget, rxn_layer: usize, depth: f64) {
    let m = nucleus.p4.invariant_mass();
    let ke = nucleus.kinetic_energy();
    let (theta, phi) = (nucleus.theta(), nucleus.phi());
    let proj = Projectile::with_mass_mev(nucleus.z, nucleus.ground_state_mass);

    let ke = ke - target.ejectile_energy_loss(&proj, ke, theta, rxn_layer, depth);
    if ke > 0.0 {
        nucleus.set_spherical(theta, phi, (ke * (ke + 2.0 * m)).sqrt(), ke + m);
    } else {
        nucleus.p4 = FourVector::at_rest(m);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::error::KinematicsErrorKind;
    use crate::nucleus::MassTable;
    use crate::target::TargetLayer;

    fn nuclei(za: &[(u32, u32)], masses: &MassTable) -> Vec<Nucleus> {
        za.iter().map(|&(z, a)| Nucleus::new(z, a, masses).unwrap()).collect()
    }

    fn foil(z: u32, a: u32, thickness: f64, masses: &MassTable) -> LayeredTarget {
        let mut target = LayeredTarget::new();
        target.add_layer(TargetLayer::new(&[z], &[a], &[1], thickness, masses).unwrap());
        target
    }

    fn assert_conserved(before: FourVector, after: FourVector) {
        let err = (0..4).map(|i| (before[i] - after[i]).abs()).fold(0.0, f64::max) / before[0];
        println!("before = [{}], after = [{}], err = {:e}", before, after, err);
        assert!(err < 1.0e-9);
    }

    #[test]
    fn one_step_conservation() {
        let masses = MassTable::bundled().unwrap();
        let mut nuc = nuclei(&[(6, 12), (2, 3), (2, 4), (6, 11)], &masses);
        let target = foil(6, 12, 50.0, &masses);

        for &theta_type in [ThetaType::CenterOfMass, ThetaType::Lab].iter() {
            for &theta in [0.0, 25.0, 90.0, 150.0].iter() {
                let mut rxn = Reaction::scattering(0, 1, 2, 3);
                rxn.set_theta_type(theta_type);
                rxn.set_beam_ke(20.0);
                rxn.set_polar_angle(theta * DEG_TO_RAD);
                rxn.set_azimuthal_angle(1.0);
                rxn.set_excitation(2.0);
                rxn.calculate_kinematics(&mut nuc, &target).unwrap();

                assert_eq!(nuc[0].z + nuc[1].z, nuc[2].z + nuc[3].z);
                assert_eq!(nuc[0].a + nuc[1].a, nuc[2].a + nuc[3].a);
                assert_conserved(nuc[0].p4 + nuc[1].p4, nuc[2].p4 + nuc[3].p4);
                // beam lost energy reaching the reaction point
                assert!(nuc[1].kinetic_energy() < 20.0);
            }
        }
    }

    #[test]
    fn zero_degree_reaction() {
        let masses = MassTable::bundled().unwrap();
        let mut nuc = nuclei(&[(6, 12), (2, 3), (2, 4), (6, 11)], &masses);
        let target = foil(6, 12, 20.0, &masses);
        let mut rxn = Reaction::scattering(0, 1, 2, 3);
        rxn.set_beam_ke(15.0);
        rxn.set_polar_angle(0.0);
        rxn.calculate_kinematics(&mut nuc, &target).unwrap();

        assert_conserved(nuc[0].p4 + nuc[1].p4, nuc[2].p4 + nuc[3].p4);
        assert_eq!(nuc[2].theta(), 0.0);
        assert!(nuc[2].p4.px().abs() < 1.0e-12 && nuc[3].p4.py().abs() < 1.0e-12);
        assert!((nuc[3].excitation_energy()).abs() < 1.0e-6);
    }

    #[test]
    fn cm_angle_is_recovered() {
        let masses = MassTable::bundled().unwrap();
        let mut nuc = nuclei(&[(5, 10), (2, 3), (2, 4), (5, 9)], &masses);
        let target = foil(5, 10, 10.0, &masses);
        let mut rxn = Reaction::scattering(0, 1, 2, 3);
        rxn.set_beam_ke(24.0);
        rxn.set_polar_angle(1.1);
        rxn.calculate_kinematics(&mut nuc, &target).unwrap();

        let parent = nuc[0].p4 + nuc[1].p4;
        let ejectile_cm = nuc[2].p4.boost(parent.rest_frame_boost());
        println!("theta_cm = {}", ejectile_cm.theta());
        assert!((ejectile_cm.theta() - 1.1).abs() < 1.0e-9);
        assert_eq!(nuc[2].theta_cm, 1.1);
    }

    #[test]
    fn lab_angle_convention() {
        let masses = MassTable::bundled().unwrap();
        let mut nuc = nuclei(&[(6, 12), (1, 2), (1, 1), (6, 13)], &masses);
        let target = foil(6, 12, 10.0, &masses);
        let mut rxn = Reaction::scattering(0, 1, 2, 3);
        rxn.set_theta_type(ThetaType::Lab);
        rxn.set_beam_ke(10.0);
        rxn.set_polar_angle(0.6);
        rxn.calculate_kinematics(&mut nuc, &target).unwrap();

        assert!((nuc[2].theta() - 0.6).abs() < 1.0e-12);
        // the closed form is non-relativistic, so the residual mass is only approximate
        println!("residual Ex = {} MeV", nuc[3].excitation_energy());
        assert!(nuc[3].excitation_energy().abs() < 0.3);
    }

    #[test]
    fn beyond_maximum_lab_angle() {
        let masses = MassTable::bundled().unwrap();
        // 12C on 2H: the carbon cannot scatter beyond asin(2/12) = 9.6 degrees
        let mut nuc = nuclei(&[(1, 2), (6, 12), (6, 12), (1, 2)], &masses);
        let target = foil(1, 2, 10.0, &masses);
        let mut rxn = Reaction::scattering(0, 1, 2, 3);
        rxn.set_theta_type(ThetaType::Lab);
        rxn.set_beam_ke(60.0);

        rxn.set_polar_angle(20.0 * DEG_TO_RAD);
        let err = rxn.calculate_kinematics(&mut nuc, &target).unwrap_err();
        println!("{}", err);
        assert_eq!(err.kind(), KinematicsErrorKind::LabAngle);
        assert!(err.is_rejection());

        rxn.set_polar_angle(5.0 * DEG_TO_RAD);
        rxn.calculate_kinematics(&mut nuc, &target).unwrap();
        assert!((nuc[2].theta() - 5.0 * DEG_TO_RAD).abs() < 1.0e-12);
    }

    #[test]
    fn residual_must_balance_partners() {
        let masses = MassTable::bundled().unwrap();
        let target = foil(6, 12, 10.0, &masses);

        // 12C(3He, 4He)10B loses a proton and a neutron
        let mut nuc = nuclei(&[(6, 12), (2, 3), (2, 4), (5, 10)], &masses);
        let mut rxn = Reaction::scattering(0, 1, 2, 3);
        rxn.set_beam_ke(20.0);
        let err = rxn.calculate_kinematics(&mut nuc, &target).unwrap_err();
        println!("{}", err);
        assert_eq!(err.kind(), KinematicsErrorKind::InvalidChain);
        assert!(!err.is_rejection());

        // 8Be->4He+3He
        let mut nuc = nuclei(&[(4, 8), (2, 4), (2, 3)], &masses);
        nuc[0].p4 = FourVector::at_rest(nuc[0].ground_state_mass);
        let err = Reaction::decay(0, 1, 2).calculate_kinematics(&mut nuc, &target).unwrap_err();
        assert_eq!(err.kind(), KinematicsErrorKind::InvalidChain);

        // 8Be->4He+4He
        let mut nuc = nuclei(&[(4, 8), (2, 4), (2, 4)], &masses);
        nuc[0].p4 = FourVector::at_rest(nuc[0].ground_state_mass);
        Reaction::decay(0, 1, 2).calculate_kinematics(&mut nuc, &target).unwrap();
        assert_conserved(nuc[0].p4, nuc[1].p4 + nuc[2].p4);
    }

    #[test]
    fn below_threshold() {
        let masses = MassTable::bundled().unwrap();
        // 11B(p, n)11C, Q = -2.76 MeV
        let mut nuc = nuclei(&[(5, 11), (1, 1), (0, 1), (6, 11)], &masses);
        let target = foil(5, 11, 10.0, &masses);
        let mut rxn = Reaction::scattering(0, 1, 2, 3);
        assert_eq!(rxn.equation(&nuc), "11B(1H, 1n)11C");
        assert!(!rxn.check_reaction_threshold(&nuc, 1.0, 0.0));
        assert!(rxn.check_reaction_threshold(&nuc, 4.0, 0.0));

        rxn.set_beam_ke(1.0);
        let err = rxn.calculate(&mut nuc, &target).unwrap_err();
        assert_eq!(err.kind(), KinematicsErrorKind::EnergyThreshold);
        assert!(err.is_rejection());

        rxn.set_beam_ke(4.0);
        rxn.set_polar_angle(0.3);
        assert!(rxn.calculate(&mut nuc, &target).is_ok());
    }

    #[test]
    fn decay_conservation() {
        let masses = MassTable::bundled().unwrap();
        let mut nuc = nuclei(&[(4, 8), (2, 4), (2, 4)], &masses);
        let target = foil(6, 12, 10.0, &masses);
        let parent_mass = nuc[0].ground_state_mass + 3.03;
        nuc[0].p4 = FourVector::from_spherical(0.4, 2.0, 150.0, (150.0f64.powi(2) + parent_mass.powi(2)).sqrt());
        let before = nuc[0].p4;

        let mut rxn = Reaction::decay(0, 1, 2);
        assert_eq!(rxn.equation(&nuc), "8Be->4He+4He");
        rxn.set_polar_angle(2.2);
        rxn.set_azimuthal_angle(5.0);
        rxn.calculate_kinematics(&mut nuc, &target).unwrap();

        assert_eq!(nuc[0].z, nuc[1].z + nuc[2].z);
        assert_eq!(nuc[0].a, nuc[1].a + nuc[2].a);
        assert_conserved(before, nuc[1].p4 + nuc[2].p4);
        assert!(nuc[2].excitation_energy().abs() < 1.0e-6);
    }

    #[test]
    fn negative_q_value() {
        let masses = MassTable::bundled().unwrap();
        let mut nuc = nuclei(&[(4, 8), (2, 4), (2, 4)], &masses);
        let target = foil(6, 12, 10.0, &masses);
        let mut rxn = Reaction::decay(0, 1, 2);
        assert!(rxn.check_decay_threshold(&nuc, 0.0, 0.0));
        assert!(!rxn.check_decay_threshold(&nuc, 0.0, 1.0));

        rxn.set_excitation(1.0);
        let err = rxn.calculate(&mut nuc, &target).unwrap_err();
        assert_eq!(err.kind(), KinematicsErrorKind::QValue);
    }

    #[test]
    fn products_slow_down() {
        let masses = MassTable::bundled().unwrap();
        let mut nuc = nuclei(&[(6, 12), (2, 3), (2, 4), (6, 11)], &masses);
        let target = foil(6, 12, 500.0, &masses);
        let mut rxn = Reaction::scattering(0, 1, 2, 3);
        rxn.set_beam_ke(20.0);
        rxn.set_polar_angle(0.5);
        rxn.set_residual_eloss(true);

        rxn.calculate_kinematics(&mut nuc, &target).unwrap();
        let (ke_e, ke_r) = (nuc[2].kinetic_energy(), nuc[3].kinetic_energy());
        let theta_e = nuc[2].theta();
        rxn.apply_energy_loss(&mut nuc, &target);

        println!("ejectile {} -> {} MeV, residual {} -> {} MeV", ke_e, nuc[2].kinetic_energy(), ke_r, nuc[3].kinetic_energy());
        assert!(nuc[2].kinetic_energy() < ke_e);
        assert!(nuc[3].kinetic_energy() < ke_r);
        assert!((nuc[2].theta() - theta_e).abs() < 1.0e-12);
    }
}
