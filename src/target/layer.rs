//! A single layer of target material

use std::f64::consts;

use crate::error::KinematicsError;
use crate::nucleus::MassTable;
use super::stopping::*;

/// Below this, travel is taken to be parallel to the layer surface.
const PERPENDICULAR_TOLERANCE: f64 = 1.0e-12;

/// A uniform slab of a single compound, defined by its elements
/// (Z, A, stoichiometry) and areal density.
#[derive(Clone, Debug, PartialEq)]
pub struct TargetLayer {
    isotopes: Vec<(u32, u32)>,
    material: Material,
    /// units of ug/cm^2
    thickness: f64,
}

impl TargetLayer {
    /// Creates a new layer from parallel lists of proton numbers,
    /// nucleon numbers and stoichiometries, with `thickness` in ug/cm^2.
    pub fn new(z: &[u32], a: &[u32], stoich: &[u32], thickness: f64, masses: &MassTable) -> Result<Self, KinematicsError> {
        if z.is_empty() || z.len() != a.len() || z.len() != stoich.len() {
            return Err(KinematicsError::target_material(
                &format!("{} proton numbers, {} nucleon numbers and {} stoichiometries", z.len(), a.len(), stoich.len())
            ));
        }

        if !(thickness >= 0.0) {
            return Err(KinematicsError::target_material(&format!("thickness {} ug/cm^2", thickness)));
        }

        let mut components = Vec::with_capacity(z.len());
        for ((&z, &a), &s) in z.iter().zip(a.iter()).zip(stoich.iter()) {
            if !Material::is_valid_element(z) || s == 0 {
                return Err(KinematicsError::target_material(
                    &format!("no stopping data for element (Z = {}, A = {}, S = {})", z, a, s)
                ));
            }
            components.push(Component {
                z,
                mass_u: masses.mass_u(z, a)?,
                stoich: s as f64,
            });
        }

        Ok(TargetLayer {
            isotopes: z.iter().cloned().zip(a.iter().cloned()).collect(),
            material: Material::new(components),
            thickness,
        })
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Is the isotope (`z`, `a`) part of this layer?
    pub fn contains_element(&self, z: u32, a: u32) -> bool {
        self.isotopes.iter().any(|&iso| iso == (z, a))
    }

    /// Path length (ug/cm^2) through `depth` of the layer at angle
    /// `theta` to its normal, or None if the particle travels parallel
    /// to its surface. Backward angles are folded into the forward
    /// hemisphere.
    fn path_length(&self, theta: f64, depth: f64) -> Option<f64> {
        let theta = if theta > consts::FRAC_PI_2 {consts::PI - theta} else {theta};
        let cos_theta = theta.cos().abs();
        if cos_theta < PERPENDICULAR_TOLERANCE {
            None
        } else {
            Some(self.thickness * depth / cos_theta)
        }
    }

    /// Energy lost crossing the whole layer.
    pub fn energy_loss_total(&self, proj: &Projectile, e: f64, theta: f64) -> f64 {
        self.energy_loss_fractional_depth(proj, e, theta, 1.0)
    }

    /// Energy lost crossing a fraction `depth` of the layer.
    pub fn energy_loss_fractional_depth(&self, proj: &Projectile, e: f64, theta: f64, depth: f64) -> f64 {
        match self.path_length(theta, depth) {
            Some(x) => self.material.energy_loss(proj, e, x),
            None => 0.0,
        }
    }

    /// Energy that was lost crossing the whole layer, given the
    /// energy `e` on exit.
    pub fn reverse_energy_loss_total(&self, proj: &Projectile, e: f64, theta: f64) -> f64 {
        self.reverse_energy_loss_fractional_depth(proj, e, theta, 1.0)
    }

    /// Energy that was lost crossing a fraction `depth` of the layer,
    /// given the energy `e` on exit.
    pub fn reverse_energy_loss_fractional_depth(&self, proj: &Projectile, e: f64, theta: f64, depth: f64) -> f64 {
        match self.path_length(theta, depth) {
            Some(x) => self.material.reverse_energy_loss(proj, e, x),
            None => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts;
    use super::*;
    use crate::constants::*;

    fn carbon_foil(masses: &MassTable) -> TargetLayer {
        TargetLayer::new(&[6], &[12], &[1], 100.0, masses).unwrap()
    }

    #[test]
    fn perpendicular_travel() {
        let masses = MassTable::bundled().unwrap();
        let layer = carbon_foil(&masses);
        let proton = Projectile::new(1, 1.00728);
        assert_eq!(layer.energy_loss_total(&proton, 5.0, consts::FRAC_PI_2), 0.0);
        assert_eq!(layer.reverse_energy_loss_total(&proton, 5.0, consts::FRAC_PI_2), 0.0);
    }

    #[test]
    fn monotonic_in_thickness_and_angle() {
        let masses = MassTable::bundled().unwrap();
        let layer = carbon_foil(&masses);
        let alpha = Projectile::new(2, 4.0026);

        let mut last = 0.0;
        for i in 1..=10 {
            let loss = layer.energy_loss_fractional_depth(&alpha, 8.0, 0.0, 0.1 * (i as f64));
            assert!(loss >= last);
            last = loss;
        }

        let mut last = 0.0;
        for i in 0..89 {
            let theta = (i as f64) * DEG_TO_RAD;
            let loss = layer.energy_loss_total(&alpha, 8.0, theta);
            println!("theta = {} deg, loss = {:.6} MeV", i, loss);
            assert!(loss >= last);
            last = loss;
        }
    }

    #[test]
    fn backward_angles_fold() {
        let masses = MassTable::bundled().unwrap();
        let layer = carbon_foil(&masses);
        let proton = Projectile::new(1, 1.00728);
        let fwd = layer.energy_loss_total(&proton, 2.0, 30.0 * DEG_TO_RAD);
        let bwd = layer.energy_loss_total(&proton, 2.0, 150.0 * DEG_TO_RAD);
        assert!((fwd - bwd).abs() < 1.0e-12);
    }

    #[test]
    fn compound_layer() {
        let masses = MassTable::bundled().unwrap();
        let lif = TargetLayer::new(&[3, 9], &[7, 19], &[1, 1], 50.0, &masses).unwrap();
        assert!(lif.contains_element(9, 19));
        assert!(!lif.contains_element(9, 18));
        assert!((lif.material().molar_mass() - 26.01).abs() < 0.05);

        let bad = TargetLayer::new(&[3, 9], &[7], &[1, 1], 50.0, &masses);
        assert!(bad.is_err());
    }
}
