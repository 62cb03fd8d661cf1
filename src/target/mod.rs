//! Layered targets and the energy lost by ions crossing them

use std::f64::consts;

mod layer;
mod stopping;
mod tables;

pub use layer::*;
pub use stopping::{Projectile, Component, Material, proton_stopping, electronic_stopping, nuclear_stopping};

/// An ordered stack of target layers, traversed by the beam from the
/// first layer to the last. Layer order matters: the energy lost in
/// each layer depends on what was lost before it.
#[derive(Clone, Debug, Default)]
pub struct LayeredTarget {
    layers: Vec<TargetLayer>,
    name: String,
}

impl LayeredTarget {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_name(name: &str) -> Self {
        LayeredTarget {layers: vec![], name: name.to_owned()}
    }

    pub fn add_layer(&mut self, layer: TargetLayer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[TargetLayer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Index of the first layer containing the isotope (`z`, `a`)
    pub fn find_layer_containing(&self, z: u32, a: u32) -> Option<usize> {
        self.layers.iter().position(|l| l.contains_element(z, a))
    }

    /// Energy lost by the beam before it reacts at fractional `depth`
    /// of layer `rxn_layer`.
    pub fn projectile_energy_loss(&self, proj: &Projectile, e: f64, theta: f64, rxn_layer: usize, depth: f64) -> f64 {
        if rxn_layer >= self.layers.len() {
            log::warn!("Reaction layer {} is not in a target of {} layers, no energy loss applied.", rxn_layer, self.layers.len());
            return 0.0;
        }

        let mut eloss = 0.0;
        for layer in &self.layers[..rxn_layer] {
            eloss += layer.energy_loss_total(proj, e - eloss, theta);
            if eloss >= e {
                return e;
            }
        }
        eloss += self.layers[rxn_layer].energy_loss_fractional_depth(proj, e - eloss, theta, depth);
        eloss.min(e)
    }

    /// Energy lost by a reaction product created at fractional `depth`
    /// of layer `rxn_layer`, on its way out of the target. Forward-going
    /// products cross the rest of the layer and all downstream layers;
    /// backward-going ones cross the front of the layer and all
    /// upstream layers.
    pub fn ejectile_energy_loss(&self, proj: &Projectile, e: f64, theta: f64, rxn_layer: usize, depth: f64) -> f64 {
        if rxn_layer >= self.layers.len() {
            log::warn!("Reaction layer {} is not in a target of {} layers, no energy loss applied.", rxn_layer, self.layers.len());
            return 0.0;
        }

        let (first_depth, rest): (f64, Vec<&TargetLayer>) = if theta < consts::FRAC_PI_2 {
            (1.0 - depth, self.layers[rxn_layer + 1..].iter().collect())
        } else {
            (depth, self.layers[..rxn_layer].iter().rev().collect())
        };

        let mut eloss = self.layers[rxn_layer].energy_loss_fractional_depth(proj, e, theta, first_depth);
        for layer in rest {
            if eloss >= e {
                return e;
            }
            eloss += layer.energy_loss_total(proj, e - eloss, theta);
        }
        eloss.min(e)
    }

    /// Energy a reaction product created at fractional `depth` of layer
    /// `rxn_layer` must have lost on its way out of the target, given
    /// that it escaped with kinetic energy `e`.
    pub fn ejectile_reverse_energy_loss(&self, proj: &Projectile, e: f64, theta: f64, rxn_layer: usize, depth: f64) -> f64 {
        if rxn_layer >= self.layers.len() {
            log::warn!("Reaction layer {} is not in a target of {} layers, no energy loss applied.", rxn_layer, self.layers.len());
            return 0.0;
        }

        let (outer, last_depth): (Vec<&TargetLayer>, f64) = if theta < consts::FRAC_PI_2 {
            (self.layers[rxn_layer + 1..].iter().rev().collect(), 1.0 - depth)
        } else {
            (self.layers[..rxn_layer].iter().collect(), depth)
        };

        let mut egain = 0.0;
        for layer in outer {
            egain += layer.reverse_energy_loss_total(proj, e + egain, theta);
        }
        egain + self.layers[rxn_layer].reverse_energy_loss_fractional_depth(proj, e + egain, theta, last_depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::nucleus::MassTable;

    fn backed_target(masses: &MassTable) -> LayeredTarget {
        let mut target = LayeredTarget::with_name("10B on carbon");
        target.add_layer(TargetLayer::new(&[6], &[12], &[1], 20.0, masses).unwrap());
        target.add_layer(TargetLayer::new(&[5], &[10], &[1], 50.0, masses).unwrap());
        target.add_layer(TargetLayer::new(&[6], &[12], &[1], 20.0, masses).unwrap());
        target
    }

    #[test]
    fn find_layer() {
        let masses = MassTable::bundled().unwrap();
        let target = backed_target(&masses);
        assert_eq!(target.find_layer_containing(5, 10), Some(1));
        assert_eq!(target.find_layer_containing(6, 12), Some(0));
        assert_eq!(target.find_layer_containing(3, 7), None);
    }

    #[test]
    fn beam_loses_more_deeper_in() {
        let masses = MassTable::bundled().unwrap();
        let target = backed_target(&masses);
        let he3 = Projectile::new(2, 3.016);
        let shallow = target.projectile_energy_loss(&he3, 24.0, 0.0, 1, 0.1);
        let deep = target.projectile_energy_loss(&he3, 24.0, 0.0, 1, 0.9);
        println!("shallow = {}, deep = {}", shallow, deep);
        assert!(shallow > 0.0 && deep > shallow);
    }

    #[test]
    fn ejectile_paths() {
        let masses = MassTable::bundled().unwrap();
        let target = backed_target(&masses);
        let alpha = Projectile::new(2, 4.0026);

        // Forward from the front face crosses more material than from the back face
        let front = target.ejectile_energy_loss(&alpha, 10.0, 20.0 * DEG_TO_RAD, 1, 0.0);
        let back = target.ejectile_energy_loss(&alpha, 10.0, 20.0 * DEG_TO_RAD, 1, 1.0);
        assert!(front > back);

        // and the reverse is true travelling backward
        let front = target.ejectile_energy_loss(&alpha, 10.0, 160.0 * DEG_TO_RAD, 1, 0.0);
        let back = target.ejectile_energy_loss(&alpha, 10.0, 160.0 * DEG_TO_RAD, 1, 1.0);
        assert!(front < back);
    }

    #[test]
    fn reverse_ejectile_loss() {
        let masses = MassTable::bundled().unwrap();
        let target = backed_target(&masses);
        let proton = Projectile::new(1, 1.00728);
        for &theta in [10.0, 70.0, 110.0, 170.0].iter() {
            let theta = theta * DEG_TO_RAD;
            let loss = target.ejectile_energy_loss(&proton, 4.0, theta, 1, 0.3);
            let gain = target.ejectile_reverse_energy_loss(&proton, 4.0 - loss, theta, 1, 0.3);
            println!("theta = {:.3}, loss = {:.6e}, gain = {:.6e}", theta, loss, gain);
            assert!((loss - gain).abs() < 1.0e-4);
        }
    }

    #[test]
    fn out_of_range_layer() {
        let masses = MassTable::bundled().unwrap();
        let target = backed_target(&masses);
        let proton = Projectile::new(1, 1.00728);
        assert_eq!(target.projectile_energy_loss(&proton, 4.0, 0.0, 3, 0.5), 0.0);
    }
}
