//! Stopping powers of ions in matter, and their integration
//! over a finite thickness.
//!
//! Electronic stopping is built on Ziegler's fits to the stopping of
//! hydrogen; helium and heavier ions are scaled from it by an effective
//! charge. Nuclear stopping uses the universal screening potential.
//! Stopping powers are in units of eV / (1e15 atoms/cm^2) and energies
//! per nucleon in keV/u unless stated otherwise.

use crate::constants::*;
use super::tables::{HYDROGEN_COEFF, MAX_Z};

/// Largest fractional change in energy allowed in one integration step
const MAX_STEP_FRACTION: f64 = 0.01;

/// An ion moving through matter
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Projectile {
    pub z: u32,
    /// units of u
    pub mass_u: f64,
}

impl Projectile {
    pub fn new(z: u32, mass_u: f64) -> Self {
        Projectile {z, mass_u}
    }

    /// Projectile with the given nuclear mass, in MeV
    pub fn with_mass_mev(z: u32, mass: f64) -> Self {
        Projectile {z, mass_u: mass / AMU_MEV}
    }
}

/// One element of a compound
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Component {
    pub z: u32,
    /// units of u
    pub mass_u: f64,
    pub stoich: f64,
}

/// Electronic stopping of protons with energy `e` (keV) in element `zt`.
pub fn proton_stopping(zt: u32, e: f64) -> f64 {
    if e <= 0.0 {
        return 0.0;
    }

    let a = &HYDROGEN_COEFF[zt as usize];

    if e < 10.0 {
        a[0] * e.sqrt()
    } else if e <= 1000.0 {
        let s_low = a[1] * e.powf(0.45);
        let s_high = (a[2] / e) * (1.0 + a[3] / e + a[4] * e).ln();
        s_low * s_high / (s_low + s_high)
    } else {
        let gamma = 1.0 + 1.0e-3 * e / AMU_MEV;
        let beta2 = 1.0 - 1.0 / (gamma * gamma);
        let log_e = e.ln();
        let correction: f64 = a[7..12].iter()
            .enumerate()
            .map(|(i, c)| c * log_e.powi(i as i32))
            .sum();
        (a[5] / beta2) * ((a[6] * beta2 / (1.0 - beta2)).ln() - beta2 - correction)
    }
}

/// Square of the effective charge of helium ions with energy `e` (keV/u)
fn helium_charge_sqr(e: f64) -> f64 {
    const C: [f64; 6] = [0.2865, 0.1266, -0.001429, 0.02402, -0.01135, 0.001475];
    let log_e = e.max(1.0).ln();
    let x: f64 = C.iter()
        .enumerate()
        .map(|(i, c)| c * log_e.powi(i as i32))
        .sum();
    4.0 * (1.0 - (-x.min(30.0)).exp())
}

/// Fractional effective charge of ions heavier than helium,
/// with energy `e` (keV/u)
fn heavy_ion_charge_fraction(zp: u32, e: f64) -> f64 {
    let zp = zp as f64;
    let b = 0.886 * (e / 25.0).sqrt() / zp.powf(2.0 / 3.0);
    let a = b + 0.0378 * (0.5 * std::f64::consts::PI * b).sin();
    let gamma = 1.0 - (-a).exp() * (1.034 - 0.1777 * (-0.08114 * zp).exp());
    gamma.max(0.0)
}

/// Electronic stopping of `proj` with kinetic energy `e` (keV) in element `zt`.
pub fn electronic_stopping(proj: &Projectile, zt: u32, e: f64) -> f64 {
    let e_per_u = e / proj.mass_u;
    // protons with the same velocity
    let s_p = proton_stopping(zt, e_per_u);
    match proj.z {
        0 => 0.0,
        1 => s_p,
        2 => s_p * helium_charge_sqr(e_per_u),
        zp => {
            let q = heavy_ion_charge_fraction(zp, e_per_u) * (zp as f64);
            s_p * q * q
        }
    }
}

/// Nuclear stopping of `proj` with kinetic energy `e` (keV) in element
/// (`zt`, `mt`).
pub fn nuclear_stopping(proj: &Projectile, zt: u32, mt: f64, e: f64) -> f64 {
    if proj.z == 0 || e <= 0.0 {
        return 0.0;
    }

    let (zp, mp) = (proj.z as f64, proj.mass_u);
    let zt = zt as f64;
    let screening = zp.powf(0.23) + zt.powf(0.23);

    let eps = 32.53 * mt * e / (zp * zt * (mp + mt) * screening);
    let sn = if eps <= 30.0 {
        (1.0 + 1.1383 * eps).ln() / (2.0 * (eps + 0.01321 * eps.powf(0.21226) + 0.19593 * eps.sqrt()))
    } else {
        eps.ln() / (2.0 * eps)
    };

    8.462 * zp * zt * mp * sn / ((mp + mt) * screening)
}

/// A compound, for which stopping powers are combined by Bragg's rule
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    components: Vec<Component>,
    /// units of g/mol
    molar_mass: f64,
}

impl Material {
    /// Every component must have 1 <= z <= 92 and positive stoichiometry.
    pub(super) fn new(components: Vec<Component>) -> Self {
        let molar_mass = components.iter().map(|c| c.stoich * c.mass_u).sum();
        Material {components, molar_mass}
    }

    pub fn is_valid_element(z: u32) -> bool {
        z >= 1 && (z as usize) <= MAX_Z
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// Total stopping power for `proj` with kinetic energy `e` (MeV),
    /// in units of MeV / (ug/cm^2)
    pub fn stopping_power(&self, proj: &Projectile, e: f64) -> f64 {
        let e_kev = 1.0e3 * e;
        let per_molecule: f64 = self.components.iter()
            .map(|c| {
                c.stoich * (electronic_stopping(proj, c.z, e_kev) + nuclear_stopping(proj, c.z, c.mass_u, e_kev))
            })
            .sum();
        1.0e-6 * per_molecule * AREAL_DENSITY_FACTOR / self.molar_mass
    }

    /// Energy (MeV) lost by `proj`, initially with kinetic energy `e`,
    /// on crossing `thickness` ug/cm^2 of the material.
    /// A projectile that stops loses all of its energy.
    pub fn energy_loss(&self, proj: &Projectile, e: f64, thickness: f64) -> f64 {
        if proj.z == 0 || thickness <= 0.0 || e <= 0.0 {
            return 0.0;
        }

        let mut energy = e;
        let mut remaining = thickness;

        while remaining > 0.0 {
            if energy < STOPPED_ENERGY {
                return e;
            }

            let s = self.stopping_power(proj, energy);
            if s <= 0.0 {
                break;
            }

            let dx = remaining.min(MAX_STEP_FRACTION * energy / s);
            // midpoint rule
            let s_mid = self.stopping_power(proj, energy - 0.5 * s * dx);
            energy -= s_mid * dx;
            remaining -= dx;
        }

        if energy < STOPPED_ENERGY {
            e
        } else {
            e - energy
        }
    }

    /// Energy (MeV) that `proj` must have lost crossing `thickness`
    /// ug/cm^2 of material, given that it emerged with kinetic energy `e`.
    pub fn reverse_energy_loss(&self, proj: &Projectile, e: f64, thickness: f64) -> f64 {
        if proj.z == 0 || thickness <= 0.0 {
            return 0.0;
        }

        let start = e.max(STOPPED_ENERGY);
        let mut energy = start;
        let mut remaining = thickness;

        while remaining > 0.0 {
            let s = self.stopping_power(proj, energy);
            if s <= 0.0 {
                break;
            }

            let dx = remaining.min(MAX_STEP_FRACTION * energy / s);
            let s_mid = self.stopping_power(proj, energy + 0.5 * s * dx);
            energy += s_mid * dx;
            remaining -= dx;
        }

        energy - start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carbon() -> Material {
        Material::new(vec![Component {z: 6, mass_u: 12.0, stoich: 1.0}])
    }

    #[test]
    fn proton_in_carbon() {
        // 1 MeV protons in carbon, ~4.6 eV/(1e15 atoms/cm^2)
        let s = proton_stopping(6, 1000.0);
        println!("S = {} eV/(1e15 atoms/cm^2)", s);
        assert!((s - 4.58).abs() < 0.1);
    }

    #[test]
    fn continuous_across_regimes() {
        for zt in [1, 6, 14, 47, 79].iter() {
            for &(below, above) in [(9.9999, 10.0), (1000.0, 1000.0001)].iter() {
                let (s0, s1) = (proton_stopping(*zt, below), proton_stopping(*zt, above));
                let err = (s1 - s0).abs() / s0;
                println!("Z = {}, E = {} keV, S = {} -> {}, err = {:.3e}", zt, below, s0, s1, err);
                assert!(err < 0.05);
            }
        }
    }

    #[test]
    fn helium_is_fully_stripped_at_high_energy() {
        let z2 = helium_charge_sqr(2000.0);
        assert!((z2 - 4.0).abs() < 0.01);
        assert!(helium_charge_sqr(10.0) < 4.0);
    }

    #[test]
    fn alpha_in_carbon() {
        let alpha = Projectile::new(2, 4.0026);
        let loss = carbon().energy_loss(&alpha, 5.0, 1000.0);
        println!("5 MeV alpha through 1 mg/cm^2 carbon loses {} MeV", loss);
        assert!(loss > 0.5 && loss < 1.2);
    }

    #[test]
    fn reverse_undoes_forward() {
        let proton = Projectile::new(1, 1.00728);
        let c = carbon();
        let e0 = 3.0;
        let loss = c.energy_loss(&proton, e0, 2000.0);
        let gain = c.reverse_energy_loss(&proton, e0 - loss, 2000.0);
        println!("loss = {}, gain = {}", loss, gain);
        assert!(loss > 0.0);
        assert!((loss - gain).abs() < 1.0e-3 * e0);
    }

    #[test]
    fn slow_ions_stop() {
        let c12 = Projectile::new(6, 12.0);
        let loss = carbon().energy_loss(&c12, 0.5, 1.0e4);
        assert_eq!(loss, 0.5);
    }

    #[test]
    fn neutrons_pass_freely() {
        let n = Projectile::new(0, 1.00866);
        assert_eq!(carbon().energy_loss(&n, 2.0, 1.0e4), 0.0);
    }
}
