//! Isotopic masses and symbols

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::constants::*;
use crate::error::KinematicsError;

/// Environment variable naming an alternative mass data file
pub const MASS_FILE_VAR: &str = "MASK_MASS_FILE";

/// Default location of the mass data file
pub const DEFAULT_MASS_FILE: &str = "etc/mass.txt";

struct Isotope {
    atomic_mass: f64, // u
    symbol: String,
}

/// Maps (Z, A) to the ground-state mass and symbol of an isotope.
///
/// Built once at startup and passed by reference to whatever needs it.
/// Lines of the data file read `Z A El mass`, with the atomic mass
/// in u; blank lines and those starting with `#` are skipped.
pub struct MassTable {
    isotopes: HashMap<(u32, u32), Isotope>,
}

impl MassTable {
    /// Loads the table from `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, KinematicsError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|_| KinematicsError::mass_file(&path.display().to_string()))?;
        Self::parse(&contents, &path.display().to_string())
    }

    /// Loads the table named by `MASK_MASS_FILE`, or `etc/mass.txt`
    /// if that is unset.
    pub fn load() -> Result<Self, KinematicsError> {
        match std::env::var(MASS_FILE_VAR) {
            Ok(path) => Self::from_file(path),
            Err(_) => Self::from_file(DEFAULT_MASS_FILE),
        }
    }

    /// The table compiled into the library.
    pub fn bundled() -> Result<Self, KinematicsError> {
        Self::parse(include_str!("../../etc/mass.txt"), "<bundled>")
    }

    fn parse(contents: &str, origin: &str) -> Result<Self, KinematicsError> {
        let mut isotopes = HashMap::new();

        for (n, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split_whitespace().collect();
            let bad_line = || KinematicsError::mass_file(&format!("{}, line {}", origin, n + 1));

            if fields.len() < 4 {
                return Err(bad_line());
            }

            let z: u32 = fields[0].parse().map_err(|_| bad_line())?;
            let a: u32 = fields[1].parse().map_err(|_| bad_line())?;
            let atomic_mass: f64 = fields[3].parse().map_err(|_| bad_line())?;

            let symbol = format!("{}{}", a, fields[2]);
            isotopes.insert((z, a), Isotope {atomic_mass, symbol});
        }

        if isotopes.is_empty() {
            return Err(KinematicsError::mass_file(origin));
        }

        Ok(MassTable {isotopes})
    }

    fn find(&self, z: u32, a: u32) -> Result<&Isotope, KinematicsError> {
        self.isotopes.get(&(z, a))
            .ok_or_else(|| KinematicsError::missing_isotope(z, a))
    }

    /// Nuclear (electron-stripped) mass, units of MeV
    pub fn mass(&self, z: u32, a: u32) -> Result<f64, KinematicsError> {
        let iso = self.find(z, a)?;
        Ok((iso.atomic_mass - (z as f64) * ELECTRON_MASS_U) * AMU_MEV)
    }

    /// Atomic mass, units of u
    pub fn mass_u(&self, z: u32, a: u32) -> Result<f64, KinematicsError> {
        self.find(z, a).map(|iso| iso.atomic_mass)
    }

    /// Isotope symbol, e.g. "12C"
    pub fn symbol(&self, z: u32, a: u32) -> Result<&str, KinematicsError> {
        self.find(z, a).map(|iso| iso.symbol.as_str())
    }

    pub fn len(&self) -> usize {
        self.isotopes.len()
    }
}

impl FromStr for MassTable {
    type Err = KinematicsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, "<string>")
    }
}
