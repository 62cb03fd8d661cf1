//! Physical constants and unit conversions

/// Atomic mass unit, units of MeV
pub const AMU_MEV: f64 = 931.4940954;
/// Electron mass, units of u
pub const ELECTRON_MASS_U: f64 = 0.000548579909;
/// Proton mass, units of MeV
pub const PROTON_MASS_MEV: f64 = 938.272088;
/// Number of 1e15 atoms/cm^2 in 1 ug/cm^2 of a material with
/// molar mass 1 g/mol
pub const AREAL_DENSITY_FACTOR: f64 = 602.214076;
/// Degrees to radians
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
/// Kinetic energy below which a travelling ion is considered stopped, units of MeV
pub const STOPPED_ENERGY: f64 = 1.0e-3;
