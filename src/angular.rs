//! Angular distributions of decay products

use std::path::Path;

use rand::prelude::*;

use crate::special_functions::Legendre;

/// The distribution of cos(theta) for a decay, expressed as a sum of
/// even Legendre polynomials, W(x) = sum_i a_i P_2i(x), together with
/// the probability that the decay happens at all.
#[derive(Clone, Debug, PartialEq)]
pub struct AngularDistribution {
    l: usize,
    branching_ratio: f64,
    coefficients: Vec<f64>,
    isotropic: bool,
}

impl Default for AngularDistribution {
    fn default() -> Self {
        Self::isotropic()
    }
}

impl AngularDistribution {
    /// Uniform in cos(theta), always occurring
    pub fn isotropic() -> Self {
        AngularDistribution {
            l: 0,
            branching_ratio: 1.0,
            coefficients: vec![0.5],
            isotropic: true,
        }
    }

    /// Creates a distribution with angular momentum `l` from the `l+1`
    /// coefficients of P_0, P_2, ... P_2l. The branching ratio is 2 a_0,
    /// and if this is less than one the coefficients are rescaled so that
    /// W(x) is normalized to unity.
    ///
    /// Returns None if the number of coefficients is wrong or a_0 is
    /// not positive.
    pub fn from_coefficients(l: usize, coefficients: &[f64]) -> Option<Self> {
        if coefficients.len() != l + 1 || !(coefficients[0] > 0.0) {
            return None;
        }

        let branching_ratio = 2.0 * coefficients[0];
        let norm = if coefficients[0] < 0.5 {0.5 / coefficients[0]} else {1.0};

        Some(AngularDistribution {
            l,
            branching_ratio,
            coefficients: coefficients.iter().map(|a| norm * a).collect(),
            isotropic: false,
        })
    }

    /// Reads a distribution from a file of whitespace-separated
    /// label/value pairs, the first giving L and the remainder the
    /// coefficients a_0, a_2, ... a_2L:
    /// ```text
    /// L: 1
    /// a0: 0.5
    /// a2: 0.25
    /// ```
    /// A path of "none", or an empty one, gives an isotropic distribution;
    /// so does a file that is missing or malformed, with a warning.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let name = path.display().to_string();

        if name.is_empty() || name == "none" {
            return Self::isotropic();
        }

        let contents = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Unable to open angular distribution file \"{}\" ({}), using isotropic distribution.", name, e);
                return Self::isotropic();
            }
        };

        match Self::parse(&contents) {
            Some(dist) => {
                log::info!("Angular distribution from \"{}\": L = {}, branching ratio = {}", name, dist.l, dist.branching_ratio);
                dist
            },
            None => {
                log::warn!("Malformed angular distribution file \"{}\", using isotropic distribution.", name);
                Self::isotropic()
            }
        }
    }

    fn parse(contents: &str) -> Option<Self> {
        let values: Vec<&str> = contents.split_whitespace()
            .skip(1)
            .step_by(2)
            .collect();

        let (l, coefficients) = values.split_first()?;
        let l: usize = l.parse().ok()?;
        let coefficients = coefficients.iter()
            .map(|s| s.parse::<f64>().ok())
            .collect::<Option<Vec<f64>>>()?;

        if coefficients.len() != l + 1 {
            log::warn!("Expected {} coefficients for L = {}, found {}.", l + 1, l, coefficients.len());
        }

        Self::from_coefficients(l, &coefficients)
    }

    pub fn is_isotropic(&self) -> bool {
        self.isotropic
    }

    pub fn branching_ratio(&self) -> f64 {
        self.branching_ratio
    }

    pub fn l(&self) -> usize {
        self.l
    }

    /// The (normalized) density W(cos theta)
    pub fn probability(&self, cos_theta: f64) -> f64 {
        self.coefficients.iter()
            .enumerate()
            .map(|(i, a)| a * cos_theta.legendre(2 * i))
            .sum()
    }

    /// Draws cos(theta), or returns None if the decay does not happen
    /// in this sample.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Option<f64> {
        if self.isotropic {
            return Some(2.0 * rng.gen::<f64>() - 1.0);
        }

        if rng.gen::<f64>() > self.branching_ratio {
            return None;
        }

        loop {
            let cos_theta = 2.0 * rng.gen::<f64>() - 1.0;
            let test = rng.gen::<f64>();
            if test <= self.probability(cos_theta) {
                return Some(cos_theta);
            }
        }
    }
}
