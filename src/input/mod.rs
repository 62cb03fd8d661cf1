//! Parse input configuration file

use std::path::Path;
use yaml_rust::{YamlLoader, yaml::Yaml};
use evalexpr::*;

use crate::constants::*;

mod error;
mod types;
mod timing;
mod chain;

pub use error::*;
use types::*;
pub use timing::*;
pub use chain::*;

/// Represents the input configuration, which defines values
/// for simulation parameters, and any automatic values
/// for those parameters.
pub struct Config {
    input: Yaml,
    ctx: HashMapContext,
}

impl Config {
    /// Loads a configuration file.
    /// Fails if the file cannot be opened or if it is not
    /// YAML-formatted.
    pub fn from_file(path: &Path) -> Result<Self, InputError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|_| InputError::file())?;
        Self::from_string(&contents)
    }

    /// Loads a YAML configuration from a string.
    /// Fails if the string is not formatted correctly.
    pub fn from_string(s: &str) -> Result<Self, InputError> {
        let input = YamlLoader::load_from_str(s)
            .map_err(|_| InputError::file())?;
        let input = input.first()
            .ok_or(InputError::file())?;

        Ok(Config {
            input: input.clone(),
            ctx: HashMapContext::new(),
        })
    }

    /// Loads automatic values for constants, units and special functions.
    /// Energies are in MeV, masses in MeV, thicknesses in ug/cm^2 and
    /// angles in degrees, so that e.g. `500 * keV` and `0.5 * rad` are
    /// understood.
    /// Also loads and evaluates mathematical expressions
    /// that are given in the specified `section`.
    pub fn with_context(&mut self, section: &str) -> Result<&mut Self, InputError> {
        use helper::context_function;

        let mut ctx = context_map! {
            "pi" => std::f64::consts::PI,
            "degree" => 1.0,
            "rad" => 1.0 / DEG_TO_RAD,
            "keV" => 1.0e-3,
            "MeV" => 1.0,
            "GeV" => 1.0e3,
            "amu" => AMU_MEV,
            "me" => ELECTRON_MASS_U * AMU_MEV,
            "mp" => PROTON_MASS_MEV,
            "ug" => 1.0,
            "mg" => 1.0e3,
        }.map_err(|_| InputError::conversion(section, "default context"))?;

        context_function!(ctx, "sqrt",   f64::sqrt);
        context_function!(ctx, "abs",    f64::abs);
        context_function!(ctx, "exp",    f64::exp);
        context_function!(ctx, "ln",     f64::ln);
        context_function!(ctx, "sin",    f64::sin);
        context_function!(ctx, "cos",    f64::cos);
        context_function!(ctx, "tan",    f64::tan);
        context_function!(ctx, "asin",   f64::asin);
        context_function!(ctx, "acos",   f64::acos);
        context_function!(ctx, "atan",   f64::atan);
        context_function!(ctx, "atan2",  f64::atan2, 2);
        context_function!(ctx, "floor",  f64::floor);
        context_function!(ctx, "ceil",   f64::ceil);
        context_function!(ctx, "round",  f64::round);

        self.ctx = ctx;

        // Read in from 'constants' block if it exists
        if self.input[section].is_badvalue() {
            return Ok(self);
        }

        let block = self.input[section].as_hash()
            .ok_or_else(|| InputError::conversion(section, section))?;

        for (a, b) in block {
            // grab the value, if possible
            let (key, value) = match (a, b) {
                (Yaml::String(k), Yaml::Integer(i)) => (Some(k), Some(*i as f64)),
                (Yaml::String(k), Yaml::Real(s)) => (Some(k), s.parse::<f64>().ok()),
                (Yaml::String(k), Yaml::String(s)) => (Some(k), eval_number_with_context(s, &self.ctx).ok()),
                _ => (None, None),
            };

            // insert it into the context so it's available for the next read
            match (key, value) {
                (Some(k), Some(v)) => {
                    self.ctx.set_value(k.clone(), Value::from(v))
                        .map_err(|_| {
                            log::error!("Failed to insert {} = {} from constants block into context.", k, v);
                            InputError::conversion(section, k)
                        })?
                },
                // found a key, value pair but parsing failed
                (Some(k), None) => return Err(InputError::conversion(section, k)),
                _ => {},
            }
        }

        Ok(self)
    }

    /// Follows a colon-separated path to a node. Numeric components
    /// index into sequences.
    fn locate(&self, path: &str) -> Result<&Yaml, InputError> {
        path.split(':')
            .try_fold(&self.input, |y, s| {
                let next = match (y, s.parse::<usize>()) {
                    (Yaml::Array(_), Ok(i)) => &y[i],
                    _ => &y[s],
                };
                if next.is_badvalue() {
                    Err(InputError::location(path, s))
                } else {
                    Ok(next)
                }
            })
    }

    /// Locates a key-value pair in the configuration file and attempts
    /// to parse the value as the specified type.
    /// The path to the key-value pair is specified by a string of colon-separated
    /// sections, e.g. `'section:subsection:subsubsection:key'`.
    /// Sequence elements are selected by index, e.g. `'chain:steps:0:type'`.
    pub fn read<T, S>(&self, path: S) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        let path = path.as_ref();
        let key = path.rsplit(':').next().unwrap_or(path);
        self.locate(path)
            .and_then(|arg| T::from_yaml(arg.clone(), &self.ctx).map_err(|_| InputError::conversion(path, key)))
    }

    /// Like `Config::read`, but returns `default` if the key is absent.
    /// A key that is present but cannot be parsed is still an error.
    pub fn read_or<T, S>(&self, path: S, default: T) -> Result<T, InputError>
    where
        T: FromYaml,
        S: AsRef<str>,
    {
        match self.read(path) {
            Err(e) if e.kind() == InputErrorKind::Location => Ok(default),
            result => result,
        }
    }

    /// Number of elements in the sequence at `path`
    pub fn count<S: AsRef<str>>(&self, path: S) -> Result<usize, InputError> {
        let path = path.as_ref();
        match self.locate(path)? {
            Yaml::Array(array) => Ok(array.len()),
            _ => Err(InputError::conversion(path, "sequence")),
        }
    }
}

mod helper {
    macro_rules! context_function {
        ($ctx:expr, $name:literal, $func:expr) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let x = arg.as_number()?;
                    Ok(Value::Float($func(x)))
                })
            ).map_err(|_| InputError::conversion("default context", $name))?
        };
        ($ctx:expr, $name:literal, $func:expr, 2) => {
            $ctx.set_function(
                $name.to_string(),
                Function::new(|arg| {
                    let arg = arg.as_fixed_len_tuple(2)?;
                    let x = arg[0].as_number()?;
                    let y = arg[1].as_number()?;
                    Ok(Value::Float($func(x, y)))
                })
            ).map_err(|_| InputError::conversion("default context", $name))?
        };
    }

    pub(super) use context_function;
}
