//! Building the run, chain and target from a configuration

use crate::nucleus::MassTable;
use crate::reaction::ThetaType;
use crate::system::{ChainParameters, StepParameters};
use crate::target::{LayeredTarget, TargetLayer};

use super::{Config, InputError, InputErrorKind};

/// How many events to generate, with how many threads, and where to
/// write them
#[derive(Clone, Debug, PartialEq)]
pub struct Control {
    pub threads: usize,
    pub samples: usize,
    pub seed: u64,
    pub output: String,
}

/// Reads the `control` and `output` sections.
/// If not given, the number of threads defaults to the available
/// parallelism and the seed is drawn at random.
pub fn read_control(config: &Config) -> Result<Control, InputError> {
    let default_threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);

    let threads: usize = config.read_or("control:threads", default_threads)?;
    if threads == 0 {
        return Err(InputError::invalid("control:threads", "at least one thread is required"));
    }

    let samples: usize = config.read("control:samples")?;
    let seed: u64 = config.read_or("control:seed", rand::random::<u64>())?;
    let output: String = config.read("output:file")?;

    Ok(Control {threads, samples, seed, output})
}

/// Reads `{mean, sigma}`, where sigma defaults to zero.
fn read_gaussian(config: &Config, path: &str, default_mean: f64) -> Result<(f64, f64), InputError> {
    let mean = config.read_or(format!("{}:mean", path), default_mean)?;
    let sigma = config.read_or(format!("{}:sigma", path), 0.0)?;
    if sigma < 0.0 {
        return Err(InputError::invalid(&format!("{}:sigma", path), "must be non-negative"));
    }
    Ok((mean, sigma))
}

/// Reads `{min, max}` in degrees.
fn read_range(config: &Config, path: &str, default: (f64, f64)) -> Result<(f64, f64), InputError> {
    let min = config.read_or(format!("{}:min", path), default.0)?;
    let max = config.read_or(format!("{}:max", path), default.1)?;
    if min > max {
        return Err(InputError::invalid(path, "min exceeds max"));
    }
    Ok((min, max))
}

fn read_step(config: &Config, index: usize) -> Result<StepParameters, InputError> {
    let root = format!("chain:steps:{}", index);

    let kind: String = config.read(format!("{}:type", root))?;
    let z: Vec<u32> = config.read(format!("{}:z", root))?;
    let a: Vec<u32> = config.read(format!("{}:a", root))?;

    let mut step = match kind.to_lowercase().as_str() {
        "reaction" => {
            let path = format!("{}:beam_energy", root);
            // no default for the beam energy
            let _: f64 = config.read(format!("{}:mean", path))?;
            let (mean, sigma) = read_gaussian(config, &path, 0.0)?;

            let theta_type: String = config.read_or(format!("{}:theta_type", root), "cm".to_owned())?;
            let theta_type = match theta_type.to_lowercase().as_str() {
                "cm" => ThetaType::CenterOfMass,
                "lab" => ThetaType::Lab,
                _ => return Err(InputError::invalid(&format!("{}:theta_type", root), "expected 'cm' or 'lab'")),
            };

            let (theta_min, theta_max) = read_range(config, &format!("{}:theta", root), (0.0, 180.0))?;
            if theta_min < 0.0 || theta_max > 180.0 {
                return Err(InputError::invalid(&format!("{}:theta", root), "polar angles must lie in [0, 180] degrees"));
            }

            StepParameters::reaction(&z, &a)
                .with_beam_energy(mean, sigma)
                .with_theta_type(theta_type)
                .with_theta(theta_min, theta_max)
        },
        "decay" => StepParameters::decay(&z, &a),
        _ => return Err(InputError::invalid(&format!("{}:type", root), "expected 'reaction' or 'decay'")),
    };

    let (phi_min, phi_max) = read_range(config, &format!("{}:phi", root), (0.0, 360.0))?;
    let (ex_mean, ex_sigma) = read_gaussian(config, &format!("{}:excitation", root), 0.0)?;
    step = step.with_phi(phi_min, phi_max).with_excitation(ex_mean, ex_sigma);

    match config.read::<String, _>(format!("{}:angular_distribution", root)) {
        Ok(path) => step = step.with_angular_distribution(&path),
        Err(e) if e.kind() == InputErrorKind::Location => {},
        Err(e) => return Err(e),
    }

    Ok(step)
}

/// Reads the `chain` section. The steps are checked for shape only when
/// the system is created.
pub fn read_chain(config: &Config) -> Result<ChainParameters, InputError> {
    let n = config.count("chain:steps")?;
    if n == 0 {
        return Err(InputError::invalid("chain:steps", "no steps given"));
    }

    let steps = (0..n)
        .map(|i| read_step(config, i))
        .collect::<Result<Vec<_>, _>>()?;

    let mut chain = ChainParameters::new(steps)
        .coupled(config.read_or("chain:coupled", false)?);
    chain.residual_eloss = config.read_or("chain:residual_eloss", true)?;

    Ok(chain)
}

/// Reads the `target` section: a sequence of layers, in the order the
/// beam crosses them.
pub fn read_target(config: &Config, masses: &MassTable) -> Result<LayeredTarget, InputError> {
    let n = config.count("target")?;
    let name: String = config.read_or("target_name", String::new())?;
    let mut target = LayeredTarget::with_name(&name);

    for i in 0..n {
        let root = format!("target:{}", i);
        let thickness: f64 = config.read(format!("{}:thickness", root))?;
        let z: Vec<u32> = config.read(format!("{}:elements:z", root))?;
        let a: Vec<u32> = config.read(format!("{}:elements:a", root))?;
        let s: Vec<u32> = config.read(format!("{}:elements:s", root))?;

        let layer = TargetLayer::new(&z, &a, &s, thickness, masses)
            .map_err(|e| InputError::invalid(&root, &e.to_string()))?;
        target.add_layer(layer);
    }

    if target.is_empty() {
        return Err(InputError::invalid("target", "no layers given"));
    }

    Ok(target)
}
