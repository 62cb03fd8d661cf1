use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use mask::input::*;
use mask::nucleus::MassTable;
use mask::output::TextWriter;
use mask::pipeline;
use mask::system::*;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(InputError::file())?;

    println!("{} configuration from {}...", "Reading".bold().cyan(), path.display().to_string().bold().blue());

    let masses = MassTable::load()?;

    let mut config = Config::from_file(&path)?;
    config.with_context("constants")?;

    let control = read_control(&config)?;
    let chain = read_chain(&config)?;
    let target = Arc::new(read_target(&config, &masses)?);

    let systems = rng_streams(control.seed, control.threads)
        .into_iter()
        .map(|rng| -> Result<System, Box<dyn Error>> {
            let mut system = create_system(&chain, &masses, rng)?;
            system.bind_target(Arc::clone(&target))?;
            Ok(system)
        })
        .collect::<Result<Vec<System>, Box<dyn Error>>>()?;

    let equation = systems.first()
        .map(|s| s.system_equation().to_owned())
        .unwrap_or_default();

    println!("{} {}", "Chain:".bold(), equation.bold().bright_white());
    println!("{} {} ({} layer(s))", "Target:".bold(), target.name(), target.len());
    println!("{} {} samples on {} thread(s), seed = {}", "Running".bold().cyan(), control.samples, control.threads, control.seed);
    println!("{} events to {}", "Writing".bold().cyan(), control.output.bold().blue());

    let mut writer = TextWriter::create(&control.output, &equation)?;

    let progress = ProgressBar::new(control.samples as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{bar:40.cyan/blue} {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );

    let start = Instant::now();
    let stride = (control.samples / 1000).max(1);
    let written = pipeline::run(systems, control.samples, &mut writer, |n| {
        if n % stride == 0 {
            progress.set_position(n as u64);
        }
    });
    progress.finish_and_clear();

    let written = written?;
    writer.flush()?;

    println!(
        "{} {} events in {}.",
        "Completed".bold().bright_green(),
        written,
        PrettyDuration::from(start.elapsed()),
    );

    Ok(())
}
