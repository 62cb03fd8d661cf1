//! Persisting sampled events

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::nucleus::Nucleus;

mod error;
pub use error::*;

/// Destination of completed events. Events arrive in no particular order.
pub trait EventSink {
    fn write_event(&mut self, nuclei: &[Nucleus]) -> Result<(), OutputError>;
}

/// Writes events as plain text: a commented header naming the chain,
/// then one line per event, with a tab-separated block of
/// `Z A KE theta phi theta_cm Ex detected` for each nucleus.
/// Energies are in MeV and angles in radians.
pub struct TextWriter<W: Write> {
    out: W,
    name: String,
    count: usize,
}

impl TextWriter<BufWriter<File>> {
    /// Creates (or truncates) the file at `path`.
    pub fn create<P: AsRef<Path>>(path: P, equation: &str) -> Result<Self, OutputError> {
        let name = path.as_ref().display().to_string();
        let file = File::create(&path).map_err(|e| OutputError::io(&name, e))?;
        Self::with_name(BufWriter::new(file), &name, equation)
    }
}

impl<W: Write> TextWriter<W> {
    pub fn new(out: W, equation: &str) -> Result<Self, OutputError> {
        Self::with_name(out, "<stream>", equation)
    }

    fn with_name(mut out: W, name: &str, equation: &str) -> Result<Self, OutputError> {
        writeln!(out, "# {}", equation)
            .and_then(|_| writeln!(out, "# per nucleus: Z A KE(MeV) theta(rad) phi(rad) theta_cm(rad) Ex(MeV) detected"))
            .map_err(|e| OutputError::io(name, e))?;

        Ok(TextWriter {
            out,
            name: name.to_owned(),
            count: 0,
        })
    }

    /// Number of events written so far
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn flush(&mut self) -> Result<(), OutputError> {
        self.out.flush().map_err(|e| OutputError::io(&self.name, e))
    }

    /// Flushes and returns the underlying writer.
    pub fn into_inner(mut self) -> Result<W, OutputError> {
        self.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> EventSink for TextWriter<W> {
    fn write_event(&mut self, nuclei: &[Nucleus]) -> Result<(), OutputError> {
        let line = nuclei.iter()
            .map(|n| n.to_string())
            .collect::<Vec<String>>()
            .join("\t");
        writeln!(self.out, "{}", line).map_err(|e| OutputError::io(&self.name, e))?;
        self.count += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nucleus::MassTable;

    #[test]
    fn text_layout() {
        let masses = MassTable::bundled().unwrap();
        let alpha = Nucleus::new(2, 4, &masses).unwrap();
        let mut proton = Nucleus::new(1, 1, &masses).unwrap();
        proton.set_spherical(0.5, 1.0, 100.0, (100.0f64.powi(2) + proton.ground_state_mass.powi(2)).sqrt());

        let mut writer = TextWriter::new(Vec::new(), "8Be->4He+4He").unwrap();
        writer.write_event(&[alpha.clone(), proton.clone()]).unwrap();
        writer.write_event(&[alpha, proton]).unwrap();
        assert_eq!(writer.count(), 2);

        let text = String::from_utf8(writer.into_inner().unwrap()).unwrap();
        println!("{}", text);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "# 8Be->4He+4He");

        let fields: Vec<&str> = lines[2].split('\t').collect();
        assert_eq!(fields.len(), 16);
        assert_eq!(fields[0], "2");
        assert_eq!(fields[8], "1");
        assert!((fields[11].parse::<f64>().unwrap() - 0.5).abs() < 1.0e-6);
    }
}
