use crate::core::models::nucleus::Nucleus;
use crate::core::models::properties::NuclearProperties;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NuclideIoError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Deserialize)]
struct NuclideRecord {
    a: i32,
    z: i32,
}

#[derive(Debug, Serialize)]
struct ReportRecord {
    nuclide: String,
    z: i32,
    n: i64,
    a: i32,
    atomic_mass_u: f64,
    radius_fm: f64,
    binding_energy_per_nucleon_mev: f64,
    beta_stable: bool,
    even_even_fission: bool,
}

impl From<&NuclearProperties> for ReportRecord {
    fn from(props: &NuclearProperties) -> Self {
        Self {
            nuclide: props.nucleus.to_string(),
            z: props.nucleus.atomic_number(),
            n: props.nucleus.neutron_number(),
            a: props.nucleus.mass_number(),
            atomic_mass_u: props.atomic_mass,
            radius_fm: props.nuclear_radius,
            binding_energy_per_nucleon_mev: props.binding_energy_per_nucleon,
            beta_stable: props.beta_stable,
            even_even_fission: props.even_even_fission,
        }
    }
}

/// Reads nuclei from a CSV table with `a` and `z` columns.
///
/// Columns are matched by header name, surrounding whitespace is trimmed and any
/// additional columns (e.g. a `name` column) are ignored.
pub fn read_nuclides<R: Read>(reader: R) -> Result<Vec<Nucleus>, NuclideIoError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut nuclei = Vec::new();
    for result in csv_reader.deserialize::<NuclideRecord>() {
        let record = result?;
        nuclei.push(Nucleus::new(record.a, record.z));
    }
    Ok(nuclei)
}

pub fn read_nuclides_from_path(path: &Path) -> Result<Vec<Nucleus>, NuclideIoError> {
    let file = File::open(path).map_err(|e| NuclideIoError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    read_nuclides(BufReader::new(file))
}

/// Writes one CSV row per evaluated nucleus, preceded by a header row.
///
/// Values are written at full precision; formatting for display is left to the reader.
pub fn write_report<W: Write>(
    writer: W,
    entries: &[NuclearProperties],
) -> Result<(), NuclideIoError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for entry in entries {
        csv_writer.serialize(ReportRecord::from(entry))?;
    }
    csv_writer.flush().map_err(|e| NuclideIoError::Csv(e.into()))?;
    Ok(())
}

pub fn write_report_to_path(
    path: &Path,
    entries: &[NuclearProperties],
) -> Result<(), NuclideIoError> {
    let file = File::create(path).map_err(|e| NuclideIoError::Io {
        path: path.to_string_lossy().to_string(),
        source: e,
    })?;
    write_report(BufWriter::new(file), entries)
}
