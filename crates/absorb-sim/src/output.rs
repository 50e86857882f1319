use absorb_core::AbsorptionSpectrum;
use anyhow::{ensure, Result};
use std::io::Write;

/// Write one `frequency_hz` column followed by one absorption column per
/// named spectrum. All spectra must share the same frequencies.
pub fn write_table<W: Write>(spectra: &[(String, AbsorptionSpectrum)], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let Some((_, first)) = spectra.first() else {
        return Ok(());
    };
    for (name, spectrum) in spectra {
        ensure!(
            spectrum.frequencies == first.frequencies,
            "spectrum '{name}' was evaluated on a different grid"
        );
    }

    let mut header = vec!["frequency_hz".to_string()];
    header.extend(spectra.iter().map(|(name, _)| name.clone()));
    wtr.write_record(&header)?;

    for (i, f) in first.frequencies.iter().enumerate() {
        let mut row = Vec::with_capacity(spectra.len() + 1);
        row.push(f.to_string());
        row.extend(spectra.iter().map(|(_, s)| s.absorption[i].to_string()));
        wtr.write_record(&row)?;
    }
    wtr.flush()?;
    Ok(())
}
