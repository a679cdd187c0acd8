//! Writers for swept Bode datasets.
//!
//! The plain-text format is the contract downstream plotting tools consume:
//! one line per sample, space-separated, ordered by increasing frequency.
//! The CSV writer is a full-precision alternative with a header row.

use std::io;
use std::io::Write;

use crate::sweep::BodePoint;

/// Writes points as `"<frequency> <magnitude_dB> <phase_degrees>"` lines.
///
/// Frequency and magnitude use scientific notation with two decimals, phase
/// fixed-point with two decimals. Non-finite fields render as `inf`/`NaN`
/// rather than failing. The first sink error aborts the write and is
/// returned.
pub fn write_bode_text<W: Write>(mut w: W, points: &[BodePoint]) -> io::Result<()> {
    for p in points {
        writeln!(w, "{:.2e} {:.2e} {:.2}", p.frequency_hz, p.magnitude_db, p.phase_deg)?;
    }
    Ok(())
}

/// Writes points as full-precision CSV with a header row.
pub fn write_bode_csv<W: Write>(mut w: W, points: &[BodePoint]) -> io::Result<()> {
    writeln!(w, "frequency_hz,magnitude_db,phase_deg")?;
    for p in points {
        writeln!(
            w,
            "{:.16e},{:.16e},{:.16e}",
            p.frequency_hz, p.magnitude_db, p.phase_deg
        )?;
    }
    Ok(())
}
