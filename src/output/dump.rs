//! Plain-text dumps of an event
//!
//! - nucleon coordinates: one `x y z` line per nucleon, for scatter plots
//! - entropy density table: two `%` header lines, then `field[i][j]` rows
//! - eccentricity: `order value` lines appended across events
//!
//! Numbers are written in C-stream general (`%g`) notation right-aligned in
//! fixed-width columns, so the files drop into the usual plotting scripts.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::simulation::engine::CollisionRecord;
use crate::simulation::error::GlauberResult;
use crate::simulation::field::EntropyField;
use crate::simulation::nucleus::Nucleus;

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// `%g` formatting with `precision` significant digits
pub fn format_general(value: f64, precision: usize) -> String {
    let p = precision.max(1);
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    let sci = format!("{:.*e}", p - 1, value);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => (sci.clone(), 0),
    };

    if exp < -4 || exp >= p as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(&mantissa), sign, exp.abs())
    } else {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

pub fn write_nucleons<W: Write>(out: &mut W, nucleus: &Nucleus) -> std::io::Result<()> {
    for n in nucleus.nucleons() {
        writeln!(
            out,
            "{:>16}{:>16}{:>16}",
            format_general(n.x.x, 10),
            format_general(n.x.y, 10),
            format_general(n.x.z, 10)
        )?;
    }
    Ok(())
}

pub fn write_entropy<W: Write>(out: &mut W, field: &EntropyField, record: &CollisionRecord) -> std::io::Result<()> {
    let grid = field.grid();
    writeln!(
        out,
        "% x, y from: {} to {}, with step: {}",
        format_general(grid.lower, 6),
        format_general(grid.upper, 6),
        format_general(grid.step, 6)
    )?;
    writeln!(
        out,
        "% # of wounded nucleons: {}; # of binary collisions: {}",
        record.wounded_count(),
        record.collision_count()
    )?;
    for i in 0..field.size() {
        for v in field.row(i) {
            write!(out, "{:>16}", format_general(*v, 8))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_eccentricity<W: Write>(out: &mut W, order: u32, ecc: f64) -> std::io::Result<()> {
    writeln!(out, "{:>8}{:>15}", order, format_general(ecc, 8))
}

pub fn nucleus_path(dir: &Path, which: usize, mass_number: u32, event: u64) -> PathBuf {
    dir.join(format!("Nucleus{which}_A_{mass_number}_event_{event}.dat"))
}

pub fn entropy_path(dir: &Path, mass_number: u32, event: u64) -> PathBuf {
    dir.join(format!("Sd_A_{mass_number}_event_{event}.dat"))
}

pub fn eccentricity_path(dir: &Path, mass_number: u32, order: u32) -> PathBuf {
    dir.join(format!("Ecc_A_{mass_number}_order_{order}.dat"))
}

pub fn dump_nucleons(path: &Path, nucleus: &Nucleus) -> GlauberResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_nucleons(&mut out, nucleus)?;
    out.flush()?;
    Ok(())
}

pub fn dump_entropy(path: &Path, field: &EntropyField, record: &CollisionRecord) -> GlauberResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    write_entropy(&mut out, field, record)?;
    out.flush()?;
    Ok(())
}

/// Append one line per value to the order's eccentricity file
pub fn append_eccentricities(path: &Path, order: u32, values: &[f64]) -> GlauberResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);
    for &ecc in values {
        write_eccentricity(&mut out, order, ecc)?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::field::GridSpec;
    use crate::simulation::states::{NVec2, NVec3};

    #[test]
    fn general_format_matches_c_streams() {
        assert_eq!(format_general(0.1, 6), "0.1");
        assert_eq!(format_general(-13.0, 6), "-13");
        assert_eq!(format_general(0.3, 8), "0.3");
        assert_eq!(format_general(1e-5, 8), "1e-05");
        assert_eq!(format_general(123456789.0, 8), "1.2345679e+08");
        assert_eq!(format_general(0.488602511902919, 10), "0.4886025119");
        assert_eq!(format_general(99999.96, 6), "100000");
        assert_eq!(format_general(999999.6, 6), "1e+06");
    }

    #[test]
    fn nucleon_lines_are_three_columns() {
        let nucleus = Nucleus::from_positions(0.5, &[NVec3::new(1.5, -2.0, 0.0)]);
        let mut buf = Vec::new();
        write_nucleons(&mut buf, &nucleus).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, format!("{:>16}{:>16}{:>16}\n", "1.5", "-2", "0"));
    }

    #[test]
    fn entropy_table_layout() {
        let grid = GridSpec::new(-1.0, 1.0, 1.0).unwrap();
        let mut field = EntropyField::zeros(grid);
        field.set(0, 2, 0.7);
        let record = CollisionRecord {
            binary_collisions: vec![NVec2::zeros()],
            wounded: vec![NVec2::zeros(), NVec2::zeros()],
            wounded_per_nucleus: [1, 1],
        };
        let mut buf = Vec::new();
        write_entropy(&mut buf, &field, &record).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "% x, y from: -1 to 1, with step: 1");
        assert_eq!(lines[1], "% # of wounded nucleons: 2; # of binary collisions: 1");
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], format!("{:>16}{:>16}{:>16}", "0", "0", "0.7"));
    }

    #[test]
    fn eccentricity_line() {
        let mut buf = Vec::new();
        write_eccentricity(&mut buf, 2, 0.123456789).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{:>8}{:>15}\n", 2, "0.12345679"));
    }
}
