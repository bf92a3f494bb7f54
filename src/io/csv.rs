use std::io::{self, Write};
use std::path::Path;

use crate::sweep::SweepPoint;

use super::writer_for_path;

/// Write sweep results to CSV.
///
/// Columns: l1_m, l2_m, l3_m, mf1, mf2, mf3, dv1, dv2, dv3, total_dv
pub fn write_sweep<W: Write>(writer: &mut W, points: &[SweepPoint]) -> io::Result<()> {
    writeln!(writer, "l1_m,l2_m,l3_m,mf1,mf2,mf3,dv1,dv2,dv3,total_dv")?;

    for p in points {
        writeln!(
            writer,
            "{:.3},{:.3},{:.3},{:.6},{:.6},{:.6},{:.2},{:.2},{:.2},{:.2}",
            p.lengths_m[0],
            p.lengths_m[1],
            p.lengths_m[2],
            p.result.mass_fractions[0],
            p.result.mass_fractions[1],
            p.result.mass_fractions[2],
            p.result.stage_delta_vs[0],
            p.result.stage_delta_vs[1],
            p.result.stage_delta_vs[2],
            p.result.total_delta_v,
        )?;
    }

    Ok(())
}

/// Write sweep results to a CSV file at the given path, `-` meaning stdout.
pub fn write_sweep_file(path: &Path, points: &[SweepPoint]) -> io::Result<()> {
    let mut writer = writer_for_path(path)?;
    write_sweep(&mut writer, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PhysicalConstants;
    use crate::sweep::{sweep_three_stage, SweepConfig};

    #[test]
    fn csv_output_has_header_and_rows() {
        let c = PhysicalConstants::default();
        let config = SweepConfig {
            grid_steps: 4,
            ..SweepConfig::default()
        };
        let points = sweep_three_stage(&config, &c);

        let mut buf = Vec::new();
        write_sweep(&mut buf, &points).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert!(lines[0].starts_with("l1_m,"));
        assert_eq!(lines.len(), points.len() + 1);
        assert_eq!(lines[1].split(',').count(), 10);
    }
}
