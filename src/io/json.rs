use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::calc::DesignReport;

use super::writer_for_path;

/// Errors from the JSON report surface.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write a design report as pretty-printed JSON.
pub fn write_report<W: Write>(writer: &mut W, report: &DesignReport) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Write a design report to a path, `-` meaning stdout.
pub fn write_report_file(path: &Path, report: &DesignReport) -> Result<(), ExportError> {
    let mut writer = writer_for_path(path)?;
    write_report(&mut writer, report)?;
    debug!(path = %path.display(), "wrote report");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::evaluate;
    use crate::input::InputRecord;
    use crate::model::PhysicalConstants;

    #[test]
    fn report_serializes_both_configurations() {
        let c = PhysicalConstants::default();
        let input = InputRecord::from_lengths([10.0, 8.0, 6.0], [12.0, 6.0, 0.0]);
        let report = evaluate(&input, &c);

        let mut buf = Vec::new();
        write_report(&mut buf, &report).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert!(json["three_stage"]["delta_v"].is_number());
        assert_eq!(json["three_stage"]["stage_delta_vs"].as_array().unwrap().len(), 3);
        assert_eq!(json["pop_out"]["stage_delta_vs"].as_array().unwrap().len(), 2);
        assert!(json["pop_out"]["tanks"][0]["propellant_lb"].is_number());
    }
}
