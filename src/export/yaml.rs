//! YAML export of insight reports

use std::io::Write;

use super::export_error;
use crate::error::TallyResult;
use crate::insights::InsightReport;

/// Export an insight report as YAML, preceded by a comment header
pub fn export_insights_yaml<W: Write>(report: &InsightReport, mut writer: W) -> TallyResult<()> {
    writeln!(writer, "# Tally insight report").map_err(export_error)?;
    writeln!(writer, "# Amounts are in currency units.").map_err(export_error)?;
    writeln!(writer).map_err(export_error)?;

    serde_yaml::to_writer(writer, report).map_err(export_error)?;
    Ok(())
}
