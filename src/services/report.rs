use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::ReportError;
use crate::types::models::Recipient;

/// Renders the stdout total line. `{:?}` keeps the shortest exact decimal
/// form, so a total of three tokens prints as `3.0`.
pub fn total_line(total: f64) -> String {
    format!("total: {:?}", total)
}

/// Renders one ranking line: quantity zero-padded to width 9 with 4 decimal
/// places, share of total with 6 decimal places.
pub fn format_line(recipient: &Recipient, total: f64) -> String {
    format!(
        "{}: {:09.4}({:.6}%)",
        recipient.address,
        recipient.quantity,
        recipient.quantity / total * 100.0
    )
}

/// Writes the ranking report, truncating any previous file.
///
/// A non-empty ranking with a zero total would render every share as NaN, so
/// it fails before the output file is opened.
pub fn write_report(path: &Path, ranking: &[Recipient], total: f64) -> Result<(), ReportError> {
    if total == 0.0 && !ranking.is_empty() {
        return Err(ReportError::ZeroTotal(ranking.len()));
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    for recipient in ranking {
        writeln!(writer, "{}", format_line(recipient, total))?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} ranking lines to {}", ranking.len(), path.display());
    Ok(())
}
