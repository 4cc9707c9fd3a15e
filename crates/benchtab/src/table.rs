//! CSV rendering for result records.

use crate::error::{Error, Result};
use crate::record::{COLUMNS, ResultRecord};

/// Renders an ordered row sequence as CSV text.
///
/// The header is the comma-joined column names, unquoted; every field value
/// below it is wrapped in double quotes, numbers included. Lines end in `\n`;
/// converting to the platform line-ending convention is the persistence
/// layer's job.
///
/// # Errors
///
/// Returns [`Error::EmptyTable`] for an empty row sequence, since a table
/// with no rows has nothing to head.
pub fn render_csv(rows: &[ResultRecord]) -> Result<String> {
    if rows.is_empty() {
        return Err(Error::EmptyTable);
    }
    let mut out = COLUMNS.join(",");
    out.push('\n');
    for row in rows {
        let quoted: Vec<String> = row.values().iter().map(|v| format!("\"{v}\"")).collect();
        out.push_str(&quoted.join(","));
        out.push('\n');
    }
    Ok(out)
}
